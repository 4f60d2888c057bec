/// Global Tokio runtime for async HTTP operations
///
/// eframe owns the main thread and drives the UI loop, but reqwest requires
/// a tokio runtime. This static runtime bridges the two by:
/// 1. Providing a tokio context for reqwest to execute in
/// 2. Sending results back to the main thread over the app event channel
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     let result = some_async_operation().await;
///     let _ = event_tx.send(AppEvent::from(result)).await;
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
