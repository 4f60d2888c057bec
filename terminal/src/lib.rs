//! # Erdtree Terminal - Library Root
//!
//! A native desktop data browser for an Elden Ring game-data REST API.
//! This library crate contains all modules used by the binary crate
//! (`main.rs`).
//!
//! ## Features
//!
//! - **Explorers**: Paginated, name-filterable views of weapons, armors,
//!   bosses, and starting classes
//! - **Dashboard**: Catalogue totals, category and boss-tier charts, weapon
//!   averages, top-damage ranking, great-rune and remembrance boss lists
//! - **Native GUI Window**: egui/eframe, no browser required
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui_plot     - Charts and plotting                   │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON, /api/v1)
//!          ▼
//! ┌─────────────────────────┐
//! │  Game data REST API     │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state, events, handlers, and async fetch tasks
//! - **core**: Error types, configuration, and the service trait
//! - **services**: Backend HTTP client, one module per resource
//! - **ui**: Rendering (screens, widgets, charts, theme)
//! - **utils**: Tokio runtime bridge
//!
//! ## Core Concepts
//!
//! The main thread handles input and rendering; async tasks do network I/O
//! on a shared Tokio runtime and report back over an async channel. State
//! lives in `Arc<RwLock<AppState>>` and is locked briefly on both sides.
//! Every fetch target tracks a monotonic sequence so late responses from
//! superseded requests are discarded instead of overwriting fresher data.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, Result};
