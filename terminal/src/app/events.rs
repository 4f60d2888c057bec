//! # Application Events
//!
//! Events sent from async tasks back to the main thread. Every fetch result
//! carries the sequence number issued by [`FetchSlot::begin`] so the handler
//! can discard responses that were superseded while in flight.
//!
//! [`FetchSlot::begin`]: crate::app::state::FetchSlot::begin

use crate::app::state::DashboardData;
use shared::{Armor, Boss, ClassDef, HealthStatus, Page, Weapon};

/// Async task results delivered over the event channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A weapons page fetch completed.
    WeaponsPage {
        seq: u64,
        result: Result<Page<Weapon>, String>,
    },
    /// A build-recommendation fetch completed.
    WeaponsByBuild {
        seq: u64,
        result: Result<Vec<Weapon>, String>,
    },
    /// The distinct weapon category list arrived.
    WeaponCategories {
        seq: u64,
        result: Result<Vec<String>, String>,
    },
    /// An armors page fetch completed.
    ArmorsPage {
        seq: u64,
        result: Result<Page<Armor>, String>,
    },
    /// A bosses page fetch completed.
    BossesPage {
        seq: u64,
        result: Result<Page<Boss>, String>,
    },
    /// A classes page fetch completed.
    ClassesPage {
        seq: u64,
        result: Result<Page<ClassDef>, String>,
    },
    /// The combined dashboard load completed, all five requests or nothing.
    DashboardLoaded {
        seq: u64,
        result: Result<DashboardData, String>,
    },
    /// A backend health probe answered.
    HealthChecked(Result<HealthStatus, String>),
}
