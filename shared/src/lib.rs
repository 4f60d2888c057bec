//! # Shared Data Transfer Objects Library
//!
//! This library types the contract between the terminal client and the
//! game-data REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::weapons`]**: Weapon records and their stat blocks
//!   - **[`dto::armors`]**: Armor records
//!   - **[`dto::bosses`]**: Boss records with tier and drop flags
//!   - **[`dto::classes`]**: Starting-class records and character stats
//!   - **[`dto::page`]**: Pagination envelope and list query parameters
//!   - **[`dto::stats`]**: Aggregated weapon statistics and comparisons
//! - **[`de`]**: Deserialization adapters shared by the DTOs
//!
//! ## Wire Format
//!
//! - Field names are snake_case except where the backend uses camelCase
//!   (`requiredAttributes`, `scalesWith`, `healthPoints`), handled with
//!   `#[serde(rename)]`.
//! - Optional fields tolerate absence with `#[serde(default)]` and are
//!   omitted from JSON when `None`.
//! - Every record exposes a stable display key: the document id when the
//!   backend supplies one, otherwise the record name.

pub mod de;
pub mod dto;

// Convenience re-exports for the most frequently used types
pub use dto::armors::Armor;
pub use dto::bosses::{Boss, UNCLASSIFIED_TIER};
pub use dto::classes::{CharacterStats, ClassDef};
pub use dto::page::{NameFilter, Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use dto::stats::{
    AvgWeaponStats, CompareRequest, HealthStatus, TopDamageEntry, WeaponComparison,
    WeaponStatistics,
};
pub use dto::weapons::{AttackStats, BuildType, RequirementStats, ScalingStats, Weapon};
