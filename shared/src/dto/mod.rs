//! # Data Transfer Objects (DTOs)
//!
//! All data structures crossing the REST boundary between the terminal and
//! the game-data backend.
//!
//! ## Module Organization
//!
//! - [`weapons`] - Weapons, attack stats, attribute requirements, scaling
//! - [`armors`] - Armor pieces
//! - [`bosses`] - Bosses with region, tier, and drop-derived flags
//! - [`classes`] - Starting classes and their stat spreads
//! - [`page`] - `{items, total}` list envelope and list query parameters
//! - [`stats`] - Weapon statistics aggregation, comparisons, health probe
//!
//! ## Example payload
//!
//! ```text
//! GET /api/v1/bosses?name=Margit&skip=0&limit=20
//!
//! {
//!   "items": [
//!     {
//!       "id": "507f1f77bcf86cd799439011",
//!       "name": "Margit, the Fell Omen",
//!       "region": "Limgrave",
//!       "boss_tier": "Minor",
//!       "has_great_rune": false,
//!       "has_remembrance": false
//!     }
//!   ],
//!   "total": 1,
//!   "skip": 0,
//!   "limit": 20
//! }
//! ```

pub mod armors;
pub mod bosses;
pub mod classes;
pub mod page;
pub mod stats;
pub mod weapons;
