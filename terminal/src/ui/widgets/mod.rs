//! # Reusable Widgets
//!
//! Shared UI building blocks used across the explorer screens.

pub mod cards;
pub mod filter_bar;
pub mod pagination;
pub mod status;
pub mod tables;
