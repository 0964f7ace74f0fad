//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or UI code. Just data and simple helpers.
//!
//! * [`country`]: the record served by the REST Countries API.
//! * [`catalog`]: the static continents, sub-regions and map styles the UI navigates.
//! * [`format`] and [`search`]: presentation helpers shared by every view.

pub mod catalog;
pub mod config;
pub mod country;
pub mod format;
pub mod search;

/// The single preference key persisted by the UI.
pub const MAP_PREFERENCE_KEY: &str = "selectedWorldMap";
