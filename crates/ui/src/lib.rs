//! # UI
//!
//! Routes, pages and components shared by the desktop and web applications.
//!
//! The host application provides two contexts before launching [`App`]:
//! * [`atlas_domain::config::AtlasConfig`]
//! * [`atlas_countries::CountryClient`]

mod app;
mod components;
mod pages;
mod storage;

pub use crate::app::{App, Route};

/// Stylesheet injected by [`App`].
pub const MAIN_CSS: &str = include_str!("../assets/main.css");
