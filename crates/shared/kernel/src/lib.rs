//! Kernel utilities shared across the applications.
//! Keep this crate lightweight; today it only hosts the layered configuration loader.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! # #[cfg(not(target_arch = "wasm32"))]
//! # {
//! use atlas_kernel::config::load_app_config;
//!
//! let cfg = load_app_config(None::<&str>).expect("valid configuration");
//! assert!(cfg.api.base_url.starts_with("http"));
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
