//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, the API transport, the
//! notification presenter, the service handoff store and the site state.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use gway_kernel::config::load_config;
//! use gway_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("site")).unwrap_or_default();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod handoff;
pub mod http;
pub mod notify;
pub mod prelude;
pub mod state;

pub use gway_domain as domain;
