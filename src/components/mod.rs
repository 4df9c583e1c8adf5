//! UI components built with Leptos.
//!
//! - [`router`] - History-based routing (main entry point)
//! - [`explorer`] - File browser UI
//! - [`icons`] - Centralized icon definitions
//! - [`status`] - Footer with counts, user and backend version

pub mod explorer;
pub mod icons;
pub mod router;
pub mod status;

pub use router::AppRouter;
