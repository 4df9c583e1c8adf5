//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_content`] and friends - HTTP with typed errors
//! - [`markdown_to_html`], [`text_to_html`] - Sanitized preview rendering
//! - [`render_svg`] - QR codes for install links
//! - [`url`] - `encodeURI`-compatible path helpers

pub mod dom;
mod fetch;
pub mod format;
mod markdown;
mod qr;
pub mod url;

pub use fetch::{delete, fetch_content, fetch_json, post_empty, post_form};
pub use markdown::{markdown_to_html, text_to_html};
pub use qr::render_svg;
