//! Core view-model logic for the file browser.
//!
//! This module provides:
//! - [`ViewState`] and [`Msg`], the single state object and its updates
//! - [`breadcrumb`], [`listing`], [`names`], [`install`], [`preview`] - pure helpers
//! - [`api`] - typed requests against the file server
//! - [`actions`] - user operations composed from the above

pub mod actions;
pub mod api;
pub mod breadcrumb;
pub mod error;
pub mod install;
pub mod listing;
pub mod names;
pub mod preview;
mod state;

pub use state::{Msg, ViewState};
