//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileEntry`], [`Listing`], [`AccessInfo`] - Directory listing wire types
//! - [`FileInfo`], [`SysInfo`], [`UserInfo`] - Auxiliary endpoint responses
//! - [`FileIcon`] - Icon category per entry
//! - [`Crumb`], [`PreviewState`], [`Dialog`], [`Upload`] - Explorer view types
//! - [`Route`] - History-based navigation

mod entry;
mod explorer;
mod route;

pub use entry::{
    AccessInfo, EntryKind, FileEntry, FileIcon, FileInfo, Listing, SysInfo, UserInfo,
    extension_of,
};
pub use explorer::{
    Crumb, Dialog, MtimeFormat, PreviewKind, PreviewState, Upload, UploadStatus,
};
pub use route::Route;
