//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`Toolbar`] - Navigation, search and directory actions
//! - [`PathBar`] - Clickable breadcrumb trail
//! - [`FileList`] - Table of directory entries
//! - [`PreviewPanel`] - README or single-file preview
//! - [`DialogHost`] - QR code and file info modals
//! - [`UploadPanel`] - Progress of dropped or picked uploads

mod dialog;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod pathbar;
mod preview;
mod uploads;

pub use dialog::DialogHost;
pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Toolbar;
pub use pathbar::PathBar;
pub use preview::PreviewPanel;
pub use uploads::UploadPanel;
