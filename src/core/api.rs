//! Typed requests against the file server.
//!
//! Each function issues exactly one request and resolves to the decoded
//! payload or a [`FetchError`]. URL construction is kept in small pure
//! helpers so it can be tested without a browser.

use web_sys::{File, FormData};

use crate::config::{INFO_PREFIX, SYSINFO_URL, UPLOAD_FIELD, USER_URL};
use crate::core::error::FetchError;
use crate::models::{FileInfo, Listing, Route, SysInfo, UserInfo};
use crate::utils::url::{encode_path_segment, path_join};
use crate::utils::{delete, fetch_content, fetch_json, post_empty, post_form};

// =============================================================================
// URLs
// =============================================================================

/// URL of an entry `name` inside directory `dir`.
pub fn entry_url(dir: &str, name: &str) -> String {
    path_join(&["/", dir, &encode_path_segment(name)])
}

/// `/-/info` URL for an (encoded) server path.
pub fn info_url(path: &str) -> String {
    path_join(&[INFO_PREFIX, path])
}

/// URL of the raw content behind a server path reported by `/-/info`.
pub fn raw_url(server_path: &str) -> String {
    path_join(&["/", &encode_path_segment(server_path)])
}

// =============================================================================
// Requests
// =============================================================================

pub async fn fetch_listing(route: &Route) -> Result<Listing, FetchError> {
    fetch_json(&route.listing_url()).await
}

pub async fn fetch_info(path: &str) -> Result<FileInfo, FetchError> {
    fetch_json(&info_url(path)).await
}

/// `/-/info` response as loose JSON, for display.
pub async fn fetch_info_json(path: &str) -> Result<serde_json::Value, FetchError> {
    fetch_json(&info_url(path)).await
}

pub async fn fetch_sysinfo() -> Result<SysInfo, FetchError> {
    fetch_json(SYSINFO_URL).await
}

/// Signed-in user; `Ok(None)` when the server answers `null`.
pub async fn fetch_user() -> Result<Option<UserInfo>, FetchError> {
    fetch_json(USER_URL).await
}

pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    fetch_content(url).await
}

pub async fn make_directory(dir: &str, name: &str) -> Result<(), FetchError> {
    post_empty(&entry_url(dir, name)).await.map(|_| ())
}

pub async fn delete_entry(dir: &str, name: &str) -> Result<(), FetchError> {
    delete(&entry_url(dir, name)).await.map(|_| ())
}

/// Upload one file into `dir` as a multipart form.
///
/// `on_progress` receives the percentage of the body sent so far.
pub async fn upload_file(
    dir: &str,
    file: &File,
    on_progress: impl Fn(u8) + 'static,
) -> Result<(), FetchError> {
    let form = FormData::new().map_err(|_| FetchError::Network("FormData unavailable".into()))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|_| FetchError::Network(format!("cannot attach {}", file.name())))?;
    post_form(&path_join(&["/", dir]), form, on_progress)
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url() {
        assert_eq!(entry_url("/docs/", "new dir"), "/docs/new%20dir");
        assert_eq!(entry_url("/", "a"), "/a");
        assert_eq!(entry_url("docs", "a#1"), "/docs/a%231");
    }

    #[test]
    fn test_info_url() {
        assert_eq!(info_url("/docs/a.txt"), "/-/info/docs/a.txt");
        assert_eq!(info_url("/"), "/-/info/");
    }

    #[test]
    fn test_raw_url() {
        assert_eq!(raw_url("docs/a b.txt"), "/docs/a%20b.txt");
        assert_eq!(raw_url("/docs/x"), "/docs/x");
    }
}
