//! History-based routing.
//!
//! The browser location is the source of truth: the pathname names the
//! directory (or file in preview mode) and the query string carries
//! `search` / `raw` flags, which are forwarded to the backend unchanged.

use crate::config::{LISTING_QUERY, RAW_PARAM, SEARCH_PARAM};
use crate::utils::url::{decode_uri, encode_path_segment, path_join, query_param};

/// Current location: pathname plus raw query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Encoded pathname, always starting with `/`
    pub path: String,
    /// Raw query string including the leading `?`, or empty
    pub search: String,
}

impl Route {
    /// Parse a request URI such as `/dir/sub?search=x`.
    pub fn from_uri(uri: &str) -> Self {
        let (path, search) = match uri.find('?') {
            Some(idx) => (&uri[..idx], &uri[idx..]),
            None => (uri, ""),
        };
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            search: search.to_string(),
        }
    }

    /// Route for `path` keeping this route's query string.
    pub fn with_path(&self, path: &str) -> Self {
        Self::from_uri(&format!("{}{}", path, self.search))
    }

    /// Route for a child entry of this directory.
    pub fn join(&self, name: &str) -> Self {
        self.with_path(&path_join(&[&self.path, &encode_path_segment(name)]))
    }

    /// Full request URI (`path` + `search`).
    pub fn uri(&self) -> String {
        format!("{}{}", self.path, self.search)
    }

    /// Decoded pathname for display.
    pub fn display_path(&self) -> String {
        decode_uri(&self.path)
    }

    /// URL of the JSON listing for this route.
    pub fn listing_url(&self) -> String {
        let sep = if self.search.is_empty() { '?' } else { '&' };
        format!("{}{}{}", self.uri(), sep, LISTING_QUERY)
    }

    /// Value of a query parameter, decoded, with `+` read as space.
    pub fn param(&self, name: &str) -> Option<String> {
        query_param(&self.search, name)
    }

    /// Search term, if the page shows search results.
    pub fn search_term(&self) -> Option<String> {
        self.param(SEARCH_PARAM)
    }

    /// `raw=false` renders the file at `path` instead of listing a directory.
    pub fn is_preview_mode(&self) -> bool {
        self.param(RAW_PARAM).as_deref() == Some("false")
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let path = location
            .as_ref()
            .and_then(|l| l.pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        let search = location
            .as_ref()
            .and_then(|l| l.search().ok())
            .unwrap_or_default();
        Self::from_uri(&format!("{}{}", path, search))
    }

    /// Update browser URL to match this route (using pushState).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&self.uri()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_uri() {
        assert_eq!(
            Route::from_uri("/a/b?search=x"),
            Route {
                path: "/a/b".to_string(),
                search: "?search=x".to_string(),
            }
        );
        assert_eq!(Route::from_uri("").path, "/");
        assert_eq!(Route::from_uri("a").path, "/a");
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(Route::from_uri("/docs").listing_url(), "/docs?json=true");
        assert_eq!(
            Route::from_uri("/docs?search=foo").listing_url(),
            "/docs?search=foo&json=true"
        );
    }

    #[test]
    fn test_join_keeps_query() {
        let route = Route::from_uri("/docs/?search=x");
        let child = route.join("guide");
        assert_eq!(child.path, "/docs/guide");
        assert_eq!(child.search, "?search=x");
        assert_eq!(child.uri(), "/docs/guide?search=x");
        assert_eq!(route.join("a b").path, "/docs/a%20b");
    }

    #[test]
    fn test_preview_mode() {
        assert!(Route::from_uri("/a.txt?raw=false").is_preview_mode());
        assert!(!Route::from_uri("/a.txt?raw=true").is_preview_mode());
        assert!(!Route::from_uri("/a.txt").is_preview_mode());
    }

    #[test]
    fn test_search_term_and_display_path() {
        let route = Route::from_uri("/my%20docs?search=hello+world");
        assert_eq!(route.search_term().as_deref(), Some("hello world"));
        assert_eq!(route.display_path(), "/my docs");
    }
}
