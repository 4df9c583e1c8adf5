//! Install, download and QR links for listing entries.

use crate::config::{DOWNLOAD_QUERY, IPA_LINK_PREFIX, QR_EXTENSIONS};
use crate::models::extension_of;
use crate::utils::url::{decode_uri, path_join};

/// Scheme and authority of the page, e.g. `https:` + `files.example.com:8000`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    /// Protocol including the trailing colon, as `location.protocol` reports it
    pub protocol: String,
    /// Host with optional port
    pub host: String,
}

impl Origin {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Read the origin of the current page.
    pub fn current() -> Option<Self> {
        let location = web_sys::window()?.location();
        Some(Self::new(location.protocol().ok()?, location.host().ok()?))
    }

    /// `protocol//host`, as `location.origin` would report it.
    pub fn url(&self) -> String {
        format!("{}//{}", self.protocol, self.host)
    }
}

/// Absolute, unencoded URL for installing `name` from directory `pathname`.
///
/// With no name the directory itself is linked. iOS packages are routed
/// through the server's install-link indirection so the device receives a
/// manifest instead of the raw archive.
pub fn install_url(origin: &Origin, pathname: &str, name: Option<&str>) -> String {
    let pathname = decode_uri(pathname);
    let joined = match name {
        None => path_join(&[&origin.host, &pathname]),
        Some(name) if extension_of(name) == "ipa" => {
            path_join(&[&origin.host, IPA_LINK_PREFIX, &pathname, name])
        }
        Some(name) => path_join(&[&origin.host, &pathname, name]),
    };
    format!("{}//{}", origin.protocol, joined)
}

/// Direct download link for an entry's server path.
///
/// The page's query string is kept so search-scoped links still resolve.
pub fn download_url(origin: &Origin, entry_path: &str, search: &str) -> String {
    let sep = if search.is_empty() { "?" } else { "&" };
    format!(
        "{}/{}{}{}{}",
        origin.url(),
        entry_path.trim_start_matches('/'),
        search,
        sep,
        DOWNLOAD_QUERY
    )
}

/// Whether an entry gets a QR-code install button.
pub fn has_qr_code(name: &str) -> bool {
    let ext = extension_of(name).to_ascii_lowercase();
    QR_EXTENSIONS.contains(&ext.as_str())
}
