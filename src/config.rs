//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The backend contract (endpoint prefixes, header names, form fields) lives
//! here so the rest of the crate never hard-codes a URL fragment.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header and document title.
pub const APP_NAME: &str = "dirview";

/// Placeholder shown until `/-/sysinfo` answers.
pub const VERSION_LOADING: &str = "loading";

// =============================================================================
// Backend Endpoints
// =============================================================================

/// Query parameter appended to a directory path to request its JSON listing.
pub const LISTING_QUERY: &str = "json=true";

/// Prefix for file metadata lookups (`/-/info/<path>`).
pub const INFO_PREFIX: &str = "/-/info";

/// Backend version endpoint.
pub const SYSINFO_URL: &str = "/-/sysinfo";

/// Signed-in user endpoint (answers `null` when nobody is signed in).
pub const USER_URL: &str = "/-/user";

/// Install-link indirection used for iOS packages.
pub const IPA_LINK_PREFIX: &str = "/-/ipa/link";

/// Response header carrying a human readable auth failure message.
pub const AUTH_MESSAGE_HEADER: &str = "x-auth-authentication-message";

/// Multipart form field name for uploaded files.
pub const UPLOAD_FIELD: &str = "file";

/// Query parameter appended to download links.
pub const DOWNLOAD_QUERY: &str = "download=true";

// =============================================================================
// Query Parameters
// =============================================================================

/// Search query parameter forwarded to the listing endpoint.
pub const SEARCH_PARAM: &str = "search";

/// `raw=false` switches the page into single-file preview mode.
pub const RAW_PARAM: &str = "raw";

// =============================================================================
// Listing & Preview
// =============================================================================

/// File rendered below the listing when present in a directory.
pub const PREVIEW_FILE_NAME: &str = "README.md";

/// Characters a new directory name must not contain.
pub const FORBIDDEN_NAME_CHARS: &str = r"\/:*<>|";

/// Extensions that get a QR-code install button.
pub const QR_EXTENSIONS: &[&str] = &["apk", "ipa"];

/// Rendered QR code edge length in pixels.
pub const QR_SIZE_PX: u32 = 200;
