//! Wire types returned by the file server.

use serde::{Deserialize, Serialize};

// =============================================================================
// Listing
// =============================================================================

/// Entry type as reported by the listing endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// One row of a directory listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Display name (may contain `/` when the server collapses single-child dirs
    /// or when the listing is a search result)
    pub name: String,
    /// Server path relative to the served root
    pub path: String,
    /// Size in bytes (directory sizes are server-side estimates)
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Modification time in milliseconds since the Unix epoch
    #[serde(default)]
    pub mtime: i64,
}

impl FileEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Dotfiles are hidden unless the user asks for them.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn extension(&self) -> &str {
        extension_of(&self.name)
    }
}

/// Extension after the last `.`, or `""` for names without one.
///
/// A leading dot does not start an extension, so `.bashrc` has none.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx + 1..],
        _ => "",
    }
}

/// Per-directory permissions computed by the server for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessInfo {
    #[serde(default)]
    pub upload: bool,
    #[serde(default)]
    pub delete: bool,
}

/// Response of `GET <path>?json=true`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<FileEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub auth: AccessInfo,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Auxiliary Endpoints
// =============================================================================

/// Response of `GET /-/info/<path>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<EntryKind>,
    #[serde(default)]
    pub mtime: i64,
    /// Package metadata (apk manifest, ...) when the server could parse it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

/// Response of `GET /-/sysinfo`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SysInfo {
    pub version: String,
}

/// Response of `GET /-/user` when someone is signed in.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl UserInfo {
    /// Name to show in the header, falling back to the email address.
    pub fn display_name(&self) -> Option<&str> {
        [self.name.as_str(), self.email.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }
}

// =============================================================================
// File Icons
// =============================================================================

/// Icon category for a listing entry, chosen from its type and extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileIcon {
    Git,
    Folder,
    Code,
    Pdf,
    Archive,
    Audio,
    Image,
    Apple,
    Android,
    Windows,
    Text,
}

impl FileIcon {
    pub fn for_entry(entry: &FileEntry) -> Self {
        if entry.is_dir() {
            return if entry.name == ".git" {
                Self::Git
            } else {
                Self::Folder
            };
        }

        match entry.extension().to_ascii_lowercase().as_str() {
            "go" | "py" | "js" | "java" | "c" | "cpp" | "h" => Self::Code,
            "pdf" => Self::Pdf,
            "zip" => Self::Archive,
            "mp3" | "wav" => Self::Audio,
            "jpg" | "jpeg" | "png" | "gif" | "tiff" => Self::Image,
            "ipa" | "dmg" => Self::Apple,
            "apk" => Self::Android,
            "exe" => Self::Windows,
            _ => Self::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: format!("docs/{}", name),
            size: 0,
            kind,
            mtime: 0,
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("app.ipa"), "ipa");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of(".config.json"), "json");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn test_listing_deserialize() {
        let json = r#"{
            "files": [
                {"name": "src", "path": "repo/src", "type": "dir", "size": 4096, "mtime": 1700000000000},
                {"name": "main.go", "path": "repo/main.go", "type": "file", "size": 12, "mtime": 1700000001000}
            ],
            "auth": {"upload": true, "delete": false, "users": [], "accessTables": null}
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();

        assert_eq!(listing.files.len(), 2);
        assert!(listing.files[0].is_dir());
        assert_eq!(listing.files[1].mtime, 1_700_000_001_000);
        assert_eq!(
            listing.auth,
            AccessInfo {
                upload: true,
                delete: false
            }
        );
    }

    #[test]
    fn test_listing_tolerates_nulls() {
        let listing: Listing = serde_json::from_str(r#"{"files": null, "auth": null}"#).unwrap();
        assert!(listing.files.is_empty());
        assert_eq!(listing.auth, AccessInfo::default());
    }

    #[test]
    fn test_file_info_deserialize() {
        let json = r#"{"name": "a.apk", "path": "apps/a.apk", "size": 10, "type": "file",
            "mtime": 5, "extra": {"packageName": "com.example"}}"#;
        let info: FileInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.kind, Some(EntryKind::File));
        assert_eq!(info.extra.unwrap()["packageName"], "com.example");
    }

    #[test]
    fn test_user_display_name() {
        let user = UserInfo {
            email: "dev@example.com".to_string(),
            name: String::new(),
        };
        assert_eq!(user.display_name(), Some("dev@example.com"));
        assert_eq!(UserInfo::default().display_name(), None);
    }

    #[test]
    fn test_file_icon() {
        assert_eq!(FileIcon::for_entry(&entry(".git", EntryKind::Dir)), FileIcon::Git);
        assert_eq!(FileIcon::for_entry(&entry("src.go", EntryKind::Dir)), FileIcon::Folder);
        assert_eq!(FileIcon::for_entry(&entry("main.go", EntryKind::File)), FileIcon::Code);
        assert_eq!(FileIcon::for_entry(&entry("Photo.JPG", EntryKind::File)), FileIcon::Image);
        assert_eq!(FileIcon::for_entry(&entry("app.ipa", EntryKind::File)), FileIcon::Apple);
        assert_eq!(FileIcon::for_entry(&entry("app.apk", EntryKind::File)), FileIcon::Android);
        assert_eq!(FileIcon::for_entry(&entry("setup.exe", EntryKind::File)), FileIcon::Windows);
        assert_eq!(FileIcon::for_entry(&entry("notes", EntryKind::File)), FileIcon::Text);
    }
}
