//! Explorer-related data types for the file browser UI.

/// One breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Display label (the last crumb carries a trailing `" /"`)
    pub name: String,
    /// Path to navigate to when clicked
    pub path: String,
}

/// How preview content was produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewKind {
    /// Markdown rendered to sanitized HTML
    #[default]
    Markdown,
    /// Raw text escaped into a `<pre>` block
    Text,
}

/// Content shown in the preview pane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewState {
    /// File being previewed (`None` = nothing to preview)
    pub filename: Option<String>,
    pub filetype: PreviewKind,
    /// Size in bytes when known (explicit preview mode only)
    pub filesize: Option<i64>,
    /// Rendered HTML, empty while the content is loading
    pub content_html: String,
}

impl PreviewState {
    /// Preview placeholder for a file whose content has not arrived yet.
    pub fn pending(filename: impl Into<String>, filetype: PreviewKind) -> Self {
        Self {
            filename: Some(filename.into()),
            filetype,
            filesize: None,
            content_html: String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.filename.is_some() && self.content_html.is_empty()
    }
}

/// Modification time display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MtimeFormat {
    /// `2024-01-01 12:00:00`
    #[default]
    Absolute,
    /// `3 days ago`
    FromNow,
}

impl MtimeFormat {
    pub fn toggled(self) -> Self {
        match self {
            Self::Absolute => Self::FromNow,
            Self::FromNow => Self::Absolute,
        }
    }
}

/// Modal dialog currently shown on top of the explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    /// QR code for an install link
    Qr { title: String, url: String },
    /// Pretty-printed `/-/info` response
    Info { title: String, body: String },
}

/// Progress of one file upload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    /// Percent of the body sent so far
    Uploading(u8),
    Done,
    /// Server or network error message
    Failed(String),
}

/// A file the user dropped or picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub id: u32,
    pub name: String,
    pub status: UploadStatus,
}
