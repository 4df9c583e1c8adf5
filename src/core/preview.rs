//! Preview rendering for README and single-file views.

use crate::models::{PreviewKind, PreviewState, extension_of};
use crate::utils::{markdown_to_html, text_to_html};

/// Markdown files render as HTML, everything else as escaped text.
pub fn preview_kind(filename: &str) -> PreviewKind {
    match extension_of(filename).to_ascii_lowercase().as_str() {
        "md" | "markdown" => PreviewKind::Markdown,
        _ => PreviewKind::Text,
    }
}

/// Render fetched `content` for `filename` using `kind`.
pub fn render_preview(
    filename: &str,
    kind: PreviewKind,
    filesize: Option<i64>,
    content: &str,
) -> PreviewState {
    let content_html = match kind {
        PreviewKind::Markdown => markdown_to_html(content),
        PreviewKind::Text => text_to_html(content),
    };

    PreviewState {
        filename: Some(filename.to_string()),
        filetype: kind,
        filesize,
        content_html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_kind() {
        assert_eq!(preview_kind("README.md"), PreviewKind::Markdown);
        assert_eq!(preview_kind("notes.MARKDOWN"), PreviewKind::Markdown);
        assert_eq!(preview_kind("main.go"), PreviewKind::Text);
        assert_eq!(preview_kind("LICENSE"), PreviewKind::Text);
    }

    #[test]
    fn test_render_markdown_preview() {
        let preview = render_preview("README.md", PreviewKind::Markdown, None, "**hi**");
        assert_eq!(preview.filename.as_deref(), Some("README.md"));
        assert!(preview.content_html.contains("<strong>hi</strong>"));
        assert!(!preview.is_loading());
    }

    #[test]
    fn test_render_text_preview_keeps_markup_literal() {
        let preview = render_preview("a.txt", PreviewKind::Text, Some(8), "**hi**");
        assert_eq!(preview.filetype, PreviewKind::Text);
        assert_eq!(preview.filesize, Some(8));
        assert_eq!(preview.content_html, "<pre>**hi**</pre>");
    }
}
