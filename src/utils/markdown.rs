//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports GitHub-flavored extensions:
/// - Tables
/// - Strikethrough (`~~text~~`)
/// - Task lists
/// - Bare URL autolinks
/// - Footnotes
///
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
/// Task-list checkboxes survive: `input` is allowed with `type="checkbox"`
/// and the `checked`/`disabled` flags only.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.autolink = true;
    options.extension.footnotes = true;

    let html_output = render(markdown, &options);

    // Sanitize HTML to prevent XSS attacks
    ammonia::Builder::default()
        .add_tags(&["input"])
        .add_tag_attributes("input", &["checked", "disabled"])
        .add_tag_attribute_values("input", "type", &["checkbox"])
        .clean(&html_output)
        .to_string()
}

/// Escape plain text and wrap it in a `<pre>` block.
pub fn text_to_html(text: &str) -> String {
    format!("<pre>{}</pre>", ammonia::clean_text(text))
}
