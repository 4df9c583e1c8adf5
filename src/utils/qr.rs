//! QR code rendering for install links.

use qrcode::QrCode;
use qrcode::render::svg;

use crate::config::QR_SIZE_PX;

/// Render `text` as an inline SVG QR code.
///
/// Returns `None` when the payload is too long for any QR version.
pub fn render_svg(text: &str) -> Option<String> {
    let code = QrCode::new(text.as_bytes()).ok()?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(QR_SIZE_PX, QR_SIZE_PX)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();
    Some(image)
}
