// SVG document for the padded glyph, and the resvg-backed renderer

use super::RenderRequest;
use crate::glyph;

/// Build the SVG document for the glyph with `padding` viewbox units on each side.
///
/// Black background over the whole viewbox, white round-capped stroke.
pub fn document(padding: f32) -> String {
    let padding = padding.max(0.0);
    let size = glyph::padded_viewbox(padding);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}">
    <rect width="{size}" height="{size}" fill="#000000"/>
    <g transform="translate({padding}, {padding})">
        <path d="{path}"
              fill="none"
              stroke="#FFFFFF"
              stroke-width="{stroke}"
              stroke-linecap="round"
              stroke-linejoin="round"/>
    </g>
</svg>
"##,
        size = size,
        padding = padding,
        path = glyph::PATH_DATA,
        stroke = glyph::STROKE_WIDTH,
    )
}

#[cfg(feature = "svg")]
pub fn render(request: &RenderRequest) -> crate::error::Result<tiny_skia::Pixmap> {
    use crate::error::Error;

    let svg = document(request.padding);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(request.size, request.size).ok_or_else(|| {
        Error::Render(format!(
            "cannot allocate {}x{} pixmap",
            request.size, request.size
        ))
    })?;

    let tree_size = tree.size();
    let scale_x = request.size as f32 / tree_size.width();
    let scale_y = request.size as f32 / tree_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

#[cfg(not(feature = "svg"))]
pub fn render(_request: &RenderRequest) -> crate::error::Result<tiny_skia::Pixmap> {
    Err(crate::error::Error::VectorUnavailable)
}
