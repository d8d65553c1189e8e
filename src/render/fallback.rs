// Polyline approximation of the glyph, drawn straight into a pixmap.
// Used only for the app icon when the vector renderer can't be used.

use super::RenderRequest;
use crate::error::{Error, Result};
use crate::glyph;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

/// Stroke width in pixels for a given viewbox-to-pixel scale
pub fn stroke_width(scale: f32) -> f32 {
    (2.3 * scale).floor().max(4.0)
}

/// Control points mapped into pixel space
pub fn scaled_points(request: &RenderRequest) -> Vec<(f32, f32)> {
    let padding = request.padding.max(0.0);
    let scale = request.size as f32 / glyph::padded_viewbox(padding);
    let offset = padding * scale;
    glyph::CONTROL_POINTS
        .iter()
        .map(|&(x, y)| (offset + x * scale, offset + y * scale))
        .collect()
}

pub fn render(request: &RenderRequest) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(request.size, request.size).ok_or_else(|| {
        Error::Render(format!(
            "cannot allocate {}x{} pixmap",
            request.size, request.size
        ))
    })?;
    pixmap.fill(Color::BLACK);

    let scale = request.size as f32 / glyph::padded_viewbox(request.padding.max(0.0));
    let width = stroke_width(scale);
    let points = scaled_points(request);

    let mut paint = Paint::default();
    paint.set_color(Color::WHITE);
    paint.anti_alias = true;

    let mut pb = PathBuilder::new();
    let (first_x, first_y) = points[0];
    pb.move_to(first_x, first_y);
    for &(x, y) in &points[1..] {
        pb.line_to(x, y);
    }
    let outline = pb
        .finish()
        .ok_or_else(|| Error::Render("empty glyph outline".into()))?;

    let stroke = Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(&outline, &paint, &stroke, Transform::identity(), None);

    // Caps on every vertex so joins stay round even where the stroker miters
    let radius = width / 2.0;
    for &(x, y) in &points {
        if let Some(dot) = PathBuilder::from_circle(x, y, radius) {
            pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_width_has_floor() {
        assert_eq!(stroke_width(0.5), 4.0);
        assert_eq!(stroke_width(1024.0 / 30.0), 78.0);
    }

    #[test]
    fn test_points_are_offset_by_padding() {
        let points = scaled_points(&RenderRequest { size: 30, padding: 3.0 });
        assert_eq!(points.len(), glyph::CONTROL_POINTS.len());
        // 30px over a 30-unit viewbox is scale 1, so every point shifts by 3
        assert_eq!(points[0], (7.0, 17.0));
        assert_eq!(points[6], (23.0, 13.0));
    }

    #[test]
    fn test_render_size_and_colors() {
        for size in [16, 48, 256] {
            let pixmap = render(&RenderRequest { size, padding: 3.0 }).unwrap();
            assert_eq!((pixmap.width(), pixmap.height()), (size, size));
            let corner = pixmap.pixel(0, 0).unwrap();
            assert_eq!((corner.red(), corner.alpha()), (0, 255));
            assert!(pixmap.pixels().iter().any(|p| p.red() == 255));
        }
    }

    #[test]
    fn test_render_is_opaque() {
        let pixmap = render(&RenderRequest { size: 64, padding: 3.0 }).unwrap();
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 255));
    }
}
