// Fixed lightning bolt glyph

/// Side of the square coordinate space the glyph is drawn in
pub const VIEWBOX_SIZE: f32 = 24.0;

/// Stroke width of the glyph, in viewbox units
pub const STROKE_WIDTH: f32 = 2.0;

/// SVG path data of the bolt outline
pub const PATH_DATA: &str = "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z";

/// Control points tracing the outline, in path order.
///
/// Derived by hand from `PATH_DATA` (arc endpoints only), so a polyline
/// through them approximates the stroke but does not reproduce the curves.
pub const CONTROL_POINTS: [(f32, f32); 12] = [
    (4.0, 14.0),
    (3.22, 12.37),
    (13.12, 2.17),
    (13.98, 2.63),
    (12.06, 8.65),
    (13.0, 10.0),
    (20.0, 10.0),
    (20.78, 11.63),
    (10.88, 21.83),
    (10.02, 21.37),
    (11.94, 15.35),
    (11.0, 14.0),
];

/// Side of the padded viewbox for a given padding
pub fn padded_viewbox(padding: f32) -> f32 {
    VIEWBOX_SIZE + padding * 2.0
}
