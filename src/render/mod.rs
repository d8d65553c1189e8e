mod fallback;
mod rasterizer;
pub mod svg;

pub use rasterizer::Rasterizer;

/// One pending rasterization: a square of `size` pixels around a glyph with `padding`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderRequest {
    pub size: u32,
    pub padding: f32,
}
