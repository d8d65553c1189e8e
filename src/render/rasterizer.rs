use super::{fallback, svg, RenderRequest};
use crate::error::{Error, Result};
use crate::io;
use std::path::Path;
use tiny_skia::Pixmap;

/// Turns the padded glyph into pixmaps and PNG files
#[derive(Clone, Debug)]
pub struct Rasterizer {
    padding: f32,
}

impl Rasterizer {
    pub fn new(padding: f32) -> Self {
        Self {
            padding: padding.max(0.0),
        }
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Whether the resvg renderer was compiled in
    pub fn vector_available() -> bool {
        cfg!(feature = "svg")
    }

    fn request(&self, size: u32) -> RenderRequest {
        RenderRequest {
            size,
            padding: self.padding,
        }
    }

    /// Render the SVG document at `size`x`size`
    pub fn render(&self, size: u32) -> Result<Pixmap> {
        let pixmap = svg::render(&self.request(size))?;
        log::trace!("rendered {}x{} with resvg", size, size);
        Ok(pixmap)
    }

    /// Render the polyline approximation at `size`x`size`
    pub fn render_fallback(&self, size: u32) -> Result<Pixmap> {
        let pixmap = fallback::render(&self.request(size))?;
        log::trace!("rendered {}x{} with the polyline fallback", size, size);
        Ok(pixmap)
    }

    /// Encode `pixmap` and write it to `path`, returning the byte count.
    /// Nothing is written when encoding fails or yields no data.
    pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<u64> {
        let data = pixmap
            .encode_png()
            .map_err(|e| Error::Encode(e.to_string()))?;
        if data.is_empty() {
            return Err(Error::Encode(format!(
                "empty PNG for {}",
                path.display()
            )));
        }
        io::write_file(path, &data)?;
        Ok(data.len() as u64)
    }

    /// Vector render straight to a PNG file
    pub fn render_to_file(&self, size: u32, path: &Path) -> Result<u64> {
        let pixmap = self.render(size)?;
        Self::write_png(&pixmap, path)
    }
}
