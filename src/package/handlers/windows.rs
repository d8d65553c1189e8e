// Windows: loose PNGs plus one multi-resolution .ico

use super::{format_sizes, render_png};
use crate::config::WindowsConfig;
use crate::error::{Error, Result};
use crate::io;
use crate::layout;
use crate::package::{PackageContext, Packager};
use crate::report::StageResult;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

const LABEL: &str = "Windows";

pub struct WindowsPackager {
    sizes: Vec<u32>,
    ico_name: String,
}

impl WindowsPackager {
    pub fn from_config(config: &WindowsConfig) -> Self {
        Self {
            sizes: config.sizes.clone(),
            ico_name: config.ico_name.clone(),
        }
    }
}

/// Composite every pixel over opaque black. The result has no transparency.
pub fn flatten_onto_black(image: &RgbaImage) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let over = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
        Rgba([over(r), over(g), over(b), 255])
    })
}

/// Load `pngs`, flatten them and pack them smallest first into `output`.
/// Returns the sizes that went into the container.
pub fn build_ico(pngs: &[PathBuf], output: &Path) -> Result<Vec<u32>> {
    let mut images = Vec::with_capacity(pngs.len());
    for path in pngs {
        let image = image::open(path)?.to_rgba8();
        images.push(flatten_onto_black(&image));
    }
    images.sort_by_key(|image| image.width());

    let mut dir = IconDir::new(ResourceType::Icon);
    let mut sizes = Vec::new();
    for image in images {
        let (width, height) = image.dimensions();
        if width > layout::MAX_ICO_DIMENSION || height > layout::MAX_ICO_DIMENSION {
            println!(
                "    ⚠ Skipping {}x{}: .ico entries are limited to {}px",
                width,
                height,
                layout::MAX_ICO_DIMENSION
            );
            continue;
        }
        let icon = IconImage::from_rgba_data(width, height, image.into_raw());
        let entry = IconDirEntry::encode(&icon).map_err(|e| Error::Ico(e.to_string()))?;
        dir.add_entry(entry);
        sizes.push(width);
    }

    if sizes.is_empty() {
        return Err(Error::Ico("no image fits in an .ico entry".into()));
    }

    // Encode fully before touching disk so a failure leaves no partial file
    let mut data = Vec::new();
    dir.write(&mut data).map_err(|e| Error::Ico(e.to_string()))?;
    io::write_file(output, &data)?;
    Ok(sizes)
}

impl Packager for WindowsPackager {
    fn name(&self) -> &str {
        "windows"
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn package(&self, ctx: &PackageContext) -> Result<StageResult> {
        println!("\n🪟 Generating Windows icons...");

        let dir = self.location(ctx.out_dir);
        io::ensure_dir(&dir)?;

        println!("  Generating PNG images...");
        let mut result = StageResult::new(LABEL, false);
        let mut pngs = Vec::new();
        for &size in &self.sizes {
            let path = dir.join(layout::windows_png_name(size));
            if render_png(ctx, size, &path, &mut result) {
                pngs.push(path);
            }
        }

        if pngs.is_empty() {
            println!("  ✗ No PNGs could be generated");
            return Ok(result.with_detail("no PNGs could be generated"));
        }

        let ico_path = dir.join(&self.ico_name);
        match build_ico(&pngs, &ico_path) {
            Ok(sizes) => {
                println!("  ✓ Generated: {}", ico_path.display());
                println!("    Sizes: {}", format_sizes(&sizes));
                println!("    ℹ Individual PNGs were kept alongside");
                result.add_artifact(ico_path.clone(), io::file_size(&ico_path));
                result.success = true;
            }
            Err(e) => {
                log::error!("Could not assemble {}: {:?}", ico_path.display(), e);
                println!("  ⚠ Could not generate .ico: {}", e);
                println!("    ✓ Individual PNGs were generated");
                result.detail = Some(e.to_string());
            }
        }
        Ok(result)
    }

    fn location(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(layout::WINDOWS_DIR)
    }

    fn priority(&self) -> i32 {
        30
    }
}
