// Top-level single icon (build/appicon.png)

use crate::config::Config;
use crate::error::Result;
use crate::io;
use crate::package::{PackageContext, Packager};
use crate::render::Rasterizer;
use crate::report::StageResult;
use std::path::{Path, PathBuf};

pub const NAME: &str = "app-icon";
const LABEL: &str = "App Icon";

pub struct AppIconPackager {
    file: String,
    size: u32,
    force_polyline: bool,
}

impl AppIconPackager {
    pub fn from_config(config: &Config) -> Self {
        Self {
            file: config.app_icon.file.clone(),
            size: config.app_icon.size,
            force_polyline: config.force_polyline(),
        }
    }
}

impl Packager for AppIconPackager {
    fn name(&self) -> &str {
        NAME
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn package(&self, ctx: &PackageContext) -> Result<StageResult> {
        println!("\n📱 Generating {} (main icon)...", self.file);

        io::ensure_dir(ctx.out_dir)?;
        let path = self.location(ctx.out_dir);
        let mut result = StageResult::new(LABEL, false);

        let pixmap = if Rasterizer::vector_available() && !self.force_polyline {
            match ctx.rasterizer.render(self.size) {
                Ok(pixmap) => pixmap,
                Err(e) => {
                    println!("  ✗ Error generating {}: {}", path.display(), e);
                    return Ok(result.with_detail(e.to_string()));
                }
            }
        } else {
            if Rasterizer::vector_available() {
                println!("  ⚠ Using the polyline renderer as requested");
            } else {
                println!("  ⚠ SVG renderer not available, using the polyline renderer (lower quality)");
            }
            result.detail = Some("polyline fallback".to_string());
            // No further fallback exists, so any error here ends the run
            ctx.rasterizer.render_fallback(self.size)?
        };

        let bytes = Rasterizer::write_png(&pixmap, &path)?;
        println!(
            "  ✓ Generated: {} ({}x{})",
            path.display(),
            self.size,
            self.size
        );
        result.add_artifact(path, bytes);
        result.success = true;
        Ok(result)
    }

    fn location(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.file)
    }

    fn priority(&self) -> i32 {
        10
    }

    fn abort_on_error(&self) -> bool {
        true
    }
}
