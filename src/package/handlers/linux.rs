// Linux: one loose PNG per size, no container

use super::render_png;
use crate::config::LinuxConfig;
use crate::error::Result;
use crate::io;
use crate::layout;
use crate::package::{PackageContext, Packager};
use crate::report::StageResult;
use std::path::{Path, PathBuf};

const LABEL: &str = "Linux";

pub struct LinuxPackager {
    sizes: Vec<u32>,
    prefix: String,
}

impl LinuxPackager {
    pub fn from_config(config: &LinuxConfig) -> Self {
        Self {
            sizes: config.sizes.clone(),
            prefix: config.prefix.clone(),
        }
    }
}

impl Packager for LinuxPackager {
    fn name(&self) -> &str {
        "linux"
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn package(&self, ctx: &PackageContext) -> Result<StageResult> {
        println!("\n🐧 Generating Linux icons...");

        let dir = self.location(ctx.out_dir);
        io::ensure_dir(&dir)?;

        println!("  Generating PNG images...");
        let mut result = StageResult::new(LABEL, false);
        let mut produced = 0;
        for &size in &self.sizes {
            let path = dir.join(layout::linux_png_name(&self.prefix, size));
            if render_png(ctx, size, &path, &mut result) {
                produced += 1;
            }
        }

        if produced > 0 {
            println!("  ✓ Generated {} PNG icon(s)", produced);
            result.success = true;
            Ok(result)
        } else {
            println!("  ✗ No icons could be generated");
            Ok(result.with_detail("no icons could be generated"))
        }
    }

    fn location(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(layout::LINUX_DIR)
    }

    fn priority(&self) -> i32 {
        40
    }
}
