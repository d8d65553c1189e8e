// macOS: <Name>.iconset staging directory compiled into <Name>.icns

use super::render_png;
use crate::config::MacosConfig;
use crate::error::Result;
use crate::io;
use crate::layout;
use crate::package::{PackageContext, Packager};
use crate::report::StageResult;
use std::path::{Path, PathBuf};

const LABEL: &str = "macOS";

pub struct MacosPackager {
    sizes: Vec<u32>,
    iconset_name: String,
    compiler: String,
    /// Whether to run the icon compiler at all; it only exists on macOS
    compile: bool,
}

impl MacosPackager {
    pub fn from_config(config: &MacosConfig) -> Self {
        Self {
            sizes: config.sizes.clone(),
            iconset_name: config.iconset_name.clone(),
            compiler: config.compiler.clone(),
            compile: cfg!(target_os = "macos"),
        }
    }

    /// Every `(pixels, file name)` the iconset needs: each size, plus a
    /// double-resolution `@2x` variant for all but the largest.
    pub fn iconset_members(&self) -> Vec<(u32, String)> {
        let largest = self.sizes.iter().copied().max();
        let mut members = Vec::new();
        for &size in &self.sizes {
            members.push((size, layout::iconset_png_name(size, false)));
            if Some(size) == largest {
                continue;
            }
            match size.checked_mul(2) {
                Some(double) => members.push((double, layout::iconset_png_name(size, true))),
                None => log::warn!("Skipping @2x for {}x{}: size overflows", size, size),
            }
        }
        members
    }

    fn print_manual_hint(&self, iconset: &Path) {
        println!("  ✓ PNGs generated in: {}", iconset.display());
        println!("  💡 Copy the .iconset directory to a Mac and run:");
        println!("     {} -c icns {}", self.compiler, iconset.display());
    }
}

impl Packager for MacosPackager {
    fn name(&self) -> &str {
        "macos"
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn package(&self, ctx: &PackageContext) -> Result<StageResult> {
        println!("\n🍎 Generating macOS icons...");

        let dir = self.location(ctx.out_dir);
        let iconset = layout::iconset_dir(&dir, &self.iconset_name);
        // Stale members from an earlier run would be compiled in too
        if iconset.exists() {
            io::remove_dir(&iconset)?;
        }
        io::ensure_dir(&iconset)?;

        println!("  Generating PNG images for the iconset...");
        let mut result = StageResult::new(LABEL, false);
        for (pixels, file_name) in self.iconset_members() {
            render_png(ctx, pixels, &iconset.join(file_name), &mut result);
        }
        log::info!(
            "{} PNG(s) staged in {}",
            io::count_pngs(&iconset)?,
            iconset.display()
        );

        if !self.compile {
            println!("  ⚠ {} is only available on macOS", self.compiler);
            self.print_manual_hint(&iconset);
            return Ok(result.with_detail(format!("{} requires macOS", self.compiler)));
        }

        let icns = layout::icns_path(&dir, &self.iconset_name);
        match io::compile_iconset(&self.compiler, &iconset, &icns) {
            Ok(()) => {
                println!("  ✓ Generated: {}", icns.display());
                result.forget_artifacts();
                result.add_artifact(icns.clone(), io::file_size(&icns));
                if let Err(e) = io::remove_dir(&iconset) {
                    println!("  ⚠ Warning: could not remove the iconset directory: {}", e);
                }
                result.success = true;
            }
            Err(e) => {
                println!("  ✗ Error generating .icns: {}", e);
                self.print_manual_hint(&iconset);
                result.detail = Some(e.to_string());
            }
        }
        Ok(result)
    }

    fn location(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(layout::MACOS_DIR)
    }

    fn priority(&self) -> i32 {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rasterizer;

    fn packager(sizes: &[u32], compile: bool, compiler: &str) -> MacosPackager {
        MacosPackager {
            sizes: sizes.to_vec(),
            iconset_name: "Rikuest".to_string(),
            compiler: compiler.to_string(),
            compile,
        }
    }

    #[test]
    fn test_members_skip_retina_for_largest() {
        let members = packager(&layout::MACOS_SIZES, false, "iconutil").iconset_members();
        assert_eq!(members.len(), 2 * layout::MACOS_SIZES.len() - 1);
        assert!(members.contains(&(32, "icon_16x16@2x.png".to_string())));
        assert!(members.contains(&(1024, "icon_512x512@2x.png".to_string())));
        assert!(members.contains(&(1024, "icon_1024x1024.png".to_string())));
        assert!(!members.iter().any(|(_, name)| name == "icon_1024x1024@2x.png"));
    }

    #[cfg(feature = "svg")]
    #[test]
    fn test_stages_2n_minus_1_pngs_without_compiler() {
        let dir = tempfile::tempdir().unwrap();
        let rasterizer = Rasterizer::new(3.0);
        let ctx = PackageContext {
            out_dir: dir.path(),
            rasterizer: &rasterizer,
        };

        let result = packager(&[16, 32, 64], false, "iconutil")
            .package(&ctx)
            .unwrap();

        let iconset = dir.path().join("macos_icons").join("Rikuest.iconset");
        assert_eq!(io::count_pngs(&iconset).unwrap(), 5);
        assert_eq!(result.artifacts.len(), 5);
        assert!(!result.success);
        assert!(iconset.join("icon_32x32@2x.png").is_file());
        assert!(!iconset.join("icon_64x64@2x.png").exists());

        let retina = image::open(iconset.join("icon_16x16@2x.png")).unwrap();
        assert_eq!(retina.width(), 32);
    }

    #[cfg(feature = "svg")]
    #[test]
    fn test_missing_compiler_keeps_staging_dir() {
        let dir = tempfile::tempdir().unwrap();
        let rasterizer = Rasterizer::new(3.0);
        let ctx = PackageContext {
            out_dir: dir.path(),
            rasterizer: &rasterizer,
        };

        let result = packager(&[16], true, "rikuest-no-such-iconutil")
            .package(&ctx)
            .unwrap();

        assert!(!result.success);
        assert!(result.detail.unwrap().contains("not found"));
        let iconset = dir.path().join("macos_icons").join("Rikuest.iconset");
        assert!(iconset.join("icon_16x16.png").is_file());
        assert!(!dir.path().join("macos_icons").join("Rikuest.icns").exists());
    }

    #[test]
    fn test_members_never_overflow() {
        let members =
            packager(&[3_000_000_000, 4_000_000_000], false, "iconutil").iconset_members();
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|(_, name)| !name.contains("@2x")));
    }

    #[cfg(feature = "svg")]
    #[test]
    fn test_restaging_clears_stale_members() {
        let dir = tempfile::tempdir().unwrap();
        let rasterizer = Rasterizer::new(3.0);
        let ctx = PackageContext {
            out_dir: dir.path(),
            rasterizer: &rasterizer,
        };
        let iconset = dir.path().join("macos_icons").join("Rikuest.iconset");
        io::write_file(&iconset.join("icon_128x128.png"), b"old").unwrap();

        packager(&[16, 32, 64], false, "iconutil")
            .package(&ctx)
            .unwrap();

        assert!(!iconset.join("icon_128x128.png").exists());
        assert_eq!(io::count_pngs(&iconset).unwrap(), 5);
    }

    #[cfg(all(unix, feature = "svg"))]
    #[test]
    fn test_successful_compile_removes_staging_dir() {
        let dir = tempfile::tempdir().unwrap();
        let rasterizer = Rasterizer::new(3.0);
        let ctx = PackageContext {
            out_dir: dir.path(),
            rasterizer: &rasterizer,
        };

        // `true` accepts any arguments and exits 0
        let result = packager(&[16, 32], true, "true").package(&ctx).unwrap();

        assert!(result.success);
        assert!(result.detail.is_none());
        let macos = dir.path().join("macos_icons");
        assert!(!macos.join("Rikuest.iconset").exists());
        assert_eq!(result.artifacts.len(), 1);
        assert_eq!(result.artifacts[0], macos.join("Rikuest.icns"));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_compiler_disabled_off_macos() {
        let config = MacosConfig::default();
        assert!(!MacosPackager::from_config(&config).compile);
    }
}
