mod app_icon;
mod linux;
mod macos;
mod windows;

use crate::config::Config;
use crate::package::{PackageContext, PackagerRegistry};
use crate::report::StageResult;
use app_icon::AppIconPackager;
use linux::LinuxPackager;
use macos::MacosPackager;
use windows::WindowsPackager;
use std::path::Path;

/// Registry with every stage registered and enabled per `config`
pub fn registry(config: &Config, icon_only: bool) -> PackagerRegistry {
    let mut registry = PackagerRegistry::new();
    registry.register(Box::new(AppIconPackager::from_config(config)));
    registry.register(Box::new(MacosPackager::from_config(&config.macos)));
    registry.register(Box::new(WindowsPackager::from_config(&config.windows)));
    registry.register(Box::new(LinuxPackager::from_config(&config.linux)));

    if icon_only {
        registry.set_enabled(&[app_icon::NAME.to_string()]);
    } else {
        registry.set_enabled(&config.stages.enabled);
    }
    registry
}

/// Vector-render one size to `path`, print a status line and record the file.
/// Returns whether the PNG was written.
fn render_png(ctx: &PackageContext, size: u32, path: &Path, result: &mut StageResult) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match ctx.rasterizer.render_to_file(size, path) {
        Ok(bytes) => {
            println!("    ✓ {}", name);
            result.add_artifact(path.to_path_buf(), bytes);
            true
        }
        Err(e) => {
            println!("    ✗ Error generating {}: {}", name, e);
            log::debug!("{} ({}x{}) skipped: {:?}", path.display(), size, size, e);
            false
        }
    }
}

fn format_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|s| format!("{}x{}", s, s))
        .collect::<Vec<_>>()
        .join(", ")
}
