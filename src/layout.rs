// Layout constants for the generated icon tree

use std::path::{Path, PathBuf};

// --- Output directories (relative to the output root) ---
pub const OUTPUT_DIR: &str = "build";
pub const MACOS_DIR: &str = "macos_icons";
pub const WINDOWS_DIR: &str = "windows_icons";
pub const LINUX_DIR: &str = "linux_icons";

// --- File names ---
pub const APP_ICON_FILE: &str = "appicon.png";
pub const ICONSET_NAME: &str = "Rikuest";
pub const ICO_FILE: &str = "rikuest.ico";
pub const LINUX_PREFIX: &str = "rikuest";

// --- Sizes ---
pub const APP_ICON_SIZE: u32 = 1024;
pub const MACOS_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];
pub const WINDOWS_SIZES: [u32; 4] = [16, 32, 48, 256];
pub const LINUX_SIZES: [u32; 9] = [16, 24, 32, 48, 64, 96, 128, 256, 512];
pub const MAX_ICO_DIMENSION: u32 = 256; // ICO directory entries store width in one byte
pub const MAX_ICON_SIZE: u32 = 16384; // largest configurable side, before @2x doubling

// --- Glyph ---
pub const DEFAULT_PADDING: f32 = 3.0;

// --- External tools ---
pub const ICON_COMPILER: &str = "iconutil";

// --- Helper functions ---

/// Name of an iconset member, e.g. `icon_16x16@2x.png`
pub fn iconset_png_name(size: u32, retina: bool) -> String {
    if retina {
        format!("icon_{}x{}@2x.png", size, size)
    } else {
        format!("icon_{}x{}.png", size, size)
    }
}

/// Name of a Windows intermediate PNG
pub fn windows_png_name(size: u32) -> String {
    format!("icon_{}x{}.png", size, size)
}

/// Name of a loose Linux PNG
pub fn linux_png_name(prefix: &str, size: u32) -> String {
    format!("{}_{}x{}.png", prefix, size, size)
}

/// Staging directory consumed by the icon compiler
pub fn iconset_dir(macos_dir: &Path, name: &str) -> PathBuf {
    macos_dir.join(format!("{}.iconset", name))
}

/// Container produced by the icon compiler
pub fn icns_path(macos_dir: &Path, name: &str) -> PathBuf {
    macos_dir.join(format!("{}.icns", name))
}
