use crate::error::{Error, Result};
use crate::layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Generator configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub glyph: GlyphConfig,
    pub app_icon: AppIconConfig,
    pub macos: MacosConfig,
    pub windows: WindowsConfig,
    pub linux: LinuxConfig,
    pub stages: StagesConfig,
}

/// Output location
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory every stage writes under
    pub dir: PathBuf,
}

/// Glyph composition
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GlyphConfig {
    /// Space around the glyph, in viewbox units
    pub padding: f32,
}

/// Top-level single icon
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AppIconConfig {
    /// File name under the output root
    pub file: String,
    /// Side in pixels
    pub size: u32,
    /// "auto" or "polyline"
    pub renderer: String,
}

/// macOS iconset and .icns
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct MacosConfig {
    pub sizes: Vec<u32>,
    /// Base name of the `.iconset` directory and `.icns` file
    pub iconset_name: String,
    /// Command used to compile the iconset
    pub compiler: String,
}

/// Windows PNGs and .ico
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowsConfig {
    pub sizes: Vec<u32>,
    pub ico_name: String,
}

/// Linux loose PNGs
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LinuxConfig {
    pub sizes: Vec<u32>,
    /// File name prefix, e.g. `rikuest` for `rikuest_48x48.png`
    pub prefix: String,
}

/// Which stages run
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StagesConfig {
    /// Stage names: "app-icon", "macos", "windows", "linux"
    pub enabled: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from(layout::OUTPUT_DIR),
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        GlyphConfig {
            padding: layout::DEFAULT_PADDING,
        }
    }
}

impl Default for AppIconConfig {
    fn default() -> Self {
        AppIconConfig {
            file: layout::APP_ICON_FILE.to_string(),
            size: layout::APP_ICON_SIZE,
            renderer: "auto".to_string(),
        }
    }
}

impl Default for MacosConfig {
    fn default() -> Self {
        MacosConfig {
            sizes: layout::MACOS_SIZES.to_vec(),
            iconset_name: layout::ICONSET_NAME.to_string(),
            compiler: layout::ICON_COMPILER.to_string(),
        }
    }
}

impl Default for WindowsConfig {
    fn default() -> Self {
        WindowsConfig {
            sizes: layout::WINDOWS_SIZES.to_vec(),
            ico_name: layout::ICO_FILE.to_string(),
        }
    }
}

impl Default for LinuxConfig {
    fn default() -> Self {
        LinuxConfig {
            sizes: layout::LINUX_SIZES.to_vec(),
            prefix: layout::LINUX_PREFIX.to_string(),
        }
    }
}

impl Default for StagesConfig {
    fn default() -> Self {
        StagesConfig {
            enabled: ["app-icon", "macos", "windows", "linux"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "rikuest-icons")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the user config file, or return defaults if it
    /// doesn't exist or can't be read
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        log::warn!("{}", e);
                        log::warn!("Using default configuration");
                    }
                }
            }
        }
        Config::default()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = toml::from_str::<Config>(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, contents).map_err(|e| Error::io(path, e))
    }

    /// Create a default config file if it doesn't exist, returning its path
    /// when one was written
    pub fn create_default() -> Result<Option<PathBuf>> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        if path.exists() {
            return Ok(None);
        }
        Config::default().save_to(&path)?;
        Ok(Some(path))
    }

    /// Reject values no stage can work with
    pub fn validate(&self) -> Result<()> {
        let padding = self.glyph.padding;
        if !padding.is_finite() || padding < 0.0 {
            return Err(Error::Config(format!(
                "glyph.padding must be a non-negative number, got {}",
                padding
            )));
        }
        if self.app_icon.size == 0 || self.app_icon.size > layout::MAX_ICON_SIZE {
            return Err(Error::Config(format!(
                "app_icon.size must be between 1 and {}, got {}",
                layout::MAX_ICON_SIZE,
                self.app_icon.size
            )));
        }
        if !matches!(self.app_icon.renderer.as_str(), "auto" | "polyline") {
            return Err(Error::Config(format!(
                "app_icon.renderer must be \"auto\" or \"polyline\", got {:?}",
                self.app_icon.renderer
            )));
        }
        for (section, sizes) in [
            ("macos", &self.macos.sizes),
            ("windows", &self.windows.sizes),
            ("linux", &self.linux.sizes),
        ] {
            if let Some(bad) = sizes
                .iter()
                .find(|&&s| s == 0 || s > layout::MAX_ICON_SIZE)
            {
                return Err(Error::Config(format!(
                    "{}.sizes entries must be between 1 and {}, got {}",
                    section,
                    layout::MAX_ICON_SIZE,
                    bad
                )));
            }
        }
        if self.stages.enabled.is_empty() {
            return Err(Error::Config("stages.enabled must name at least one stage".into()));
        }
        Ok(())
    }

    pub fn force_polyline(&self) -> bool {
        self.app_icon.renderer == "polyline"
    }
}
