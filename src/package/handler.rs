// Packager trait and the context shared by every stage

use crate::error::Result;
use crate::render::Rasterizer;
use crate::report::StageResult;
use std::path::{Path, PathBuf};

/// Resources handed to each packager
pub struct PackageContext<'a> {
    /// Root every stage writes under
    pub out_dir: &'a Path,
    pub rasterizer: &'a Rasterizer,
}

/// One stage of the icon run
///
/// Each stage renders the sizes it needs and assembles its own outputs under
/// its own directory, so stages never touch each other's files.
pub trait Packager {
    /// Name of this stage (for configuration and logging)
    fn name(&self) -> &str;

    /// Label shown in progress lines and the summary
    fn label(&self) -> &str;

    /// Run the stage.
    ///
    /// Expected failures (a size that didn't render, a missing icon compiler)
    /// come back as an unsuccessful `StageResult`. `Err` is reserved for
    /// errors that stop the stage outright.
    fn package(&self, ctx: &PackageContext) -> Result<StageResult>;

    /// Where the stage's outputs end up, for the summary
    fn location(&self, out_dir: &Path) -> PathBuf;

    /// Order of execution (lower runs first)
    fn priority(&self) -> i32 {
        100
    }

    /// Whether an `Err` from this stage ends the whole run
    fn abort_on_error(&self) -> bool {
        false
    }
}
