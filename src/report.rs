// Per-stage results and the final summary table

use bytesize::ByteSize;
use chrono::Local;
use std::path::PathBuf;

pub const RULE_WIDTH: usize = 60;

/// Outcome of one stage
#[derive(Clone, Debug, PartialEq)]
pub struct StageResult {
    pub label: String,
    pub success: bool,
    /// Why the stage failed, if it did
    pub detail: Option<String>,
    /// Files left on disk by the stage
    pub artifacts: Vec<PathBuf>,
    pub bytes: u64,
}

impl StageResult {
    pub fn new(label: impl Into<String>, success: bool) -> Self {
        Self {
            label: label.into(),
            success,
            detail: None,
            artifacts: Vec::new(),
            bytes: 0,
        }
    }

    pub fn failed(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::new(label, false)
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn add_artifact(&mut self, path: PathBuf, bytes: u64) {
        self.artifacts.push(path);
        self.bytes += bytes;
    }

    pub fn forget_artifacts(&mut self) {
        self.artifacts.clear();
        self.bytes = 0;
    }
}

/// All stage results of one run, in execution order
#[derive(Clone, Debug, Default)]
pub struct Summary {
    pub results: Vec<StageResult>,
}

impl Summary {
    pub fn push(&mut self, result: StageResult) {
        self.results.push(result);
    }

    /// True only if every stage succeeded
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }

    pub fn failed_stages(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.label.as_str())
            .collect()
    }

    /// Render the table printed at the end of a run
    pub fn render(&self, locations: &[(String, PathBuf)]) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();
        out.push('\n');
        out.push_str(&rule);
        out.push_str("\nGeneration summary\n");
        out.push_str(&rule);
        out.push('\n');

        for result in &self.results {
            let status = if result.success { "✅" } else { "❌" };
            out.push_str(&format!("  {} {}", status, result.label));
            if !result.artifacts.is_empty() {
                out.push_str(&format!(
                    "  [{} file(s), {}]",
                    result.artifacts.len(),
                    ByteSize(result.bytes)
                ));
            }
            if let Some(detail) = &result.detail {
                out.push_str(&format!(" ({})", detail));
            }
            out.push('\n');
        }

        if self.all_succeeded() {
            out.push_str("\n✅ All icons generated successfully!\n");
            if !locations.is_empty() {
                out.push_str("\n📍 Locations:\n");
                for (label, path) in locations {
                    out.push_str(&format!("   - {}: {}\n", label, path.display()));
                }
            }
        } else {
            out.push_str(&format!(
                "\n⚠ Some icons could not be generated: {}\n",
                self.failed_stages().join(", ")
            ));
            out.push_str("   Check the messages above\n");
        }
        out.push_str(&format!(
            "\nFinished at {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        out
    }
}
