// Packager registry: runs the enabled stages in order and collects their results

use super::handler::{PackageContext, Packager};
use crate::error::Result;
use crate::report::{StageResult, Summary};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Registry for managing packagers
pub struct PackagerRegistry {
    packagers: Vec<Box<dyn Packager>>,
    enabled: HashSet<String>,
}

impl PackagerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            packagers: Vec::new(),
            enabled: HashSet::new(),
        }
    }

    /// Register a packager, enabled. Packagers are kept sorted by priority.
    pub fn register(&mut self, packager: Box<dyn Packager>) {
        self.enabled.insert(packager.name().to_string());
        self.packagers.push(packager);
        self.packagers.sort_by_key(|p| p.priority());
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Set enabled stages from configuration
    pub fn set_enabled(&mut self, enabled: &[String]) {
        for name in enabled {
            if !self.packagers.iter().any(|p| p.name() == name) {
                log::warn!("Unknown stage in configuration: {}", name);
            }
        }
        self.enabled = enabled.iter().cloned().collect();
    }

    /// Run every enabled stage in order.
    ///
    /// A failing stage never stops the ones after it, unless it returns an
    /// error and is marked `abort_on_error`.
    pub fn run(&self, ctx: &PackageContext) -> Result<Summary> {
        let mut summary = Summary::default();
        for packager in &self.packagers {
            if !self.is_enabled(packager.name()) {
                log::info!("Skipping disabled stage {}", packager.name());
                continue;
            }

            log::debug!("Running stage {}", packager.name());
            match packager.package(ctx) {
                Ok(result) => summary.push(result),
                Err(e) if packager.abort_on_error() => {
                    log::error!("{} stage aborted the run: {}", packager.label(), e);
                    println!("  ✗ {}: {}", packager.label(), e);
                    return Err(e);
                }
                Err(e) => {
                    log::error!("{} stage failed: {}", packager.label(), e);
                    println!("  ✗ {} failed: {}", packager.label(), e);
                    summary.push(StageResult::failed(packager.label(), e.to_string()));
                }
            }
        }
        Ok(summary)
    }

    /// Output location of every enabled stage
    pub fn locations(&self, out_dir: &Path) -> Vec<(String, PathBuf)> {
        self.packagers
            .iter()
            .filter(|p| self.is_enabled(p.name()))
            .map(|p| (p.label().to_string(), p.location(out_dir)))
            .collect()
    }
}

impl Default for PackagerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::render::Rasterizer;
    use std::cell::RefCell;
    use std::rc::Rc;

    enum Outcome {
        Pass,
        Fail,
        Error,
    }

    struct Fake {
        name: &'static str,
        priority: i32,
        outcome: Outcome,
        fatal: bool,
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Packager for Fake {
        fn name(&self) -> &str {
            self.name
        }

        fn label(&self) -> &str {
            self.name
        }

        fn package(&self, _ctx: &PackageContext) -> Result<StageResult> {
            self.calls.borrow_mut().push(self.name);
            match self.outcome {
                Outcome::Pass => Ok(StageResult::new(self.name, true)),
                Outcome::Fail => Ok(StageResult::failed(self.name, "nope")),
                Outcome::Error => Err(Error::Render("boom".into())),
            }
        }

        fn location(&self, out_dir: &Path) -> PathBuf {
            out_dir.join(self.name)
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn abort_on_error(&self) -> bool {
            self.fatal
        }
    }

    fn registry(
        stages: Vec<(&'static str, i32, Outcome, bool)>,
    ) -> (PackagerRegistry, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = PackagerRegistry::new();
        for (name, priority, outcome, fatal) in stages {
            registry.register(Box::new(Fake {
                name,
                priority,
                outcome,
                fatal,
                calls: Rc::clone(&calls),
            }));
        }
        (registry, calls)
    }

    fn run(registry: &PackagerRegistry) -> Result<Summary> {
        let rasterizer = Rasterizer::new(3.0);
        let ctx = PackageContext {
            out_dir: Path::new("unused"),
            rasterizer: &rasterizer,
        };
        registry.run(&ctx)
    }

    #[test]
    fn test_runs_in_priority_order() {
        let (registry, calls) = registry(vec![
            ("linux", 40, Outcome::Pass, false),
            ("app-icon", 10, Outcome::Pass, true),
            ("windows", 30, Outcome::Pass, false),
            ("macos", 20, Outcome::Pass, false),
        ]);
        let summary = run(&registry).unwrap();
        assert_eq!(*calls.borrow(), vec!["app-icon", "macos", "windows", "linux"]);
        assert!(summary.all_succeeded());
    }

    #[test]
    fn test_failures_do_not_short_circuit() {
        let (registry, calls) = registry(vec![
            ("app-icon", 10, Outcome::Pass, true),
            ("macos", 20, Outcome::Fail, false),
            ("windows", 30, Outcome::Error, false),
            ("linux", 40, Outcome::Pass, false),
        ]);
        let summary = run(&registry).unwrap();
        assert_eq!(calls.borrow().len(), 4);
        assert!(!summary.all_succeeded());
        assert_eq!(summary.failed_stages(), vec!["macos", "windows"]);
        assert_eq!(summary.results[2].detail.as_deref(), Some("Rendering failed: boom"));
    }

    #[test]
    fn test_fatal_error_stops_the_run() {
        let (registry, calls) = registry(vec![
            ("app-icon", 10, Outcome::Error, true),
            ("macos", 20, Outcome::Pass, false),
        ]);
        assert!(run(&registry).is_err());
        assert_eq!(*calls.borrow(), vec!["app-icon"]);
    }

    #[test]
    fn test_disabled_stages_are_skipped() {
        let (mut registry, calls) = registry(vec![
            ("app-icon", 10, Outcome::Pass, true),
            ("macos", 20, Outcome::Fail, false),
        ]);
        registry.set_enabled(&["app-icon".to_string()]);
        let summary = run(&registry).unwrap();
        assert_eq!(*calls.borrow(), vec!["app-icon"]);
        assert!(summary.all_succeeded());
        assert_eq!(registry.locations(Path::new("build")).len(), 1);
    }
}
