//! Linear pipeline orchestration: render, execute, extract.

use tracing::debug;

use crate::config::SweepConfig;
use crate::errors::SweepResult;
use crate::extract::extract_mean;
use crate::keywords::resolve_keywords;
use crate::runner::ProcessRunner;
use crate::template::render_template;

/// Composes keyword resolution, template rendering, process execution
/// and result extraction. Every run owns an independent working
/// directory, so pipelines may execute from parallel threads or
/// processes without coordination.
#[derive(Debug, Clone)]
pub struct Pipeline {
    runner: ProcessRunner,
}

impl Pipeline {
    pub fn new(runner: ProcessRunner) -> Self {
        Self { runner }
    }

    /// Run one sweep and return the mean response value.
    ///
    /// Any stage error terminates the run and propagates unmodified; no
    /// stage is retried. The working directory is removed on every path
    /// out of this function, success or failure.
    pub fn run(&self, cfg: &SweepConfig) -> SweepResult<f64> {
        let replacements = resolve_keywords(cfg);
        let doc = render_template(&cfg.template_file, &replacements)?;
        let workdir = self.runner.execute(&doc)?;
        let mean = extract_mean(workdir.path())?;
        debug!(mean, samples = cfg.nb_of_samples, method = %cfg.method, "sweep complete");
        Ok(mean)
    }
}
