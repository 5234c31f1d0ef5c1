//! Sweep configuration and its defaults.
//!
//! The defaults below are the canonical defaults record; the CLI merges
//! caller overrides against them at parse time. Nothing mutates them.

use std::path::PathBuf;

pub const DEFAULT_TEMPLATE_FILE: &str = "dakota.in.template";
pub const DEFAULT_DIMENSION: u32 = 1;
pub const DEFAULT_ANALYSIS_COMPONENTS: &str = "os1";
pub const DEFAULT_NB_OF_SAMPLES: u64 = 1024;
pub const DEFAULT_METHOD: &str = "random";
pub const DEFAULT_SEED: i64 = 1234;

/// One parameter sweep over the external sampler.
///
/// Invariants: `dimension >= 1` and `nb_of_samples >= 1` (enforced at the
/// CLI edge). `method` is passed through unvalidated; see
/// [`SweepConfig::is_pseudo_random`] for the only distinction that
/// matters to keyword resolution.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Source configuration template.
    pub template_file: PathBuf,
    /// Number of sampled dimensions; drives the bound-list lengths.
    pub dimension: u32,
    /// Label handed verbatim to the analysis driver.
    pub analysis_components: String,
    /// Requested sample count.
    pub nb_of_samples: u64,
    /// Sampling method name (random, lhs, halton, hammersley, ...).
    pub method: String,
    /// RNG seed, only used by the pseudo-random methods.
    pub seed: i64,
    /// Latinize low-discrepancy samples.
    pub latinize: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            template_file: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            dimension: DEFAULT_DIMENSION,
            analysis_components: DEFAULT_ANALYSIS_COMPONENTS.to_string(),
            nb_of_samples: DEFAULT_NB_OF_SAMPLES,
            method: DEFAULT_METHOD.to_string(),
            seed: DEFAULT_SEED,
            latinize: false,
        }
    }
}

impl SweepConfig {
    /// True for the pseudo-random methods that take a seed. Everything
    /// else is driven through the sampler's low-discrepancy front-end,
    /// unrecognized names included.
    pub fn is_pseudo_random(&self) -> bool {
        matches!(self.method.as_str(), "random" | "lhs")
    }
}
