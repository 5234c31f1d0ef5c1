//! Keyword resolution: a [`SweepConfig`] flattened into the replacement
//! entries understood by the input template.

use std::collections::BTreeMap;

use crate::config::SweepConfig;

/// Placeholder-name to replacement-text mapping. A `BTreeMap` keeps the
/// substitution order stable across runs.
pub type ReplacementMap = BTreeMap<String, String>;

/// Flatten `cfg` into the eight replacement entries: `template_file`,
/// `dimension`, `analysis_components`, `lower_bounds`, `upper_bounds`,
/// `nb_of_samples`, `method` and `extra_keys`.
///
/// Bounds are fixed to the unit hypercube, one `0`/`1` pair per
/// dimension. The method entry branches once: random/lhs become a
/// `sampling` block with a seed, anything else is handed to
/// `fsu_quasi_mc` as-is, with `extra_keys` collapsing to `latinize` or
/// nothing.
pub fn resolve_keywords(cfg: &SweepConfig) -> ReplacementMap {
    let mut map = ReplacementMap::new();
    map.insert(
        "template_file".to_string(),
        cfg.template_file.display().to_string(),
    );
    map.insert("dimension".to_string(), cfg.dimension.to_string());
    map.insert(
        "analysis_components".to_string(),
        cfg.analysis_components.clone(),
    );
    map.insert(
        "lower_bounds".to_string(),
        "0 ".repeat(cfg.dimension as usize),
    );
    map.insert(
        "upper_bounds".to_string(),
        "1 ".repeat(cfg.dimension as usize),
    );
    map.insert("nb_of_samples".to_string(), cfg.nb_of_samples.to_string());
    if cfg.is_pseudo_random() {
        map.insert(
            "method".to_string(),
            format!("sampling sample_type {}", cfg.method),
        );
        map.insert("extra_keys".to_string(), format!("seed {}", cfg.seed));
    } else {
        map.insert(
            "method".to_string(),
            format!("fsu_quasi_mc {}", cfg.method),
        );
        map.insert(
            "extra_keys".to_string(),
            if cfg.latinize {
                "latinize".to_string()
            } else {
                String::new()
            },
        );
    }
    map
}
