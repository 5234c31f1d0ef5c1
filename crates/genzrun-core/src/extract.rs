//! Result extraction from the external tool's HDF5 artifact.

use std::path::Path;

use crate::errors::{SweepError, SweepResult};

/// Artifact the external tool writes into the working directory.
pub const RESULTS_FILE: &str = "dakota_results.h5";

/// Fixed group chain down to the response data. The sentinel method and
/// model identifiers are what Dakota emits when the input names none;
/// they move with the Dakota version.
pub const RESPONSE_GROUPS: [&str; 5] = [
    "methods",
    "NO_METHOD_ID",
    "sources",
    "NO_MODEL_ID",
    "responses",
];

/// Dataset holding the sampled response values.
pub const RESPONSE_DATASET: &str = "functions";

/// Open the artifact inside `workdir` and return the arithmetic mean of
/// the response dataset, flattened regardless of its stored shape.
pub fn extract_mean(workdir: &Path) -> SweepResult<f64> {
    let path = workdir.join(RESULTS_FILE);
    if !path.is_file() {
        return Err(SweepError::ResultArtifactMissing { path });
    }

    let file = hdf5::File::open(&path).map_err(|err| schema_error(RESULTS_FILE, err))?;

    let mut node = file
        .group(RESPONSE_GROUPS[0])
        .map_err(|err| schema_error(RESPONSE_GROUPS[0], err))?;
    for name in &RESPONSE_GROUPS[1..] {
        node = node.group(name).map_err(|err| schema_error(name, err))?;
    }

    let values: Vec<f64> = node
        .dataset(RESPONSE_DATASET)
        .and_then(|ds| ds.read_raw::<f64>())
        .map_err(|err| schema_error(RESPONSE_DATASET, err))?;

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

fn schema_error(node: &str, err: hdf5::Error) -> SweepError {
    SweepError::ResultSchema {
        node: node.to_string(),
        detail: err.to_string(),
    }
}
