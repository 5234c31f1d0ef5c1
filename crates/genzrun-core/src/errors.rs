//! Error types for the sweep pipeline.

use std::path::PathBuf;

/// Sweep pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// Template path missing or unreadable.
    #[error("cannot read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External executable missing or unspawnable.
    #[error("cannot launch `{}`: {source}", program.display())]
    ProcessLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Expected result artifact absent after the run.
    #[error("result artifact not found: {}", path.display())]
    ResultArtifactMissing { path: PathBuf },

    /// Result artifact present but the fixed response path is absent or malformed.
    #[error("result artifact malformed at `{node}`: {detail}")]
    ResultSchema { node: String, detail: String },

    /// I/O failure while preparing the working directory.
    #[error("working directory error: {0}")]
    Workspace(#[from] std::io::Error),
}

impl SweepError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TemplateRead { .. } => 1,
            Self::ProcessLaunch { .. } => 2,
            Self::ResultArtifactMissing { .. } => 3,
            Self::ResultSchema { .. } => 4,
            Self::Workspace(_) => 5,
        }
    }
}

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;
