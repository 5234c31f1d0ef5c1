//! External process execution inside a scoped working directory.

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::errors::{SweepError, SweepResult};
use crate::template::RenderedDocument;

/// Rendered input filename inside the working directory.
pub const INPUT_FILE: &str = "dakota.in";
/// Captured stdout of the external tool.
pub const STDOUT_LOG: &str = "log.dakota.out";
/// Captured stderr of the external tool.
pub const STDERR_LOG: &str = "log.dakota.err";

/// Environment variable overriding the executable to invoke.
pub const PROGRAM_ENV: &str = "DAKOTA_BIN";
/// Executable resolved on PATH when the override is unset.
pub const DEFAULT_PROGRAM: &str = "dakota";

/// Scoped working directory owning the rendered input, both captured
/// logs, and whatever the external tool leaves behind. The directory and
/// all of its contents are removed when the value drops, on every exit
/// path out of a run.
#[derive(Debug)]
pub struct WorkDir {
    dir: TempDir,
}

impl WorkDir {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Invokes the external sampling executable against a rendered document.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
}

impl ProcessRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the executable: `DAKOTA_BIN` if set, else `dakota` on PATH.
    pub fn from_env() -> Self {
        match env::var_os(PROGRAM_ENV) {
            Some(bin) => Self::new(PathBuf::from(bin)),
            None => Self::new(DEFAULT_PROGRAM),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Materialize `doc` in a fresh working directory and run
    /// `<program> -i dakota.in` there, stdout and stderr captured to the
    /// two log files. Blocks until the child exits.
    ///
    /// A non-zero exit status is logged but deliberately not turned into
    /// an error: the missing or malformed result artifact is the failure
    /// signal surfaced downstream.
    pub fn execute(&self, doc: &RenderedDocument) -> SweepResult<WorkDir> {
        let dir = tempfile::Builder::new().prefix("genzrun-").tempdir()?;

        std::fs::write(dir.path().join(INPUT_FILE), doc.contents())?;
        let stdout = File::create(dir.path().join(STDOUT_LOG))?;
        let stderr = File::create(dir.path().join(STDERR_LOG))?;

        debug!(
            program = %self.program.display(),
            workdir = %dir.path().display(),
            "launching external sampler"
        );

        let status = Command::new(&self.program)
            .arg("-i")
            .arg(INPUT_FILE)
            .current_dir(dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status()
            .map_err(|source| SweepError::ProcessLaunch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            warn!(%status, "external sampler exited abnormally; continuing to result extraction");
        }

        Ok(WorkDir { dir })
    }
}
