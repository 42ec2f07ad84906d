//! The `svn diff` invocation a comparison request maps to.
//!
//! Nothing here runs `svn`; the plan is handed to whoever does.

use std::fmt;
use std::path::PathBuf;

use log::{debug, warn};

use crate::request::{ComparisonRequest, Endpoint};

pub const SVN: &str = "svn";

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPlan {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl DiffPlan {
    pub fn new(program: impl Into<PathBuf>, req: &ComparisonRequest) -> Self {
        Self {
            program: program.into(),
            args: diff_args(req),
        }
    }
}

impl fmt::Display for DiffPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Locates `svn` on `PATH`, falling back to the bare name.
pub fn find_svn() -> PathBuf {
    match which::which(SVN) {
        Ok(path) => {
            debug!("found {} at {}", SVN, path.display());
            path
        }
        Err(e) => {
            warn!("cannot find {} on PATH ({}), using the bare name", SVN, e);
            PathBuf::from(SVN)
        }
    }
}

/// `PATH` for the working copy, `PATH@HEAD` or `PATH@N` otherwise.
pub fn target(path: &str, endpoint: Endpoint) -> String {
    match endpoint {
        Endpoint::WorkingCopy => path.to_owned(),
        Endpoint::Head => format!("{}@HEAD", path),
        Endpoint::Explicit(rev) => format!("{}@{}", path, rev),
    }
}

pub fn diff_args(req: &ComparisonRequest) -> Vec<String> {
    vec![
        "diff".to_owned(),
        format!("--old={}", target(&req.path, req.left)),
        format!("--new={}", target(&req.path, req.right)),
    ]
}
