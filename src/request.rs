//! Turns a PATH and a revision selector into the two sides of a diff.

use std::fmt;
use std::path::Path;

use log::debug;

use crate::error::SelectorError;
use crate::revision::{Revision, RevisionPair};

/// Answers whether a PATH names something on the local filesystem.
pub trait PathLookup {
    fn exists(&self, path: &str) -> bool;
}

/// Checks the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl PathLookup for LocalFilesystem {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}

impl<F> PathLookup for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    WorkingCopy,
    Head,
    Explicit(Revision),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::WorkingCopy => f.write_str("WC"),
            Endpoint::Head => f.write_str("HEAD"),
            Endpoint::Explicit(rev) => write!(f, "{}", rev),
        }
    }
}

/// How PATH was classified while resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// PATH exists locally, so it is taken to be a working copy.
    Local,
    /// PATH does not exist locally, so it must be a fully-qualified URL.
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    WorkingCopyVsHead,
    RevisionVsWorkingCopy,
    RevisionVsHead,
    RevisionVsRevision,
}

impl Mode {
    /// The numbering used by the usage text.
    pub fn number(self) -> u8 {
        match self {
            Mode::WorkingCopyVsHead => 1,
            Mode::RevisionVsWorkingCopy => 2,
            Mode::RevisionVsHead => 3,
            Mode::RevisionVsRevision => 4,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Mode::WorkingCopyVsHead => "working copy compared to HEAD",
            Mode::RevisionVsWorkingCopy => "revision compared to working copy",
            Mode::RevisionVsHead => "revision compared to HEAD",
            Mode::RevisionVsRevision => "revision compared to revision",
        };
        write!(f, "{}. {}", self.number(), text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub path: String,
    pub location: Location,
    pub mode: Mode,
    pub left: Endpoint,
    pub right: Endpoint,
}

impl ComparisonRequest {
    /// Renders one side as `PATH@(ENDPOINT)`.
    pub fn describe(&self, endpoint: Endpoint) -> String {
        format!("{}@({})", self.path, endpoint)
    }
}

/// Picks the comparison implied by the shape of `pair` and, for a single
/// revision, by whether `path` exists locally.
///
/// `lookup` is asked exactly once for every valid selector, and the answer is
/// kept as the request's `location`.
pub fn resolve<P>(
    path: &str,
    pair: &RevisionPair,
    lookup: &P,
) -> Result<ComparisonRequest, SelectorError>
where
    P: PathLookup + ?Sized,
{
    use Endpoint as E;

    let (first, second) = match (pair.supplied, pair.first, pair.second) {
        (false, _, _) => (None, None),
        (true, Some(a), b) => (Some(a), b),
        (true, None, Some(_)) => return Err(SelectorError::MissingFirstRevision),
        (true, None, None) => return Err(SelectorError::EmptySelector),
    };

    let location = if lookup.exists(path) {
        Location::Local
    } else {
        Location::Remote
    };

    let (mode, left, right) = match (first, second, location) {
        (None, _, _) => (Mode::WorkingCopyVsHead, E::WorkingCopy, E::Head),
        (Some(a), Some(b), _) => (Mode::RevisionVsRevision, E::Explicit(a), E::Explicit(b)),
        (Some(a), None, Location::Local) => {
            (Mode::RevisionVsWorkingCopy, E::Explicit(a), E::WorkingCopy)
        }
        (Some(a), None, Location::Remote) => (Mode::RevisionVsHead, E::Explicit(a), E::Head),
    };

    debug!(
        "resolved \"{}\" ({:?}) with selector \"{}\" to mode {}",
        path,
        location,
        pair,
        mode.number()
    );
    Ok(ComparisonRequest {
        path: path.to_owned(),
        location,
        mode,
        left,
        right,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn rev(n: i32) -> Revision {
        Revision::new(n).unwrap()
    }

    fn exists(_: &str) -> bool {
        true
    }

    fn missing(_: &str) -> bool {
        false
    }

    #[test]
    fn absent_selector_compares_wc_to_head() {
        let pair = RevisionPair::default();
        let req = resolve("/local/wc", &pair, &exists).unwrap();
        assert_eq!(req.mode, Mode::WorkingCopyVsHead);
        assert_eq!(req.location, Location::Local);
        assert_eq!(
            (req.left, req.right),
            (Endpoint::WorkingCopy, Endpoint::Head)
        );
        assert_eq!(req.path, "/local/wc");
    }

    #[test]
    fn single_revision_on_local_path() {
        let pair = RevisionPair::new(Some(rev(42)), None);
        let req = resolve("/local/wc", &pair, &exists).unwrap();
        assert_eq!(req.mode, Mode::RevisionVsWorkingCopy);
        assert_eq!(req.location, Location::Local);
        assert_eq!(
            (req.left, req.right),
            (Endpoint::Explicit(rev(42)), Endpoint::WorkingCopy)
        );
    }

    #[test]
    fn single_revision_on_remote_url() {
        let pair = RevisionPair::new(Some(rev(42)), None);
        let req = resolve("https://repo/trunk", &pair, &missing).unwrap();
        assert_eq!(req.mode, Mode::RevisionVsHead);
        assert_eq!(req.location, Location::Remote);
        assert_eq!(
            (req.left, req.right),
            (Endpoint::Explicit(rev(42)), Endpoint::Head)
        );
    }

    #[test]
    fn two_revisions_still_classify_path() {
        let pair = RevisionPair::new(Some(rev(10)), Some(rev(20)));
        for (lookup, location) in [
            (exists as fn(&str) -> bool, Location::Local),
            (missing, Location::Remote),
        ] {
            let req = resolve("https://repo/trunk", &pair, &lookup).unwrap();
            assert_eq!(req.mode, Mode::RevisionVsRevision);
            assert_eq!(req.location, location);
            assert_eq!(
                (req.left, req.right),
                (Endpoint::Explicit(rev(10)), Endpoint::Explicit(rev(20)))
            );
        }
    }

    #[test]
    fn absent_selector_on_missing_path_is_remote() {
        let pair = RevisionPair::default();
        let req = resolve("https://repo/trunk", &pair, &missing).unwrap();
        assert_eq!(req.mode, Mode::WorkingCopyVsHead);
        assert_eq!(req.location, Location::Remote);
    }

    #[test]
    fn path_checked_once_per_valid_selector() {
        let calls = Cell::new(0);
        let counting = |_: &str| {
            calls.set(calls.get() + 1);
            true
        };

        let valid = [
            RevisionPair::default(),
            RevisionPair::new(Some(rev(1)), Some(rev(2))),
            RevisionPair::new(Some(rev(1)), None),
        ];
        for (n, pair) in valid.iter().enumerate() {
            resolve("p", pair, &counting).unwrap();
            assert_eq!(calls.get(), n + 1);
        }

        let empty = RevisionPair::new(None, None);
        resolve("p", &empty, &counting).unwrap_err();
        assert_eq!(calls.get(), valid.len());
    }

    #[test]
    fn supplied_but_empty_selector_is_an_error() {
        let pair = RevisionPair::new(None, None);
        assert_eq!(
            resolve("p", &pair, &exists),
            Err(SelectorError::EmptySelector)
        );
    }

    #[test]
    fn second_without_first_is_an_error() {
        let pair = RevisionPair::new(None, Some(rev(3)));
        assert_eq!(
            resolve("p", &pair, &exists),
            Err(SelectorError::MissingFirstRevision)
        );
    }

    #[test]
    fn endpoints_render_like_peg_targets() {
        let pair = RevisionPair::new(Some(rev(7)), None);
        let req = resolve("trunk", &pair, &exists).unwrap();
        assert_eq!(req.describe(req.left), "trunk@(7)");
        assert_eq!(req.describe(req.right), "trunk@(WC)");
        assert_eq!(req.describe(Endpoint::Head), "trunk@(HEAD)");
        let mode = req.mode.to_string();
        assert_eq!(mode, "2. revision compared to working copy");
    }
}
