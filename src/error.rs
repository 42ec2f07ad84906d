use std::fmt;

/// Why a revision token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    NotAnInteger,
    Negative,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NotAnInteger => f.write_str("not an integer"),
            Reason::Negative => f.write_str("less than zero"),
        }
    }
}

/// A token given to `-r` that is not a valid revision number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("revision number \"{token}\" {reason}")]
pub struct InvalidRevision {
    pub token: String,
    pub reason: Reason,
}

impl InvalidRevision {
    pub fn new(token: &str, reason: Reason) -> Self {
        Self {
            token: token.to_owned(),
            reason,
        }
    }
}

/// A selector that parsed cleanly but does not name a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// `-r` was given with no revision in it, e.g. `-r ""` or `-r ,`.
    #[error("option -r was given but names no revision")]
    EmptySelector,

    /// `-r ,REV2` without the first revision.
    #[error("option -r names a second revision but no first revision")]
    MissingFirstRevision,
}
