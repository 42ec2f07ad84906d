//! Revision numbers and the `REV1[,REV2]` selector given to `-r`.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::error::{InvalidRevision, Reason};

/// Separates the two halves of a selector.
pub const SEPARATOR: char = ',';

/// A Subversion revision number. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(i32);

impl Revision {
    pub fn new(value: i32) -> Option<Self> {
        (value >= 0).then_some(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Revision {
    type Err = InvalidRevision;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let value = parse_integer(token)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| InvalidRevision::new(token, Reason::NotAnInteger))?;
        Revision::new(value)
            .ok_or_else(|| InvalidRevision::new(token, Reason::Negative))
    }
}

/// Parses an integer literal with an optional sign and base prefix
/// (`0x`, `0o`, `0b`, or a bare leading `0` for octal).
///
/// Underscores may separate digits, or follow a base prefix directly.
fn parse_integer(s: &str) -> Option<i64> {
    let (negative, body) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let lower = body.to_ascii_lowercase();
    let (radix, digits, prefixed) = if lower.starts_with("0x") {
        (16, &body[2..], true)
    } else if lower.starts_with("0o") {
        (8, &body[2..], true)
    } else if lower.starts_with("0b") {
        (2, &body[2..], true)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..], true)
    } else {
        (10, body, false)
    };

    if digits.is_empty()
        || digits.ends_with('_')
        || digits.contains("__")
        || (!prefixed && digits.starts_with('_'))
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i64::from_str_radix(&cleaned, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// The parsed value of `-r REV1[,REV2]`.
///
/// The default value stands for an absent `-r`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevisionPair {
    pub first: Option<Revision>,
    pub second: Option<Revision>,
    /// Whether `-r` was present on the command line at all.
    pub supplied: bool,
}

impl RevisionPair {
    pub fn new(first: Option<Revision>, second: Option<Revision>) -> Self {
        Self {
            first,
            second,
            supplied: true,
        }
    }
}

fn parse_slot(token: Option<&str>) -> Result<Option<Revision>, InvalidRevision> {
    match token {
        None | Some("") => Ok(None),
        Some(t) => t.parse().map(Some),
    }
}

impl FromStr for RevisionPair {
    type Err = InvalidRevision;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut tokens = raw.split(SEPARATOR);
        let first = parse_slot(tokens.next())?;
        let second = parse_slot(tokens.next())?;

        let extra = tokens.count();
        if extra > 0 {
            warn!(
                "ignoring {} extra revision(s) in selector \"{}\"",
                extra, raw
            );
        }

        let pair = RevisionPair::new(first, second);
        debug!("parsed selector \"{}\" as {:?}", raw, pair);
        Ok(pair)
    }
}

impl fmt::Display for RevisionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first, self.second) {
            (Some(a), Some(b)) => write!(f, "{}{}{}", a, SEPARATOR, b),
            (Some(r), None) | (None, Some(r)) => write!(f, "{}", r),
            (None, None) => Ok(()),
        }
    }
}
