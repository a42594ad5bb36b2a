//! Path patterns and path normalisation.
//!
//! A pattern is a literal path, optionally ending in a `*` segment. The wildcard
//! matches exactly one non-empty segment, which is handed to the route handler.

use crate::error::{InvalidPatternSnafu, Result};
use snafu::ensure;
use std::fmt;
use std::str::FromStr;

/// Characters a wildcard segment cannot contain.
const SEGMENT_STOPS: [char; 3] = ['/', '?', '#'];

/// Normalise a navigation path before matching.
///
/// Strips a `#!` or `#` fragment prefix, maps the empty path to `/`, adds a
/// missing leading `/` and drops one trailing `/` from non-root paths.
pub fn normalize(path: &str) -> String {
    let path = path
        .strip_prefix("#!")
        .or_else(|| path.strip_prefix('#'))
        .unwrap_or(path);

    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    /// Literal part. For wildcard patterns this keeps the trailing `/`.
    literal: String,
    wildcard: bool,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self> {
        ensure!(
            !raw.is_empty(),
            InvalidPatternSnafu {
                pattern: raw,
                reason: "pattern is empty",
            }
        );
        ensure!(
            raw.starts_with('/'),
            InvalidPatternSnafu {
                pattern: raw,
                reason: "pattern must start with '/'",
            }
        );

        let (literal, wildcard) = match raw.strip_suffix('*') {
            Some(prefix) => (prefix, true),
            None => (raw, false),
        };

        ensure!(
            !literal.contains('*'),
            InvalidPatternSnafu {
                pattern: raw,
                reason: "'*' is only allowed as the last segment",
            }
        );
        ensure!(
            !wildcard || literal.ends_with('/'),
            InvalidPatternSnafu {
                pattern: raw,
                reason: "'*' must be a whole segment",
            }
        );

        let literal = if wildcard {
            literal.to_string()
        } else {
            normalize(literal)
        };

        Ok(Self {
            raw: raw.to_string(),
            literal,
            wildcard,
        })
    }

    /// The pattern as it was registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Match an already normalised path.
    pub fn matches(&self, path: &str) -> Option<RouteMatch> {
        let wildcard = if self.wildcard {
            let segment = path.strip_prefix(self.literal.as_str())?;
            if segment.is_empty() || segment.contains(SEGMENT_STOPS) {
                return None;
            }
            Some(segment.to_string())
        } else if path == self.literal {
            None
        } else {
            return None;
        };

        Some(RouteMatch {
            path: path.to_string(),
            pattern: self.raw.clone(),
            wildcard,
        })
    }
}

impl FromStr for RoutePattern {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The outcome of a successful match, passed to the route handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    path: String,
    pattern: String,
    wildcard: Option<String>,
}

impl RouteMatch {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The segment captured by a trailing `*`.
    pub fn wildcard(&self) -> Option<&str> {
        self.wildcard.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("#/usage"), "/usage");
        assert_eq!(normalize("#!/usage"), "/usage");
        assert_eq!(normalize("#"), "/");
        assert_eq!(normalize("usage"), "/usage");
        assert_eq!(normalize("/groups/"), "/groups");
        assert_eq!(normalize("/usage?x=1"), "/usage?x=1");
    }

    #[test]
    fn test_literal_match() {
        let pattern = RoutePattern::parse("/usage").unwrap();
        let m = pattern.matches("/usage").unwrap();
        assert_eq!(m.pattern(), "/usage");
        assert_eq!(m.wildcard(), None);

        assert!(pattern.matches("/usage/extra").is_none());
        assert!(pattern.matches("/usage?x=1").is_none());
        assert!(pattern.matches("/").is_none());
    }

    #[test]
    fn test_root_only_matches_root() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/groups").is_none());
    }

    #[test]
    fn test_wildcard_captures_one_segment() {
        let pattern = RoutePattern::parse("/group/*").unwrap();
        assert!(pattern.has_wildcard());

        let m = pattern.matches("/group/42").unwrap();
        assert_eq!(m.wildcard(), Some("42"));
        assert_eq!(m.path(), "/group/42");

        assert!(pattern.matches("/group").is_none());
        assert!(pattern.matches("/group/").is_none());
        assert!(pattern.matches("/groups").is_none());
    }

    #[test]
    fn test_wildcard_stops_at_separators() {
        let pattern = RoutePattern::parse("/group/*").unwrap();
        for path in ["/group/a/b", "/group/42?x=1", "/group/42#top", "/group/?x"] {
            assert!(pattern.matches(path).is_none(), "{path}");
        }
    }

    #[test]
    fn test_invalid_patterns() {
        for raw in ["", "usage", "/gr*up", "/group*", "/*/x"] {
            let err = RoutePattern::parse(raw).unwrap_err();
            assert!(matches!(err, Error::InvalidPattern { .. }), "{raw}: {err}");
        }
    }
}
