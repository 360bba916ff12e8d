//! Community paths: colon-separated segment lists such as `65535:666`.
//!
//! Segments are opaque strings. Nothing here checks that a segment is a
//! number or that it fits in 16 bits; `64512:*` and `rt:65000:100` are as
//! valid as `65535:0`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator between path segments.
pub const DELIMITER: char = ':';

/// Registry key that matches any segment without an exact entry.
pub const WILDCARD: &str = "*";

/// ASN reserved for the IANA well-known communities.
pub const WELL_KNOWN_ASN: &str = "65535";

// ==============================================================================
// Community Path
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommunityPath {
    segments: Vec<String>,
}

impl CommunityPath {
    /// Split a community identifier on `:`. Never fails; an empty string
    /// yields a single empty segment.
    pub fn parse(community: &str) -> Self {
        Self {
            segments: split_segments(community).map(str::to_string).collect(),
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// All segments except the last, or `None` for paths of length <= 1.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() <= 1 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment.into());
        Self { segments }
    }

    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.segments.starts_with(&self.segments)
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(|s| s == WILDCARD)
    }
}

/// Path of a well-known community, `65535:<value>`.
pub fn well_known(value: &str) -> CommunityPath {
    CommunityPath::from_segments([WELL_KNOWN_ASN, value])
}

/// Borrowing split used by the registries so lookups don't allocate.
pub(crate) fn split_segments(community: &str) -> std::str::Split<'_, char> {
    community.split(DELIMITER)
}

impl fmt::Display for CommunityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.segments.iter();
        if let Some(first) = iter.next() {
            f.write_str(first)?;
            for segment in iter {
                write!(f, "{DELIMITER}{segment}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for CommunityPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for CommunityPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

// Serialized as the joined string, the same form callers pass to lookups.
impl Serialize for CommunityPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CommunityPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
