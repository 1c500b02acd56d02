//! The closed set of parameter prefixes a magnet URI may carry.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::Error;

/// Every known prefix, in display order.
pub const KNOWN_PREFIXES: [Prefix; 9] = [
    Prefix::ExactTopic,
    Prefix::DisplayName,
    Prefix::KeywordTopic,
    Prefix::ManifestTopic,
    Prefix::Tracker,
    Prefix::ExactSource,
    Prefix::AcceptableSource,
    Prefix::ExactLength,
    Prefix::Experimental,
];

/// A parameter prefix tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prefix {
    /// `xt`
    ExactTopic,
    /// `dn`
    DisplayName,
    /// `kt`
    KeywordTopic,
    /// `mt`
    ManifestTopic,
    /// `tr`
    Tracker,
    /// `xs`
    ExactSource,
    /// `as`
    AcceptableSource,
    /// `xl`
    ExactLength,
    /// `x.` followed by a free-form suffix
    Experimental,
}

impl Prefix {
    /// Look up a prefix by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let prefix = match tag {
            "xt" => Prefix::ExactTopic,
            "dn" => Prefix::DisplayName,
            "kt" => Prefix::KeywordTopic,
            "mt" => Prefix::ManifestTopic,
            "tr" => Prefix::Tracker,
            "xs" => Prefix::ExactSource,
            "as" => Prefix::AcceptableSource,
            "xl" => Prefix::ExactLength,
            "x." => Prefix::Experimental,
            _ => return None,
        };
        Some(prefix)
    }

    /// The tag as it appears in a URI key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::ExactTopic => "xt",
            Prefix::DisplayName => "dn",
            Prefix::KeywordTopic => "kt",
            Prefix::ManifestTopic => "mt",
            Prefix::Tracker => "tr",
            Prefix::ExactSource => "xs",
            Prefix::AcceptableSource => "as",
            Prefix::ExactLength => "xl",
            Prefix::Experimental => "x.",
        }
    }

    /// Human-readable category label.
    pub fn label(&self) -> &'static str {
        match self {
            Prefix::ExactTopic => "exact topic",
            Prefix::DisplayName => "display name",
            Prefix::KeywordTopic => "keyword topic",
            Prefix::ManifestTopic => "manifest topic",
            Prefix::Tracker => "tracker",
            Prefix::ExactSource => "exact source",
            Prefix::AcceptableSource => "acceptable source",
            Prefix::ExactLength => "exact length",
            Prefix::Experimental => "experimental",
        }
    }

    /// True if `tag` names this prefix.
    #[inline]
    pub fn matches(&self, tag: &str) -> bool {
        self.as_str() == tag
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::from_tag(s).ok_or_else(|| Error::UnknownPrefix(s.to_string()))
    }
}

impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
