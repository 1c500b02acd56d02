//! Error types for magnet URI parsing and querying.

use std::fmt;

use crate::SCHEME_PREFIX;

/// Which dotted key form was missing its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotForm {
    /// `xt.` style key: a known tag followed by a dot.
    Generic,
    /// `x.` experimental key with nothing after the dot.
    Experimental,
}

impl fmt::Display for DotForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotForm::Generic => write!(f, "dot index missing"),
            DotForm::Experimental => write!(f, "experimental info missing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("uri doesn't start with the Magnet URI schema prefix {scheme:?}", scheme = SCHEME_PREFIX)]
    MissingSchemePrefix,

    #[error("parameter without prefix or prefix without parameter: {0:?}")]
    MalformedToken(String),

    #[error("{form}: {key:?}")]
    EmptyIndex { key: String, form: DotForm },

    #[error("invalid parameter prefix: {0:?}")]
    UnknownPrefix(String),

    #[error("no parameters with prefix {0:?}")]
    NoMatch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
