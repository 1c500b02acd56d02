//! magneturi: parse, query and re-serialize magnet URIs.
//!
//! ```text
//! raw string -> parse -> Document -> filter -> Document -> to_string
//! ```
//!
//! Parsing is available in a strict mode, where the first invalid parameter
//! is an error, and a lenient mode, where invalid parameters are dropped.

pub mod document;
pub mod error;
pub mod parse;
pub mod prefix;
pub mod record;

pub use document::{Document, Entry, EMPTY_DOCUMENT};
pub use error::{DotForm, Error, Result};
pub use parse::{parse, parse_lenient, parse_strict, ParseMode};
pub use prefix::{Prefix, KNOWN_PREFIXES};
pub use record::ParameterRecord;

/// Scheme literal every magnet URI starts with.
pub const SCHEME_PREFIX: &str = "magnet:?";
