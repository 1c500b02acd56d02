//! Token-level grammar and the strict/lenient parse loop.

use std::str::FromStr;

use crate::{Document, DotForm, Error, ParameterRecord, Prefix, Result, SCHEME_PREFIX};

/// Key prefix introducing an experimental parameter.
const EXPERIMENTAL_KEY: &str = "x.";

/// How invalid parameters are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// The first invalid parameter aborts the parse.
    #[default]
    Strict,
    /// Invalid parameters are dropped; valid ones are kept in order.
    Lenient,
}

impl From<bool> for ParseMode {
    /// `true` selects lenient parsing.
    fn from(lenient: bool) -> Self {
        if lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        }
    }
}

/// Parse a raw magnet URI.
///
/// A missing `magnet:?` prefix is an error in both modes. In strict mode the
/// first invalid parameter is returned as the error; in lenient mode invalid
/// parameters are skipped and never surface.
pub fn parse(raw: &str, mode: ParseMode) -> Result<Document> {
    let payload = raw
        .strip_prefix(SCHEME_PREFIX)
        .ok_or(Error::MissingSchemePrefix)?;

    let mut document = Document::new();
    for token in payload.split('&') {
        match parse_token(token) {
            Ok(record) => document.push(record),
            Err(err) if mode == ParseMode::Lenient => {
                tracing::debug!(token, error = %err, "dropping invalid magnet parameter");
            }
            Err(err) => return Err(err),
        }
    }

    tracing::trace!(?mode, records = document.len(), "parsed magnet uri");
    Ok(document)
}

pub fn parse_strict(raw: &str) -> Result<Document> {
    parse(raw, ParseMode::Strict)
}

pub fn parse_lenient(raw: &str) -> Result<Document> {
    parse(raw, ParseMode::Lenient)
}

impl FromStr for Document {
    type Err = Error;

    /// Strict parse.
    fn from_str(s: &str) -> Result<Self> {
        parse_strict(s)
    }
}

/// Parse a single `key=value` token into a record.
pub fn parse_token(token: &str) -> Result<ParameterRecord> {
    let (key, value) = split_token(token)?;
    let (tag, index) = split_key(key)?;
    let prefix = Prefix::from_tag(tag).ok_or_else(|| Error::UnknownPrefix(tag.to_string()))?;
    Ok(ParameterRecord::from_parts(prefix, index.to_string(), value.to_string()))
}

/// Split a token on its first `=`. The value may itself contain `=`.
pub fn split_token(token: &str) -> Result<(&str, &str)> {
    match token.split_once('=') {
        Some((key, value)) if !value.is_empty() => Ok((key, value)),
        _ => Err(Error::MalformedToken(token.to_string())),
    }
}

/// Split a key into its prefix tag and index.
///
/// `x.<suffix>` yields the experimental tag with the whole suffix as index,
/// other dotted keys split on the first dot, and undotted keys have an empty
/// index. The tag is not checked against the known prefixes here.
pub fn split_key(key: &str) -> Result<(&str, &str)> {
    if let Some(suffix) = key.strip_prefix(EXPERIMENTAL_KEY) {
        if is_blank_index(suffix) {
            return Err(Error::EmptyIndex {
                key: key.to_string(),
                form: DotForm::Experimental,
            });
        }
        return Ok((EXPERIMENTAL_KEY, suffix));
    }

    if let Some((tag, index)) = key.split_once('.') {
        if is_blank_index(index) {
            return Err(Error::EmptyIndex {
                key: key.to_string(),
                form: DotForm::Generic,
            });
        }
        return Ok((tag, index));
    }

    Ok((key, ""))
}

/// An index that is empty or only a run of dots carries no information.
fn is_blank_index(index: &str) -> bool {
    index.chars().all(|c| c == '.')
}
