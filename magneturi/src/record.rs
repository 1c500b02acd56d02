//! A single validated `key=value` parameter.

use std::fmt;

use serde::Serialize;

use crate::parse::parse_token;
use crate::{Error, Prefix, Result};

/// One parameter of a magnet URI.
///
/// Records can only be built with a known prefix and a non-empty value, and
/// are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ParameterRecord {
    prefix: Prefix,
    index: String,
    value: String,
}

impl ParameterRecord {
    /// Build a record from a prefix tag, an index (empty for none) and a value.
    ///
    /// The record must render to a token that parses back to itself, so the
    /// same rules apply as when parsing: known prefix, non-empty value, and a
    /// meaningful index for experimental keys.
    pub fn new(prefix: &str, index: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let prefix: Prefix = prefix.parse()?;
        let record = Self::from_parts(prefix, index.into(), value.into());

        let token = record.to_string();
        if token.contains('&') || parse_token(&token)? != record {
            return Err(Error::MalformedToken(token));
        }
        Ok(record)
    }

    /// Parts must already have passed the token grammar.
    pub(crate) fn from_parts(prefix: Prefix, index: String, value: String) -> Self {
        Self {
            prefix,
            index,
            value,
        }
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    /// Sub-index or experimental suffix; empty when the key had no dot.
    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn has_index(&self) -> bool {
        !self.index.is_empty()
    }
}

impl fmt::Display for ParameterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_index() {
            write!(
                f,
                "{}.{}={}",
                self.prefix.as_str().trim_end_matches('.'),
                self.index,
                self.value
            )
        } else {
            write!(f, "{}={}", self.prefix, self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DotForm;

    #[test]
    fn test_new_valid() {
        let record = ParameterRecord::new("xt", "2", "urn:tree:tiger:7N5OAMRNGMSSEUE3ORHOKWN4WWIQ5X4EBOOTLJY").unwrap();
        assert_eq!(record.prefix(), Prefix::ExactTopic);
        assert_eq!(record.index(), "2");
        assert!(record.has_index());
    }

    #[test]
    fn test_new_unknown_prefix() {
        let err = ParameterRecord::new("ll", "2", "urn:tree:tiger:7N5OAMRNGMSSEUE3ORHOKWN4WWIQ5X4EBOOTLJY").unwrap_err();
        assert_eq!(err, Error::UnknownPrefix("ll".to_string()));
    }

    #[test]
    fn test_new_empty_value() {
        let err = ParameterRecord::new("dn", "", "").unwrap_err();
        assert!(matches!(err, Error::MalformedToken(t) if t == "dn="));
    }

    #[test]
    fn test_new_experimental_requires_suffix() {
        let err = ParameterRecord::new("x.", "", "bar").unwrap_err();
        assert_eq!(
            err,
            Error::EmptyIndex {
                key: "x.".to_string(),
                form: DotForm::Experimental,
            }
        );
    }

    #[test]
    fn test_new_rejects_unrenderable_parts() {
        assert!(matches!(
            ParameterRecord::new("dn", "", "a&b"),
            Err(Error::MalformedToken(_))
        ));
        assert!(matches!(
            ParameterRecord::new("xt", "1=2", "urn:a"),
            Err(Error::MalformedToken(_))
        ));
        assert!(matches!(
            ParameterRecord::new("xt", "..", "urn:a"),
            Err(Error::EmptyIndex { form: DotForm::Generic, .. })
        ));
    }

    #[test]
    fn test_display_plain() {
        let record = ParameterRecord::new("dn", "", "file.iso").unwrap();
        assert_eq!(record.to_string(), "dn=file.iso");
    }

    #[test]
    fn test_display_indexed() {
        let record = ParameterRecord::new("xt", "1", "urn:a").unwrap();
        assert_eq!(record.to_string(), "xt.1=urn:a");
    }

    #[test]
    fn test_display_experimental_single_dot() {
        let record = ParameterRecord::new("x.", "Moz11", "test").unwrap();
        assert_eq!(record.to_string(), "x.Moz11=test");
    }

    #[test]
    fn test_serialize_uses_tag() {
        let record = ParameterRecord::new("x.", "Foo", "bar").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"prefix":"x.","index":"Foo","value":"bar"}"#);
    }
}
