//! Magnet URI parser.
//!
//! # Syntax Overview
//!
//! Full pattern: `magnet:?key=value[&key=value]...`
//!
//! - **Plain keys**: `xt`, `dn`, `kt`, `mt`, `tr`, `xs`, `as`, `xl`
//! - **Indexed keys**: `xt.1`, `xs.2` (split on the first dot)
//! - **Experimental keys**: `x.<anything>`
//! - **Values**: everything after the first `=`, kept verbatim
//!
//! Each token is checked in a fixed order: [`split_token`], then
//! [`split_key`], then the prefix lookup. The first failing check decides the
//! error reported for that token.

mod parser;

pub use parser::{parse, parse_lenient, parse_strict, parse_token, split_key, split_token, ParseMode};
