//! Command implementations for mgq.

use std::path::Path;

use magneturi::{parse, Document, ParseMode, Prefix};

use crate::config::{resolve_config_path, Config, OutputFormat};
use crate::error::{Error, Result};
use crate::output;

fn load(uri: &str, mode: ParseMode) -> Result<Document> {
    let doc = parse(uri, mode)?;
    tracing::info!(?mode, parameters = doc.len(), "parsed magnet uri");
    Ok(doc)
}

fn warn_unknown(prefixes: &[String]) {
    for p in prefixes {
        if Prefix::from_tag(p).is_none() {
            tracing::warn!(prefix = %p, "not a known magnet prefix, it will never match");
        }
    }
}

/// Print the canonical form (and table) of a magnet URI.
pub fn parse_uri(uri: &str, mode: ParseMode, format: OutputFormat) -> Result<()> {
    let doc = load(uri, mode)?;
    println!("{}", output::render(&doc, format)?);
    Ok(())
}

/// Print the subset of a magnet URI selected by prefix.
pub fn filter(
    uri: &str,
    prefixes: &[String],
    require: bool,
    mode: ParseMode,
    format: OutputFormat,
) -> Result<()> {
    warn_unknown(prefixes);
    let doc = load(uri, mode)?;

    if require && !doc.has_all_prefixes(prefixes) {
        let missing = prefixes
            .iter()
            .filter(|p| !doc.has_prefix(p))
            .cloned()
            .collect();
        return Err(Error::MissingPrefixes(missing));
    }

    let filtered = doc.filter(prefixes);
    println!("{}", output::render(&filtered, format)?);
    Ok(())
}

/// Report whether every prefix is present.
pub fn check(uri: &str, prefixes: &[String], mode: ParseMode) -> Result<bool> {
    warn_unknown(prefixes);
    let doc = load(uri, mode)?;
    let present = doc.has_all_prefixes(prefixes);
    println!("{}", if present { "yes" } else { "no" });
    Ok(present)
}

/// Print the values of every parameter with the given prefix.
pub fn get(uri: &str, prefix: &str, mode: ParseMode) -> Result<()> {
    let doc = load(uri, mode)?;
    for record in doc.records_with_prefix(prefix)? {
        println!("{}", record.value());
    }
    Ok(())
}

/// Report whether two magnet URIs carry the same parameters.
pub fn compare(left: &str, right: &str, mode: ParseMode) -> Result<bool> {
    let left = load(left, mode)?;
    let right = load(right, mode)?;
    let equal = left == right;
    println!("{}", if equal { "equal" } else { "different" });
    Ok(equal)
}

/// List the known prefix tags.
pub fn prefixes() -> Result<()> {
    println!("{}", output::render_prefixes());
    Ok(())
}

/// Show the effective configuration, optionally writing it to disk.
pub fn config(config: &Config, explicit: Option<&Path>, save: bool) -> Result<()> {
    let path = resolve_config_path(explicit);

    if save {
        let path = path
            .as_deref()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        config.save_to(path)?;
        println!("Saved config to {}", path.display());
        return Ok(());
    }

    match &path {
        Some(p) => println!("# {}", p.display()),
        None => println!("# (no config file)"),
    }
    let contents = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
    print!("{}", contents);
    Ok(())
}
