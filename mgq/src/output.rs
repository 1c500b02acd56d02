//! Rendering of parsed documents for the terminal.

use magneturi::{Document, Entry, KNOWN_PREFIXES};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

const TABLE_HEADERS: [&str; 5] = ["#", "Prefix", "Index/Exp", "Description", "Value"];

#[derive(Serialize)]
struct JsonReport<'a> {
    /// Canonical URI, absent for an empty document.
    uri: Option<String>,
    parameters: Vec<Entry<'a>>,
}

/// Render a document in the requested format.
pub fn render(doc: &Document, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Uri => doc.to_string(),
        OutputFormat::Table => {
            if doc.is_empty() {
                doc.to_string()
            } else {
                format!("{}\n{}", doc, render_table(doc))
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                uri: (!doc.is_empty()).then(|| doc.to_string()),
                parameters: doc.entries().collect(),
            };
            serde_json::to_string_pretty(&report)?
        }
    };
    Ok(rendered)
}

/// Parameter table with aligned columns.
pub fn render_table(doc: &Document) -> String {
    let rows: Vec<[String; 5]> = doc
        .entries()
        .map(|e| {
            [
                e.position.to_string(),
                e.prefix.to_string(),
                e.index.to_string(),
                e.label.to_string(),
                e.value.to_string(),
            ]
        })
        .collect();

    let underline = TABLE_HEADERS.map(|h| "=".repeat(h.len()));
    let header = TABLE_HEADERS.map(str::to_string);

    let mut widths = [0usize; 5];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(&header)
        .chain(std::iter::once(&underline))
        .chain(rows.iter())
        .map(|row| format_row(row, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(row: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, cell) in row.iter().enumerate() {
        if i + 1 == row.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$} ", cell, width = widths[i]));
        }
    }
    line
}

/// Known prefix tags and their labels.
pub fn render_prefixes() -> String {
    KNOWN_PREFIXES
        .iter()
        .map(|p| format!("{:<4} {}", p.as_str(), p.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
