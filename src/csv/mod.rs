//! CSV helpers for roster and stat exports.
//!
//! Export uses standard quoting (values containing commas, quotes or
//! newlines are wrapped in double quotes, internal quotes doubled). Import
//! intentionally keeps the console's naive parser: rows are split on bare
//! commas with no quoted-field handling, so comma-containing values do not
//! round-trip. That lossiness is part of the documented contract.

use std::collections::HashMap;

/// Quote a single value for CSV output.
pub fn escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render a header row plus one row per record, newline separated.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| escape(c)).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Naive import parser: first line is the header, every later line is
/// split on commas, surrounding quotes are stripped from each cell, and
/// cells are keyed by trimmed header name. Blank lines are skipped.
pub fn parse(text: &str) -> Vec<HashMap<String, String>> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_string()).collect();

    lines
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let cell = cells.get(i).copied().unwrap_or("");
                    (h.clone(), strip_quotes(cell).to_string())
                })
                .collect()
        })
        .collect()
}

fn strip_quotes(cell: &str) -> &str {
    cell.strip_prefix('"')
        .and_then(|c| c.strip_suffix('"'))
        .unwrap_or(cell)
}
