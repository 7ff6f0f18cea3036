// src/csv.rs
use std::mem::take;

use crate::case::{Record, Value};

/// Minimal CSV parser (quotes + CRLF tolerant). std-only.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without newline (unterminated quotes included).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Turn header + rows into records. Every value is a JSON string; short rows
/// leave their missing fields out, extra cells are dropped.
pub fn records_from_rows(headers: &[String], rows: Vec<Vec<String>>) -> Vec<Record> {
    rows.into_iter()
        .map(|row| -> Record {
            headers.iter()
                .zip(row)
                .map(|(h, cell)| (h.clone(), Value::String(cell)))
                .collect()
        })
        .collect()
}
