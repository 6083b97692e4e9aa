//! Source table reader.
//!
//! The source table is UTF-8 text with one character entry per line and fields
//! separated by a single space:
//!
//! ```text
//! # char simp chinese big5 hkscs zhuyin kanji hiragana katakana punct symbol cj3 cj5 shortcode freq
//! 倉 仓 1 1 0 0 1 0 0 0 0 oiar oiar NA 100
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A line with fewer than
//! [`MIN_FIELD_COUNT`] fields stops the read with a malformed-entry error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::*;

use crate::utils::{skip_utf8_bom, strip_line_ending};
use crate::{CongkitError, Result};

/// Minimum number of space-delimited fields of a character entry.
pub const MIN_FIELD_COUNT: usize = 15;

/// Field positions of a table row.
pub mod field {
    pub const TRADITIONAL: usize = 0;
    pub const SIMPLIFIED: usize = 1;
    /// First of the nine 0/1 charset flags
    pub const FIRST_FLAG: usize = 2;
    pub const FLAG_COUNT: usize = 9;
    pub const CONGKIT_V3: usize = 11;
    pub const CONGKIT_V5: usize = 12;
    pub const SHORTCODE: usize = 13;
    pub const FREQUENCY: usize = 14;
}

/// Value of a field that has no data.
pub const NOT_AVAILABLE: &str = "NA";
/// Shortcode value of the full-width space, which has no usable shortcode.
pub const SPACE_SHORTCODE: &str = "SPACE";

/// A parsed table line, one string per field.
pub type TableRow = Vec<String>;

static BUILTIN_TABLE: &str = include_str!("../../assets/table.txt");

enum Line {
    Empty,
    Comment,
    Entry(TableRow),
}

fn parse_line(line: &str, line_no: usize) -> Result<Line> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Line::Empty);
    }
    if trimmed.starts_with('#') {
        return Ok(Line::Comment);
    }

    let fields: TableRow = line.split(' ').map(str::to_string).collect();
    if fields.len() < MIN_FIELD_COUNT {
        return Err(CongkitError::malformed_entry(line_no, fields.len(), MIN_FIELD_COUNT));
    }
    Ok(Line::Entry(fields))
}

/// Reads all entries of a source table.
///
/// # Errors
///
/// Returns `MalformedEntry` with the 1-based line number of the first line
/// that has too few fields. No rows after that line are read.
pub fn read_table<R: BufRead>(mut reader: R) -> Result<Vec<TableRow>> {
    let mut table = Vec::<TableRow>::new();
    let mut line_buffer = String::new();
    let mut line_no = 0usize;
    let mut skipped = 0usize;

    loop {
        line_buffer.clear();
        if reader.read_line(&mut line_buffer)? == 0 {
            break;
        }
        line_no += 1;

        let mut line = strip_line_ending(&line_buffer);
        if line_no == 1 {
            line = skip_utf8_bom(line);
        }

        match parse_line(line, line_no)? {
            Line::Entry(fields) => table.push(fields),
            Line::Empty | Line::Comment => skipped += 1,
        }
    }

    debug!("Read {} entries from {} lines ({} skipped)", table.len(), line_no, skipped);
    Ok(table)
}

/// Reads a source table file.
pub fn read_table_file<P: AsRef<Path>>(path: P) -> Result<Vec<TableRow>> {
    let path = path.as_ref();
    info!("Reading radicals table: {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    read_table(reader)
}

/// Reads the table embedded in the crate.
pub fn read_builtin_table() -> Result<Vec<TableRow>> {
    info!("Reading built-in radicals table");
    read_table(BUILTIN_TABLE.as_bytes())
}
