//! Reading of the externally maintained donor CSV files.
//!
//! Both sources are spreadsheet exports, so their shape is only loosely
//! trusted:
//! - the field delimiter is detected from the header line (`,` `;` tab `|`);
//! - header names are matched after trimming and lower-casing;
//! - cells are trimmed, short rows yield empty cells, extra columns are ignored.

use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Why an external source could not be used.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),

    #[error("malformed source: {0}")]
    Parse(#[from] csv::Error),

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid {column} value '{value}' on line {line}")]
    InvalidValue {
        column: &'static str,
        line: usize,
        value: String,
    },
}

/// Picks the most frequent candidate delimiter in the header line,
/// falling back to a comma.
pub(crate) fn detect_delimiter(header_line: &str) -> u8 {
    DELIMITERS
        .iter()
        .copied()
        .map(|d| (d, header_line.bytes().filter(|&b| b == d).count()))
        .filter(|&(_, count)| count > 0)
        // max_by_key keeps the last maximum; reverse so earlier candidates win ties.
        .rev()
        .max_by_key(|&(_, count)| count)
        .map(|(d, _)| d)
        .unwrap_or(b',')
}

fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// An opened source with the positions of the requested columns resolved.
pub(crate) struct Source {
    reader: csv::Reader<BufReader<File>>,
    columns: Vec<usize>,
}

impl Source {
    /// Opens `path` and resolves `required` (lower-case names) against its header.
    pub(crate) fn open(path: &Path, required: &[&str]) -> Result<Self, LookupError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LookupError::NotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };

        // Sniff the delimiter from the first line, then hand the whole file to csv.
        let mut buffered = BufReader::new(file);
        let mut header_line = String::new();
        buffered.read_line(&mut header_line)?;
        let delimiter = detect_delimiter(header_line.trim_end_matches(['\n', '\r']));
        buffered.rewind()?;

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(buffered);

        let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

        let mut columns = Vec::with_capacity(required.len());
        let mut missing = Vec::new();
        for name in required {
            match headers.iter().position(|h| h == *name) {
                Some(index) => columns.push(index),
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(LookupError::MissingColumns(missing));
        }

        Ok(Self { reader, columns })
    }

    /// Data rows as `(line, cells)`, with cells in the order the columns were
    /// requested. `line` is 1-based and counts the header.
    pub(crate) fn rows(
        &mut self,
    ) -> impl Iterator<Item = Result<(usize, Vec<String>), LookupError>> + '_ {
        let columns = &self.columns;
        self.reader.records().enumerate().map(
            move |(index, record)| -> Result<(usize, Vec<String>), LookupError> {
                let record = record?;
                let cells = columns
                    .iter()
                    .map(|&i| record.get(i).unwrap_or_default().to_string())
                    .collect();
                Ok((index + 2, cells))
            },
        )
    }
}
