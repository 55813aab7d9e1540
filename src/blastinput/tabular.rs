//! BLAST tabular report input
//!
//! Reads the rows written by `blastp/blastn -outfmt "7 std qlen slen"` (or
//! format 6 with the same fields). Field order:
//!
//! ```text
//! qseqid sseqid pident length mismatch gapopen qstart qend sstart send evalue bitscore qlen slen
//! ```
//!
//! Comment lines (`# BLASTP 2.x`, `# Fields: ...`, `# 3 hits found`) and blank
//! lines are skipped by [`TabularReader`]; everything else must be a complete
//! row or the whole read fails.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::common::{coverage_percent, TabularHit};

/// Number of columns in `std qlen slen`
pub const TABULAR_FIELDS: usize = 14;

/// A row of the report could not be turned into a [`TabularHit`].
///
/// `line` is 1-based within the input; 0 means the row was parsed on its own,
/// outside a reader.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected at least 14 tab-separated fields, found {found}")]
    TooFewFields { line: usize, found: usize },

    #[error("line {line}: invalid {field} '{value}': {reason}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("line {line}: {field} is zero, coverage is undefined")]
    ZeroLength { line: usize, field: &'static str },

    #[error("line {line}: read failed: {source}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    /// Line the error refers to (0 when parsed outside a reader)
    pub fn line(&self) -> usize {
        match self {
            ParseError::TooFewFields { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::ZeroLength { line, .. }
            | ParseError::Io { line, .. } => *line,
        }
    }
}

fn parse_field<T>(value: &str, field: &'static str, line: usize) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ParseError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_length(value: &str, field: &'static str, line: usize) -> Result<u64, ParseError> {
    let len: u64 = parse_field(value, field, line)?;
    if len == 0 {
        return Err(ParseError::ZeroLength { line, field });
    }
    Ok(len)
}

/// Whether a raw line is a comment (`#` after leading whitespace)
#[inline]
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

impl TabularHit {
    /// Parse one report row. `line` is only used in error messages.
    ///
    /// Leading and trailing whitespace is ignored, as are columns after the
    /// fourteenth.
    pub fn from_tabular_line(raw: &str, line: usize) -> Result<Self, ParseError> {
        let fields: Vec<&str> = raw.trim().split('\t').collect();
        if fields.len() < TABULAR_FIELDS {
            return Err(ParseError::TooFewFields {
                line,
                found: fields.len(),
            });
        }

        let q_start: i64 = parse_field(fields[6], "qstart", line)?;
        let q_end: i64 = parse_field(fields[7], "qend", line)?;
        let s_start: i64 = parse_field(fields[8], "sstart", line)?;
        let s_end: i64 = parse_field(fields[9], "send", line)?;
        let q_len = parse_length(fields[12], "qlen", line)?;
        let s_len = parse_length(fields[13], "slen", line)?;

        Ok(TabularHit {
            query_id: fields[0].to_string(),
            subject_id: fields[1].to_string(),
            identity: parse_field(fields[2], "pident", line)?,
            length: parse_field(fields[3], "length", line)?,
            mismatch: parse_field(fields[4], "mismatch", line)?,
            gapopen: parse_field(fields[5], "gapopen", line)?,
            q_start,
            q_end,
            s_start,
            s_end,
            e_value: parse_field(fields[10], "evalue", line)?,
            bit_score: parse_field(fields[11], "bitscore", line)?,
            q_len,
            s_len,
            q_coverage: coverage_percent(q_start, q_end, q_len),
            s_coverage: coverage_percent(s_start, s_end, s_len),
        })
    }
}

impl FromStr for TabularHit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabularHit::from_tabular_line(s, 0)
    }
}

/// Streaming reader over a tabular report.
///
/// Yields one `Result` per data row in file order. Iteration should stop at
/// the first error; the reader itself does not resynchronize.
pub struct TabularReader<R: BufRead> {
    reader: R,
    line_buf: String,
    line_number: usize,
}

impl TabularReader<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TabularReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buf: String::with_capacity(256),
            line_number: 0,
        }
    }

    /// 1-based number of the last line read (0 before the first read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for TabularReader<R> {
    type Item = Result<TabularHit, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buf.clear();
            match self.reader.read_line(&mut self.line_buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line_buf.trim();
                    if line.is_empty() || is_comment(line) {
                        continue;
                    }
                    return Some(TabularHit::from_tabular_line(line, self.line_number));
                }
                Err(source) => {
                    return Some(Err(ParseError::Io {
                        line: self.line_number + 1,
                        source,
                    }))
                }
            }
        }
    }
}
