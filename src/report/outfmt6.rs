//! Tabular output of reciprocal best hits
//!
//! One line per reported pair, no header:
//!
//! ```text
//! qseqid  sseqid  pident  qcov  scov
//! ```
//!
//! Floats are written in shortest round-trip form with at least one
//! fractional digit (`90.0`, `66.67`), switching to exponent form below 1e-4
//! and from 1e16 up (`1e-05`, `1.5e+16`), so reruns of older pipelines diff
//! clean against this tool.

use std::io::{self, Write};

use crate::common::TabularHit;

/// Pad the exponent of a `{:e}` rendering to a sign and at least 2 digits.
fn pad_exponent(mut raw: String) -> String {
    let exp_pos = match raw.find('e').or_else(|| raw.find('E')) {
        Some(pos) => pos,
        None => return raw,
    };

    if raw.as_bytes()[exp_pos] == b'E' {
        raw.replace_range(exp_pos..=exp_pos, "e");
    }

    let exp_start = exp_pos + 1;
    if exp_start >= raw.len() {
        return raw;
    }

    if !matches!(raw.as_bytes()[exp_start], b'+' | b'-') {
        raw.insert(exp_start, '+');
    }
    let digits_start = exp_start + 1;

    if raw.len().saturating_sub(digits_start) < 2 {
        raw.insert(digits_start, '0');
    }

    raw
}

/// Format a float the way the reports this tool replaces did.
///
/// | value        | output      |
/// |--------------|-------------|
/// | `100.0`      | `100.0`     |
/// | `66.67`      | `66.67`     |
/// | `0.00001`    | `1e-05`     |
/// | `1.5e16`     | `1.5e+16`   |
/// | NaN / ±inf   | `nan` / `inf` / `-inf` |
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return pad_exponent(format!("{:e}", value));
    }

    let mut out = format!("{}", value);
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

/// Write one reported pair, newline terminated
pub fn write_rbh_line<W: Write>(writer: &mut W, hit: &TabularHit) -> io::Result<()> {
    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}",
        hit.query_id,
        hit.subject_id,
        format_float(hit.identity),
        format_float(hit.q_coverage),
        format_float(hit.s_coverage),
    )
}

/// Write every pair in iteration order. Returns the number of lines written.
pub fn write_rbh_hits<W, I>(writer: &mut W, hits: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = TabularHit>,
{
    let mut written = 0;
    for hit in hits {
        write_rbh_line(writer, &hit)?;
        written += 1;
    }
    Ok(written)
}
