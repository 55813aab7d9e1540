//! `rbh` driver: read a tabular report, reduce it to reciprocal best hits and
//! write the pairs that pass the reporting cutoffs.
//!
//! The output is only opened once the whole input has been reduced, so a
//! malformed row aborts the run without creating (or truncating) the output
//! file.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::common::diagnostics::diagnostics_enabled;
use crate::blastinput::{ParseError, RbhArgs, TabularReader};
use crate::common::TabularHit;
use crate::config::Thresholds;
use crate::post::ReciprocalBestHits;
use crate::report::outfmt6::write_rbh_hits;

/// Counts of one completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows read from the report
    pub records: usize,
    /// Reciprocal pairs standing at the end of the pass
    pub retained: usize,
    /// Pairs written to the output
    pub reported: usize,
}

pub fn run(args: RbhArgs) -> Result<()> {
    let thresholds = args.thresholds();
    thresholds.validate().map_err(anyhow::Error::msg)?;

    if !args.input.is_file() {
        bail!("Input file {} does not exist.", args.input.display());
    }

    let reader = TabularReader::from_path(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;

    log::info!(
        "Reducing {} (min identity {}, min coverage {}, score floor {})",
        args.input.display(),
        thresholds.min_identity,
        thresholds.min_coverage,
        thresholds.score_floor
    );

    let bar = progress_bar(args.progress)?;
    let reduced = reduce_records(reader, thresholds, &bar);
    bar.finish_and_clear();
    let rbh = reduced.with_context(|| format!("Failed to read {}", args.input.display()))?;

    let diagnostics = rbh.diagnostics().clone();
    let retained = rbh.retained_len();
    let reported = write_reported(rbh.finalize(), args.output.as_deref())?;

    let summary = RunSummary {
        records: diagnostics.records_seen,
        retained,
        reported,
    };
    log::info!(
        "{} rows, {} reciprocal pairs retained, {} reported",
        summary.records,
        summary.retained,
        summary.reported
    );

    if diagnostics_enabled() || args.verbose >= 2 {
        diagnostics.print_summary(summary.retained, summary.reported);
    }

    Ok(())
}

/// Reduce a whole report held in `input`
pub fn reduce<R: BufRead>(input: R, thresholds: Thresholds) -> Result<ReciprocalBestHits, ParseError> {
    reduce_records(TabularReader::new(input), thresholds, &ProgressBar::hidden())
}

/// Reduce `input` and write the reported pairs to `output`.
///
/// Nothing is written if any row fails to parse.
pub fn run_streams<R, W>(input: R, output: &mut W, thresholds: Thresholds) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let rbh = reduce(input, thresholds)?;
    let records = rbh.diagnostics().records_seen;
    let retained = rbh.retained_len();
    let reported = write_rbh_hits(output, rbh.finalize())?;
    output.flush()?;

    Ok(RunSummary {
        records,
        retained,
        reported,
    })
}

fn reduce_records<R: BufRead>(
    records: TabularReader<R>,
    thresholds: Thresholds,
    bar: &ProgressBar,
) -> Result<ReciprocalBestHits, ParseError> {
    let mut rbh = ReciprocalBestHits::with_thresholds(thresholds);
    for record in records {
        rbh.update(record?);
        bar.inc(1);
    }
    Ok(rbh)
}

fn progress_bar(enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {pos} rows",
    )?);
    bar.enable_steady_tick(Duration::from_millis(100));
    Ok(bar)
}

fn write_reported<I>(hits: I, out_path: Option<&Path>) -> Result<usize>
where
    I: IntoIterator<Item = TabularHit>,
{
    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = out_path {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };

    let written = write_rbh_hits(&mut writer, hits).context("Failed to write output")?;
    writer.flush().context("Failed to write output")?;
    Ok(written)
}
