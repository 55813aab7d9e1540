//! Unit tests for algorithm/rbh.rs

use rbh::algorithm::rbh::{run, run_streams, RunSummary};
use rbh::blastinput::{ParseError, RbhArgs};
use rbh::config::{Thresholds, PERC_COVERAGE_CUTOFF, PERC_IDENTITY_CUTOFF, SCORE_FLOOR};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::helpers::{scored_line, tabular_line};

fn args(input: PathBuf, output: Option<PathBuf>) -> RbhArgs {
    RbhArgs {
        input,
        output,
        min_identity: PERC_IDENTITY_CUTOFF,
        min_coverage: PERC_COVERAGE_CUTOFF,
        score_floor: SCORE_FLOOR,
        progress: false,
        verbose: 0,
    }
}

fn three_record_report() -> String {
    [
        "# BLASTP 2.15.0+\n# Fields: query acc.ver, subject acc.ver, % identity\n".to_string(),
        scored_line("Q1", "S1", 90.0, 90),
        scored_line("Q1", "S2", 40.0, 20),
        scored_line("Q2", "S1", 95.0, 95),
    ]
    .concat()
}

#[test]
fn test_run_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hits.tsv");
    let output = dir.path().join("rbh.tsv");
    fs::write(&input, three_record_report()).unwrap();

    run(args(input, Some(output.clone()))).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Q2\tS1\t95.0\t95.0\t95.0\n");
}

#[test]
fn test_run_empty_result_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hits.tsv");
    let output = dir.path().join("rbh.tsv");
    fs::write(&input, "# BLASTP 2.15.0+\n# 0 hits found\n").unwrap();

    run(args(input, Some(output.clone()))).unwrap();

    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_run_missing_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.tsv");
    let output = dir.path().join("rbh.tsv");

    let err = run(args(input.clone(), Some(output.clone()))).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("Input file {} does not exist.", input.display())
    );
    assert!(!output.exists());
}

#[test]
fn test_run_directory_as_input() {
    let dir = TempDir::new().unwrap();
    let err = run(args(dir.path().to_path_buf(), None)).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_run_malformed_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hits.tsv");
    let output = dir.path().join("rbh.tsv");
    let report = format!("{}Q3\tS3\t88.0\n", three_record_report());
    fs::write(&input, report).unwrap();

    let err = run(args(input, Some(output.clone()))).unwrap_err();

    assert!(!output.exists());
    let parse = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ParseError>())
        .unwrap();
    // Two comment lines and three rows before the bad one
    assert_eq!(parse.line(), 6);
    assert!(format!("{:#}", err).contains("line 6"));
}

#[test]
fn test_run_rejects_nan_threshold() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hits.tsv");
    fs::write(&input, three_record_report()).unwrap();

    let mut a = args(input, None);
    a.min_coverage = f64::NAN;
    let err = run(a).unwrap_err();
    assert!(err.to_string().contains("--min-coverage"));
}

#[test]
fn test_run_custom_thresholds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("hits.tsv");
    let output = dir.path().join("rbh.tsv");
    fs::write(&input, three_record_report()).unwrap();

    let mut a = args(input, Some(output.clone()));
    a.min_identity = 96.0;
    run(a).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_run_streams_summary() {
    let report = [
        scored_line("A", "X", 99.0, 99),
        scored_line("B", "Y", 30.0, 90), // retained, identity too low to report
        tabular_line("C", "Z", 80.0, (1, 300), 400, (1, 200), 200), // 75% / 100%
    ]
    .concat();

    let mut out = Vec::new();
    let summary = run_streams(report.as_bytes(), &mut out, Thresholds::default()).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            records: 3,
            retained: 3,
            reported: 2
        }
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "A\tX\t99.0\t99.0\t99.0\nC\tZ\t80.0\t75.0\t100.0\n"
    );
}
