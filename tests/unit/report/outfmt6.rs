//! Unit tests for report/outfmt6.rs

use rbh::report::outfmt6::{format_float, write_rbh_hits, write_rbh_line};

use crate::helpers::make_hit;

#[test]
fn test_line_layout() {
    let mut out = Vec::new();
    write_rbh_line(&mut out, &make_hit("sp|P1|A", "sp|P2|B", 87.5, 66.67, 100.0)).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "sp|P1|A\tsp|P2|B\t87.5\t66.67\t100.0\n"
    );
}

#[test]
fn test_identity_written_as_given() {
    let mut out = Vec::new();
    write_rbh_line(&mut out, &make_hit("q", "s", 98.765, 90.0, 90.0)).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("q\ts\t98.765\t"));
}

#[test]
fn test_write_many_counts_lines() {
    let hits = vec![
        make_hit("q1", "s1", 90.0, 90.0, 91.5),
        make_hit("q2", "s2", 70.0, 60.0, 55.25),
    ];
    let mut out = Vec::new();
    let written = write_rbh_hits(&mut out, hits).unwrap();

    assert_eq!(written, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "q1\ts1\t90.0\t90.0\t91.5\nq2\ts2\t70.0\t60.0\t55.25\n"
    );
}

#[test]
fn test_no_header_when_empty() {
    let mut out = Vec::new();
    assert_eq!(write_rbh_hits(&mut out, Vec::new()).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn test_float_forms() {
    assert_eq!(format_float(35.0), "35.0");
    assert_eq!(format_float(33.33), "33.33");
    assert_eq!(format_float(101.46), "101.46");
    assert_eq!(format_float(-0.0), "-0.0");
    assert_eq!(format_float(0.00012), "0.00012");
    assert_eq!(format_float(0.00005), "5e-05");
    assert_eq!(format_float(12345678901234567.0), "1.2345678901234568e+16");
    assert_eq!(format_float(9999999999999998.0), "9999999999999998.0");
}
