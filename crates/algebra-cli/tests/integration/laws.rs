//! `cd-table` and `cd-laws`.

use crate::common::{run_args, run_default};
use algebra_cli::{AlgebraConfig, Error};

#[test]
fn test_quaternion_table() {
    let out = run_default(&["cd-table", "quaternions"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "quaternion ℍ (level 2, dimension 4)");
    assert_eq!(lines[2], "1   │ e1  │ e2  │ e3 ");
    assert_eq!(lines[4], "e1  │ -1  │ e3  │ -e2");
}

#[test]
fn test_unnamed_level_header() {
    let config = AlgebraConfig {
        max_cd_level: 5,
        ..AlgebraConfig::default()
    };
    let out = run_args(&["cd-table", "5"], &config).unwrap();
    assert!(out.starts_with("level 5 (dimension 32)\n"));
}

#[test]
fn test_level_above_limit() {
    let err = run_default(&["cd-laws", "5"]).unwrap_err();
    assert!(matches!(err, Error::LevelLimit { level: 5, limit: 4 }));
}

#[test]
fn test_laws_summary_matches_sequence() {
    let out = run_default(&["cd-laws"]).unwrap();
    let rows: Vec<Vec<&str>> = out
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().collect())
        .collect();
    let expected = [
        ["0", "real", "yes", "yes", "yes", "yes"],
        ["1", "complex", "yes", "yes", "yes", "yes"],
        ["2", "quaternion", "no", "yes", "yes", "yes"],
        ["3", "octonion", "no", "no", "yes", "yes"],
        ["4", "sedenion", "no", "no", "no", "yes"],
    ];
    assert_eq!(rows, expected.map(Vec::from).to_vec());
}

#[test]
fn test_unknown_algebra() {
    let err = run_default(&["cd-laws", "bioctonion"]).unwrap_err();
    assert!(err.to_string().contains("bioctonion"));
}
