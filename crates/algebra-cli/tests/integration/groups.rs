//! `table`, `info` and `iso`.

use crate::common::{run_args, run_default};
use algebra_cli::{AlgebraConfig, Error};

#[test]
fn test_quaternion_table_uses_symbols_only_when_needed() {
    let out = run_default(&["table", "q8"]).unwrap();
    assert!(out.starts_with("1   │ e1  │ e2  │ e3  │ -1  │ -e1"));
    assert_eq!(out.lines().count(), 15);
}

#[test]
fn test_product_table_gets_a_legend() {
    let out = run_default(&["table", "z2xz2"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "e: (0, 0)");
    assert_eq!(lines[3], "c: (1, 1)");
}

#[test]
fn test_large_table_is_refused_by_symbol_count() {
    let out = run_default(&["table", "s4xz2"]).unwrap();
    assert_eq!(out, algebra_core::table::TOO_LARGE);
}

#[test]
fn test_info_for_symmetric_group() {
    let out = run_default(&["info", "s4"]).unwrap();
    assert!(out.contains("order:      24"));
    assert!(out.contains("cyclic:     no"));
    assert!(out.contains("subgroups:  30"));
    assert!(out.ends_with("normal:     4"));
}

#[test]
fn test_info_for_cyclic_product() {
    let out = run_default(&["info", "z3xz5"]).unwrap();
    assert!(out.contains("abelian:    yes"));
    assert!(out.contains("cyclic:     yes"));
    assert!(out.contains("subgroups:  4"));
}

#[test]
fn test_quaternion_units_match_q8() {
    let out = run_default(&["iso", "units:2", "q8"]).unwrap();
    assert!(out.starts_with("units:2 ≅ q8"));
    assert!(out.contains("\n1 -> 1"));
}

#[test]
fn test_q8_is_not_d4() {
    let out = run_default(&["iso", "q8", "d4"]).unwrap();
    assert_eq!(out, "q8 and d4 are not isomorphic");
}

#[test]
fn test_d3_is_s3() {
    let out = run_default(&["iso", "d3", "s3"]).unwrap();
    assert_eq!(out.lines().count(), 7);
    assert!(out.contains("\nr0 -> 012"));
}

#[test]
fn test_order_limit_applies_to_products() {
    let config = AlgebraConfig {
        max_group_order: 50,
        ..AlgebraConfig::default()
    };
    let err = run_args(&["info", "d5xd5"], &config).unwrap_err();
    assert!(matches!(err, Error::OrderLimit { order: 100, limit: 50 }));
}
