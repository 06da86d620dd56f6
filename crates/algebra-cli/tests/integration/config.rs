//! `config` subcommands and their effect on other commands.

use crate::common::run_default;
use algebra_cli::{AlgebraConfig, Cli, load_config, run};
use clap::Parser;
use tempfile::TempDir;

#[test]
fn test_init_then_set_then_get() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    let path = path.to_str().unwrap();

    let out = run_default(&["config", "init", "--file", path]).unwrap();
    assert!(out.ends_with(path));

    run_default(&["--config", path, "config", "set", "max_group_order", "12"]).unwrap();
    let out = run_default(&["--config", path, "config", "get", "max_group_order"]).unwrap();
    assert_eq!(out, "12");

    let config = AlgebraConfig::load(Some(path)).unwrap();
    let err = crate::common::run_args(&["table", "s4"], &config).unwrap_err();
    assert!(err.to_string().contains("configured limit of 12"));
}

#[test]
fn test_symbols_from_config_are_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    std::fs::write(&path, "symbols = \"ABCD\"\n").unwrap();

    let config = AlgebraConfig::load(Some(path.to_str().unwrap())).unwrap();
    let out = crate::common::run_args(&["table", "z2xz2"], &config).unwrap();
    assert!(out.starts_with("A: (0, 0)"));
}

#[test]
fn test_show_reports_effective_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    std::fs::write(&path, "max_cd_level = 2\n").unwrap();

    let out = run_default(&["--config", path.to_str().unwrap(), "config", "show"]).unwrap();
    assert!(out.contains("max_cd_level = 2"));
    assert!(out.contains("max_group_order = 720"));
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("algebra").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_broken_file_is_reported_by_show_and_get() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    std::fs::write(&path, "max_cd_level = \"broken\n").unwrap();
    let path = path.to_str().unwrap();

    for args in [
        &["--config", path, "config", "show"][..],
        &["--config", path, "config", "get", "symbols"][..],
        &["--config", path, "table", "z3"][..],
    ] {
        let err = load_config(&parse(args)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"), "{args:?}");
    }
}

#[test]
fn test_broken_file_can_be_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    std::fs::write(&path, "max_cd_level = \"broken\n").unwrap();
    let path = path.to_str().unwrap();

    let cli = parse(&["--config", path, "config", "init", "--file", path, "--force"]);
    let config = load_config(&cli).unwrap();
    run(&cli, &config).unwrap();

    let cli = parse(&["--config", path, "config", "show"]);
    let out = run(&cli, &load_config(&cli).unwrap()).unwrap();
    assert!(out.contains("max_cd_level = 4"));
}

#[test]
fn test_empty_config_flag_counts_as_unset() {
    let cli = parse(&["--config", "", "cd-laws", "2"]);
    assert_eq!(cli.config.as_deref(), Some(""));
    let config = load_config(&cli).unwrap();
    assert!(run(&cli, &config).unwrap().starts_with("quaternion"));
}
