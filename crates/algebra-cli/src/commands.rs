//! Handlers for the group and Cayley-Dickson subcommands.
//!
//! Every handler returns the text to print.

use crate::config::AlgebraConfig;
use crate::spec::GroupSpec;
use crate::{Error, Result};
use algebra_cayley_dickson::{Algebra, BasisTable, Laws};
use std::fmt::Write as _;

// ============================================================================
// Groups
// ============================================================================

/// Cayley table of a group.
pub fn table(spec: &GroupSpec, config: &AlgebraConfig) -> Result<String> {
    let group = spec.build(config)?;
    Ok(group.cayley_table(&config.symbols))
}

/// Structural summary of a group.
pub fn info(spec: &GroupSpec, config: &AlgebraConfig) -> Result<String> {
    let group = spec.build(config)?;
    let subgroups = group.subgroups()?;
    let normal = subgroups
        .iter()
        .filter(|h| h.is_normal_subgroup_of(&group))
        .count();

    let mut out = String::new();
    let _ = writeln!(out, "group:      {spec}");
    let _ = writeln!(out, "order:      {}", group.len());
    let _ = writeln!(out, "identity:   {}", group.identity());
    let _ = writeln!(out, "abelian:    {}", yes_no(group.is_abelian()));
    let _ = writeln!(out, "cyclic:     {}", yes_no(group.is_cyclic()));
    let _ = writeln!(out, "generators: {}", group.generators().join(", "));
    let _ = writeln!(out, "subgroups:  {}", subgroups.len());
    let _ = write!(out, "normal:     {normal}");
    Ok(out)
}

/// Isomorphism between two groups, printed as `x -> f(x)` lines.
pub fn iso(first: &GroupSpec, second: &GroupSpec, config: &AlgebraConfig) -> Result<String> {
    let g = first.build(config)?;
    let h = second.build(config)?;

    let Some(map) = g.find_isomorphism(&h)? else {
        return Ok(format!("{first} and {second} are not isomorphic"));
    };
    tracing::debug!(%first, %second, "found isomorphism");

    let mut out = format!("{first} ≅ {second}");
    for x in g.iter() {
        let _ = write!(out, "\n{x} -> {}", map.call(x)?);
    }
    Ok(out)
}

// ============================================================================
// Cayley-Dickson algebras
// ============================================================================

fn resolve_level(input: &str, config: &AlgebraConfig) -> Result<u32> {
    let level = Algebra::parse_level(input)?;
    if level > config.max_cd_level {
        return Err(Error::LevelLimit {
            level,
            limit: config.max_cd_level,
        });
    }
    Ok(level)
}

fn describe_level(level: u32) -> String {
    match Algebra::from_level(level) {
        Some(algebra) => format!(
            "{algebra} {} (level {level}, dimension {})",
            algebra.symbol(),
            algebra.dimension()
        ),
        None => format!("level {level} (dimension {})", 1usize << level),
    }
}

/// Basis multiplication table; row `i`, column `j` holds `e_i · e_j`.
pub fn cd_table(algebra: &str, config: &AlgebraConfig) -> Result<String> {
    let level = resolve_level(algebra, config)?;
    let table = BasisTable::new(level)?;
    Ok(format!("{}\n\n{table}", describe_level(level)))
}

/// Laws holding at one level, or a summary of every level up to
/// `max_cd_level`.
pub fn cd_laws(algebra: Option<&str>, config: &AlgebraConfig) -> Result<String> {
    match algebra {
        Some(input) => {
            let level = resolve_level(input, config)?;
            let laws = Laws::of(level)?;
            let mut out = describe_level(level);
            for (name, holds) in law_list(&laws) {
                let _ = write!(out, "\n{name:<12} {}", yes_no(holds));
            }
            Ok(out)
        }
        None => {
            let mut out = format!(
                "{:<6} {:<11} {:<12} {:<12} {:<12} {}",
                "level", "algebra", "commutative", "associative", "alternative", "flexible"
            );
            for level in 0..=config.max_cd_level {
                let laws = Laws::of(level)?;
                let name = Algebra::from_level(level).map_or("-", Algebra::name);
                let _ = write!(
                    out,
                    "\n{level:<6} {name:<11} {:<12} {:<12} {:<12} {}",
                    yes_no(laws.commutative),
                    yes_no(laws.associative),
                    yes_no(laws.alternative),
                    yes_no(laws.flexible)
                );
            }
            Ok(out)
        }
    }
}

fn law_list(laws: &Laws) -> [(&'static str, bool); 4] {
    [
        ("commutative", laws.commutative),
        ("associative", laws.associative),
        ("alternative", laws.alternative),
        ("flexible", laws.flexible),
    ]
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
