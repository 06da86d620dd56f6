//! Textual group descriptions accepted on the command line.
//!
//! | Spec        | Group                                   |
//! |-------------|-----------------------------------------|
//! | `z6`        | integers mod 6                          |
//! | `s3`        | symmetric group on 3 points             |
//! | `d4`        | dihedral group of order 8               |
//! | `q8`        | quaternion group                        |
//! | `units:2`   | signed Cayley-Dickson units at level 2  |
//! | `z2xz2`     | direct product, left to right           |

use crate::config::AlgebraConfig;
use crate::{Error, Result};
use algebra_cayley_dickson::unit_group;
use algebra_group::{Group, dn, sn, zn};
use std::fmt;
use std::str::FromStr;

/// A parsed group description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupSpec {
    /// `zN`
    Cyclic(usize),
    /// `sN`
    Symmetric(usize),
    /// `dN`
    Dihedral(usize),
    /// `q8`
    Quaternion,
    /// `units:L`
    Units(u32),
    /// `AxB`
    Product(Box<GroupSpec>, Box<GroupSpec>),
}

impl GroupSpec {
    /// The order of the described group, or `None` on overflow.
    pub fn order(&self) -> Option<usize> {
        match self {
            GroupSpec::Cyclic(n) => Some(*n),
            GroupSpec::Symmetric(n) => (1..=*n).try_fold(1usize, |acc, k| acc.checked_mul(k)),
            GroupSpec::Dihedral(n) => n.checked_mul(2),
            GroupSpec::Quaternion => Some(8),
            GroupSpec::Units(level) => 2usize.checked_pow(level.checked_add(1)?),
            GroupSpec::Product(a, b) => a.order()?.checked_mul(b.order()?),
        }
    }

    /// Builds the group with elements rendered as strings.
    ///
    /// Fails before any construction if the order exceeds
    /// `config.max_group_order`.
    pub fn build(&self, config: &AlgebraConfig) -> Result<Group<String>> {
        let limit = config.max_group_order;
        match self.order() {
            Some(order) if order <= limit => {}
            order => {
                return Err(Error::OrderLimit {
                    order: order.unwrap_or(usize::MAX),
                    limit,
                });
            }
        }
        tracing::debug!(spec = %self, "building group");

        let group = match self {
            GroupSpec::Cyclic(n) => zn(*n)?.relabel(ToString::to_string)?,
            GroupSpec::Symmetric(n) => sn(*n)?.relabel(ToString::to_string)?,
            GroupSpec::Dihedral(n) => dn(*n)?.relabel(ToString::to_string)?,
            GroupSpec::Quaternion => unit_group(2)?.relabel(ToString::to_string)?,
            GroupSpec::Units(level) => {
                if *level > config.max_cd_level {
                    return Err(Error::LevelLimit {
                        level: *level,
                        limit: config.max_cd_level,
                    });
                }
                unit_group(*level)?.relabel(ToString::to_string)?
            }
            GroupSpec::Product(a, b) => {
                let (a, b) = (a.build(config)?, b.build(config)?);
                a.direct_product(&b)?.relabel(|(x, y)| format!("({x}, {y})"))?
            }
        };
        Ok(group)
    }
}

fn parse_factor(input: &str) -> Result<GroupSpec> {
    let invalid = || Error::invalid_spec(format!("'{input}' (expected zN, sN, dN, q8 or units:L)"));
    let lower = input.trim().to_lowercase();

    if lower == "q8" {
        return Ok(GroupSpec::Quaternion);
    }
    if let Some(level) = lower.strip_prefix("units:") {
        return level.parse().map(GroupSpec::Units).map_err(|_| invalid());
    }

    let mut chars = lower.chars();
    let family = chars.next().ok_or_else(invalid)?;
    let n: usize = chars.as_str().parse().map_err(|_| invalid())?;
    if n == 0 {
        return Err(Error::invalid_spec(format!("'{input}' (n must be at least 1)")));
    }
    match family {
        'z' | 'c' => Ok(GroupSpec::Cyclic(n)),
        's' => Ok(GroupSpec::Symmetric(n)),
        'd' => Ok(GroupSpec::Dihedral(n)),
        _ => Err(invalid()),
    }
}

impl FromStr for GroupSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut factors = s.split(['x', '×', '*']).map(parse_factor);
        let first = factors
            .next()
            .ok_or_else(|| Error::invalid_spec("empty group spec"))??;
        factors.try_fold(first, |acc, next| {
            Ok(GroupSpec::Product(Box::new(acc), Box::new(next?)))
        })
    }
}

impl fmt::Display for GroupSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSpec::Cyclic(n) => write!(f, "z{n}"),
            GroupSpec::Symmetric(n) => write!(f, "s{n}"),
            GroupSpec::Dihedral(n) => write!(f, "d{n}"),
            GroupSpec::Quaternion => write!(f, "q8"),
            GroupSpec::Units(level) => write!(f, "units:{level}"),
            GroupSpec::Product(a, b) => write!(f, "{a}x{b}"),
        }
    }
}
