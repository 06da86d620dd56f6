//! Signed multiplication tables of the basis units.
//!
//! The product of two basis units is always another basis unit up to sign,
//! so a level-`k` algebra is described completely by a `2^k × 2^k` table
//! of [`SignedUnit`]s.

use crate::number::CayleyDickson;
use crate::{Error, Result};
use algebra_core::table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest level [`BasisTable::new`] will build (64 units).
pub const MAX_TABLE_LEVEL: u32 = 6;

/// A basis unit `±e_index`; `e_0` is printed as `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SignedUnit {
    /// Index of the basis unit.
    pub index: usize,
    /// Whether the unit carries a minus sign.
    pub negative: bool,
}

impl SignedUnit {
    /// `+e_index`.
    pub fn positive(index: usize) -> Self {
        Self {
            index,
            negative: false,
        }
    }

    /// `-e_index`.
    pub fn negative(index: usize) -> Self {
        Self {
            index,
            negative: true,
        }
    }

    /// Flips the sign.
    pub fn negate(self) -> Self {
        Self {
            negative: !self.negative,
            ..self
        }
    }

    /// `1` or `-1`.
    pub fn sign(self) -> i64 {
        if self.negative { -1 } else { 1 }
    }

    /// The unit as an integer Cayley-Dickson number at `level`.
    pub fn to_number(self, level: u32) -> Result<CayleyDickson<i64>> {
        Ok(CayleyDickson::basis(level, self.index)?.scale(&self.sign()))
    }

    fn from_number(number: &CayleyDickson<i64>) -> Result<Self> {
        let mut terms = number
            .coefficients()
            .iter()
            .enumerate()
            .map(|(i, c)| (i, *c))
            .filter(|&(_, c)| c != 0);
        match (terms.next(), terms.next()) {
            (Some((index, 1)), None) => Ok(Self::positive(index)),
            (Some((index, -1)), None) => Ok(Self::negative(index)),
            _ => Err(Error::Core(algebra_core::Error::invalid_argument(format!(
                "{number:?} is not a signed basis unit"
            )))),
        }
    }
}

impl fmt::Display for SignedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        match self.index {
            0 => write!(f, "1"),
            i => write!(f, "e{i}"),
        }
    }
}

/// The multiplication table `e_i · e_j = ±e_k` of one level.
///
/// # Examples
///
/// ```
/// use algebra_cayley_dickson::{BasisTable, SignedUnit};
///
/// let quaternions = BasisTable::new(2).unwrap();
/// assert_eq!(quaternions.product(1, 2), Some(SignedUnit::positive(3)));
/// assert_eq!(quaternions.product(2, 1), Some(SignedUnit::negative(3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasisTable {
    level: u32,
    products: Vec<SignedUnit>,
}

impl BasisTable {
    /// Computes the table for `level` by multiplying integer basis units.
    pub fn new(level: u32) -> Result<Self> {
        if level > MAX_TABLE_LEVEL {
            return Err(Error::LevelTooLarge {
                level,
                limit: MAX_TABLE_LEVEL,
            });
        }
        let dimension = 1usize << level;
        let units = (0..dimension)
            .map(|i| CayleyDickson::<i64>::basis(level, i))
            .collect::<Result<Vec<_>>>()?;

        let mut products = Vec::with_capacity(dimension * dimension);
        for a in &units {
            for b in &units {
                products.push(SignedUnit::from_number(&(a * b))?);
            }
        }
        tracing::debug!(level, dimension, "built basis table");
        Ok(Self { level, products })
    }

    /// The doubling level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Number of basis units.
    pub fn dimension(&self) -> usize {
        1 << self.level
    }

    /// `e_i · e_j`, or `None` if either index is out of range.
    pub fn product(&self, i: usize, j: usize) -> Option<SignedUnit> {
        let n = self.dimension();
        (i < n && j < n).then(|| self.at(i, j))
    }

    /// Product of two signed units.
    pub fn multiply(&self, a: SignedUnit, b: SignedUnit) -> Option<SignedUnit> {
        let product = self.product(a.index, b.index)?;
        Some(if a.negative != b.negative {
            product.negate()
        } else {
            product
        })
    }

    pub(crate) fn at(&self, i: usize, j: usize) -> SignedUnit {
        self.products[i * self.dimension() + j]
    }

    /// Cell labels: row `i`, column `j` holds `e_i · e_j`.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let n = self.dimension();
        (0..n)
            .map(|i| (0..n).map(|j| self.at(i, j).to_string()).collect())
            .collect()
    }
}

impl fmt::Display for BasisTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&table::render_grid(&self.rows()))
    }
}
