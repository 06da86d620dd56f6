//! Which algebraic laws hold at each level.
//!
//! Every check runs on the basis table with integer signs, so the answers
//! are exact. The associator is trilinear, so a law quantified over all
//! elements reduces to an identity on basis triples:
//!
//! - alternative: `A(i,j,k) + A(j,i,k) = 0` and `A(i,j,k) + A(i,k,j) = 0`
//! - flexible: `A(i,j,k) + A(k,j,i) = 0`

use crate::Result;
use crate::basis::{BasisTable, SignedUnit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The laws satisfied by one Cayley-Dickson level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laws {
    /// `xy = yx`
    pub commutative: bool,
    /// `(xy)z = x(yz)`
    pub associative: bool,
    /// `(xx)y = x(xy)` and `(yx)x = y(xx)`
    pub alternative: bool,
    /// `(xy)x = x(yx)`
    pub flexible: bool,
}

impl Laws {
    /// Checks every law at `level`.
    pub fn of(level: u32) -> Result<Self> {
        Ok(BasisTable::new(level)?.laws())
    }
}

/// A sparse integer combination of basis units.
type Terms = Vec<(usize, i64)>;

fn signed(unit: SignedUnit, coefficient: i64) -> (usize, i64) {
    (unit.index, unit.sign() * coefficient)
}

fn cancels(terms: impl IntoIterator<Item = (usize, i64)>) -> bool {
    let mut totals: BTreeMap<usize, i64> = BTreeMap::new();
    for (index, coefficient) in terms {
        *totals.entry(index).or_default() += coefficient;
    }
    totals.values().all(|&c| c == 0)
}

impl BasisTable {
    /// `A(e_i, e_j, e_k) = (e_i e_j) e_k − e_i (e_j e_k)` as sparse terms.
    fn associator_terms(&self, i: usize, j: usize, k: usize) -> Terms {
        let ij = self.at(i, j);
        let left = self.at(ij.index, k);
        let jk = self.at(j, k);
        let right = self.at(i, jk.index);
        vec![
            signed(left, ij.sign()),
            signed(right, -jk.sign()),
        ]
    }

    fn all_triples(&self, law: impl Fn(usize, usize, usize) -> bool) -> bool {
        let n = self.dimension();
        (0..n).all(|i| (0..n).all(|j| (0..n).all(|k| law(i, j, k))))
    }

    /// Returns `true` if every pair of units commutes.
    pub fn is_commutative(&self) -> bool {
        let n = self.dimension();
        (0..n).all(|i| (0..n).all(|j| self.at(i, j) == self.at(j, i)))
    }

    /// Returns `true` if every associator vanishes.
    pub fn is_associative(&self) -> bool {
        self.all_triples(|i, j, k| cancels(self.associator_terms(i, j, k)))
    }

    /// Returns `true` if the associator is alternating.
    pub fn is_alternative(&self) -> bool {
        self.all_triples(|i, j, k| {
            let a = self.associator_terms(i, j, k);
            let left = a.iter().copied().chain(self.associator_terms(j, i, k));
            let right = a.iter().copied().chain(self.associator_terms(i, k, j));
            cancels(left) && cancels(right)
        })
    }

    /// Returns `true` if `(xy)x = x(yx)` for all `x, y`.
    pub fn is_flexible(&self) -> bool {
        self.all_triples(|i, j, k| {
            let a = self.associator_terms(i, j, k);
            cancels(a.into_iter().chain(self.associator_terms(k, j, i)))
        })
    }

    /// All four checks at once.
    pub fn laws(&self) -> Laws {
        Laws {
            commutative: self.is_commutative(),
            associative: self.is_associative(),
            alternative: self.is_alternative(),
            flexible: self.is_flexible(),
        }
    }
}
