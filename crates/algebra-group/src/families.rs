//! Standard group families: cyclic, symmetric and dihedral.
//!
//! Constructors validate the full group axioms like any other group, so
//! they refuse orders above [`MAX_CONSTRUCTED_ORDER`].

use crate::group::Group;
use crate::{Error, Result};
use algebra_core::{FiniteSet, Function};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest order a family constructor will build (the order of S6).
pub const MAX_CONSTRUCTED_ORDER: usize = 720;

fn check_order(order: Option<usize>) -> Result<usize> {
    match order {
        Some(order) if order <= MAX_CONSTRUCTED_ORDER => Ok(order),
        order => Err(Error::TooLarge {
            order: order.unwrap_or(usize::MAX),
            limit: MAX_CONSTRUCTED_ORDER,
        }),
    }
}

fn require_positive(n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid_argument("n must be at least 1"));
    }
    Ok(())
}

// ============================================================================
// Cyclic groups
// ============================================================================

/// The integers modulo `n` under addition, the cyclic group of order `n`.
pub fn zn(n: usize) -> Result<Group<usize>> {
    require_positive(n)?;
    check_order(Some(n))?;
    let elements: FiniteSet<usize> = (0..n).collect();
    let op = Function::new(elements.square(), elements.clone(), |(a, b)| (a + b) % n)?;
    Group::new(elements, op)
}

// ============================================================================
// Symmetric groups
// ============================================================================

/// A permutation of `0..n`, stored as its list of images.
///
/// Ordering is lexicographic on the image list.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Builds a permutation from its images; `images` must be a
    /// rearrangement of `0..images.len()`.
    pub fn new(images: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; images.len()];
        for &i in &images {
            match seen.get_mut(i) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(Error::invalid_argument(format!(
                        "{images:?} is not a permutation of 0..{}",
                        images.len()
                    )));
                }
            }
        }
        Ok(Self(images))
    }

    /// The identity permutation of degree `n`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Every permutation of degree `n`, in lexicographic order.
    pub fn all(n: usize) -> Vec<Self> {
        let mut current: Vec<usize> = (0..n).collect();
        let mut all = vec![Self(current.clone())];
        while next_permutation(&mut current) {
            all.push(Self(current.clone()));
        }
        all
    }

    /// Number of points permuted.
    pub fn degree(&self) -> usize {
        self.0.len()
    }

    /// The image list.
    pub fn images(&self) -> &[usize] {
        &self.0
    }

    /// Image of point `i`, or `None` past the degree.
    pub fn apply(&self, i: usize) -> Option<usize> {
        self.0.get(i).copied()
    }

    /// The composition `self ∘ other`: apply `other` first.
    pub fn compose(&self, other: &Self) -> Result<Self> {
        if self.degree() != other.degree() {
            return Err(Error::invalid_argument(format!(
                "cannot compose permutations of degree {} and {}",
                self.degree(),
                other.degree()
            )));
        }
        Ok(Self(other.0.iter().map(|&i| self.0[i]).collect()))
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.degree()];
        for (i, &image) in self.0.iter().enumerate() {
            inverse[image] = i;
        }
        Self(inverse)
    }

    /// Non-trivial cycles, each starting at its smallest point.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        self.all_cycles()
            .into_iter()
            .filter(|cycle| cycle.len() > 1)
            .collect()
    }

    /// `1` for even permutations, `-1` for odd ones.
    pub fn sign(&self) -> i8 {
        let transpositions: usize = self.all_cycles().iter().map(|c| c.len() - 1).sum();
        if transpositions % 2 == 0 { 1 } else { -1 }
    }

    fn all_cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.degree()];
        let mut cycles = Vec::new();
        for start in 0..self.degree() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut point = start;
            while !visited[point] {
                visited[point] = true;
                cycle.push(point);
                point = self.0[point];
            }
            cycles.push(cycle);
        }
        cycles
    }
}

/// Advances `items` to the next lexicographic arrangement. Returns `false`
/// once the last arrangement has been reached.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = Error;

    fn try_from(images: Vec<usize>) -> Result<Self> {
        Self::new(images)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.0
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree() <= 10 {
            for image in &self.0 {
                write!(f, "{image}")?;
            }
            Ok(())
        } else {
            let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
            write!(f, "({})", parts.join(", "))
        }
    }
}

impl FromStr for Permutation {
    type Err = Error;

    /// Parses `"021"` (single digits) or `"(0, 2, 1)"` (tuple form).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::invalid_argument(format!("cannot parse permutation from {s:?}"));
        let images = if let Some(inner) = s.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            inner
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| part.parse::<usize>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>>>()?
        } else {
            s.chars()
                .map(|c| c.to_digit(10).map(|d| d as usize).ok_or_else(invalid))
                .collect::<Result<Vec<_>>>()?
        };
        Self::new(images)
    }
}

/// The symmetric group on `0..n`.
///
/// Elements are listed in lexicographic order, so the identity comes first.
/// The product `p·q` applies `q` first: `(p·q)[i] = p[q[i]]`.
pub fn sn(n: usize) -> Result<Group<Permutation>> {
    require_positive(n)?;
    check_order((1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k)))?;
    let ordered = Permutation::all(n);
    let elements: FiniteSet<Permutation> = ordered.iter().cloned().collect();
    let op = Function::try_new(elements.square(), elements.clone(), |(p, q)| p.compose(q))?;
    Group::with_order(elements, op, ordered)
}

// ============================================================================
// Dihedral groups
// ============================================================================

/// An element `r^k` or `r^k s` of a dihedral group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DihedralElement {
    /// Number of rotation steps.
    pub rotation: usize,
    /// Whether a flip is applied first.
    pub flip: bool,
}

impl DihedralElement {
    /// The rotation `r^k`.
    pub fn rotation(rotation: usize) -> Self {
        Self {
            rotation,
            flip: false,
        }
    }

    /// The reflection `r^k s`.
    pub fn reflection(rotation: usize) -> Self {
        Self {
            rotation,
            flip: true,
        }
    }

    /// The product `self·other` in the dihedral group of order `2n`.
    ///
    /// `other` acts first, so in D5 `r1·r2s = r3s` and `r1s·r2 = r4s`.
    /// Fails with `InvalidArgument` when `n` is zero.
    pub fn multiply(self, other: Self, n: usize) -> Result<Self> {
        require_positive(n)?;
        let (r1, r2) = (self.rotation % n, other.rotation % n);
        let sum = (r1 + r2) % n;
        let difference = (r1 + n - r2) % n;
        Ok(match (self.flip, other.flip) {
            (true, true) => Self::rotation(difference),
            (false, true) => Self::reflection(sum),
            (true, false) => Self::reflection(difference),
            (false, false) => Self::rotation(sum),
        })
    }
}

impl fmt::Display for DihedralElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.rotation)?;
        if self.flip {
            write!(f, "s")?;
        }
        Ok(())
    }
}

impl FromStr for DihedralElement {
    type Err = Error;

    /// Parses `"r3"` or `"r3s"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_argument(format!("cannot parse dihedral element from {s:?}"));
        let body = s.trim().strip_prefix('r').ok_or_else(invalid)?;
        let (digits, flip) = match body.strip_suffix('s') {
            Some(digits) => (digits, true),
            None => (body, false),
        };
        let rotation = digits.parse().map_err(|_| invalid())?;
        Ok(Self { rotation, flip })
    }
}

/// The dihedral group of order `2n`: rotations `r0..r{n-1}`, then flips.
pub fn dn(n: usize) -> Result<Group<DihedralElement>> {
    require_positive(n)?;
    check_order(n.checked_mul(2))?;
    let ordered: Vec<DihedralElement> = (0..n)
        .map(DihedralElement::rotation)
        .chain((0..n).map(DihedralElement::reflection))
        .collect();
    let elements: FiniteSet<DihedralElement> = ordered.iter().copied().collect();
    let op = Function::try_new(elements.square(), elements.clone(), |(a, b)| a.multiply(*b, n))?;
    Group::with_order(elements, op, ordered)
}
