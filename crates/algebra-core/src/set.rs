//! Immutable finite sets.
//!
//! [`FiniteSet`] is ordered and hashable, so sets can themselves be members
//! of sets (cosets in a quotient group, for instance).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

/// An immutable finite set with a deterministic iteration order.
///
/// # Examples
///
/// ```
/// use algebra_core::FiniteSet;
///
/// let s: FiniteSet<u8> = [0, 1, 2, 1].into_iter().collect();
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.square().len(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiniteSet<T: Ord>(BTreeSet<T>);

impl<T: Ord> FiniteSet<T> {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `value` is a member.
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// Iterates members in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.0.iter()
    }

    /// Smallest member, if any.
    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    /// Returns `true` if every member of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Borrows the underlying ordered set.
    pub fn as_btree(&self) -> &BTreeSet<T> {
        &self.0
    }
}

impl<T: Ord + Clone> FiniteSet<T> {
    /// Members of either set.
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Members of both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Members of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Members of exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self(self.0.symmetric_difference(&other.0).cloned().collect())
    }

    /// Cartesian product `self × other`.
    pub fn product<U: Ord + Clone>(&self, other: &FiniteSet<U>) -> FiniteSet<(T, U)> {
        self.iter()
            .flat_map(|x| other.iter().map(move |y| (x.clone(), y.clone())))
            .collect()
    }

    /// `self × self`, the shape of a binary operation's domain.
    pub fn square(&self) -> FiniteSet<(T, T)> {
        self.product(self)
    }

    /// The `exponent`-fold Cartesian product, as tuples stored in vectors.
    ///
    /// An exponent below 1 is rejected.
    pub fn power(&self, exponent: usize) -> Result<FiniteSet<Vec<T>>> {
        if exponent < 1 {
            return Err(Error::invalid_argument("The exponent must be at least 1"));
        }

        let mut tuples: Vec<Vec<T>> = self.iter().map(|x| vec![x.clone()]).collect();
        for _ in 1..exponent {
            tuples = tuples
                .iter()
                .flat_map(|prefix| {
                    self.iter().map(move |x| {
                        let mut next = prefix.clone();
                        next.push(x.clone());
                        next
                    })
                })
                .collect();
        }
        Ok(tuples.into_iter().collect())
    }
}

impl<T: Ord> Default for FiniteSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord> FromIterator<T> for FiniteSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Ord> From<BTreeSet<T>> for FiniteSet<T> {
    fn from(set: BTreeSet<T>) -> Self {
        Self(set)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for FiniteSet<T> {
    fn from(members: [T; N]) -> Self {
        members.into_iter().collect()
    }
}

impl<T: Ord> IntoIterator for FiniteSet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a FiniteSet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for FiniteSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, "}}")
    }
}
