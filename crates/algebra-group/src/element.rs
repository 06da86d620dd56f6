//! Group elements bound to their group.
//!
//! [`Element`] pairs a value with the group it was drawn from, so products
//! and powers can be written without passing the group around.

use crate::group::Group;
use crate::{Error, Result};
use algebra_core::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value of a [`Group`], borrowed together with the group.
///
/// Equality and hashing look at the value only, so elements drawn from
/// different groups compare equal when their values do.
///
/// # Examples
///
/// ```
/// use algebra_group::families::zn;
///
/// let z5 = zn(5).unwrap();
/// let two = z5.element(&2).unwrap();
/// assert_eq!(two.pow(3).value(), &1);
/// assert_eq!(two.order(), 5);
/// ```
pub struct Element<'g, T: Ord> {
    index: usize,
    group: &'g Group<T>,
}

impl<'g, T: Value> Element<'g, T> {
    /// Binds `value` to `group`.
    pub fn new(value: &T, group: &'g Group<T>) -> Result<Self> {
        let index = group.index_of(value)?;
        Ok(Self::from_index(index, group))
    }

    pub(crate) fn from_index(index: usize, group: &'g Group<T>) -> Self {
        Self { index, group }
    }

    /// The underlying value.
    pub fn value(&self) -> &'g T {
        self.group.value_at(self.index)
    }

    /// Clones the underlying value out.
    pub fn into_value(self) -> T {
        self.value().clone()
    }

    /// The group this element belongs to.
    pub fn group(&self) -> &'g Group<T> {
        self.group
    }

    /// Raises the element to an integer power.
    ///
    /// Negative exponents raise the inverse.
    pub fn pow(&self, exponent: i64) -> Self {
        let group = self.group;
        let mut base = if exponent < 0 {
            group.inverse_index(self.index)
        } else {
            self.index
        };
        let mut remaining = exponent.unsigned_abs();
        let mut acc = group.identity_index();
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = group.mul(acc, base);
            }
            base = group.mul(base, base);
            remaining >>= 1;
        }
        Self::from_index(acc, group)
    }

    /// The product `self·other`.
    ///
    /// Computed in `self`'s group when `other` belongs to it. Otherwise the
    /// product is attempted in `other`'s group.
    pub fn op(&self, other: &Element<'g, T>) -> Result<Self> {
        if let Some(j) = self.group.position(other.value()) {
            return Ok(Self::from_index(self.group.mul(self.index, j), self.group));
        }
        if let Some(i) = other.group.position(self.value()) {
            tracing::warn!(
                left = ?self.value(),
                right = ?other.value(),
                "elements come from different groups, the result may be unexpected"
            );
            return Ok(Self::from_index(other.group.mul(i, other.index), other.group));
        }
        Err(Error::not_in_group(other.value()))
    }

    /// The inverse element.
    pub fn inverse(&self) -> Self {
        Self::from_index(self.group.inverse_index(self.index), self.group)
    }

    /// The smallest `k ≥ 1` with `self^k = e`.
    pub fn order(&self) -> usize {
        let mut current = self.index;
        let mut order = 1;
        while current != self.group.identity_index() {
            current = self.group.mul(current, self.index);
            order += 1;
        }
        order
    }

    /// Additive notation for [`Element::pow`]; abelian groups only.
    pub fn times(&self, n: i64) -> Result<Self> {
        if !self.group.is_abelian() {
            return Err(Error::NotAbelian {
                message: "Cannot self-multiply elements of non-abelian groups",
            });
        }
        Ok(self.pow(n))
    }

    /// Additive notation for [`Element::op`]; abelian groups only.
    pub fn plus(&self, other: &Element<'g, T>) -> Result<Self> {
        self.require_both_abelian(other)?;
        self.op(other)
    }

    /// `self - other`, i.e. `self·other⁻¹`; abelian groups only.
    pub fn minus(&self, other: &Element<'g, T>) -> Result<Self> {
        self.require_both_abelian(other)?;
        self.op(&other.inverse())
    }

    /// Additive notation for [`Element::inverse`]; abelian groups only.
    pub fn negate(&self) -> Result<Self> {
        if !self.group.is_abelian() {
            return Err(Error::NotAbelian {
                message: "Element must belong to an abelian group",
            });
        }
        Ok(self.inverse())
    }

    fn require_both_abelian(&self, other: &Element<'g, T>) -> Result<()> {
        if self.group.is_abelian() && other.group.is_abelian() {
            Ok(())
        } else {
            Err(Error::NotAbelian {
                message: "Both elements must belong to abelian groups",
            })
        }
    }
}

impl<T: Ord> Clone for Element<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Ord> Copy for Element<'_, T> {}

impl<'h, T: Value> PartialEq<Element<'h, T>> for Element<'_, T> {
    fn eq(&self, other: &Element<'h, T>) -> bool {
        self.value() == other.value()
    }
}

impl<T: Value> Eq for Element<'_, T> {}

impl<T: Value + Hash> Hash for Element<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl<T: Value> fmt::Debug for Element<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(self.value()).finish()
    }
}

impl<T: Value + fmt::Display> fmt::Display for Element<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}
