//! Cayley-Dickson numbers over a generic scalar.
//!
//! A number at level `k` has `2^k` coefficients. Level 0 is the scalar
//! itself, and each level doubles the previous one:
//!
//! ```text
//! (a, b)(c, d) = (ac − d̄b, da + bc̄)
//! (a, b)‾      = (ā, −b)
//! ```

use crate::{Error, Result};
use num_traits::{Num, Signed};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Coefficient type of a Cayley-Dickson number.
///
/// Any signed numeric type works: `i64` gives exact integer arithmetic,
/// `f64` adds norms and inverses.
pub trait Scalar: Num + Neg<Output = Self> + Clone + fmt::Debug {}

impl<T> Scalar for T where T: Num + Neg<Output = T> + Clone + fmt::Debug {}

/// An element of the level-`k` Cayley-Dickson algebra over `S`.
///
/// Binary operations accept operands of different levels; the smaller one
/// is embedded into the larger algebra first.
///
/// # Examples
///
/// ```
/// use algebra_cayley_dickson::CayleyDickson;
///
/// // Quaternions: i·j = k but j·i = −k.
/// let i = CayleyDickson::<i64>::basis(2, 1).unwrap();
/// let j = CayleyDickson::<i64>::basis(2, 2).unwrap();
/// let k = CayleyDickson::<i64>::basis(2, 3).unwrap();
/// assert_eq!(&i * &j, k);
/// assert_eq!(&j * &i, -k);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CayleyDickson<S> {
    coefficients: Vec<S>,
}

impl<S: Scalar> CayleyDickson<S> {
    /// The zero element at `level`.
    pub fn zero(level: u32) -> Self {
        Self {
            coefficients: vec![S::zero(); 1 << level],
        }
    }

    /// The multiplicative identity at `level`.
    pub fn one(level: u32) -> Self {
        let mut number = Self::zero(level);
        number.coefficients[0] = S::one();
        number
    }

    /// The basis unit `e_index` at `level`; `e_0` is `1`.
    pub fn basis(level: u32, index: usize) -> Result<Self> {
        let mut number = Self::zero(level);
        let dimension = number.dimension();
        let slot = number
            .coefficients
            .get_mut(index)
            .ok_or(Error::InvalidIndex { index, dimension })?;
        *slot = S::one();
        Ok(number)
    }

    /// Wraps a coefficient vector whose length is a power of two.
    pub fn from_coefficients(coefficients: Vec<S>) -> Result<Self> {
        if !coefficients.len().is_power_of_two() {
            return Err(Error::InvalidDimension {
                len: coefficients.len(),
            });
        }
        Ok(Self { coefficients })
    }

    /// Coefficients in basis order.
    pub fn coefficients(&self) -> &[S] {
        &self.coefficients
    }

    /// Number of coefficients, `2^level`.
    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    /// The doubling level `k` of a `2^k`-dimensional number.
    pub fn level(&self) -> u32 {
        self.coefficients.len().trailing_zeros()
    }

    /// The real (first) coefficient.
    pub fn real(&self) -> &S {
        &self.coefficients[0]
    }

    /// Returns `true` if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(S::is_zero)
    }

    /// Embeds `self` into the algebra at `level`, padding with zeros.
    ///
    /// Levels at or below the current one return an unchanged copy.
    pub fn promote(&self, level: u32) -> Self {
        let mut coefficients = self.coefficients.clone();
        let dimension = 1usize << level;
        if dimension > coefficients.len() {
            coefficients.resize(dimension, S::zero());
        }
        Self { coefficients }
    }

    /// Negates every coefficient except the real one.
    pub fn conjugate(&self) -> Self {
        Self {
            coefficients: conjugate(&self.coefficients),
        }
    }

    /// Sum of squared coefficients, equal to the real part of `x·x̄`.
    pub fn norm_squared(&self) -> S {
        self.coefficients
            .iter()
            .fold(S::zero(), |acc, c| acc + c.clone() * c.clone())
    }

    /// Multiplies every coefficient by `k`.
    pub fn scale(&self, k: &S) -> Self {
        Self {
            coefficients: self
                .coefficients
                .iter()
                .map(|c| c.clone() * k.clone())
                .collect(),
        }
    }

    /// The associator `(ab)c − a(bc)`.
    pub fn associator(a: &Self, b: &Self, c: &Self) -> Self {
        &(&(a * b) * c) - &(a * &(b * c))
    }

    /// The commutator `ab − ba`.
    pub fn commutator(a: &Self, b: &Self) -> Self {
        &(a * b) - &(b * a)
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(S, S) -> S,
    {
        let level = self.level().max(other.level());
        let (a, b) = (self.promote(level), other.promote(level));
        Self {
            coefficients: a
                .coefficients
                .into_iter()
                .zip(b.coefficients)
                .map(|(x, y)| f(x, y))
                .collect(),
        }
    }
}

impl CayleyDickson<f64> {
    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// The two-sided inverse `x̄ / |x|²`.
    ///
    /// Only guaranteed to be a true inverse up to octonions; sedenions
    /// have zero divisors.
    pub fn inverse(&self) -> Result<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared == 0.0 {
            return Err(Error::ZeroDivisor);
        }
        Ok(self.conjugate().scale(&norm_squared.recip()))
    }
}

// ============================================================================
// Recursive doubling on coefficient slices
// ============================================================================

fn conjugate<S: Scalar>(x: &[S]) -> Vec<S> {
    x.iter()
        .enumerate()
        .map(|(i, c)| if i == 0 { c.clone() } else { -c.clone() })
        .collect()
}

fn add_slices<S: Scalar>(x: &[S], y: &[S]) -> Vec<S> {
    x.iter().zip(y).map(|(a, b)| a.clone() + b.clone()).collect()
}

fn sub_slices<S: Scalar>(x: &[S], y: &[S]) -> Vec<S> {
    x.iter().zip(y).map(|(a, b)| a.clone() - b.clone()).collect()
}

/// Both slices must have the same power-of-two length.
fn multiply<S: Scalar>(x: &[S], y: &[S]) -> Vec<S> {
    if x.len() < 2 {
        return x.iter().zip(y).map(|(a, b)| a.clone() * b.clone()).collect();
    }
    let half = x.len() / 2;
    let (a, b) = x.split_at(half);
    let (c, d) = y.split_at(half);

    let mut product = sub_slices(&multiply(a, c), &multiply(&conjugate(d), b));
    product.extend(add_slices(&multiply(d, a), &multiply(b, &conjugate(c))));
    product
}

// ============================================================================
// Operator impls
// ============================================================================

impl<S: Scalar> Add for &CayleyDickson<S> {
    type Output = CayleyDickson<S>;

    fn add(self, rhs: Self) -> CayleyDickson<S> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<S: Scalar> Sub for &CayleyDickson<S> {
    type Output = CayleyDickson<S>;

    fn sub(self, rhs: Self) -> CayleyDickson<S> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<S: Scalar> Mul for &CayleyDickson<S> {
    type Output = CayleyDickson<S>;

    fn mul(self, rhs: Self) -> CayleyDickson<S> {
        let level = self.level().max(rhs.level());
        let (a, b) = (self.promote(level), rhs.promote(level));
        CayleyDickson {
            coefficients: multiply(&a.coefficients, &b.coefficients),
        }
    }
}

impl<S: Scalar> Neg for &CayleyDickson<S> {
    type Output = CayleyDickson<S>;

    fn neg(self) -> CayleyDickson<S> {
        CayleyDickson {
            coefficients: self.coefficients.iter().map(|c| -c.clone()).collect(),
        }
    }
}

impl<S: Scalar> Add for CayleyDickson<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<S: Scalar> Sub for CayleyDickson<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<S: Scalar> Mul for CayleyDickson<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<S: Scalar> Neg for CayleyDickson<S> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

/// Prints non-zero terms as `1 + 2e1 - e3`; zero prints as `0`.
impl<S: Scalar + Signed + fmt::Display> fmt::Display for CayleyDickson<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let magnitude = c.abs();
            match (first, c.is_negative()) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            if i == 0 {
                write!(f, "{magnitude}")?;
            } else if magnitude.is_one() {
                write!(f, "e{i}")?;
            } else {
                write!(f, "{magnitude}e{i}")?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
