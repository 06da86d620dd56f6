//! Total functions between finite sets.
//!
//! A [`Function`] is evaluated on its whole domain when it is built, so the
//! codomain check happens once and later calls are table lookups. Binary
//! operations are functions from `S × S` to `S`.

use crate::{Error, FiniteSet, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A total function `domain → codomain` stored as its graph.
///
/// # Examples
///
/// ```
/// use algebra_core::{FiniteSet, Function};
///
/// let s = FiniteSet::from([0, 1, 2, 3]);
/// let t = FiniteSet::from([1, 2, 3, 4]);
/// let f = Function::new(s, t, |x| x + 1).unwrap();
/// assert_eq!(f.call(&2).unwrap(), &3);
/// assert!(f.is_bijective());
/// ```
#[derive(Clone, Debug)]
pub struct Function<D: Ord, C: Ord> {
    domain: FiniteSet<D>,
    codomain: FiniteSet<C>,
    graph: BTreeMap<D, C>,
}

impl<D, C> Function<D, C>
where
    D: Ord + Clone + fmt::Debug,
    C: Ord + Clone + fmt::Debug,
{
    /// Builds a function by evaluating `f` on every member of `domain`.
    ///
    /// Fails if any value falls outside `codomain`.
    pub fn new<F>(domain: FiniteSet<D>, codomain: FiniteSet<C>, f: F) -> Result<Self>
    where
        F: FnMut(&D) -> C,
    {
        let mut f = f;
        Self::try_new(domain, codomain, |x| Ok::<C, Error>(f(x)))
    }

    /// Builds a function from a fallible rule.
    ///
    /// The first error returned by `f` aborts construction. Codomain
    /// violations are reported through `E: From<Error>`.
    pub fn try_new<F, E>(
        domain: FiniteSet<D>,
        codomain: FiniteSet<C>,
        mut f: F,
    ) -> std::result::Result<Self, E>
    where
        F: FnMut(&D) -> std::result::Result<C, E>,
        E: From<Error>,
    {
        let mut graph = BTreeMap::new();
        for x in domain.iter() {
            let y = f(x)?;
            if !codomain.contains(&y) {
                return Err(Error::outside_codomain(&y).into());
            }
            graph.insert(x.clone(), y);
        }
        Ok(Self {
            domain,
            codomain,
            graph,
        })
    }

    /// The function given by a lookup table.
    ///
    /// The domain is the keys and the codomain is the set of values.
    pub fn from_map(map: BTreeMap<D, C>) -> Self {
        Self {
            domain: map.keys().cloned().collect(),
            codomain: map.values().cloned().collect(),
            graph: map,
        }
    }

    /// Returns the composition `x ↦ self(inner(x))`.
    ///
    /// The inner function's codomain must equal this function's domain.
    pub fn compose<B>(&self, inner: &Function<B, D>) -> Result<Function<B, C>>
    where
        B: Ord + Clone + fmt::Debug,
    {
        if self.domain != inner.codomain {
            return Err(Error::DomainMismatch);
        }
        let mut graph = BTreeMap::new();
        for (x, y) in &inner.graph {
            graph.insert(x.clone(), self.call(y)?.clone());
        }
        Ok(Function {
            domain: inner.domain.clone(),
            codomain: self.codomain.clone(),
            graph,
        })
    }

    /// The image of the domain.
    pub fn image(&self) -> FiniteSet<C> {
        self.graph.values().cloned().collect()
    }

    /// Returns `true` if the image is the whole codomain.
    pub fn is_surjective(&self) -> bool {
        self.image() == self.codomain
    }

    /// Returns `true` if distinct inputs have distinct outputs.
    pub fn is_injective(&self) -> bool {
        self.image().len() == self.domain.len()
    }

    /// Returns `true` if the function is both injective and surjective.
    pub fn is_bijective(&self) -> bool {
        self.is_surjective() && self.is_injective()
    }
}

impl<D: Ord + fmt::Debug, C: Ord> Function<D, C> {
    /// Evaluates the function at `x`.
    pub fn call(&self, x: &D) -> Result<&C> {
        self.graph.get(x).ok_or_else(|| Error::not_in_domain(x))
    }

    /// The domain.
    pub fn domain(&self) -> &FiniteSet<D> {
        &self.domain
    }

    /// The codomain.
    pub fn codomain(&self) -> &FiniteSet<C> {
        &self.codomain
    }

    /// Input/output pairs in ascending input order.
    pub fn graph(&self) -> &BTreeMap<D, C> {
        &self.graph
    }
}

impl<T: Ord + Clone + fmt::Debug> Function<T, T> {
    /// The identity function on `set`.
    pub fn identity(set: FiniteSet<T>) -> Self {
        let graph = set.iter().map(|x| (x.clone(), x.clone())).collect();
        Self {
            domain: set.clone(),
            codomain: set,
            graph,
        }
    }
}

impl<T: Ord + Clone + fmt::Debug> Function<(T, T), T> {
    /// Evaluates a binary operation at `(a, b)`.
    pub fn call2(&self, a: &T, b: &T) -> Result<&T> {
        self.call(&(a.clone(), b.clone()))
    }
}

impl<D: Ord, C: Ord> PartialEq for Function<D, C> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.codomain == other.codomain
            && self.graph == other.graph
    }
}

impl<D: Ord, C: Ord> Eq for Function<D, C> {}

// Hashes only domain and codomain; equal functions agree on both. Hashing
// them in sequence keeps swapped domain/codomain pairs apart.
impl<D: Ord + Hash, C: Ord + Hash> Hash for Function<D, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.hash(state);
        self.codomain.hash(state);
    }
}

impl<D, C> fmt::Display for Function<D, C>
where
    D: Ord + Clone + fmt::Debug + fmt::Display,
    C: Ord + Clone + fmt::Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Domain & Image:")?;
        for (x, y) in &self.graph {
            write!(f, "\n{x} -> {y}")?;
        }
        write!(f, "\nRemaining Codomain:")?;
        for y in self.codomain.difference(&self.image()).iter() {
            write!(f, "\n -> {y}")?;
        }
        Ok(())
    }
}
