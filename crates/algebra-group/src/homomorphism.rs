//! Structure-preserving maps between groups.

use crate::group::Group;
use crate::{Error, Result};
use algebra_core::{FiniteSet, Function, Value};

/// A map `f: G → H` with `f(ab) = f(a)f(b)` for all `a, b` in `G`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupHomomorphism<T: Ord, U: Ord> {
    domain: Group<T>,
    codomain: Group<U>,
    map: Function<T, U>,
}

impl<T: Value, U: Value> GroupHomomorphism<T, U> {
    /// Checks that `map` joins the two element sets and respects products.
    pub fn new(domain: Group<T>, codomain: Group<U>, map: Function<T, U>) -> Result<Self> {
        if map.domain() != domain.elements() || map.codomain() != codomain.elements() {
            return Err(Error::MapMismatch);
        }

        for a in domain.elements() {
            for b in domain.elements() {
                let lhs = map.call(&domain.op(a, b)?)?;
                let rhs = codomain.op(map.call(a)?, map.call(b)?)?;
                if *lhs != rhs {
                    return Err(Error::NotHomomorphism {
                        pair: format!("({a:?}, {b:?})"),
                    });
                }
            }
        }

        Ok(Self {
            domain,
            codomain,
            map,
        })
    }

    /// Builds the map by evaluating `f` on every element of `domain`.
    pub fn from_fn<F>(domain: Group<T>, codomain: Group<U>, f: F) -> Result<Self>
    where
        F: FnMut(&T) -> U,
    {
        let map = Function::new(domain.elements().clone(), codomain.elements().clone(), f)?;
        Self::new(domain, codomain, map)
    }

    /// Evaluates the map at `x`.
    pub fn call(&self, x: &T) -> Result<&U> {
        Ok(self.map.call(x)?)
    }

    /// The source group.
    pub fn domain(&self) -> &Group<T> {
        &self.domain
    }

    /// The target group.
    pub fn codomain(&self) -> &Group<U> {
        &self.codomain
    }

    /// The underlying function on elements.
    pub fn map(&self) -> &Function<T, U> {
        &self.map
    }

    /// Elements sent to the identity, as a subgroup of the domain.
    pub fn kernel(&self) -> Result<Group<T>> {
        let identity = self.codomain.identity();
        let kernel: FiniteSet<T> = self
            .map
            .graph()
            .iter()
            .filter(|(_, y)| *y == identity)
            .map(|(x, _)| x.clone())
            .collect();
        self.domain.restrict(&kernel)
    }

    /// The image, as a subgroup of the codomain.
    pub fn image(&self) -> Result<Group<U>> {
        self.codomain.restrict(&self.map.image())
    }

    /// Returns `true` if the map is one-to-one.
    pub fn is_injective(&self) -> bool {
        self.map.is_injective()
    }

    /// Returns `true` if every element of the codomain is hit.
    pub fn is_surjective(&self) -> bool {
        self.map.is_surjective()
    }

    /// Returns `true` if the map is a bijection, hence an isomorphism.
    pub fn is_isomorphism(&self) -> bool {
        self.map.is_bijective()
    }
}
