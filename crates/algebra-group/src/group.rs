//! Finite groups.
//!
//! A [`Group`] is validated once at construction against the group axioms
//! and then keeps an indexed Cayley table, so products, inverses and
//! element orders are array lookups. Structural questions (subgroups,
//! quotients, generators, isomorphisms) are answered on that table.

use crate::element::Element;
use crate::homomorphism::GroupHomomorphism;
use crate::{Error, Result};
use algebra_core::table::{self, DEFAULT_SYMBOLS};
use algebra_core::{FiniteSet, Function, Value};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A finite group given by an element set and a binary operation.
///
/// # Examples
///
/// ```
/// use algebra_core::{FiniteSet, Function};
/// use algebra_group::Group;
///
/// // The multiplicative group of integers modulo 5.
/// let units: FiniteSet<u32> = (1..5).collect();
/// let op = Function::new(units.square(), units.clone(), |(a, b)| (a * b) % 5).unwrap();
/// let group = Group::new(units, op).unwrap();
///
/// assert_eq!(group.identity(), &1);
/// assert_eq!(group.invert(&2).unwrap(), 3);
/// assert!(group.is_abelian());
/// ```
#[derive(Clone, Debug)]
pub struct Group<T: Ord> {
    elements: FiniteSet<T>,
    bin_op: Function<(T, T), T>,
    /// Elements in ascending order; positions are the index space.
    values: Vec<T>,
    /// `table[a * n + b]` is the index of `a·b`.
    table: Vec<usize>,
    identity: usize,
    inverses: Vec<usize>,
    abelian: bool,
    /// Iteration order, identity first unless an explicit order was given.
    presentation: Vec<usize>,
    explicit_order: bool,
}

// ============================================================================
// Construction
// ============================================================================

impl<T: Value> Group<T> {
    /// Validates `bin_op` on `elements` and builds the group.
    ///
    /// The checks run in this order: codomain, domain, associativity over
    /// every ordered triple, a unique identity, then inverses.
    pub fn new(elements: FiniteSet<T>, bin_op: Function<(T, T), T>) -> Result<Self> {
        Self::build(elements, bin_op, None)
    }

    /// Like [`Group::new`], but iterates elements in the order of `ordered`.
    ///
    /// `ordered` must list every element exactly once.
    pub fn with_order(
        elements: FiniteSet<T>,
        bin_op: Function<(T, T), T>,
        ordered: Vec<T>,
    ) -> Result<Self> {
        Self::build(elements, bin_op, Some(ordered))
    }

    fn build(
        elements: FiniteSet<T>,
        bin_op: Function<(T, T), T>,
        ordered: Option<Vec<T>>,
    ) -> Result<Self> {
        if bin_op.codomain() != &elements {
            return Err(Error::CodomainMismatch);
        }
        if bin_op.domain() != &elements.square() {
            return Err(Error::DomainMismatch);
        }

        let values: Vec<T> = elements.iter().cloned().collect();
        let n = values.len();

        let mut table = Vec::with_capacity(n * n);
        for a in &values {
            for b in &values {
                let product = bin_op.call2(a, b)?;
                let index = values
                    .binary_search(product)
                    .map_err(|_| Error::CodomainMismatch)?;
                table.push(index);
            }
        }

        for a in 0..n {
            for b in 0..n {
                let ab = table[a * n + b];
                for c in 0..n {
                    let bc = table[b * n + c];
                    if table[ab * n + c] != table[a * n + bc] {
                        return Err(Error::NotAssociative {
                            triple: format!("({:?}, {:?}, {:?})", values[a], values[b], values[c]),
                        });
                    }
                }
            }
        }

        let identities: Vec<usize> = (0..n)
            .filter(|&e| (0..n).all(|a| table[e * n + a] == a))
            .collect();
        let [identity] = identities[..] else {
            return Err(Error::IdentityCount {
                found: identities.len(),
            });
        };

        let mut inverses = Vec::with_capacity(n);
        let mut missing = Vec::new();
        for a in 0..n {
            match (0..n).find(|&b| table[a * n + b] == identity) {
                Some(b) => inverses.push(b),
                None => missing.push(&values[a]),
            }
        }
        if !missing.is_empty() {
            return Err(Error::MissingInverses {
                elements: format!("{missing:?}"),
            });
        }

        let abelian = (0..n).all(|a| (a + 1..n).all(|b| table[a * n + b] == table[b * n + a]));

        let explicit_order = ordered.is_some();
        let presentation = match ordered {
            Some(ordered) => {
                if ordered.len() != n {
                    return Err(Error::OrderMismatch);
                }
                let positions = ordered
                    .iter()
                    .map(|v| values.binary_search(v).map_err(|_| Error::OrderMismatch))
                    .collect::<Result<Vec<usize>>>()?;
                if positions.iter().collect::<BTreeSet<_>>().len() != n {
                    return Err(Error::OrderMismatch);
                }
                positions
            }
            None => std::iter::once(identity)
                .chain((0..n).filter(|&i| i != identity))
                .collect(),
        };

        tracing::debug!(order = n, abelian, "validated group");

        Ok(Self {
            elements,
            bin_op,
            values,
            table,
            identity,
            inverses,
            abelian,
            presentation,
            explicit_order,
        })
    }

    /// The subgroup on `subset`, with the operation restricted to it.
    ///
    /// Fails if `subset` leaves the group or is not closed.
    pub fn restrict(&self, subset: &FiniteSet<T>) -> Result<Group<T>> {
        if let Some(outside) = subset.iter().find(|v| !self.contains(v)) {
            return Err(Error::not_in_group(outside));
        }
        let op = Function::try_new(subset.square(), subset.clone(), |(a, b)| self.op(a, b))?;
        Group::new(subset.clone(), op)
    }

    /// An isomorphic copy with every element renamed by `label`.
    ///
    /// The presentation order carries over. `label` must be injective.
    pub fn relabel<U, F>(&self, label: F) -> Result<Group<U>>
    where
        U: Value,
        F: Fn(&T) -> U,
    {
        let labels: Vec<U> = self.values.iter().map(&label).collect();
        let positions: BTreeMap<U, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        if positions.len() != labels.len() {
            return Err(Error::invalid_argument("relabelling must be injective"));
        }

        let elements: FiniteSet<U> = labels.iter().cloned().collect();
        let op = Function::try_new(elements.square(), elements.clone(), |(a, b)| {
            match (positions.get(a), positions.get(b)) {
                (Some(&i), Some(&j)) => Ok(labels[self.mul(i, j)].clone()),
                _ => Err(Error::not_in_group(a)),
            }
        })?;
        let ordered = self.presentation.iter().map(|&i| labels[i].clone()).collect();
        Group::with_order(elements, op, ordered)
    }
}

// ============================================================================
// Accessors and element arithmetic
// ============================================================================

impl<T: Value> Group<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a validated group; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The identity element.
    pub fn identity(&self) -> &T {
        &self.values[self.identity]
    }

    /// The underlying element set.
    pub fn elements(&self) -> &FiniteSet<T> {
        &self.elements
    }

    /// The binary operation the group was built from.
    pub fn bin_op(&self) -> &Function<(T, T), T> {
        &self.bin_op
    }

    /// Returns `true` if `value` is an element.
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Returns `true` if every pair of elements commutes.
    pub fn is_abelian(&self) -> bool {
        self.abelian
    }

    /// Returns `true` if an explicit presentation order was supplied.
    pub fn has_explicit_order(&self) -> bool {
        self.explicit_order
    }

    /// Elements in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.presentation.iter().map(|&i| &self.values[i])
    }

    /// Computes `a·b`.
    pub fn op(&self, a: &T, b: &T) -> Result<T> {
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        Ok(self.values[self.mul(i, j)].clone())
    }

    /// The inverse of `value`.
    pub fn invert(&self, value: &T) -> Result<T> {
        let i = self.index_of(value)?;
        Ok(self.values[self.inverses[i]].clone())
    }

    /// Binds `value` to this group.
    pub fn element(&self, value: &T) -> Result<Element<'_, T>> {
        Element::new(value, self)
    }

    /// Every element bound to this group, keyed by value.
    pub fn get_elements(&self) -> BTreeMap<T, Element<'_, T>> {
        (0..self.len())
            .map(|i| (self.values[i].clone(), Element::from_index(i, self)))
            .collect()
    }

    /// The order of `value`: the size of the cyclic subgroup it generates.
    pub fn element_order(&self, value: &T) -> Result<usize> {
        Ok(self.order_of(self.index_of(value)?))
    }

    /// Returns `true` if a single element generates the group.
    pub fn is_cyclic(&self) -> bool {
        (0..self.len()).any(|i| self.order_of(i) == self.len())
    }

    /// Sorted multiset of element orders.
    pub fn order_spectrum(&self) -> Vec<usize> {
        let mut orders: Vec<usize> = (0..self.len()).map(|i| self.order_of(i)).collect();
        orders.sort_unstable();
        orders
    }

    /// Renders the Cayley table, symbolising wide labels with `symbols`.
    pub fn cayley_table(&self, symbols: &str) -> String
    where
        T: fmt::Display,
    {
        let n = self.len();
        let labels: Vec<String> = self.iter().map(ToString::to_string).collect();
        let mut rank = vec![0; n];
        for (position, &i) in self.presentation.iter().enumerate() {
            rank[i] = position;
        }
        table::render_cayley(&labels, symbols, |a, b| {
            rank[self.mul(self.presentation[a], self.presentation[b])]
        })
    }

    // ------------------------------------------------------------------------
    // Index-level helpers shared with `Element`
    // ------------------------------------------------------------------------

    pub(crate) fn position(&self, value: &T) -> Option<usize> {
        self.values.binary_search(value).ok()
    }

    pub(crate) fn index_of(&self, value: &T) -> Result<usize> {
        self.position(value).ok_or_else(|| Error::not_in_group(value))
    }

    pub(crate) fn value_at(&self, index: usize) -> &T {
        &self.values[index]
    }

    pub(crate) fn mul(&self, a: usize, b: usize) -> usize {
        self.table[a * self.len() + b]
    }

    pub(crate) fn inverse_index(&self, a: usize) -> usize {
        self.inverses[a]
    }

    pub(crate) fn identity_index(&self) -> usize {
        self.identity
    }

    fn order_of(&self, a: usize) -> usize {
        let mut current = a;
        let mut order = 1;
        while current != self.identity {
            current = self.mul(current, a);
            order += 1;
        }
        order
    }

    /// Sorted indices of the subgroup generated by `generators`.
    fn closure(&self, generators: &[usize]) -> Vec<usize> {
        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::from([self.identity]);
        seen[self.identity] = true;
        while let Some(x) = queue.pop_front() {
            for &g in generators {
                let y = self.mul(x, g);
                if !seen[y] {
                    seen[y] = true;
                    queue.push_back(y);
                }
            }
        }
        (0..self.len()).filter(|&i| seen[i]).collect()
    }

    fn values_of(&self, indices: &[usize]) -> FiniteSet<T> {
        indices.iter().map(|&i| self.values[i].clone()).collect()
    }
}

// ============================================================================
// Subgroups, cosets, quotients, products
// ============================================================================

impl<T: Value> Group<T> {
    /// Returns `true` if `self` sits inside `other` with the same operation.
    pub fn is_subgroup_of(&self, other: &Group<T>) -> bool {
        self.elements.is_subset(&other.elements)
            && self.values.iter().all(|a| {
                self.values
                    .iter()
                    .all(|b| matches!((self.op(a, b), other.op(a, b)), (Ok(x), Ok(y)) if x == y))
            })
    }

    /// Returns `true` if `self` is a subgroup of `other` with `gH = Hg` for
    /// every `g` in `other`.
    pub fn is_normal_subgroup_of(&self, other: &Group<T>) -> bool {
        self.is_subgroup_of(other)
            && other.values.iter().all(|g| {
                matches!(
                    (other.left_coset(g, self), other.right_coset(g, self)),
                    (Ok(left), Ok(right)) if left == right
                )
            })
    }

    /// The left coset `gH`.
    pub fn left_coset(&self, g: &T, subgroup: &Group<T>) -> Result<FiniteSet<T>> {
        subgroup.values.iter().map(|h| self.op(g, h)).collect()
    }

    /// The right coset `Hg`.
    pub fn right_coset(&self, g: &T, subgroup: &Group<T>) -> Result<FiniteSet<T>> {
        subgroup.values.iter().map(|h| self.op(h, g)).collect()
    }

    /// The quotient group `self / normal`, whose elements are cosets.
    ///
    /// Cosets are presented in the order their first member appears in
    /// `self`, so the identity coset comes first.
    pub fn quotient(&self, normal: &Group<T>) -> Result<Group<FiniteSet<T>>> {
        if !normal.is_normal_subgroup_of(self) {
            return Err(Error::NotNormal);
        }

        let mut ordered: Vec<FiniteSet<T>> = Vec::new();
        for g in self.iter() {
            let coset = self.left_coset(g, normal)?;
            if !ordered.contains(&coset) {
                ordered.push(coset);
            }
        }
        let cosets: FiniteSet<FiniteSet<T>> = ordered.iter().cloned().collect();

        let op = Function::try_new(cosets.square(), cosets.clone(), |(x, y)| {
            let representative = x
                .first()
                .ok_or_else(|| Error::invalid_argument("cosets are never empty"))?;
            y.iter()
                .map(|h| self.op(representative, h))
                .collect::<Result<FiniteSet<T>>>()
        })?;
        Group::with_order(cosets, op, ordered)
    }

    /// The direct product `self × other` with the componentwise operation.
    pub fn direct_product<U: Value>(&self, other: &Group<U>) -> Result<Group<(T, U)>> {
        let elements = self.elements.product(&other.elements);
        let op = Function::try_new(elements.square(), elements.clone(), |((a1, b1), (a2, b2))| {
            Ok::<_, Error>((self.op(a1, a2)?, other.op(b1, b2)?))
        })?;
        let ordered = self
            .iter()
            .flat_map(|a| other.iter().map(move |b| (a.clone(), b.clone())))
            .collect();
        Group::with_order(elements, op, ordered)
    }

    /// The subgroup generated by `generators`.
    pub fn generate<I>(&self, generators: I) -> Result<Group<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let indices = generators
            .into_iter()
            .map(|g| self.index_of(&g))
            .collect::<Result<Vec<usize>>>()?;
        if indices.is_empty() {
            return Err(Error::EmptyGenerators);
        }
        self.restrict(&self.values_of(&self.closure(&indices)))
    }

    /// Every subgroup, ordered by size and then by elements.
    pub fn subgroups(&self) -> Result<Vec<Group<T>>> {
        let trivial = vec![self.identity];
        let mut found: BTreeSet<Vec<usize>> = BTreeSet::from([trivial.clone()]);
        let mut frontier = vec![trivial];

        while let Some(members) = frontier.pop() {
            for g in 0..self.len() {
                if members.binary_search(&g).is_ok() {
                    continue;
                }
                let mut generators = members.clone();
                generators.push(g);
                let next = self.closure(&generators);
                if found.insert(next.clone()) {
                    frontier.push(next);
                }
            }
        }

        let mut subgroups = found
            .iter()
            .map(|members| self.restrict(&self.values_of(members)))
            .collect::<Result<Vec<_>>>()?;
        subgroups.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.elements.cmp(&b.elements)));
        tracing::debug!(order = self.len(), count = subgroups.len(), "enumerated subgroups");
        Ok(subgroups)
    }

    /// Every normal subgroup, in the same order as [`Group::subgroups`].
    pub fn normal_subgroups(&self) -> Result<Vec<Group<T>>> {
        Ok(self
            .subgroups()?
            .into_iter()
            .filter(|h| h.is_normal_subgroup_of(self))
            .collect())
    }

    /// A generating set of at most `log2(n) + 1` elements.
    ///
    /// Built greedily in presentation order. The identity is only returned
    /// for the trivial group.
    pub fn generators(&self) -> Vec<T> {
        self.generator_indices()
            .into_iter()
            .map(|i| self.values[i].clone())
            .collect()
    }

    fn generator_indices(&self) -> Vec<usize> {
        let mut generators = vec![self.identity];
        let mut members = self.closure(&generators);
        while members.len() < self.len() {
            let Some(next) = self
                .presentation
                .iter()
                .copied()
                .find(|i| members.binary_search(i).is_err())
            else {
                break;
            };
            generators.push(next);
            members = self.closure(&generators);
        }
        if self.len() != 1 {
            generators.remove(0);
        }
        generators
    }
}

// ============================================================================
// Isomorphism search
// ============================================================================

impl<T: Value> Group<T> {
    /// Finds an isomorphism `self → other`, if one exists.
    ///
    /// Generators of `self` are assigned images of matching order in
    /// `other`; each assignment is extended along products and rejected
    /// at the first collision.
    pub fn find_isomorphism<U: Value>(
        &self,
        other: &Group<U>,
    ) -> Result<Option<GroupHomomorphism<T, U>>> {
        if self.len() != other.len()
            || self.abelian != other.abelian
            || self.order_spectrum() != other.order_spectrum()
        {
            return Ok(None);
        }

        let generators = self.generator_indices();
        let candidates: Vec<Vec<usize>> = generators
            .iter()
            .map(|&g| {
                let order = self.order_of(g);
                (0..other.len())
                    .filter(|&h| other.order_of(h) == order)
                    .collect()
            })
            .collect();

        let mut chosen = Vec::with_capacity(generators.len());
        let Some(map) = self.search_assignment(other, &generators, &candidates, &mut chosen) else {
            return Ok(None);
        };

        let graph: BTreeMap<T, U> = (0..self.len())
            .map(|i| (self.values[i].clone(), other.values[map[i]].clone()))
            .collect();
        let function = Function::try_new(self.elements.clone(), other.elements.clone(), |x| {
            graph.get(x).cloned().ok_or_else(|| Error::not_in_group(x))
        })?;
        GroupHomomorphism::new(self.clone(), other.clone(), function).map(Some)
    }

    /// Returns `true` if the two groups are isomorphic.
    pub fn is_isomorphic<U: Value>(&self, other: &Group<U>) -> Result<bool> {
        Ok(self.find_isomorphism(other)?.is_some())
    }

    fn search_assignment<U: Value>(
        &self,
        other: &Group<U>,
        generators: &[usize],
        candidates: &[Vec<usize>],
        chosen: &mut Vec<usize>,
    ) -> Option<Vec<usize>> {
        let k = chosen.len();
        if k == generators.len() {
            return self.extend_assignment(other, generators, chosen);
        }
        for &h in &candidates[k] {
            if chosen.contains(&h) {
                continue;
            }
            chosen.push(h);
            if let Some(map) = self.search_assignment(other, generators, candidates, chosen) {
                return Some(map);
            }
            chosen.pop();
        }
        None
    }

    fn extend_assignment<U: Value>(
        &self,
        other: &Group<U>,
        generators: &[usize],
        images: &[usize],
    ) -> Option<Vec<usize>> {
        let n = self.len();
        let mut map: Vec<Option<usize>> = vec![None; n];
        let mut used = vec![false; n];
        map[self.identity] = Some(other.identity);
        used[other.identity] = true;

        // Only the identity is seeded; generator images are reached as `e·g`.
        let mut queue = VecDeque::from([self.identity]);
        while let Some(x) = queue.pop_front() {
            let fx = map[x]?;
            for (&g, &h) in generators.iter().zip(images) {
                let y = self.mul(x, g);
                let fy = other.mul(fx, h);
                match map[y] {
                    Some(existing) if existing != fy => return None,
                    Some(_) => {}
                    None if used[fy] => return None,
                    None => {
                        map[y] = Some(fy);
                        used[fy] = true;
                        queue.push_back(y);
                    }
                }
            }
        }

        let map: Vec<usize> = map.into_iter().collect::<Option<_>>()?;
        let respects_products =
            (0..n).all(|a| (0..n).all(|b| map[self.mul(a, b)] == other.mul(map[a], map[b])));
        respects_products.then_some(map)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<T: Ord> PartialEq for Group<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements && self.bin_op == other.bin_op
    }
}

impl<T: Ord> Eq for Group<T> {}

impl<T: Ord + Hash> Hash for Group<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bin_op.hash(state);
        self.elements.hash(state);
    }
}

impl<T: Value + fmt::Display> fmt::Display for Group<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cayley_table(DEFAULT_SYMBOLS))
    }
}
