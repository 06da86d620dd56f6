//! The signed basis units `{±e_i}` as a finite group.

use crate::Result;
use crate::basis::{BasisTable, SignedUnit};
use algebra_core::{FiniteSet, Function};
use algebra_group::Group;

/// The group `{±1, ±e_1, …}` of signed basis units at `level`.
///
/// Levels 0, 1 and 2 give the cyclic groups of order 2 and 4 and the
/// quaternion group Q8. From octonions up the units only form a Moufang
/// loop, so construction fails with the group crate's associativity error.
///
/// Elements are presented as `1, e1, …, -1, -e1, …`.
pub fn unit_group(level: u32) -> Result<Group<SignedUnit>> {
    let table = BasisTable::new(level)?;
    let n = table.dimension();
    let ordered: Vec<SignedUnit> = (0..n)
        .map(SignedUnit::positive)
        .chain((0..n).map(SignedUnit::negative))
        .collect();
    let elements: FiniteSet<SignedUnit> = ordered.iter().copied().collect();

    let op = Function::try_new(elements.square(), elements.clone(), |(a, b)| {
        table.multiply(*a, *b).ok_or_else(|| {
            algebra_core::Error::invalid_argument(format!("{a} or {b} is outside level {level}"))
        })
    })?;

    tracing::debug!(level, order = 2 * n, "validating unit group");
    Ok(Group::with_order(elements, op, ordered)?)
}
