//! Shared fixtures for algebra-group integration tests.

use algebra_core::{FiniteSet, Function};
use algebra_group::{Group, zn};

/// The multiplicative group of units modulo a prime `p`.
pub fn units_mod(p: u64) -> Group<u64> {
    let units: FiniteSet<u64> = (1..p).collect();
    let op = Function::new(units.square(), units.clone(), |(a, b)| (a * b) % p)
        .expect("units modulo a prime are closed");
    Group::new(units, op).expect("units modulo a prime form a group")
}

/// Z2 × Z2.
pub fn klein_four() -> Group<(usize, usize)> {
    let z2 = zn(2).unwrap();
    z2.direct_product(&z2).unwrap()
}
