//! Groups built directly from sets and functions.

use algebra_core::{FiniteSet, Function};
use algebra_group::{Error, Group, GroupHomomorphism, zn};

use crate::common::units_mod;

#[test]
fn test_units_mod_prime_are_cyclic() {
    for p in [2, 3, 5, 7, 11, 13] {
        let group = units_mod(p);
        assert!(group.is_cyclic(), "units mod {p} should be cyclic");
        assert_eq!(group.len() as u64, p - 1);
    }
}

#[test]
fn test_units_mod_eight_are_not_cyclic() {
    let units: FiniteSet<u64> = [1, 3, 5, 7].into_iter().collect();
    let op = Function::new(units.square(), units.clone(), |(a, b)| (a * b) % 8).unwrap();
    let group = Group::new(units, op).unwrap();
    assert!(!group.is_cyclic());
    assert_eq!(group.order_spectrum(), vec![1, 2, 2, 2]);
}

#[test]
fn test_validation_order_reports_codomain_first() {
    let elements: FiniteSet<u64> = (0..4).collect();
    let narrow: FiniteSet<u64> = (0..3).collect();
    let op = Function::new(narrow.square(), narrow.clone(), |(a, b)| (a + b) % 3).unwrap();
    assert_eq!(Group::new(elements, op).unwrap_err(), Error::CodomainMismatch);
}

#[test]
fn test_string_labels_round_trip() {
    let z4 = zn(4).unwrap();
    let named = z4.relabel(|x| format!("g{x}")).unwrap();
    assert_eq!(named.identity(), "g0");
    assert_eq!(named.op(&"g3".to_string(), &"g2".to_string()).unwrap(), "g1");
    let f = z4.find_isomorphism(&named).unwrap().unwrap();
    assert!(f.is_isomorphism());
}

#[test]
fn test_logarithm_homomorphism() {
    // 2 generates the units mod 5, so k ↦ 2^k is an isomorphism Z4 → U(5).
    let z4 = zn(4).unwrap();
    let units = units_mod(5);
    let exp = GroupHomomorphism::from_fn(z4, units, |k| 2u64.pow(*k as u32) % 5).unwrap();
    assert!(exp.is_isomorphism());
    assert_eq!(exp.kernel().unwrap().len(), 1);
}

#[test]
fn test_quotient_of_product() {
    let z2 = zn(2).unwrap();
    let z4 = zn(4).unwrap();
    let product = z2.direct_product(&z4).unwrap();
    let diagonal = product.generate([(1, 2)]).unwrap();
    let quotient = product.quotient(&diagonal).unwrap();
    assert_eq!(quotient.len(), 4);
    assert!(quotient.is_cyclic());
}

#[test]
fn test_cosets_partition_the_group() {
    let s3 = algebra_group::sn(3).unwrap();
    let h = s3.generate(["102".parse().unwrap()]).unwrap();
    let mut covered = FiniteSet::empty();
    for g in s3.iter() {
        let coset = s3.left_coset(g, &h).unwrap();
        assert_eq!(coset.len(), h.len());
        covered = covered.union(&coset);
    }
    assert_eq!(&covered, s3.elements());
}
