//! Small-group classification checks across the built-in families.

use algebra_group::{dn, sn, zn};

use crate::common::{klein_four, units_mod};

#[test]
fn test_order_four_groups() {
    let z4 = zn(4).unwrap();
    let klein = klein_four();
    assert!(!z4.is_isomorphic(&klein).unwrap());
    assert!(dn(2).unwrap().is_isomorphic(&klein).unwrap());
    assert!(units_mod(5).is_isomorphic(&z4).unwrap());
}

#[test]
fn test_order_six_groups() {
    let s3 = sn(3).unwrap();
    let d3 = dn(3).unwrap();
    let z6 = zn(6).unwrap();
    assert!(s3.is_isomorphic(&d3).unwrap());
    assert!(!s3.is_isomorphic(&z6).unwrap());
    assert!(units_mod(7).is_isomorphic(&z6).unwrap());
    assert!(zn(2).unwrap().direct_product(&zn(3).unwrap()).unwrap().is_isomorphic(&z6).unwrap());
}

#[test]
fn test_trivial_and_tiny_groups() {
    assert!(zn(1).unwrap().is_isomorphic(&sn(1).unwrap()).unwrap());
    assert!(zn(2).unwrap().is_isomorphic(&sn(2).unwrap()).unwrap());
    assert!(zn(2).unwrap().is_isomorphic(&dn(1).unwrap()).unwrap());
    assert!(!zn(2).unwrap().is_isomorphic(&zn(3).unwrap()).unwrap());
}

#[test]
fn test_order_24_groups_differ() {
    let s4 = sn(4).unwrap();
    assert!(!dn(12).unwrap().is_isomorphic(&s4).unwrap());
    assert!(!zn(24).unwrap().is_isomorphic(&s4).unwrap());
}

#[test]
fn test_isomorphism_maps_identity_to_identity() {
    let s3 = sn(3).unwrap();
    let d3 = dn(3).unwrap();
    let f = s3.find_isomorphism(&d3).unwrap().expect("S3 and D3 are isomorphic");
    assert_eq!(f.call(s3.identity()).unwrap(), d3.identity());
    assert!(f.is_isomorphism());
}

#[test]
fn test_subgroup_lattice_sizes() {
    assert_eq!(zn(12).unwrap().subgroups().unwrap().len(), 6);
    assert_eq!(klein_four().subgroups().unwrap().len(), 5);
    assert_eq!(sn(4).unwrap().subgroups().unwrap().len(), 30);
    assert_eq!(sn(4).unwrap().normal_subgroups().unwrap().len(), 4);
}

#[test]
fn test_subgroups_are_sorted_and_contain_extremes() {
    let d4 = dn(4).unwrap();
    let subgroups = d4.subgroups().unwrap();
    assert_eq!(subgroups.first().unwrap().len(), 1);
    assert_eq!(subgroups.last().unwrap(), &d4);
    assert!(subgroups.windows(2).all(|w| w[0].len() <= w[1].len()));
    for h in &subgroups {
        assert_eq!(d4.len() % h.len(), 0);
        assert!(h.is_subgroup_of(&d4));
    }
}

#[test]
fn test_generators_are_small() {
    for group in [sn(3).unwrap(), sn(4).unwrap()] {
        let generators = group.generators();
        assert_eq!(group.generate(generators.clone()).unwrap(), group);
        assert!(generators.len() <= 5);
    }
    let d6 = dn(6).unwrap();
    assert_eq!(d6.generate(d6.generators()).unwrap(), d6);
}

#[test]
fn test_s4_table_is_symbolised() {
    let table = sn(4).unwrap().to_string();
    assert!(table.starts_with("e: 0123\n"));
    assert!(table.contains("\n\ne │ a │ b"));
}
