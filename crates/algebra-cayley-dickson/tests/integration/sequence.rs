//! The Cayley-Dickson sequence from the reals to the sedenions.

use algebra_cayley_dickson::{Algebra, BasisTable, CayleyDickson, Laws, SignedUnit, unit_group};
use algebra_group::zn;

#[test]
fn test_each_doubling_loses_a_law() {
    let expected = [
        (Algebra::Real, true, true, true),
        (Algebra::Complex, true, true, true),
        (Algebra::Quaternion, false, true, true),
        (Algebra::Octonion, false, false, true),
        (Algebra::Sedenion, false, false, false),
    ];
    for (algebra, commutative, associative, alternative) in expected {
        let laws = Laws::of(algebra.level()).unwrap();
        assert_eq!(laws.commutative, commutative, "{algebra}");
        assert_eq!(laws.associative, associative, "{algebra}");
        assert_eq!(laws.alternative, alternative, "{algebra}");
        assert!(laws.flexible, "{algebra} should be flexible");
    }
}

#[test]
fn test_table_agrees_with_arithmetic() {
    let level = Algebra::Octonion.level();
    let table = BasisTable::new(level).unwrap();
    for i in 0..table.dimension() {
        for j in 0..table.dimension() {
            let product = &CayleyDickson::<i64>::basis(level, i).unwrap()
                * &CayleyDickson::basis(level, j).unwrap();
            let unit = table.product(i, j).unwrap();
            assert_eq!(unit.to_number(level).unwrap(), product);
        }
    }
}

#[test]
fn test_lower_tables_embed_in_higher_ones() {
    let quaternions = BasisTable::new(2).unwrap();
    let sedenions = BasisTable::new(4).unwrap();
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(quaternions.product(i, j), sedenions.product(i, j));
        }
    }
}

#[test]
fn test_quaternion_table_rendering() {
    let table = BasisTable::new(2).unwrap().to_string();
    let first = table.lines().next().unwrap();
    assert_eq!(first, "1   │ e1  │ e2  │ e3 ");
    assert!(table.contains("e1  │ -1  │ e3  │ -e2"));
}

#[test]
fn test_unit_groups() {
    assert!(unit_group(0).unwrap().is_isomorphic(&zn(2).unwrap()).unwrap());
    assert!(unit_group(1).unwrap().is_isomorphic(&zn(4).unwrap()).unwrap());

    let q8 = unit_group(2).unwrap();
    let minus_one = SignedUnit::negative(0);
    let center = q8.generate([minus_one]).unwrap();
    assert!(center.is_normal_subgroup_of(&q8));
    let quotient = q8.quotient(&center).unwrap();
    let z2 = zn(2).unwrap();
    assert!(quotient.is_isomorphic(&z2.direct_product(&z2).unwrap()).unwrap());

    assert!(unit_group(3).is_err());
}

#[test]
fn test_mixed_level_arithmetic() {
    let z = CayleyDickson::from_coefficients(vec![0i64, 1]).unwrap();
    let j = CayleyDickson::<i64>::basis(2, 2).unwrap();
    let product = &z * &j;
    assert_eq!(product.level(), 2);
    assert_eq!(product, CayleyDickson::basis(2, 3).unwrap());
}
