//! Property-based tests for sets and functions.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{FiniteSet, Function};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_product_cardinality(a in prop::collection::btree_set(0u8..40, 0..12),
                                    b in prop::collection::btree_set(0u8..40, 0..12)) {
            let a = FiniteSet::from(a);
            let b = FiniteSet::from(b);
            prop_assert_eq!(a.product(&b).len(), a.len() * b.len());
        }

        #[test]
        fn test_union_intersection_sizes(a in prop::collection::btree_set(0u8..30, 0..15),
                                         b in prop::collection::btree_set(0u8..30, 0..15)) {
            let a = FiniteSet::from(a);
            let b = FiniteSet::from(b);
            prop_assert_eq!(a.union(&b).len() + a.intersection(&b).len(), a.len() + b.len());
            prop_assert!(a.difference(&b).is_subset(&a));
        }

        #[test]
        fn test_modular_shift_is_bijective(n in 1u32..50, k in 0u32..100) {
            let s: FiniteSet<u32> = (0..n).collect();
            let f = Function::new(s.clone(), s, |x| (x + k) % n).unwrap();
            prop_assert!(f.is_bijective());
        }

        #[test]
        fn test_compose_with_identity(n in 1u32..30, m in 1u32..30) {
            let domain: FiniteSet<u32> = (0..n).collect();
            let codomain: FiniteSet<u32> = (0..m).collect();
            let f = Function::new(domain.clone(), codomain.clone(), |x| x % m).unwrap();
            let left = Function::identity(codomain).compose(&f).unwrap();
            let right = f.compose(&Function::identity(domain)).unwrap();
            prop_assert_eq!(&left, &f);
            prop_assert_eq!(&right, &f);
        }
    }
}
