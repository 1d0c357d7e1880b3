//! Property tests for fan resolution and combination checks.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::config::RuleVariant;
use crate::domain::fan_catalog::{all_fans, fan_by_id};
use crate::domain::fan_resolver::{resolve_fan_selection, validate_fan_combination};
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: selection order changes nothing but description order
    #[test]
    fn prop_total_ignores_order(
        (ids, shuffled) in test_gens::fan_selection()
            .prop_flat_map(|ids| (Just(ids.clone()), Just(ids).prop_shuffle())),
        variant in test_gens::variant(),
    ) {
        let a = resolve_fan_selection(&ids, variant);
        let b = resolve_fan_selection(&shuffled, variant);
        prop_assert_eq!(a.total_fan, b.total_fan);

        let a_ids: HashSet<_> = a.surviving.iter().map(|f| f.id).collect();
        let b_ids: HashSet<_> = b.surviving.iter().map(|f| f.id).collect();
        prop_assert_eq!(a_ids, b_ids);
    }

    /// Property: an included fan never survives next to its includer
    #[test]
    fn prop_included_fans_are_suppressed(
        ids in test_gens::fan_selection(),
        variant in test_gens::variant(),
    ) {
        let r = resolve_fan_selection(&ids, variant);
        let surviving: HashSet<_> = r.surviving.iter().map(|f| f.id).collect();
        for f in &r.surviving {
            for inc in f.includes {
                prop_assert!(!surviving.contains(inc), "{} survived next to {}", inc, f.id);
            }
        }
        prop_assert_eq!(r.total_fan, r.surviving.iter().map(|f| f.value).sum::<u32>());
    }

    /// Property: resolution never exceeds the plain sum of distinct values
    #[test]
    fn prop_total_bounded_by_naive_sum(
        ids in test_gens::fan_selection(),
        variant in test_gens::variant(),
    ) {
        let distinct: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let naive: u32 = distinct.iter().filter_map(|id| fan_by_id(id)).map(|f| f.value).sum();
        prop_assert!(resolve_fan_selection(&ids, variant).total_fan <= naive);
    }

    /// Property: conflicts are found regardless of which side is listed first
    #[test]
    fn prop_conflicts_are_symmetric(
        a in test_gens::fan_id(),
        b in test_gens::fan_id(),
    ) {
        let declared = a != b
            && fan_by_id(&a).is_some_and(|f| f.incompatible_with.contains(&b.as_str()));
        let ab = validate_fan_combination(&[a.clone(), b.clone()]);
        let ba = validate_fan_combination(&[b, a]);
        prop_assert_eq!(ab.valid, ba.valid);
        prop_assert_eq!(ab.conflicts.len(), ba.conflicts.len());
        prop_assert_eq!(ab.valid, !declared);
        prop_assert_eq!(ab.conflicts.len(), usize::from(declared));
    }
}

#[test]
fn every_included_fan_adds_nothing_to_its_includer() {
    for f in all_fans() {
        for inc in f.includes {
            let alone = resolve_fan_selection(&[f.id], RuleVariant::Custom);
            let both = resolve_fan_selection(&[f.id, *inc], RuleVariant::Custom);
            let reversed = resolve_fan_selection(&[*inc, f.id], RuleVariant::Custom);
            assert_eq!(both.total_fan, alone.total_fan, "{} + {inc}", f.id);
            assert_eq!(reversed.total_fan, alone.total_fan, "{inc} + {}", f.id);
        }
    }
}
