//! medal_rank — deterministic ranking of medal standings.
//!
//! Pure and I/O-free: `rank` is a total function over well-typed input with
//! no error path. Ordering rules:
//!
//! - Primary comparison is numeric on the configured key; descending inverts
//!   the natural ascending order.
//! - On exact primary equality a fixed cascade applies, **always descending**
//!   regardless of the configured direction:
//!   total→gold, gold→silver, silver→gold, bronze→gold.
//! - Records still tied after the cascade keep their input order (the sort
//!   is stable), so identical input and config yield identical output.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

use core::cmp::Ordering;

use alloc::vec::Vec;

use medal_core::{MedalRecord, SortConfig, SortDirection, SortKey};

/// Secondary key applied when primary values are exactly equal.
#[inline]
pub const fn tie_break_key(key: SortKey) -> SortKey {
    match key {
        SortKey::Total => SortKey::Gold,
        SortKey::Gold => SortKey::Silver,
        SortKey::Silver => SortKey::Gold,
        SortKey::Bronze => SortKey::Gold,
    }
}

/// Compare two records under `config`.
///
/// Returns `Equal` only when both the primary and the cascade key are equal;
/// the stable sort in [`rank`] then preserves input order.
pub fn cmp_records(a: &MedalRecord, b: &MedalRecord, config: SortConfig) -> Ordering {
    let pa = a.key_value(config.key);
    let pb = b.key_value(config.key);
    if pa != pb {
        let natural = pa.cmp(&pb);
        return match config.direction {
            SortDirection::Ascending => natural,
            SortDirection::Descending => natural.reverse(),
        };
    }
    // Cascade is always descending, independent of config.direction.
    let secondary = tie_break_key(config.key);
    b.key_value(secondary).cmp(&a.key_value(secondary))
}

/// Produce the ranked standings for `records` under `config`.
///
/// The output is a fresh vector holding a permutation of the input; the input
/// slice is never mutated. Duplicate country codes are tolerated (data
/// quality is the source's concern). Empty in, empty out.
pub fn rank(records: &[MedalRecord], config: SortConfig) -> Vec<MedalRecord> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| cmp_records(a, b, config));
    out
}


#[cfg(test)]
mod properties {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;
    use medal_core::CountryMedals;
    use proptest::collection::btree_set;
    use proptest::prelude::*;

    const ALL_KEYS: [SortKey; 4] = [
        SortKey::Gold,
        SortKey::Silver,
        SortKey::Bronze,
        SortKey::Total,
    ];

    fn arb_records() -> impl Strategy<Value = Vec<MedalRecord>> {
        proptest::collection::vec((0u32..50, 0u32..50, 0u32..50), 0..40).prop_map(|counts| {
            counts
                .into_iter()
                .enumerate()
                .map(|(i, (gold, silver, bronze))| {
                    MedalRecord::from_counts(CountryMedals {
                        code: format!("C{i:03}"),
                        gold,
                        silver,
                        bronze,
                    })
                })
                .collect()
        })
    }

    /// Records whose gold counts are pairwise distinct (silver/bronze derived
    /// so every key's primary values stay distinct too).
    fn arb_distinct_records() -> impl Strategy<Value = Vec<MedalRecord>> {
        btree_set(0u32..10_000, 0..30).prop_map(|values| {
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| {
                    MedalRecord::from_counts(CountryMedals {
                        code: format!("D{i:03}"),
                        gold: v,
                        silver: 2 * v,
                        bronze: 4 * v,
                    })
                })
                .collect()
        })
    }

    fn sorted_multiset(records: &[MedalRecord]) -> Vec<(String, u32, u32, u32)> {
        let mut keys: Vec<_> = records
            .iter()
            .map(|r| (r.code.clone(), r.gold, r.silver, r.bronze))
            .collect();
        keys.sort();
        keys
    }

    proptest! {
        #[test]
        fn rank_is_a_permutation(records in arb_records()) {
            for key in ALL_KEYS {
                for direction in [SortDirection::Ascending, SortDirection::Descending] {
                    let ranked = rank(&records, SortConfig::new(key, direction));
                    prop_assert_eq!(ranked.len(), records.len());
                    prop_assert_eq!(sorted_multiset(&ranked), sorted_multiset(&records));
                }
            }
        }

        #[test]
        fn rank_is_idempotent(records in arb_records()) {
            for key in ALL_KEYS {
                let config = SortConfig::new(key, SortDirection::Descending);
                let once = rank(&records, config);
                prop_assert_eq!(rank(&once, config), once);
            }
        }

        #[test]
        fn rank_is_deterministic(records in arb_records()) {
            for key in ALL_KEYS {
                let config = SortConfig::new(key, SortDirection::Ascending);
                prop_assert_eq!(rank(&records, config), rank(&records, config));
            }
        }

        #[test]
        fn directions_are_exact_mirrors_for_distinct_primaries(records in arb_distinct_records()) {
            for key in ALL_KEYS {
                let desc = rank(&records, SortConfig::new(key, SortDirection::Descending));
                let mut asc = rank(&records, SortConfig::new(key, SortDirection::Ascending));
                asc.reverse();
                prop_assert_eq!(desc, asc);
            }
        }
    }
}
