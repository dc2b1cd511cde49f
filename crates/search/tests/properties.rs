//! Property tests for the lower-bound contract.

use proptest::prelude::*;
use tsalign_search::{find_lower_bound, lower_bound};

fn arb_sorted() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000i32..1_000, 0..64).prop_map(|mut v| {
        v.sort_unstable();
        v.into_iter().map(f64::from).collect()
    })
}

proptest! {
    #[test]
    fn partitions_haystack(h in arb_sorted(), q in -1_100i32..1_100) {
        let q = f64::from(q);
        let idx = lower_bound(q, &h);
        prop_assert!(idx <= h.len());
        prop_assert!(h[..idx].iter().all(|&v| v < q));
        prop_assert!(h[idx..].iter().all(|&v| v >= q));
    }

    #[test]
    fn agrees_with_partition_point(h in arb_sorted(), q in -1_100i32..1_100) {
        let q = f64::from(q);
        prop_assert_eq!(lower_bound(q, &h), h.partition_point(|&v| v < q));
    }

    #[test]
    fn chained_hints_match_fresh_search(
        h in arb_sorted(),
        mut queries in prop::collection::vec(-1_100i32..1_100, 0..32),
    ) {
        queries.sort_unstable();
        let mut cursor = 0;
        for q in queries {
            let q = f64::from(q);
            cursor = find_lower_bound(q, &h, cursor);
            prop_assert_eq!(cursor, lower_bound(q, &h));
        }
    }
}
