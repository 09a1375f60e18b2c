//! Property tests: confidence clamping and statistics totality.

use proptest::prelude::*;

use sector_core::models::Confidence;
use sector_core::stats;

proptest! {
    #[test]
    fn confidence_is_always_in_unit_range(value in -10.0f64..10.0) {
        let c = Confidence::new(value);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn statistics_never_panic_and_variance_is_nonnegative(
        values in proptest::collection::vec(-1000.0f64..1000.0, 0..64)
    ) {
        let _ = stats::mean(&values);
        prop_assert!(stats::variance(&values) >= 0.0);
        prop_assert!(stats::std_deviation(&values) >= 0.0);
    }

    #[test]
    fn dedup_preserves_membership_and_uniqueness(
        items in proptest::collection::vec("[a-c]{1,2}", 0..20)
    ) {
        let deduped = stats::dedup_preserving_order(items.clone());
        let mut sorted = deduped.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), deduped.len());
        for item in &items {
            prop_assert!(deduped.contains(item));
        }
    }
}
