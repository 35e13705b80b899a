use proptest::prelude::*;
use advent::reports::{is_safe, is_safe_bruteforce, is_strictly_safe};

// Reports built as a start level plus small steps, so that plenty of them
// are safe or one repair away from safe.
fn stepped_report(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    (
        -20i64..20,
        proptest::collection::vec(-5i64..=5, 0..max_len),
    )
        .prop_map(|(start, steps)| {
            let mut levels = vec![start];
            for step in steps {
                let last = *levels.last().unwrap();
                levels.push(last + step);
            }
            levels
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn single_pass_matches_bruteforce_on_arbitrary_levels(
        levels in proptest::collection::vec(-6i64..12, 0..10)
    ) {
        prop_assert_eq!(is_safe(&levels), is_safe_bruteforce(&levels), "levels: {:?}", levels);
    }

    #[test]
    fn single_pass_matches_bruteforce_on_stepped_reports(levels in stepped_report(12)) {
        prop_assert_eq!(is_safe(&levels), is_safe_bruteforce(&levels), "levels: {:?}", levels);
    }

    #[test]
    fn short_reports_are_safe(levels in proptest::collection::vec(any::<i32>(), 0..=2)) {
        let levels: Vec<i64> = levels.into_iter().map(i64::from).collect();
        prop_assert!(is_safe(&levels));
        prop_assert!(is_safe_bruteforce(&levels));
    }

    #[test]
    fn strictly_safe_implies_safe(levels in stepped_report(12)) {
        if is_strictly_safe(&levels) {
            prop_assert!(is_safe(&levels));
        }
    }
}
