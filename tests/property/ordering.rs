use std::collections::HashMap;

use proptest::prelude::*;
use advent::errors::PuzzleError;
use advent::ordering::{RuleSet, Update, check_update, find_violation, topological_order};

/// A hidden total order over `n` pages, a random subset of the rules it
/// implies, and an update over a random subset of pages in random order.
#[derive(Debug, Clone)]
struct Case {
    rules: Vec<(u32, u32)>,
    update: Vec<u32>,
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (2usize..12).prop_flat_map(|n| {
        let hidden = Just((0..n as u32).map(|p| p * 7 + 10).collect::<Vec<_>>()).prop_shuffle();
        let mask = proptest::collection::vec(any::<bool>(), n * (n - 1) / 2);
        let picks = proptest::collection::vec(any::<bool>(), n);
        let keys = proptest::collection::vec(any::<u32>(), n);

        (hidden, mask, picks, keys).prop_map(|(hidden, mask, picks, keys)| {
            let mut rules = Vec::new();
            let mut bit = 0;
            for i in 0..hidden.len() {
                for j in i + 1..hidden.len() {
                    if mask[bit] {
                        rules.push((hidden[i], hidden[j]));
                    }
                    bit += 1;
                }
            }

            let mut chosen: Vec<(u32, u32)> = hidden
                .iter()
                .zip(picks.iter().zip(keys.iter()))
                .filter(|(_, (pick, _))| **pick)
                .map(|(page, (_, key))| (*key, *page))
                .collect();
            if chosen.is_empty() {
                chosen.push((0, hidden[0]));
            }
            chosen.sort();

            Case {
                rules,
                update: chosen.into_iter().map(|(_, page)| page).collect(),
            }
        })
    })
}

proptest! {
    #[test]
    fn corrected_order_respects_every_induced_rule(case in case_strategy()) {
        let rules: RuleSet = case.rules.iter().copied().collect();
        let update = Update::new(case.update.clone()).unwrap();
        let order = topological_order(&update, &rules).unwrap();

        let mut sorted_in = case.update.clone();
        let mut sorted_out = order.clone();
        sorted_in.sort_unstable();
        sorted_out.sort_unstable();
        prop_assert_eq!(sorted_in, sorted_out);

        let pos: HashMap<u32, usize> = order.iter().enumerate().map(|(i, &p)| (p, i)).collect();
        for (before, after) in &case.rules {
            if let (Some(b), Some(a)) = (pos.get(before), pos.get(after)) {
                prop_assert!(b < a, "rule {}|{} broken in {:?}", before, after, order);
            }
        }
    }

    #[test]
    fn topological_order_is_idempotent(case in case_strategy()) {
        let rules: RuleSet = case.rules.iter().copied().collect();
        let update = Update::new(case.update.clone()).unwrap();
        let once = topological_order(&update, &rules).unwrap();
        let twice = topological_order(&Update::new(once.clone()).unwrap(), &rules).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn valid_iff_no_rule_is_broken(case in case_strategy()) {
        let rules: RuleSet = case.rules.iter().copied().collect();
        let update = Update::new(case.update.clone()).unwrap();
        let check = check_update(&update, &rules).unwrap();
        prop_assert_eq!(check.is_valid(), find_violation(&update, &rules).is_none());
    }

    #[test]
    fn reversed_rule_between_present_pages_is_fatal(case in case_strategy()) {
        let present: Vec<(u32, u32)> = case
            .rules
            .iter()
            .copied()
            .filter(|(a, b)| case.update.contains(a) && case.update.contains(b))
            .collect();
        prop_assume!(!present.is_empty());

        let (before, after) = present[0];
        let rules: RuleSet = case.rules.iter().copied().chain([(after, before)]).collect();
        let update = Update::new(case.update.clone()).unwrap();
        let is_cycle_error = matches!(
            topological_order(&update, &rules),
            Err(PuzzleError::UnsatisfiableConstraints(_))
        );
        prop_assert!(is_cycle_error);
    }
}
