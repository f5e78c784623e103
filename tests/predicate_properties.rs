//! Property-based tests for predicate combinators and guard chains

use proptest::prelude::*;
use stillcheck::predicate::*;
use stillcheck::testing::Probe;
use stillcheck::when;

proptest! {
    #[test]
    fn prop_negate_complements(threshold in any::<i32>(), value in any::<i32>()) {
        let p = greater_than(threshold);
        prop_assert_eq!(negate(p).check(&value), !p.check(&value));
    }

    #[test]
    fn prop_double_negation_is_identity(threshold in any::<i64>(), value in any::<i64>()) {
        let p = less_than_or_equal(threshold);
        prop_assert_eq!(negate(negate(p)).check(&value), p.check(&value));
    }

    #[test]
    fn prop_all_of_matches_every(
        thresholds in prop::collection::vec(any::<i16>(), 1..20),
        value in any::<i16>()
    ) {
        let expected = thresholds.iter().all(|t| greater_than(*t).check(&value));
        let p = all_of(thresholds.iter().copied().map(greater_than));
        prop_assert_eq!(p.check(&value), expected);
    }

    #[test]
    fn prop_none_of_matches_no_element(
        thresholds in prop::collection::vec(any::<i16>(), 1..20),
        value in any::<i16>()
    ) {
        let expected = thresholds.iter().all(|t| !less_than(*t).check(&value));
        let p = none_of(thresholds.iter().copied().map(less_than));
        prop_assert_eq!(p.check(&value), expected);
    }

    #[test]
    fn prop_all_of_stops_after_first_failure(
        outcomes in prop::collection::vec(any::<bool>(), 1..12)
    ) {
        let log = Probe::new("log", true);
        let probes: Vec<Probe> = outcomes
            .iter()
            .map(|&held| Probe::sharing(if held { "pass" } else { "fail" }, held, &log))
            .collect();

        let result = all_of(probes).check(&());

        let expected_calls = outcomes
            .iter()
            .position(|held| !held)
            .map_or(outcomes.len(), |i| i + 1);
        prop_assert_eq!(result, outcomes.iter().all(|held| *held));
        prop_assert_eq!(log.calls().len(), expected_calls);
    }

    #[test]
    fn prop_chain_agrees_with_conjunction(
        links in prop::collection::vec((any::<i32>(), any::<i32>()), 1..30)
    ) {
        let (first_value, first_threshold) = links[0];
        let mut chain = when(first_value, greater_than(first_threshold));
        for &(value, threshold) in &links[1..] {
            chain = chain.and_when(value, greater_than(threshold));
        }

        let expected = links.iter().all(|(v, t)| v > t);
        prop_assert_eq!(chain.link_count(), links.len());
        prop_assert_eq!(chain.holds(), expected);
        prop_assert_eq!(chain.then(|| ()).is_some(), expected);
        prop_assert_eq!(chain.then_fail(|| ()).is_err(), expected);
    }

    #[test]
    fn prop_or_equal_variants_hold_on_equality(value in any::<i32>()) {
        prop_assert!(greater_than_or_equal(value).check(&value));
        prop_assert!(less_than_or_equal(value).check(&value));
        prop_assert!(!greater_than(value).check(&value));
        prop_assert!(!less_than(value).check(&value));
    }

    #[test]
    fn prop_blank_implies_empty_after_trim(s in "[ \t\n]{0,8}[a-z]{0,3}[ \t\n]{0,8}") {
        let trimmed = s.trim().to_string();
        prop_assert_eq!(is_blank_string().check(s.as_str()), is_empty_string().check(trimmed.as_str()));
    }
}
