//! Property-based tests for fieldguard.

use fieldguard::prelude::*;
use proptest::prelude::*;

fn run(chain: &RuleChain, value: FieldValue) -> ChainOutcome {
    chain.execute("field", value, &Snapshot::new())
}

// ============================================================================
// IDEMPOTENCY: execute(x) == execute(x)
// ============================================================================

proptest! {
    #[test]
    fn chain_execution_is_deterministic(s in ".*") {
        let chain = rules().required().trim().min_length(3).max_length(10).email();
        prop_assert_eq!(run(&chain, s.clone().into()), run(&chain, s.into()));
    }

    #[test]
    fn trim_is_idempotent(s in "[ a-z]{0,20}") {
        let once = run(&rules().trim(), s.into()).value;
        let twice = run(&rules().trim(), once.clone()).value;
        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// NO SHORT-CIRCUIT: each step reports independently
// ============================================================================

proptest! {
    #[test]
    fn chain_reports_each_failing_step(s in ".{0,30}") {
        let checks = [rules().min_length(5), rules().max_length(10), rules().email()];
        let expected: usize = checks.iter().map(|c| run(c, s.clone().into()).errors.len()).sum();

        let chain = rules().min_length(5).max_length(10).email();
        prop_assert_eq!(run(&chain, s.into()).errors.len(), expected);
    }

    #[test]
    fn empty_chain_is_identity(n in any::<i64>()) {
        let outcome = run(&rules(), n.into());
        prop_assert!(outcome.is_ok());
        prop_assert_eq!(outcome.value, FieldValue::I64(n));
    }
}

// ============================================================================
// COERCION: every integer width compares like its f64 value
// ============================================================================

proptest! {
    #[test]
    fn min_value_matches_f64_comparison(n in any::<i32>(), bound in -1000.0f64..1000.0) {
        let outcome = run(&rules().min_value(bound), n.into());
        prop_assert_eq!(outcome.is_ok(), f64::from(n) >= bound);
    }

    #[test]
    fn numeric_strings_coerce(n in any::<i32>()) {
        let outcome = run(&rules().max_value(f64::MAX), n.to_string().into());
        prop_assert_eq!(outcome.value, FieldValue::F64(f64::from(n)));
    }
}
