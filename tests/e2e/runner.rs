//! Runner-side behavior: executing scenarios and aggregating outcomes.

use gwt_core::{GwtError, GwtScenario, GwtStep};

use crate::scenarios::{
    BadPasswordCounted, CheckoutDeclined, HalfBuilt, UnreviewedDraft, UserLogsIn,
};

/// One scenario outcome as a runner would record it.
struct Outcome {
    name: &'static str,
    result: gwt_core::Result<()>,
}

/// Runs a scenario on a fresh instance, the one-shot way the contract
/// expects: construct, call `test()` once, discard.
fn run<S: GwtScenario + Default>() -> Outcome {
    let mut scenario = S::default();
    Outcome {
        name: S::scenario_name(),
        result: scenario.test(),
    }
}

#[test]
fn test_well_formed_scenarios_pass() {
    assert!(run::<UserLogsIn>().result.is_ok());
    assert!(run::<BadPasswordCounted>().result.is_ok());
}

#[test]
fn test_suite_aggregation_separates_error_categories() {
    let outcomes = vec![
        run::<UserLogsIn>(),
        run::<BadPasswordCounted>(),
        run::<CheckoutDeclined>(),
        run::<UnreviewedDraft>(),
        run::<HalfBuilt>(),
    ];

    let passed: Vec<&str> = outcomes
        .iter()
        .filter(|o| o.result.is_ok())
        .map(|o| o.name)
        .collect();
    assert_eq!(passed, vec!["UserLogsIn", "BadPasswordCounted"]);

    let contract: Vec<&str> = outcomes
        .iter()
        .filter(|o| matches!(&o.result, Err(e) if e.is_contract_violation()))
        .map(|o| o.name)
        .collect();
    assert_eq!(contract, vec!["UnreviewedDraft", "HalfBuilt"]);

    let domain: Vec<&str> = outcomes
        .iter()
        .filter(|o| matches!(&o.result, Err(e) if !e.is_contract_violation()))
        .map(|o| o.name)
        .collect();
    assert_eq!(domain, vec!["CheckoutDeclined"]);
}

#[test]
fn test_domain_failure_reaches_runner_unchanged() {
    let outcome = run::<CheckoutDeclined>();
    let err = outcome.result.unwrap_err();
    assert_eq!(err.to_string(), "card declined by issuer");
}

#[test]
fn test_undocumented_scenario_fails_only_after_full_run() {
    let mut scenario = UnreviewedDraft::default();
    let err = scenario.test().unwrap_err();

    assert_eq!(scenario.steps_ran, vec!["given", "when", "then"]);
    assert!(matches!(
        err,
        GwtError::MissingDescription {
            scenario: "UnreviewedDraft"
        }
    ));
}

#[test]
fn test_unimplemented_step_reported_with_step_name() {
    let err = run::<HalfBuilt>().result.unwrap_err();
    assert!(matches!(
        err,
        GwtError::UnimplementedStep {
            scenario: "HalfBuilt",
            step: GwtStep::When,
        }
    ));
}

#[test]
fn test_each_invocation_uses_an_independent_instance() {
    // Two runs must not share state through the type.
    let first = run::<BadPasswordCounted>();
    let second = run::<BadPasswordCounted>();
    assert!(first.result.is_ok());
    assert!(second.result.is_ok());
}
