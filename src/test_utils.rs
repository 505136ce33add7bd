//! Shared test utilities.
//!
//! Table checks here are generic over [`StatusMachine`], so each kind's tests only need
//! to state the rows they expect; the structural properties are checked exhaustively.

use crate::core::machine::{StatusMachine, Tag};
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Every `(status, transition, result)` the table defines, in declaration order.
pub fn expected_rows<M: StatusMachine>() -> Vec<(M::Status, M::Transition, M::Status)> {
    M::Status::ALL
        .iter()
        .flat_map(|&status| {
            M::Transition::ALL.iter().filter_map(move |&transition| {
                M::resulting_status(status, transition).map(|result| (status, transition, result))
            })
        })
        .collect()
}

/// Checks the properties every transition table must have, over all pairs:
///
/// * validity and lookup agree
/// * statuses without transitions report terminal and reject everything
/// * repeated lookups give the same answer
/// * `transition` agrees with the lookup and names both values on failure
/// * the initial status is not terminal
/// * every value round-trips through its canonical name
pub fn assert_table_invariants<M: StatusMachine>() {
    for &status in M::Status::ALL {
        let available = M::available_transitions(status);
        assert_eq!(
            M::is_terminal(status),
            available.is_empty(),
            "{}: terminal flag disagrees for {status}",
            M::NAME
        );

        for &transition in M::Transition::ALL {
            let outcome = M::resulting_status(status, transition);
            assert_eq!(
                M::is_valid_transition(status, transition),
                outcome.is_some(),
                "{}: validity and lookup disagree for ({status}, {transition})",
                M::NAME
            );
            assert_eq!(outcome, M::resulting_status(status, transition));
            assert_eq!(available.contains(&transition), outcome.is_some());

            match M::transition(status, transition) {
                Ok(result) => assert_eq!(Some(result), outcome),
                Err(err) => {
                    assert!(outcome.is_none());
                    let message = err.to_string();
                    assert!(message.contains(transition.as_str()));
                    assert!(message.contains(status.as_str()));
                }
            }
        }
    }

    assert!(
        !M::is_terminal(M::initial_status()),
        "{}: initial status is terminal",
        M::NAME
    );

    for &status in M::Status::ALL {
        assert_eq!(status.as_str().parse::<M::Status>().ok(), Some(status));
        assert!(!status.label().is_empty());
    }
    for &transition in M::Transition::ALL {
        assert_eq!(
            transition.as_str().parse::<M::Transition>().ok(),
            Some(transition)
        );
        assert!(!transition.label().is_empty());
    }
}
