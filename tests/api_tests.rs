// Host-side test for the join-outcome policy: success and failure render the
// same confirmation text. The fetch itself only runs in a browser.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod api {
    include!("../src/api.rs");
}

use api::JoinOutcome;
use constants::CONFIRMATION_TEXT;

#[test]
fn accepted_and_failed_share_the_confirmation_text() {
    let accepted = JoinOutcome::Accepted;
    let failed = JoinOutcome::Failed("connection refused".into());
    assert_eq!(accepted.confirmation_text(), failed.confirmation_text());
    assert_eq!(accepted.confirmation_text(), CONFIRMATION_TEXT);
}

#[test]
fn failure_reason_is_retained_internally() {
    let failed = JoinOutcome::Failed("join endpoint returned status 503".into());
    match failed {
        JoinOutcome::Failed(reason) => assert!(reason.contains("503")),
        JoinOutcome::Accepted => panic!("expected failure"),
    }
}
