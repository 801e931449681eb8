use super::*;

#[test]
fn login_payload_carries_both_credentials() {
    let payload = login_payload("jane@acme.test", "hunter2!A");
    assert_eq!(payload["email"], "jane@acme.test");
    assert_eq!(payload["password"], "hunter2!A");
}

#[test]
fn native_login_reports_unreachable() {
    let outcome = block_on_immediate(login("jane@acme.test", "pw"));
    assert_eq!(outcome, AuthOutcome::Unreachable);
}

#[test]
fn native_register_reports_unreachable() {
    let profile = RegisterData {
        name: "Jane Roe".to_owned(),
        email: "jane@acme.test".to_owned(),
        organization: "Acme Corporation".to_owned(),
        password: "Str0ng!pass".to_owned(),
    };
    let outcome = block_on_immediate(register(&profile));
    assert_eq!(outcome, AuthOutcome::Unreachable);
}

/// The native stubs never await anything, so a single poll drives them to
/// completion without pulling in an executor.
fn block_on_immediate<F: Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut cx = Context::from_waker(Waker::noop());
    match pin!(fut).poll(&mut cx) {
        Poll::Ready(value) => value,
        Poll::Pending => unreachable!("stub futures resolve immediately"),
    }
}
