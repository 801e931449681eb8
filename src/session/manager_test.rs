use super::*;
use crate::session::store::MemoryStore;

fn sample_user() -> User {
    User {
        id: "42".to_owned(),
        email: "jane@acme.test".to_owned(),
        name: "Jane Roe".to_owned(),
        role: "Auditor".to_owned(),
        organization: "Acme Corporation".to_owned(),
    }
}

fn sample_profile() -> RegisterData {
    RegisterData {
        name: "Jane Roe".to_owned(),
        email: "jane@acme.test".to_owned(),
        organization: "Acme Corporation".to_owned(),
        password: "Str0ng!pass".to_owned(),
    }
}

#[test]
fn restore_of_valid_record_matches_stored_user() {
    let mut store = MemoryStore::default();
    establish(&mut store, "tok-1", &sample_user());

    let restored = restore(&mut store);
    assert_eq!(restored, RestoreOutcome::Session(sample_user()));
}

#[test]
fn restore_of_corrupt_user_json_reports_corrupt_and_clears_both_entries() {
    let mut store = MemoryStore::default();
    store.set(TOKEN_KEY, "tok-1");
    store.set(USER_KEY, "{not json");

    assert_eq!(restore(&mut store), RestoreOutcome::CorruptCleared);
    assert!(store.is_empty());
}

#[test]
fn restore_of_token_without_user_reports_corrupt_and_clears_both_entries() {
    let mut store = MemoryStore::default();
    store.set(TOKEN_KEY, "tok-1");

    assert_eq!(restore(&mut store), RestoreOutcome::CorruptCleared);
    assert!(store.is_empty());
}

#[test]
fn restore_of_user_without_token_reports_corrupt_and_clears_both_entries() {
    let mut store = MemoryStore::default();
    store.set(USER_KEY, r#"{"id":"1","email":"e","name":"n","role":"r","organization":"o"}"#);

    assert_eq!(restore(&mut store), RestoreOutcome::CorruptCleared);
    assert!(store.is_empty());
}

#[test]
fn restore_of_empty_store_is_absent_not_corrupt() {
    let mut store = MemoryStore::default();
    assert_eq!(restore(&mut store), RestoreOutcome::Absent);
    assert!(store.is_empty());
}

#[test]
fn clear_then_restore_is_absent() {
    let mut store = MemoryStore::default();
    establish(&mut store, "tok-1", &sample_user());

    clear(&mut store);
    clear(&mut store); // idempotent

    assert_eq!(restore(&mut store), RestoreOutcome::Absent);
    assert!(store.is_empty());
}

#[test]
fn restore_outcome_yields_a_user_only_for_a_session() {
    assert_eq!(
        RestoreOutcome::Session(sample_user()).into_user(),
        Some(sample_user())
    );
    assert_eq!(RestoreOutcome::Absent.into_user(), None);
    assert_eq!(RestoreOutcome::CorruptCleared.into_user(), None);
}

#[test]
fn resolve_login_passes_through_accepted_session() {
    let outcome = AuthOutcome::Accepted {
        token: "tok-9".to_owned(),
        user: sample_user(),
    };
    let (token, user) = resolve_login(outcome, "jane@acme.test").unwrap();
    assert_eq!(token, "tok-9");
    assert_eq!(user, sample_user());
}

#[test]
fn resolve_login_rejection_yields_no_session() {
    assert_eq!(resolve_login(AuthOutcome::Rejected, "jane@acme.test"), None);
}

#[test]
fn resolve_login_fallback_is_deterministic_and_keeps_email() {
    let first = resolve_login(AuthOutcome::Unreachable, "jane@acme.test").unwrap();
    let second = resolve_login(AuthOutcome::Unreachable, "jane@acme.test").unwrap();
    assert_eq!(first, second);

    let (token, user) = first;
    assert_eq!(token, "demo_token_123");
    assert_eq!(user.email, "jane@acme.test");
    assert_eq!(user.role, "Compliance Officer");
}

#[test]
fn resolve_register_fallback_uses_submitted_profile() {
    let (token, user) = resolve_register(AuthOutcome::Unreachable, &sample_profile()).unwrap();
    assert_eq!(token, "demo_token_456");
    assert_eq!(user.name, "Jane Roe");
    assert_eq!(user.email, "jane@acme.test");
    assert_eq!(user.organization, "Acme Corporation");
}

#[test]
fn resolve_register_rejection_yields_no_session() {
    assert_eq!(resolve_register(AuthOutcome::Rejected, &sample_profile()), None);
}
