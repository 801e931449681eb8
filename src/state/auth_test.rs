use super::*;

#[test]
fn restoring_state_is_loading_and_unauthenticated() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn state_with_user_is_authenticated() {
    let state = AuthState {
        user: Some(User {
            id: "1".to_owned(),
            email: "a@b.test".to_owned(),
            name: "A".to_owned(),
            role: "Analyst".to_owned(),
            organization: "B".to_owned(),
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
