use super::*;

#[test]
fn user_decodes_from_persisted_record_shape() {
    let raw = r#"{"id":"1","email":"jane@acme.test","name":"Jane Roe","role":"Compliance Officer","organization":"Acme Corporation"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "jane@acme.test");
    assert_eq!(user.organization, "Acme Corporation");
}

#[test]
fn user_decode_rejects_missing_fields() {
    let raw = r#"{"id":"1","email":"jane@acme.test"}"#;
    assert!(serde_json::from_str::<User>(raw).is_err());
}

#[test]
fn auth_response_decodes_nested_user() {
    let raw = r#"{"token":"t-1","user":{"id":"7","email":"a@b.test","name":"A","role":"Analyst","organization":"B"}}"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "t-1");
    assert_eq!(resp.user.role, "Analyst");
}
