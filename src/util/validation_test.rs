use super::*;

fn profile(password: &str) -> RegisterData {
    RegisterData {
        name: "Jane Roe".to_owned(),
        email: "jane@acme.test".to_owned(),
        organization: "Acme Corporation".to_owned(),
        password: password.to_owned(),
    }
}

#[test]
fn policy_accepts_a_conforming_password() {
    assert!(check_password("Str0ng!pass").all_met());
}

#[test]
fn policy_flags_each_missing_rule() {
    assert!(!check_password("Sh0r!t").min_length);
    assert!(!check_password("str0ng!pass").has_upper);
    assert!(!check_password("STR0NG!PASS").has_lower);
    assert!(!check_password("Strong!pass").has_digit);
    assert!(!check_password("Str0ngpass").has_symbol);
}

#[test]
fn registration_rejects_password_confirmation_mismatch() {
    assert_eq!(
        validate_registration(&profile("Str0ng!pass"), "Str0ng!pas"),
        Err("Passwords do not match.")
    );
}

#[test]
fn registration_rejects_weak_password() {
    assert_eq!(
        validate_registration(&profile("weakpass"), "weakpass"),
        Err("Password does not meet security requirements.")
    );
}

#[test]
fn registration_rejects_blank_fields() {
    let mut data = profile("Str0ng!pass");
    data.organization = "   ".to_owned();
    assert_eq!(
        validate_registration(&data, "Str0ng!pass"),
        Err("All fields are required.")
    );
}

#[test]
fn registration_accepts_a_valid_submission() {
    assert_eq!(validate_registration(&profile("Str0ng!pass"), "Str0ng!pass"), Ok(()));
}

#[test]
fn login_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login("  jane@acme.test  ", "pw"),
        Ok(("jane@acme.test".to_owned(), "pw".to_owned()))
    );
    assert_eq!(validate_login("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(
        validate_login("jane@acme.test", ""),
        Err("Enter both email and password.")
    );
}
