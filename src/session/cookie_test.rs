use super::*;

#[test]
fn set_cookie_string_carries_transport_attributes() {
    let s = set_cookie_string("fairsight_token", "tok-123", 604_800);
    assert_eq!(
        s,
        "fairsight_token=tok-123; Max-Age=604800; Path=/; Secure; SameSite=Strict"
    );
}

#[test]
fn clear_cookie_string_zeroes_max_age() {
    let s = clear_cookie_string("fairsight_token");
    assert!(s.starts_with("fairsight_token=; Max-Age=0;"));
}

#[test]
fn json_value_survives_encode_decode() {
    let json = r#"{"id":"1","name":"Jane Roe; Esq.","role":"a=b"}"#;
    let encoded = encode_value(json);
    assert!(!encoded.contains(';'));
    assert!(!encoded.contains('='));
    assert_eq!(decode_value(&encoded).as_deref(), Some(json));
}

#[test]
fn find_cookie_picks_the_named_pair() {
    let cookies = "other=x; fairsight_token=tok%2D1; fairsight_user=%7B%7D";
    assert_eq!(find_cookie(cookies, "fairsight_token").as_deref(), Some("tok-1"));
    assert_eq!(find_cookie(cookies, "fairsight_user").as_deref(), Some("{}"));
    assert_eq!(find_cookie(cookies, "missing"), None);
}

#[test]
fn find_cookie_rejects_malformed_escapes() {
    assert_eq!(find_cookie("fairsight_user=%G1", "fairsight_user"), None);
    assert_eq!(find_cookie("fairsight_user=%2", "fairsight_user"), None);
}
