use super::*;

#[test]
fn parse_flag_only_accepts_true() {
    assert!(parse_flag("true"));
    assert!(!parse_flag("false"));
    assert!(!parse_flag("TRUE"));
    assert!(!parse_flag(""));
}

#[test]
fn native_read_defaults_to_expanded() {
    assert!(!read_sidebar_collapsed());
}
