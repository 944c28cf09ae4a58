use super::*;

#[test]
fn slot_roundtrip() {
    write("k", "v");
    assert_eq!(read("k"), Some("v".to_owned()));

    write("k", "v2");
    assert_eq!(read("k"), Some("v2".to_owned()));

    remove("k");
    assert_eq!(read("k"), None);
}

#[test]
fn remove_missing_key_is_a_no_op() {
    remove("never-written");
    assert_eq!(read("never-written"), None);
}

#[test]
fn token_slot_roundtrip() {
    assert_eq!(token(), None);

    set_token("abc123");
    assert_eq!(token(), Some("abc123".to_owned()));

    clear_token();
    assert_eq!(token(), None);
}

#[test]
fn username_slot_is_independent_of_token() {
    set_username("ant");
    assert_eq!(token(), None);
    assert_eq!(username(), Some("ant".to_owned()));

    clear_username();
    assert_eq!(username(), None);
}
