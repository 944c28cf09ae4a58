use super::*;

// =============================================================
// URL joining
// =============================================================

#[test]
fn join_normalizes_slashes() {
    assert_eq!(
        join("http://h/api/", "accounts/login/"),
        "http://h/api/accounts/login/"
    );
    assert_eq!(
        join("http://h/api", "/accounts/login/"),
        "http://h/api/accounts/login/"
    );
    assert_eq!(
        join("http://h/api", "accounts/login/"),
        "http://h/api/accounts/login/"
    );
}

// =============================================================
// Authorization resolution
// =============================================================

#[test]
fn authorization_uses_token_scheme() {
    assert_eq!(authorization(Some("abc123")), Some("Token abc123".to_owned()));
}

#[test]
fn authorization_absent_without_token() {
    assert_eq!(authorization(None), None);
}

#[test]
fn current_authorization_reads_slot_at_dispatch_time() {
    assert_eq!(current_authorization(), None);

    storage::set_token("abc123");
    assert_eq!(current_authorization(), Some("Token abc123".to_owned()));

    storage::clear_token();
    assert_eq!(current_authorization(), None);
}

// =============================================================
// Error taxonomy
// =============================================================

#[test]
fn unauthorized_classifies_401_class_only() {
    let unauth = ApiError::Status {
        code: 401,
        body: String::new(),
    };
    let forbidden = ApiError::Status {
        code: 403,
        body: String::new(),
    };
    let server = ApiError::Status {
        code: 500,
        body: String::new(),
    };
    assert!(unauth.is_unauthorized());
    assert!(forbidden.is_unauthorized());
    assert!(!server.is_unauthorized());
    assert!(!ApiError::Transport("down".to_owned()).is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}

#[test]
fn native_dispatch_is_unavailable() {
    let res = futures::executor::block_on(get_json::<serde_json::Value>("finlife/deposits/"));
    assert_eq!(res.unwrap_err(), ApiError::Unavailable);
}
