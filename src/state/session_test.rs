use super::*;
use futures::executor::block_on;
use leptos::prelude::Get;

fn logged_in(token: &str) -> SessionState {
    SessionState {
        token: Some(token.to_owned()),
        user: Some(UserProfile {
            username: "ant".to_owned(),
            ..UserProfile::default()
        }),
        ..SessionState::default()
    }
}

// =============================================================
// State machine
// =============================================================

#[test]
fn logged_in_iff_token_present() {
    let mut state = SessionState::default();
    assert!(!state.is_logged_in());

    state.token = Some("tok1".to_owned());
    assert!(state.is_logged_in());

    state.token = None;
    assert!(!state.is_logged_in());
}

#[test]
fn phase_follows_token_and_loading() {
    let mut state = SessionState::default();
    assert_eq!(state.phase(), SessionPhase::LoggedOut);

    state.loading = true;
    assert_eq!(state.phase(), SessionPhase::LoggingIn);

    state.loading = false;
    state.token = Some("tok1".to_owned());
    assert_eq!(state.phase(), SessionPhase::LoggedIn);
}

#[test]
fn restore_with_persisted_token_is_optimistically_logged_in() {
    storage::set_token("abc123");

    let state = SessionState::restore();
    assert_eq!(state.token.as_deref(), Some("abc123"));
    assert!(state.is_logged_in());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn restore_without_token_is_logged_out() {
    let state = SessionState::restore();
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
}

// =============================================================
// Pure transitions
// =============================================================

#[test]
fn complete_login_persists_token_to_slot() {
    let mut state = SessionState::default();
    complete_login(&mut state, "ant", "tok1".to_owned());

    assert_eq!(state.token.as_deref(), Some("tok1"));
    assert_eq!(storage::token().as_deref(), Some("tok1"));
    assert_eq!(storage::username().as_deref(), Some("ant"));
}

#[test]
fn clear_session_empties_memory_slot_and_header() {
    let mut state = logged_in("tok1");
    storage::set_token("tok1");
    storage::set_username("ant");

    clear_session(&mut state);

    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert_eq!(storage::token(), None);
    assert_eq!(storage::username(), None);
    assert_eq!(crate::net::gateway::current_authorization(), None);
}

#[test]
fn clear_session_is_idempotent() {
    let mut state = SessionState::default();
    clear_session(&mut state);
    clear_session(&mut state);
    assert!(!state.is_logged_in());
}

#[test]
fn unauthorized_escalates_to_logout_exactly_once() {
    let unauthorized = ApiError::Status {
        code: 401,
        body: String::new(),
    };

    let mut state = logged_in("abc123");
    storage::set_token("abc123");

    assert!(escalate_unauthorized(&mut state, &unauthorized));
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert_eq!(storage::token(), None);

    // A second unauthorized answer while already logged out is harmless.
    assert!(escalate_unauthorized(&mut state, &unauthorized));
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
}

#[test]
fn non_auth_errors_do_not_end_the_session() {
    let mut state = logged_in("abc123");
    let server_error = ApiError::Status {
        code: 500,
        body: String::new(),
    };

    assert!(!escalate_unauthorized(&mut state, &server_error));
    assert!(!escalate_unauthorized(
        &mut state,
        &ApiError::Transport("down".to_owned())
    ));
    assert!(state.is_logged_in());
    assert!(state.user.is_some());
}

#[test]
fn registration_request_duplicates_the_password() {
    let form = SignupForm {
        username: "ant".to_owned(),
        password: "s3cret".to_owned(),
        email: "ant@example.com".to_owned(),
        nickname: "Queen".to_owned(),
        name: None,
    };
    let req = registration_request(&form);
    assert_eq!(req.password1, "s3cret");
    assert_eq!(req.password2, "s3cret");
    assert_eq!(req.username, "ant");
}

#[test]
fn availability_degrades_to_unknown_on_failure() {
    assert_eq!(
        Availability::from_response(Ok(AvailabilityResponse { available: true })),
        Availability::Available
    );
    assert_eq!(
        Availability::from_response(Ok(AvailabilityResponse { available: false })),
        Availability::Taken
    );
    assert_eq!(
        Availability::from_response(Err(ApiError::Transport("down".to_owned()))),
        Availability::Unknown
    );
}

#[test]
fn error_messages_distinguish_rejection_from_outage() {
    let rejected = ApiError::Status {
        code: 400,
        body: "{\"non_field_errors\":[\"bad\"]}".to_owned(),
    };
    assert_eq!(login_error_message(&rejected), "Check your username and password.");
    assert!(signup_error_message(&rejected).starts_with("Signup failed:"));

    let outage = ApiError::Transport("down".to_owned());
    assert!(login_error_message(&outage).contains("could not be reached"));
    assert!(signup_error_message(&outage).contains("could not be reached"));
}

// =============================================================
// Operations (native builds dispatch to the Unavailable stub, which
// exercises the failure paths end to end)
// =============================================================

#[test]
fn failed_login_leaves_logged_out_state_unchanged() {
    let session = RwSignal::new(SessionState::default());

    let result = block_on(login(
        session,
        Credentials {
            username: "a".to_owned(),
            password: "b".to_owned(),
        },
    ));

    assert!(result.is_err());
    let state = session.get();
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert!(state.last_error.is_some());
    assert_eq!(storage::token(), None);
}

#[test]
fn failed_signup_reports_and_stays_logged_out() {
    let session = RwSignal::new(SessionState::default());

    let result = block_on(signup(session, SignupForm::default()));

    assert!(result.is_err());
    let state = session.get();
    assert!(!state.is_logged_in());
    assert!(!state.loading);
    assert!(state.last_error.is_some());
}

#[test]
fn logout_never_fails_even_when_notification_does() {
    storage::set_token("tok1");
    storage::set_username("ant");
    let session = RwSignal::new(SessionState::restore());

    block_on(logout(session));

    let state = session.get();
    assert_eq!(state.phase(), SessionPhase::LoggedOut);
    assert!(state.user.is_none());
    assert_eq!(storage::token(), None);
    assert_eq!(crate::net::gateway::current_authorization(), None);
}

#[test]
fn initialize_without_token_is_a_no_op() {
    let session = RwSignal::new(SessionState::default());
    block_on(initialize(session));
    assert_eq!(session.get().phase(), SessionPhase::LoggedOut);
}

#[test]
fn initialize_keeps_optimistic_session_on_transport_failure() {
    storage::set_token("abc123");
    let session = RwSignal::new(SessionState::restore());

    // The native stub fails as a transport-class error, not unauthorized.
    block_on(initialize(session));

    assert_eq!(session.get().phase(), SessionPhase::LoggedIn);
    assert_eq!(storage::token().as_deref(), Some("abc123"));
}

#[test]
fn refresh_profile_without_token_is_a_no_op() {
    let session = RwSignal::new(SessionState::default());
    assert!(block_on(refresh_profile(session)).is_ok());
    assert!(session.get().user.is_none());
}

#[test]
fn availability_probes_never_raise() {
    assert_eq!(block_on(check_username("ant")), Availability::Unknown);
    assert_eq!(block_on(check_nickname("Queen")), Availability::Unknown);
}

#[test]
fn verify_password_collapses_failures_to_false() {
    let session = RwSignal::new(SessionState::default());
    assert!(!block_on(verify_password(session, "pw")));

    storage::set_token("tok1");
    let session = RwSignal::new(SessionState::restore());
    assert!(!block_on(verify_password(session, "pw")));
}
