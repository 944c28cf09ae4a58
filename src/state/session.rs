//! Session store: the single source of truth for "who is logged in."
//!
//! DESIGN
//! ======
//! The session lives in one `RwSignal<SessionState>` created by `App` and
//! provided via context; operations here are free async functions over that
//! signal, so views stay thin and the transition logic stays in pure
//! helpers that native tests can drive directly.
//!
//! Lifecycle: `LoggedOut` / `LoggingIn` / `LoggedIn`. A restored session
//! with a persisted token starts optimistically `LoggedIn`; `initialize`
//! then confirms it against the backend. `LoggingIn` exists only for the
//! duration of `login`/`signup`. Any authenticated call that comes back
//! unauthorized escalates to a full logout, never a retry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api;
use crate::net::gateway::ApiError;
use crate::net::types::{
    AvailabilityResponse, Credentials, RegistrationRequest, SignupForm, UserProfile,
};
use crate::util::storage;

/// Client-side record of the current authentication status.
///
/// The token is the only persisted field; `user`, `loading`, and
/// `last_error` are rebuilt in memory on every load.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub loading: bool,
    /// User-facing message from the last failed login/signup.
    pub last_error: Option<String>,
}

impl SessionState {
    /// Rebuild the session from the durable slot. A persisted token makes
    /// the restored session optimistically logged in; the profile is only
    /// cached in memory and is re-fetched by [`initialize`].
    pub fn restore() -> Self {
        Self {
            token: storage::token(),
            ..Self::default()
        }
    }

    /// A session is logged in exactly when it holds a token.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Current position in the session lifecycle.
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::LoggingIn
        } else if self.token.is_some() {
            SessionPhase::LoggedIn
        } else {
            SessionPhase::LoggedOut
        }
    }

    /// Name to greet the user with; falls back to the persisted username
    /// while the profile fetch is still in flight.
    pub fn display_name(&self) -> Option<String> {
        match &self.user {
            Some(user) => Some(user.display_name().to_owned()),
            None => storage::username(),
        }
    }
}

/// Session lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggingIn,
    LoggedIn,
}

/// Result of a username/nickname availability probe.
///
/// `Unknown` means the check itself failed; callers must not read it as
/// either taken or free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Available,
    Taken,
    Unknown,
}

impl Availability {
    fn from_response(res: Result<AvailabilityResponse, ApiError>) -> Self {
        match res {
            Ok(AvailabilityResponse { available: true }) => Self::Available,
            Ok(AvailabilityResponse { available: false }) => Self::Taken,
            Err(_) => Self::Unknown,
        }
    }
}

// =============================================================
// Pure transitions
// =============================================================

/// Install a freshly issued token in memory and in the durable slot.
fn complete_login(state: &mut SessionState, username: &str, token: String) {
    storage::set_token(&token);
    storage::set_username(username);
    state.token = Some(token);
    state.last_error = None;
}

/// Drop all session data from memory and the durable slot. Idempotent.
fn clear_session(state: &mut SessionState) {
    storage::clear_token();
    storage::clear_username();
    state.token = None;
    state.user = None;
    state.last_error = None;
}

/// React to a failed authenticated call: an unauthorized answer ends the
/// session (idempotently), anything else leaves it alone. Returns whether
/// the session was cleared.
fn escalate_unauthorized(state: &mut SessionState, err: &ApiError) -> bool {
    if err.is_unauthorized() {
        clear_session(state);
        true
    } else {
        false
    }
}

/// Escalation shared by every store that makes authenticated calls: an
/// unauthorized answer ends the session, other errors pass through.
pub(crate) fn note_auth_failure(session: RwSignal<SessionState>, err: &ApiError) {
    if err.is_unauthorized() {
        session.update(clear_session);
    }
}

/// Map the signup form to the registration wire shape. The form collects
/// the password once; the backend expects it twice.
fn registration_request(form: &SignupForm) -> RegistrationRequest {
    RegistrationRequest {
        username: form.username.clone(),
        password1: form.password.clone(),
        password2: form.password.clone(),
        email: form.email.clone(),
        nickname: form.nickname.clone(),
        name: form.name.clone(),
    }
}

/// User-facing message for a rejected login.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { code, .. } if *code < 500 => {
            "Check your username and password.".to_owned()
        }
        _ => "The server could not be reached. Please try again.".to_owned(),
    }
}

/// User-facing message for a rejected signup. Field validation details from
/// the backend are passed through.
fn signup_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { code, body } if *code < 500 && !body.is_empty() => {
            format!("Signup failed: {body}")
        }
        ApiError::Status { .. } => "Signup failed. Please check your details.".to_owned(),
        _ => "The server could not be reached. Please try again.".to_owned(),
    }
}

// =============================================================
// Operations
// =============================================================

/// Settle a restored session at app start: confirm the persisted token by
/// fetching the profile. An unauthorized answer logs out; a transport
/// failure keeps the optimistic session (the next authenticated call will
/// settle it).
pub async fn initialize(session: RwSignal<SessionState>) {
    if session.get_untracked().token.is_none() {
        return;
    }
    if let Err(err) = refresh_profile(session).await {
        if !err.is_unauthorized() {
            leptos::logging::warn!("session restore: profile fetch failed: {err}");
        }
    }
}

/// Log in with username and password.
///
/// On success the token is in memory and in the durable slot, the profile
/// is cached, and the `Ok` return is the caller's signal to navigate home.
/// On failure the logged-out state is unchanged and `last_error` carries a
/// user-facing message.
///
/// # Errors
///
/// The underlying [`ApiError`], after session state has been updated.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: Credentials,
) -> Result<(), ApiError> {
    session.update(|s| {
        s.loading = true;
        s.last_error = None;
    });
    match api::login(&credentials).await {
        Ok(token) => finish_authentication(session, &credentials.username, token.key).await,
        Err(err) => {
            session.update(|s| {
                s.loading = false;
                s.last_error = Some(login_error_message(&err));
            });
            Err(err)
        }
    }
}

/// Register a new account. A successful registration returns a token, so
/// this proceeds exactly as [`login`] from there.
///
/// # Errors
///
/// The underlying [`ApiError`], after session state has been updated.
pub async fn signup(session: RwSignal<SessionState>, form: SignupForm) -> Result<(), ApiError> {
    session.update(|s| {
        s.loading = true;
        s.last_error = None;
    });
    let request = registration_request(&form);
    match api::register(&request).await {
        Ok(token) => finish_authentication(session, &form.username, token.key).await,
        Err(err) => {
            session.update(|s| {
                s.loading = false;
                s.last_error = Some(signup_error_message(&err));
            });
            Err(err)
        }
    }
}

/// Shared tail of login and signup: persist the token, fetch the profile,
/// leave the `LoggingIn` phase.
async fn finish_authentication(
    session: RwSignal<SessionState>,
    username: &str,
    key: String,
) -> Result<(), ApiError> {
    session.update(|s| complete_login(s, username, key));
    let profile = refresh_profile(session).await;
    session.update(|s| s.loading = false);
    match profile {
        // The token was rejected straight away; refresh_profile has
        // already cleared the session.
        Err(err) if err.is_unauthorized() => {
            session.update(|s| s.last_error = Some(login_error_message(&err)));
            Err(err)
        }
        // A flaky profile fetch does not block navigation; the cached
        // profile stays empty until the next refresh.
        Err(err) => {
            leptos::logging::warn!("profile fetch after authentication failed: {err}");
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

/// Log out. The backend is notified best-effort (failure ignored), then
/// token, profile, and durable entries are cleared unconditionally. Never
/// fails from the caller's perspective.
pub async fn logout(session: RwSignal<SessionState>) {
    // Notify first: the request still needs the token in the slot.
    if let Err(err) = api::logout().await {
        leptos::logging::warn!("logout notification failed: {err}");
    }
    session.update(clear_session);
}

/// Fetch and cache the user profile. No-op without a token.
///
/// # Errors
///
/// Re-raises the [`ApiError`]; an unauthorized answer has already cleared
/// the session by the time the error reaches the caller.
pub async fn refresh_profile(session: RwSignal<SessionState>) -> Result<(), ApiError> {
    if session.get_untracked().token.is_none() {
        return Ok(());
    }
    match api::current_user().await {
        Ok(profile) => {
            session.update(|s| s.user = Some(profile));
            Ok(())
        }
        Err(err) => {
            session.update(|s| {
                escalate_unauthorized(s, &err);
            });
            Err(err)
        }
    }
}

/// Username availability probe. Never raises.
pub async fn check_username(username: &str) -> Availability {
    Availability::from_response(api::check_username(username).await)
}

/// Nickname availability probe. Never raises.
pub async fn check_nickname(nickname: &str) -> Availability {
    Availability::from_response(api::check_nickname(nickname).await)
}

/// Re-confirm the current user's identity with a password, for sensitive
/// operations. All failures collapse to `false`.
pub async fn verify_password(session: RwSignal<SessionState>, candidate: &str) -> bool {
    if session.get_untracked().token.is_none() {
        return false;
    }
    match api::verify_password(candidate).await {
        Ok(res) => res.success,
        Err(err) => {
            leptos::logging::warn!("password verification failed: {err}");
            false
        }
    }
}
