//! Durable key-value slot backed by `localStorage`.
//!
//! The session token (and the last logged-in username) must survive page
//! reloads, so they live in `window.localStorage`. Native and SSR builds
//! substitute a thread-local map behind the same functions, which keeps the
//! session logic exercisable by plain `#[test]`s and harmless during server
//! rendering.
//!
//! The slot is a single global cell: the session store is its only writer,
//! the request gateway reads it at every dispatch. All access is
//! single-threaded in the browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

const TOKEN_KEY: &str = "finboard_token";
const USERNAME_KEY: &str = "finboard_username";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static SLOTS: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Read a value from the durable slot.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SLOTS.with(|s| s.borrow().get(key).cloned())
    }
}

/// Write a value into the durable slot.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SLOTS.with(|s| {
            s.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

/// Remove a value from the durable slot.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SLOTS.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}

/// The persisted auth token, if any.
pub fn token() -> Option<String> {
    read(TOKEN_KEY)
}

pub fn set_token(token: &str) {
    write(TOKEN_KEY, token);
}

pub fn clear_token() {
    remove(TOKEN_KEY);
}

/// The username persisted alongside the token.
pub fn username() -> Option<String> {
    read(USERNAME_KEY)
}

pub fn set_username(name: &str) {
    write(USERNAME_KEY, name);
}

pub fn clear_username() {
    remove(USERNAME_KEY);
}
