//! Networking: request gateway, endpoint functions, and wire types.
//!
//! DESIGN
//! ======
//! `gateway` is the single dispatch point (base address + auth header),
//! `api` holds one async function per backend endpoint, and `types` mirrors
//! the backend's JSON shapes. Only the gateway touches `gloo-net`, so the
//! rest of the crate compiles natively for tests and SSR.

pub mod api;
pub mod gateway;
pub mod types;
