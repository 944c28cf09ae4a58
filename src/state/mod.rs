//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `finance`, `posts`) so individual
//! components can depend on small focused models. Each store is a plain
//! struct held in an `RwSignal` provided via context, with free async
//! functions for the operations that talk to the backend.

pub mod finance;
pub mod posts;
pub mod session;
