//! Application layer: session state and intent dispatch
//!
//! This layer owns the (tree, clipboard) pair and is where rejected
//! intents are reported; the domain layer below stays total and pure.

pub mod error;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use session::FormSession;
