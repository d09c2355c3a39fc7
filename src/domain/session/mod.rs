//! Session state: who is signed in and which language they read.
//!
//! The state is a plain value. Serialising access to it, and deciding when it
//! changes, belongs to the application-level `SessionManager`.

mod state;
mod token;

pub use state::SessionState;
pub use token::SessionToken;
