//! User directory adapters.

mod document;
mod in_memory;

pub use document::DocumentUserDirectory;
pub use in_memory::InMemoryUserDirectory;
