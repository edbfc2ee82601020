//! Event-file parsing

pub mod parser;

// Re-exports
pub use parser::{create_event_list, ParseError};
