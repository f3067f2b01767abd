//! Tool model and key-driven tool selection.

pub mod events;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, tool_for_key};
pub use tool::{ParseToolError, Tool};
