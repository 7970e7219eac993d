//! LSP protocol feature implementations.
//!
//! This module provides implementations for LSP features:
//! - Server capabilities for the `initialize` handshake
//! - Instruction completion driven by the line prefix
//! - Placeholder hover and no-op formatting

mod capabilities;
mod completion;
mod formatting;
mod hover;

pub use capabilities::{server_capabilities, TRIGGER_CHARACTERS};
pub use completion::{
    completion_at_position, detect_context, instruction_completions, CompletionContext,
};
pub use formatting::format_document;
pub use hover::{hover_at_position, HOVER_PLACEHOLDER};
