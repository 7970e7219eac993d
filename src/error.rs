//! Error types for the 6502 language server.

use thiserror::Error;
use tower_lsp::lsp_types::Range;

/// Result type for language server operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid instruction table: {0}")]
    InstructionTable(#[from] serde_json::Error),

    #[error("change notification carried no content changes")]
    EmptyChange,

    /// The client sent a ranged edit although the server only advertises full sync.
    #[error("unsupported sync mode: incremental edit at {}:{}-{}:{}", .range.start.line, .range.start.character, .range.end.line, .range.end.character)]
    UnsupportedSyncMode { range: Range },
}
