//! Validation of `textDocument/didChange` payloads.
//!
//! The server advertises full-document sync, so each change event is expected
//! to carry the entire new text with no range.

use tower_lsp::lsp_types::{Range, TextDocumentContentChangeEvent};

use crate::error::{Error, Result};

/// A single content change, classified by sync mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentChange {
    /// The complete new document text.
    Full(String),
    /// A ranged edit, only sent by clients using incremental sync.
    Incremental { range: Range, text: String },
}

impl From<TextDocumentContentChangeEvent> for ContentChange {
    fn from(event: TextDocumentContentChangeEvent) -> Self {
        match event.range {
            Some(range) => ContentChange::Incremental {
                range,
                text: event.text,
            },
            None => ContentChange::Full(event.text),
        }
    }
}

impl ContentChange {
    /// Extract the full text, rejecting incremental edits.
    pub fn into_full_text(self) -> Result<String> {
        match self {
            ContentChange::Full(text) => Ok(text),
            ContentChange::Incremental { range, .. } => Err(Error::UnsupportedSyncMode { range }),
        }
    }
}

/// Take the replacement text from the first change of a notification.
///
/// Entries after the first are ignored.
pub fn full_text(changes: Vec<TextDocumentContentChangeEvent>) -> Result<String> {
    let first = changes.into_iter().next().ok_or(Error::EmptyChange)?;
    ContentChange::from(first).into_full_text()
}
