//! Storage for open documents.

use std::sync::Arc;

use dashmap::DashMap;
use tower_lsp::lsp_types::{Position, Url};

use super::text;

/// Outcome of resolving a cursor position to the text before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinePrefix {
    /// The line text from column 0 up to the cursor.
    Found(String),
    /// No document has been opened under this URI.
    UnknownDocument,
    /// The requested line does not exist in the stored text.
    OutOfRange { line: u32, line_count: usize },
}

/// Thread-safe storage for open documents.
///
/// Every entry holds the complete current text. Entries are never removed.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Arc<str>>,
}

impl DocumentStore {
    /// Create a new empty document store.
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Create or overwrite the text stored for `uri`.
    pub fn put(&self, uri: Url, text: String) {
        self.documents.insert(uri, Arc::from(text));
    }

    /// Get a document's text.
    pub fn get(&self, uri: &Url) -> Option<Arc<str>> {
        self.documents.get(uri).map(|r| Arc::clone(&r))
    }

    /// Resolve `position` in `uri` to the line text before the cursor.
    pub fn line_prefix(&self, uri: &Url, position: Position) -> LinePrefix {
        let Some(source) = self.get(uri) else {
            return LinePrefix::UnknownDocument;
        };

        match text::line_at(&source, position.line) {
            Some(line) => {
                LinePrefix::Found(text::truncate_to_character(line, position.character).to_string())
            }
            None => LinePrefix::OutOfRange {
                line: position.line,
                line_count: text::line_count(&source),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
