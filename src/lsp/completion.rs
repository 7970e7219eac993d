//! Instruction completion for 6502 assembly.
//!
//! No parsing happens here: the text before the cursor is classified with a
//! few character checks, and instruction positions get the whole mnemonic
//! table. Filtering and sorting are left to the client.

use tower_lsp::lsp_types::*;

use crate::document::{DocumentStore, LinePrefix};
use crate::instructions::InstructionTable;

/// Starts a comment that runs to the end of the line.
const COMMENT_MARKER: char = ';';

/// Terminates a label definition.
const LABEL_MARKER: char = ':';

/// What the text before the cursor looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionContext {
    /// Cursor is inside a comment.
    Comment,
    /// Cursor is where an instruction goes: after indentation or a label.
    Instruction,
    /// Cursor is at the start of a label definition.
    LabelDefinition,
}

/// Classify the line prefix ending at the cursor.
///
/// The comment check runs first, so `START: ; note` is a comment.
pub fn detect_context(prefix: &str) -> CompletionContext {
    if prefix.contains(COMMENT_MARKER) {
        CompletionContext::Comment
    } else if prefix.starts_with([' ', '\t']) || prefix.contains(LABEL_MARKER) {
        CompletionContext::Instruction
    } else {
        CompletionContext::LabelDefinition
    }
}

/// Completion items for `prefix`, in instruction table order.
pub fn instruction_completions(prefix: &str, table: &InstructionTable) -> Vec<CompletionItem> {
    match detect_context(prefix) {
        CompletionContext::Instruction => table
            .iter()
            .map(|mnemonic| CompletionItem {
                label: mnemonic.to_string(),
                kind: Some(CompletionItemKind::FIELD),
                ..Default::default()
            })
            .collect(),
        CompletionContext::Comment | CompletionContext::LabelDefinition => Vec::new(),
    }
}

/// Compute completions at a position in a stored document.
///
/// Unknown documents and positions past the last line produce no completions.
pub fn completion_at_position(
    documents: &DocumentStore,
    table: &InstructionTable,
    uri: &Url,
    position: Position,
) -> Option<CompletionResponse> {
    let prefix = match documents.line_prefix(uri, position) {
        LinePrefix::Found(prefix) => prefix,
        LinePrefix::UnknownDocument => {
            tracing::debug!(%uri, "completion requested for unopened document");
            return None;
        }
        LinePrefix::OutOfRange { line, line_count } => {
            tracing::debug!(%uri, line, line_count, "completion requested past end of document");
            return None;
        }
    };

    let items = instruction_completions(&prefix, table);
    tracing::debug!(
        %uri,
        ?position,
        context = ?detect_context(&prefix),
        items = items.len(),
        "completion"
    );
    Some(CompletionResponse::Array(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> InstructionTable {
        InstructionTable::new(vec!["LDA".into(), "STA".into(), "JMP".into()])
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn indented_prefix_is_instruction_position() {
        assert_eq!(detect_context("  "), CompletionContext::Instruction);
        assert_eq!(detect_context("\tLD"), CompletionContext::Instruction);
        assert_eq!(detect_context(" "), CompletionContext::Instruction);
    }

    #[test]
    fn label_prefix_is_instruction_position() {
        assert_eq!(detect_context("START:"), CompletionContext::Instruction);
        assert_eq!(detect_context("loop: ST"), CompletionContext::Instruction);
    }

    #[test]
    fn comment_wins_over_label_and_indent() {
        assert_eq!(detect_context("; comment"), CompletionContext::Comment);
        assert_eq!(detect_context("START: ; go"), CompletionContext::Comment);
        assert_eq!(detect_context("  LDA #1 ;"), CompletionContext::Comment);
    }

    #[test]
    fn bare_prefix_is_label_definition() {
        assert_eq!(detect_context(""), CompletionContext::LabelDefinition);
        assert_eq!(detect_context("START"), CompletionContext::LabelDefinition);
        assert_eq!(detect_context(".org $0800"), CompletionContext::LabelDefinition);
    }

    #[test]
    fn instruction_items_follow_table_order() {
        let items = instruction_completions("  ", &table());
        assert_eq!(labels(&items), ["LDA", "STA", "JMP"]);
        assert!(items
            .iter()
            .all(|i| i.kind == Some(CompletionItemKind::FIELD)));
    }

    #[test]
    fn no_items_outside_instruction_position() {
        assert!(instruction_completions("; LDA", &table()).is_empty());
        assert!(instruction_completions("START", &table()).is_empty());
    }

    #[test]
    fn unresolvable_positions_give_none() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///main.s").unwrap();
        assert!(completion_at_position(&store, &table(), &uri, Position::new(0, 0)).is_none());

        store.put(uri.clone(), "  NOP".to_string());
        assert!(completion_at_position(&store, &table(), &uri, Position::new(1, 0)).is_none());
    }

    #[test]
    fn resolved_position_gives_array() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///main.s").unwrap();
        store.put(uri.clone(), "START\n".to_string());

        let Some(CompletionResponse::Array(items)) =
            completion_at_position(&store, &table(), &uri, Position::new(0, 5))
        else {
            panic!("expected array response");
        };
        assert!(items.is_empty());
    }
}
