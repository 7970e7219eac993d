//! 6502 assembly language server implementation.

use std::sync::Arc;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{LanguageServer, LspService};

mod document;
mod error;
mod instructions;
pub mod logging;
mod lsp;

pub use document::{sync, text, ContentChange, DocumentStore, LinePrefix};
pub use error::Error;
pub use instructions::InstructionTable;
pub use lsp::{
    completion_at_position, detect_context, format_document, hover_at_position,
    instruction_completions, server_capabilities, CompletionContext, HOVER_PLACEHOLDER,
    TRIGGER_CHARACTERS,
};

pub struct Backend {
    documents: DocumentStore,
    instructions: Arc<InstructionTable>,
}

impl Backend {
    pub(crate) fn new(instructions: Arc<InstructionTable>) -> Self {
        Self {
            documents: DocumentStore::new(),
            instructions,
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!(
            client = ?params.client_info.as_ref().map(|c| c.name.as_str()),
            "initialize"
        );

        Ok(InitializeResult {
            capabilities: lsp::server_capabilities(),
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("shutdown");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        tracing::debug!(uri = %document.uri, version = document.version, "open");
        self.documents.put(document.uri, document.text);
    }

    // tower-lsp polls handlers concurrently; the store is updated before any
    // await here, so a later completion sees the new text.
    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!(%uri, version = params.text_document.version, "change");

        match sync::full_text(params.content_changes) {
            Ok(text) => self.documents.put(uri, text),
            Err(err) => tracing::warn!(%uri, %err, "ignoring document change"),
        }
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let position = params.text_document_position_params.position;
        Ok(Some(lsp::hover_at_position(position)))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        Ok(lsp::completion_at_position(&self.documents, &self.instructions, uri, position))
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> Result<Option<Vec<TextEdit>>> {
        tracing::debug!(uri = %params.text_document.uri, "format");
        Ok(Some(lsp::format_document()))
    }
}

pub fn create_service(
    instructions: InstructionTable,
) -> (LspService<Backend>, tower_lsp::ClientSocket) {
    let instructions = Arc::new(instructions);
    LspService::new(move |_client| Backend::new(Arc::clone(&instructions)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_can_be_created() {
        let (_service, _socket) = create_service(InstructionTable::bundled().unwrap());
    }
}
