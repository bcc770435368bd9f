use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::core::Diagnostic as LintDiagnostic;
use crate::lsp::backend::Backend;
use crate::lsp::document::{cue_outline, DocumentState};

/// Trait for handling document symbols
#[tower_lsp::async_trait]
pub trait HandleDocumentSymbol {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>>;
}

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn update_document(&self, uri: Url, content: String);
    async fn close_document(&self, uri: Url);
    async fn publish_diagnostics(&self, uri: Url);
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Re-lint and store the document, then publish its diagnostics
    async fn update_document(&self, uri: Url, content: String) {
        if !self.should_lint(&uri) {
            log::debug!("Ignoring {}", uri);
            return;
        }

        let doc_state = DocumentState::new(content);

        let mut docs = self.documents.lock().await;
        docs.insert(uri.clone(), doc_state);
        drop(docs); // Release the lock before calling publish_diagnostics

        self.publish_diagnostics(uri).await;
    }

    async fn close_document(&self, uri: Url) {
        let removed = self.documents.lock().await.remove(&uri);
        if removed.is_some() {
            self.client.publish_diagnostics(uri, Vec::new(), None).await;
        }
    }

    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let diagnostics: Vec<_> = doc_state
            .report
            .iter()
            .map(|diagnostic| create_lsp_diagnostic(doc_state, diagnostic))
            .collect();
        drop(docs);

        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }
}

/// Convert a lint diagnostic into an LSP diagnostic spanning its line
pub fn create_lsp_diagnostic(
    doc_state: &DocumentState,
    diagnostic: &LintDiagnostic,
) -> tower_lsp::lsp_types::Diagnostic {
    let line_idx = diagnostic.line.saturating_sub(1);
    let line = line_idx as u32;

    tower_lsp::lsp_types::Diagnostic::new(
        Range::new(
            Position::new(line, 0),
            Position::new(line, doc_state.line_len(line_idx)),
        ),
        Some(DiagnosticSeverity::ERROR),
        Some(NumberOrString::String(diagnostic.kind.name().to_string())),
        Some("srt-lint".to_string()),
        diagnostic.message(),
        None,
        None,
    )
}

#[tower_lsp::async_trait]
impl HandleDocumentSymbol for Backend {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        Ok(Some(DocumentSymbolResponse::Nested(cue_symbols(doc_state))))
    }
}

/// One symbol per cue, named after its index
pub fn cue_symbols(doc_state: &DocumentState) -> Vec<DocumentSymbol> {
    cue_outline(&doc_state.content)
        .into_iter()
        .map(|cue| {
            let start = cue.start_line as u32;
            let range = Range::new(
                Position::new(start, 0),
                Position::new(cue.end_line as u32, doc_state.line_len(cue.end_line)),
            );
            let selection_range = Range::new(
                Position::new(start, 0),
                Position::new(start, doc_state.line_len(cue.start_line)),
            );

            DocumentSymbol {
                name: cue.label,
                detail: cue.timing,
                kind: SymbolKind::EVENT,
                tags: None,
                #[allow(deprecated)]
                deprecated: None,
                range,
                selection_range,
                children: None,
            }
        })
        .collect()
}
