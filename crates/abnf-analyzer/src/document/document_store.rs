use dashmap::DashMap;
use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};

use super::Document;

/// Thread-safe store of all open documents, keyed by URI.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) {
        self.documents.insert(uri.clone(), Document::new(uri, text, version));
    }

    /// Replace the full content of a document, opening it if it is not tracked yet.
    pub fn update(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) {
        if let Some(mut doc) = self.documents.get_mut(&uri) {
            doc.set_content(text, version);
        } else {
            self.documents.insert(uri.clone(), Document::new(uri, text, version));
        }
    }

    /// Apply change events to a tracked document. Returns `false` when the URI
    /// is unknown.
    pub fn apply_changes(
        &self,
        uri: &Url,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) -> bool {
        match self.documents.get_mut(uri) {
            Some(mut doc) => {
                doc.apply_changes(changes, version);
                true
            },
            None => false,
        }
    }

    pub fn close(
        &self,
        uri: &Url,
    ) {
        self.documents.remove(uri);
    }

    /// Clone of the tracked document, so callers never hold a map guard across
    /// an `.await`.
    pub fn get(
        &self,
        uri: &Url,
    ) -> Option<Document> {
        self.documents.get(uri).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/document_store_tests.rs"]
mod tests;
