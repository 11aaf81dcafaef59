use std::collections::HashMap;

use tower_lsp::{
    LanguageServer,
    jsonrpc::{Error, Result},
    lsp_types::*,
};
use tracing::{debug, info, warn};

use crate::{
    config::{LogLevel, ServerSettings},
    document::Document,
    hover::to_lsp_hover,
    i18n::format_message,
    ide::{
        IdeRange, NavigationTarget,
        lsp::{ide_location_to_lsp, ide_range_to_lsp, lsp_position_to_ide, navigation_target_to_lsp},
    },
    server::{
        formatting::format_document,
        state::{AbnfLanguageServer, prefixed_client_message},
    },
};

pub const CACHE_STATS_COMMAND: &str = "abnf.cacheStats";
pub const CLEAR_CACHE_COMMAND: &str = "abnf.clearCache";

#[tower_lsp::async_trait]
impl LanguageServer for AbnfLanguageServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing abnf-analyzer...");

        let initial_settings =
            self.settings_snapshot().await.merged_with_optional_payload(params.initialization_options.as_ref());
        self.apply_settings(initial_settings).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                definition_provider: Some(OneOf::Left(true)),
                references_provider: Some(OneOf::Left(true)),
                document_symbol_provider: Some(OneOf::Left(true)),
                rename_provider: Some(OneOf::Right(RenameOptions {
                    prepare_provider: Some(true),
                    work_done_progress_options: Default::default(),
                })),
                document_formatting_provider: Some(OneOf::Left(true)),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: vec![CACHE_STATS_COMMAND.to_string(), CLEAR_CACHE_COMMAND.to_string()],
                    work_done_progress_options: Default::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "abnf-analyzer".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        let locale = self.settings_snapshot().await.locale;
        info!("abnf-analyzer initialized (locale {locale})");
        self.log_to_client(LogLevel::Info, format!("Ready (locale {locale})")).await;
    }

    async fn did_change_configuration(
        &self,
        params: DidChangeConfigurationParams,
    ) {
        let current = self.settings_snapshot().await;
        let merged: ServerSettings = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }
        self.apply_settings(merged).await;
        info!("Applied updated abnf-analyzer settings");
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down abnf-analyzer");
        Ok(())
    }

    async fn did_open(
        &self,
        params: DidOpenTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        let filename = short_name(&uri);

        info!("Opened {filename} (v{version}, {} bytes)", params.text_document.text.len());
        self.document_store.open(uri.clone(), params.text_document.text, version);
        self.engine.lock().await.clear_document(&uri);
        self.log_to_client(LogLevel::Debug, format!("Opened {filename}")).await;
    }

    async fn did_change(
        &self,
        params: DidChangeTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        let mut changes = params.content_changes;

        if !self.document_store.apply_changes(&uri, changes.clone(), version) {
            // Change for a document we never saw opened: take the last full text.
            match changes.pop() {
                Some(change) if change.range.is_none() => self.document_store.update(uri.clone(), change.text, version),
                _ => warn!("Ignoring incremental change for untracked {}", short_name(&uri)),
            }
        }

        debug!("Changed {} (v{version})", short_name(&uri));
        self.engine.lock().await.clear_document(&uri);
    }

    async fn did_close(
        &self,
        params: DidCloseTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        self.document_store.close(&uri);
        self.engine.lock().await.clear_document(&uri);
        debug!("Closed {}", short_name(&uri));
    }

    async fn hover(
        &self,
        params: HoverParams,
    ) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some((document, word, range)) = self.word_under_cursor(&uri, position) else {
            return Ok(None);
        };

        let mut engine = self.engine.lock().await;
        let messages = engine.messages();
        Ok(engine.hover_info(&document, &word).map(|info| to_lsp_hover(&info, messages, Some(range))))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some((document, word, _)) = self.word_under_cursor(&uri, position) else {
            return Ok(None);
        };

        let definition = self.engine.lock().await.definition_of(&document, &word);
        debug!("Definition of '{word}' in {}: {}", short_name(&uri), definition.is_some());
        let target = NavigationTarget::from_locations(definition.into_iter().collect());
        Ok(target.map(navigation_target_to_lsp))
    }

    async fn references(
        &self,
        params: ReferenceParams,
    ) -> Result<Option<Vec<Location>>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some((document, word, _)) = self.word_under_cursor(&uri, position) else {
            return Ok(None);
        };

        let (references, definition) = {
            let mut engine = self.engine.lock().await;
            let references = engine.references_of(&document, &word);
            let definition = if params.context.include_declaration {
                None
            } else {
                engine.definition_of(&document, &word)
            };
            (references, definition)
        };

        let locations = references
            .into_iter()
            .map(|reference| reference.location)
            .filter(|location| definition.as_ref() != Some(location))
            .map(ide_location_to_lsp)
            .collect();
        Ok(Some(locations))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let Some(document) = self.document_store.get(&params.text_document.uri) else {
            return Ok(None);
        };

        let mut engine = self.engine.lock().await;
        let detail = engine.messages().general.abnf_rule;
        #[allow(deprecated)]
        let symbols = engine
            .symbols_of(&document)
            .into_iter()
            .map(|symbol| {
                let range = ide_range_to_lsp(symbol.location.range);
                DocumentSymbol {
                    name: symbol.name,
                    detail: Some(detail.to_string()),
                    kind: SymbolKind::FUNCTION,
                    tags: None,
                    deprecated: None,
                    range,
                    selection_range: range,
                    children: None,
                }
            })
            .collect();
        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }

    async fn prepare_rename(
        &self,
        params: TextDocumentPositionParams,
    ) -> Result<Option<PrepareRenameResponse>> {
        let Some((document, word, range)) = self.word_under_cursor(&params.text_document.uri, params.position) else {
            return Ok(None);
        };

        let mut engine = self.engine.lock().await;
        if engine.definition_of(&document, &word).is_none() {
            let message = format_message(engine.messages().rename.rule_not_defined, &[word.as_str()]);
            return Err(Error::invalid_params(message));
        }
        Ok(Some(PrepareRenameResponse::Range(ide_range_to_lsp(range))))
    }

    async fn rename(
        &self,
        params: RenameParams,
    ) -> Result<Option<WorkspaceEdit>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let new_name = params.new_name;
        let Some((document, word, _)) = self.word_under_cursor(&uri, position) else {
            return Ok(None);
        };

        let planned = {
            let mut engine = self.engine.lock().await;
            let messages = engine.messages();
            engine.plan_rename(&document, &word, &new_name).map_err(|error| error.message(messages))
        };

        match planned {
            Ok(edits) => {
                info!("Renaming '{word}' to '{new_name}' in {} ({} edits)", short_name(&uri), edits.len());
                let text_edits: Vec<TextEdit> = edits.iter().map(|edit| edit.to_lsp()).collect();
                let changes = HashMap::from([(uri, text_edits)]);
                Ok(Some(WorkspaceEdit {
                    changes: Some(changes),
                    document_changes: None,
                    change_annotations: None,
                }))
            },
            Err(message) => {
                warn!("Rename of '{word}' to '{new_name}' refused: {message}");
                let shown = format_message(self.messages().await.rename.rename_failed, &[message.as_str()]);
                self.client.show_message(MessageType::ERROR, prefixed_client_message(shown)).await;
                Err(Error::invalid_params(message))
            },
        }
    }

    async fn formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> Result<Option<Vec<TextEdit>>> {
        let Some(document) = self.document_store.get(&params.text_document.uri) else {
            return Ok(None);
        };
        let settings = self.settings_snapshot().await;
        Ok(Some(format_document(&document, &settings.formatting).into_iter().collect()))
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<serde_json::Value>> {
        match params.command.as_str() {
            CACHE_STATS_COMMAND => {
                let stats = self.engine.lock().await.cache_stats();
                let value = serde_json::to_value(stats).map_err(|error| {
                    warn!("Failed to serialize cache stats: {error}");
                    Error::internal_error()
                })?;
                Ok(Some(value))
            },
            CLEAR_CACHE_COMMAND => {
                self.engine.lock().await.clear_all();
                info!("Cleared all cached scans");
                self.log_to_client(LogLevel::Info, "Cache cleared").await;
                Ok(None)
            },
            other => Err(Error::invalid_params(format!("Unknown command: {other}"))),
        }
    }
}

impl AbnfLanguageServer {
    /// Snapshot of the document at `uri` plus the rule-name-shaped word at
    /// `position` and its range.
    fn word_under_cursor(
        &self,
        uri: &Url,
        position: Position,
    ) -> Option<(Document, String, IdeRange)> {
        let document = self.document_store.get(uri)?;
        let (word, range) = document.word_at(lsp_position_to_ide(position))?;
        Some((document, word, range))
    }
}

fn short_name(uri: &Url) -> String {
    uri.path().rsplit('/').next().unwrap_or(uri.path()).to_owned()
}
