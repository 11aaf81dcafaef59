use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::sync::{Mutex, RwLock};
use tower_lsp::Client;
use tracing::info;

use crate::{
    config::{LogLevel, ServerSettings},
    document::DocumentStore,
    engine::ResolutionEngine,
    i18n::{Locale, Messages},
};

const CLIENT_NOTIFICATION_PREFIX: &str = "abnf-analyzer:";

/// The abnf-analyzer backend that implements the Language Server Protocol.
pub struct AbnfLanguageServer {
    /// The LSP client handle, used to send notifications back.
    pub(crate) client: Client,

    /// Thread-safe store of all open documents.
    pub(crate) document_store: Arc<DocumentStore>,

    /// Scanner cache and query logic. The engine does no locking itself, so
    /// every request takes this lock for the whole query.
    pub(crate) engine: Arc<Mutex<ResolutionEngine>>,

    /// Runtime server settings updated from LSP configuration.
    pub(crate) settings: Arc<RwLock<ServerSettings>>,
}

impl AbnfLanguageServer {
    /// Create a server wired to `client`. `locale` seeds the settings before
    /// the client's initialization options are merged on top.
    pub fn new(
        client: Client,
        locale: Option<Locale>,
    ) -> Self {
        let settings = ServerSettings {
            locale: locale.unwrap_or_default(),
            ..ServerSettings::default()
        };
        let engine = ResolutionEngine::new(settings.locale.messages(), settings.cache.to_cache_config());

        Self {
            client,
            document_store: Arc::new(DocumentStore::new()),
            engine: Arc::new(Mutex::new(engine)),
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    pub(crate) async fn settings_snapshot(&self) -> ServerSettings {
        self.settings.read().await.clone()
    }

    pub(crate) async fn messages(&self) -> &'static Messages {
        self.settings.read().await.locale.messages()
    }

    /// Store `settings`, rebuilding the engine (and so emptying its cache)
    /// when the locale or cache sizing changed.
    pub(crate) async fn apply_settings(
        &self,
        settings: ServerSettings,
    ) {
        let mut current = self.settings.write().await;
        if current.locale != settings.locale || current.cache != settings.cache {
            info!(
                "Rebuilding resolution engine (locale {}, cache capacity {}, ttl {}s)",
                settings.locale, settings.cache.capacity, settings.cache.ttl_secs
            );
            *self.engine.lock().await =
                ResolutionEngine::new(settings.locale.messages(), settings.cache.to_cache_config());
        }
        *current = settings;
    }

    /// Send a `window/logMessage` if the configured level lets it through.
    pub(crate) async fn log_to_client(
        &self,
        level: LogLevel,
        message: impl AsRef<str>,
    ) {
        if !self.settings.read().await.logging.level.allows(level) {
            return;
        }
        let _ = AssertUnwindSafe(self.client.log_message(level.message_type(), prefixed_client_message(message)))
            .catch_unwind()
            .await;
    }
}

pub(crate) fn prefixed_client_message(message: impl AsRef<str>) -> String {
    format!("{CLIENT_NOTIFICATION_PREFIX} {}", message.as_ref())
}
