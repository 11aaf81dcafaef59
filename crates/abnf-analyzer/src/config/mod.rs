//! Declarative server configuration.
//!
//! Settings are split into one file per category. [`ServerSettings`]
//! aggregates all categories and handles JSON deserialization from LSP
//! initialization options and `didChangeConfiguration` payloads.

pub(crate) mod cache;
pub(crate) mod formatting;
pub(crate) mod logging;
pub(crate) mod schema;

use std::collections::HashMap;

pub use cache::{CacheSettings, MAX_CACHE_CAPACITY, MAX_CACHE_TTL_SECS, MIN_CACHE_CAPACITY, MIN_CACHE_TTL_SECS};
use cache::CacheSettingsPatch;
pub use formatting::FormattingSettings;
use formatting::FormattingSettingsPatch;
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
pub use schema::{SchemaField, SchemaType, generate_configuration_markdown, generate_package_json_properties, schema_fields};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::i18n::Locale;

pub const SETTINGS_SECTION_KEY: &str = "abnf-analyzer";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerSettings {
    pub locale: Locale,
    pub cache: CacheSettings,
    pub formatting: FormattingSettings,
    pub logging: LoggingSettings,
}

impl ServerSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        Self::default().merged_with_optional_payload(payload)
    }

    pub fn merged_with_optional_payload(
        &self,
        payload: Option<&Value>,
    ) -> Self {
        match payload {
            Some(payload) => self.merged_with_payload(payload),
            None => self.clone(),
        }
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<ServerSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: ServerSettingsPatch,
    ) {
        if let Some(tag) = patch.locale {
            self.locale = Locale::from_tag(&tag).unwrap_or_else(|| {
                warn!("Unknown locale '{tag}', falling back to {}", Locale::default());
                Locale::default()
            });
        }
        if let Some(p) = patch.cache {
            self.cache.apply_patch(p);
        }
        if let Some(p) = patch.formatting {
            self.formatting.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.cache.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ServerSettingsPatch {
    locale: Option<String>,
    cache: Option<CacheSettingsPatch>,
    formatting: Option<FormattingSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
