use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tower_lsp::lsp_types::MessageType;

/// Verbosity of `window/logMessage` traffic sent to the client. Ordered from
/// least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Whether a message at `level` passes this threshold.
    pub fn allows(
        self,
        level: LogLevel,
    ) -> bool {
        level <= self
    }

    pub fn message_type(self) -> MessageType {
        match self {
            Self::Error => MessageType::ERROR,
            Self::Warn => MessageType::WARNING,
            Self::Info => MessageType::INFO,
            Self::Debug | Self::Trace => MessageType::LOG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingSettings {
    pub level: LogLevel,
}

impl LoggingSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: LoggingSettingsPatch,
    ) {
        if let Some(v) = patch.level {
            self.level = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct LoggingSettingsPatch {
    pub(crate) level: Option<LogLevel>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
