use std::fmt::{Display, Formatter};

use crate::i18n::{Locale, Messages, format_message};

/// Why a rename was refused. Checked before any edit is planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// The proposed name does not match `^[A-Za-z][A-Za-z0-9-]*$`.
    InvalidName { name: String },
    /// The rule being renamed has no definition in the document.
    UndefinedRule { name: String },
}

impl RenameError {
    /// User-displayable text in the catalog's language.
    pub fn message(
        &self,
        messages: &Messages,
    ) -> String {
        match self {
            Self::InvalidName {
                ..
            } => messages.rename.invalid_rule_name.to_string(),
            Self::UndefinedRule {
                name,
            } => format_message(messages.rename.rule_not_defined, &[name.as_str()]),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::InvalidName {
                name,
            }
            | Self::UndefinedRule {
                name,
            } => name,
        }
    }
}

impl Display for RenameError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.message(Locale::En.messages()))
    }
}

impl std::error::Error for RenameError {}
