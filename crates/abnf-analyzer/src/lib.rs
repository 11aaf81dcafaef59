pub mod cache;
pub mod config;
pub mod document;
pub mod engine;
pub mod formatting;
pub mod hover;
pub mod i18n;
pub mod ide;
pub mod rename;
pub mod server;
pub mod symbols;
pub mod text_pos;

pub use cache::{CacheConfig, CacheStats, DocumentCache};
pub use config::ServerSettings;
pub use document::{Document, DocumentStore};
pub use engine::ResolutionEngine;
pub use hover::HoverInfo;
pub use i18n::{Locale, Messages};
pub use rename::{RenameEdit, RenameError};
pub use server::AbnfLanguageServer;
pub use symbols::{ReferenceSet, RuleReference, RuleSymbol, SymbolTable, is_valid_rule_name};
