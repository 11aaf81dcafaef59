//! Rule resolution over one document snapshot at a time.
//!
//! [`ResolutionEngine`] answers definition, reference, symbol and hover
//! queries from the scanner, memoized through a [`DocumentCache`], and
//! validates and plans renames. It does no locking of its own; the host is
//! expected to serialize calls and to report every text change through
//! [`ResolutionEngine::clear_document`] before the next read.

use tower_lsp::lsp_types::Url;
use tracing::debug;

use crate::cache::{CacheConfig, CacheStats, DocumentCache};
use crate::document::Document;
use crate::hover::{HoverInfo, core_rule_hover, user_rule_hover};
use crate::i18n::Messages;
use crate::ide::IdeLocation;
use crate::rename::{RenameEdit, RenameError, plan_edits};
use crate::symbols::{
    ReferenceSet, RuleKind, RuleSymbol, SymbolTable, is_valid_rule_name, scan_definitions, scan_references,
};

#[derive(Debug)]
pub struct ResolutionEngine {
    cache: DocumentCache,
    messages: &'static Messages,
}

impl ResolutionEngine {
    pub fn new(
        messages: &'static Messages,
        cache_config: CacheConfig,
    ) -> Self {
        Self {
            cache: DocumentCache::new(cache_config),
            messages,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn definition_of(
        &mut self,
        document: &Document,
        name: &str,
    ) -> Option<IdeLocation> {
        self.rules_of(document).remove(name)
    }

    /// Every occurrence of `name`, bare and bracketed, in scan order. May
    /// contain overlapping entries; see [`plan_edits`].
    pub fn references_of(
        &mut self,
        document: &Document,
        name: &str,
    ) -> ReferenceSet {
        if let Some(references) = self.cache.get_cached_references(&document.uri, document.version, name) {
            debug!("[engine] references hit for '{name}' in {} v{}", document.uri.path(), document.version);
            return references;
        }

        let references = scan_references(&document.uri, &document.text, name);
        self.cache.set_cached_references(&document.uri, document.version, name, &references);
        references
    }

    /// Flat listing of every defined rule, ordered by definition position.
    pub fn symbols_of(
        &mut self,
        document: &Document,
    ) -> Vec<RuleSymbol> {
        let mut symbols: Vec<RuleSymbol> = self
            .rules_of(document)
            .into_iter()
            .map(|(name, location)| RuleSymbol {
                name,
                location,
                kind: RuleKind::Rule,
            })
            .collect();
        symbols.sort_by(|a, b| a.location.range.start.cmp(&b.location.range.start).then_with(|| a.name.cmp(&b.name)));
        symbols
    }

    /// Core rules are answered from the catalog alone, without scanning or
    /// touching the cache.
    pub fn hover_info(
        &mut self,
        document: &Document,
        name: &str,
    ) -> Option<HoverInfo> {
        if let Some(info) = core_rule_hover(name, self.messages) {
            return Some(info);
        }

        self.rules_of(document).contains_key(name).then(|| user_rule_hover(name, self.messages))
    }

    /// Check the rename preconditions. A refusal leaves the cache as it was:
    /// a cold document is scanned but the result is not stored.
    pub fn validate_rename(
        &mut self,
        document: &Document,
        current_name: &str,
        new_name: &str,
    ) -> Result<(), RenameError> {
        self.check_rename(document, current_name, new_name).map(|_| ())
    }

    /// Validate, then compute the edits that rename `current_name` to
    /// `new_name` everywhere in `document`.
    pub fn plan_rename(
        &mut self,
        document: &Document,
        current_name: &str,
        new_name: &str,
    ) -> Result<Vec<RenameEdit>, RenameError> {
        if let Some(rules) = self.check_rename(document, current_name, new_name)? {
            self.cache.set_cached_rules(&document.uri, document.version, &rules);
        }

        let references = self.references_of(document, current_name);
        let edits = plan_edits(&document.text, &references, new_name);
        debug!(
            "[engine] rename '{current_name}' -> '{new_name}' in {}: {} references, {} edits",
            document.uri.path(),
            references.len(),
            edits.len()
        );
        Ok(edits)
    }

    pub fn clear_document(
        &mut self,
        uri: &Url,
    ) {
        self.cache.clear_document(uri);
    }

    pub fn clear_all(&mut self) {
        self.cache.clear_all();
    }

    pub fn cache_stats(&mut self) -> CacheStats {
        self.cache.stats()
    }

    fn rules_of(
        &mut self,
        document: &Document,
    ) -> SymbolTable {
        if let Some(rules) = self.cache.get_cached_rules(&document.uri, document.version) {
            debug!("[engine] rules hit for {} v{}", document.uri.path(), document.version);
            return rules;
        }

        let rules = scan_definitions(&document.uri, &document.text);
        self.cache.set_cached_rules(&document.uri, document.version, &rules);
        rules
    }

    /// Returns the freshly scanned table when the cache had none, so the
    /// caller can store it once the rename is accepted.
    fn check_rename(
        &mut self,
        document: &Document,
        current_name: &str,
        new_name: &str,
    ) -> Result<Option<SymbolTable>, RenameError> {
        if !is_valid_rule_name(new_name) {
            return Err(RenameError::InvalidName {
                name: new_name.to_string(),
            });
        }

        let (rules, fresh) = match self.cache.get_cached_rules(&document.uri, document.version) {
            Some(rules) => (rules, false),
            None => (scan_definitions(&document.uri, &document.text), true),
        };
        if !rules.contains_key(current_name) {
            return Err(RenameError::UndefinedRule {
                name: current_name.to_string(),
            });
        }
        Ok(fresh.then_some(rules))
    }
}

#[cfg(test)]
#[path = "../tests/src/engine_tests.rs"]
mod tests;
