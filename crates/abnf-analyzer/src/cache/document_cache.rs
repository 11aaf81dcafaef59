use std::{
    collections::HashMap,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::Serialize;
use tower_lsp::lsp_types::Url;
use tracing::debug;

use crate::symbols::{ReferenceSet, SymbolTable};

use super::lru::TtlLru;

pub const DEFAULT_CACHE_CAPACITY: usize = 100;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Sizing shared by both per-document caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}

#[derive(Debug, Clone)]
struct RulesEntry {
    rules: SymbolTable,
    version: i32,
    timestamp_ms: u64,
}

#[derive(Debug, Clone)]
struct ReferencesEntry {
    by_rule: HashMap<String, ReferenceSet>,
    version: i32,
}

/// Version-keyed memoization of scan results.
///
/// Holds one symbol table per document and one map of rule name → references
/// per document. An entry is only served while its recorded version equals
/// the caller's current version; a mismatch evicts it on the spot. Values are
/// cloned on the way in and on the way out, so callers never share storage
/// with the cache.
#[derive(Debug)]
pub struct DocumentCache {
    rules: TtlLru<Url, RulesEntry>,
    references: TtlLru<Url, ReferencesEntry>,
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl DocumentCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            rules: TtlLru::new(config.capacity, config.ttl),
            references: TtlLru::new(config.capacity, config.ttl),
        }
    }

    pub fn get_cached_rules(
        &mut self,
        uri: &Url,
        version: i32,
    ) -> Option<SymbolTable> {
        let entry = self.rules.get(uri)?;
        if entry.version != version {
            debug!("[cache] rules for {} stale (cached v{}, current v{version})", uri.path(), entry.version);
            self.rules.remove(uri);
            return None;
        }
        Some(entry.rules.clone())
    }

    /// Existence check with the same validity rules as [`DocumentCache::get_cached_rules`].
    /// Refreshes recency like a read.
    pub fn has_cached_rules(
        &mut self,
        uri: &Url,
        version: i32,
    ) -> bool {
        let cached_version = self.rules.get(uri).map(|entry| entry.version);
        match cached_version {
            Some(cached) if cached == version => true,
            Some(_) => {
                self.rules.remove(uri);
                false
            },
            None => false,
        }
    }

    pub fn set_cached_rules(
        &mut self,
        uri: &Url,
        version: i32,
        rules: &SymbolTable,
    ) {
        let entry = RulesEntry {
            rules: rules.clone(),
            version,
            timestamp_ms: unix_millis(),
        };
        if let Some(evicted) = self.rules.insert(uri.clone(), entry) {
            debug!("[cache] evicted rules for {}", evicted.path());
        }
    }

    pub fn get_cached_references(
        &mut self,
        uri: &Url,
        version: i32,
        rule_name: &str,
    ) -> Option<ReferenceSet> {
        let entry = self.references.get(uri)?;
        if entry.version != version {
            debug!("[cache] references for {} stale (cached v{}, current v{version})", uri.path(), entry.version);
            self.references.remove(uri);
            return None;
        }
        entry.by_rule.get(rule_name).cloned()
    }

    pub fn set_cached_references(
        &mut self,
        uri: &Url,
        version: i32,
        rule_name: &str,
        references: &ReferenceSet,
    ) {
        if let Some(entry) = self.references.get_mut(uri)
            && entry.version == version
        {
            entry.by_rule.insert(rule_name.to_string(), references.clone());
            return;
        }

        let entry = ReferencesEntry {
            by_rule: HashMap::from([(rule_name.to_string(), references.clone())]),
            version,
        };
        if let Some(evicted) = self.references.insert(uri.clone(), entry) {
            debug!("[cache] evicted references for {}", evicted.path());
        }
    }

    /// Drop everything cached for one document.
    pub fn clear_document(
        &mut self,
        uri: &Url,
    ) {
        self.rules.remove(uri);
        self.references.remove(uri);
    }

    pub fn clear_all(&mut self) {
        self.rules.clear();
        self.references.clear();
    }

    /// Snapshot of sizes, limits and live rule-cache entries. Expired entries
    /// are purged first so the sizes count live entries only.
    pub fn stats(&mut self) -> CacheStats {
        self.rules.purge_expired();
        self.references.purge_expired();

        let mut entries: Vec<CacheEntryInfo> = self
            .rules
            .iter()
            .map(|(uri, entry)| CacheEntryInfo {
                uri: uri.to_string(),
                version: entry.version,
                timestamp: entry.timestamp_ms,
            })
            .collect();
        entries.sort_by(|a, b| a.uri.cmp(&b.uri));

        CacheStats {
            rules_cache: CacheCapacity::of(&self.rules),
            references_cache: CacheCapacity::of(&self.references),
            entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub rules_cache: CacheCapacity,
    pub references_cache: CacheCapacity,
    pub entries: Vec<CacheEntryInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheCapacity {
    pub size: usize,
    pub max: usize,
    /// Time-to-live in milliseconds.
    pub ttl: u64,
}

impl CacheCapacity {
    fn of<V>(cache: &TtlLru<Url, V>) -> Self {
        Self {
            size: cache.len(),
            max: cache.capacity(),
            ttl: u64::try_from(cache.ttl().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryInfo {
    pub uri: String,
    pub version: i32,
    /// Write time in milliseconds since the Unix epoch.
    pub timestamp: u64,
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/src/cache/document_cache_tests.rs"]
mod tests;
