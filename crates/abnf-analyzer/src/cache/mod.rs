mod document_cache;
mod lru;

pub use document_cache::{
    CacheCapacity, CacheConfig, CacheEntryInfo, CacheStats, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL, DocumentCache,
};
pub use lru::TtlLru;
