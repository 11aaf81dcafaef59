use std::{collections::HashMap, time::Duration};

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{CacheConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};

pub const MIN_CACHE_CAPACITY: usize = 1;
pub const MAX_CACHE_CAPACITY: usize = 10_000;
pub const MIN_CACHE_TTL_SECS: u64 = 1;
pub const MAX_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Documents kept per cache before least-recently-used eviction.
    pub capacity: usize,
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
        }
    }
}

impl CacheSettings {
    pub fn to_cache_config(&self) -> CacheConfig {
        CacheConfig {
            capacity: self.capacity,
            ttl: Duration::from_secs(self.ttl_secs),
        }
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: CacheSettingsPatch,
    ) {
        if let Some(v) = patch.capacity {
            self.capacity = v;
        }
        if let Some(v) = patch.ttl_secs {
            self.ttl_secs = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.capacity = self.capacity.clamp(MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY);
        self.ttl_secs = self.ttl_secs.clamp(MIN_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS);
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CacheSettingsPatch {
    pub(crate) capacity: Option<usize>,
    pub(crate) ttl_secs: Option<u64>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
