use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

/// Capacity-bounded map with least-recently-used eviction and a per-entry
/// time-to-live.
///
/// Every read (`get`, `get_mut`, `contains`) refreshes recency. Age is
/// measured from the last write only, and expiry is checked lazily on access;
/// nothing sweeps in the background.
#[derive(Debug)]
pub struct TtlLru<K, V> {
    entries: HashMap<K, Slot<V>>,
    capacity: usize,
    ttl: Duration,
    tick: u64,
}

#[derive(Debug)]
struct Slot<V> {
    value: V,
    written_at: Instant,
    last_touch: u64,
}

impl<K, V> TtlLru<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(
        capacity: usize,
        ttl: Duration,
    ) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            ttl,
            tick: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, including ones that expired but were not yet
    /// touched. Call [`TtlLru::purge_expired`] first for an exact live count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(
        &mut self,
        key: &K,
    ) -> Option<&V> {
        self.get_mut(key).map(|value| &*value)
    }

    pub fn get_mut(
        &mut self,
        key: &K,
    ) -> Option<&mut V> {
        if self.remove_if_expired(key) {
            return None;
        }
        let tick = self.next_tick();
        let slot = self.entries.get_mut(key)?;
        slot.last_touch = tick;
        Some(&mut slot.value)
    }

    pub fn contains(
        &mut self,
        key: &K,
    ) -> bool {
        self.get_mut(key).is_some()
    }

    /// Store `value`, resetting its age. Returns the key evicted to make room,
    /// if any.
    pub fn insert(
        &mut self,
        key: K,
        value: V,
    ) -> Option<K> {
        let tick = self.next_tick();
        let slot = Slot {
            value,
            written_at: Instant::now(),
            last_touch: tick,
        };

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = slot;
            return None;
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            self.purge_expired();
            if self.entries.len() >= self.capacity {
                evicted = self.evict_least_recent();
            }
        }

        self.entries.insert(key, slot);
        evicted
    }

    pub fn remove(
        &mut self,
        key: &K,
    ) -> Option<V> {
        self.entries.remove(key).map(|slot| slot.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop every expired entry and return how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, slot| !is_expired(slot, now, ttl));
        before - self.entries.len()
    }

    /// Live entries, without touching recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        let now = Instant::now();
        let ttl = self.ttl;
        self.entries.iter().filter(move |(_, slot)| !is_expired(slot, now, ttl)).map(|(key, slot)| (key, &slot.value))
    }

    fn remove_if_expired(
        &mut self,
        key: &K,
    ) -> bool {
        let expired = self.entries.get(key).is_some_and(|slot| is_expired(slot, Instant::now(), self.ttl));
        if expired {
            self.entries.remove(key);
        }
        expired
    }

    fn evict_least_recent(&mut self) -> Option<K> {
        let victim = self.entries.iter().min_by_key(|(_, slot)| slot.last_touch).map(|(key, _)| key.clone())?;
        self.entries.remove(&victim);
        Some(victim)
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

fn is_expired<V>(
    slot: &Slot<V>,
    now: Instant,
    ttl: Duration,
) -> bool {
    now.saturating_duration_since(slot.written_at) > ttl
}

#[cfg(test)]
#[path = "../../tests/src/cache/lru_tests.rs"]
mod tests;
