use std::collections::HashMap;

use ethers_core::types::U256;

use crate::read::{ReadCall, ReadKind};
use crate::state::{Duel, DuelPrediction, LeaderboardEntry, Prediction, PricePoint, UserStats};

/// A decoded read result as stored in the cache.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Price(PricePoint),
    Number(U256),
    Ids(Vec<U256>),
    Leaderboard(Vec<LeaderboardEntry>),
    Prediction(Prediction),
    Stats(UserStats),
    Duel(Duel),
    DuelPredictions(Vec<DuelPrediction>),
}

/// Typed access to a [`QueryValue`].
pub trait Cached: Clone + Sized {
    fn from_value(value: &QueryValue) -> Option<Self>;
}

macro_rules! cached {
    ($ty:ty, $variant:ident) => {
        impl Cached for $ty {
            fn from_value(value: &QueryValue) -> Option<Self> {
                match value {
                    QueryValue::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

cached!(PricePoint, Price);
cached!(U256, Number);
cached!(Vec<U256>, Ids);
cached!(Vec<LeaderboardEntry>, Leaderboard);
cached!(Prediction, Prediction);
cached!(UserStats, Stats);
cached!(Duel, Duel);
cached!(Vec<DuelPrediction>, DuelPredictions);

/// Which cached reads a trigger marks stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invalidate {
    Exact(ReadCall),
    Kind(ReadKind),
}

impl Invalidate {
    pub fn matches(&self, key: &ReadCall) -> bool {
        match self {
            Invalidate::Exact(exact) => exact == key,
            Invalidate::Kind(kind) => key.kind() == *kind,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    value: QueryValue,
    stale: bool,
}

/// Read results shared across views, keyed by the read that produced them.
///
/// A stale entry is still served by [`QueryCache::peek`] so views keep
/// showing the last value while the refetch is in flight. Mounted views
/// refetch right after an invalidation, so an entry that is still stale when
/// the next invalidation arrives has no reader and is evicted.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<ReadCall, Entry>,
    generation: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh value for `key`, if any.
    pub fn get<T: Cached>(&self, key: &ReadCall) -> Option<T> {
        self.entries
            .get(key)
            .filter(|entry| !entry.stale)
            .and_then(|entry| T::from_value(&entry.value))
    }

    /// The last known value for `key`, fresh or stale.
    pub fn peek<T: Cached>(&self, key: &ReadCall) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|entry| T::from_value(&entry.value))
    }

    pub fn insert(&mut self, key: ReadCall, value: QueryValue) {
        tracing::debug!(?key, "cache store");
        self.entries.insert(key, Entry { value, stale: false });
    }

    /// Evicts entries left stale by the previous invalidation, then marks
    /// every entry matched by `rules` stale and returns how many were hit.
    pub fn invalidate(&mut self, rules: &[Invalidate]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.stale);
        let evicted = before - self.entries.len();

        let mut hit = 0;
        for (key, entry) in self.entries.iter_mut() {
            if !entry.stale && rules.iter().any(|rule| rule.matches(key)) {
                entry.stale = true;
                hit += 1;
            }
        }
        self.generation += 1;
        tracing::debug!(hit, evicted, generation = self.generation, "cache invalidated");
        hit
    }

    /// Bumped on every invalidation so subscribers know to re-read.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stale(&self, key: &ReadCall) -> bool {
        self.entries.get(key).map(|entry| entry.stale).unwrap_or(true)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use ethers_core::types::Address;

    use super::*;

    fn stats_key(byte: u8) -> ReadCall {
        ReadCall::UserStats {
            user: Address::repeat_byte(byte),
        }
    }

    #[test]
    fn get__returns_typed_fresh_value() {
        // given
        let mut cache = QueryCache::new();
        cache.insert(ReadCall::DuelCount, QueryValue::Number(U256::from(3)));

        // then
        assert_eq!(cache.get::<U256>(&ReadCall::DuelCount), Some(U256::from(3)));
        assert_eq!(cache.get::<Duel>(&ReadCall::DuelCount), None);
    }

    #[test]
    fn invalidate__by_kind_keeps_value_for_peek() {
        // given
        let mut cache = QueryCache::new();
        cache.insert(stats_key(1), QueryValue::Stats(UserStats::default()));
        cache.insert(stats_key(2), QueryValue::Stats(UserStats::default()));
        cache.insert(ReadCall::DuelCount, QueryValue::Number(U256::one()));

        // when
        let hit = cache.invalidate(&[Invalidate::Kind(ReadKind::UserStats)]);

        // then
        assert_eq!(hit, 2);
        assert_eq!(cache.get::<UserStats>(&stats_key(1)), None);
        assert_eq!(cache.peek::<UserStats>(&stats_key(1)), Some(UserStats::default()));
        assert!(!cache.is_stale(&ReadCall::DuelCount));
        assert_eq!(cache.generation(), 1);
    }

    #[test]
    fn insert__refreshes_stale_entry() {
        let mut cache = QueryCache::new();
        cache.insert(ReadCall::DuelCount, QueryValue::Number(U256::one()));
        cache.invalidate(&[Invalidate::Exact(ReadCall::DuelCount)]);

        cache.insert(ReadCall::DuelCount, QueryValue::Number(U256::from(2)));

        assert_eq!(cache.get::<U256>(&ReadCall::DuelCount), Some(U256::from(2)));
    }

    #[test]
    fn invalidate__evicts_entries_nobody_refetched() {
        // given
        let mut cache = QueryCache::new();
        cache.insert(stats_key(1), QueryValue::Stats(UserStats::default()));
        cache.insert(stats_key(2), QueryValue::Stats(UserStats::default()));
        cache.invalidate(&[Invalidate::Kind(ReadKind::UserStats)]);

        // a mounted view refetches its key, the other is abandoned
        cache.insert(stats_key(1), QueryValue::Stats(UserStats::default()));

        // when
        cache.invalidate(&[Invalidate::Exact(ReadCall::DuelCount)]);

        // then
        assert_eq!(cache.entry_count(), 1);
        assert_eq!(cache.peek::<UserStats>(&stats_key(2)), None);
        assert_eq!(cache.get::<UserStats>(&stats_key(1)), Some(UserStats::default()));
    }

    #[test]
    fn invalidate__keeps_fresh_stale_values_for_the_pending_refetch() {
        // given
        let mut cache = QueryCache::new();
        cache.insert(ReadCall::DuelCount, QueryValue::Number(U256::one()));

        // when
        cache.invalidate(&[Invalidate::Exact(ReadCall::DuelCount)]);

        // then
        assert_eq!(cache.entry_count(), 1);
        assert_eq!(cache.peek::<U256>(&ReadCall::DuelCount), Some(U256::one()));
    }

    #[test]
    fn is_stale__unknown_key_counts_as_stale() {
        assert!(QueryCache::new().is_stale(&ReadCall::DuelCount));
    }
}
