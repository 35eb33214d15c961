//! Memoization layer for indexation lookups.
//!
//! Summary recomputations repeat the same (amount, from, to) lookups; the
//! external calculator gives no snapshot guarantee, so memoization is an
//! explicit, injectable wrapper rather than behavior baked into the client.

use std::collections::{HashMap, HashSet};
use std::sync::{Condvar, Mutex};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{IndexationError, IndexationProvider};

type CacheKey = (Decimal, NaiveDate, Option<NaiveDate>);

#[derive(Debug, Default)]
struct CacheState {
    values: HashMap<CacheKey, Decimal>,
    in_flight: HashSet<CacheKey>,
}

/// Caches successful indexation lookups keyed by (amount, from, to).
///
/// At most one underlying call is in flight per key: a second caller for
/// the same key blocks until the first resolves, then reads the cached
/// value instead of issuing a duplicate request. Errors are not cached, so
/// a later lookup after a transient failure retries the calculator.
///
/// # Example
///
/// ```
/// use exemption_engine::indexation::{CachedIndexation, FixedFactorIndexation, IndexationProvider};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let provider = CachedIndexation::new(FixedFactorIndexation::new(Decimal::new(165, 2)));
/// let from = NaiveDate::from_ymd_opt(2010, 12, 31).unwrap();
/// let first = provider.index_amount(Decimal::from(1000), from, None).unwrap();
/// let second = provider.index_amount(Decimal::from(1000), from, None).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug)]
pub struct CachedIndexation<P> {
    inner: P,
    state: Mutex<CacheState>,
    resolved: Condvar,
}

impl<P> CachedIndexation<P> {
    /// Wraps a provider with a fresh, empty cache.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            state: Mutex::new(CacheState::default()),
            resolved: Condvar::new(),
        }
    }

    /// Returns the number of cached values.
    pub fn len(&self) -> usize {
        self.state.lock().expect("cache lock poisoned").values.len()
    }

    /// Returns true if no values are cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: IndexationProvider> IndexationProvider for CachedIndexation<P> {
    fn index_amount(
        &self,
        amount: Decimal,
        from_date: NaiveDate,
        to_date: Option<NaiveDate>,
    ) -> Result<Decimal, IndexationError> {
        let key: CacheKey = (amount, from_date, to_date);

        let mut state = self.state.lock().expect("cache lock poisoned");
        loop {
            if let Some(value) = state.values.get(&key) {
                return Ok(*value);
            }
            if !state.in_flight.contains(&key) {
                state.in_flight.insert(key);
                break;
            }
            // Another caller is resolving this key; wait for it.
            state = self.resolved.wait(state).expect("cache lock poisoned");
        }
        drop(state);

        let result = self.inner.index_amount(amount, from_date, to_date);

        let mut state = self.state.lock().expect("cache lock poisoned");
        state.in_flight.remove(&key);
        if let Ok(value) = result {
            state.values.insert(key, value);
        }
        drop(state);
        self.resolved.notify_all();

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Provider that counts calls and fails until `fail_times` is exhausted.
    struct CountingProvider {
        calls: AtomicU32,
        fail_times: u32,
    }

    impl CountingProvider {
        fn new(fail_times: u32) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail_times,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl IndexationProvider for CountingProvider {
        fn index_amount(
            &self,
            amount: Decimal,
            from_date: NaiveDate,
            _to_date: Option<NaiveDate>,
        ) -> Result<Decimal, IndexationError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_times {
                return Err(IndexationError::MalformedResponse { from_date });
            }
            Ok((amount * Decimal::new(2, 0)).round_dp(2))
        }
    }

    fn from_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2010, 12, 31).unwrap()
    }

    #[test]
    fn test_second_lookup_hits_cache() {
        let cached = CachedIndexation::new(CountingProvider::new(0));
        let amount = Decimal::from(1000);

        let first = cached.index_amount(amount, from_date(), None).unwrap();
        let second = cached.index_amount(amount, from_date(), None).unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.inner.calls(), 1);
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn test_distinct_keys_are_cached_separately() {
        let cached = CachedIndexation::new(CountingProvider::new(0));

        cached
            .index_amount(Decimal::from(1000), from_date(), None)
            .unwrap();
        cached
            .index_amount(Decimal::from(2000), from_date(), None)
            .unwrap();

        assert_eq!(cached.inner.calls(), 2);
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cached = CachedIndexation::new(CountingProvider::new(1));
        let amount = Decimal::from(1000);

        let first = cached.index_amount(amount, from_date(), None);
        assert!(first.is_err());
        assert!(cached.is_empty());

        let second = cached.index_amount(amount, from_date(), None);
        assert!(second.is_ok());
        assert_eq!(cached.inner.calls(), 2);
    }
}
