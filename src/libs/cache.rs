//! Client-side query cache.
//!
//! Holds, per [`QueryKey`], the last successful result, the last error and at
//! most one in-flight fetch. Each key moves through
//! `idle → loading → (success | error)` and only goes back to `loading` when
//! it is invalidated, when its data ages past the freshness window, or when a
//! view mounts on top of an error.
//!
//! ## Sharing
//!
//! Readers of one key share a single request: the first reader starts a
//! flight (an `Arc<OnceCell>`), later readers await the same cell. Fresh
//! successful results are served without touching the network.
//!
//! A reader dropped before its flight settles (a timeout, a cancelled task)
//! hands the request to any reader still waiting on it. When none is left the
//! flight is detached and the key returns to the status it had before, so
//! the next read starts over.
//!
//! ## Invalidation
//!
//! [`QueryCache::invalidate`] marks every key under a path prefix stale and
//! detaches any flight in progress. A response that arrives for a detached
//! flight is returned to the reader that awaited it but never written into
//! the cache, so an old response cannot overwrite state fetched after the
//! invalidation.
//!
//! The map sits behind a `parking_lot::Mutex` that is never held across an
//! `.await`.

use super::error::ApiError;
use super::query::{FromQueryData, QueryData, QueryKey};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::OnceCell;
use tracing::{debug, trace};

/// Freshness window used when no configuration is given.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Observable state of one cache key.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub status: QueryStatus,
    /// Last successful result. Kept when a later fetch fails.
    pub data: Option<QueryData>,
    pub error: Option<ApiError>,
    /// Set by invalidation, cleared when a fetch settles.
    pub stale: bool,
    pub updated_at: Option<DateTime<Local>>,
    /// Number of requests started for this key.
    pub fetch_count: u32,
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }
}

type Flight = Arc<OnceCell<Result<QueryData, ApiError>>>;

#[derive(Default)]
struct Entry {
    state: QueryState,
    generation: u64,
    fetched_at: Option<Instant>,
    flight: Option<Flight>,
    /// Status to restore if the flight is abandoned before it settles.
    before_flight: QueryStatus,
}

impl Entry {
    fn fresh_data(&self, stale_time: Duration) -> Option<&QueryData> {
        if self.state.status != QueryStatus::Success || self.state.stale {
            return None;
        }
        match self.fetched_at {
            Some(at) if at.elapsed() < stale_time => self.state.data.as_ref(),
            _ => None,
        }
    }

    /// Drops a `Loading` status left behind by a detached flight.
    fn leave_loading(&mut self) {
        if self.flight.is_none() && self.state.status == QueryStatus::Loading {
            self.state.status = if self.state.data.is_some() {
                QueryStatus::Success
            } else {
                QueryStatus::Idle
            };
        }
    }
}

pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    stale_time: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME)
    }
}

impl QueryCache {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            stale_time,
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// Reads `key`, serving fresh cached data or joining/starting a fetch.
    ///
    /// `fetcher` runs only if this call ends up performing the request: it
    /// started the flight, or every reader ahead of it was dropped.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        T: FromQueryData + Into<QueryData>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let (flight, generation) = {
            let mut entries = self.entries.lock();
            let entry = entries.entry(key.clone()).or_default();

            if let Some(data) = entry.fresh_data(self.stale_time) {
                trace!(%key, "query cache hit");
                return T::from_query_data(data.clone(), &key);
            }

            match &entry.flight {
                Some(flight) => {
                    trace!(%key, "joining in-flight query");
                    (flight.clone(), entry.generation)
                }
                None => {
                    debug!(%key, "query fetch started");
                    let flight: Flight = Arc::new(OnceCell::new());
                    entry.flight = Some(flight.clone());
                    entry.before_flight = entry.state.status;
                    entry.state.status = QueryStatus::Loading;
                    (flight, entry.generation)
                }
            }
        };

        let mut guard = FlightGuard {
            cache: self,
            key: &key,
            flight,
            generation,
            settled: false,
        };

        let result = guard
            .flight
            .get_or_init(|| async {
                self.request_started(&key);
                fetcher().await.map(Into::into)
            })
            .await
            .clone();

        guard.settled = true;
        self.settle(&key, &guard.flight, generation, &result);

        result.and_then(|data| T::from_query_data(data, &key))
    }

    fn request_started(&self, key: &QueryKey) {
        if let Some(entry) = self.entries.lock().get_mut(key) {
            entry.state.fetch_count += 1;
        }
    }

    /// Called when a reader is dropped before its flight settled.
    ///
    /// If no other reader holds the flight it is detached and the key goes
    /// back to the status it had before loading; otherwise a remaining
    /// reader takes the request over.
    fn abandon(&self, key: &QueryKey, flight: &Flight, generation: u64) {
        let mut entries = self.entries.lock();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };
        if entry.generation != generation {
            entry.leave_loading();
            return;
        }
        let owned = entry.flight.as_ref().is_some_and(|f| Arc::ptr_eq(f, flight));
        // One reference in the entry, one in the dropped reader's guard.
        if owned && !flight.initialized() && Arc::strong_count(flight) == 2 {
            debug!(%key, "query fetch abandoned");
            entry.flight = None;
            entry.state.status = entry.before_flight;
        }
    }

    fn settle(&self, key: &QueryKey, flight: &Flight, generation: u64, result: &Result<QueryData, ApiError>) {
        let mut entries = self.entries.lock();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };

        let current = entry.generation == generation && entry.flight.as_ref().is_some_and(|f| Arc::ptr_eq(f, flight));
        if !current {
            if entry.generation != generation {
                debug!(%key, "discarding response of superseded query");
                entry.leave_loading();
            }
            return;
        }

        entry.flight = None;
        entry.state.stale = false;
        entry.state.updated_at = Some(Local::now());
        match result {
            Ok(data) => {
                entry.state.status = QueryStatus::Success;
                entry.state.data = Some(data.clone());
                entry.state.error = None;
                entry.fetched_at = Some(Instant::now());
            }
            Err(e) => {
                debug!(%key, error = %e, "query fetch failed");
                entry.state.status = QueryStatus::Error;
                entry.state.error = Some(e.clone());
            }
        }
    }

    /// Marks `prefix` and every key below it stale. Returns how many keys matched.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.entries.lock();
        let mut matched = 0;
        for (key, entry) in entries.iter_mut().filter(|(key, _)| key.starts_with(prefix)) {
            trace!(%key, "query invalidated");
            entry.generation += 1;
            entry.flight = None;
            entry.state.stale = true;
            matched += 1;
        }
        debug!(prefix = %prefix, matched, "invalidated queries");
        matched
    }

    /// Current state of `key` without triggering a fetch.
    pub fn snapshot(&self, key: &QueryKey) -> QueryState {
        self.entries.lock().get(key).map(|entry| entry.state.clone()).unwrap_or_default()
    }

    /// True when a read of `key` would be answered without a request.
    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        self.entries.lock().get(key).is_some_and(|entry| entry.fresh_data(self.stale_time).is_some())
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.lock().get(key).is_some_and(|entry| entry.state.stale)
    }

    /// Keys the cache has seen, in no particular order.
    pub fn keys(&self) -> Vec<QueryKey> {
        self.entries.lock().keys().cloned().collect()
    }
}

struct FlightGuard<'a> {
    cache: &'a QueryCache,
    key: &'a QueryKey,
    flight: Flight,
    generation: u64,
    settled: bool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.cache.abandon(self.key, &self.flight, self.generation);
        }
    }
}
