//! # Name Index Service
//!
//! Application service answering name queries against one store snapshot.
//!
//! Every query runs the same pipeline:
//!
//! 1. availability gate (`NotReady` while syncing)
//! 2. argument validation (`InvalidArgument`, before any record is read)
//! 3. snapshot acquisition, which fixes the height for the whole query
//! 4. enumeration, filtering, then pagination or stats

use std::sync::Arc;
use tracing::{debug, warn};

use crate::algorithms::{
    ExpirationPolicy, PaginationWindow, PatternFilter, RecencyFilter, StatsAggregator,
};
use crate::application::gate::AvailabilityGate;
use crate::config::NameIndexConfig;
use crate::domain::{
    FilterOutcome, FilterRequest, NameEntry, NameIndexError, NameKey, NameRecord, OutputMode,
    QueryContext, ScanRequest,
};
use crate::ports::inbound::NameIndexApi;
use crate::ports::outbound::{NameRecordStore, NameSnapshot, SyncStateProvider};

/// Name Index Service - orchestrates name queries.
pub struct NameIndexService<S: NameRecordStore, Y: SyncStateProvider> {
    /// Configuration.
    config: NameIndexConfig,
    /// Record store.
    store: Arc<S>,
    /// Sync gate shared by all entry points.
    gate: AvailabilityGate<Y>,
    /// Expiration evaluation.
    expiration: ExpirationPolicy,
}

impl<S: NameRecordStore, Y: SyncStateProvider> NameIndexService<S, Y> {
    /// Create a new service.
    pub fn new(config: NameIndexConfig, store: Arc<S>, sync: Y) -> Self {
        let expiration = ExpirationPolicy::new(config.expiration.clone());
        Self {
            config,
            store,
            gate: AvailabilityGate::new(sync),
            expiration,
        }
    }

    /// Internal: bind one snapshot and the context derived from it.
    fn bind(&self) -> Result<(Arc<NameSnapshot>, QueryContext), NameIndexError> {
        let snapshot = self.store.snapshot()?;
        let ctx = QueryContext {
            height: snapshot.height,
        };
        Ok((snapshot, ctx))
    }

    /// Internal: render a record at the query height.
    fn entry(&self, record: &NameRecord, ctx: &QueryContext) -> NameEntry {
        NameEntry::from_record(record, self.expiration.evaluate(record, ctx.height))
    }
}

impl<S: NameRecordStore, Y: SyncStateProvider> NameIndexApi for NameIndexService<S, Y> {
    fn check_ready(&self, operation: &str) -> Result<(), NameIndexError> {
        self.gate.check(operation)
    }

    fn name_show(&self, name: &str) -> Result<NameEntry, NameIndexError> {
        self.gate.check("name_show")?;
        let (snapshot, ctx) = self.bind()?;

        let key = NameKey::from(name);
        let record = snapshot
            .index
            .get(&key)
            .ok_or_else(|| NameIndexError::NameNotFound(name.to_string()))?;

        debug!("[qc-18] name_show '{}' at height {}", name, ctx.height);
        Ok(self.entry(record, &ctx))
    }

    fn name_history(&self, name: &str) -> Result<Vec<NameEntry>, NameIndexError> {
        self.gate.check("name_history")?;
        if !self.config.history_enabled {
            return Err(NameIndexError::HistoryDisabled);
        }
        let (snapshot, ctx) = self.bind()?;

        let key = NameKey::from(name);
        let current = snapshot
            .index
            .get(&key)
            .ok_or_else(|| NameIndexError::NameNotFound(name.to_string()))?;

        let entries: Vec<NameEntry> = snapshot
            .history_of(&key)
            .iter()
            .chain(std::iter::once(current))
            .map(|record| self.entry(record, &ctx))
            .collect();

        debug!(
            "[qc-18] name_history '{}' at height {}: {} entries",
            name,
            ctx.height,
            entries.len()
        );
        Ok(entries)
    }

    fn name_scan(&self, request: &ScanRequest) -> Result<Vec<NameEntry>, NameIndexError> {
        self.gate.check("name_scan")?;
        let max_count = request
            .max_count
            .unwrap_or_else(|| i64::try_from(self.config.default_scan_count).unwrap_or(i64::MAX));
        let start = request.start.as_deref().map(NameKey::from);
        let (snapshot, ctx) = self.bind()?;

        let entries: Vec<NameEntry> = snapshot
            .index
            .scan(start.as_ref(), max_count)
            .into_iter()
            .map(|record| self.entry(record, &ctx))
            .collect();

        debug!(
            "[qc-18] name_scan start={:?} count={} at height {}: {} entries",
            start,
            max_count,
            ctx.height,
            entries.len()
        );
        Ok(entries)
    }

    fn name_filter(&self, request: &FilterRequest) -> Result<FilterOutcome, NameIndexError> {
        self.gate.check("name_filter")?;
        let (pattern, window) = PatternFilter::compile(request.pattern.as_deref())
            .and_then(|pattern| {
                let window = PaginationWindow::from_request(request.offset, request.limit)?;
                Ok((pattern, window))
            })
            .inspect_err(|e| warn!("[qc-18] Rejected name_filter: {}", e))?;
        let recency = RecencyFilter::new(request.max_age);
        let (snapshot, ctx) = self.bind()?;

        let matching = snapshot
            .index
            .iter()
            .filter(|record| recency.matches(record, ctx.height))
            .filter(|record| pattern.matches(record));

        let outcome = match request.mode {
            OutputMode::Stat => FilterOutcome::Stats(StatsAggregator::stats(matching, ctx.height)),
            OutputMode::List => FilterOutcome::List(
                window
                    .apply(matching)
                    .map(|record| self.entry(record, &ctx))
                    .collect(),
            ),
        };

        debug!(
            "[qc-18] name_filter pattern={:?} max_age={} offset={} limit={} mode={:?} at height {}",
            request.pattern, request.max_age, request.offset, request.limit, request.mode, ctx.height
        );
        Ok(outcome)
    }
}
