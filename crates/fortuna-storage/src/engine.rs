//! HistoryEngine: owns the ConnectionPool and implements IHistoryStore.

use std::path::Path;
use std::sync::Arc;

use chrono::{Days, NaiveDate, NaiveDateTime};
use rusqlite::Connection;

use fortuna_core::config::StorageConfig;
use fortuna_core::errors::FortunaResult;
use fortuna_core::models::{ItemCount, SelectionRecord};
use fortuna_core::traits::{Clock, IHistoryStore, SystemClock};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{aggregation, selection_ops};

/// The selection history store. Dates for `query_recent` are resolved
/// against `clock`, which defaults to local system time.
pub struct HistoryEngine {
    pool: ConnectionPool,
    clock: Arc<dyn Clock>,
}

impl HistoryEngine {
    /// Open a store backed by a file on disk with default settings.
    pub fn open(path: &Path) -> FortunaResult<Self> {
        let config = StorageConfig {
            db_path: path.display().to_string(),
            ..StorageConfig::default()
        };
        Self::open_with_config(&config)
    }

    /// Open a file-backed store as described by `[storage]`.
    pub fn open_with_config(config: &StorageConfig) -> FortunaResult<Self> {
        let path = Path::new(&config.db_path);
        let mut pool = ConnectionPool::open(path, config.busy_timeout_ms)?;
        pool.writer.with_conn(migrations::run_migrations)?;
        pool.attach_readers(config.read_pool_size, config.busy_timeout_ms)?;
        tracing::debug!(db_path = %config.db_path, "history store opened");
        Ok(Self {
            pool,
            clock: Arc::new(SystemClock),
        })
    }

    /// Open an in-memory store (for testing). All reads go through the writer.
    pub fn open_in_memory() -> FortunaResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        pool.writer.with_conn(migrations::run_migrations)?;
        Ok(Self {
            pool,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used to resolve "today".
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Current schema version.
    pub fn schema_version(&self) -> FortunaResult<u32> {
        self.with_reader(migrations::current_version)
    }

    /// Read through the pool when one is attached, otherwise through the writer.
    fn with_reader<F, T>(&self, f: F) -> FortunaResult<T>
    where
        F: FnOnce(&Connection) -> FortunaResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IHistoryStore for HistoryEngine {
    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn record_selection(
        &self,
        item: &str,
        date: NaiveDate,
        timestamp: NaiveDateTime,
    ) -> FortunaResult<i64> {
        self.pool
            .writer
            .with_conn(|conn| selection_ops::insert_selection(conn, item, date, timestamp))
    }

    fn delete_by_date(&self, date: NaiveDate) -> FortunaResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| selection_ops::delete_by_date(conn, date))
    }

    fn upsert_for_date(
        &self,
        item: &str,
        date: NaiveDate,
        timestamp: NaiveDateTime,
    ) -> FortunaResult<Vec<SelectionRecord>> {
        let superseded = self
            .pool
            .writer
            .with_conn(|conn| selection_ops::upsert_for_date(conn, item, date, timestamp))?;
        if !superseded.is_empty() {
            tracing::debug!(
                date = %date,
                item = %item,
                superseded = superseded.len(),
                "replaced existing selection for date"
            );
        }
        Ok(superseded)
    }

    fn find_by_date(&self, date: NaiveDate) -> FortunaResult<Option<SelectionRecord>> {
        let records = self.with_reader(|conn| selection_ops::get_by_date(conn, date))?;
        Ok(records.into_iter().next())
    }

    fn query_recent(&self, days_back: u32) -> FortunaResult<Vec<SelectionRecord>> {
        let today = self.clock.today();
        let cutoff = today
            .checked_sub_days(Days::new(u64::from(days_back)))
            .unwrap_or(NaiveDate::MIN);
        self.query_since(cutoff)
    }

    fn query_since(&self, cutoff: NaiveDate) -> FortunaResult<Vec<SelectionRecord>> {
        self.with_reader(|conn| selection_ops::query_since(conn, cutoff))
    }

    fn count_by_item(&self) -> FortunaResult<Vec<ItemCount>> {
        self.with_reader(aggregation::count_by_item)
    }

    fn count_all(&self) -> FortunaResult<usize> {
        self.with_reader(aggregation::count_all)
    }
}
