//! Record store seam and the sparse time-series adapter built on it.
//!
//! ## Overview
//!
//! [`RecordStore`] is the interface of the persistence layer: keyed records, range
//! queries and deletes, and a single level of transaction. [`MemoryRecordStore`] is the
//! bundled in-memory implementation.
//!
//! [`SparseTimeSeriesStore`] maps dense series onto a record store:
//!
//! - [`create`](SparseTimeSeriesStore::create) replaces a cadence range of one series in a
//!   single transaction, so readers see either the old range or the new one,
//! - [`remove`](SparseTimeSeriesStore::remove) deletes a cadence range,
//! - [`retrieve`](SparseTimeSeriesStore::retrieve) reads a range back densely, gapping
//!   every cadence without a record.
//!
//! Writers of the same series and range must be serialized by the caller.

use std::{collections::HashMap, fmt::Display, hash::Hash};

use ahash::RandomState;
use tracing::{debug, warn};

use crate::{
    constants::{Cadence, Originator},
    fsid_errors::{StoreError, TimeSeriesError},
    time_series::{
        cadence_count, reconstruct::reconstruct, DenseTimeSeries, SampleValue, SparseRecord,
    },
};

/// Persistence layer holding sparse records, keyed by `(series_type, cadence)`.
///
/// Saving a record whose key already exists overwrites it. Query results carry no order.
pub trait RecordStore {
    type SeriesType: Clone + Eq + Hash + Display;
    type Value: SampleValue;

    /// Insert or overwrite one record.
    fn save(
        &mut self,
        record: SparseRecord<Self::SeriesType, Self::Value>,
    ) -> Result<(), StoreError>;

    /// Every record of `series_type` with a cadence in `[start, end]`.
    fn query(
        &self,
        series_type: &Self::SeriesType,
        start: Cadence,
        end: Cadence,
    ) -> Result<Vec<SparseRecord<Self::SeriesType, Self::Value>>, StoreError>;

    /// Delete the record at the key of `record`. Returns whether one existed.
    fn delete(
        &mut self,
        record: &SparseRecord<Self::SeriesType, Self::Value>,
    ) -> Result<bool, StoreError>;

    /// Bulk delete of `series_type` over `[start, end]`. Returns the number of records removed.
    fn execute_delete_range(
        &mut self,
        series_type: &Self::SeriesType,
        start: Cadence,
        end: Cadence,
    ) -> Result<usize, StoreError>;

    fn begin(&mut self) -> Result<(), StoreError>;

    fn commit(&mut self) -> Result<(), StoreError>;

    fn rollback(&mut self) -> Result<(), StoreError>;

    /// True between a successful [`begin`](RecordStore::begin) and the matching commit or
    /// rollback.
    fn in_transaction(&self) -> bool;
}

type CadenceMap<V> = HashMap<Cadence, (V, Originator), RandomState>;
type SeriesMap<K, V> = HashMap<K, CadenceMap<V>, RandomState>;

/// In-memory [`RecordStore`].
///
/// Records are grouped by series type. A transaction snapshots the whole content on
/// [`begin`](RecordStore::begin) and restores it on [`rollback`](RecordStore::rollback).
/// Writes outside a transaction apply immediately.
#[derive(Debug, Clone)]
pub struct MemoryRecordStore<K, V> {
    series: SeriesMap<K, V>,
    snapshot: Option<SeriesMap<K, V>>,
}

impl<K, V> Default for MemoryRecordStore<K, V> {
    fn default() -> Self {
        MemoryRecordStore {
            series: HashMap::with_hasher(RandomState::default()),
            snapshot: None,
        }
    }
}

impl<K: Clone + Eq + Hash + Display, V: SampleValue> MemoryRecordStore<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records, all series included.
    pub fn len(&self) -> usize {
        self.series.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Clone + Eq + Hash + Display, V: SampleValue> RecordStore for MemoryRecordStore<K, V> {
    type SeriesType = K;
    type Value = V;

    fn save(&mut self, record: SparseRecord<K, V>) -> Result<(), StoreError> {
        self.series
            .entry(record.series_type)
            .or_default()
            .insert(record.cadence, (record.value, record.originator));
        Ok(())
    }

    fn query(
        &self,
        series_type: &K,
        start: Cadence,
        end: Cadence,
    ) -> Result<Vec<SparseRecord<K, V>>, StoreError> {
        let Some(cadences) = self.series.get(series_type) else {
            return Ok(Vec::new());
        };
        Ok(cadences
            .iter()
            .filter(|(cadence, _)| (start..=end).contains(*cadence))
            .map(|(cadence, (value, originator))| {
                SparseRecord::new(series_type.clone(), *cadence, *value, *originator)
            })
            .collect())
    }

    fn delete(&mut self, record: &SparseRecord<K, V>) -> Result<bool, StoreError> {
        Ok(self
            .series
            .get_mut(&record.series_type)
            .and_then(|cadences| cadences.remove(&record.cadence))
            .is_some())
    }

    fn execute_delete_range(
        &mut self,
        series_type: &K,
        start: Cadence,
        end: Cadence,
    ) -> Result<usize, StoreError> {
        let Some(cadences) = self.series.get_mut(series_type) else {
            return Ok(0);
        };
        let before = cadences.len();
        cadences.retain(|cadence, _| !(start..=end).contains(cadence));
        let removed = before - cadences.len();
        if cadences.is_empty() {
            self.series.remove(series_type);
        }
        Ok(removed)
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        if self.snapshot.is_some() {
            return Err(StoreError::TransactionAlreadyOpen);
        }
        self.snapshot = Some(self.series.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or(StoreError::NoTransaction)
    }

    fn rollback(&mut self) -> Result<(), StoreError> {
        let snapshot = self.snapshot.take().ok_or(StoreError::NoTransaction)?;
        self.series = snapshot;
        Ok(())
    }

    fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }
}

/// Dense view of a [`RecordStore`].
#[derive(Debug, Clone, Default)]
pub struct SparseTimeSeriesStore<S> {
    store: S,
}

impl<S: RecordStore> SparseTimeSeriesStore<S> {
    pub fn new(store: S) -> Self {
        SparseTimeSeriesStore { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct access to the record store, e.g. to open a transaction spanning several
    /// [`create`](Self::create) calls.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Replace the range of `series` in the store with its non-gapped cadences.
    ///
    /// Every existing record of the series type in `[start, end]` is deleted, then one
    /// record is saved per non-gapped cadence, inside one store transaction.
    ///
    /// If the store already has an open transaction, the replacement joins it: nothing is
    /// committed or rolled back here, and the caller's commit or rollback decides the
    /// outcome of the whole unit of work.
    ///
    /// Return
    /// ----------
    /// * The number of records saved.
    /// * [`TimeSeriesError::Store`] if a transaction could not be opened.
    /// * [`TimeSeriesError::RangeReplacementConflict`] if any later step failed. A
    ///   transaction opened here has been rolled back and the previous records are intact.
    ///   A joined transaction is left open for the caller to roll back.
    pub fn create(
        &mut self,
        series: &DenseTimeSeries<S::SeriesType, S::Value>,
    ) -> Result<usize, TimeSeriesError> {
        let series_type = series.series_type();
        let (start, end) = (series.start_cadence(), series.end_cadence());

        let owns_transaction = !self.store.in_transaction();
        if owns_transaction {
            self.store.begin()?;
        }
        let outcome = self.replace_range(series).and_then(|counts| {
            if owns_transaction {
                self.store.commit()?;
            }
            Ok(counts)
        });
        match outcome {
            Ok((deleted, saved)) => {
                debug!(
                    series = %series_type,
                    start,
                    end,
                    deleted,
                    saved,
                    joined = !owns_transaction,
                    "replaced series range"
                );
                Ok(saved)
            }
            Err(source) => {
                warn!(
                    series = %series_type,
                    start,
                    end,
                    error = %source,
                    joined = !owns_transaction,
                    "series range replacement failed"
                );
                if owns_transaction {
                    if let Err(rollback_error) = self.store.rollback() {
                        warn!(error = %rollback_error, "rollback failed");
                    }
                }
                Err(TimeSeriesError::RangeReplacementConflict {
                    series: series_type.to_string(),
                    start,
                    end,
                    source,
                })
            }
        }
    }

    fn replace_range(
        &mut self,
        series: &DenseTimeSeries<S::SeriesType, S::Value>,
    ) -> Result<(usize, usize), StoreError> {
        let deleted = self.store.execute_delete_range(
            series.series_type(),
            series.start_cadence(),
            series.end_cadence(),
        )?;
        let records = series.to_sparse_records();
        let saved = records.len();
        for record in records {
            self.store.save(record)?;
        }
        Ok((deleted, saved))
    }

    /// Delete every record of `series_type` in `[start, end]`.
    ///
    /// Return
    /// ----------
    /// * The number of records removed.
    pub fn remove(
        &mut self,
        start: Cadence,
        end: Cadence,
        series_type: &S::SeriesType,
    ) -> Result<usize, TimeSeriesError> {
        cadence_count(start, end)?;
        let removed = self.store.execute_delete_range(series_type, start, end)?;
        debug!(series = %series_type, start, end, removed, "removed series range");
        Ok(removed)
    }

    /// Read `[start, end]` of `series_type` back as a dense series.
    ///
    /// Cadences without a record are gapped, so an unknown series reads back as a fully
    /// gapped series of `end - start + 1` cadences.
    pub fn retrieve(
        &self,
        series_type: &S::SeriesType,
        start: Cadence,
        end: Cadence,
    ) -> Result<DenseTimeSeries<S::SeriesType, S::Value>, TimeSeriesError> {
        cadence_count(start, end)?;
        let records = self.store.query(series_type, start, end)?;
        let found = records.len();
        let series = reconstruct(records, start, end, series_type.clone())?;
        debug!(series = %series_type, start, end, found, "retrieved series range");
        Ok(series)
    }
}
