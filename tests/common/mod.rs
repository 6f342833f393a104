#![allow(dead_code)]

use std::sync::Once;

use fsid::{
    constants::{Cadence, CcdModule, CcdOutput, MODULES, OUTPUTS},
    grammar::token::FsIdToken,
    MemoryRecordStore, RecordStore, SparseRecord, StoreError,
};
use proptest::{prelude::*, sample::select};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route library logs to the test output, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Any variant of a token table.
pub fn any_token<T: FsIdToken>() -> impl Strategy<Value = T> {
    select(T::all())
}

/// A module/output pair of the Kepler focal plane.
pub fn any_channel() -> impl Strategy<Value = (CcdModule, CcdOutput)> {
    (select(MODULES.to_vec()), select(OUTPUTS.to_vec()))
}

/// [`MemoryRecordStore`] that fails every save after the first `saves_before_failure`.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryRecordStore<String, f64>,
    pub saves_before_failure: usize,
    saves: usize,
}

impl FlakyStore {
    pub fn new(inner: MemoryRecordStore<String, f64>, saves_before_failure: usize) -> Self {
        FlakyStore {
            inner,
            saves_before_failure,
            saves: 0,
        }
    }
}

impl RecordStore for FlakyStore {
    type SeriesType = String;
    type Value = f64;

    fn save(&mut self, record: SparseRecord<String, f64>) -> Result<(), StoreError> {
        if self.saves >= self.saves_before_failure {
            return Err(StoreError::Backend("disk full".into()));
        }
        self.saves += 1;
        self.inner.save(record)
    }

    fn query(
        &self,
        series_type: &String,
        start: Cadence,
        end: Cadence,
    ) -> Result<Vec<SparseRecord<String, f64>>, StoreError> {
        self.inner.query(series_type, start, end)
    }

    fn delete(&mut self, record: &SparseRecord<String, f64>) -> Result<bool, StoreError> {
        self.inner.delete(record)
    }

    fn execute_delete_range(
        &mut self,
        series_type: &String,
        start: Cadence,
        end: Cadence,
    ) -> Result<usize, StoreError> {
        self.inner.execute_delete_range(series_type, start, end)
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        self.inner.begin()
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.inner.commit()
    }

    fn rollback(&mut self) -> Result<(), StoreError> {
        self.inner.rollback()
    }

    fn in_transaction(&self) -> bool {
        self.inner.in_transaction()
    }
}
