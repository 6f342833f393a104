//! Hierarchical identifiers for the Kepler science archive and the sparse time-series
//! layer stored under them.
//!
//! - [`factories`] build an [`FsId`] for every artifact a pipeline module writes.
//! - [`parser`] recovers typed coordinates from pixel, collateral and row-addressed ids.
//! - [`time_series`] persists dense per-cadence series sparsely and reads them back.

pub mod constants;
pub mod coordinates;
pub mod factories;
pub mod fs_id;
pub mod fsid_errors;
pub mod grammar;
pub mod parser;
pub mod time_series;

pub use coordinates::{FocalPlaneLimits, FocalPlaneLimitsBuilder};
pub use fs_id::FsId;
pub use fsid_errors::{FsIdError, StoreError, TimeSeriesError};
pub use time_series::{
    store::{MemoryRecordStore, RecordStore, SparseTimeSeriesStore},
    DenseTimeSeries, SampleValue, SparseRecord,
};
