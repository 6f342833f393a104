//! Dense reconstruction of sparse records.
//!
//! Records arrive from the store in no particular order. Each one is placed directly at
//! `cadence - start`, so reconstruction is a single pass whatever the order, and cadences
//! with no record stay gapped.

use std::fmt::Display;

use tracing::trace;

use crate::{
    constants::Cadence,
    fsid_errors::TimeSeriesError,
    time_series::{DenseTimeSeries, SampleValue, SparseRecord},
};

/// Rebuild the dense series of `series_type` over `[start, end]`.
///
/// Arguments
/// -----------------
/// * `records`: Records of `series_type`, in any order. When two records share a cadence
///   the later one wins.
/// * `start`, `end`: Inclusive cadence range.
/// * `series_type`: Series the records must belong to.
///
/// Return
/// ----------
/// * The dense series, or:
///   - [`TimeSeriesError::InvalidCadenceRange`] if `end < start`,
///   - [`TimeSeriesError::CadenceOutOfRange`] for a record outside `[start, end]`,
///   - [`TimeSeriesError::SeriesTypeMismatch`] for a record of another series.
pub fn reconstruct<K, V, I>(
    records: I,
    start: Cadence,
    end: Cadence,
    series_type: K,
) -> Result<DenseTimeSeries<K, V>, TimeSeriesError>
where
    K: PartialEq + Display,
    V: SampleValue,
    I: IntoIterator<Item = SparseRecord<K, V>>,
{
    let mut series = DenseTimeSeries::gapped(series_type, start, end)?;
    let mut placed = 0_usize;

    for record in records {
        if record.series_type != *series.series_type() {
            return Err(TimeSeriesError::SeriesTypeMismatch {
                expected: series.series_type().to_string(),
                found: record.series_type.to_string(),
            });
        }
        let index = series
            .index_of(record.cadence)
            .ok_or(TimeSeriesError::CadenceOutOfRange {
                cadence: record.cadence,
                start,
                end,
            })?;
        series.place(index, record.value, record.originator);
        placed += 1;
    }

    trace!(
        series = %series.series_type(),
        start,
        end,
        placed,
        "reconstructed dense series"
    );
    Ok(series)
}
