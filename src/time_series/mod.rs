//! # Sparse and dense time series
//!
//! Per-cadence pipeline results are persisted sparsely, one record per valid cadence,
//! and handed to consumers densely, one slot per cadence of a requested range with a gap
//! flag for every cadence that has no record.
//!
//! ## Overview
//!
//! - [`DenseTimeSeries`]: the dense form, over an inclusive cadence range.
//! - [`SparseRecord`]: the stored form, one value at one cadence.
//! - [`reconstruct`](reconstruct::reconstruct): sparse records to dense series, in one
//!   pass and independent of record order.
//! - [`store`]: the record store seam and the adapter that replaces or reads back a
//!   cadence range atomically.
//!
//! Samples are `f64`, `f32` or `i32` ([`SampleValue`]). The series type `K` is any key
//! naming a logical series, typically an [`FsId`](crate::fs_id::FsId).
//!
//! ## See also
//! ------------
//! * [`store::SparseTimeSeriesStore`] – Create, remove and retrieve by cadence range.

pub mod reconstruct;
pub mod store;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Cadence, Originator, MAX_CADENCE_SPAN},
    fsid_errors::TimeSeriesError,
};

/// Element type of a time series.
pub trait SampleValue: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Value stored in gapped slots.
    const ZERO: Self;
}

impl SampleValue for f64 {
    const ZERO: Self = 0.0;
}

impl SampleValue for f32 {
    const ZERO: Self = 0.0;
}

impl SampleValue for i32 {
    const ZERO: Self = 0;
}

/// One persisted sample of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseRecord<K, V> {
    pub series_type: K,
    pub cadence: Cadence,
    pub value: V,
    /// Pipeline task that produced the value.
    pub originator: Originator,
}

impl<K, V> SparseRecord<K, V> {
    pub fn new(series_type: K, cadence: Cadence, value: V, originator: Originator) -> Self {
        SparseRecord {
            series_type,
            cadence,
            value,
            originator,
        }
    }
}

/// Number of cadences in `[start, end]`, or an error when the range is reversed or wider
/// than [`MAX_CADENCE_SPAN`].
pub(crate) fn cadence_count(start: Cadence, end: Cadence) -> Result<usize, TimeSeriesError> {
    if end < start {
        return Err(TimeSeriesError::InvalidCadenceRange { start, end });
    }
    let count = (i64::from(end) - i64::from(start) + 1) as usize;
    if count > MAX_CADENCE_SPAN {
        return Err(TimeSeriesError::CadenceRangeTooLarge {
            start,
            end,
            max: MAX_CADENCE_SPAN,
        });
    }
    Ok(count)
}

/// A series over the inclusive cadence range `[start_cadence, end_cadence]`.
///
/// `values`, `gap_indicators` and `originators` all hold exactly one entry per cadence.
/// A gapped entry holds [`SampleValue::ZERO`] and originator `0`, and is treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DenseTimeSeries<K, V> {
    series_type: K,
    start_cadence: Cadence,
    end_cadence: Cadence,
    values: Vec<V>,
    gap_indicators: Vec<bool>,
    originators: Vec<Originator>,
}

impl<K, V: SampleValue> DenseTimeSeries<K, V> {
    /// Build a series from its parallel arrays.
    ///
    /// Arguments
    /// -----------------
    /// * `series_type`: Logical series the values belong to.
    /// * `start_cadence`, `end_cadence`: Inclusive cadence range, `start <= end`.
    /// * `values`, `gap_indicators`, `originators`: One entry per cadence of the range.
    ///
    /// Return
    /// ----------
    /// * The series, with gapped entries reset to zero value and originator, or
    ///   [`TimeSeriesError::InvalidCadenceRange`] / [`TimeSeriesError::LengthMismatch`].
    pub fn new(
        series_type: K,
        start_cadence: Cadence,
        end_cadence: Cadence,
        mut values: Vec<V>,
        gap_indicators: Vec<bool>,
        mut originators: Vec<Originator>,
    ) -> Result<Self, TimeSeriesError> {
        let expected = cadence_count(start_cadence, end_cadence)?;
        if values.len() != expected
            || gap_indicators.len() != expected
            || originators.len() != expected
        {
            return Err(TimeSeriesError::LengthMismatch {
                expected,
                values: values.len(),
                gaps: gap_indicators.len(),
                originators: originators.len(),
            });
        }

        for (index, _) in gap_indicators.iter().enumerate().filter(|(_, gap)| **gap) {
            values[index] = V::ZERO;
            originators[index] = 0;
        }

        Ok(DenseTimeSeries {
            series_type,
            start_cadence,
            end_cadence,
            values,
            gap_indicators,
            originators,
        })
    }

    /// A series over `[start_cadence, end_cadence]` with every cadence gapped.
    pub fn gapped(
        series_type: K,
        start_cadence: Cadence,
        end_cadence: Cadence,
    ) -> Result<Self, TimeSeriesError> {
        let len = cadence_count(start_cadence, end_cadence)?;
        Ok(DenseTimeSeries {
            series_type,
            start_cadence,
            end_cadence,
            values: vec![V::ZERO; len],
            gap_indicators: vec![true; len],
            originators: vec![0; len],
        })
    }

    pub fn series_type(&self) -> &K {
        &self.series_type
    }

    pub fn start_cadence(&self) -> Cadence {
        self.start_cadence
    }

    pub fn end_cadence(&self) -> Cadence {
        self.end_cadence
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn gap_indicators(&self) -> &[bool] {
        &self.gap_indicators
    }

    pub fn originators(&self) -> &[Originator] {
        &self.originators
    }

    /// Number of cadences covered, gapped or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when every cadence of the range is gapped.
    pub fn is_empty(&self) -> bool {
        self.gap_indicators.iter().all(|gap| *gap)
    }

    /// Cadence stored at `index`.
    pub fn cadence_of(&self, index: usize) -> Option<Cadence> {
        (index < self.len()).then(|| self.start_cadence + index as Cadence)
    }

    /// Index of `cadence` in the arrays, if inside the range.
    pub fn index_of(&self, cadence: Cadence) -> Option<usize> {
        (self.start_cadence..=self.end_cadence)
            .contains(&cadence)
            .then(|| (i64::from(cadence) - i64::from(self.start_cadence)) as usize)
    }

    pub(crate) fn place(&mut self, index: usize, value: V, originator: Originator) {
        self.values[index] = value;
        self.gap_indicators[index] = false;
        self.originators[index] = originator;
    }

    /// Value at `cadence`, `None` when gapped or outside the range.
    pub fn value_at(&self, cadence: Cadence) -> Option<V> {
        let index = self.index_of(cadence)?;
        (!self.gap_indicators[index]).then(|| self.values[index])
    }

    /// Originator of the value at `cadence`, `None` when gapped or outside the range.
    pub fn originator_at(&self, cadence: Cadence) -> Option<Originator> {
        let index = self.index_of(cadence)?;
        (!self.gap_indicators[index]).then(|| self.originators[index])
    }

    /// Cadences holding a value, in increasing order.
    pub fn valid_cadences(&self) -> impl Iterator<Item = Cadence> + '_ {
        self.gap_indicators
            .iter()
            .enumerate()
            .filter(|(_, gap)| !**gap)
            .map(move |(index, _)| self.start_cadence + index as Cadence)
    }

    /// Values with every gap replaced by `fill`.
    pub fn fill_gaps(&self, fill: V) -> Vec<V> {
        self.values
            .iter()
            .zip(&self.gap_indicators)
            .map(|(value, gap)| if *gap { fill } else { *value })
            .collect()
    }
}

impl<K: Clone, V: SampleValue> DenseTimeSeries<K, V> {
    /// One record per non-gapped cadence, in cadence order.
    pub fn to_sparse_records(&self) -> Vec<SparseRecord<K, V>> {
        self.valid_cadences()
            .filter_map(|cadence| {
                let index = self.index_of(cadence)?;
                Some(SparseRecord::new(
                    self.series_type.clone(),
                    cadence,
                    self.values[index],
                    self.originators[index],
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod time_series_test {
    use super::*;

    fn sample() -> DenseTimeSeries<&'static str, f32> {
        DenseTimeSeries::new(
            "flux",
            10,
            14,
            vec![1.0, 9.0, 3.0, 9.0, 5.0],
            vec![false, true, false, true, false],
            vec![7, 9, 7, 9, 8],
        )
        .unwrap()
    }

    #[test]
    fn test_new_resets_gapped_entries() {
        let series = sample();
        assert_eq!(series.len(), 5);
        assert_eq!(series.values(), &[1.0, 0.0, 3.0, 0.0, 5.0]);
        assert_eq!(series.originators(), &[7, 0, 7, 0, 8]);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_new_rejects_inconsistent_arrays() {
        assert_eq!(
            DenseTimeSeries::new("flux", 10, 12, vec![1.0_f64; 3], vec![false; 2], vec![0; 3]),
            Err(TimeSeriesError::LengthMismatch {
                expected: 3,
                values: 3,
                gaps: 2,
                originators: 3,
            })
        );
        assert_eq!(
            DenseTimeSeries::<_, i32>::gapped("flux", 5, 4),
            Err(TimeSeriesError::InvalidCadenceRange { start: 5, end: 4 })
        );
    }

    #[test]
    fn test_cadence_span_is_bounded() {
        assert_eq!(cadence_count(7, 7), Ok(1));
        let last = MAX_CADENCE_SPAN as Cadence - 1;
        assert_eq!(cadence_count(0, last), Ok(MAX_CADENCE_SPAN));
        assert_eq!(
            cadence_count(0, last + 1),
            Err(TimeSeriesError::CadenceRangeTooLarge {
                start: 0,
                end: last + 1,
                max: MAX_CADENCE_SPAN,
            })
        );
        assert!(matches!(
            DenseTimeSeries::<_, f64>::gapped("flux", i32::MIN, i32::MAX),
            Err(TimeSeriesError::CadenceRangeTooLarge { .. })
        ));
    }

    #[test]
    fn test_cadence_lookup() {
        let series = sample();
        assert_eq!(series.cadence_of(0), Some(10));
        assert_eq!(series.cadence_of(4), Some(14));
        assert_eq!(series.cadence_of(5), None);
        assert_eq!(series.index_of(12), Some(2));
        assert_eq!(series.index_of(9), None);
        assert_eq!(series.value_at(12), Some(3.0));
        assert_eq!(series.value_at(11), None);
        assert_eq!(series.originator_at(14), Some(8));
        assert_eq!(series.valid_cadences().collect::<Vec<_>>(), vec![10, 12, 14]);
        assert_eq!(series.fill_gaps(f32::NAN).len(), 5);
        assert!(series.fill_gaps(-1.0).iter().filter(|v| **v == -1.0).count() == 2);
    }

    #[test]
    fn test_to_sparse_records() {
        let records = sample().to_sparse_records();
        assert_eq!(
            records,
            vec![
                SparseRecord::new("flux", 10, 1.0, 7),
                SparseRecord::new("flux", 12, 3.0, 7),
                SparseRecord::new("flux", 14, 5.0, 8),
            ]
        );
    }

    #[test]
    fn test_gapped_series() {
        let series = DenseTimeSeries::<_, f64>::gapped("flux", -2, 2).unwrap();
        assert_eq!(series.len(), 5);
        assert!(series.is_empty());
        assert_eq!(series.cadence_of(0), Some(-2));
        assert_eq!(series.valid_cadences().count(), 0);
    }
}
