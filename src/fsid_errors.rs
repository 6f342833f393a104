use thiserror::Error;

/// Failures of identifier construction, validation and parsing.
///
/// None of these are retryable: a malformed coordinate or identifier stays malformed.
/// Every variant carries the offending field or string so a producer bug can be traced
/// from the message alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsIdError {
    #[error("Invalid coordinate: {field} = {value}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("Unrecognized {kind} string: {value:?}")]
    UnrecognizedEnumString { kind: &'static str, value: String },

    #[error("Malformed {family} identifier: {fsid:?}")]
    MalformedIdentifier { family: &'static str, fsid: String },

    #[error("Required argument not supplied: {0}")]
    NullRequiredArgument(&'static str),

    #[error("Invalid FsId segment {segment:?}: {reason}")]
    InvalidSegment { segment: String, reason: &'static str },

    #[error("Invalid focal plane limits: {0}")]
    InvalidLimits(String),
}

impl FsIdError {
    pub(crate) fn invalid_coordinate(field: &'static str, value: impl ToString) -> Self {
        FsIdError::InvalidCoordinate {
            field,
            value: value.to_string(),
        }
    }
}

/// Errors raised by a [`RecordStore`](crate::time_series::store::RecordStore) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No transaction is open")]
    NoTransaction,

    #[error("A transaction is already open")]
    TransactionAlreadyOpen,

    #[error("Record store failure: {0}")]
    Backend(String),
}

/// Failures of dense time-series construction, reconstruction and persistence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeSeriesError {
    #[error("Invalid cadence range: start {start} > end {end}")]
    InvalidCadenceRange { start: i32, end: i32 },

    #[error("Cadence range [{start}, {end}] spans more than {max} cadences")]
    CadenceRangeTooLarge { start: i32, end: i32, max: usize },

    #[error(
        "Array lengths do not match the cadence range (expected {expected}, values {values}, gaps {gaps}, originators {originators})"
    )]
    LengthMismatch {
        expected: usize,
        values: usize,
        gaps: usize,
        originators: usize,
    },

    #[error("Record at cadence {cadence} lies outside [{start}, {end}]")]
    CadenceOutOfRange { cadence: i32, start: i32, end: i32 },

    #[error("Record of series {found} handed to reconstruction of series {expected}")]
    SeriesTypeMismatch { expected: String, found: String },

    #[error("Replacing {series} over [{start}, {end}] did not complete: {source}")]
    RangeReplacementConflict {
        series: String,
        start: i32,
        end: i32,
        #[source]
        source: StoreError,
    },

    #[error("Record store error: {0}")]
    Store(#[from] StoreError),
}
