//! # Constants and type definitions for fsid
//!
//! This module centralizes the **focal-plane geometry**, the **identifier separators**, and the
//! **common type aliases** used throughout the `fsid` library.
//!
//! ## Overview
//!
//! - CCD geometry of the focal plane (imaging area, black columns, smear rows)
//! - Module/output layout (21 science modules, 4 outputs each, 84 channels)
//! - Reserved characters of the FsId grammar
//! - Core type aliases used across the crate
//!
//! All pixel coordinates in this crate are **zero-based**.

// -------------------------------------------------------------------------------------------------
// CCD geometry
// -------------------------------------------------------------------------------------------------

/// Number of exposed (imaging) rows of one CCD output
pub const N_ROWS_IMAGING: u32 = 1024;

/// Number of exposed (imaging) columns of one CCD output
pub const N_COLS_IMAGING: u32 = 1100;

/// Leading black (serial over-clock) columns
pub const N_LEADING_BLACK: u32 = 12;

/// Trailing black columns
pub const N_TRAILING_BLACK: u32 = 20;

/// Virtual smear rows, read out after the imaging area
pub const N_VIRTUAL_SMEAR: u32 = 26;

/// Masked smear rows, shielded rows before the imaging area
pub const N_MASKED_SMEAR: u32 = 20;

/// Total rows in accumulation memory
pub const CCD_ROWS: u32 = N_MASKED_SMEAR + N_ROWS_IMAGING + N_VIRTUAL_SMEAR;

/// Total columns in accumulation memory
pub const CCD_COLUMNS: u32 = N_LEADING_BLACK + N_COLS_IMAGING + N_TRAILING_BLACK;

/// First imaging row (zero-based)
pub const SCIENCE_ROW_START: u32 = N_MASKED_SMEAR;

/// First imaging column (zero-based)
pub const SCIENCE_COLUMN_START: u32 = N_LEADING_BLACK;

// -------------------------------------------------------------------------------------------------
// Module / output layout
// -------------------------------------------------------------------------------------------------

/// Science modules present on the focal plane. The four corner spots (1, 5, 21, 25) hold
/// fine guidance sensors and never produce pixel data.
pub const MODULES: [CcdModule; 21] = [
    2, 3, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 22, 23, 24,
];

/// Readout outputs per module
pub const OUTPUTS_PER_MODULE: u32 = 4;

/// Valid readout outputs
pub const OUTPUTS: [CcdOutput; 4] = [1, 2, 3, 4];

/// Number of module/output pairs, i.e. channels
pub const MODULE_OUTPUTS: u32 = MODULES.len() as u32 * OUTPUTS_PER_MODULE;

// -------------------------------------------------------------------------------------------------
// FsId grammar
// -------------------------------------------------------------------------------------------------

/// Separator between path segments, also the separator between the path and the name
pub const PATH_SEPARATOR: char = '/';

/// Separator between name tokens; never allowed inside a path segment or a token string
pub const NAME_SEPARATOR: char = ':';

// -------------------------------------------------------------------------------------------------
// Time series
// -------------------------------------------------------------------------------------------------

/// Largest number of cadences a dense series may span (2^24, several times the short
/// cadences of the whole mission)
pub const MAX_CADENCE_SPAN: usize = 1 << 24;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// CCD module number (2..=24, without corners)
pub type CcdModule = u32;
/// CCD output number (1..=4)
pub type CcdOutput = u32;
/// Zero-based CCD row
pub type CcdRow = u32;
/// Zero-based CCD column
pub type CcdColumn = u32;
/// Absolute cadence number
pub type Cadence = i32;
/// Identifier of the pipeline process that produced a sample
pub type Originator = i64;
/// Kepler Input Catalog identifier of a target
pub type KeplerId = u32;
/// Pipeline instance identifier
pub type PipelineInstanceId = u64;
/// Pipeline task identifier
pub type PipelineTaskId = u64;
/// Target table identifier
pub type TargetTableId = u32;
