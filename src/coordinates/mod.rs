//! # Coordinate validation
//!
//! Pure range checks for detector coordinates, shared by every encode and every decode path.
//!
//! ## Overview
//!
//! - [`kinds`]: enumerated coordinates shared across subsystems (cadence, target, collateral
//!   and flux types).
//! - [`limits`]: [`FocalPlaneLimits`], the ranges coordinates are checked against.
//! - free functions ([`validate_pixel`], [`validate_collateral`], [`validate_module_output`])
//!   checking against a process-wide default instance of the limits.
//! - channel numbering ([`channel_number`], [`module_output`]) and science-region predicates.
//!
//! Validation never clamps: an out-of-range value is reported as
//! [`FsIdError::InvalidCoordinate`] with the field name and value.

pub mod kinds;
pub mod limits;

use once_cell::sync::Lazy;

use crate::{
    constants::{
        CcdColumn, CcdModule, CcdOutput, CcdRow, MODULES, MODULE_OUTPUTS, N_COLS_IMAGING,
        N_ROWS_IMAGING, OUTPUTS_PER_MODULE, SCIENCE_COLUMN_START, SCIENCE_ROW_START,
    },
    fsid_errors::FsIdError,
};

pub use kinds::{CadenceType, CollateralType, CosmicRayMetricType, FluxType, TargetType};
pub use limits::{CoordinateRange, FocalPlaneLimits, FocalPlaneLimitsBuilder};

static DEFAULT_LIMITS: Lazy<FocalPlaneLimits> = Lazy::new(FocalPlaneLimits::default);

/// The Kepler focal-plane limits used by the factories and the parser.
pub fn default_limits() -> &'static FocalPlaneLimits {
    &DEFAULT_LIMITS
}

/// Check a pixel coordinate against the default limits.
///
/// See also
/// ------------
/// * [`FocalPlaneLimits::validate_pixel`] – Same check against caller-supplied limits.
pub fn validate_pixel(
    target_type: TargetType,
    module: CcdModule,
    output: CcdOutput,
    row: CcdRow,
    column: CcdColumn,
) -> Result<(), FsIdError> {
    DEFAULT_LIMITS.validate_pixel(target_type, module, output, row, column)
}

/// Check a collateral coordinate against the default limits.
///
/// See also
/// ------------
/// * [`FocalPlaneLimits::validate_collateral`] – Same check against caller-supplied limits.
pub fn validate_collateral(
    collateral_type: CollateralType,
    module: CcdModule,
    output: CcdOutput,
    offset: u32,
) -> Result<(), FsIdError> {
    DEFAULT_LIMITS.validate_collateral(collateral_type, module, output, offset)
}

/// Check a module/output pair against the default limits.
pub fn validate_module_output(module: CcdModule, output: CcdOutput) -> Result<(), FsIdError> {
    DEFAULT_LIMITS.validate_module_output(module, output)
}

/// Channel number (1..=84) of a module/output pair.
///
/// Channels are numbered module by module, in the order of [`MODULES`], four outputs each:
/// module 2 output 1 is channel 1, module 24 output 4 is channel 84.
pub fn channel_number(module: CcdModule, output: CcdOutput) -> Result<u32, FsIdError> {
    let index = MODULES
        .iter()
        .position(|&m| m == module)
        .ok_or_else(|| FsIdError::invalid_coordinate("module", module))?;
    if !(1..=OUTPUTS_PER_MODULE).contains(&output) {
        return Err(FsIdError::invalid_coordinate("output", output));
    }
    Ok(index as u32 * OUTPUTS_PER_MODULE + output)
}

/// Module/output pair of a channel number, inverse of [`channel_number`].
pub fn module_output(channel: u32) -> Result<(CcdModule, CcdOutput), FsIdError> {
    if !(1..=MODULE_OUTPUTS).contains(&channel) {
        return Err(FsIdError::invalid_coordinate("channel", channel));
    }
    let index = (channel - 1) / OUTPUTS_PER_MODULE;
    let output = (channel - 1) % OUTPUTS_PER_MODULE + 1;
    Ok((MODULES[index as usize], output))
}

/// True if `row` lies in the imaging area, between the masked and virtual smear rows.
pub fn is_science_row(row: CcdRow) -> bool {
    (SCIENCE_ROW_START..SCIENCE_ROW_START + N_ROWS_IMAGING).contains(&row)
}

/// True if `column` lies in the imaging area, between the leading and trailing black.
pub fn is_science_column(column: CcdColumn) -> bool {
    (SCIENCE_COLUMN_START..SCIENCE_COLUMN_START + N_COLS_IMAGING).contains(&column)
}

#[cfg(test)]
mod validator_test {
    use super::*;

    #[test]
    fn test_free_functions_use_default_limits() {
        assert!(validate_pixel(TargetType::Background, 2, 1, 50, 60).is_ok());
        assert!(validate_pixel(TargetType::Background, 26, 1, 50, 60).is_err());
        assert!(validate_collateral(CollateralType::BlackLevel, 13, 3, 1069).is_ok());
        assert!(validate_module_output(24, 4).is_ok());
        assert!(validate_module_output(24, 5).is_err());
    }

    #[test]
    fn test_channel_numbers() {
        assert_eq!(channel_number(2, 1).unwrap(), 1);
        assert_eq!(channel_number(2, 4).unwrap(), 4);
        assert_eq!(channel_number(3, 1).unwrap(), 5);
        assert_eq!(channel_number(24, 4).unwrap(), 84);
        assert!(channel_number(5, 1).is_err());
        assert!(channel_number(2, 0).is_err());

        for channel in 1..=84 {
            let (m, o) = module_output(channel).unwrap();
            assert_eq!(channel_number(m, o).unwrap(), channel);
        }
        assert!(module_output(0).is_err());
        assert!(module_output(85).is_err());
    }

    #[test]
    fn test_science_region() {
        assert!(!is_science_row(19));
        assert!(is_science_row(20));
        assert!(is_science_row(1043));
        assert!(!is_science_row(1044));

        assert!(!is_science_column(11));
        assert!(is_science_column(12));
        assert!(is_science_column(1111));
        assert!(!is_science_column(1112));
    }
}
