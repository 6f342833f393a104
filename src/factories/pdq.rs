//! Photometer data quality (`/pdq`) identifiers, keyed by reference pixel target table.
//!
//! Attitude series cover the whole focal plane; the remaining metrics are per channel.
//! Each series has an uncertainty companion whose kind carries an `Uncertainties` suffix.

use crate::{
    constants::{CcdModule, CcdOutput, TargetTableId},
    coordinates::validate_module_output,
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, token::fsid_token},
};

fsid_token! {
    /// Focal-plane level quality metric.
    pub enum PdqTimeSeriesType: "pdq time series type" {
        AttitudeSolutionRa => "AttitudeSolutionRa",
        AttitudeSolutionDec => "AttitudeSolutionDec",
        AttitudeSolutionRoll => "AttitudeSolutionRoll",
        DesiredAttitudeRa => "DesiredAttitudeRa",
        DesiredAttitudeDec => "DesiredAttitudeDec",
        DesiredAttitudeRoll => "DesiredAttitudeRoll",
        DeltaAttitudeRa => "DeltaAttitudeRa",
        DeltaAttitudeDec => "DeltaAttitudeDec",
        DeltaAttitudeRoll => "DeltaAttitudeRoll",
        MaxAttitudeResidualInPixels => "MaxAttitudeResidualInPixels",
    }
}

fsid_token! {
    /// Channel level quality metric.
    pub enum PdqModuleOutputTimeSeriesType: "pdq module output time series type" {
        BlackLevels => "BlackLevels",
        SmearLevels => "SmearLevels",
        DarkCurrents => "DarkCurrents",
        BackgroundLevels => "BackgroundLevels",
        DynamicRanges => "DynamicRanges",
        MeanFluxes => "MeanFluxes",
        CentroidsMeanRows => "CentroidsMeanRows",
        CentroidsMeanCols => "CentroidsMeanCols",
        EncircledEnergies => "EncircledEnergies",
        PlateScales => "PlateScales",
    }
}

const UNCERTAINTIES_SUFFIX: &str = "Uncertainties";

/// Identifier of a focal-plane metric: `/pdq/{type}/{targetTableId}`.
pub fn get_pdq_time_series_fsid(
    series_type: PdqTimeSeriesType,
    target_table_id: TargetTableId,
) -> Result<FsId, FsIdError> {
    compose(["pdq", series_type.as_str()], [target_table_id.to_string()])
}

/// Identifier of the uncertainties of a focal-plane metric:
/// `/pdq/{type}Uncertainties/{targetTableId}`.
pub fn get_pdq_uncertainties_fsid(
    series_type: PdqTimeSeriesType,
    target_table_id: TargetTableId,
) -> Result<FsId, FsIdError> {
    compose(
        ["pdq".to_string(), format!("{series_type}{UNCERTAINTIES_SUFFIX}")],
        [target_table_id.to_string()],
    )
}

/// Identifier of a channel metric: `/pdq/{type}/{targetTableId}/{module}:{output}`.
pub fn get_pdq_module_output_time_series_fsid(
    series_type: PdqModuleOutputTimeSeriesType,
    target_table_id: TargetTableId,
    module: CcdModule,
    output: CcdOutput,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        [
            "pdq".to_string(),
            series_type.to_string(),
            target_table_id.to_string(),
        ],
        [module.to_string(), output.to_string()],
    )
}

/// Identifier of the uncertainties of a channel metric:
/// `/pdq/{type}Uncertainties/{targetTableId}/{module}:{output}`.
pub fn get_pdq_module_output_uncertainties_fsid(
    series_type: PdqModuleOutputTimeSeriesType,
    target_table_id: TargetTableId,
    module: CcdModule,
    output: CcdOutput,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        [
            "pdq".to_string(),
            format!("{series_type}{UNCERTAINTIES_SUFFIX}"),
            target_table_id.to_string(),
        ],
        [module.to_string(), output.to_string()],
    )
}

#[cfg(test)]
mod pdq_test {
    use super::*;
    use crate::grammar::token::assert_token_table;

    #[test]
    fn test_token_tables() {
        assert_token_table::<PdqTimeSeriesType>();
        assert_token_table::<PdqModuleOutputTimeSeriesType>();
    }

    #[test]
    fn test_focal_plane_series() {
        assert_eq!(
            get_pdq_time_series_fsid(PdqTimeSeriesType::AttitudeSolutionRa, 3)
                .unwrap()
                .as_str(),
            "/pdq/AttitudeSolutionRa/3"
        );
        assert_eq!(
            get_pdq_uncertainties_fsid(PdqTimeSeriesType::AttitudeSolutionRa, 3)
                .unwrap()
                .as_str(),
            "/pdq/AttitudeSolutionRaUncertainties/3"
        );
    }

    #[test]
    fn test_channel_series() {
        assert_eq!(
            get_pdq_module_output_time_series_fsid(
                PdqModuleOutputTimeSeriesType::BlackLevels,
                3,
                2,
                1
            )
            .unwrap()
            .as_str(),
            "/pdq/BlackLevels/3/2:1"
        );
        assert_eq!(
            get_pdq_module_output_uncertainties_fsid(
                PdqModuleOutputTimeSeriesType::MeanFluxes,
                3,
                24,
                4
            )
            .unwrap()
            .as_str(),
            "/pdq/MeanFluxesUncertainties/3/24:4"
        );
        assert!(get_pdq_module_output_time_series_fsid(
            PdqModuleOutputTimeSeriesType::BlackLevels,
            3,
            5,
            1
        )
        .is_err());
    }
}
