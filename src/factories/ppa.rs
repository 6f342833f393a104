//! Photometer performance assessment (`/ppa`) identifiers: attitude covariance, channel
//! trends and CDPP statistics per magnitude and duration bucket.

use crate::{
    constants::{CcdModule, CcdOutput},
    coordinates::validate_module_output,
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, token::fsid_token},
};

fsid_token! {
    /// Focal-plane level attitude series.
    pub enum PpaTimeSeriesType: "ppa time series type" {
        CovarianceMatrix11 => "CovarianceMatrix11",
        CovarianceMatrix12 => "CovarianceMatrix12",
        CovarianceMatrix13 => "CovarianceMatrix13",
        CovarianceMatrix22 => "CovarianceMatrix22",
        CovarianceMatrix23 => "CovarianceMatrix23",
        CovarianceMatrix33 => "CovarianceMatrix33",
        MaxAttitudeFocalPlaneResidual => "MaxAttitudeFocalPlaneResidual",
    }
}

fsid_token! {
    /// Channel level trend.
    pub enum PpaModuleOutputTimeSeriesType: "ppa module output time series type" {
        BlackLevel => "BlackLevel",
        SmearLevel => "SmearLevel",
        DarkCurrent => "DarkCurrent",
        Brightness => "Brightness",
        EncircledEnergy => "EncircledEnergy",
        BackgroundLevel => "BackgroundLevel",
        CentroidsMeanRow => "CentroidsMeanRow",
        CentroidsMeanColumn => "CentroidsMeanColumn",
        PlateScale => "PlateScale",
        PlateScaleUncertainties => "PlateScaleUncertainties",
        TheoreticalCompressionEfficiency => "TheoreticalCompressionEfficiency",
        AchievedCompressionEfficiency => "AchievedCompressionEfficiency",
    }
}

fsid_token! {
    /// CDPP statistic of a channel, per magnitude and duration bucket.
    pub enum PpaCdppTimeSeriesType: "ppa cdpp time series type" {
        CdppMeasuredValues => "CdppMeasuredValues",
        CdppMeasuredUncertainties => "CdppMeasuredUncertainties",
        CdppExpectedValues => "CdppExpectedValues",
        CdppExpectedUncertainties => "CdppExpectedUncertainties",
        CdppRatioValues => "CdppRatioValues",
        CdppRatioUncertainties => "CdppRatioUncertainties",
    }
}

/// Identifier of a focal-plane series: `/ppa/{type}`, e.g. `/ppa/CovarianceMatrix11`.
///
/// The whole identifier is a single name under `/ppa`.
pub fn get_time_series_fsid(series_type: PpaTimeSeriesType) -> Result<FsId, FsIdError> {
    compose(["ppa"], [series_type.as_str()])
}

/// Identifier of a channel trend: `/ppa/{type}/{module}:{output}`.
pub fn get_module_output_time_series_fsid(
    series_type: PpaModuleOutputTimeSeriesType,
    module: CcdModule,
    output: CcdOutput,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        ["ppa", series_type.as_str()],
        [module.to_string(), output.to_string()],
    )
}

/// Identifier of a CDPP statistic of a channel.
///
/// Arguments
/// -----------------
/// * `series_type`: Statistic.
/// * `module`, `output`: CCD channel.
/// * `magnitude`: Kepler magnitude bucket (e.g. 12).
/// * `hours`: Transit duration bucket in hours (e.g. 6).
///
/// Return
/// ----------
/// * `/ppa/{type}/{module}:{output}:{magnitude}:{hours}`.
pub fn get_cdpp_time_series_fsid(
    series_type: PpaCdppTimeSeriesType,
    module: CcdModule,
    output: CcdOutput,
    magnitude: u32,
    hours: u32,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        ["ppa", series_type.as_str()],
        [
            module.to_string(),
            output.to_string(),
            magnitude.to_string(),
            hours.to_string(),
        ],
    )
}

#[cfg(test)]
mod ppa_test {
    use super::*;
    use crate::grammar::token::assert_token_table;

    #[test]
    fn test_token_tables() {
        assert_token_table::<PpaTimeSeriesType>();
        assert_token_table::<PpaModuleOutputTimeSeriesType>();
        assert_token_table::<PpaCdppTimeSeriesType>();
    }

    #[test]
    fn test_focal_plane_series() {
        let id = get_time_series_fsid(PpaTimeSeriesType::CovarianceMatrix11).unwrap();
        assert_eq!(id.as_str(), "/ppa/CovarianceMatrix11");
        assert_eq!(id.path(), "/ppa");
        assert_eq!(
            get_time_series_fsid(PpaTimeSeriesType::MaxAttitudeFocalPlaneResidual)
                .unwrap()
                .as_str(),
            "/ppa/MaxAttitudeFocalPlaneResidual"
        );
    }

    #[test]
    fn test_channel_series() {
        assert_eq!(
            get_module_output_time_series_fsid(PpaModuleOutputTimeSeriesType::PlateScale, 2, 1)
                .unwrap()
                .as_str(),
            "/ppa/PlateScale/2:1"
        );
        assert_eq!(
            get_cdpp_time_series_fsid(PpaCdppTimeSeriesType::CdppRatioValues, 2, 1, 12, 6)
                .unwrap()
                .as_str(),
            "/ppa/CdppRatioValues/2:1:12:6"
        );
        assert!(get_cdpp_time_series_fsid(PpaCdppTimeSeriesType::CdppRatioValues, 2, 0, 12, 6)
            .is_err());
    }
}
