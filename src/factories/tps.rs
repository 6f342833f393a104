//! Transiting planet search (`/tps`) identifiers, keyed by pipeline instance, target and
//! trial transit pulse duration.

use crate::{
    constants::{KeplerId, PipelineInstanceId},
    coordinates::FluxType,
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, format_pulse_duration, token::fsid_token},
};

fsid_token! {
    /// Flavour of the search that produced the series.
    pub enum TpsType: "tps type" {
        TpsFull => "TpsFull",
        TpsLite => "TpsLite",
    }
}

/// Identifier of the combined differential photometric precision of a target for one
/// trial pulse.
///
/// Arguments
/// -----------------
/// * `pipeline_instance_id`: Run that produced the series.
/// * `kepler_id`: Target.
/// * `trial_transit_pulse_in_hours`: Trial pulse, finite and non-negative.
/// * `tps_type`, `flux_type`: Search flavour and photometry.
///
/// Return
/// ----------
/// * `/tps/cdpp/{tpsType}/{flux}/{instance}/{keplerId}:{pulse}`, e.g.
///   `/tps/cdpp/TpsFull/Sap/42/8077474:3.0`.
pub fn get_cdpp_fsid(
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    trial_transit_pulse_in_hours: f32,
    tps_type: TpsType,
    flux_type: FluxType,
) -> Result<FsId, FsIdError> {
    let pulse = format_pulse_duration(trial_transit_pulse_in_hours)?;
    compose(
        [
            "tps".to_string(),
            "cdpp".to_string(),
            tps_type.to_string(),
            flux_type.to_string(),
            pipeline_instance_id.to_string(),
        ],
        [kepler_id.to_string(), pulse],
    )
}

fn pulse_series(
    series: &str,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    trial_transit_pulse_in_hours: f32,
) -> Result<FsId, FsIdError> {
    let pulse = format_pulse_duration(trial_transit_pulse_in_hours)?;
    compose(
        ["tps".to_string(), series.to_string(), pipeline_instance_id.to_string()],
        [kepler_id.to_string(), pulse],
    )
}

/// Identifier of the deemphasis weights: `/tps/DeemphasisWeights/{instance}/{keplerId}:{pulse}`.
pub fn get_deemphasis_weights_fsid(
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    trial_transit_pulse_in_hours: f32,
) -> Result<FsId, FsIdError> {
    pulse_series(
        "DeemphasisWeights",
        pipeline_instance_id,
        kepler_id,
        trial_transit_pulse_in_hours,
    )
}

/// Identifier of the deemphasized normalization:
/// `/tps/DeemphasizedNormalization/{instance}/{keplerId}:{pulse}`.
pub fn get_deemphasized_normalization_fsid(
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    trial_transit_pulse_in_hours: f32,
) -> Result<FsId, FsIdError> {
    pulse_series(
        "DeemphasizedNormalization",
        pipeline_instance_id,
        kepler_id,
        trial_transit_pulse_in_hours,
    )
}

#[cfg(test)]
mod tps_test {
    use super::*;
    use crate::grammar::token::assert_token_table;

    #[test]
    fn test_cdpp() {
        assert_token_table::<TpsType>();
        let id = get_cdpp_fsid(42, 8077474, 3.0, TpsType::TpsFull, FluxType::Sap).unwrap();
        assert_eq!(id.as_str(), "/tps/cdpp/TpsFull/Sap/42/8077474:3.0");
        assert_eq!(id.name(), "8077474:3.0");

        let id = get_cdpp_fsid(42, 1, 12.25, TpsType::TpsLite, FluxType::Dia).unwrap();
        assert_eq!(id.as_str(), "/tps/cdpp/TpsLite/Dia/42/1:12.25");
    }

    #[test]
    fn test_deemphasis() {
        assert_eq!(
            get_deemphasis_weights_fsid(5, 6, 1.5).unwrap().as_str(),
            "/tps/DeemphasisWeights/5/6:1.5"
        );
        assert_eq!(
            get_deemphasized_normalization_fsid(5, 6, 6.0)
                .unwrap()
                .as_str(),
            "/tps/DeemphasizedNormalization/5/6:6.0"
        );
    }

    #[test]
    fn test_invalid_pulse() {
        assert!(matches!(
            get_cdpp_fsid(1, 2, -3.0, TpsType::TpsFull, FluxType::Sap),
            Err(FsIdError::InvalidCoordinate {
                field: "pulse_duration",
                ..
            })
        ));
        assert!(get_deemphasis_weights_fsid(1, 2, f32::NAN).is_err());
    }
}
