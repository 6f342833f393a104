//! Data validation (`/dv`) identifiers: per-planet corrected flux, residuals, model light
//! curves, robust weights, single event statistics and barycentric timestamps.
//!
//! Every series lives under `/dv/{flux}/...` and is keyed by the pipeline instance that
//! produced it, the target, and (for per-planet series) the planet number.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{KeplerId, PipelineInstanceId},
    coordinates::FluxType,
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, format_pulse_duration, plain_decimal, required, token::fsid_token},
    parser::{
        layout::{CompiledLayout, FieldKind, FieldSource, Fields, Layout, Slot},
        FsIdFamily,
    },
};

fsid_token! {
    /// Stage of the flux correction.
    pub enum DvCorrectedFluxType: "corrected flux type" {
        Initial => "Initial",
        Detrended => "Detrended",
    }
}

fsid_token! {
    /// Component of a flux time series.
    pub enum DvTimeSeriesType: "dv time series type" {
        Flux => "Flux",
        Uncertainties => "Uncertainties",
        FilledIndices => "FilledIndices",
    }
}

fsid_token! {
    /// Model light curve kind.
    pub enum DvLightCurveType: "light curve type" {
        ModelLightCurve => "ModelLightCurve",
        WhitenedModelLightCurve => "WhitenedModelLightCurve",
        TrapezoidalModelLightCurve => "TrapezoidalModelLightCurve",
    }
}

fsid_token! {
    /// Single event statistic kind.
    pub enum DvSingleEventStatisticsType: "single event statistics type" {
        Normalization => "Normalization",
        Correlation => "Correlation",
    }
}

/// Planet number within a target, starting at 1.
pub type PlanetNumber = u32;

fn planet_series(
    flux_type: FluxType,
    series: &[&str],
    pipeline_instance_id: PipelineInstanceId,
    name: Vec<String>,
) -> Result<FsId, FsIdError> {
    let mut path = vec!["dv".to_string(), flux_type.to_string()];
    path.extend(series.iter().map(|s| s.to_string()));
    path.push(pipeline_instance_id.to_string());
    compose(path, name)
}

/// Identifier of a corrected flux series of one planet.
///
/// Return
/// ----------
/// * `/dv/{flux}/{correctedFluxType}/{tsType}/{instance}/{keplerId}:{planet}`.
pub fn get_corrected_flux_time_series_fsid(
    flux_type: FluxType,
    corrected_flux_type: DvCorrectedFluxType,
    series_type: DvTimeSeriesType,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    planet_number: PlanetNumber,
) -> Result<FsId, FsIdError> {
    planet_series(
        flux_type,
        &[corrected_flux_type.as_str(), series_type.as_str()],
        pipeline_instance_id,
        vec![kepler_id.to_string(), planet_number.to_string()],
    )
}

/// Identifier of the residual flux of a target once every planet is removed.
///
/// Return
/// ----------
/// * `/dv/{flux}/ResidualFlux/{tsType}/{instance}/{keplerId}`.
pub fn get_residual_time_series_fsid(
    flux_type: FluxType,
    series_type: DvTimeSeriesType,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    planet_series(
        flux_type,
        &["ResidualFlux", series_type.as_str()],
        pipeline_instance_id,
        vec![kepler_id.to_string()],
    )
}

/// Identifier of a model light curve of one planet.
///
/// Return
/// ----------
/// * `/dv/{flux}/LightCurve/{type}/{instance}/{keplerId}:{planet}`.
pub fn get_light_curve_time_series_fsid(
    flux_type: FluxType,
    light_curve_type: DvLightCurveType,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    planet_number: PlanetNumber,
) -> Result<FsId, FsIdError> {
    planet_series(
        flux_type,
        &["LightCurve", light_curve_type.as_str()],
        pipeline_instance_id,
        vec![kepler_id.to_string(), planet_number.to_string()],
    )
}

/// Identifier of the folded phase of one planet.
pub fn get_folded_phase_time_series_fsid(
    flux_type: FluxType,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    planet_number: PlanetNumber,
) -> Result<FsId, FsIdError> {
    planet_series(
        flux_type,
        &["FoldedPhase"],
        pipeline_instance_id,
        vec![kepler_id.to_string(), planet_number.to_string()],
    )
}

/// Identifier of a free-form labelled flux series of one planet (e.g. `WhitenedFlux`).
///
/// Return
/// ----------
/// * `/dv/{flux}/{label}/{instance}/{keplerId}:{planet}`, or
///   [`FsIdError::NullRequiredArgument`] for an empty label.
pub fn get_flux_time_series_fsid(
    flux_type: FluxType,
    label: &str,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    planet_number: PlanetNumber,
) -> Result<FsId, FsIdError> {
    let label = required("label", label)?;
    planet_series(
        flux_type,
        &[label],
        pipeline_instance_id,
        vec![kepler_id.to_string(), planet_number.to_string()],
    )
}

/// Identifier of the robust fit weights of one planet.
pub fn get_robust_weights_time_series_fsid(
    flux_type: FluxType,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    planet_number: PlanetNumber,
) -> Result<FsId, FsIdError> {
    planet_series(
        flux_type,
        &["RobustWeights"],
        pipeline_instance_id,
        vec![kepler_id.to_string(), planet_number.to_string()],
    )
}

/// Identifier of the robust weights of a reduced-parameter fit of one planet.
///
/// Return
/// ----------
/// * `/dv/{flux}/ReducedParameterRobustWeights/{instance}/{keplerId}:{planet}:{name}:{value}`.
pub fn get_reduced_parameter_robust_weights_time_series_fsid(
    flux_type: FluxType,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    planet_number: PlanetNumber,
    parameter_name: &str,
    parameter_value: f32,
) -> Result<FsId, FsIdError> {
    let parameter_name = required("parameter_name", parameter_name)?;
    if !parameter_value.is_finite() {
        return Err(FsIdError::invalid_coordinate(
            "parameter_value",
            parameter_value,
        ));
    }
    planet_series(
        flux_type,
        &["ReducedParameterRobustWeights"],
        pipeline_instance_id,
        vec![
            kepler_id.to_string(),
            planet_number.to_string(),
            parameter_name.to_string(),
            plain_decimal(parameter_value),
        ],
    )
}

/// Identifier of the barycentric corrected timestamps of a target.
pub fn get_barycentric_corrected_timestamps_fsid(
    flux_type: FluxType,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    planet_series(
        flux_type,
        &["BarycentricCorrectedTimestamps"],
        pipeline_instance_id,
        vec![kepler_id.to_string()],
    )
}

// -------------------------------------------------------------------------------------------------
// Single event statistics
// -------------------------------------------------------------------------------------------------

static DV_SES_LAYOUT: Layout = Layout {
    family: "DvSingleEventStatistics",
    path: &[
        Slot::Literal("dv"),
        Slot::token::<FluxType>(FieldKind::FluxType),
        Slot::Literal("SingleEventStatistics"),
        Slot::token::<DvSingleEventStatisticsType>(FieldKind::SeriesType),
        Slot::unsigned(FieldKind::PipelineInstance),
    ],
    name: &[
        Slot::unsigned(FieldKind::KeplerId),
        Slot::decimal(FieldKind::PulseDuration),
    ],
};

/// Coordinates of a single event statistics series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DvSingleEventStatistics {
    pub flux_type: FluxType,
    pub statistics_type: DvSingleEventStatisticsType,
    pub pipeline_instance_id: PipelineInstanceId,
    pub kepler_id: KeplerId,
    pub trial_transit_pulse_in_hours: f32,
}

impl FieldSource for DvSingleEventStatistics {
    fn field(&self, kind: FieldKind) -> Option<String> {
        Some(match kind {
            FieldKind::FluxType => self.flux_type.to_string(),
            FieldKind::SeriesType => self.statistics_type.to_string(),
            FieldKind::PipelineInstance => self.pipeline_instance_id.to_string(),
            FieldKind::KeplerId => self.kepler_id.to_string(),
            FieldKind::PulseDuration => {
                format_pulse_duration(self.trial_transit_pulse_in_hours).ok()?
            }
            _ => return None,
        })
    }
}

impl FsIdFamily for DvSingleEventStatistics {
    fn compiled() -> &'static CompiledLayout {
        static COMPILED: Lazy<CompiledLayout> =
            Lazy::new(|| CompiledLayout::new(&DV_SES_LAYOUT));
        &COMPILED
    }

    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError> {
        Ok(DvSingleEventStatistics {
            flux_type: fields.token(FieldKind::FluxType)?,
            statistics_type: fields.token(FieldKind::SeriesType)?,
            pipeline_instance_id: fields.number(FieldKind::PipelineInstance)?,
            kepler_id: fields.number(FieldKind::KeplerId)?,
            trial_transit_pulse_in_hours: fields.number(FieldKind::PulseDuration)?,
        })
    }

    fn validate(&self) -> Result<(), FsIdError> {
        format_pulse_duration(self.trial_transit_pulse_in_hours).map(|_| ())
    }
}

/// Identifier of a single event statistics series for one trial pulse.
///
/// Return
/// ----------
/// * `/dv/{flux}/SingleEventStatistics/{type}/{instance}/{keplerId}:{pulse}`.
pub fn get_single_event_statistics_fsid(
    flux_type: FluxType,
    statistics_type: DvSingleEventStatisticsType,
    pipeline_instance_id: PipelineInstanceId,
    kepler_id: KeplerId,
    trial_transit_pulse_in_hours: f32,
) -> Result<FsId, FsIdError> {
    DvSingleEventStatistics {
        flux_type,
        statistics_type,
        pipeline_instance_id,
        kepler_id,
        trial_transit_pulse_in_hours,
    }
    .to_fsid()
}
