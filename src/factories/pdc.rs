//! Presearch data conditioning (`/pdc`) identifiers: systematic-error corrected flux,
//! outliers, filled and discontinuity indices, goodness metrics and MATLAB blobs.
//!
//! The corrected flux lives directly under `/pdc/{Flux}{Type}`; the per-target bookkeeping
//! series live under the lowercase flux sub-tree `/pdc/{flux}/...`.

use crate::{
    constants::{CcdModule, CcdOutput, KeplerId, PipelineTaskId},
    coordinates::{validate_module_output, CadenceType, FluxType},
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, token::fsid_token},
};

fsid_token! {
    /// Corrected flux series kind.
    pub enum PdcFluxTimeSeriesType: "corrected flux type" {
        CorrectedFlux => "CorrectedFlux",
        CorrectedFluxUncertainties => "CorrectedFluxUncertainties",
        HarmonicFreeCorrectedFlux => "HarmonicFreeCorrectedFlux",
        HarmonicFreeCorrectedFluxUncertainties => "HarmonicFreeCorrectedFluxUncertainties",
    }
}

fsid_token! {
    /// Outlier series kind. The archive spells the uncertainty series `Uncertainies`.
    pub enum PdcOutliersTimeSeriesType: "outliers type" {
        Outliers => "Outliers",
        OutlierUncertainties => "OutliersUncertainies",
        HarmonicFreeOutliers => "HarmonicFreeOutliers",
        HarmonicFreeOutlierUncertainties => "HarmonicFreeOutliersUncertainies",
    }
}

fsid_token! {
    /// Indices filled by gap filling.
    pub enum PdcFilledIndicesTimeSeriesType: "filled indices type" {
        FilledIndices => "FilledIndices",
        HarmonicFreeFilledIndices => "HarmonicFreeFilledIndices",
    }
}

fsid_token! {
    /// Goodness metric of a correction.
    pub enum PdcGoodnessMetricType: "goodness metric type" {
        Correlation => "Correlation",
        DeltaVariability => "DeltaVariability",
        IntroducedNoise => "IntroducedNoise",
        EarthPointRemoval => "EarthPointRemoval",
        Total => "Total",
    }
}

fsid_token! {
    /// Component of a goodness metric.
    pub enum PdcGoodnessComponentType: "goodness component type" {
        Value => "Value",
        Percentile => "Percentile",
    }
}

fsid_token! {
    /// MATLAB blob kind written by data conditioning.
    pub enum PdcBlobSeriesType: "pdc blob type" {
        Pdc => "Pdc",
        Cbv => "Cbv",
    }
}

fn target_series(
    flux_type: FluxType,
    series: &str,
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    compose(
        ["pdc", flux_type.lower_name(), series, cadence_type.as_str()],
        [kepler_id.to_string()],
    )
}

/// Identifier of a corrected flux series.
///
/// Return
/// ----------
/// * `/pdc/{flux}{type}/{cadence}/{keplerId}`, e.g. `/pdc/SapCorrectedFlux/long/8077474`.
pub fn get_flux_time_series_fsid(
    series_type: PdcFluxTimeSeriesType,
    flux_type: FluxType,
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    compose(
        [
            "pdc".to_string(),
            format!("{flux_type}{series_type}"),
            cadence_type.to_string(),
        ],
        [kepler_id.to_string()],
    )
}

/// Identifier of an outlier series: `/pdc/{flux}/{type}/{cadence}/{keplerId}`.
pub fn get_outlier_time_series_fsid(
    series_type: PdcOutliersTimeSeriesType,
    flux_type: FluxType,
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    target_series(flux_type, series_type.as_str(), cadence_type, kepler_id)
}

/// Identifier of a filled indices series: `/pdc/{flux}/{type}/{cadence}/{keplerId}`.
pub fn get_filled_indices_fsid(
    series_type: PdcFilledIndicesTimeSeriesType,
    flux_type: FluxType,
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    target_series(flux_type, series_type.as_str(), cadence_type, kepler_id)
}

/// Identifier of the discontinuity indices of a target.
pub fn get_discontinuity_indices_fsid(
    flux_type: FluxType,
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    target_series(flux_type, "DiscontinuityIndices", cadence_type, kepler_id)
}

/// Identifier of one component of a goodness metric.
///
/// Return
/// ----------
/// * `/pdc/{flux}/Goodness/{metric}/{component}/{cadence}/{keplerId}`.
pub fn get_pdc_goodness_metric_fsid(
    metric_type: PdcGoodnessMetricType,
    component_type: PdcGoodnessComponentType,
    flux_type: FluxType,
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    compose(
        [
            "pdc",
            flux_type.lower_name(),
            "Goodness",
            metric_type.as_str(),
            component_type.as_str(),
            cadence_type.as_str(),
        ],
        [kepler_id.to_string()],
    )
}

/// Identifier of a conditioning blob written by one pipeline task.
///
/// Return
/// ----------
/// * `/pdc/blob/{type}/{cadence}/{module}/{output}/{task}`.
pub fn get_matlab_blob_fsid(
    blob_type: PdcBlobSeriesType,
    cadence_type: CadenceType,
    module: CcdModule,
    output: CcdOutput,
    pipeline_task_id: PipelineTaskId,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        [
            "pdc".to_string(),
            "blob".to_string(),
            blob_type.to_string(),
            cadence_type.to_string(),
            module.to_string(),
            output.to_string(),
        ],
        [pipeline_task_id.to_string()],
    )
}
