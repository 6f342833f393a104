//! Photometric analysis (`/pa`) identifiers: target flux and centroids, channel metrics,
//! cosmic rays, argabrightening events, thruster activity and MATLAB blobs.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        CcdColumn, CcdModule, CcdOutput, CcdRow, KeplerId, PipelineTaskId, TargetTableId,
    },
    coordinates::{
        validate_module_output, validate_pixel, CadenceType, CosmicRayMetricType, FluxType,
        TargetType,
    },
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, token::fsid_token},
    parser::{
        layout::{CompiledLayout, FieldKind, FieldSource, Fields, Layout, Slot},
        FsIdFamily,
    },
};

fsid_token! {
    /// Per-target flux series kind.
    pub enum PaTimeSeriesType: "photometry time series type" {
        RawFlux => "RawFlux",
        RawFluxUncertainties => "RawFluxUncertainties",
        BackgroundFlux => "BackgroundFlux",
        BackgroundFluxUncertainties => "BackgroundFluxUncertainties",
    }
}

fsid_token! {
    /// Per-target centroid series kind.
    pub enum CentroidTimeSeriesType: "centroid time series type" {
        CentroidRows => "CentroidRows",
        CentroidRowsUncertainties => "CentroidRowsUncertainties",
        CentroidCols => "CentroidCols",
        CentroidColsUncertainties => "CentroidColsUncertainties",
    }
}

fsid_token! {
    /// Per-channel photometry metric.
    pub enum PaMetricTimeSeriesType: "photometry metric type" {
        Brightness => "Brightness",
        BrightnessUncertainties => "BrightnessUncertainties",
        EncircledEnergy => "EncircledEnergy",
        EncircledEnergyUncertainties => "EncircledEnergyUncertainties",
    }
}

fsid_token! {
    /// Thruster firing flags derived from the ancillary data.
    pub enum ThrusterActivityType: "thruster activity type" {
        DefiniteThrusterActivity => "DefiniteThrusterActivity",
        PossibleThrusterActivity => "PossibleThrusterActivity",
    }
}

fsid_token! {
    /// MATLAB blob kind written by photometric analysis.
    pub enum PaBlobSeriesType: "photometry blob type" {
        Background => "Background",
        Motion => "Motion",
        FfiMotion => "FfiMotion",
        Uncertainties => "Uncertainties",
    }
}

/// Centroiding method.
///
/// The best available centroid is stored directly under the flux type; the other methods
/// add their own segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CentroidType {
    Best,
    FluxWeighted,
    Prf,
}

impl CentroidType {
    /// Path segment of the method, `None` for [`CentroidType::Best`].
    pub fn path_segment(&self) -> Option<&'static str> {
        match self {
            CentroidType::Best => None,
            CentroidType::FluxWeighted => Some("FluxWeighted"),
            CentroidType::Prf => Some("Prf"),
        }
    }
}

/// Identifier of a target flux series.
///
/// Return
/// ----------
/// * `/pa/targets/{flux}{type}/{cadence}/{keplerId}`, e.g. `/pa/targets/SapRawFlux/long/8077474`.
pub fn get_time_series_fsid(
    series_type: PaTimeSeriesType,
    flux_type: FluxType,
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    compose(
        [
            "pa".to_string(),
            "targets".to_string(),
            format!("{flux_type}{series_type}"),
            cadence_type.to_string(),
        ],
        [kepler_id.to_string()],
    )
}

/// Identifier of a target centroid series.
///
/// Return
/// ----------
/// * `/pa/targets/{flux}/{centroid}/{type}/{cadence}/{keplerId}`, without the `{centroid}`
///   segment for [`CentroidType::Best`].
pub fn get_centroid_time_series_fsid(
    flux_type: FluxType,
    centroid_type: CentroidType,
    series_type: CentroidTimeSeriesType,
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    let mut path = vec!["pa".to_string(), "targets".to_string(), flux_type.to_string()];
    path.extend(centroid_type.path_segment().map(str::to_string));
    path.push(series_type.to_string());
    path.push(cadence_type.to_string());
    compose(path, [kepler_id.to_string()])
}

/// Identifier of the barycentric time correction of a target.
pub fn get_barycentric_time_offset_fsid(
    cadence_type: CadenceType,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    compose(
        ["pa", "targets", "BarycentricTimeOffset", cadence_type.as_str()],
        [kepler_id.to_string()],
    )
}

/// Identifier of a per-channel photometry metric.
///
/// Return
/// ----------
/// * `/pa/metrics/{type}/{module}:{output}`.
pub fn get_metric_time_series_fsid(
    metric_type: PaMetricTimeSeriesType,
    module: CcdModule,
    output: CcdOutput,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        ["pa", "metrics", metric_type.as_str()],
        [module.to_string(), output.to_string()],
    )
}

/// Identifier of a cosmic-ray statistic over the pixels of one target table.
///
/// Return
/// ----------
/// * `/pa/metrics/CosmicRay/{module}:{output}:{target}:{metric}`.
pub fn get_cosmic_ray_metric_fsid(
    target_type: TargetType,
    metric_type: CosmicRayMetricType,
    module: CcdModule,
    output: CcdOutput,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        ["pa", "metrics", "CosmicRay"],
        [
            module.to_string(),
            output.to_string(),
            target_type.to_string(),
            metric_type.to_string(),
        ],
    )
}

static PA_COSMIC_RAY_LAYOUT: Layout = Layout {
    family: "PaCosmicRay",
    path: &[
        Slot::Literal("pa"),
        Slot::Literal("crs"),
        Slot::token::<TargetType>(FieldKind::TargetType),
        Slot::unsigned(FieldKind::Module),
        Slot::unsigned(FieldKind::Output),
    ],
    name: &[Slot::unsigned(FieldKind::Row), Slot::unsigned(FieldKind::Column)],
};

/// Coordinates of the cosmic rays removed from one target pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaCosmicRay {
    pub target_type: TargetType,
    pub module: CcdModule,
    pub output: CcdOutput,
    pub row: CcdRow,
    pub column: CcdColumn,
}

impl FieldSource for PaCosmicRay {
    fn field(&self, kind: FieldKind) -> Option<String> {
        Some(match kind {
            FieldKind::TargetType => self.target_type.to_string(),
            FieldKind::Module => self.module.to_string(),
            FieldKind::Output => self.output.to_string(),
            FieldKind::Row => self.row.to_string(),
            FieldKind::Column => self.column.to_string(),
            _ => return None,
        })
    }
}

impl FsIdFamily for PaCosmicRay {
    fn compiled() -> &'static CompiledLayout {
        static COMPILED: Lazy<CompiledLayout> =
            Lazy::new(|| CompiledLayout::new(&PA_COSMIC_RAY_LAYOUT));
        &COMPILED
    }

    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError> {
        Ok(PaCosmicRay {
            target_type: fields.token(FieldKind::TargetType)?,
            module: fields.number(FieldKind::Module)?,
            output: fields.number(FieldKind::Output)?,
            row: fields.number(FieldKind::Row)?,
            column: fields.number(FieldKind::Column)?,
        })
    }

    fn validate(&self) -> Result<(), FsIdError> {
        validate_pixel(
            self.target_type,
            self.module,
            self.output,
            self.row,
            self.column,
        )
    }
}

/// Identifier of the cosmic rays removed from one target pixel.
///
/// Return
/// ----------
/// * `/pa/crs/{target}/{module}/{output}/{row}:{column}`.
pub fn get_cosmic_ray_series_fsid(
    target_type: TargetType,
    module: CcdModule,
    output: CcdOutput,
    row: CcdRow,
    column: CcdColumn,
) -> Result<FsId, FsIdError> {
    PaCosmicRay {
        target_type,
        module,
        output,
        row,
        column,
    }
    .to_fsid()
}

/// Identifier of the argabrightening flags of one channel and target table.
///
/// Return
/// ----------
/// * `/pa/Argabrightening/{cadence}/{targetTableId}/{module}:{output}`.
pub fn get_argabrightening_fsid(
    cadence_type: CadenceType,
    target_table_id: TargetTableId,
    module: CcdModule,
    output: CcdOutput,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        [
            "pa".to_string(),
            "Argabrightening".to_string(),
            cadence_type.to_string(),
            target_table_id.to_string(),
        ],
        [module.to_string(), output.to_string()],
    )
}

/// Identifier of the reaction-wheel zero crossing flags.
pub fn get_zero_crossing_fsid(cadence_type: CadenceType) -> Result<FsId, FsIdError> {
    compose(["pa", "ZeroCrossings"], [cadence_type.as_str()])
}

/// Identifier of the thruster activity flags: `/pa/{type}/{cadence}`.
pub fn get_thruster_activity_fsid(
    cadence_type: CadenceType,
    activity_type: ThrusterActivityType,
) -> Result<FsId, FsIdError> {
    compose(["pa", activity_type.as_str()], [cadence_type.as_str()])
}

/// Identifier of a photometry blob written by one pipeline task.
///
/// Return
/// ----------
/// * `/pa/blob/{type}/{module}/{output}/{task}`.
pub fn get_matlab_blob_fsid(
    blob_type: PaBlobSeriesType,
    module: CcdModule,
    output: CcdOutput,
    pipeline_task_id: PipelineTaskId,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        [
            "pa".to_string(),
            "blob".to_string(),
            blob_type.to_string(),
            module.to_string(),
            output.to_string(),
        ],
        [pipeline_task_id.to_string()],
    )
}

#[cfg(test)]
mod pa_test {
    use super::*;
    use crate::grammar::token::assert_token_table;

    #[test]
    fn test_token_tables() {
        assert_token_table::<PaTimeSeriesType>();
        assert_token_table::<CentroidTimeSeriesType>();
        assert_token_table::<PaMetricTimeSeriesType>();
        assert_token_table::<ThrusterActivityType>();
        assert_token_table::<PaBlobSeriesType>();
    }

    #[test]
    fn test_target_series() {
        let id = get_time_series_fsid(
            PaTimeSeriesType::RawFlux,
            FluxType::Sap,
            CadenceType::Long,
            8077474,
        )
        .unwrap();
        assert_eq!(id.as_str(), "/pa/targets/SapRawFlux/long/8077474");
        assert_eq!(
            get_barycentric_time_offset_fsid(CadenceType::Short, 42)
                .unwrap()
                .as_str(),
            "/pa/targets/BarycentricTimeOffset/short/42"
        );
    }

    #[test]
    fn test_centroid_series() {
        let fsid = |centroid_type| {
            get_centroid_time_series_fsid(
                FluxType::Sap,
                centroid_type,
                CentroidTimeSeriesType::CentroidRows,
                CadenceType::Long,
                100,
            )
            .unwrap()
            .to_string()
        };
        assert_eq!(fsid(CentroidType::Best), "/pa/targets/Sap/CentroidRows/long/100");
        assert_eq!(
            fsid(CentroidType::FluxWeighted),
            "/pa/targets/Sap/FluxWeighted/CentroidRows/long/100"
        );
        assert_eq!(fsid(CentroidType::Prf), "/pa/targets/Sap/Prf/CentroidRows/long/100");
    }

    #[test]
    fn test_channel_series() {
        assert_eq!(
            get_metric_time_series_fsid(PaMetricTimeSeriesType::Brightness, 2, 1)
                .unwrap()
                .as_str(),
            "/pa/metrics/Brightness/2:1"
        );
        assert_eq!(
            get_cosmic_ray_metric_fsid(
                TargetType::LongCadence,
                CosmicRayMetricType::MeanEnergy,
                2,
                1
            )
            .unwrap()
            .as_str(),
            "/pa/metrics/CosmicRay/2:1:lct:MeanEnergy"
        );
        assert_eq!(
            get_argabrightening_fsid(CadenceType::Long, 12, 7, 3)
                .unwrap()
                .as_str(),
            "/pa/Argabrightening/long/12/7:3"
        );
        assert!(get_metric_time_series_fsid(PaMetricTimeSeriesType::Brightness, 25, 1).is_err());
    }

    #[test]
    fn test_cosmic_ray_series() {
        let id = get_cosmic_ray_series_fsid(TargetType::Background, 2, 1, 300, 400).unwrap();
        assert_eq!(id.as_str(), "/pa/crs/bgp/2/1/300:400");
        assert!(get_cosmic_ray_series_fsid(TargetType::Background, 2, 1, 1070, 400).is_err());
    }

    #[test]
    fn test_ancillary_series() {
        assert_eq!(
            get_zero_crossing_fsid(CadenceType::Short).unwrap().as_str(),
            "/pa/ZeroCrossings/short"
        );
        assert_eq!(
            get_thruster_activity_fsid(
                CadenceType::Long,
                ThrusterActivityType::PossibleThrusterActivity
            )
            .unwrap()
            .as_str(),
            "/pa/PossibleThrusterActivity/long"
        );
        assert_eq!(
            get_matlab_blob_fsid(PaBlobSeriesType::Motion, 2, 1, 77)
                .unwrap()
                .as_str(),
            "/pa/blob/Motion/2/1/77"
        );
    }
}
