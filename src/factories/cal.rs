//! Calibration (`/cal`) identifiers: calibrated pixels, collateral, cosmic rays, channel
//! metrics, per-target metrics and MATLAB blobs.
//!
//! ## See also
//! ------------
//! * [`crate::parser::parse_cal_pixel_fsid`] – Inverse of [`get_time_series_fsid`].
//! * [`crate::parser::parse_cal_collateral_pixel_fsid`] – Inverse of
//!   [`get_calibrated_collateral_fsid`].
//! * [`crate::parser::parse_cal_cosmic_ray_fsid`] – Inverse of [`get_cosmic_ray_series_fsid`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{CcdColumn, CcdModule, CcdOutput, CcdRow, KeplerId, PipelineTaskId},
    coordinates::{
        validate_collateral, validate_module_output, validate_pixel, CadenceType,
        CollateralType, CosmicRayMetricType, TargetType,
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
    /// Calibrated pixel series kind.
    pub enum PixelTimeSeriesType: "pixel time series type" {
        SocCal => "SocCal",
        SocCalUncertainties => "SocCalUncertainties",
    }
}

fsid_token! {
    /// Per-channel calibration metric.
    pub enum MetricsTimeSeriesType: "calibration metric type" {
        BlackLevel => "BlackLevel",
        BlackLevelUncertainties => "BlackLevelUncertainties",
        SmearLevel => "SmearLevel",
        SmearLevelUncertainties => "SmearLevelUncertainties",
        DarkCurrent => "DarkCurrent",
        DarkCurrentUncertainties => "DarkCurrentUncertainties",
        AchievedCompressionEfficiency => "AchievedCompressionEfficiency",
        AchievedCompressionEfficiencyCounts => "AchievedCompressionEfficiencyCounts",
        TheoreticalCompressionEfficiency => "TheoreticalCompressionEfficiency",
        TheoreticalCompressionEfficiencyCounts => "TheoreticalCompressionEfficiencyCounts",
    }
}

fsid_token! {
    /// Per-target calibration metric, computed over the pixels of one target.
    pub enum TargetMetricsTimeSeriesType: "calibration target metric type" {
        /// Local detector electronics undershoot.
        Undershoot => "Undershoot",
        UndershootUncertainties => "UndershootUncertainties",
        TwoDBlack => "TwoDBlack",
        TwoDBlackUncertainties => "TwoDBlackUncertainties",
    }
}

fsid_token! {
    /// MATLAB blob kind written by calibration.
    pub enum CalBlobSeriesType: "calibration blob type" {
        OneDBlackFit => "OneDBlackFit",
        SmearBlob => "SmearBlob",
        UncertaintyTransform => "UncertaintyTransform",
    }
}

// -------------------------------------------------------------------------------------------------
// Calibrated target pixels
// -------------------------------------------------------------------------------------------------

static CAL_PIXEL_LAYOUT: Layout = Layout {
    family: "CalPixel",
    path: &[
        Slot::Literal("cal"),
        Slot::Literal("pixels"),
        Slot::token::<PixelTimeSeriesType>(FieldKind::SeriesType),
        Slot::token::<TargetType>(FieldKind::TargetType),
        Slot::unsigned(FieldKind::Module),
        Slot::unsigned(FieldKind::Output),
    ],
    name: &[Slot::unsigned(FieldKind::Row), Slot::unsigned(FieldKind::Column)],
};

/// Coordinates of a calibrated target, background or reference pixel series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalPixel {
    pub series_type: PixelTimeSeriesType,
    pub target_type: TargetType,
    pub module: CcdModule,
    pub output: CcdOutput,
    pub row: CcdRow,
    pub column: CcdColumn,
}

impl FieldSource for CalPixel {
    fn field(&self, kind: FieldKind) -> Option<String> {
        Some(match kind {
            FieldKind::SeriesType => self.series_type.to_string(),
            FieldKind::TargetType => self.target_type.to_string(),
            FieldKind::Module => self.module.to_string(),
            FieldKind::Output => self.output.to_string(),
            FieldKind::Row => self.row.to_string(),
            FieldKind::Column => self.column.to_string(),
            _ => return None,
        })
    }
}

impl FsIdFamily for CalPixel {
    fn compiled() -> &'static CompiledLayout {
        static COMPILED: Lazy<CompiledLayout> =
            Lazy::new(|| CompiledLayout::new(&CAL_PIXEL_LAYOUT));
        &COMPILED
    }

    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError> {
        Ok(CalPixel {
            series_type: fields.token(FieldKind::SeriesType)?,
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

/// Identifier of a calibrated pixel time series.
///
/// Arguments
/// -----------------
/// * `series_type`: Calibrated values or their uncertainties.
/// * `target_type`: Target table of the pixel, written as its short name.
/// * `module`, `output`: CCD channel.
/// * `row`, `column`: Zero-based pixel position.
///
/// Return
/// ----------
/// * `/cal/pixels/{type}/{target}/{module}/{output}/{row}:{column}`, e.g.
///   `/cal/pixels/SocCal/lct/2/1/50:60`.
pub fn get_time_series_fsid(
    series_type: PixelTimeSeriesType,
    target_type: TargetType,
    module: CcdModule,
    output: CcdOutput,
    row: CcdRow,
    column: CcdColumn,
) -> Result<FsId, FsIdError> {
    CalPixel {
        series_type,
        target_type,
        module,
        output,
        row,
        column,
    }
    .to_fsid()
}

// -------------------------------------------------------------------------------------------------
// Calibrated collateral pixels
// -------------------------------------------------------------------------------------------------

static CAL_COLLATERAL_LAYOUT: Layout = Layout {
    family: "CalCollateralPixel",
    path: &[
        Slot::Literal("cal"),
        Slot::Literal("pixels"),
        Slot::token::<PixelTimeSeriesType>(FieldKind::SeriesType),
        Slot::Literal("collateral"),
        Slot::token::<CadenceType>(FieldKind::CadenceType),
        Slot::unsigned(FieldKind::Module),
        Slot::unsigned(FieldKind::Output),
    ],
    name: &[
        Slot::token::<CollateralType>(FieldKind::CollateralType),
        Slot::unsigned(FieldKind::Offset),
    ],
};

/// Coordinates of a calibrated collateral pixel series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalCollateralPixel {
    pub collateral_type: CollateralType,
    pub series_type: PixelTimeSeriesType,
    pub cadence_type: CadenceType,
    pub module: CcdModule,
    pub output: CcdOutput,
    pub offset: u32,
}

impl FieldSource for CalCollateralPixel {
    fn field(&self, kind: FieldKind) -> Option<String> {
        Some(match kind {
            FieldKind::CollateralType => self.collateral_type.to_string(),
            FieldKind::SeriesType => self.series_type.to_string(),
            FieldKind::CadenceType => self.cadence_type.to_string(),
            FieldKind::Module => self.module.to_string(),
            FieldKind::Output => self.output.to_string(),
            FieldKind::Offset => self.offset.to_string(),
            _ => return None,
        })
    }
}

impl FsIdFamily for CalCollateralPixel {
    fn compiled() -> &'static CompiledLayout {
        static COMPILED: Lazy<CompiledLayout> =
            Lazy::new(|| CompiledLayout::new(&CAL_COLLATERAL_LAYOUT));
        &COMPILED
    }

    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError> {
        Ok(CalCollateralPixel {
            collateral_type: fields.token(FieldKind::CollateralType)?,
            series_type: fields.token(FieldKind::SeriesType)?,
            cadence_type: fields.token(FieldKind::CadenceType)?,
            module: fields.number(FieldKind::Module)?,
            output: fields.number(FieldKind::Output)?,
            offset: fields.number(FieldKind::Offset)?,
        })
    }

    fn validate(&self) -> Result<(), FsIdError> {
        validate_collateral(self.collateral_type, self.module, self.output, self.offset)
    }
}

/// Identifier of a calibrated collateral pixel series.
///
/// Return
/// ----------
/// * `/cal/pixels/{type}/collateral/{cadence}/{module}/{output}/{collateral}:{offset}`,
///   e.g. `/cal/pixels/SocCal/collateral/long/2/1/BlackLevel:500`.
pub fn get_calibrated_collateral_fsid(
    collateral_type: CollateralType,
    series_type: PixelTimeSeriesType,
    cadence_type: CadenceType,
    module: CcdModule,
    output: CcdOutput,
    offset: u32,
) -> Result<FsId, FsIdError> {
    CalCollateralPixel {
        collateral_type,
        series_type,
        cadence_type,
        module,
        output,
        offset,
    }
    .to_fsid()
}

// -------------------------------------------------------------------------------------------------
// Cosmic rays removed from collateral pixels
// -------------------------------------------------------------------------------------------------

static CAL_COSMIC_RAY_LAYOUT: Layout = Layout {
    family: "CalCosmicRay",
    path: &[
        Slot::Literal("cal"),
        Slot::Literal("collateral"),
        Slot::Literal("cr"),
        Slot::token::<CadenceType>(FieldKind::CadenceType),
        Slot::unsigned(FieldKind::Module),
        Slot::unsigned(FieldKind::Output),
    ],
    name: &[
        Slot::token::<CollateralType>(FieldKind::CollateralType),
        Slot::unsigned(FieldKind::Offset),
    ],
};

/// Coordinates of a collateral cosmic-ray series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalCosmicRay {
    pub collateral_type: CollateralType,
    pub cadence_type: CadenceType,
    pub module: CcdModule,
    pub output: CcdOutput,
    pub offset: u32,
}

impl FieldSource for CalCosmicRay {
    fn field(&self, kind: FieldKind) -> Option<String> {
        Some(match kind {
            FieldKind::CollateralType => self.collateral_type.to_string(),
            FieldKind::CadenceType => self.cadence_type.to_string(),
            FieldKind::Module => self.module.to_string(),
            FieldKind::Output => self.output.to_string(),
            FieldKind::Offset => self.offset.to_string(),
            _ => return None,
        })
    }
}

impl FsIdFamily for CalCosmicRay {
    fn compiled() -> &'static CompiledLayout {
        static COMPILED: Lazy<CompiledLayout> =
            Lazy::new(|| CompiledLayout::new(&CAL_COSMIC_RAY_LAYOUT));
        &COMPILED
    }

    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError> {
        Ok(CalCosmicRay {
            collateral_type: fields.token(FieldKind::CollateralType)?,
            cadence_type: fields.token(FieldKind::CadenceType)?,
            module: fields.number(FieldKind::Module)?,
            output: fields.number(FieldKind::Output)?,
            offset: fields.number(FieldKind::Offset)?,
        })
    }

    fn validate(&self) -> Result<(), FsIdError> {
        validate_collateral(self.collateral_type, self.module, self.output, self.offset)
    }
}

/// Identifier of the cosmic rays removed from one collateral row or column.
///
/// Return
/// ----------
/// * `/cal/collateral/cr/{cadence}/{module}/{output}/{collateral}:{offset}`.
pub fn get_cosmic_ray_series_fsid(
    collateral_type: CollateralType,
    cadence_type: CadenceType,
    module: CcdModule,
    output: CcdOutput,
    offset: u32,
) -> Result<FsId, FsIdError> {
    CalCosmicRay {
        collateral_type,
        cadence_type,
        module,
        output,
        offset,
    }
    .to_fsid()
}

// -------------------------------------------------------------------------------------------------
// Channel metrics and blobs
// -------------------------------------------------------------------------------------------------

/// Identifier of a per-channel calibration metric.
///
/// Return
/// ----------
/// * `/cal/metrics/{cadence}:{metric}:{module}:{output}`, e.g.
///   `/cal/metrics/long:BlackLevelUncertainties:2:1`.
pub fn get_metrics_time_series_fsid(
    cadence_type: CadenceType,
    metrics_type: MetricsTimeSeriesType,
    module: CcdModule,
    output: CcdOutput,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        ["cal", "metrics"],
        [
            cadence_type.to_string(),
            metrics_type.to_string(),
            module.to_string(),
            output.to_string(),
        ],
    )
}

/// Identifier of a cosmic-ray statistic over one collateral region of a channel.
///
/// Return
/// ----------
/// * `/cal/metrics/CosmicRayMetrics/{cadence}:{module}:{output}:{collateral}:{metric}`.
pub fn get_cosmic_ray_metric_fsid(
    cadence_type: CadenceType,
    collateral_type: CollateralType,
    metric_type: CosmicRayMetricType,
    module: CcdModule,
    output: CcdOutput,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        ["cal", "metrics", "CosmicRayMetrics"],
        [
            cadence_type.to_string(),
            module.to_string(),
            output.to_string(),
            collateral_type.to_string(),
            metric_type.to_string(),
        ],
    )
}

/// Identifier of a per-target calibration metric.
///
/// Arguments
/// -----------------
/// * `cadence_type`: Cadence of the calibrated pixels.
/// * `metrics_type`: Metric or its uncertainties.
/// * `module`, `output`: CCD channel the target was observed on.
/// * `kepler_id`: Target.
///
/// Return
/// ----------
/// * `/cal/metrics/targets/{metric}/{cadence}/{module}/{output}/{keplerId}`, e.g.
///   `/cal/metrics/targets/Undershoot/long/2/1/8077474`.
pub fn get_target_metrics_time_series_fsid(
    cadence_type: CadenceType,
    metrics_type: TargetMetricsTimeSeriesType,
    module: CcdModule,
    output: CcdOutput,
    kepler_id: KeplerId,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        [
            "cal".to_string(),
            "metrics".to_string(),
            "targets".to_string(),
            metrics_type.to_string(),
            cadence_type.to_string(),
            module.to_string(),
            output.to_string(),
        ],
        [kepler_id.to_string()],
    )
}

/// Identifier of a calibration blob written by one pipeline task.
///
/// Return
/// ----------
/// * `/cal/blob/{type}/{cadence}/{module}/{output}/{task}`.
pub fn get_blob_fsid(
    blob_type: CalBlobSeriesType,
    cadence_type: CadenceType,
    module: CcdModule,
    output: CcdOutput,
    pipeline_task_id: PipelineTaskId,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        [
            "cal".to_string(),
            "blob".to_string(),
            blob_type.to_string(),
            cadence_type.to_string(),
            module.to_string(),
            output.to_string(),
        ],
        [pipeline_task_id.to_string()],
    )
}
