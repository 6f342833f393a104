//! Dynamic black (`/dynablack`) identifiers: rolling-band artifact series per row of
//! accumulation memory and the fitted two-dimensional black blobs.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{CcdModule, CcdOutput, CcdRow, PipelineTaskId},
    coordinates::{default_limits, validate_module_output},
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::compose,
    parser::{
        layout::{CompiledLayout, FieldKind, FieldSource, Fields, Layout, Slot},
        FsIdFamily,
    },
};

static ROLLING_BAND_FLAGS_LAYOUT: Layout = Layout {
    family: "RollingBandFlags",
    path: &[
        Slot::Literal("dynablack"),
        Slot::Literal("RollingBandArtifactFlags"),
        Slot::unsigned(FieldKind::Module),
        Slot::unsigned(FieldKind::Output),
    ],
    name: &[Slot::unsigned(FieldKind::Row), Slot::unsigned(FieldKind::Duration)],
};

/// Coordinates of a rolling-band artifact flags series.
///
/// `duration` is the test pulse length, in cadences, the flags were computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollingBandFlags {
    pub module: CcdModule,
    pub output: CcdOutput,
    pub row: CcdRow,
    pub duration: u32,
}

fn validate_row_duration(
    module: CcdModule,
    output: CcdOutput,
    row: CcdRow,
    duration: u32,
) -> Result<(), FsIdError> {
    default_limits().validate_row(module, output, row)?;
    if duration == 0 {
        return Err(FsIdError::invalid_coordinate("duration", duration));
    }
    Ok(())
}

impl FieldSource for RollingBandFlags {
    fn field(&self, kind: FieldKind) -> Option<String> {
        Some(match kind {
            FieldKind::Module => self.module.to_string(),
            FieldKind::Output => self.output.to_string(),
            FieldKind::Row => self.row.to_string(),
            FieldKind::Duration => self.duration.to_string(),
            _ => return None,
        })
    }
}

impl FsIdFamily for RollingBandFlags {
    fn compiled() -> &'static CompiledLayout {
        static COMPILED: Lazy<CompiledLayout> =
            Lazy::new(|| CompiledLayout::new(&ROLLING_BAND_FLAGS_LAYOUT));
        &COMPILED
    }

    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError> {
        Ok(RollingBandFlags {
            module: fields.number(FieldKind::Module)?,
            output: fields.number(FieldKind::Output)?,
            row: fields.number(FieldKind::Row)?,
            duration: fields.number(FieldKind::Duration)?,
        })
    }

    fn validate(&self) -> Result<(), FsIdError> {
        validate_row_duration(self.module, self.output, self.row, self.duration)
    }
}

/// Identifier of the rolling-band artifact flags of one row.
///
/// Arguments
/// -----------------
/// * `module`, `output`: CCD channel.
/// * `row`: Row of the accumulation memory, within the focal-plane row range.
/// * `duration`: Test pulse length in cadences, strictly positive.
///
/// Return
/// ----------
/// * `/dynablack/RollingBandArtifactFlags/{module}/{output}/{row}:{duration}`.
pub fn get_rolling_band_artifact_flags_fsid(
    module: CcdModule,
    output: CcdOutput,
    row: CcdRow,
    duration: u32,
) -> Result<FsId, FsIdError> {
    RollingBandFlags {
        module,
        output,
        row,
        duration,
    }
    .to_fsid()
}

/// Identifier of the rolling-band artifact variation of one row:
/// `/dynablack/RollingBandArtifactVariation/{module}/{output}/{row}:{duration}`.
pub fn get_rolling_band_artifact_variation_fsid(
    module: CcdModule,
    output: CcdOutput,
    row: CcdRow,
    duration: u32,
) -> Result<FsId, FsIdError> {
    validate_row_duration(module, output, row, duration)?;
    compose(
        [
            "dynablack".to_string(),
            "RollingBandArtifactVariation".to_string(),
            module.to_string(),
            output.to_string(),
        ],
        [row.to_string(), duration.to_string()],
    )
}

/// Identifier of the dynamic 2D black blob fitted by one pipeline task:
/// `/dynablack/blob/DynamicTwoDBlack/{module}/{output}/{task}`.
pub fn get_dynamic_two_d_black_blob_fsid(
    module: CcdModule,
    output: CcdOutput,
    pipeline_task_id: PipelineTaskId,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    compose(
        [
            "dynablack".to_string(),
            "blob".to_string(),
            "DynamicTwoDBlack".to_string(),
            module.to_string(),
            output.to_string(),
        ],
        [pipeline_task_id.to_string()],
    )
}

#[cfg(test)]
mod dynablack_test {
    use super::*;
    use crate::parser::parse_rolling_band_flags_fsid;

    #[test]
    fn test_rolling_band_flags() {
        let id = get_rolling_band_artifact_flags_fsid(2, 1, 500, 6).unwrap();
        assert_eq!(id.as_str(), "/dynablack/RollingBandArtifactFlags/2/1/500:6");
        assert_eq!(
            parse_rolling_band_flags_fsid(&id).unwrap(),
            RollingBandFlags {
                module: 2,
                output: 1,
                row: 500,
                duration: 6,
            }
        );
    }

    #[test]
    fn test_variation_and_blob() {
        assert_eq!(
            get_rolling_band_artifact_variation_fsid(2, 1, 500, 6)
                .unwrap()
                .as_str(),
            "/dynablack/RollingBandArtifactVariation/2/1/500:6"
        );
        assert_eq!(
            get_dynamic_two_d_black_blob_fsid(24, 4, 77)
                .unwrap()
                .as_str(),
            "/dynablack/blob/DynamicTwoDBlack/24/4/77"
        );
    }

    #[test]
    fn test_invalid_coordinates() {
        assert_eq!(
            get_rolling_band_artifact_flags_fsid(2, 1, 500, 0),
            Err(FsIdError::invalid_coordinate("duration", 0))
        );
        assert_eq!(
            get_rolling_band_artifact_flags_fsid(2, 1, 1070, 6),
            Err(FsIdError::invalid_coordinate("row", 1070))
        );
        assert!(get_dynamic_two_d_black_blob_fsid(1, 1, 77).is_err());
    }
}
