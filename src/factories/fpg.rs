//! Focal plane geometry (`/fpg`) blob identifiers.

use crate::{
    constants::{Cadence, PipelineTaskId},
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, token::fsid_token},
};

fsid_token! {
    /// MATLAB blob kind written by focal plane geometry fitting.
    pub enum FpgBlobSeriesType: "fpg blob type" {
        FpgGeometry => "FpgGeometry",
        FpgImport => "FpgImport",
        FpgResults => "FpgResults",
    }
}

/// Identifier of a geometry blob covering a cadence interval.
///
/// Arguments
/// -----------------
/// * `blob_type`: Kind of blob.
/// * `start_cadence`, `end_cadence`: Covered interval, `0 <= start <= end`.
/// * `pipeline_task_id`: Task that wrote the blob.
///
/// Return
/// ----------
/// * `/fpg/{type}/{start}:{end}:{task}`.
pub fn get_matlab_blob_fsid(
    blob_type: FpgBlobSeriesType,
    start_cadence: Cadence,
    end_cadence: Cadence,
    pipeline_task_id: PipelineTaskId,
) -> Result<FsId, FsIdError> {
    if start_cadence < 0 {
        return Err(FsIdError::invalid_coordinate("start_cadence", start_cadence));
    }
    if end_cadence < start_cadence {
        return Err(FsIdError::invalid_coordinate("end_cadence", end_cadence));
    }
    compose(
        ["fpg", blob_type.as_str()],
        [
            start_cadence.to_string(),
            end_cadence.to_string(),
            pipeline_task_id.to_string(),
        ],
    )
}
