//! Pixel response function (`/prf`) blob identifiers.

use crate::{
    constants::{Cadence, CcdModule, CcdOutput, PipelineTaskId},
    coordinates::validate_module_output,
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, token::fsid_token},
};

fsid_token! {
    /// MATLAB blob kind written by PRF fitting.
    pub enum PrfBlobSeriesType: "prf blob type" {
        PrfCollection => "PrfCollection",
    }
}

/// Identifier of a PRF blob of one channel.
///
/// Return
/// ----------
/// * `/prf/{type}/{module}/{output}/{startCadence}:{task}`.
pub fn get_matlab_blob_fsid(
    blob_type: PrfBlobSeriesType,
    module: CcdModule,
    output: CcdOutput,
    start_cadence: Cadence,
    pipeline_task_id: PipelineTaskId,
) -> Result<FsId, FsIdError> {
    validate_module_output(module, output)?;
    if start_cadence < 0 {
        return Err(FsIdError::invalid_coordinate("start_cadence", start_cadence));
    }
    compose(
        [
            "prf".to_string(),
            blob_type.to_string(),
            module.to_string(),
            output.to_string(),
        ],
        [start_cadence.to_string(), pipeline_task_id.to_string()],
    )
}
