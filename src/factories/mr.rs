//! Generic report (`/mr`) identifiers, keyed by the producing module's name.

use crate::{
    constants::PipelineTaskId,
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, required},
};

/// Identifier of a report written by a pipeline task.
///
/// Arguments
/// -----------------
/// * `module_name`: Name of the producing pipeline module, non-empty.
/// * `pipeline_task_id`: Task that wrote the report.
/// * `identifier`: Optional discriminator when a task writes several reports. When
///   supplied it must be non-empty.
///
/// Return
/// ----------
/// * `/mr/reports/{module}/{task}` or `/mr/reports/{module}/{task}:{identifier}`.
pub fn get_report_fsid(
    module_name: &str,
    pipeline_task_id: PipelineTaskId,
    identifier: Option<&str>,
) -> Result<FsId, FsIdError> {
    let module_name = required("module_name", module_name)?;
    let mut name = vec![pipeline_task_id.to_string()];
    if let Some(identifier) = identifier {
        name.push(required("identifier", identifier)?.to_string());
    }
    compose(["mr", "reports", module_name], name)
}

#[cfg(test)]
mod mr_test {
    use super::*;

    #[test]
    fn test_report() {
        assert_eq!(
            get_report_fsid("pdq", 12, None).unwrap().as_str(),
            "/mr/reports/pdq/12"
        );
        let id = get_report_fsid("pdq", 12, Some("summary")).unwrap();
        assert_eq!(id.as_str(), "/mr/reports/pdq/12:summary");
        assert_eq!(id.name_tokens().collect::<Vec<_>>(), ["12", "summary"]);
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            get_report_fsid("", 12, None),
            Err(FsIdError::NullRequiredArgument("module_name"))
        );
        assert_eq!(
            get_report_fsid("pdq", 12, Some("")),
            Err(FsIdError::NullRequiredArgument("identifier"))
        );
        assert!(matches!(
            get_report_fsid("p/dq", 12, None),
            Err(FsIdError::InvalidSegment { .. })
        ));
    }
}
