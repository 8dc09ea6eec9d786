//! Partitioning operations (parted).

use crate::HalResult;
use std::path::Path;

pub const PARTED_BIN: &str = "parted";

/// A single `mkpart` request executed via `parted`.
///
/// `start` and `end` are handed to parted verbatim (offsets or percentages);
/// their syntax and ordering are the tool's business, not ours.
#[derive(Debug, Clone)]
pub struct MkPartSpec {
    pub fs_type: String,
    pub start: String,
    pub end: String,
}

impl MkPartSpec {
    pub fn new(
        fs_type: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            fs_type: fs_type.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Argument vector for `parted`, creating one primary partition.
///
/// Flag order is fixed: alignment before the device path, `--script` and the
/// end-of-options marker before the `mkpart` subcommand.
pub fn mkpart_args(device: &Path, spec: &MkPartSpec) -> Vec<String> {
    vec![
        "-a".to_string(),
        "optimal".to_string(),
        device.display().to_string(),
        "--script".to_string(),
        "--".to_string(),
        "mkpart".to_string(),
        "primary".to_string(),
        spec.fs_type.clone(),
        spec.start.clone(),
        spec.end.clone(),
    ]
}

pub trait PartitionOps {
    /// Create a single primary partition on `device`. Returns the tool's
    /// captured stdout.
    fn mkpart(&self, device: &Path, spec: &MkPartSpec) -> HalResult<String>;
}
