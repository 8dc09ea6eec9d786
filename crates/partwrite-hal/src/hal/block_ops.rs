//! Block device identity checks.

use crate::HalResult;
use std::path::Path;

/// Trait for classifying device paths.
pub trait BlockOps {
    /// Check whether `path` names an existing block-special file.
    ///
    /// A missing path reads as `false`; other I/O errors propagate.
    fn is_block_device(&self, path: &Path) -> HalResult<bool>;
}
