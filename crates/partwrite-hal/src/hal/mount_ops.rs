//! Mount status queries.

use crate::HalResult;
use std::path::Path;

/// Trait for querying the mount table.
pub trait MountOps {
    /// Check whether the block device at `device` is the source of any
    /// current mount.
    ///
    /// # Arguments
    /// * `device` - Device path (e.g., `/dev/sdb1`)
    fn is_mounted(&self, device: &Path) -> HalResult<bool>;
}
