//! Fake HAL implementation for testing.
//!
//! This implementation records all operations without executing them,
//! allowing for CI-safe testing without root privileges or real disks.

use super::{mkpart_args, BlockOps, MkPartSpec, MountOps, PartitionOps, PARTED_BIN};
use crate::{HalError, HalResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Mkpart {
        device: PathBuf,
        args: Vec<String>,
    },
}

/// Shared state for FakeHal operations.
#[derive(Debug, Default)]
struct FakeHalState {
    /// All operations that were recorded
    operations: Vec<Operation>,
    /// Paths that read as block-special files
    block_devices: HashSet<PathBuf>,
    /// Devices currently acting as a mount source
    mounted_devices: HashSet<PathBuf>,
    /// Scripted failure for the next mkpart call
    mkpart_failure: Option<(Option<i32>, String)>,
}

/// Fake HAL implementation that records operations without executing them.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` as an existing block-special file.
    pub fn add_block_device(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().block_devices.insert(path.into());
    }

    /// Mark `device` as the source of a current mount.
    pub fn set_mounted(&self, device: impl Into<PathBuf>) {
        self.state
            .lock()
            .unwrap()
            .mounted_devices
            .insert(device.into());
    }

    /// Script the next mkpart call to fail as if parted exited non-zero.
    pub fn fail_mkpart(&self, code: Option<i32>, stderr: impl Into<String>) {
        self.state.lock().unwrap().mkpart_failure = Some((code, stderr.into()));
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.state.lock().unwrap().operations.clone()
    }

    /// Get the number of operations recorded.
    pub fn operation_count(&self) -> usize {
        self.state.lock().unwrap().operations.len()
    }

    /// Check if a specific operation was recorded.
    pub fn has_operation(&self, check: impl Fn(&Operation) -> bool) -> bool {
        self.state.lock().unwrap().operations.iter().any(check)
    }

    /// Clear all recorded operations and configured state.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.operations.clear();
        state.block_devices.clear();
        state.mounted_devices.clear();
        state.mkpart_failure = None;
    }
}

impl BlockOps for FakeHal {
    fn is_block_device(&self, path: &Path) -> HalResult<bool> {
        Ok(self.state.lock().unwrap().block_devices.contains(path))
    }
}

impl MountOps for FakeHal {
    fn is_mounted(&self, device: &Path) -> HalResult<bool> {
        let mounted = self.state.lock().unwrap().mounted_devices.contains(device);
        log::info!("FAKE HAL: is_mounted({}) = {}", device.display(), mounted);
        Ok(mounted)
    }
}

impl PartitionOps for FakeHal {
    fn mkpart(&self, device: &Path, spec: &MkPartSpec) -> HalResult<String> {
        let args = mkpart_args(device, spec);
        log::info!("FAKE HAL: {} {}", PARTED_BIN, args.join(" "));

        let mut state = self.state.lock().unwrap();
        state.operations.push(Operation::Mkpart {
            device: device.to_path_buf(),
            args,
        });

        if let Some((code, stderr)) = state.mkpart_failure.take() {
            return Err(HalError::CommandFailed {
                program: PARTED_BIN.to_string(),
                code,
                stderr,
            });
        }
        Ok(String::new())
    }
}
