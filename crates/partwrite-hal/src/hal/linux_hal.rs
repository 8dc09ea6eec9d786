//! Linux HAL implementation using real system calls.

use super::{mkpart_args, BlockOps, MkPartSpec, MountOps, PartitionOps, PARTED_BIN};
use crate::procfs::mountinfo;
use crate::{HalError, HalResult};
use std::fs;
use std::io;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const MOUNTINFO: &str = "/proc/self/mountinfo";

/// Real HAL implementation for Linux systems.
#[derive(Debug, Clone, Default)]
pub struct LinuxHal;

impl LinuxHal {
    pub fn new() -> Self {
        Self
    }
}

fn map_command_err(program: &str, err: io::Error) -> HalError {
    if err.kind() == io::ErrorKind::NotFound {
        return HalError::CommandNotFound(program.to_string());
    }
    HalError::Io(err)
}

fn output_failed(program: &str, output: &Output) -> HalError {
    HalError::CommandFailed {
        program: program.to_string(),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

impl BlockOps for LinuxHal {
    fn is_block_device(&self, path: &Path) -> HalResult<bool> {
        match fs::metadata(path) {
            Ok(md) => Ok(md.file_type().is_block_device()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(HalError::Io(err)),
        }
    }
}

impl MountOps for LinuxHal {
    fn is_mounted(&self, device: &Path) -> HalResult<bool> {
        let content = fs::read_to_string(MOUNTINFO)?;
        let entries = mountinfo::parse_mountinfo(&content);
        Ok(mountinfo::device_is_mounted(device, &entries))
    }
}

impl PartitionOps for LinuxHal {
    fn mkpart(&self, device: &Path, spec: &MkPartSpec) -> HalResult<String> {
        let args = mkpart_args(device, spec);
        log::info!("{} {}", PARTED_BIN, args.join(" "));

        // --script keeps parted non-interactive; it never gets our stdin.
        // output() waits for exit and collects both pipes in full.
        let output = Command::new(PARTED_BIN)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| map_command_err(PARTED_BIN, e))?;

        if !output.status.success() {
            return Err(output_failed(PARTED_BIN, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
