//! The partition write operation: validate the target, gate on
//! confirmation, run parted.

use crate::errors::WriteError;
use log::info;
use partwrite_hal::{MkPartSpec, SystemHal};
use std::path::PathBuf;

/// A single partition-write request, one per invocation.
#[derive(Debug, Clone)]
pub struct WriteRequest {
    pub device: PathBuf,
    pub filesystem: String,
    pub start: String,
    pub stop: String,
    pub force: bool,
}

/// Validate preconditions in order, confirm with the operator unless
/// `force`, and hand the request to parted. Returns the tool's stdout.
///
/// `confirm` is only consulted when `force` is off; it receives a prompt
/// naming the target device.
pub fn run<H, C>(hal: &H, request: &WriteRequest, confirm: C) -> Result<String, WriteError>
where
    H: SystemHal,
    C: FnOnce(&str) -> anyhow::Result<bool>,
{
    if !hal.is_block_device(&request.device)? {
        return Err(WriteError::NotBlockDevice(request.device.clone()));
    }
    if hal.is_mounted(&request.device)? {
        return Err(WriteError::DeviceBusy(request.device.clone()));
    }

    if !request.force {
        let prompt = format!(
            "You are about to write a new partition to {}. This is irreversible. Continue?",
            request.device.display()
        );
        if !confirm(&prompt).map_err(WriteError::Confirm)? {
            return Err(WriteError::Aborted);
        }
    }

    let spec = MkPartSpec::new(
        request.filesystem.as_str(),
        request.start.as_str(),
        request.stop.as_str(),
    );
    let stdout = hal.mkpart(&request.device, &spec)?;
    info!(
        "Created {} partition on {} ({}..{})",
        request.filesystem,
        request.device.display(),
        request.start,
        request.stop
    );
    Ok(stdout)
}
