//! HAL trait definitions and implementations.
//!
//! This module defines the traits for system operations and provides
//! both real (LinuxHal) and fake (FakeHal) implementations.

pub mod block_ops;
pub mod fake_hal;
pub mod linux_hal;
pub mod mount_ops;
pub mod partition_ops;

pub use block_ops::BlockOps;
pub use fake_hal::{FakeHal, Operation};
pub use linux_hal::LinuxHal;
pub use mount_ops::MountOps;
pub use partition_ops::{mkpart_args, MkPartSpec, PartitionOps, PARTED_BIN};

/// Complete HAL combining all system operation traits.
pub trait SystemHal: BlockOps + MountOps + PartitionOps + Send + Sync {}

/// Automatically implement SystemHal for any type implementing all required traits.
impl<T> SystemHal for T where T: BlockOps + MountOps + PartitionOps + Send + Sync {}
