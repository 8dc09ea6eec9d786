//! Hardware abstraction layer for partwrite.
//!
//! External commands and mount-table queries are world-touching and go
//! through these traits so the write flow can be tested without root
//! privileges or real disks.

pub mod error;
pub mod hal;
pub mod procfs;

pub use error::{HalError, HalResult};
pub use hal::{
    mkpart_args, BlockOps, FakeHal, LinuxHal, MkPartSpec, MountOps, Operation, PartitionOps,
    SystemHal, PARTED_BIN,
};
