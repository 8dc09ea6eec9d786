//! CLI argument parsing for partwrite.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "partwrite")]
#[command(about = "Create a single partition on a block device via parted")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Raise the log level (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a single primary partition spanning the given range
    Write {
        /// Target block device (e.g. /dev/sdb)
        device: PathBuf,

        /// Filesystem type label handed to parted (e.g. ext4, fat32)
        filesystem: String,

        /// Partition start, as parted understands it
        #[arg(long, default_value = "0%")]
        start: String,

        /// Partition end, as parted understands it
        #[arg(long, default_value = "100%")]
        stop: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_defaults_span_the_whole_device() {
        let cli = Cli::try_parse_from(["partwrite", "write", "/dev/sdb", "ext4"]).unwrap();
        let Command::Write {
            device,
            filesystem,
            start,
            stop,
            force,
        } = cli.command;
        assert_eq!(device, PathBuf::from("/dev/sdb"));
        assert_eq!(filesystem, "ext4");
        assert_eq!(start, "0%");
        assert_eq!(stop, "100%");
        assert!(!force);
    }

    #[test]
    fn write_accepts_a_range_and_force() {
        let cli = Cli::try_parse_from([
            "partwrite", "write", "/dev/sdb", "fat32", "--start", "10%", "--stop", "90%",
            "--force",
        ])
        .unwrap();
        let Command::Write {
            start, stop, force, ..
        } = cli.command;
        assert_eq!(start, "10%");
        assert_eq!(stop, "90%");
        assert!(force);
    }

    #[test]
    fn write_requires_device_and_filesystem() {
        assert!(Cli::try_parse_from(["partwrite", "write", "/dev/sdb"]).is_err());
        assert!(Cli::try_parse_from(["partwrite", "write"]).is_err());
    }

    #[test]
    fn verbose_is_counted() {
        let cli =
            Cli::try_parse_from(["partwrite", "-vv", "write", "/dev/sdb", "ext4"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
