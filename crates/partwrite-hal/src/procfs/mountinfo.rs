//! Parsing helpers for `/proc/self/mountinfo` (and similar mountinfo files).

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountInfo {
    pub mount_point: PathBuf,
    pub source: String,
}

pub fn parse_mountinfo(content: &str) -> Vec<MountInfo> {
    content
        .lines()
        .filter_map(|line| {
            // mountinfo format:
            //   <pre fields...> <mount point> <...> - <fstype> <source> <superopts>
            let (pre, post) = line.split_once(" - ")?;
            let pre_fields: Vec<&str> = pre.split_whitespace().collect();
            if pre_fields.len() < 5 {
                return None;
            }
            let mount_point = unescape_mount_path(pre_fields[4]);
            let mut post_fields = post.split_whitespace();
            let _fstype = post_fields.next()?;
            let source = post_fields.next()?;
            Some(MountInfo {
                mount_point: PathBuf::from(mount_point),
                source: unescape_mount_path(source),
            })
        })
        .collect()
}

/// Check whether `device` appears as the source of any mount entry.
pub fn device_is_mounted(device: &Path, entries: &[MountInfo]) -> bool {
    let target = device.to_string_lossy();
    entries.iter().any(|entry| entry.source == target)
}

pub fn unescape_mount_path(raw: &str) -> String {
    raw.replace("\\040", " ")
        .replace("\\011", "\t")
        .replace("\\012", "\n")
        .replace("\\134", "\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mountinfo_extracts_mountpoints_and_sources() {
        let sample = "36 28 0:31 / / rw,relatime - ext4 /dev/sda3 rw\n".to_string()
            + "37 28 0:32 / /boot rw,relatime - ext4 /dev/sda2 rw\n";
        let entries = parse_mountinfo(&sample);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].mount_point, PathBuf::from("/"));
        assert_eq!(entries[0].source, "/dev/sda3");
        assert_eq!(entries[1].mount_point, PathBuf::from("/boot"));
        assert_eq!(entries[1].source, "/dev/sda2");
    }

    #[test]
    fn parse_mountinfo_skips_short_lines() {
        let entries = parse_mountinfo("garbage - line\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn device_is_mounted_matches_exact_source() {
        let sample = "36 28 0:31 / / rw,relatime - ext4 /dev/sda3 rw\n";
        let entries = parse_mountinfo(sample);
        assert!(device_is_mounted(Path::new("/dev/sda3"), &entries));
        assert!(!device_is_mounted(Path::new("/dev/sda"), &entries));
        assert!(!device_is_mounted(Path::new("/dev/sdb1"), &entries));
    }

    #[test]
    fn mountinfo_unescapes_paths() {
        let sample = "36 28 0:31 / /mnt/data\\040disk rw,relatime - ext4 /dev/sda3 rw\n";
        let entries = parse_mountinfo(sample);
        assert_eq!(entries[0].mount_point, PathBuf::from("/mnt/data disk"));
    }

    #[test]
    fn virtual_filesystems_never_match_a_device() {
        let sample = "22 28 0:21 / /proc rw,nosuid - proc proc rw\n";
        let entries = parse_mountinfo(sample);
        assert!(!device_is_mounted(Path::new("/dev/sda1"), &entries));
    }
}
