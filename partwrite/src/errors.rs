use partwrite_hal::HalError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("{} is not a block device", .0.display())]
    NotBlockDevice(PathBuf),

    #[error("{} is mounted; unmount it and retry", .0.display())]
    DeviceBusy(PathBuf),

    #[error("Operation aborted by user")]
    Aborted,

    #[error("Failed to read confirmation input: {0}")]
    Confirm(anyhow::Error),

    #[error(transparent)]
    Hal(#[from] HalError),
}

impl WriteError {
    /// Process exit code for this failure. Precondition failures get their
    /// own codes; a failed parted run propagates the tool's exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            WriteError::NotBlockDevice(_) => 2,
            WriteError::DeviceBusy(_) => 3,
            WriteError::Aborted => 4,
            WriteError::Hal(HalError::CommandFailed { code, .. }) => code.unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn precondition_failures_have_distinct_exit_codes() {
        let dev = Path::new("/dev/sdb").to_path_buf();
        assert_eq!(WriteError::NotBlockDevice(dev.clone()).exit_code(), 2);
        assert_eq!(WriteError::DeviceBusy(dev).exit_code(), 3);
        assert_eq!(WriteError::Aborted.exit_code(), 4);
    }

    #[test]
    fn parted_exit_code_is_propagated() {
        let err = WriteError::from(HalError::CommandFailed {
            program: "parted".to_string(),
            code: Some(5),
            stderr: String::new(),
        });
        assert_eq!(err.exit_code(), 5);

        let killed = WriteError::from(HalError::CommandFailed {
            program: "parted".to_string(),
            code: None,
            stderr: String::new(),
        });
        assert_eq!(killed.exit_code(), 1);
    }

    #[test]
    fn command_failure_message_carries_stderr_verbatim() {
        let err = WriteError::from(HalError::CommandFailed {
            program: "parted".to_string(),
            code: Some(1),
            stderr: "unrecognised disk label".to_string(),
        });
        assert!(err.to_string().contains("unrecognised disk label"));
    }

    #[test]
    fn messages_name_the_device() {
        let err = WriteError::DeviceBusy(Path::new("/dev/sdz").to_path_buf());
        assert!(err.to_string().contains("/dev/sdz"));
    }
}
