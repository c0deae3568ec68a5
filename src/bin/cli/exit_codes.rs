//! Exit codes for the CLI tool.

use xmindkit::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 2;
/// Archive format error
pub const BAD_ARCHIVE: i32 = 3;
/// Path selected no node, several nodes, or a non-topic node
pub const TARGET_ERROR: i32 = 4;
/// I/O error
pub const IO_ERROR: i32 = 5;
/// Invalid command line arguments
pub const BAD_ARGS: i32 = 255;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    FatalError,
    BadArchive,
    TargetError,
    IoError,
    BadArgs,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::FatalError => FATAL_ERROR,
            Self::BadArchive => BAD_ARCHIVE,
            Self::TargetError => TARGET_ERROR,
            Self::IoError => IO_ERROR,
            Self::BadArgs => BAD_ARGS,
        }
    }
}

/// Converts an xmindkit error to an exit code
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::Io(_) => ExitCode::IoError,
        Error::InvalidFormat(_) | Error::MissingContent { .. } | Error::InvalidContent(_) => {
            ExitCode::BadArchive
        }
        Error::Json(_) => ExitCode::FatalError,
        Error::TargetNotFound { .. }
        | Error::AmbiguousTarget { .. }
        | Error::InvalidTarget { .. } => ExitCode::TargetError,
        Error::InvalidPath { .. }
        | Error::InvalidColor { .. }
        | Error::SheetIndexOutOfRange { .. }
        | Error::InvalidCompressionLevel { .. }
        | Error::DuplicateId { .. } => ExitCode::BadArgs,
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}
