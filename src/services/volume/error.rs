/// Errors returned by volume operations
///
/// Execution failures (the tool could not run or exited non-zero) are kept
/// apart from parse failures (the tool ran but printed nothing usable).
#[derive(thiserror::Error, Debug)]
pub enum VolumeError {
    /// Process could not be spawned
    #[error("failed to execute \"{command}\" ({reason})")]
    Execution {
        /// Command line that was attempted
        command: String,
        /// Underlying spawn error
        reason: String,
    },

    /// Process ran but reported failure
    #[error("failed to execute \"{command}\" ({status}){}", format_stderr(.stderr))]
    NonZeroExit {
        /// Command line that was attempted
        command: String,
        /// Exit status as reported by the OS
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// Output carried no volume for the requested sink
    #[error("no volume found")]
    NoVolumeFound,

    /// Output carried no mute state for the requested sink
    #[error("no muted information found")]
    NoMuteInfoFound,

    /// Daemon listing had no default sink marker
    #[error("no fallback sink found")]
    NoFallbackSink,

    /// Default sink marker line did not end in a sink number
    #[error("invalid sink id in line \"{0}\"")]
    InvalidSinkId(String),

    /// Absolute volume outside 0..=100
    #[error("out of valid volume range: {0} (must be 0-100)")]
    VolumeOutOfRange(i32),
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
