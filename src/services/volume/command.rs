use std::fmt;

use super::Percent;

/// Semantic intent handed to a backend's command builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Read the current volume
    GetVolume,
    /// Set an absolute volume
    SetVolume(Percent),
    /// Change the volume by a signed percentage
    AdjustVolume(i32),
    /// Read the current mute state
    GetMute,
    /// Mute the output
    Mute,
    /// Unmute the output
    Unmute,
}

/// Program and arguments to execute, passed to the OS as discrete tokens
///
/// Never joined into a shell string for execution; `Display` is only used
/// for error messages and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Build a command line from a program name and its arguments
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Executable name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments following the executable
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argument vector, executable first
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}
