//! Default sink discovery through PulseAudio daemon introspection.
//!
//! `pacmd list` prints every sink; the default one is flagged with a `*`
//! in front of its `index:` line, e.g. `  * index: 1`.

use super::{CommandLine, SinkId, VolumeError};

/// Command whose output names the default sink
pub fn discovery_command() -> CommandLine {
    CommandLine::new("pacmd", ["list"])
}

/// Read the default sink id from `pacmd list` output
///
/// The first line containing `*` is the marker line; the digits it ends with
/// are the sink id.
///
/// # Errors
/// * `VolumeError::NoFallbackSink` - No marker line present
/// * `VolumeError::InvalidSinkId` - Marker line does not end in a number
pub fn parse_default_sink(output: &str) -> Result<SinkId, VolumeError> {
    let line = output
        .lines()
        .find(|line| line.contains('*'))
        .ok_or(VolumeError::NoFallbackSink)?
        .trim_end();

    let prefix = line.trim_end_matches(|c: char| c.is_ascii_digit());

    line[prefix.len()..]
        .parse()
        .map(SinkId)
        .map_err(|_| VolumeError::InvalidSinkId(line.to_string()))
}
