use crate::services::volume::{
    BackendKind, CommandLine, Operation, SinkId, VolumeError,
    parsing::{first_percentage, mute_token, trim_indent},
};

use super::MixerBackend;

/// PulseAudio backend driving `pactl`
///
/// Status is read from `pactl list sinks`, a series of blank-line separated
/// records each headed by `Sink #<id>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PactlBackend;

const PROGRAM: &str = "pactl";

impl PactlBackend {
    /// Lines of the record whose header names `sink`
    fn sink_record(sink: SinkId, output: &str) -> Option<impl Iterator<Item = &str>> {
        let header = format!("Sink #{}", sink.0);

        output
            .split("\n\n")
            .map(trim_indent)
            .find(|record| record.split('\n').next() == Some(header.as_str()))
            .map(|record| record.split('\n').map(trim_indent))
    }
}

impl MixerBackend for PactlBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Pactl
    }

    fn command(&self, operation: Operation, sink: SinkId) -> CommandLine {
        let sink = sink.to_string();

        match operation {
            Operation::GetVolume | Operation::GetMute => {
                CommandLine::new(PROGRAM, ["list", "sinks"])
            }
            Operation::SetVolume(volume) => CommandLine::new(
                PROGRAM,
                ["set-sink-volume".to_string(), sink, volume.to_string()],
            ),
            Operation::AdjustVolume(delta) => {
                // negative deltas already carry their '-'
                let sign = if delta >= 0 { "+" } else { "" };
                CommandLine::new(
                    PROGRAM,
                    [
                        "--".to_string(),
                        "set-sink-volume".to_string(),
                        sink,
                        format!("{sign}{delta}%"),
                    ],
                )
            }
            Operation::Mute => {
                CommandLine::new(PROGRAM, ["set-sink-mute".to_string(), sink, "1".to_string()])
            }
            Operation::Unmute => {
                CommandLine::new(PROGRAM, ["set-sink-mute".to_string(), sink, "0".to_string()])
            }
        }
    }

    fn parse_volume(&self, sink: SinkId, output: &str) -> Result<u32, VolumeError> {
        let mut lines = Self::sink_record(sink, output).ok_or(VolumeError::NoVolumeFound)?;

        lines
            .find(|line| line.starts_with("Volume:"))
            .and_then(first_percentage)
            .ok_or(VolumeError::NoVolumeFound)
    }

    fn parse_muted(&self, sink: SinkId, output: &str) -> Result<bool, VolumeError> {
        let mut lines = Self::sink_record(sink, output).ok_or(VolumeError::NoMuteInfoFound)?;

        lines
            .filter(|line| line.starts_with("Mute: "))
            .find_map(mute_token)
            .ok_or(VolumeError::NoMuteInfoFound)
    }
}
