use crate::services::volume::{
    BackendKind, CommandLine, Operation, SinkId, VolumeError,
    parsing::{first_percentage, mute_token},
};

use super::MixerBackend;

/// ALSA backend driving `amixer` on the `Master` control
///
/// amixer has no sinks: the sink id is accepted and ignored. Status comes from
/// the first `Playback` line that carries a percentage.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmixerBackend;

const PROGRAM: &str = "amixer";
const CONTROL: &str = "Master";
/// Device used for mute switching, the PulseAudio ALSA plugin
const MUTE_DEVICE: &str = "pulse";

impl AmixerBackend {
    fn playback_lines(output: &str) -> impl Iterator<Item = &str> {
        output
            .lines()
            .filter(|line| line.contains("Playback") && line.contains('%'))
    }
}

impl MixerBackend for AmixerBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Amixer
    }

    fn command(&self, operation: Operation, _sink: SinkId) -> CommandLine {
        match operation {
            Operation::GetVolume | Operation::GetMute => {
                CommandLine::new(PROGRAM, ["get", CONTROL])
            }
            Operation::SetVolume(volume) => CommandLine::new(
                PROGRAM,
                ["set".to_string(), CONTROL.to_string(), volume.to_string()],
            ),
            Operation::AdjustVolume(delta) => {
                let sign = if delta >= 0 { '+' } else { '-' };
                CommandLine::new(
                    PROGRAM,
                    [
                        "set".to_string(),
                        CONTROL.to_string(),
                        format!("{}%{sign}", delta.unsigned_abs()),
                    ],
                )
            }
            Operation::Mute => {
                CommandLine::new(PROGRAM, ["-D", MUTE_DEVICE, "set", CONTROL, "mute"])
            }
            Operation::Unmute => {
                CommandLine::new(PROGRAM, ["-D", MUTE_DEVICE, "set", CONTROL, "unmute"])
            }
        }
    }

    fn parse_volume(&self, _sink: SinkId, output: &str) -> Result<u32, VolumeError> {
        Self::playback_lines(output)
            .next()
            .and_then(first_percentage)
            .ok_or(VolumeError::NoVolumeFound)
    }

    fn parse_muted(&self, _sink: SinkId, output: &str) -> Result<bool, VolumeError> {
        Self::playback_lines(output)
            .find_map(mute_token)
            .ok_or(VolumeError::NoMuteInfoFound)
    }
}
