//! Unit tests for the volume service
//!
//! Runs the service against an in-memory mixer that answers pactl and amixer
//! command lines, so no real process is ever spawned.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::{Arc, Mutex};

use crate::services::volume::{
    BackendKind, CommandLine, CommandRunner, SinkId, VolumeError, VolumeService,
};

/// Mixer state shared by the fake tools
#[derive(Debug, Clone)]
struct MixerState {
    sink: u32,
    volume: i64,
    muted: bool,
}

/// Runner that records every command and simulates pactl, pacmd and amixer
struct RecordingRunner {
    state: Mutex<MixerState>,
    calls: Mutex<Vec<Vec<String>>>,
    fail_with: Option<String>,
}

impl RecordingRunner {
    fn new(sink: u32, volume: i64, muted: bool) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(MixerState {
                sink,
                volume,
                muted,
            }),
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        })
    }

    fn failing(stderr: &str) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(MixerState {
                sink: 0,
                volume: 0,
                muted: false,
            }),
            calls: Mutex::new(Vec::new()),
            fail_with: Some(stderr.to_string()),
        })
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn apply_level(state: &mut MixerState, token: &str) {
        let clamp = |v: i64| v.clamp(0, 150);

        if let Some(magnitude) = token.strip_suffix("%+") {
            state.volume = clamp(state.volume + magnitude.parse::<i64>().unwrap());
        } else if let Some(magnitude) = token.strip_suffix("%-") {
            state.volume = clamp(state.volume - magnitude.parse::<i64>().unwrap());
        } else if let Some(relative) = token.strip_prefix('+') {
            let relative = relative.strip_suffix('%').unwrap();
            state.volume = clamp(state.volume + relative.parse::<i64>().unwrap());
        } else {
            let value = token.strip_suffix('%').unwrap().parse::<i64>().unwrap();
            if token.starts_with('-') {
                state.volume = clamp(state.volume + value);
            } else {
                state.volume = clamp(value);
            }
        }
    }

    fn pactl_listing(state: &MixerState) -> String {
        let other = state.sink + 1;
        format!(
            "Sink #{other}\n\tState: SUSPENDED\n\tMute: no\n\tVolume: front-left: 6553 /  10% / -60.00 dB\n\nSink #{sink}\n\tState: RUNNING\n\tMute: {mute}\n\tVolume: front-left: 1 / {vol}% / 0.00 dB,   front-right: 1 / {vol}% / 0.00 dB\n\tBase Volume: 65536 / 100% / 0.00 dB\n",
            sink = state.sink,
            mute = if state.muted { "yes" } else { "no" },
            vol = state.volume,
        )
    }

    fn amixer_listing(state: &MixerState) -> String {
        let switch = if state.muted { "off" } else { "on" };
        format!(
            "Simple mixer control 'Master',0\n  Limits: Playback 0 - 65536\n  Front Left: Playback 1 [{vol}%] [{switch}]\n  Front Right: Playback 1 [{vol}%] [{switch}]\n",
            vol = state.volume,
        )
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine) -> Result<String, VolumeError> {
        let argv: Vec<String> = command.argv().into_iter().map(String::from).collect();
        self.calls.lock().unwrap().push(argv.clone());

        if let Some(stderr) = &self.fail_with {
            return Err(VolumeError::NonZeroExit {
                command: command.to_string(),
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            });
        }

        let mut state = self.state.lock().unwrap();
        let args: Vec<&str> = argv.iter().skip(1).map(String::as_str).collect();

        let output = match (command.program(), args.as_slice()) {
            ("pacmd", ["list"]) => format!("    index: 7\n  * index: {}\n", state.sink),
            ("pactl", ["list", "sinks"]) => Self::pactl_listing(&state),
            ("pactl", [.., "set-sink-volume", _, level]) => {
                Self::apply_level(&mut state, level);
                String::new()
            }
            ("pactl", ["set-sink-mute", _, flag]) => {
                state.muted = *flag == "1";
                String::new()
            }
            ("amixer", ["get", "Master"]) => Self::amixer_listing(&state),
            ("amixer", ["set", "Master", level]) => {
                Self::apply_level(&mut state, level);
                String::new()
            }
            ("amixer", ["-D", "pulse", "set", "Master", switch]) => {
                state.muted = *switch == "mute";
                String::new()
            }
            _ => panic!("unexpected command: {command}"),
        };

        Ok(output)
    }
}

fn service(kind: BackendKind, runner: &Arc<RecordingRunner>) -> VolumeService {
    VolumeService::with_backend(kind, runner.clone())
}

const BOTH: [BackendKind; 2] = [BackendKind::Pactl, BackendKind::Amixer];

#[test]
fn set_then_get_returns_same_volume() {
    for kind in BOTH {
        let runner = RecordingRunner::new(3, 50, false);
        let service = service(kind, &runner);

        for volume in [0, 1, 37, 99, 100] {
            service.set_volume(SinkId(3), volume).unwrap();
            assert_eq!(service.volume(SinkId(3)).unwrap(), volume as u32, "{kind}");
        }
    }
}

#[test]
fn out_of_range_volume_spawns_nothing() {
    for kind in BOTH {
        let runner = RecordingRunner::new(0, 50, false);
        let service = service(kind, &runner);

        for volume in [-1, 101, i32::MIN, i32::MAX] {
            let err = service.set_volume(SinkId(0), volume).unwrap_err();
            assert!(matches!(err, VolumeError::VolumeOutOfRange(v) if v == volume));
        }

        assert!(runner.calls().is_empty());
    }
}

#[test]
fn mute_is_idempotent_and_unmute_reverses_it() {
    for kind in BOTH {
        let runner = RecordingRunner::new(2, 40, false);
        let service = service(kind, &runner);

        service.mute(SinkId(2)).unwrap();
        service.mute(SinkId(2)).unwrap();
        assert!(service.is_muted(SinkId(2)).unwrap(), "{kind}");

        service.unmute(SinkId(2)).unwrap();
        assert!(!service.is_muted(SinkId(2)).unwrap(), "{kind}");
    }
}

#[test]
fn adjust_moves_volume_both_ways() {
    for kind in BOTH {
        let runner = RecordingRunner::new(1, 50, false);
        let service = service(kind, &runner);

        service.adjust_volume(SinkId(1), 10).unwrap();
        assert_eq!(service.volume(SinkId(1)).unwrap(), 60, "{kind}");

        service.adjust_volume(SinkId(1), -25).unwrap();
        assert_eq!(service.volume(SinkId(1)).unwrap(), 35, "{kind}");
    }
}

#[test]
fn adjust_is_not_range_checked() {
    let runner = RecordingRunner::new(1, 50, false);
    let service = service(BackendKind::Amixer, &runner);

    service.adjust_volume(SinkId(1), -500).unwrap();

    assert_eq!(
        runner.calls(),
        [vec!["amixer", "set", "Master", "500%-"]]
    );
    assert_eq!(service.volume(SinkId(1)).unwrap(), 0);
}

#[test]
fn each_operation_spawns_one_process() {
    let runner = RecordingRunner::new(4, 20, false);
    let service = service(BackendKind::Pactl, &runner);

    service.volume(SinkId(4)).unwrap();
    service.set_volume(SinkId(4), 30).unwrap();
    service.is_muted(SinkId(4)).unwrap();
    service.unmute(SinkId(4)).unwrap();

    assert_eq!(
        runner.calls(),
        [
            vec!["pactl", "list", "sinks"],
            vec!["pactl", "set-sink-volume", "4", "30%"],
            vec!["pactl", "list", "sinks"],
            vec!["pactl", "set-sink-mute", "4", "0"],
        ]
    );
}

#[test]
fn resolve_sink_reads_pacmd_marker() {
    let runner = RecordingRunner::new(5, 20, false);
    let service = service(BackendKind::Pactl, &runner);

    assert_eq!(service.resolve_sink().unwrap(), SinkId(5));
    assert_eq!(runner.calls(), [vec!["pacmd", "list"]]);
}

#[test]
fn unknown_sink_is_a_parse_error_not_zero() {
    let runner = RecordingRunner::new(3, 20, false);
    let service = service(BackendKind::Pactl, &runner);

    assert!(matches!(
        service.volume(SinkId(9)),
        Err(VolumeError::NoVolumeFound)
    ));
    assert!(matches!(
        service.is_muted(SinkId(9)),
        Err(VolumeError::NoMuteInfoFound)
    ));
}

#[test]
fn amixer_ignores_sink_id() {
    let runner = RecordingRunner::new(0, 64, true);
    let service = service(BackendKind::Amixer, &runner);

    assert_eq!(service.volume(SinkId(42)).unwrap(), 64);
    assert!(service.is_muted(SinkId(42)).unwrap());
}

#[test]
fn toggle_flips_state() {
    for kind in BOTH {
        let runner = RecordingRunner::new(0, 10, false);
        let service = service(kind, &runner);

        assert!(service.toggle_mute(SinkId(0)).unwrap());
        assert!(service.is_muted(SinkId(0)).unwrap());
        assert!(!service.toggle_mute(SinkId(0)).unwrap());
        assert!(!service.is_muted(SinkId(0)).unwrap());
    }
}

#[test]
fn execution_failure_carries_command_line() {
    let runner = RecordingRunner::failing("Connection failure: Connection refused");
    let service = service(BackendKind::Pactl, &runner);

    let err = service.mute(SinkId(1)).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("pactl set-sink-mute 1 1"), "{message}");
    assert!(message.contains("Connection refused"), "{message}");
}

#[test]
fn service_reports_injected_backend() {
    let runner = RecordingRunner::new(0, 0, false);
    assert_eq!(
        service(BackendKind::Amixer, &runner).backend_kind(),
        BackendKind::Amixer
    );
    assert_eq!(
        service(BackendKind::Pactl, &runner).backend_kind(),
        BackendKind::Pactl
    );
}
