//! Keypad → gate → DriveService → outputs, end to end on mocks.

use super::mock_hw::{HwCall, MockDelay, MockHardware, RecordingSink};

use dragondrive::app::commands::{Command, Key};
use dragondrive::app::events::DriveEvent;
use dragondrive::app::ports::DisplayRow;
use dragondrive::app::service::DriveService;
use dragondrive::config::DriveConfig;
use dragondrive::drive::{CommandOutcome, DriveMode};
use dragondrive::error::CommandError;
use dragondrive::heartbeat::Heartbeat;

struct Rig {
    service: DriveService,
    heartbeat: Heartbeat,
    hw: MockHardware,
    delay: MockDelay,
    sink: RecordingSink,
    config: DriveConfig,
}

impl Rig {
    fn new() -> Self {
        let config = DriveConfig::default();
        let heartbeat = Heartbeat::new();
        heartbeat.configure(config.tick_limit).unwrap();
        let mut rig = Self {
            service: DriveService::new(&config),
            heartbeat,
            hw: MockHardware::new(),
            delay: MockDelay::default(),
            sink: RecordingSink::default(),
            config,
        };
        rig.service.start(&mut rig.hw, &mut rig.sink);
        rig.hw.clear();
        rig
    }

    fn poll(&mut self) -> Option<CommandOutcome> {
        self.service.poll_once(&self.heartbeat, &mut self.hw, &mut self.delay, &mut self.sink)
    }

    /// Press a key, run one poll, then let the cooldown expire.
    fn press(&mut self, c: char) -> Option<CommandOutcome> {
        self.hw.press(c);
        let out = self.poll();
        for _ in 0..self.config.tick_limit {
            self.heartbeat.on_tick();
        }
        out
    }
}

#[test]
fn start_paints_mode_label_and_emits_started() {
    let config = DriveConfig::default();
    let mut service = DriveService::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();

    service.start(&mut hw, &mut sink);

    assert_eq!(hw.texts(), [(DisplayRow::Top, 0, "Eco  ")]);
    assert!(matches!(sink.events[0], DriveEvent::Started(_)));
}

#[test]
fn eco_drive_cycle() {
    let mut rig = Rig::new();

    assert_eq!(rig.press('D'), Some(CommandOutcome::Started));
    assert_eq!(rig.hw.duty_writes(), [20]);

    rig.hw.clear();
    rig.press('2');
    assert_eq!(rig.hw.duty_writes(), [21, 22, 23, 24, 25]);
    assert_eq!(rig.hw.last_shown(), Some(0x25));

    rig.hw.clear();
    rig.press('3');
    assert_eq!(rig.hw.duty_writes(), [26, 27, 28, 29, 30]);
    assert!(rig.hw.texts().contains(&(DisplayRow::Bottom, 15, "3")));

    let state = rig.service.state();
    assert_eq!(state.speed.get(), 3);
    assert_eq!(state.duty, 30);
    assert_eq!(state.mode, DriveMode::Eco);
}

#[test]
fn eco_ramp_waits_one_step_per_unit() {
    let mut rig = Rig::new();
    rig.press('2');
    assert_eq!(rig.delay.delays_ms, vec![rig.config.eco_step_ms; 5]);
    assert!(rig.delay.total_ms() < u64::from(rig.config.bad_shift_hold_ms));
}

#[test]
fn bad_shift_holds_message_and_keeps_state() {
    let mut rig = Rig::new();

    let out = rig.press('3');

    assert_eq!(
        out,
        Some(CommandOutcome::Rejected(CommandError::BadShift {
            from: 1,
            requested: 3
        }))
    );
    assert!(rig.hw.duty_writes().is_empty());
    assert_eq!(rig.hw.texts(), [(DisplayRow::Bottom, 0, "Bad Shift")]);
    assert_eq!(rig.delay.delays_ms, [rig.config.bad_shift_hold_ms]);
    assert_eq!(rig.service.state().duty, 20);
    assert_eq!(rig.service.rejections(), 1);
}

#[test]
fn sport_shift_is_one_write() {
    let mut rig = Rig::new();
    rig.press('B');
    rig.press('2');
    rig.press('3');
    rig.hw.clear();

    rig.press('4');

    assert_eq!(rig.hw.duty_writes(), [40]);
    assert_eq!(rig.service.state().duty, 40);
}

#[test]
fn stop_from_top_gear_brakes_to_zero() {
    let mut rig = Rig::new();
    for c in ['B', '2', '3', '4', '5'] {
        rig.press(c);
    }
    assert_eq!(rig.service.state().duty, 50);
    rig.hw.clear();
    rig.delay.delays_ms.clear();

    assert_eq!(rig.press('C'), Some(CommandOutcome::Stopped));

    let mut expected: Vec<u8> = (0..50).rev().collect();
    expected.push(0);
    assert_eq!(rig.hw.duty_writes(), expected);
    assert_eq!(rig.delay.delays_ms, vec![rig.config.brake_step_ms; 50]);
    assert_eq!(rig.hw.texts()[0], (DisplayRow::Bottom, 0, "Stopping"));
    assert_eq!(rig.service.state().speed.get(), 1);
    assert_eq!(rig.service.state().duty, 0);
    assert_eq!(rig.hw.last_shown(), Some(0));
}

#[test]
fn start_after_stop_is_immediate_in_eco() {
    let mut rig = Rig::new();
    rig.press('C');
    rig.hw.clear();
    rig.delay.delays_ms.clear();

    rig.press('D');

    assert_eq!(rig.hw.duty_writes(), [20]);
    assert!(rig.delay.delays_ms.is_empty());
}

#[test]
fn keys_during_cooldown_are_dropped() {
    let mut rig = Rig::new();
    rig.hw.keys.extend([Key::Digit(2), Key::Digit(3), Key::Digit(3)]);

    let first = rig.poll();
    assert!(matches!(first, Some(CommandOutcome::Shifted { .. })));

    for _ in 0..2 {
        let out = rig.poll();
        assert_eq!(out, None);
    }

    assert_eq!(rig.service.keys_dropped(), 2);
    assert_eq!(rig.service.state().speed.get(), 2);
    let dropped = rig
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, DriveEvent::KeyDropped(Key::Digit(3))))
        .count();
    assert_eq!(dropped, 2);
}

#[test]
fn gate_reopens_only_after_tick_limit() {
    let mut rig = Rig::new();
    rig.hw.press('2');
    rig.poll();

    for _ in 0..rig.config.tick_limit - 1 {
        rig.heartbeat.on_tick();
        assert!(!rig.heartbeat.accepting_input());
    }
    rig.heartbeat.on_tick();
    assert!(rig.heartbeat.accepting_input());

    rig.hw.press('3');
    let out = rig.poll();
    assert!(matches!(out, Some(CommandOutcome::Shifted { duty: 30, .. })));
}

#[test]
fn unmapped_keys_do_not_touch_outputs() {
    let mut rig = Rig::new();
    assert_eq!(rig.press('*'), None);
    assert_eq!(rig.press('#'), None);
    assert!(rig.hw.calls.is_empty());
    assert_eq!(rig.service.commands_handled(), 0);
}

#[test]
fn invalid_entry_from_top_gear() {
    let mut rig = Rig::new();
    for c in "2345".chars() {
        rig.press(c);
    }
    rig.hw.clear();

    let out = rig.press('6');

    assert_eq!(out, Some(CommandOutcome::Rejected(CommandError::InvalidEntry(6))));
    assert!(rig.hw.calls.is_empty());
    assert_eq!(rig.service.state().duty, 50);
}

#[test]
fn mode_switch_mid_drive_changes_next_ramp_only() {
    let mut rig = Rig::new();
    rig.press('2');
    rig.press('B');
    assert!(rig
        .hw
        .calls
        .contains(&HwCall::Write { row: DisplayRow::Top, col: 0, text: "Sport".into() }));
    rig.hw.clear();

    rig.press('3');
    assert_eq!(rig.hw.duty_writes(), [30]);

    rig.press('A');
    rig.hw.clear();
    rig.press('2');
    assert_eq!(rig.hw.duty_writes(), [29, 28, 27, 26, 25]);
}

#[test]
fn telemetry_counts_everything() {
    let mut rig = Rig::new();
    rig.press('2');
    rig.press('4');
    rig.press('#');
    rig.hw.press('3');
    rig.hw.press('3');
    rig.poll();
    rig.poll();

    let t = rig.service.build_telemetry(&rig.heartbeat);
    assert_eq!(t.commands_handled, 3);
    assert_eq!(t.rejections, 1);
    assert_eq!(t.keys_dropped, 1);
    assert_eq!(t.maintenance_runs, 3);
    assert!(!t.accepting_input);
    assert_eq!(t.state.speed.get(), 3);
}

#[test]
fn direct_command_bypasses_gate() {
    let mut rig = Rig::new();
    rig.heartbeat.begin_cooldown();
    let out = rig
        .service
        .handle_command(Command::SetSpeed(2), &mut rig.hw, &mut rig.delay);
    assert!(matches!(out, CommandOutcome::Shifted { duty: 25, .. }));
}
