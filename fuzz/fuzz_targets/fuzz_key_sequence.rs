//! Fuzz target: `DriveService::poll_once`
//!
//! Treats each input byte as either a key press or a tick and asserts that
//! the drive state never leaves the gear table and the tick counter never
//! escapes its window.
//!
//! cargo fuzz run fuzz_key_sequence

#![no_main]

use dragondrive::app::commands::Key;
use dragondrive::app::events::DriveEvent;
use dragondrive::app::ports::{DigitSink, DisplayRow, DisplaySink, EventSink, KeypadSource, PwmSink};
use dragondrive::app::service::DriveService;
use dragondrive::config::DriveConfig;
use dragondrive::drive::GEAR_TABLE;
use dragondrive::heartbeat::Heartbeat;
use embedded_hal::delay::DelayNs;
use libfuzzer_sys::fuzz_target;

const KEYS: &[u8; 16] = b"0123456789ABCD*#";

#[derive(Default)]
struct Bench {
    next: Option<Key>,
    duty: u8,
    wrote: bool,
}

impl KeypadSource for Bench {
    fn poll(&mut self) -> Option<Key> {
        self.next.take()
    }
}
impl PwmSink for Bench {
    fn set_duty(&mut self, duty: u8) {
        self.duty = duty;
        self.wrote = true;
    }
}
impl DisplaySink for Bench {
    fn write(&mut self, _row: DisplayRow, col: u8, text: &str) {
        assert!(usize::from(col) + text.len() <= 16, "write overruns the line");
    }
}
impl DigitSink for Bench {
    fn show(&mut self, _value: u16) {}
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &DriveEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Some((&limit, rest)) = data.split_first() else {
        return;
    };
    let limit = u16::from(limit % 16).max(1);

    let hb = Heartbeat::new();
    if hb.configure(limit).is_err() {
        return;
    }
    let mut svc = DriveService::new(&DriveConfig::default());
    let mut hw = Bench::default();

    for &b in rest {
        if b & 0x80 != 0 {
            hb.on_tick();
        } else {
            hw.next = Key::from_char(char::from(KEYS[usize::from(b & 0x0F)]));
            svc.poll_once(&hb, &mut hw, &mut NoDelay, &mut Discard);
        }
        assert!(hb.tick_count() < limit);
        let s = svc.state();
        assert!(s.duty == 0 || GEAR_TABLE.contains(&s.duty));
        if hw.wrote {
            assert_eq!(hw.duty, s.duty);
        }
    }
});
