//! DragonDrive Firmware, Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter            LogEventSink   SystemDelay   │
//! │  (Pwm+Display+Digit+Keypad) (EventSink)    (DelayNs)     │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ─────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        DriveService (pure logic)               │      │
//! │  │  key mapping · DriveController · DutyRamp      │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                          ▲                               │
//! │        Heartbeat ◀── esp_timer tick (RTI period)         │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use embedded_hal::delay::DelayNs;
use log::info;

use dragondrive::adapters::hardware::HardwareAdapter;
use dragondrive::adapters::log_sink::LogEventSink;
use dragondrive::adapters::time::{SystemDelay, UptimeClock};
use dragondrive::app::events::DriveEvent;
use dragondrive::app::ports::EventSink;
use dragondrive::app::service::DriveService;
use dragondrive::config::DriveConfig;
use dragondrive::drivers::keypad::KeypadDriver;
use dragondrive::drivers::lcd::CharDisplay;
use dragondrive::drivers::motor::MotorDriver;
use dragondrive::drivers::segment::SegmentDisplay;
use dragondrive::drivers::{hw_init, hw_timer};
use dragondrive::heartbeat::Heartbeat;
use dragondrive::heartbeat::tick::TickRate;

/// Shared with the tick timer callback; everything else is owned by `main`.
static HEARTBEAT: Heartbeat = Heartbeat::new();

/// Bench builds can bake a JSON config in at compile time.
const CONFIG_JSON: Option<&str> = option_env!("DRAGONDRIVE_CONFIG");

fn load_config() -> Result<DriveConfig> {
    match CONFIG_JSON {
        Some(json) => DriveConfig::from_json(json).context("DRAGONDRIVE_CONFIG rejected"),
        None => {
            let config = DriveConfig::default();
            config.validate().context("default config rejected")?;
            Ok(config)
        }
    }
}

fn boot() -> Result<DriveConfig> {
    let config = load_config()?;
    info!("Config: {:?}", config);

    let rate = TickRate::from_selector(config.tick_selector, config.tick_ref_clock_hz)
        .context("tick selector")?;
    HEARTBEAT.configure(config.tick_limit)?;

    hw_init::init_peripherals()?;
    hw_timer::start_tick_timer(&HEARTBEAT, rate)?;

    info!(
        "Tick every {} us, input reopens after {} ticks",
        rate.period_us(),
        config.tick_limit
    );
    Ok(config)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  DragonDrive v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config, timer, peripherals (fatal on failure) ──────
    let config = match boot() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Boot failed: {:#}, halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 3. Adapters and service ───────────────────────────────
    let mut hw = HardwareAdapter::new(
        MotorDriver::new(),
        KeypadDriver::new(),
        CharDisplay::new(),
        SegmentDisplay::new(),
    );
    let mut sink = LogEventSink::new();
    let mut delay = SystemDelay;
    let clock = UptimeClock::new();

    let mut service = DriveService::new(&config);
    service.start(&mut hw, &mut sink);

    // ── 4. Polling loop ───────────────────────────────────────
    let telemetry_every_ms = u64::from(config.telemetry_interval_secs) * 1_000;
    let mut last_telemetry_ms = clock.uptime_ms();

    loop {
        service.poll_once(&HEARTBEAT, &mut hw, &mut delay, &mut sink);
        hw.refresh_digits();

        let now = clock.uptime_ms();
        if now.saturating_sub(last_telemetry_ms) >= telemetry_every_ms {
            last_telemetry_ms = now;
            sink.emit(&DriveEvent::Telemetry(service.build_telemetry(&HEARTBEAT)));
        }

        delay.delay_ms(config.poll_interval_ms);
    }
}
