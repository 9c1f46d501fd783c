//! Heartbeat under a real concurrent ticker thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use dragondrive::config::DriveConfig;
use dragondrive::heartbeat::Heartbeat;
use dragondrive::heartbeat::tick::TickRate;

#[test]
fn default_config_timing_matches_prescaler() {
    let config = DriveConfig::default();
    let rate = TickRate::from_selector(config.tick_selector, config.tick_ref_clock_hz).unwrap();
    assert_eq!(rate.period_us(), 90_112);
}

#[test]
fn concurrent_ticks_never_lose_a_window() {
    const LIMIT: u16 = 4;
    const TICKS: u32 = 40_000;

    let hb = Arc::new(Heartbeat::new());
    hb.configure(LIMIT).unwrap();

    let stop = Arc::new(AtomicBool::new(false));
    let reader = {
        let hb = Arc::clone(&hb);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                let count = hb.tick_count();
                assert!(count < LIMIT, "counter escaped its window: {count}");
            }
        })
    };

    let ticker = {
        let hb = Arc::clone(&hb);
        thread::spawn(move || {
            for _ in 0..TICKS {
                hb.on_tick();
            }
        })
    };

    ticker.join().unwrap();
    stop.store(true, Ordering::Relaxed);
    reader.join().unwrap();

    assert_eq!(hb.maintenance_runs(), TICKS / u32::from(LIMIT));
    assert_eq!(hb.tick_count(), 0);
}

#[test]
fn gate_reopens_while_main_thread_waits() {
    let hb = Arc::new(Heartbeat::new());
    hb.configure(3).unwrap();
    hb.begin_cooldown();

    let ticker = {
        let hb = Arc::clone(&hb);
        thread::spawn(move || {
            for _ in 0..3 {
                thread::sleep(Duration::from_millis(1));
                hb.on_tick();
            }
        })
    };

    let deadline = Instant::now() + Duration::from_secs(2);
    while !hb.accepting_input() && Instant::now() < deadline {
        thread::yield_now();
    }
    ticker.join().unwrap();

    assert!(hb.accepting_input());
    assert_eq!(hb.maintenance_runs(), 1);
}
