//! ESP32 time adapters.
//!
//! - [`SystemDelay`] implements [`DelayNs`] for ramps and the bad-shift
//!   hold.  On target it yields to FreeRTOS; on host it sleeps the thread.
//! - [`UptimeClock`] gives monotonic milliseconds since boot for the
//!   telemetry interval, from `esp_timer_get_time()` on target and
//!   `std::time::Instant` on host.

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDelay;

impl DelayNs for SystemDelay {
    #[cfg(target_os = "espidf")]
    fn delay_ns(&mut self, ns: u32) {
        esp_idf_hal::delay::Ets::delay_us(ns.div_ceil(1_000));
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    #[cfg(target_os = "espidf")]
    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

pub struct UptimeClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_ms(&self) -> u64 {
        // SAFETY: esp_timer_get_time is a read of the RTC counter.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64 / 1_000
    }

    /// Milliseconds since boot (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
