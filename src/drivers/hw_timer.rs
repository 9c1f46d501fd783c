//! Periodic tick timer using ESP-IDF's esp_timer API.
//!
//! Fires [`Heartbeat::on_tick`] once per [`TickRate`] period.  On
//! simulation targets a background thread approximates the timing.
//!
//! Timer callbacks execute in the ESP timer task context (not ISR), and
//! only touch the heartbeat's atomics.

use crate::error::{Result, TimerError};
use crate::heartbeat::Heartbeat;
use crate::heartbeat::tick::TickRate;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(arg: *mut core::ffi::c_void) {
    // SAFETY: `arg` is the `&'static Heartbeat` passed to esp_timer_create
    // below; it outlives the timer.
    let heartbeat = unsafe { &*(arg as *const Heartbeat) };
    heartbeat.on_tick();
}

/// Start the periodic tick timer driving `heartbeat`.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer(heartbeat: &'static Heartbeat, rate: TickRate) -> Result<()> {
    // SAFETY: TICK_TIMER is written here once at boot from the single
    // main-task context before any timer callback fires.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: heartbeat as *const Heartbeat as *mut core::ffi::c_void,
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: c"rti".as_ptr(),
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK {
            return Err(TimerError::CreateFailed(ret).into());
        }
        let ret = esp_timer_start_periodic(TICK_TIMER, u64::from(rate.period_us()));
        if ret != ESP_OK {
            return Err(TimerError::StartFailed(ret).into());
        }
    }
    log::info!("hw_timer: tick every {} us", rate.period_us());
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_tick_timer(heartbeat: &'static Heartbeat, rate: TickRate) -> Result<()> {
    let period = rate.as_duration();
    std::thread::Builder::new()
        .name("rti-sim".into())
        .spawn(move || {
            loop {
                std::thread::sleep(period);
                heartbeat.on_tick();
            }
        })
        .map_err(|_| TimerError::CreateFailed(-1))?;
    log::info!("hw_timer(sim): tick every {} us", rate.period_us());
    Ok(())
}
