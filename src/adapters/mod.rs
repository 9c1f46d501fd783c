//! Adapters, concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to                  |
//! |------------|---------------------|------------------------------|
//! | `hardware` | PwmSink             | H-bridge via LEDC PWM        |
//! |            | DisplaySink         | 2×16 character display       |
//! |            | DigitSink           | 4-digit 7-segment display    |
//! |            | KeypadSource        | 4×4 keypad matrix            |
//! | `log_sink` | EventSink           | Serial log output            |
//! | `time`     | DelayNs, uptime     | FreeRTOS delay, esp_timer    |

pub mod hardware;
pub mod log_sink;
pub mod time;
