//! GPIO / peripheral pin assignments for the drive controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Motor H-bridge (L293D-style: enable + two direction inputs)
// ---------------------------------------------------------------------------

/// LEDC PWM output on the bridge enable pin.
pub const MOTOR_EN_GPIO: i32 = 1;
pub const MOTOR_IN1_GPIO: i32 = 2;
pub const MOTOR_IN2_GPIO: i32 = 3;

/// LEDC frequency for the motor enable (1 kHz).
pub const MOTOR_PWM_FREQ_HZ: u32 = 1_000;

// ---------------------------------------------------------------------------
// 4×4 keypad matrix
// ---------------------------------------------------------------------------

/// Row drive outputs, top to bottom.  Driven low one at a time.
pub const KEYPAD_ROW_GPIOS: [i32; 4] = [4, 5, 6, 7];
/// Column inputs with pull-ups, left to right.  Low = pressed.
pub const KEYPAD_COL_GPIOS: [i32; 4] = [8, 9, 10, 11];

// ---------------------------------------------------------------------------
// 4-digit 7-segment display (common anode, active-low digit select)
// ---------------------------------------------------------------------------

/// Segment outputs a..g.
pub const SEGMENT_GPIOS: [i32; 7] = [12, 13, 14, 15, 16, 17, 18];
/// Digit select outputs, leftmost first.
pub const DIGIT_SELECT_GPIOS: [i32; 4] = [21, 38, 39, 40];
