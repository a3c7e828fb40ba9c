//! GPIO pin assignments for the BellHop main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Relay output (SRD-05VDC coil through a driver transistor)
// ---------------------------------------------------------------------------

/// Digital output driving the bell/strike relay coil.
/// Polarity is configurable: common relay boards are active-low.
pub const RELAY_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Warning lamp
// ---------------------------------------------------------------------------

/// Digital output for the pre-actuation warning lamp (active HIGH).
pub const WARNING_LAMP_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// User button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button for local ring requests.  Level-sensed each tick;
/// there is no debounce circuit on the board revision in production.
pub const BUTTON_GPIO: i32 = 9;
