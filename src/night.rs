//! Night window used for the widget theme and icon.

use chrono::{Local, Timelike};

/// First hour (inclusive) of the night window.
pub const NIGHT_STARTS_AT: u32 = 20;
/// First hour (inclusive) after the night window ends.
pub const NIGHT_ENDS_AT: u32 = 6;

/// Night is 20:00 up to, but not including, 06:00.
pub fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_STARTS_AT || hour < NIGHT_ENDS_AT
}

/// Evaluate the night window against the local wall clock.
pub fn is_night_now() -> bool {
    let hour = Local::now().hour();
    let night = is_night_hour(hour);
    tracing::debug!(hour, night, "evaluated night window");
    night
}
