use chrono_tz::Tz;
use log::Level;

/// Id of the canvas the animated background draws into.
pub const BACKGROUND_CANVAS_ID: &str = "bg-canvas";

/// Timezone the header clock is pinned to.
pub const CLOCK_TIMEZONE: Tz = chrono_tz::Europe::Helsinki;
pub const CLOCK_TICK_MS: u32 = 1_000;

/// Query parameter set by the contact form redirect.
pub const SENT_PARAM: &str = "sent";
pub const TOAST_DURATION_MS: u32 = 4_500;

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_STAGGER_MS: u32 = 60;

/// Distance from the top of the viewport at which a section counts as current.
pub const NAV_ACTIVATION_LINE: f64 = 120.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
