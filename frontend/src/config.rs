use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long the simulated backend takes before accepting a submission.
pub const SIMULATED_SEND_DELAY_MS: u32 = 1_000;

pub const DEMO_SCREEN_INTERVAL_MS: u32 = 5_000;
pub const CALL_RING_MS: u32 = 3_000;
pub const TRANSCRIPT_STEP_MS: u32 = 3_000;

pub const CONTACT_EMAIL: &str = "info@tri-snap.com";
