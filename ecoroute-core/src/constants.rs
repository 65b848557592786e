//! Centralized timing and pricing constants for EcoRoute logic.
//!
//! Screen timers and the fuel price used for savings previews live here so
//! that they can only be adjusted through reviewed code changes rather than
//! through the JSON data assets.

use std::time::Duration;

// Logging keys -------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "ECOROUTE_DEBUG_LOGS";
pub(crate) const LOG_TRANSITION: &str = "session.transition";
pub(crate) const LOG_REJECTED: &str = "session.rejected";
pub(crate) const LOG_SCHEDULED: &str = "session.scheduled";

// Screen timers ------------------------------------------------------------
/// Delay between confirming a vehicle and the route sheet appearing.
pub const VEHICLE_CONFIRM_ADVANCE_MS: u64 = 1_500;
/// Length of the simulated drive.
pub const DRIVE_DURATION_MS: u64 = 2_500;
/// Delay between restarting from the summary and the route sheet appearing.
pub const RESTART_ADVANCE_MS: u64 = 1_000;

// Rewards ------------------------------------------------------------------
/// Multiplier used while no vehicle is selected.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;
/// Fuel price used for the savings preview, in KRW per liter.
pub const FUEL_PRICE_KRW_PER_L: f64 = 1_600.0;

#[must_use]
pub const fn vehicle_confirm_delay() -> Duration {
    Duration::from_millis(VEHICLE_CONFIRM_ADVANCE_MS)
}

#[must_use]
pub const fn drive_duration() -> Duration {
    Duration::from_millis(DRIVE_DURATION_MS)
}

#[must_use]
pub const fn restart_delay() -> Duration {
    Duration::from_millis(RESTART_ADVANCE_MS)
}

/// Whether verbose transition logging was requested through the environment.
#[cfg(debug_assertions)]
pub(crate) fn debug_logs_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
pub(crate) const fn debug_logs_enabled() -> bool {
    false
}
