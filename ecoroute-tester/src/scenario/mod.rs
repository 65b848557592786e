pub mod drive;
mod scripts;

pub use drive::DriveCtx;

use anyhow::Result;

/// Scripted drives the tester knows how to replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Smoke,
    Restart,
    Guard,
    StaleTimer,
    Hub,
}

impl Scenario {
    pub const ALL: [Self; 5] = [
        Self::Smoke,
        Self::Restart,
        Self::Guard,
        Self::StaleTimer,
        Self::Hub,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Smoke => "smoke",
            Self::Restart => "restart",
            Self::Guard => "guard",
            Self::StaleTimer => "stale-timer",
            Self::Hub => "hub",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Smoke => "Pick a vehicle, wait for planning, drive the eco route, check the reward",
            Self::Restart => "Smoke drive, restart, then a fastest-route drive that earns nothing",
            Self::Guard => "Out-of-order events are rejected without moving the screen",
            Self::StaleTimer => "Manual planning supersedes the confirm timer",
            Self::Hub => "Eco-Hub tabs and the idle timer leave each other alone",
        }
    }

    /// Run the script against `ctx`; returns the points earned by the last drive.
    ///
    /// # Errors
    ///
    /// Fails with the first broken expectation.
    pub async fn run(self, ctx: &mut DriveCtx<'_>) -> Result<u64> {
        match self {
            Self::Smoke => scripts::smoke(ctx).await,
            Self::Restart => scripts::restart(ctx).await,
            Self::Guard => scripts::guard(ctx).await,
            Self::StaleTimer => scripts::stale_timer(ctx).await,
            Self::Hub => scripts::hub(ctx).await,
        }
    }
}

pub fn get_scenario(name: &str) -> Option<Scenario> {
    Scenario::ALL.into_iter().find(|s| s.key() == name)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    Scenario::ALL
        .iter()
        .map(|s| (s.key(), s.description()))
        .collect()
}
