//! EcoRoute Core
//!
//! Platform-agnostic logic for the EcoRoute navigation prototype: the vehicle
//! and route catalog, the reward calculator and the screen state machine.
//! This crate has no UI or browser dependencies.

pub mod catalog;
pub mod certificate;
pub mod constants;
#[cfg(feature = "async")]
pub mod driver;
pub mod leaderboard;
pub mod numbers;
pub mod reward;
pub mod route;
pub mod schedule;
pub mod session;
pub mod vehicle;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CatalogSources};
pub use certificate::{Certificate, CertificateTier};
#[cfg(feature = "async")]
pub use driver::TimerDriver;
pub use leaderboard::{Leaderboard, LeaderboardEntry, Podium, RegionBattle, RegionStanding};
pub use reward::{
    Multiplier, MultiplierError, RewardBreakdown, RewardCategory, RewardParts, RewardStatus,
    RewardSummary, calculate_reward, preview_total, reward_for_route,
};
pub use route::{Route, RouteComparison, RouteKind, RoutesList, TrafficLevel};
pub use schedule::{AdvanceQueue, AdvanceToken, ScheduledAdvance};
pub use session::{
    HubTab, Overlay, Screen, Session, SessionError, SessionEvent, Transition,
};
pub use vehicle::{VehicleIcon, VehicleType, VehiclesList};

use anyhow::Context;

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the vehicle, route, leaderboard and certificate tables.
    ///
    /// # Errors
    ///
    /// Returns an error if any table cannot be read, parsed or validated.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Entry point tying a data loader to new sessions.
pub struct EcoRouteEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> EcoRouteEngine<L>
where
    L: DataLoader,
{
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Load the catalog through the configured loader.
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        self.data_loader
            .load_catalog()
            .context("failed to load EcoRoute catalog")
    }

    /// Load the catalog and open a session on the setup screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn start(&self) -> anyhow::Result<(Catalog, Session)> {
        let catalog = self.load_catalog()?;
        Ok((catalog, Session::new()))
    }

    pub const fn loader(&self) -> &L {
        &self.data_loader
    }
}
