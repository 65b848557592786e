//! Reward calculation for completed drives.
//!
//! A route may carry a three-part reward breakdown. The breakdown is summed,
//! scaled by the vehicle multiplier and rounded to whole points. Routes
//! without a breakdown earn nothing; that is a normal outcome, not a fault.
use crate::constants::DEFAULT_MULTIPLIER;
use crate::numbers::{round_f64_to_i64, u64_to_f64};
use crate::route::Route;
use crate::vehicle::VehicleType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a multiplier is zero, negative or not finite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("multiplier must be a positive finite number, got {0}")]
pub struct MultiplierError(pub f64);

/// Positive scaling factor applied to a base reward.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(f64);

impl Multiplier {
    pub const ONE: Self = Self(DEFAULT_MULTIPLIER);

    /// Build a multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`MultiplierError`] unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Result<Self, MultiplierError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(MultiplierError(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Badge text such as `x2.0`.
    #[must_use]
    pub fn label(self) -> String {
        format!("x{:.1}", self.0)
    }

    /// Multiplier of the selected vehicle, or 1 when nothing is selected.
    #[must_use]
    pub fn for_vehicle(vehicle: Option<&VehicleType>) -> Self {
        vehicle.map_or(Self::ONE, |v| v.multiplier)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = MultiplierError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Multiplier> for f64 {
    fn from(value: Multiplier) -> Self {
        value.0
    }
}

/// Point values for the three reward categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RewardParts {
    #[serde(default)]
    pub entry: u32,
    #[serde(default)]
    pub opportunity: u32,
    #[serde(default)]
    pub social: u32,
}

impl RewardParts {
    #[must_use]
    pub const fn new(entry: u32, opportunity: u32, social: u32) -> Self {
        Self {
            entry,
            opportunity,
            social,
        }
    }

    /// Unscaled sum of all categories.
    #[must_use]
    pub fn base_total(&self) -> u64 {
        u64::from(self.entry) + u64::from(self.opportunity) + u64::from(self.social)
    }
}

/// Reward breakdown attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<RewardParts>", into = "Option<RewardParts>")]
pub enum RewardBreakdown {
    Present(RewardParts),
    #[default]
    Absent,
}

impl RewardBreakdown {
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    #[must_use]
    pub const fn parts(&self) -> Option<&RewardParts> {
        match self {
            Self::Present(parts) => Some(parts),
            Self::Absent => None,
        }
    }
}

impl From<Option<RewardParts>> for RewardBreakdown {
    fn from(value: Option<RewardParts>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl From<RewardBreakdown> for Option<RewardParts> {
    fn from(value: RewardBreakdown) -> Self {
        match value {
            RewardBreakdown::Present(parts) => Some(parts),
            RewardBreakdown::Absent => None,
        }
    }
}

/// The three reward categories, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardCategory {
    /// Base incentive for choosing the carbon-saving route.
    Entry,
    /// Compensation for the extra travel time.
    Opportunity,
    /// Share of the fuel and emission savings returned to the driver.
    Social,
}

impl RewardCategory {
    pub const ALL: [Self; 3] = [Self::Entry, Self::Opportunity, Self::Social];

    /// Translation key prefix for this category.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Opportunity => "opportunity",
            Self::Social => "social",
        }
    }

    /// One-based step number shown on the summary screen.
    #[must_use]
    pub const fn step(self) -> u8 {
        match self {
            Self::Entry => 1,
            Self::Opportunity => 2,
            Self::Social => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardStatus {
    /// The route paid a non-zero base reward.
    Earned,
    /// The route carries no incentive.
    NoIncentive,
}

/// Fully resolved reward for one drive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardSummary {
    pub entry: u32,
    pub opportunity: u32,
    pub social: u32,
    pub base_total: u64,
    pub multiplier: Multiplier,
    pub total: u64,
    pub status: RewardStatus,
}

impl RewardSummary {
    #[must_use]
    pub const fn points_for(&self, category: RewardCategory) -> u32 {
        match category {
            RewardCategory::Entry => self.entry,
            RewardCategory::Opportunity => self.opportunity,
            RewardCategory::Social => self.social,
        }
    }

    /// Category rows in presentation order.
    #[must_use]
    pub fn steps(&self) -> [(RewardCategory, u32); 3] {
        RewardCategory::ALL.map(|category| (category, self.points_for(category)))
    }

    #[must_use]
    pub const fn earned(&self) -> bool {
        matches!(self.status, RewardStatus::Earned)
    }
}

/// Scale a reward breakdown by a multiplier.
#[must_use]
pub fn calculate_reward(breakdown: &RewardBreakdown, multiplier: Multiplier) -> RewardSummary {
    let parts = match breakdown {
        RewardBreakdown::Present(parts) => *parts,
        RewardBreakdown::Absent => RewardParts::default(),
    };
    let base_total = parts.base_total();
    let scaled = u64_to_f64(base_total) * multiplier.value();
    let total = u64::try_from(round_f64_to_i64(scaled)).unwrap_or(0);
    let status = if base_total > 0 {
        RewardStatus::Earned
    } else {
        RewardStatus::NoIncentive
    };
    RewardSummary {
        entry: parts.entry,
        opportunity: parts.opportunity,
        social: parts.social,
        base_total,
        multiplier,
        total,
        status,
    }
}

/// Reward for driving `route` with the given vehicle (multiplier 1 when none).
#[must_use]
pub fn reward_for_route(route: &Route, vehicle: Option<&VehicleType>) -> RewardSummary {
    calculate_reward(&route.rewards, Multiplier::for_vehicle(vehicle))
}

/// Preview total shown on a route card before the drive starts.
#[must_use]
pub fn preview_total(route: &Route, multiplier: Multiplier) -> u64 {
    calculate_reward(&route.rewards, multiplier).total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mult(v: f64) -> Multiplier {
        Multiplier::new(v).unwrap()
    }

    #[test]
    fn eco_breakdown_scales_by_multiplier() {
        let breakdown = RewardBreakdown::Present(RewardParts::new(50, 120, 80));
        let summary = calculate_reward(&breakdown, mult(2.0));
        assert_eq!(summary.base_total, 250);
        assert_eq!(summary.total, 500);
        assert_eq!(summary.status, RewardStatus::Earned);
    }

    #[test]
    fn absent_breakdown_is_zero_for_any_multiplier() {
        for m in [0.5, 1.0, 2.0, 3.0, 17.25] {
            let summary = calculate_reward(&RewardBreakdown::Absent, mult(m));
            assert_eq!(summary.total, 0);
            assert_eq!(summary.steps().map(|(_, p)| p), [0, 0, 0]);
            assert_eq!(summary.status, RewardStatus::NoIncentive);
        }
    }

    #[test]
    fn zero_breakdown_reports_no_incentive() {
        let breakdown = RewardBreakdown::Present(RewardParts::default());
        let summary = calculate_reward(&breakdown, mult(3.0));
        assert_eq!(summary.total, 0);
        assert!(!summary.earned());
    }

    #[test]
    fn totals_round_to_nearest_point() {
        let breakdown = RewardBreakdown::Present(RewardParts::new(1, 1, 1));
        assert_eq!(calculate_reward(&breakdown, mult(0.5)).total, 2);
        assert_eq!(calculate_reward(&breakdown, mult(0.1)).total, 0);
        assert_eq!(calculate_reward(&breakdown, mult(0.7)).total, 2);
    }

    #[test]
    fn total_matches_formula_over_a_grid() {
        let multipliers = [0.5, 1.0, 1.5, 2.0, 2.75, 3.0];
        for entry in [0_u32, 7, 50] {
            for opportunity in [0_u32, 33, 120] {
                for social in [0_u32, 1, 80] {
                    let parts = RewardParts::new(entry, opportunity, social);
                    for m in multipliers {
                        let expected = (f64::from(entry + opportunity + social) * m).round();
                        let got = calculate_reward(&RewardBreakdown::Present(parts), mult(m));
                        assert!((u64_to_f64(got.total) - expected).abs() < f64::EPSILON);
                    }
                }
            }
        }
    }

    #[test]
    fn multiplier_rejects_non_positive_values() {
        assert!(Multiplier::new(0.0).is_err());
        assert!(Multiplier::new(-1.0).is_err());
        assert!(Multiplier::new(f64::NAN).is_err());
        assert_eq!(Multiplier::default(), Multiplier::ONE);
        assert_eq!(Multiplier::for_vehicle(None), Multiplier::ONE);
    }

    #[test]
    fn breakdown_serde_maps_null_to_absent() {
        let absent: RewardBreakdown = serde_json::from_str("null").unwrap();
        assert!(absent.is_absent());
        let present: RewardBreakdown =
            serde_json::from_str(r#"{"entry": 5, "social": 2}"#).unwrap();
        assert_eq!(present.parts().map(RewardParts::base_total), Some(7));
    }

    #[test]
    fn steps_follow_category_order() {
        let breakdown = RewardBreakdown::Present(RewardParts::new(50, 120, 80));
        let summary = calculate_reward(&breakdown, Multiplier::ONE);
        let steps = summary.steps();
        assert_eq!(steps[0], (RewardCategory::Entry, 50));
        assert_eq!(steps[1], (RewardCategory::Opportunity, 120));
        assert_eq!(steps[2], (RewardCategory::Social, 80));
        assert_eq!(RewardCategory::Social.step(), 3);
    }
}
