use crate::constants::FUEL_PRICE_KRW_PER_L;
use crate::numbers::round_f64_to_i64;
use crate::reward::RewardBreakdown;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Fastest,
    Eco,
}

impl RouteKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::Eco => "eco",
        }
    }

    #[must_use]
    pub const fn is_eco(self) -> bool {
        matches!(self, Self::Eco)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    Low,
    #[default]
    Moderate,
    High,
}

impl TrafficLevel {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// A candidate route shown on the planning sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "type")]
    pub kind: RouteKind,
    pub label: String,
    /// Travel time in minutes.
    pub time_min: u32,
    /// Expected fuel use in liters.
    pub fuel_l: f64,
    pub distance_km: f64,
    #[serde(default)]
    pub traffic: TrafficLevel,
    /// Flatness score, 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_score: Option<u8>,
    /// Expected idling in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_time_min: Option<u32>,
    #[serde(default, skip_serializing_if = "RewardBreakdown::is_absent")]
    pub rewards: RewardBreakdown,
}

impl Route {
    #[must_use]
    pub const fn is_eco(&self) -> bool {
        self.kind.is_eco()
    }
}

/// Savings of a route measured against the fastest route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RouteComparison {
    pub delay_minutes: u32,
    pub fuel_saved_l: f64,
    pub fuel_cost_saved_krw: u64,
}

impl RouteComparison {
    /// Compare `route` against `fastest`. Negative differences clamp to zero.
    #[must_use]
    pub fn between(route: &Route, fastest: &Route) -> Self {
        let delay_minutes = route.time_min.saturating_sub(fastest.time_min);
        let fuel_saved_l = (fastest.fuel_l - route.fuel_l).max(0.0);
        let cost = round_f64_to_i64(fuel_saved_l * FUEL_PRICE_KRW_PER_L);
        Self {
            delay_minutes,
            fuel_saved_l,
            fuel_cost_saved_krw: u64::try_from(cost).unwrap_or(0),
        }
    }

    /// Percentage of fuel saved relative to the fastest route.
    #[must_use]
    pub fn fuel_saved_percent(&self, fastest: &Route) -> u32 {
        if fastest.fuel_l <= 0.0 {
            return 0;
        }
        let pct = round_f64_to_i64(self.fuel_saved_l / fastest.fuel_l * 100.0);
        u32::try_from(pct).unwrap_or(0)
    }

    #[must_use]
    pub fn has_savings(&self) -> bool {
        self.fuel_cost_saved_krw > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoutesList(pub Vec<Route>);

impl RoutesList {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Parse routes from a JSON array, keeping file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let routes: Vec<Route> = serde_json::from_str(json)?;
        Ok(Self(routes))
    }

    #[must_use]
    pub fn by_kind(&self, kind: RouteKind) -> Option<&Route> {
        self.0.iter().find(|r| r.kind == kind)
    }

    #[must_use]
    pub fn fastest(&self) -> Option<&Route> {
        self.by_kind(RouteKind::Fastest)
    }

    #[must_use]
    pub fn eco(&self) -> Option<&Route> {
        self.by_kind(RouteKind::Eco)
    }

    /// Comparison of `route` against the fastest route, if one exists.
    #[must_use]
    pub fn compare(&self, route: &Route) -> Option<RouteComparison> {
        self.fastest().map(|f| RouteComparison::between(route, f))
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Route> {
        self.0.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoutesList {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::RewardParts;

    const ROUTES: &str = r#"[
        {
            "type": "fastest",
            "label": "Fastest",
            "time_min": 30,
            "fuel_l": 3.0,
            "distance_km": 15.2,
            "traffic": "high"
        },
        {
            "type": "eco",
            "label": "Eco",
            "time_min": 34,
            "fuel_l": 2.4,
            "distance_km": 16.5,
            "traffic": "low",
            "slope_score": 95,
            "idle_time_min": 2,
            "rewards": { "entry": 50, "opportunity": 120, "social": 80 }
        }
    ]"#;

    #[test]
    fn routes_parse_with_optional_rewards() {
        let routes = RoutesList::from_json(ROUTES).unwrap();
        assert_eq!(routes.len(), 2);
        let fastest = routes.fastest().unwrap();
        assert!(fastest.rewards.is_absent());
        assert_eq!(fastest.slope_score, None);
        let eco = routes.eco().unwrap();
        assert_eq!(
            eco.rewards,
            RewardBreakdown::Present(RewardParts::new(50, 120, 80))
        );
        assert_eq!(eco.traffic, TrafficLevel::Low);
        assert_eq!(eco.slope_score, Some(95));
    }

    #[test]
    fn eco_route_compares_against_fastest() {
        let routes = RoutesList::from_json(ROUTES).unwrap();
        let eco = routes.eco().unwrap();
        let cmp = routes.compare(eco).unwrap();
        assert_eq!(cmp.delay_minutes, 4);
        assert!((cmp.fuel_saved_l - 0.6).abs() < 1e-9);
        assert_eq!(cmp.fuel_cost_saved_krw, 960);
        assert_eq!(cmp.fuel_saved_percent(routes.fastest().unwrap()), 20);
        assert!(cmp.has_savings());
    }

    #[test]
    fn fastest_route_has_no_savings_against_itself() {
        let routes = RoutesList::from_json(ROUTES).unwrap();
        let fastest = routes.fastest().unwrap();
        let cmp = routes.compare(fastest).unwrap();
        assert_eq!(cmp, RouteComparison::default());
        assert!(!cmp.has_savings());
    }

    #[test]
    fn absent_rewards_are_not_serialized() {
        let routes = RoutesList::from_json(ROUTES).unwrap();
        let json = serde_json::to_string(routes.fastest().unwrap()).unwrap();
        assert!(!json.contains("rewards"));
        assert!(json.contains(r#""type":"fastest""#));
    }
}
