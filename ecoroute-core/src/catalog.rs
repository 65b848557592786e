//! Read-only data tables consumed by every screen.
//!
//! The catalog is parsed once from four JSON documents and validated before a
//! session starts, so the reward calculator and the state machine never see
//! malformed data.
use crate::certificate::Certificate;
use crate::leaderboard::Leaderboard;
use crate::route::{RouteKind, RoutesList};
use crate::vehicle::VehiclesList;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("no vehicle classes defined")]
    NoVehicles,
    #[error("duplicate vehicle id `{0}`")]
    DuplicateVehicle(String),
    #[error("route kind `{0}` appears more than once")]
    DuplicateRoute(&'static str),
    #[error("no fastest route to compare against")]
    MissingFastestRoute,
    #[error("eco route `{0}` has no reward breakdown")]
    EcoRouteWithoutRewards(String),
    #[error("leaderboard rank {0} appears more than once")]
    DuplicateRank(u32),
    #[error("certificate percentile {0} is outside 1..=100")]
    InvalidPercentile(u8),
}

/// Raw JSON documents making up a catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSources<'a> {
    pub vehicles: &'a str,
    pub routes: &'a str,
    pub leaderboard: &'a str,
    pub certificate: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub vehicles: VehiclesList,
    pub routes: RoutesList,
    pub leaderboard: Leaderboard,
    pub certificate: Certificate,
}

impl Catalog {
    /// Parse and validate all four documents.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] naming the first document that fails to
    /// parse, or the first validation failure.
    pub fn from_sources(sources: &CatalogSources<'_>) -> Result<Self, CatalogError> {
        let vehicles = VehiclesList::from_json(sources.vehicles).map_err(parse_err("vehicles"))?;
        let routes = RoutesList::from_json(sources.routes).map_err(parse_err("routes"))?;
        let leaderboard =
            Leaderboard::from_json(sources.leaderboard).map_err(parse_err("leaderboard"))?;
        let certificate =
            Certificate::from_json(sources.certificate).map_err(parse_err("certificate"))?;
        let catalog = Self {
            vehicles,
            routes,
            leaderboard,
            certificate,
        };
        catalog.validate()?;
        log::debug!(
            "catalog loaded: {} vehicles, {} routes, {} ranked drivers",
            catalog.vehicles.len(),
            catalog.routes.len(),
            catalog.leaderboard.len()
        );
        Ok(catalog)
    }

    /// Check cross-table invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.vehicles.is_empty() {
            return Err(CatalogError::NoVehicles);
        }
        let mut ids = HashSet::new();
        for vehicle in &self.vehicles {
            if !ids.insert(vehicle.id.as_str()) {
                return Err(CatalogError::DuplicateVehicle(vehicle.id.clone()));
            }
        }

        let mut kinds = HashSet::new();
        for route in &self.routes {
            if !kinds.insert(route.kind) {
                return Err(CatalogError::DuplicateRoute(route.kind.key()));
            }
            if route.is_eco() && route.rewards.is_absent() {
                return Err(CatalogError::EcoRouteWithoutRewards(route.label.clone()));
            }
        }
        if !kinds.contains(&RouteKind::Fastest) {
            return Err(CatalogError::MissingFastestRoute);
        }

        let mut ranks = HashSet::new();
        for entry in &self.leaderboard {
            if !ranks.insert(entry.rank) {
                return Err(CatalogError::DuplicateRank(entry.rank));
            }
        }

        if !self.certificate.has_valid_percent() {
            return Err(CatalogError::InvalidPercentile(self.certificate.top_percent));
        }
        Ok(())
    }
}

fn parse_err(name: &'static str) -> impl FnOnce(serde_json::Error) -> CatalogError {
    move |source| CatalogError::Parse { name, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VEHICLES: &str = r#"{
        "sedan": {"name": "Sedan", "multiplier": 1.0, "description": "Baseline", "icon": "car"}
    }"#;
    const ROUTES: &str = r#"[
        {"type": "fastest", "label": "Fast", "time_min": 30, "fuel_l": 3.0, "distance_km": 15.2},
        {"type": "eco", "label": "Eco", "time_min": 34, "fuel_l": 2.4, "distance_km": 16.5,
         "rewards": {"entry": 50, "opportunity": 120, "social": 80}}
    ]"#;
    const BOARD: &str = r#"[{"rank": 1, "name": "a", "points": 10, "region": "r"}]"#;
    const CERT: &str = r#"{"title": "t", "tier": "gold", "top_percent": 5,
        "total_savings_krw": 1, "co2_reduction_kg": 1.0, "verified_by": "v"}"#;

    fn sources<'a>(vehicles: &'a str, routes: &'a str) -> CatalogSources<'a> {
        CatalogSources {
            vehicles,
            routes,
            leaderboard: BOARD,
            certificate: CERT,
        }
    }

    #[test]
    fn valid_sources_load() {
        let catalog = Catalog::from_sources(&sources(VEHICLES, ROUTES)).unwrap();
        assert_eq!(catalog.vehicles.len(), 1);
        assert!(catalog.routes.eco().is_some());
    }

    #[test]
    fn zero_multiplier_is_a_parse_error() {
        let bad = r#"{"sedan": {"name": "S", "multiplier": 0.0, "description": "d"}}"#;
        let err = Catalog::from_sources(&sources(bad, ROUTES)).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { name: "vehicles", .. }));
        assert!(err.to_string().contains("multiplier"));
    }

    #[test]
    fn eco_route_must_carry_rewards() {
        let routes = r#"[
            {"type": "fastest", "label": "Fast", "time_min": 30, "fuel_l": 3.0, "distance_km": 15.2},
            {"type": "eco", "label": "Eco", "time_min": 34, "fuel_l": 2.4, "distance_km": 16.5}
        ]"#;
        let err = Catalog::from_sources(&sources(VEHICLES, routes)).unwrap_err();
        assert!(matches!(err, CatalogError::EcoRouteWithoutRewards(label) if label == "Eco"));
    }

    #[test]
    fn fastest_route_is_required() {
        let routes = r#"[
            {"type": "eco", "label": "Eco", "time_min": 34, "fuel_l": 2.4, "distance_km": 16.5,
             "rewards": {"entry": 1}}
        ]"#;
        let err = Catalog::from_sources(&sources(VEHICLES, routes)).unwrap_err();
        assert!(matches!(err, CatalogError::MissingFastestRoute));
    }

    #[test]
    fn duplicate_route_kind_is_rejected() {
        let routes = r#"[
            {"type": "fastest", "label": "A", "time_min": 30, "fuel_l": 3.0, "distance_km": 15.2},
            {"type": "fastest", "label": "B", "time_min": 31, "fuel_l": 3.1, "distance_km": 15.0}
        ]"#;
        let err = Catalog::from_sources(&sources(VEHICLES, routes)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRoute("fastest")));
    }

    #[test]
    fn empty_vehicle_table_is_rejected() {
        let err = Catalog::from_sources(&sources("{}", ROUTES)).unwrap_err();
        assert!(matches!(err, CatalogError::NoVehicles));
    }
}
