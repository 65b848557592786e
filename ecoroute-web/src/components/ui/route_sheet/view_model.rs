use crate::game::{Multiplier, Route, RouteKind, RoutesList, TrafficLevel, preview_total};
use crate::i18n::{fmt_number, fmt_points};
use std::collections::BTreeMap;

/// Display-ready figures for one route card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCardModel {
    pub kind: RouteKind,
    pub title: String,
    pub minutes: String,
    pub fuel: String,
    pub distance: String,
    pub traffic: String,
    pub recommended: bool,
    /// Fuel cost saved versus the fastest route, when there is any.
    pub savings: Option<String>,
    pub delay: Option<String>,
    pub points_preview: Option<String>,
    pub warnings: Vec<String>,
}

fn with_arg(key: &str, name: &str, value: &str) -> String {
    let mut m = BTreeMap::new();
    m.insert(name, value);
    crate::i18n::tr(key, Some(&m))
}

fn traffic_label(level: TrafficLevel) -> String {
    crate::i18n::t(&format!("traffic.{}", level.key()))
}

fn route_title(route: &Route) -> String {
    crate::i18n::t_or(&format!("route.{}", route.kind.key()), &route.label)
}

impl RouteCardModel {
    #[must_use]
    pub fn build(route: &Route, routes: &RoutesList, multiplier: Multiplier) -> Self {
        let comparison = routes
            .compare(route)
            .filter(|_| route.is_eco())
            .unwrap_or_default();
        let savings = comparison.has_savings().then(|| {
            with_arg(
                "planning.fuel_saving_value",
                "amount",
                &fmt_number(comparison.fuel_cost_saved_krw),
            )
        });
        let delay = (comparison.delay_minutes > 0).then(|| {
            with_arg(
                "planning.delay",
                "minutes",
                &comparison.delay_minutes.to_string(),
            )
        });
        let preview = preview_total(route, multiplier);
        let points_preview = (preview > 0)
            .then(|| with_arg("planning.points_preview", "points", &fmt_points(preview)));

        let mut warnings = Vec::new();
        if !route.is_eco() {
            if route.traffic == TrafficLevel::High {
                warnings.push(crate::i18n::t("planning.congestion"));
            }
            if route.slope_score.is_some_and(|s| s < 50) {
                warnings.push(crate::i18n::t("planning.steep"));
            }
        }

        Self {
            kind: route.kind,
            title: route_title(route),
            minutes: route.time_min.to_string(),
            fuel: format!("{:.1}L", route.fuel_l),
            distance: with_arg("planning.distance", "km", &format!("{:.1}", route.distance_km)),
            traffic: traffic_label(route.traffic),
            recommended: route.is_eco(),
            savings,
            delay,
            points_preview,
            warnings,
        }
    }
}
