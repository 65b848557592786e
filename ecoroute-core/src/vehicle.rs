use crate::reward::Multiplier;
use serde::{Deserialize, Serialize};

/// Vehicle classes offered on the setup screen, in display order.
pub const VEHICLE_ORDER: [&str; 4] = ["eco", "sedan", "commercial", "heavy"];

/// Icon shown next to a vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleIcon {
    Leaf,
    #[default]
    Car,
    Truck,
    Container,
}

impl VehicleIcon {
    /// Short glyph used by text renderers.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Leaf => "⚡",
            Self::Car => "🚗",
            Self::Truck => "🚚",
            Self::Container => "🚛",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: String,
    pub name: String,
    pub multiplier: Multiplier,
    pub description: String,
    #[serde(default)]
    pub icon: VehicleIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct VehicleNoId {
    pub name: String,
    pub multiplier: Multiplier,
    pub description: String,
    #[serde(default)]
    pub icon: VehicleIcon,
}

impl VehicleType {
    #[must_use]
    fn with_id(id: String, v: VehicleNoId) -> Self {
        Self {
            id,
            name: v.name,
            multiplier: v.multiplier,
            description: v.description,
            icon: v.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VehiclesList(pub Vec<VehicleType>);

impl VehiclesList {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Load vehicle classes from a JSON object keyed by vehicle id.
    ///
    /// Entries are returned in [`VEHICLE_ORDER`]; ids outside that set are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a multiplier is not positive.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let map: std::collections::HashMap<String, VehicleNoId> = serde_json::from_str(json)?;
        let mut v = Vec::with_capacity(VEHICLE_ORDER.len());
        for id in VEHICLE_ORDER {
            if let Some(entry) = map.get(id) {
                v.push(VehicleType::with_id(id.to_string(), entry.clone()));
            }
        }
        Ok(Self(v))
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&VehicleType> {
        self.0.iter().find(|v| v.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VehicleType> {
        self.0.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&VehicleType> {
        self.0.get(idx)
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

impl<'a> IntoIterator for &'a VehiclesList {
    type Item = &'a VehicleType;
    type IntoIter = std::slice::Iter<'a, VehicleType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "heavy": {
            "name": "Heavy",
            "multiplier": 3.0,
            "description": "Freight",
            "icon": "container"
        },
        "eco": {
            "name": "EV",
            "multiplier": 0.5,
            "description": "Low emission",
            "icon": "leaf"
        },
        "scooter": {
            "name": "Scooter",
            "multiplier": 0.2,
            "description": "Not offered"
        }
    }"#;

    #[test]
    fn vehicle_list_orders_and_filters_entries() {
        let vehicles = VehiclesList::from_json(SAMPLE).unwrap();
        let ids: Vec<_> = vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["eco", "heavy"]);
        assert!(vehicles.get_by_id("scooter").is_none());
        assert_eq!(vehicles.get(1).map(|v| v.icon), Some(VehicleIcon::Container));
    }

    #[test]
    fn multiplier_is_parsed_and_labelled() {
        let vehicles = VehiclesList::from_json(SAMPLE).unwrap();
        let eco = vehicles.get_by_id("eco").unwrap();
        assert!((eco.multiplier.value() - 0.5).abs() < f64::EPSILON);
        assert_eq!(eco.multiplier.label(), "x0.5");
    }

    #[test]
    fn missing_icon_defaults_to_car() {
        let json = r#"{ "sedan": { "name": "Sedan", "multiplier": 1.0, "description": "Baseline" } }"#;
        let vehicles = VehiclesList::from_json(json).unwrap();
        assert_eq!(vehicles.get_by_id("sedan").unwrap().icon, VehicleIcon::Car);
    }

    #[test]
    fn non_positive_multiplier_is_rejected() {
        let json = r#"{ "sedan": { "name": "Sedan", "multiplier": 0.0, "description": "Broken" } }"#;
        assert!(VehiclesList::from_json(json).is_err());
    }

    #[test]
    fn empty_helpers_are_consistent() {
        let empty = VehiclesList::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!((&empty).into_iter().count(), 0);
    }
}
