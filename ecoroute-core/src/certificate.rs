use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateTier {
    Gold,
    Silver,
    Bronze,
}

impl CertificateTier {
    /// Translation key for the tier badge.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Gold => "hub.cert.tier.gold",
            Self::Silver => "hub.cert.tier.silver",
            Self::Bronze => "hub.cert.tier.bronze",
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Gold => "tier-gold",
            Self::Silver => "tier-silver",
            Self::Bronze => "tier-bronze",
        }
    }
}

/// Green driver certificate shown in the Eco-Hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub tier: CertificateTier,
    /// Percentile band, e.g. 5 for "top 5%".
    pub top_percent: u8,
    pub total_savings_krw: u64,
    pub co2_reduction_kg: f64,
    pub verified_by: String,
}

impl Certificate {
    /// Parse a certificate from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether the percentile band lies within 1..=100.
    #[must_use]
    pub const fn has_valid_percent(&self) -> bool {
        self.top_percent >= 1 && self.top_percent <= 100
    }
}
