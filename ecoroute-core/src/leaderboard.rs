use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub points: u64,
    pub region: String,
}

/// Podium styling bucket for a ranking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
    Other,
}

impl Podium {
    #[must_use]
    pub const fn for_rank(rank: u32) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Gold => "podium-gold",
            Self::Silver => "podium-silver",
            Self::Bronze => "podium-bronze",
            Self::Other => "podium-other",
        }
    }
}

/// Total points gathered by one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStanding {
    pub region: String,
    pub points: u64,
    pub drivers: u32,
}

/// The two strongest regions and the gap between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionBattle {
    pub leader: RegionStanding,
    pub runner_up: RegionStanding,
    pub gap: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Leaderboard(pub Vec<LeaderboardEntry>);

impl Leaderboard {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Parse a leaderboard from a JSON array. Entries are sorted by rank.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut entries: Vec<LeaderboardEntry> = serde_json::from_str(json)?;
        entries.sort_by_key(|e| e.rank);
        Ok(Self(entries))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeaderboardEntry> {
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

    /// Points per region, highest first. Ties keep the better-ranked region first.
    #[must_use]
    pub fn region_standings(&self) -> Vec<RegionStanding> {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, (u64, u32)> = HashMap::new();
        for entry in &self.0 {
            let slot = totals.entry(entry.region.as_str()).or_insert_with(|| {
                order.push(entry.region.as_str());
                (0, 0)
            });
            slot.0 = slot.0.saturating_add(entry.points);
            slot.1 += 1;
        }
        let mut standings: Vec<RegionStanding> = order
            .into_iter()
            .filter_map(|region| {
                totals.get(region).map(|(points, drivers)| RegionStanding {
                    region: region.to_string(),
                    points: *points,
                    drivers: *drivers,
                })
            })
            .collect();
        // stable sort keeps first-seen order on ties
        standings.sort_by(|a, b| b.points.cmp(&a.points));
        standings
    }

    /// Leading region against the runner-up, if at least two regions compete.
    #[must_use]
    pub fn region_battle(&self) -> Option<RegionBattle> {
        let mut standings = self.region_standings().into_iter();
        let leader = standings.next()?;
        let runner_up = standings.next()?;
        let gap = leader.points - runner_up.points;
        Some(RegionBattle {
            leader,
            runner_up,
            gap,
        })
    }
}

impl<'a> IntoIterator for &'a Leaderboard {
    type Item = &'a LeaderboardEntry;
    type IntoIter = std::slice::Iter<'a, LeaderboardEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
