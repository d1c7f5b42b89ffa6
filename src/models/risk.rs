//! Sparse incident-risk lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One risk entry for a (depot, community) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEntry {
    /// Depot side of the pair.
    pub depot_id: String,
    /// Community side of the pair.
    pub community_id: String,
    /// Risk score in [0, 1].
    pub score: f64,
}

/// Sparse risk scores keyed by the (depot id, community id) pair.
///
/// The key is an explicit tuple, never a concatenated string, so ids
/// containing separator characters cannot collide. Missing pairs score 0.0.
///
/// Serializes as a list of [`RiskEntry`] values.
///
/// # Examples
///
/// ```
/// use relief_alloc::models::RiskLookup;
///
/// let mut risk = RiskLookup::new();
/// risk.insert("d1", "c1", 0.7);
/// assert_eq!(risk.score("d1", "c1"), 0.7);
/// assert_eq!(risk.score("d1", "c2"), 0.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<RiskEntry>", into = "Vec<RiskEntry>")]
pub struct RiskLookup {
    scores: BTreeMap<(String, String), f64>,
}

impl RiskLookup {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the risk score for a (depot, community) pair.
    pub fn insert(
        &mut self,
        depot_id: impl Into<String>,
        community_id: impl Into<String>,
        score: f64,
    ) {
        self.scores
            .insert((depot_id.into(), community_id.into()), score);
    }

    /// Risk score for a pair, defaulting to 0.0 when absent.
    pub fn score(&self, depot_id: &str, community_id: &str) -> f64 {
        self.scores
            .get(&(depot_id.to_owned(), community_id.to_owned()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterates all entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.scores
            .iter()
            .map(|((d, c), &s)| (d.as_str(), c.as_str(), s))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl From<Vec<RiskEntry>> for RiskLookup {
    fn from(entries: Vec<RiskEntry>) -> Self {
        let mut lookup = Self::new();
        for e in entries {
            lookup.insert(e.depot_id, e.community_id, e.score);
        }
        lookup
    }
}

impl From<RiskLookup> for Vec<RiskEntry> {
    fn from(lookup: RiskLookup) -> Self {
        lookup
            .scores
            .into_iter()
            .map(|((depot_id, community_id), score)| RiskEntry {
                depot_id,
                community_id,
                score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_default_zero() {
        let risk = RiskLookup::new();
        assert!(risk.is_empty());
        assert_eq!(risk.score("d1", "c1"), 0.0);
    }

    #[test]
    fn test_risk_insert_and_lookup() {
        let mut risk = RiskLookup::new();
        risk.insert("d1", "c1", 0.4);
        risk.insert("d2", "c1", 0.9);
        assert_eq!(risk.len(), 2);
        assert_eq!(risk.score("d1", "c1"), 0.4);
        assert_eq!(risk.score("d2", "c1"), 0.9);
        assert_eq!(risk.score("d2", "c2"), 0.0);
    }

    #[test]
    fn test_risk_no_key_collision() {
        // "a|b" + "c" and "a" + "b|c" must be distinct pairs.
        let mut risk = RiskLookup::new();
        risk.insert("a|b", "c", 0.3);
        assert_eq!(risk.score("a", "b|c"), 0.0);
        assert_eq!(risk.score("a|b", "c"), 0.3);
    }

    #[test]
    fn test_risk_serde_round_trip() {
        let mut risk = RiskLookup::new();
        risk.insert("d1", "c1", 0.25);
        let json = serde_json::to_string(&risk).expect("serialize");
        let back: RiskLookup = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.score("d1", "c1"), 0.25);
        assert_eq!(back.len(), 1);
    }
}
