//! Ambition tier model

use serde::{Deserialize, Serialize};

use crate::constants::goals;

/// Ordered ambition tiers, slowest intent first.
///
/// The derived `Ord` follows declaration order and is what the distributor
/// sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbitionTier {
    Relaxed,
    Moderate,
    Ambitious,
}

impl AmbitionTier {
    /// Tier for participants with a missing or unknown goal
    pub const DEFAULT: AmbitionTier = AmbitionTier::Moderate;

    /// All tiers in ascending order
    pub const ALL: [AmbitionTier; 3] = [Self::Relaxed, Self::Moderate, Self::Ambitious];

    /// Resolve a goal label. Never fails: anything unrecognized is `DEFAULT`.
    pub fn from_goal(goal: Option<&str>) -> Self {
        let Some(goal) = goal.map(str::trim) else {
            return Self::DEFAULT;
        };

        if goal.eq_ignore_ascii_case(goals::RELAXED) {
            Self::Relaxed
        } else if goal.eq_ignore_ascii_case(goals::MODERATE) {
            Self::Moderate
        } else if goal.eq_ignore_ascii_case(goals::AMBITIOUS) {
            Self::Ambitious
        } else {
            Self::DEFAULT
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relaxed => goals::RELAXED,
            Self::Moderate => goals::MODERATE,
            Self::Ambitious => goals::AMBITIOUS,
        }
    }
}

impl std::fmt::Display for AmbitionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(AmbitionTier::from_goal(Some("relaxed")), AmbitionTier::Relaxed);
        assert_eq!(AmbitionTier::from_goal(Some("moderate")), AmbitionTier::Moderate);
        assert_eq!(AmbitionTier::from_goal(Some("ambitious")), AmbitionTier::Ambitious);
    }

    #[test]
    fn test_labels_ignore_case_and_whitespace() {
        assert_eq!(AmbitionTier::from_goal(Some(" Ambitious ")), AmbitionTier::Ambitious);
        assert_eq!(AmbitionTier::from_goal(Some("RELAXED")), AmbitionTier::Relaxed);
    }

    #[test]
    fn test_unknown_and_missing_use_default() {
        assert_eq!(AmbitionTier::from_goal(None), AmbitionTier::DEFAULT);
        assert_eq!(AmbitionTier::from_goal(Some("")), AmbitionTier::DEFAULT);
        assert_eq!(AmbitionTier::from_goal(Some("sub-3h marathon")), AmbitionTier::DEFAULT);
    }

    #[test]
    fn test_order_and_labels_match() {
        assert!(AmbitionTier::Relaxed < AmbitionTier::Moderate);
        assert!(AmbitionTier::Moderate < AmbitionTier::Ambitious);
        let labels: Vec<_> = AmbitionTier::ALL.iter().map(AmbitionTier::as_str).collect();
        assert_eq!(labels, goals::ALL);
    }
}
