//! Goal classifier

use std::collections::BTreeMap;

use crate::models::{AmbitionTier, HasGoal};

/// Classify a participant by its goal label.
pub fn classify<P: HasGoal>(participant: &P) -> AmbitionTier {
    AmbitionTier::from_goal(participant.goal())
}

/// Group participants by tier, keeping their relative order within a tier.
///
/// Only tiers with at least one member appear in the map.
pub fn group_by_tier<P: HasGoal>(participants: &[P]) -> BTreeMap<AmbitionTier, Vec<&P>> {
    let mut groups: BTreeMap<AmbitionTier, Vec<&P>> = BTreeMap::new();
    for participant in participants {
        groups.entry(classify(participant)).or_default().push(participant);
    }
    groups
}

/// Number of participants per tier
pub fn tier_counts<P: HasGoal>(participants: &[P]) -> BTreeMap<AmbitionTier, usize> {
    group_by_tier(participants)
        .into_iter()
        .map(|(tier, members)| (tier, members.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;

    fn participant(id: i64, goal: Option<&str>) -> Participant {
        Participant {
            id,
            firstname: format!("Runner{id}"),
            lastname: "Test".to_string(),
            goal: goal.map(str::to_string),
            confirmed: false,
        }
    }

    #[test]
    fn test_classify_unrecognized_goal() {
        assert_eq!(classify(&participant(1, Some("fast-ish"))), AmbitionTier::DEFAULT);
        assert_eq!(classify(&participant(2, None)), AmbitionTier::DEFAULT);
    }

    #[test]
    fn test_group_by_tier_preserves_order() {
        let roster = vec![
            participant(1, Some("ambitious")),
            participant(2, Some("relaxed")),
            participant(3, Some("ambitious")),
            participant(4, None),
            participant(5, Some("relaxed")),
        ];

        let groups = group_by_tier(&roster);
        let ids = |tier: AmbitionTier| groups[&tier].iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(ids(AmbitionTier::Relaxed), vec![2, 5]);
        assert_eq!(ids(AmbitionTier::Moderate), vec![4]);
        assert_eq!(ids(AmbitionTier::Ambitious), vec![1, 3]);
    }

    #[test]
    fn test_group_by_tier_skips_empty_tiers() {
        let roster = vec![participant(1, Some("relaxed"))];
        let groups = group_by_tier(&roster);
        assert_eq!(groups.len(), 1);
        assert!(!groups.contains_key(&AmbitionTier::Ambitious));
        assert!(group_by_tier::<Participant>(&[]).is_empty());
    }

    #[test]
    fn test_tier_counts() {
        let roster: Vec<_> = ["relaxed", "moderate", "moderate", "weird"]
            .into_iter()
            .enumerate()
            .map(|(i, goal)| participant(i as i64, Some(goal)))
            .collect();

        let counts = tier_counts(&roster);
        assert_eq!(counts[&AmbitionTier::Relaxed], 1);
        assert_eq!(counts[&AmbitionTier::Moderate], 3);
        assert_eq!(counts.get(&AmbitionTier::Ambitious), None);
    }
}
