//! Shared random candidate selection.
//!
//! Carry and remove actions all pick their target the same way: every
//! sensed object except the agent itself and other agents' avatars,
//! filtered to the action's range and required capability, with one
//! survivor drawn uniformly from the run-seeded generator. The world
//! entry never participates (the snapshot keeps the tick counter outside
//! the object map).

use rand::Rng;

use gridsar_types::{ObjectFlag, ObjectId, WorldSnapshot};

use crate::error::ControlError;

/// Class tags marking an object as an agent avatar.
const AGENT_TAGS: [&str; 2] = ["AgentBrain", "AgentBody"];

/// Pick one object within range of the agent, uniformly at random.
///
/// Excluded up front: the controlled agent itself and anything tagged as
/// an agent avatar. When `required_flag` is given, only objects exposing
/// that flag as `true` survive. An empty candidate set yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`ControlError::AgentNotInSnapshot`] when the snapshot lacks
/// the controlled agent's own record.
pub fn select_random_in_range<R: Rng>(
    snapshot: &WorldSnapshot,
    agent_id: &ObjectId,
    range: u32,
    required_flag: Option<ObjectFlag>,
    rng: &mut R,
) -> Result<Option<ObjectId>, ControlError> {
    let agent_location = snapshot
        .lookup(agent_id)
        .ok_or_else(|| ControlError::AgentNotInSnapshot {
            agent: agent_id.clone(),
        })?
        .location;

    let candidates: Vec<&ObjectId> = snapshot
        .objects()
        .filter(|(id, _)| *id != agent_id)
        .filter(|(_, record)| !AGENT_TAGS.iter().any(|tag| record.has_tag(tag)))
        .filter(|(_, record)| agent_location.distance(record.location) <= range)
        .filter(|(_, record)| {
            required_flag.is_none_or(|flag| record.flag(flag).unwrap_or(false))
        })
        .map(|(id, _)| id)
        .collect();

    if candidates.is_empty() {
        return Ok(None);
    }
    let idx = rng.random_range(0..candidates.len());
    Ok(candidates.get(idx).map(|id| (*id).clone()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use gridsar_types::{Coord, ObjectRecord};

    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn agent(location: Coord) -> ObjectRecord {
        ObjectRecord {
            name: "human".to_owned(),
            location,
            class_tags: vec!["HumanBrain".to_owned(), "AgentBrain".to_owned()],
            ..ObjectRecord::default()
        }
    }

    fn movable(name: &str, location: Coord) -> ObjectRecord {
        ObjectRecord {
            name: name.to_owned(),
            location,
            is_movable: Some(true),
            ..ObjectRecord::default()
        }
    }

    fn snapshot_with(objects: Vec<(&str, ObjectRecord)>) -> WorldSnapshot {
        let mut snapshot = WorldSnapshot::new(1);
        snapshot.insert(ObjectId::from("human"), agent(Coord::new(5, 5)));
        for (id, record) in objects {
            snapshot.insert(ObjectId::from(id), record);
        }
        snapshot
    }

    #[test]
    fn picks_the_only_candidate_in_range() {
        let snapshot = snapshot_with(vec![
            ("mild_victim_1", movable("victim", Coord::new(5, 6))),
            ("mild_victim_2", movable("victim", Coord::new(20, 20))),
        ]);
        let picked = select_random_in_range(
            &snapshot,
            &ObjectId::from("human"),
            1,
            Some(ObjectFlag::Movable),
            &mut rng(),
        );
        assert_eq!(picked.ok().flatten(), Some(ObjectId::from("mild_victim_1")));
    }

    #[test]
    fn never_picks_self_or_agents() {
        let mut other_agent = agent(Coord::new(5, 6));
        other_agent.is_movable = Some(true);
        let snapshot = snapshot_with(vec![("rescuebot", other_agent)]);
        let picked = select_random_in_range(
            &snapshot,
            &ObjectId::from("human"),
            1,
            None,
            &mut rng(),
        );
        assert_eq!(picked.ok().flatten(), None);
    }

    #[test]
    fn requires_the_flag_to_be_present_and_true() {
        let mut pinned = movable("victim", Coord::new(5, 6));
        pinned.is_movable = Some(false);
        let mut untagged = movable("victim", Coord::new(5, 4));
        untagged.is_movable = None;
        let snapshot = snapshot_with(vec![
            ("pinned_victim", pinned),
            ("untagged_victim", untagged),
        ]);
        let picked = select_random_in_range(
            &snapshot,
            &ObjectId::from("human"),
            1,
            Some(ObjectFlag::Movable),
            &mut rng(),
        );
        assert_eq!(picked.ok().flatten(), None);
    }

    #[test]
    fn diagonal_neighbour_is_outside_range_one() {
        // Rounded-up Euclidean distance to a diagonal neighbour is 2.
        let snapshot = snapshot_with(vec![(
            "mild_victim_1",
            movable("victim", Coord::new(6, 6)),
        )]);
        let picked = select_random_in_range(
            &snapshot,
            &ObjectId::from("human"),
            1,
            Some(ObjectFlag::Movable),
            &mut rng(),
        );
        assert_eq!(picked.ok().flatten(), None);
    }

    #[test]
    fn missing_agent_record_is_an_error() {
        let snapshot = WorldSnapshot::new(1);
        let picked = select_random_in_range(
            &snapshot,
            &ObjectId::from("human"),
            1,
            None,
            &mut rng(),
        );
        assert!(matches!(
            picked,
            Err(ControlError::AgentNotInSnapshot { .. })
        ));
    }

    #[test]
    fn empty_world_yields_no_target() {
        let snapshot = snapshot_with(Vec::new());
        let picked = select_random_in_range(
            &snapshot,
            &ObjectId::from("human"),
            3,
            None,
            &mut rng(),
        );
        assert_eq!(picked.ok().flatten(), None);
    }
}
