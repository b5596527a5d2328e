//! Enumeration types: the action catalog, experiment conditions, and the
//! id-marker categories the duration rules are keyed on.

use serde::{Deserialize, Serialize};

use crate::ids::ObjectId;

// ---------------------------------------------------------------------------
// Action catalog
// ---------------------------------------------------------------------------

/// An action the human-controlled agent may request from the engine.
///
/// The catalog is fixed: eight compass movements, solo and joint variants
/// of carry/drop/remove, the door pair, and idle. Serialized names are the
/// engine's wire names (the door actions carry an `Action` suffix there).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Step one tile north.
    MoveNorth,
    /// Step one tile north-east.
    MoveNorthEast,
    /// Step one tile east.
    MoveEast,
    /// Step one tile south-east.
    MoveSouthEast,
    /// Step one tile south.
    MoveSouth,
    /// Step one tile south-west.
    MoveSouthWest,
    /// Step one tile west.
    MoveWest,
    /// Step one tile north-west.
    MoveNorthWest,
    /// Pick up an object alone.
    CarryObject,
    /// Pick up an object together with another agent.
    CarryObjectTogether,
    /// Drop a carried object alone.
    Drop,
    /// Drop a jointly carried object.
    DropObjectTogether,
    /// Clear an obstacle alone.
    RemoveObject,
    /// Clear an obstacle together with another agent.
    RemoveObjectTogether,
    /// Open a door within range.
    #[serde(rename = "OpenDoorAction")]
    OpenDoor,
    /// Close a door within range.
    #[serde(rename = "CloseDoorAction")]
    CloseDoor,
    /// Wait in place.
    Idle,
}

impl ActionType {
    /// Every action in the catalog, in declaration order.
    ///
    /// The default allowed-action set for a controller; also what the
    /// context menus enumerate.
    pub const ALL: [Self; 17] = [
        Self::MoveNorth,
        Self::MoveNorthEast,
        Self::MoveEast,
        Self::MoveSouthEast,
        Self::MoveSouth,
        Self::MoveSouthWest,
        Self::MoveWest,
        Self::MoveNorthWest,
        Self::CarryObject,
        Self::CarryObjectTogether,
        Self::Drop,
        Self::DropObjectTogether,
        Self::RemoveObject,
        Self::RemoveObjectTogether,
        Self::OpenDoor,
        Self::CloseDoor,
        Self::Idle,
    ];

    /// The engine's wire name for this action.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::MoveNorth => "MoveNorth",
            Self::MoveNorthEast => "MoveNorthEast",
            Self::MoveEast => "MoveEast",
            Self::MoveSouthEast => "MoveSouthEast",
            Self::MoveSouth => "MoveSouth",
            Self::MoveSouthWest => "MoveSouthWest",
            Self::MoveWest => "MoveWest",
            Self::MoveNorthWest => "MoveNorthWest",
            Self::CarryObject => "CarryObject",
            Self::CarryObjectTogether => "CarryObjectTogether",
            Self::Drop => "Drop",
            Self::DropObjectTogether => "DropObjectTogether",
            Self::RemoveObject => "RemoveObject",
            Self::RemoveObjectTogether => "RemoveObjectTogether",
            Self::OpenDoor => "OpenDoorAction",
            Self::CloseDoor => "CloseDoorAction",
            Self::Idle => "Idle",
        }
    }

    /// Whether this is one of the eight compass movements.
    pub const fn is_move(self) -> bool {
        matches!(
            self,
            Self::MoveNorth
                | Self::MoveNorthEast
                | Self::MoveEast
                | Self::MoveSouthEast
                | Self::MoveSouth
                | Self::MoveSouthWest
                | Self::MoveWest
                | Self::MoveNorthWest
        )
    }

    /// Whether this action is performed jointly with another agent.
    pub const fn is_joint(self) -> bool {
        matches!(
            self,
            Self::CarryObjectTogether | Self::DropObjectTogether | Self::RemoveObjectTogether
        )
    }
}

impl core::fmt::Display for ActionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ---------------------------------------------------------------------------
// Experiment condition
// ---------------------------------------------------------------------------

/// The experiment-arm label a run is configured with.
///
/// The condition alters duration and eligibility rules in the controller:
/// `Mixed` waives or shortens several carry durations, `Complementary`
/// disables solo/joint removal targeting, and `Tutorial` disables the
/// scripted danger windows entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Default arm; full durations, all mechanics active.
    #[default]
    Baseline,
    /// Mixed-initiative arm; shortened/waived carry durations.
    Mixed,
    /// Complementary arm; removal actions never receive a target.
    Complementary,
    /// Tutorial arm; scripted danger windows are disabled.
    Tutorial,
}

impl core::fmt::Display for Condition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Baseline => "baseline",
            Self::Mixed => "mixed",
            Self::Complementary => "complementary",
            Self::Tutorial => "tutorial",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Id-marker categories
// ---------------------------------------------------------------------------

/// Victim severity, read from a marker substring in the object id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictimCategory {
    /// Uninjured victim; carried with no extra duration.
    Healthy,
    /// Mildly injured victim.
    Mild,
    /// Critically injured victim.
    Critical,
}

impl VictimCategory {
    /// Classify an object id by its victim marker, if it carries one.
    pub fn from_id(id: &ObjectId) -> Option<Self> {
        if id.has_marker("healthy") {
            Some(Self::Healthy)
        } else if id.has_marker("mild") {
            Some(Self::Mild)
        } else if id.has_marker("critical") {
            Some(Self::Critical)
        } else {
            None
        }
    }
}

/// Obstacle kind, read from a marker substring in the object id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleCategory {
    /// Loose stones; quickest to clear.
    Stone,
    /// Heavy rock; slowest to clear.
    Rock,
    /// Fallen tree.
    Tree,
}

impl ObstacleCategory {
    /// Classify an object id by its obstacle marker, if it carries one.
    pub fn from_id(id: &ObjectId) -> Option<Self> {
        if id.has_marker("stone") {
            Some(Self::Stone)
        } else if id.has_marker("rock") {
            Some(Self::Rock)
        } else if id.has_marker("tree") {
            Some(Self::Tree)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_actions_use_engine_wire_names() {
        assert_eq!(ActionType::OpenDoor.to_string(), "OpenDoorAction");
        assert_eq!(ActionType::CloseDoor.to_string(), "CloseDoorAction");
        assert_eq!(ActionType::CarryObjectTogether.to_string(), "CarryObjectTogether");
    }

    #[test]
    fn serde_names_match_wire_names() {
        for action in ActionType::ALL {
            let json = serde_json::to_string(&action).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", action.wire_name()));
        }
    }

    #[test]
    fn move_and_joint_predicates() {
        assert!(ActionType::MoveSouthWest.is_move());
        assert!(!ActionType::CarryObject.is_move());
        assert!(ActionType::DropObjectTogether.is_joint());
        assert!(!ActionType::Drop.is_joint());
    }

    #[test]
    fn condition_wire_form_is_lowercase() {
        let parsed: Condition = serde_json::from_str("\"mixed\"").unwrap_or_default();
        assert_eq!(parsed, Condition::Mixed);
        assert_eq!(Condition::Complementary.to_string(), "complementary");
    }

    #[test]
    fn victim_markers() {
        assert_eq!(
            VictimCategory::from_id(&ObjectId::from("mild_victim_1")),
            Some(VictimCategory::Mild)
        );
        assert_eq!(VictimCategory::from_id(&ObjectId::from("stone_2")), None);
    }

    #[test]
    fn obstacle_markers() {
        assert_eq!(
            ObstacleCategory::from_id(&ObjectId::from("rock_7")),
            Some(ObstacleCategory::Rock)
        );
        assert_eq!(
            ObstacleCategory::from_id(&ObjectId::from("healthy_victim_2")),
            None
        );
    }
}
