//! Action parameter bundles and the per-tick decision.
//!
//! Each decision cycle the controller hands the engine one
//! [`Decision`]: the chosen action (or none) and a typed parameter
//! bundle. Parameters are a tagged enum rather than a string-keyed map so
//! each action class carries exactly the fields the engine reads for it.

use serde::{Deserialize, Serialize};

use crate::enums::{ActionType, Condition};
use crate::ids::ObjectId;

/// Action-specific parameters attached to a [`Decision`].
///
/// Solo and joint variants of the same action class share a bundle; the
/// [`ActionType`] tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionParameters {
    /// No parameters (also used when no action is taken).
    None,
    /// Parameters for [`ActionType::CarryObject`] and
    /// [`ActionType::CarryObjectTogether`].
    Carry {
        /// Maximum pick-up distance.
        grab_range: u32,
        /// Maximum number of objects carried at once.
        max_objects: u32,
        /// The run's experiment condition.
        condition: Condition,
        /// The selected victim, when one was in range.
        object_id: Option<ObjectId>,
        /// Ticks the engine should hold the agent for this action.
        duration: Option<u32>,
    },
    /// Parameters for [`ActionType::Drop`] and
    /// [`ActionType::DropObjectTogether`].
    Drop {
        /// Maximum drop distance.
        drop_range: u32,
        /// The run's experiment condition.
        condition: Condition,
    },
    /// Parameters for [`ActionType::RemoveObject`] and
    /// [`ActionType::RemoveObjectTogether`].
    Remove {
        /// Maximum removal distance.
        remove_range: u32,
        /// The run's experiment condition.
        condition: Condition,
        /// The selected obstacle, when one was in range and eligible.
        object_id: Option<ObjectId>,
        /// Ticks the engine should hold the agent for this action.
        duration: Option<u32>,
    },
    /// Parameters for [`ActionType::OpenDoor`] and
    /// [`ActionType::CloseDoor`].
    Door {
        /// Maximum door distance.
        door_range: u32,
        /// The selected door, when one was in range.
        object_id: Option<ObjectId>,
    },
    /// Parameters for the eight compass movements (none needed).
    Move,
    /// Parameters for [`ActionType::Idle`].
    Idle {
        /// Ticks to wait in place.
        duration: u32,
    },
}

/// The controller's output for one decision cycle.
///
/// `action == None` signals "no action this tick"; the engine treats it as
/// a skipped turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The chosen action, or `None` to skip the tick.
    pub action: Option<ActionType>,
    /// Parameters for the chosen action.
    pub parameters: ActionParameters,
}

impl Decision {
    /// The canonical no-op decision.
    pub const fn none() -> Self {
        Self {
            action: None,
            parameters: ActionParameters::None,
        }
    }

    /// A decision for the given action and parameters.
    pub const fn of(action: ActionType, parameters: ActionParameters) -> Self {
        Self {
            action: Some(action),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_decision_carries_no_action() {
        let decision = Decision::none();
        assert!(decision.action.is_none());
        assert_eq!(decision.parameters, ActionParameters::None);
    }

    #[test]
    fn decision_roundtrips_through_json() {
        let decision = Decision::of(
            ActionType::CarryObject,
            ActionParameters::Carry {
                grab_range: 1,
                max_objects: 1,
                condition: Condition::Mixed,
                object_id: Some(ObjectId::from("mild_victim_2")),
                duration: Some(10),
            },
        );
        let json = serde_json::to_string(&decision).unwrap_or_default();
        let back: Result<Decision, _> = serde_json::from_str(&json);
        assert_eq!(back.ok(), Some(decision));
    }
}
