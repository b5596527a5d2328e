//! The per-agent controller and its decision procedure.
//!
//! One [`HumanController`] instance exists per human-controlled agent and
//! lives for the whole run. Each tick the engine hands it a fresh world
//! snapshot, the agent's forwarded display properties, and the filtered
//! keypress queue; the controller returns one [`Decision`].
//!
//! Decision priority, in order: zone tracking, the scripted danger
//! windows (which may withhold all actions), the empty-input no-op,
//! keypress resolution, and per-action parameter synthesis.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use gridsar_types::{
    ActionParameters, ActionType, AgentProperties, Condition, Coord, DANGER_IMAGE,
    DANGER_VISUALIZE_SIZE, DEFAULT_AGENT_IMAGE, DEFAULT_VISUALIZE_SIZE, Decision, Message,
    ObjectFlag, ObjectId, ObstacleCategory, SAFE_HAZARD_TILES, VictimCategory, WorldSnapshot,
};

use crate::config::ControllerConfig;
use crate::error::ControlError;
use crate::input;
use crate::menu::{self, ContextMenuItem};
use crate::select::select_random_in_range;
use crate::zones::ZoneSet;

/// The scripted danger windows: actions are withheld from unsheltered
/// agents for ticks strictly inside each interval. The interval start is
/// the capture milestone, the end the restore tick.
const DANGER_WINDOWS: [(u64, u64); 3] = [(1200, 1300), (2400, 2500), (3600, 3700)];

/// Display name of hazardous-terrain tiles.
const HAZARD_TILE_NAME: &str = "water";

/// Wait imposed when movement is attempted on hazardous terrain.
const HAZARD_IDLE_DURATION: u32 = 2;

const fn is_capture_milestone(tick: u64) -> bool {
    matches!(tick, 1200 | 2400 | 3600)
}

const fn is_window_end(tick: u64) -> bool {
    matches!(tick, 1300 | 2500 | 3700)
}

fn in_danger_window(tick: u64) -> bool {
    DANGER_WINDOWS
        .iter()
        .any(|&(start, end)| tick > start && tick < end)
}

/// Ticks a carry action holds the agent, by victim severity.
///
/// Carrying together shortens or waives the wait; the `mixed` condition
/// waives the joint-critical wait and shortens the solo waits.
const fn carry_duration(
    category: VictimCategory,
    condition: Condition,
    joint: bool,
) -> Option<u32> {
    match (category, joint) {
        (VictimCategory::Healthy, _) => None,
        (VictimCategory::Mild, true) => Some(10),
        (VictimCategory::Mild, false) => {
            if matches!(condition, Condition::Mixed) {
                Some(10)
            } else {
                Some(40)
            }
        }
        (VictimCategory::Critical, true) => {
            if matches!(condition, Condition::Mixed) {
                None
            } else {
                Some(20)
            }
        }
        (VictimCategory::Critical, false) => {
            if matches!(condition, Condition::Mixed) {
                Some(20)
            } else {
                Some(80)
            }
        }
    }
}

/// Ticks a removal holds the agent, by obstacle kind.
const fn remove_duration(category: ObstacleCategory, joint: bool) -> u32 {
    match (category, joint) {
        (ObstacleCategory::Stone, true) => 10,
        (ObstacleCategory::Stone, false) => 40,
        (ObstacleCategory::Rock, true) => 30,
        (ObstacleCategory::Rock, false) => 120,
        (ObstacleCategory::Tree, true) => 20,
        (ObstacleCategory::Tree, false) => 80,
    }
}

/// Controller for one human-operated agent.
///
/// Owns every piece of state that survives between decision cycles within
/// a run; the engine owns everything else.
#[derive(Debug)]
pub struct HumanController {
    agent_id: ObjectId,
    config: ControllerConfig,
    zones: ZoneSet,
    captured_image: String,
    previous_action: Option<ActionType>,
    inbox: Vec<Message>,
    rng: StdRng,
}

impl HumanController {
    /// Create a controller for the given agent, seeded with the world's
    /// random seed so candidate selection is reproducible per run.
    pub fn new(agent_id: ObjectId, config: ControllerConfig, seed: u64) -> Self {
        Self {
            agent_id,
            config,
            zones: ZoneSet::new(),
            captured_image: DEFAULT_AGENT_IMAGE.to_owned(),
            previous_action: None,
            inbox: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The controlled agent's id.
    pub const fn agent_id(&self) -> &ObjectId {
        &self.agent_id
    }

    /// The controller's configuration.
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The zone set as currently known.
    pub const fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    /// The action chosen on the previous cycle, if any.
    pub const fn previous_action(&self) -> Option<ActionType> {
        self.previous_action
    }

    /// Queue an inbound message for this agent.
    ///
    /// The controller never acts on messages; they are discarded on the
    /// next [`filter_user_input`](Self::filter_user_input) call.
    pub fn deliver_message(&mut self, message: Message) {
        self.inbox.push(message);
    }

    /// Drain pending inbound messages and keep only bound keypresses.
    ///
    /// Arrival order is preserved; [`decide`](Self::decide) honors the
    /// last surviving press.
    pub fn filter_user_input(&mut self, raw: &[String]) -> Vec<String> {
        if !self.inbox.is_empty() {
            debug!(count = self.inbox.len(), "discarding inbound messages");
            self.inbox.clear();
        }
        input::filter_input(&self.config.key_action_map, raw)
    }

    /// Decide on an action for this tick.
    ///
    /// `props` is the engine's forwarded copy of the agent's display
    /// properties; the scripted danger windows overwrite it in place.
    /// `input` is the filtered keypress queue for this cycle.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::UnrecognizedKey`] if an unbound key
    /// reaches resolution (a calling-layer bug), or
    /// [`ControlError::AgentNotInSnapshot`] if the snapshot lacks the
    /// agent's own record.
    pub fn decide(
        &mut self,
        snapshot: &WorldSnapshot,
        props: &mut AgentProperties,
        input: &[String],
    ) -> Result<Decision, ControlError> {
        let decision = self.decide_inner(snapshot, props, input)?;
        self.previous_action = decision.action;
        Ok(decision)
    }

    fn decide_inner(
        &mut self,
        snapshot: &WorldSnapshot,
        props: &mut AgentProperties,
        input: &[String],
    ) -> Result<Decision, ControlError> {
        let tick = snapshot.nr_ticks();
        self.zones.extend_from_snapshot(snapshot);

        if self.config.condition != Condition::Tutorial
            && let Some(forced) = self.scripted_override(snapshot, props, tick)?
        {
            return Ok(forced);
        }

        let Some(key) = input.last() else {
            return Ok(Decision::none());
        };
        let action = *self
            .config
            .key_action_map
            .get(key)
            .ok_or_else(|| ControlError::UnrecognizedKey { key: key.clone() })?;

        self.synthesize(action, snapshot)
    }

    /// The scripted danger-window mechanic.
    ///
    /// At each capture milestone the agent's current image is stored.
    /// Strictly inside a window, a sheltered agent gets the stored image
    /// re-applied; an unsheltered agent is shown the danger indicator and
    /// every action is withheld. At the window end image and size are
    /// restored.
    fn scripted_override(
        &mut self,
        snapshot: &WorldSnapshot,
        props: &mut AgentProperties,
        tick: u64,
    ) -> Result<Option<Decision>, ControlError> {
        if is_capture_milestone(tick) {
            self.captured_image.clone_from(&props.img_name);
        }

        if in_danger_window(tick) {
            let location = self.agent_location(snapshot)?;
            if self.zones.contains(location) {
                props.img_name.clone_from(&self.captured_image);
            } else {
                props.img_name = DANGER_IMAGE.to_owned();
                props.visualize_size = DANGER_VISUALIZE_SIZE;
                info!(tick, location = %location, "unsheltered in danger window, withholding actions");
                return Ok(Some(Decision::none()));
            }
        }

        if is_window_end(tick) {
            props.img_name.clone_from(&self.captured_image);
            props.visualize_size = DEFAULT_VISUALIZE_SIZE;
        }

        Ok(None)
    }

    /// Build the decision for a resolved action.
    fn synthesize(
        &mut self,
        action: ActionType,
        snapshot: &WorldSnapshot,
    ) -> Result<Decision, ControlError> {
        let parameters = match action {
            ActionType::CarryObjectTogether => self.carry_parameters(snapshot, true)?,
            ActionType::CarryObject => self.carry_parameters(snapshot, false)?,
            ActionType::Drop | ActionType::DropObjectTogether => ActionParameters::Drop {
                drop_range: self.config.drop_range,
                condition: self.config.condition,
            },
            ActionType::RemoveObjectTogether => self.remove_parameters(snapshot, true)?,
            ActionType::RemoveObject => self.remove_parameters(snapshot, false)?,
            ActionType::OpenDoor | ActionType::CloseDoor => self.door_parameters(snapshot)?,
            ActionType::Idle => ActionParameters::Idle { duration: 0 },
            ActionType::MoveNorth
            | ActionType::MoveNorthEast
            | ActionType::MoveEast
            | ActionType::MoveSouthEast
            | ActionType::MoveSouth
            | ActionType::MoveSouthWest
            | ActionType::MoveWest
            | ActionType::MoveNorthWest => return self.move_decision(action, snapshot),
        };
        Ok(Decision::of(action, parameters))
    }

    /// Carry parameters, solo or joint.
    ///
    /// A random movable object within grab range becomes the target only
    /// when it is a victim; the wait duration follows the severity table.
    fn carry_parameters(
        &mut self,
        snapshot: &WorldSnapshot,
        joint: bool,
    ) -> Result<ActionParameters, ControlError> {
        let condition = self.config.condition;
        let candidate = select_random_in_range(
            snapshot,
            &self.agent_id,
            self.config.grab_range,
            Some(ObjectFlag::Movable),
            &mut self.rng,
        )?;

        let mut object_id = None;
        let mut duration = None;
        if let Some(id) = candidate
            && let Some(category) = VictimCategory::from_id(&id)
        {
            duration = carry_duration(category, condition, joint);
            object_id = Some(id);
        }

        Ok(ActionParameters::Carry {
            grab_range: self.config.grab_range,
            max_objects: self.config.max_carry_objects,
            condition,
            object_id,
            duration,
        })
    }

    /// Removal parameters, solo or joint.
    ///
    /// Under the `complementary` condition removal never receives a
    /// target. Solo removal additionally refuses victims; joint removal
    /// forwards whatever candidate was drawn.
    fn remove_parameters(
        &mut self,
        snapshot: &WorldSnapshot,
        joint: bool,
    ) -> Result<ActionParameters, ControlError> {
        let condition = self.config.condition;
        let remove_range = self.config.remove_range;
        let candidate = select_random_in_range(
            snapshot,
            &self.agent_id,
            remove_range,
            Some(ObjectFlag::Movable),
            &mut self.rng,
        )?;

        let mut object_id = None;
        let mut duration = None;
        if condition != Condition::Complementary {
            if joint {
                duration = candidate
                    .as_ref()
                    .and_then(ObstacleCategory::from_id)
                    .map(|category| remove_duration(category, true));
                object_id = candidate;
            } else if let Some(id) = candidate
                && VictimCategory::from_id(&id).is_none()
            {
                duration =
                    ObstacleCategory::from_id(&id).map(|category| remove_duration(category, false));
                object_id = Some(id);
            }
        }

        Ok(ActionParameters::Remove {
            remove_range,
            condition,
            object_id,
            duration,
        })
    }

    /// Door parameters: a uniformly random door within range, if any.
    ///
    /// Doors are the objects exposing an open/closed flag; whether the
    /// flag is currently true does not matter for targeting.
    fn door_parameters(
        &mut self,
        snapshot: &WorldSnapshot,
    ) -> Result<ActionParameters, ControlError> {
        let agent_location = self.agent_location(snapshot)?;
        let door_range = self.config.door_range;

        let doors: Vec<&ObjectId> = snapshot
            .find(|record| record.flag(ObjectFlag::Open).is_some())
            .filter(|(_, record)| agent_location.distance(record.location) <= door_range)
            .map(|(id, _)| id)
            .collect();

        let object_id = if doors.is_empty() {
            None
        } else {
            let idx = self.rng.random_range(0..doors.len());
            doors.get(idx).map(|id| (*id).clone())
        };

        Ok(ActionParameters::Door {
            door_range,
            object_id,
        })
    }

    /// A compass movement, unless the agent stands on hazardous terrain.
    ///
    /// Movement from a non-whitelisted hazard tile is substituted by a
    /// short idle so crossing water costs time.
    fn move_decision(
        &self,
        action: ActionType,
        snapshot: &WorldSnapshot,
    ) -> Result<Decision, ControlError> {
        let agent_location = self.agent_location(snapshot)?;
        let on_hazard = snapshot
            .find_by_name(HAZARD_TILE_NAME)
            .any(|(_, record)| record.location == agent_location);

        if on_hazard && !SAFE_HAZARD_TILES.contains(&agent_location) {
            info!(location = %agent_location, "movement on hazardous terrain, substituting idle");
            return Ok(Decision::of(
                ActionType::Idle,
                ActionParameters::Idle {
                    duration: HAZARD_IDLE_DURATION,
                },
            ));
        }
        Ok(Decision::of(action, ActionParameters::Move))
    }

    /// Context menu for the controlling user (see [`menu`]).
    pub fn context_menu_for_self(&self, self_selected: bool) -> Vec<ContextMenuItem> {
        menu::menu_for_self(&self.agent_id, &self.config.action_set, self_selected)
    }

    /// Context menu for another user who clicked this agent (see [`menu`]).
    pub fn context_menu_for_other(&self, clicked_by: &ObjectId) -> Vec<ContextMenuItem> {
        menu::menu_for_other(&self.agent_id, clicked_by, &self.config.action_set)
    }

    fn agent_location(&self, snapshot: &WorldSnapshot) -> Result<Coord, ControlError> {
        snapshot
            .lookup(&self.agent_id)
            .map(|record| record.location)
            .ok_or_else(|| ControlError::AgentNotInSnapshot {
                agent: self.agent_id.clone(),
            })
    }
}
