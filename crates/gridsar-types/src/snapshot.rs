//! Read-only world snapshot records and the agent's forwarded properties.
//!
//! The engine delivers a fresh [`WorldSnapshot`] every decision cycle:
//! every object the agent currently senses, keyed by id, plus the world
//! tick counter. This crate never mutates a snapshot; the controller only
//! reads it, and separately overwrites the forwarded [`AgentProperties`]
//! copy (display image and size) the engine hands alongside.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grid::Coord;
use crate::ids::ObjectId;

/// The agent's default portrait image.
pub const DEFAULT_AGENT_IMAGE: &str = "/images/rescue-man-final3.svg";

/// The danger indicator shown while unsheltered during a danger window.
pub const DANGER_IMAGE: &str = "/images/human-danger2.gif";

/// Normal display size of the agent avatar.
pub const DEFAULT_VISUALIZE_SIZE: u32 = 1;

/// Enlarged display size used with the danger indicator.
pub const DANGER_VISUALIZE_SIZE: u32 = 2;

/// A capability flag an [`ObjectRecord`] may expose.
///
/// The engine only attaches a flag to objects where it is meaningful, so a
/// query distinguishes "absent" from "false": doors expose `Open`, loose
/// objects expose `Movable`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectFlag {
    /// The object can be picked up or displaced.
    Movable,
    /// The object is a door and currently open.
    Open,
    /// Agents can walk through the object's tile.
    Traversable,
    /// The object can be collected into a drop zone.
    Collectable,
}

/// One observed object in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// The object's display name (for example `water` or `human`).
    pub name: String,
    /// The object's grid position.
    pub location: Coord,
    /// The engine's class-inheritance chain for the object.
    ///
    /// Used to recognize area tiles (`AreaTile`) and agent avatars
    /// (`AgentBrain`, `AgentBody`).
    pub class_tags: Vec<String>,
    /// Whether the object can be picked up, if it exposes the flag.
    #[serde(default)]
    pub is_movable: Option<bool>,
    /// Whether the door is open, if the object is a door.
    #[serde(default)]
    pub is_open: Option<bool>,
    /// Whether the tile can be walked through, if exposed.
    #[serde(default)]
    pub is_traversable: Option<bool>,
    /// Whether the object can be collected, if exposed.
    #[serde(default)]
    pub is_collectable: Option<bool>,
}

impl ObjectRecord {
    /// Whether the class-inheritance chain contains the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.class_tags.iter().any(|t| t == tag)
    }

    /// Read a capability flag; `None` when the object does not expose it.
    pub const fn flag(&self, flag: ObjectFlag) -> Option<bool> {
        match flag {
            ObjectFlag::Movable => self.is_movable,
            ObjectFlag::Open => self.is_open,
            ObjectFlag::Traversable => self.is_traversable,
            ObjectFlag::Collectable => self.is_collectable,
        }
    }
}

/// The per-tick sensed world state delivered by the engine.
///
/// Exposes only the narrow read-only query interface the controller needs:
/// [`lookup`](Self::lookup), [`find`](Self::find),
/// [`find_by_name`](Self::find_by_name), and the tick counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    nr_ticks: u64,
    objects: BTreeMap<ObjectId, ObjectRecord>,
}

impl WorldSnapshot {
    /// An empty snapshot at the given tick.
    pub const fn new(nr_ticks: u64) -> Self {
        Self {
            nr_ticks,
            objects: BTreeMap::new(),
        }
    }

    /// The world tick counter this snapshot was taken at.
    pub const fn nr_ticks(&self) -> u64 {
        self.nr_ticks
    }

    /// Add or replace an object record (used by the engine adapter and by
    /// test fixtures).
    pub fn insert(&mut self, id: ObjectId, record: ObjectRecord) {
        self.objects.insert(id, record);
    }

    /// Builder-style [`insert`](Self::insert) for fixtures.
    #[must_use]
    pub fn with_object(mut self, id: ObjectId, record: ObjectRecord) -> Self {
        self.insert(id, record);
        self
    }

    /// Look up one object by id.
    pub fn lookup(&self, id: &ObjectId) -> Option<&ObjectRecord> {
        self.objects.get(id)
    }

    /// Iterate all objects satisfying a predicate, in id order.
    pub fn find<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = (&'a ObjectId, &'a ObjectRecord)>
    where
        P: Fn(&ObjectRecord) -> bool + 'a,
    {
        self.objects.iter().filter(move |(_, record)| predicate(record))
    }

    /// Iterate all objects with the given display name, in id order.
    pub fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a ObjectId, &'a ObjectRecord)> {
        self.find(move |record| record.name == name)
    }

    /// Iterate every object record, in id order.
    pub fn objects(&self) -> impl Iterator<Item = (&ObjectId, &ObjectRecord)> {
        self.objects.iter()
    }
}

/// The agent-visible properties the engine forwards each cycle.
///
/// The controller may overwrite both fields; the engine applies the changes
/// to the visualization after the decision returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProperties {
    /// Path of the avatar image currently displayed.
    pub img_name: String,
    /// Display size of the avatar.
    pub visualize_size: u32,
}

impl Default for AgentProperties {
    fn default() -> Self {
        Self {
            img_name: DEFAULT_AGENT_IMAGE.to_owned(),
            visualize_size: DEFAULT_VISUALIZE_SIZE,
        }
    }
}
