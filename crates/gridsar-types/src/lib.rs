//! Shared type definitions for the Gridsar search-and-rescue simulation.
//!
//! This crate is the single source of truth for all types used across the
//! Gridsar workspace: the action catalog the human-agent controller draws
//! from, the per-tick world snapshot the engine hands in, and the static
//! world data (shelter tiles, hazard whitelist) both the controller and the
//! run summarizer consult.
//!
//! # Modules
//!
//! - [`ids`] -- Newtype wrapper for the engine's opaque object identifiers
//! - [`grid`] -- Grid coordinates and rounded-up Euclidean distance
//! - [`enums`] -- Action catalog, experiment conditions, object categories
//! - [`actions`] -- Action parameter bundles and the per-tick decision
//! - [`snapshot`] -- Read-only world snapshot records and agent properties
//! - [`messages`] -- Agent-to-agent message record
//! - [`shelter`] -- Static shelter-tile table and safe-hazard whitelist

pub mod actions;
pub mod enums;
pub mod grid;
pub mod ids;
pub mod messages;
pub mod shelter;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use actions::{ActionParameters, Decision};
pub use enums::{ActionType, Condition, ObstacleCategory, VictimCategory};
pub use grid::Coord;
pub use ids::ObjectId;
pub use messages::Message;
pub use shelter::{SAFE_HAZARD_TILES, SHELTER_TILES};
pub use snapshot::{
    AgentProperties, DANGER_IMAGE, DANGER_VISUALIZE_SIZE, DEFAULT_AGENT_IMAGE,
    DEFAULT_VISUALIZE_SIZE, ObjectFlag, ObjectRecord, WorldSnapshot,
};
