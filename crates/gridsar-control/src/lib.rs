//! Human-agent controller for the Gridsar search-and-rescue simulation.
//!
//! The host engine owns the world: ticking, movement, sensing, action
//! legality, rendering. This crate owns one thing -- turning the latest
//! user keypress into an action request with the right parameters, once
//! per tick, for one human-controlled agent.
//!
//! A [`HumanController`] holds the only state that survives between
//! decision cycles: the monotonically growing zone set, the display image
//! captured for the scripted danger windows, the previous action, and the
//! run-seeded random generator used for candidate selection.
//!
//! # Modules
//!
//! - [`config`] -- YAML controller configuration (ranges, condition, key map)
//! - [`controller`] -- the per-agent controller and its decision procedure
//! - [`error`] -- typed controller errors
//! - [`input`] -- keypress filtering
//! - [`menu`] -- context-menu construction for the UI layer
//! - [`select`] -- shared random candidate selection
//! - [`zones`] -- the monotonic shelter-zone set

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod menu;
pub mod select;
pub mod zones;

pub use config::{ConfigError, ControllerConfig};
pub use controller::HumanController;
pub use error::ControlError;
pub use menu::ContextMenuItem;
pub use zones::ZoneSet;
