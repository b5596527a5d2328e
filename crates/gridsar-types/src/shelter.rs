//! Static world data for the scripted hazard mechanic.
//!
//! [`SHELTER_TILES`] is the fixed set of grid coordinates the scenario
//! designates as safe shelter; the controller seeds its zone set with it
//! and the run summarizer checks shelter presence against it.
//! [`SAFE_HAZARD_TILES`] whitelists the hazardous-terrain crossings on
//! which movement is allowed without the idle substitution.

use crate::grid::Coord;

/// The scenario's designated shelter tiles.
pub const SHELTER_TILES: [Coord; 106] = [
    Coord::new(2, 2), Coord::new(2, 3), Coord::new(3, 2), Coord::new(3, 3), Coord::new(4, 2), Coord::new(4, 3),
    Coord::new(8, 2), Coord::new(8, 3), Coord::new(9, 2), Coord::new(9, 3), Coord::new(10, 2), Coord::new(10, 3),
    Coord::new(14, 2), Coord::new(14, 3), Coord::new(15, 2), Coord::new(15, 3), Coord::new(16, 2), Coord::new(16, 3),
    Coord::new(20, 2), Coord::new(20, 3), Coord::new(21, 2), Coord::new(21, 3), Coord::new(22, 2), Coord::new(22, 3),
    Coord::new(2, 8), Coord::new(2, 9), Coord::new(3, 8), Coord::new(3, 9), Coord::new(4, 8), Coord::new(4, 9),
    Coord::new(8, 8), Coord::new(8, 9), Coord::new(9, 8), Coord::new(9, 9), Coord::new(10, 8), Coord::new(10, 9),
    Coord::new(14, 8), Coord::new(14, 9), Coord::new(15, 8), Coord::new(15, 9), Coord::new(16, 8), Coord::new(16, 9),
    Coord::new(2, 14), Coord::new(2, 15), Coord::new(3, 14), Coord::new(3, 15), Coord::new(4, 14), Coord::new(4, 15),
    Coord::new(8, 14), Coord::new(8, 15), Coord::new(9, 14), Coord::new(9, 15), Coord::new(10, 14), Coord::new(10, 15),
    Coord::new(14, 14), Coord::new(14, 15), Coord::new(15, 14), Coord::new(15, 15), Coord::new(16, 14), Coord::new(16, 15),
    Coord::new(2, 20), Coord::new(2, 21), Coord::new(3, 20), Coord::new(3, 21), Coord::new(4, 20), Coord::new(4, 21),
    Coord::new(8, 20), Coord::new(8, 21), Coord::new(9, 20), Coord::new(9, 21), Coord::new(10, 20), Coord::new(10, 21),
    Coord::new(14, 20), Coord::new(14, 21), Coord::new(15, 20), Coord::new(15, 21), Coord::new(16, 20), Coord::new(16, 21),
    Coord::new(20, 20), Coord::new(20, 21), Coord::new(21, 20), Coord::new(21, 21), Coord::new(22, 20), Coord::new(22, 21),
    Coord::new(23, 8), Coord::new(23, 9), Coord::new(23, 10), Coord::new(23, 11), Coord::new(23, 12), Coord::new(23, 13),
    Coord::new(23, 14), Coord::new(23, 15), Coord::new(3, 4), Coord::new(9, 4), Coord::new(15, 4), Coord::new(21, 4),
    Coord::new(3, 7), Coord::new(9, 7), Coord::new(15, 7), Coord::new(3, 16), Coord::new(9, 16), Coord::new(15, 16),
    Coord::new(3, 19), Coord::new(9, 19), Coord::new(15, 19), Coord::new(21, 19),
];

/// Hazard tiles the agent may move across without the idle substitution.
pub const SAFE_HAZARD_TILES: [Coord; 14] = [
    Coord::new(3, 5), Coord::new(9, 5), Coord::new(15, 5), Coord::new(21, 5),
    Coord::new(3, 6), Coord::new(9, 6), Coord::new(15, 6),
    Coord::new(3, 17), Coord::new(9, 17), Coord::new(15, 17),
    Coord::new(3, 18), Coord::new(9, 18), Coord::new(15, 18), Coord::new(21, 18),
];
