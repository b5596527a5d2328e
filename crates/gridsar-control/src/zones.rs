//! The monotonic shelter-zone set.
//!
//! A [`ZoneSet`] starts from the scenario's static [`SHELTER_TILES`] table
//! and grows by scanning each snapshot for area-tile objects the agent has
//! since sensed. It never shrinks within a run.

use std::collections::BTreeSet;

use tracing::debug;

use gridsar_types::{Coord, SHELTER_TILES, WorldSnapshot};

/// The class tag the engine attaches to shelter-zone tiles.
const AREA_TILE_TAG: &str = "AreaTile";

/// The set of grid coordinates currently known to be sheltered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSet {
    tiles: BTreeSet<Coord>,
}

impl ZoneSet {
    /// A zone set seeded with the scenario's static shelter tiles.
    pub fn new() -> Self {
        Self {
            tiles: SHELTER_TILES.iter().copied().collect(),
        }
    }

    /// Whether the coordinate is a known shelter tile.
    pub fn contains(&self, coord: Coord) -> bool {
        self.tiles.contains(&coord)
    }

    /// Number of known shelter tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set is empty (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Add every area-tile coordinate sensed in the snapshot.
    ///
    /// Union-only: coordinates are only ever added, so the set grows
    /// monotonically across a run.
    pub fn extend_from_snapshot(&mut self, snapshot: &WorldSnapshot) {
        for (id, record) in snapshot.find(|record| record.has_tag(AREA_TILE_TAG)) {
            if self.tiles.insert(record.location) {
                debug!(tile = %record.location, object = %id, "zone set grew");
            }
        }
    }
}

impl Default for ZoneSet {
    fn default() -> Self {
        Self::new()
    }
}
