use std::collections::HashSet;
use stellarforge_core::types::WorldCoord;

/// Registered blueprint cells awaiting construction.
///
/// Registration is the source of truth for "unbuilt blueprint"; the
/// ghost `BlueprintFrame` voxel the world writes alongside it is
/// presentation only. Owned by `World`, not a global.
#[derive(Debug, Default)]
pub struct BlueprintSet {
    cells: HashSet<WorldCoord>,
}

impl BlueprintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the cell was already registered.
    pub fn add(&mut self, pos: WorldCoord) -> bool {
        self.cells.insert(pos)
    }

    pub fn remove(&mut self, pos: &WorldCoord) -> bool {
        self.cells.remove(pos)
    }

    pub fn contains(&self, pos: &WorldCoord) -> bool {
        self.cells.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Registered cells in sorted order, for deterministic candidate
    /// scans.
    pub fn cells_sorted(&self) -> Vec<WorldCoord> {
        let mut cells: Vec<WorldCoord> = self.cells.iter().copied().collect();
        cells.sort_by_key(|c| (c.x, c.y, c.z));
        cells
    }
}
