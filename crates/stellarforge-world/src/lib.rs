pub mod blueprint;
pub mod chunk;
pub mod generator;
pub mod query;
pub mod store;

use blueprint::BlueprintSet;
use generator::AsteroidGenerator;
use stellarforge_core::block::Block;
use stellarforge_core::types::{ChunkCoord, WorldCoord};
use store::VoxelStore;

/// Owner of all mutable world state: the voxel store and the blueprint
/// registrations. Constructed once and passed by `&mut` into the
/// simulation and meshing layers; there are no globals.
pub struct World {
    pub store: VoxelStore,
    pub blueprints: BlueprintSet,
}

impl World {
    pub fn new() -> Self {
        Self {
            store: VoxelStore::new(),
            blueprints: BlueprintSet::new(),
        }
    }

    pub fn get_block(&self, pos: WorldCoord) -> Block {
        self.store.get_block(pos)
    }

    pub fn set_block(&mut self, pos: WorldCoord, block: Block) {
        self.store.set_block(pos, block);
    }

    /// Register a blueprint cell and place its ghost voxel. Cells that
    /// already hold a non-air block are refused.
    pub fn add_blueprint(&mut self, pos: WorldCoord) -> bool {
        if !self.store.get_block(pos).is_air() {
            return false;
        }
        if !self.blueprints.add(pos) {
            return false;
        }
        self.store.set_block(pos, Block::BlueprintFrame);
        true
    }

    /// Clear a blueprint registration, removing the ghost voxel if it
    /// is still present.
    pub fn remove_blueprint(&mut self, pos: WorldCoord) -> bool {
        if !self.blueprints.remove(&pos) {
            return false;
        }
        if self.store.get_block(pos) == Block::BlueprintFrame {
            self.store.set_block(pos, Block::Air);
        }
        true
    }

    /// Generate an asteroid centered on chunk `center`.
    pub fn generate_asteroid(&mut self, seed: u32, center: ChunkCoord, radius: f32) {
        AsteroidGenerator::new(seed).generate_asteroid(&mut self.store, center, radius);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
