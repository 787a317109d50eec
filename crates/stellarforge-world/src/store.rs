use crate::chunk::Chunk;
use glam::IVec3;
use std::collections::{HashMap, HashSet};
use stellarforge_core::block::Block;
use stellarforge_core::constants::CHUNK_SIZE;
use stellarforge_core::math::{world_to_chunk, world_to_local};
use stellarforge_core::source::VoxelSource;
use stellarforge_core::types::{ChunkCoord, WorldCoord};

/// Sparse chunked voxel storage; the single source of truth for block
/// state.
///
/// Chunks are allocated lazily on the first non-air write into their
/// range and live for the rest of the session. Writes mark the owning
/// chunk dirty, plus any already-allocated neighbor chunk across a
/// boundary face the written voxel touches.
pub struct VoxelStore {
    chunks: HashMap<ChunkCoord, Chunk>,
    dirty: HashSet<ChunkCoord>,
}

impl VoxelStore {
    pub fn new() -> Self {
        Self {
            chunks: HashMap::new(),
            dirty: HashSet::new(),
        }
    }

    /// Read a voxel. Unallocated space is `Air`; never an error.
    pub fn get_block(&self, pos: WorldCoord) -> Block {
        let chunk_pos = world_to_chunk(pos);
        match self.chunks.get(&chunk_pos) {
            Some(chunk) => {
                let local = world_to_local(pos);
                chunk.get(local.x as usize, local.y as usize, local.z as usize)
            }
            None => Block::Air,
        }
    }

    /// Write a voxel. Writing `Air` into unallocated space is a no-op
    /// so air never forces a chunk allocation. Any other write lazily
    /// allocates the owning chunk and marks dirty flags.
    pub fn set_block(&mut self, pos: WorldCoord, block: Block) {
        let chunk_pos = world_to_chunk(pos);
        if block.is_air() && !self.chunks.contains_key(&chunk_pos) {
            return;
        }

        let local = world_to_local(pos);
        let chunk = self.chunks.entry(chunk_pos).or_insert_with(Chunk::new_empty);
        chunk.set(local.x as usize, local.y as usize, local.z as usize, block);

        self.dirty.insert(chunk_pos);
        self.mark_boundary_neighbors(chunk_pos, local);
    }

    /// A boundary-local write invalidates the adjacent chunk's mesh
    /// too (its face culling saw the old value). Only chunks that
    /// actually exist are marked; there is nothing to remesh for
    /// never-allocated space.
    fn mark_boundary_neighbors(&mut self, chunk_pos: ChunkCoord, local: IVec3) {
        let edge = CHUNK_SIZE as i32 - 1;
        let mut mark = |offset: IVec3| {
            let neighbor = chunk_pos + offset;
            if self.chunks.contains_key(&neighbor) {
                self.dirty.insert(neighbor);
            }
        };

        if local.x == 0 {
            mark(IVec3::new(-1, 0, 0));
        } else if local.x == edge {
            mark(IVec3::new(1, 0, 0));
        }
        if local.y == 0 {
            mark(IVec3::new(0, -1, 0));
        } else if local.y == edge {
            mark(IVec3::new(0, 1, 0));
        }
        if local.z == 0 {
            mark(IVec3::new(0, 0, -1));
        } else if local.z == edge {
            mark(IVec3::new(0, 0, 1));
        }
    }

    pub fn get_chunk(&self, coord: &ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Allocated chunk coordinates in sorted order. Spatial queries
    /// scan in this order so results are deterministic for a given
    /// chunk set despite the hash map underneath.
    pub fn chunk_coords_sorted(&self) -> Vec<ChunkCoord> {
        let mut coords: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        coords.sort_by_key(|c| (c.x, c.y, c.z));
        coords
    }

    pub fn is_dirty(&self, coord: &ChunkCoord) -> bool {
        self.dirty.contains(coord)
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    /// Re-mark a chunk stale, e.g. when a write lands between snapshot
    /// capture and mesh completion.
    pub fn mark_dirty(&mut self, coord: ChunkCoord) {
        if self.chunks.contains_key(&coord) {
            self.dirty.insert(coord);
        }
    }

    /// Drain the dirty set, sorted for deterministic remesh order.
    /// The caller must produce a fresh mesh for every returned chunk;
    /// the flag is considered cleared by this call.
    pub fn take_dirty(&mut self) -> Vec<ChunkCoord> {
        let mut coords: Vec<ChunkCoord> = self.dirty.drain().collect();
        coords.sort_by_key(|c| (c.x, c.y, c.z));
        coords
    }
}

impl Default for VoxelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelSource for VoxelStore {
    fn block_at(&self, pos: WorldCoord) -> Block {
        self.get_block(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_write_does_not_allocate() {
        let mut store = VoxelStore::new();
        assert_eq!(store.get_block(IVec3::new(5, 5, 5)), Block::Air);
        store.set_block(IVec3::new(5, 5, 5), Block::Air);
        assert_eq!(store.chunk_count(), 0);
        assert_eq!(store.get_block(IVec3::new(5, 5, 5)), Block::Air);
        assert_eq!(store.dirty_count(), 0);
    }

    #[test]
    fn test_set_get_roundtrip_all_types() {
        let mut store = VoxelStore::new();
        for (i, block) in Block::ALL.into_iter().filter(|b| !b.is_air()).enumerate() {
            let pos = IVec3::new(i as i32 * 40, -3, 7);
            store.set_block(pos, block);
            assert_eq!(store.get_block(pos), block);
        }
    }

    #[test]
    fn test_write_marks_owner_dirty() {
        // Scenario A
        let mut store = VoxelStore::new();
        store.set_block(IVec3::ZERO, Block::Frame);
        assert_eq!(store.get_block(IVec3::ZERO), Block::Frame);
        assert!(store.is_dirty(&IVec3::ZERO));
        assert_eq!(store.chunk_count(), 1);
    }

    #[test]
    fn test_boundary_write_marks_existing_neighbor() {
        let mut store = VoxelStore::new();
        // Allocate both chunks first, then clear flags.
        store.set_block(IVec3::new(1, 1, 1), Block::Panel);
        store.set_block(IVec3::new(16, 1, 1), Block::Panel);
        store.take_dirty();

        // Local x = 15 touches the +X boundary.
        store.set_block(IVec3::new(15, 1, 1), Block::Frame);
        assert!(store.is_dirty(&IVec3::new(0, 0, 0)));
        assert!(store.is_dirty(&IVec3::new(1, 0, 0)));
    }

    #[test]
    fn test_boundary_write_skips_missing_neighbor() {
        let mut store = VoxelStore::new();
        store.set_block(IVec3::new(0, 0, 0), Block::Panel);
        // Writing at local (0,0,0) touches three boundaries, but none
        // of those chunks exist: only the owner is dirty.
        let dirty = store.take_dirty();
        assert_eq!(dirty, vec![IVec3::new(0, 0, 0)]);
    }

    #[test]
    fn test_negative_coordinates_floor_correctly() {
        let mut store = VoxelStore::new();
        store.set_block(IVec3::new(-1, 0, 0), Block::Shell);
        assert_eq!(store.get_block(IVec3::new(-1, 0, 0)), Block::Shell);
        assert!(store.get_chunk(&IVec3::new(-1, 0, 0)).is_some());
        assert!(store.get_chunk(&IVec3::new(0, 0, 0)).is_none());
    }

    #[test]
    fn test_corner_write_marks_three_existing_neighbors() {
        let mut store = VoxelStore::new();
        for coord in [
            IVec3::new(0, 0, 0),
            IVec3::new(-1, 0, 0),
            IVec3::new(0, -1, 0),
            IVec3::new(0, 0, -1),
        ] {
            store.set_block(coord * 16, Block::Panel);
        }
        store.take_dirty();

        store.set_block(IVec3::new(0, 0, 0), Block::Frame);
        assert_eq!(store.dirty_count(), 4);
    }

    #[test]
    fn test_take_dirty_clears_and_sorts() {
        let mut store = VoxelStore::new();
        store.set_block(IVec3::new(40, 0, 0), Block::Panel);
        store.set_block(IVec3::new(0, 0, 0), Block::Panel);
        let dirty = store.take_dirty();
        assert_eq!(dirty, vec![IVec3::new(0, 0, 0), IVec3::new(2, 0, 0)]);
        assert_eq!(store.dirty_count(), 0);
    }

    #[test]
    fn test_mark_dirty_requires_existing_chunk() {
        let mut store = VoxelStore::new();
        store.mark_dirty(IVec3::new(9, 9, 9));
        assert_eq!(store.dirty_count(), 0);
    }

    #[test]
    fn test_air_overwrite_in_existing_chunk() {
        let mut store = VoxelStore::new();
        store.set_block(IVec3::new(2, 2, 2), Block::AsteroidSurface);
        store.take_dirty();

        store.set_block(IVec3::new(2, 2, 2), Block::Air);
        assert_eq!(store.get_block(IVec3::new(2, 2, 2)), Block::Air);
        assert!(store.is_dirty(&IVec3::ZERO));
        // chunk remains allocated; eviction is out of scope
        assert_eq!(store.chunk_count(), 1);
    }
}
