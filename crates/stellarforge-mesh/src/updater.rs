//! Dirty-chunk remeshing driver.
//!
//! Owns the cache of built chunk meshes and the handshake with the
//! store's dirty set: drain dirty coordinates, snapshot each chunk
//! with its apron, rebuild, and drop cache entries for chunks that
//! meshed to nothing.

use std::collections::HashMap;

use stellarforge_core::registry::BlockRegistry;
use stellarforge_core::types::ChunkCoord;
use stellarforge_world::store::VoxelStore;

use crate::mesher::{generate_chunk_mesh, MeshBuffers};
use crate::snapshot::ChunkSnapshot;

#[derive(Debug, Default)]
pub struct MeshCache {
    meshes: HashMap<ChunkCoord, MeshBuffers>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&MeshBuffers> {
        self.meshes.get(&coord)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Rebuild every chunk the store has marked dirty since the last
    /// call. Clears the dirty set. Returns the number of chunks
    /// rebuilt.
    ///
    /// Each chunk is captured into a snapshot first, so the mesh step
    /// itself never touches the live store.
    pub fn remesh_dirty(&mut self, store: &mut VoxelStore, registry: &BlockRegistry) -> usize {
        let dirty = store.take_dirty();
        let rebuilt = dirty.len();

        for coord in dirty {
            let snapshot = ChunkSnapshot::capture(store, coord);
            let mesh = generate_chunk_mesh(coord, &snapshot, registry);
            if mesh.is_empty() {
                self.meshes.remove(&coord);
            } else {
                self.meshes.insert(coord, mesh);
            }
        }

        if rebuilt > 0 {
            log::trace!("remeshed {} dirty chunks, cache {}", rebuilt, self.meshes.len());
        }
        rebuilt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use stellarforge_core::block::Block;

    #[test]
    fn test_remesh_consumes_dirty_set() {
        let mut store = VoxelStore::new();
        let registry = BlockRegistry::builtin();
        let mut cache = MeshCache::new();

        store.set_block(IVec3::new(1, 2, 3), Block::Panel);
        assert!(store.dirty_count() > 0);

        let rebuilt = cache.remesh_dirty(&mut store, &registry);
        assert!(rebuilt >= 1);
        assert_eq!(store.dirty_count(), 0);
        assert!(cache.get(IVec3::ZERO).is_some());
    }

    #[test]
    fn test_clean_store_remeshes_nothing() {
        let mut store = VoxelStore::new();
        let registry = BlockRegistry::builtin();
        let mut cache = MeshCache::new();

        store.set_block(IVec3::ZERO, Block::Panel);
        cache.remesh_dirty(&mut store, &registry);

        assert_eq!(cache.remesh_dirty(&mut store, &registry), 0);
    }

    #[test]
    fn test_mined_out_chunk_drops_cache_entry() {
        let mut store = VoxelStore::new();
        let registry = BlockRegistry::builtin();
        let mut cache = MeshCache::new();

        store.set_block(IVec3::new(5, 5, 5), Block::AsteroidSurface);
        cache.remesh_dirty(&mut store, &registry);
        assert!(cache.get(IVec3::ZERO).is_some());

        store.set_block(IVec3::new(5, 5, 5), Block::Air);
        cache.remesh_dirty(&mut store, &registry);
        assert!(cache.get(IVec3::ZERO).is_none());
    }

    #[test]
    fn test_boundary_edit_refreshes_neighbor_mesh() {
        let mut store = VoxelStore::new();
        let registry = BlockRegistry::builtin();
        let mut cache = MeshCache::new();

        // Solid voxel at the +x edge of chunk (0,0,0), then a face-on
        // neighbor in chunk (1,0,0).
        store.set_block(IVec3::new(15, 0, 0), Block::Panel);
        cache.remesh_dirty(&mut store, &registry);
        let before = cache.get(IVec3::ZERO).unwrap().vertex_count();

        store.set_block(IVec3::new(16, 0, 0), Block::Panel);
        cache.remesh_dirty(&mut store, &registry);
        let after = cache.get(IVec3::ZERO).unwrap().vertex_count();

        // The shared face got culled, so the first chunk lost a face.
        assert_eq!(before, 24);
        assert_eq!(after, 20);
    }
}
