//! Read-only spatial search over the voxel store.
//!
//! Both queries are bounded scans: they walk allocated chunks in
//! sorted coordinate order, local voxels in x/y/z nesting order, and
//! stop as soon as `limit` results are collected. First-found in scan
//! order, not globally nearest.

use crate::store::VoxelStore;
use stellarforge_core::block::Block;
use stellarforge_core::constants::CHUNK_SIZE;
use stellarforge_core::direction::ALL_FACES;
use stellarforge_core::math::chunk_local_to_world;
use stellarforge_core::registry::BlockRegistry;
use stellarforge_core::types::WorldCoord;

/// World coordinates of up to `limit` voxels matching `block`.
pub fn find_blocks_by_type(store: &VoxelStore, block: Block, limit: usize) -> Vec<WorldCoord> {
    let mut results = Vec::new();
    let cs = CHUNK_SIZE as i32;

    'scan: for coord in store.chunk_coords_sorted() {
        let chunk = match store.get_chunk(&coord) {
            Some(c) => c,
            None => continue,
        };
        for x in 0..cs {
            for y in 0..cs {
                for z in 0..cs {
                    if chunk.get(x as usize, y as usize, z as usize) == block {
                        results.push(chunk_local_to_world(coord, glam::IVec3::new(x, y, z)));
                        if results.len() >= limit {
                            break 'scan;
                        }
                    }
                }
            }
        }
    }
    results
}

/// Up to `limit` minable voxels that are exposed: at least one of the
/// 6 face neighbors is air, a frame, or a blueprint ghost. The
/// neighbor lookup goes through the store, so exposure across chunk
/// boundaries is resolved correctly.
pub fn find_mining_targets(
    store: &VoxelStore,
    registry: &BlockRegistry,
    limit: usize,
) -> Vec<WorldCoord> {
    let mut targets = Vec::new();
    let cs = CHUNK_SIZE as i32;

    'scan: for coord in store.chunk_coords_sorted() {
        let chunk = match store.get_chunk(&coord) {
            Some(c) => c,
            None => continue,
        };
        for x in 0..cs {
            for y in 0..cs {
                for z in 0..cs {
                    let block = chunk.get(x as usize, y as usize, z as usize);
                    if !registry.is_minable(block) {
                        continue;
                    }
                    let world = chunk_local_to_world(coord, glam::IVec3::new(x, y, z));
                    if is_exposed(store, world) {
                        targets.push(world);
                        if targets.len() >= limit {
                            break 'scan;
                        }
                    }
                }
            }
        }
    }
    targets
}

fn is_exposed(store: &VoxelStore, pos: WorldCoord) -> bool {
    ALL_FACES
        .iter()
        .any(|face| store.get_block(pos + face.offset()).exposes())
}
