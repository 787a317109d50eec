use stellarforge_core::block::Block;
use stellarforge_core::constants::CHUNK_SIZE;
use stellarforge_core::source::VoxelSource;
use stellarforge_core::types::{ChunkCoord, WorldCoord};
use stellarforge_world::store::VoxelStore;

/// Apron side length: the chunk plus one voxel of neighbor data on
/// each side, enough to resolve every cross-boundary face test.
const APRON: usize = CHUNK_SIZE as usize + 2;

/// Immutable capture of one chunk plus a one-voxel apron of its
/// neighbors.
///
/// This is the sole input the mesher needs, so meshing can be handed
/// to a worker as a plain message: the snapshot never changes under
/// it, and the output buffers are owned by the caller. Reads outside
/// the apron return `Air`; the mesher never asks for them.
pub struct ChunkSnapshot {
    coord: ChunkCoord,
    blocks: Box<[Block]>,
}

impl ChunkSnapshot {
    /// Capture the chunk at `coord` from the live store.
    pub fn capture(store: &VoxelStore, coord: ChunkCoord) -> Self {
        let cs = CHUNK_SIZE as i32;
        let origin = coord * cs - glam::IVec3::ONE;
        let mut blocks = vec![Block::Air; APRON * APRON * APRON].into_boxed_slice();

        for x in 0..APRON as i32 {
            for y in 0..APRON as i32 {
                for z in 0..APRON as i32 {
                    let world = origin + glam::IVec3::new(x, y, z);
                    blocks[Self::index(x, y, z)] = store.get_block(world);
                }
            }
        }

        Self { coord, blocks }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    fn index(x: i32, y: i32, z: i32) -> usize {
        let a = APRON as i32;
        (x + y * a + z * a * a) as usize
    }
}

impl VoxelSource for ChunkSnapshot {
    fn block_at(&self, pos: WorldCoord) -> Block {
        let cs = CHUNK_SIZE as i32;
        // apron-relative: local -1..=CHUNK_SIZE maps to 0..APRON
        let rel = pos - self.coord * cs + glam::IVec3::ONE;
        let a = APRON as i32;
        if rel.x < 0 || rel.x >= a || rel.y < 0 || rel.y >= a || rel.z < 0 || rel.z >= a {
            return Block::Air;
        }
        self.blocks[Self::index(rel.x, rel.y, rel.z)]
    }
}
