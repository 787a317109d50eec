use stellarforge_core::block::Block;
use stellarforge_core::constants::{CHUNK_SIZE, VOXELS_PER_CHUNK};

const CS: usize = CHUNK_SIZE as usize;

#[inline]
const fn idx(x: usize, y: usize, z: usize) -> usize {
    x + y * CS + z * CS * CS
}

/// Dense storage for one chunk's worth of voxels. Local coordinates
/// are 0..CHUNK_SIZE on each axis.
#[derive(Clone)]
pub struct Chunk {
    blocks: Box<[Block; VOXELS_PER_CHUNK as usize]>,
}

impl Chunk {
    pub fn new_empty() -> Self {
        Self {
            blocks: Box::new([Block::Air; VOXELS_PER_CHUNK as usize]),
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Block {
        self.blocks[idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: Block) {
        self.blocks[idx(x, y, z)] = block;
    }

    /// Flat view in x + y*S + z*S*S order, for snapshot capture.
    pub fn as_slice(&self) -> &[Block] {
        &self.blocks[..]
    }

    pub fn is_all_air(&self) -> bool {
        self.blocks.iter().all(|b| b.is_air())
    }
}
