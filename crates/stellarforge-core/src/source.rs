use crate::block::Block;
use crate::types::WorldCoord;

/// Read-only voxel access capability.
///
/// Implemented by the live store and by immutable chunk snapshots, so
/// the mesher and spatial queries never care which one they are
/// reading from. Unallocated space is `Block::Air`, never an error.
pub trait VoxelSource {
    fn block_at(&self, pos: WorldCoord) -> Block;
}
