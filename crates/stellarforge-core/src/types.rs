use glam::IVec3;

/// Chunk coordinate in chunk-space (each unit = CHUNK_SIZE voxels).
pub type ChunkCoord = IVec3;

/// World coordinate in voxel-space. Unbounded; the world is sparse.
pub type WorldCoord = IVec3;
