//! Single source of truth for shared world constants.

/// Side length of a chunk in voxels.
pub const CHUNK_SIZE: u32 = 16;

/// Total voxels per chunk (16^3).
pub const VOXELS_PER_CHUNK: u32 = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Mining progress threshold at which a voxel is extracted.
pub const MINING_COMPLETE: f32 = 100.0;
