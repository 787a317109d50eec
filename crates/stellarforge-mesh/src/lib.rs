//! Chunk meshing: apron snapshots, the face-culling mesher, and the
//! dirty-driven mesh cache.

pub mod mesher;
pub mod snapshot;
pub mod updater;

pub use mesher::{generate_chunk_mesh, MeshBuffers};
pub use snapshot::ChunkSnapshot;
pub use updater::MeshCache;
