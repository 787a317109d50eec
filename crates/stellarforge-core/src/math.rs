use crate::constants::CHUNK_SIZE;
use crate::types::{ChunkCoord, WorldCoord};
use glam::IVec3;

/// Convert a world-space voxel coordinate to its containing chunk
/// coordinate. Floor semantics: world x = -1 maps to chunk -1, not 0.
pub fn world_to_chunk(world: WorldCoord) -> ChunkCoord {
    let cs = CHUNK_SIZE as i32;
    IVec3::new(
        world.x.div_euclid(cs),
        world.y.div_euclid(cs),
        world.z.div_euclid(cs),
    )
}

/// Convert a world-space voxel coordinate to its local offset within a
/// chunk. Always in 0..CHUNK_SIZE on each axis.
pub fn world_to_local(world: WorldCoord) -> IVec3 {
    let cs = CHUNK_SIZE as i32;
    IVec3::new(
        world.x.rem_euclid(cs),
        world.y.rem_euclid(cs),
        world.z.rem_euclid(cs),
    )
}

/// Convert a chunk coordinate and local offset back to world-space.
pub fn chunk_local_to_world(chunk: ChunkCoord, local: IVec3) -> WorldCoord {
    let cs = CHUNK_SIZE as i32;
    IVec3::new(
        chunk.x * cs + local.x,
        chunk.y * cs + local.y,
        chunk.z * cs + local.z,
    )
}

/// Center of a chunk in world-space voxel coordinates.
pub fn chunk_center(chunk: ChunkCoord) -> glam::Vec3 {
    let cs = CHUNK_SIZE as f32;
    glam::Vec3::new(
        chunk.x as f32 * cs + cs / 2.0,
        chunk.y as f32 * cs + cs / 2.0,
        chunk.z as f32 * cs + cs / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_chunk_positive() {
        assert_eq!(world_to_chunk(IVec3::new(0, 0, 0)), IVec3::ZERO);
        assert_eq!(world_to_chunk(IVec3::new(15, 15, 15)), IVec3::ZERO);
        assert_eq!(world_to_chunk(IVec3::new(16, 0, 0)), IVec3::new(1, 0, 0));
    }

    #[test]
    fn test_world_to_chunk_negative() {
        assert_eq!(world_to_chunk(IVec3::new(-1, 0, 0)), IVec3::new(-1, 0, 0));
        assert_eq!(world_to_chunk(IVec3::new(-16, 0, 0)), IVec3::new(-1, 0, 0));
        assert_eq!(world_to_chunk(IVec3::new(-17, 0, 0)), IVec3::new(-2, 0, 0));
    }

    #[test]
    fn test_world_to_local_negative() {
        // world x = -1 is local 15 of chunk -1, never local -1 of chunk 0
        assert_eq!(world_to_local(IVec3::new(-1, 0, 0)), IVec3::new(15, 0, 0));
        assert_eq!(world_to_local(IVec3::new(-16, 0, 0)), IVec3::new(0, 0, 0));
    }

    #[test]
    fn test_chunk_local_roundtrip() {
        for world in [
            IVec3::new(0, 0, 0),
            IVec3::new(-50, 100, 3),
            IVec3::new(-1, -1, -1),
            IVec3::new(31, -17, 160),
        ] {
            let chunk = world_to_chunk(world);
            let local = world_to_local(world);
            assert_eq!(chunk_local_to_world(chunk, local), world);
        }
    }

    #[test]
    fn test_chunk_center() {
        assert_eq!(chunk_center(IVec3::ZERO), glam::Vec3::splat(8.0));
        assert_eq!(
            chunk_center(IVec3::new(-1, 0, 2)),
            glam::Vec3::new(-8.0, 8.0, 40.0)
        );
    }
}
