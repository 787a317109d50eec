use crate::store::VoxelStore;
use glam::Vec3;
use noise::{NoiseFn, Perlin};
use stellarforge_core::block::Block;
use stellarforge_core::constants::CHUNK_SIZE;
use stellarforge_core::math::{chunk_center, chunk_local_to_world};
use stellarforge_core::types::ChunkCoord;

/// Noise frequency per world axis for the surface perturbation.
const NOISE_FREQUENCY: f64 = 0.1;

/// Noise amplitude in voxel units added to the asteroid radius.
const NOISE_AMPLITUDE: f32 = 5.0;

/// Radius fraction below which voxels are core rather than surface.
const CORE_FRACTION: f32 = 0.5;

/// Procedural asteroid generator: a spherical distance field with a
/// coherent-noise-perturbed boundary. Deterministic for a given seed.
pub struct AsteroidGenerator {
    noise: Perlin,
}

impl AsteroidGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
        }
    }

    /// Populate `store` with an asteroid of roughly `radius` voxels
    /// centered on the middle of chunk `center`. One-shot pass: every
    /// voxel in a cubical region inflated enough to cover the radius
    /// plus noise is visited once.
    pub fn generate_asteroid(&self, store: &mut VoxelStore, center: ChunkCoord, radius: f32) {
        let cs = CHUNK_SIZE as i32;
        let middle = chunk_center(center);
        // ceil(radius / S) + 1 chunks beyond the core chunk guarantees
        // the noise-inflated boundary is inside the scan region.
        let range = (radius / cs as f32).ceil() as i32 + 1;

        for cx in (center.x - range)..=(center.x + range) {
            for cy in (center.y - range)..=(center.y + range) {
                for cz in (center.z - range)..=(center.z + range) {
                    let coord = ChunkCoord::new(cx, cy, cz);
                    for lx in 0..cs {
                        for ly in 0..cs {
                            for lz in 0..cs {
                                let world =
                                    chunk_local_to_world(coord, glam::IVec3::new(lx, ly, lz));
                                self.place_voxel(store, middle, radius, world);
                            }
                        }
                    }
                }
            }
        }

        log::debug!(
            "generated asteroid at {center} radius {radius}: {} chunks allocated",
            store.chunk_count()
        );
    }

    fn place_voxel(
        &self,
        store: &mut VoxelStore,
        middle: Vec3,
        radius: f32,
        world: glam::IVec3,
    ) {
        let pos = world.as_vec3();
        let dist = middle.distance(pos);
        let perturbation = self.noise.get([
            world.x as f64 * NOISE_FREQUENCY,
            world.y as f64 * NOISE_FREQUENCY,
            world.z as f64 * NOISE_FREQUENCY,
        ]) as f32;

        if dist < radius + perturbation * NOISE_AMPLITUDE {
            let block = if dist < radius * CORE_FRACTION {
                Block::AsteroidCore
            } else {
                Block::AsteroidSurface
            };
            store.set_block(world, block);
        }
    }
}
