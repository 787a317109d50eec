//! Face-culling chunk mesher.
//!
//! Pure function from (chunk coordinate, voxel source, registry) to
//! triangle buffers: identical input always produces bit-identical
//! output, which is what makes the dirty-flag contract sound and lets
//! meshing move onto a worker without changing results.

use glam::Vec3;
use stellarforge_core::block::Block;
use stellarforge_core::constants::CHUNK_SIZE;
use stellarforge_core::direction::{Face, ALL_FACES};
use stellarforge_core::registry::BlockRegistry;
use stellarforge_core::rng::{hash_to_unit, position_hash};
use stellarforge_core::source::VoxelSource;
use stellarforge_core::types::ChunkCoord;

/// Brightness jitter span applied to asteroid material colors
/// (+/- 7.5%), derived from a position hash so remeshes never flicker.
const COLOR_JITTER: f32 = 0.15;

/// Triangle buffers for one chunk, in chunk-local coordinates.
/// Four parallel arrays: 3 floats per vertex for positions, normals
/// and colors, 3 indices per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Byte views for direct GPU upload by the external renderer.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Mesh the chunk at `coord`, reading voxels (including neighbors
/// across chunk boundaries) through `source`.
///
/// A face is emitted when the neighbor is transparent per the
/// registry, unless both voxels are transparent and of the same type:
/// adjacent frames would otherwise render double-walled interior
/// geometry.
pub fn generate_chunk_mesh<S: VoxelSource>(
    coord: ChunkCoord,
    source: &S,
    registry: &BlockRegistry,
) -> MeshBuffers {
    let mut mesh = MeshBuffers::default();
    let cs = CHUNK_SIZE as i32;
    let chunk_origin = coord * cs;

    for x in 0..cs {
        for y in 0..cs {
            for z in 0..cs {
                let world = chunk_origin + glam::IVec3::new(x, y, z);
                let block = source.block_at(world);
                if block.is_air() {
                    continue;
                }

                for face in ALL_FACES {
                    let neighbor = source.block_at(world + face.offset());
                    let visible = registry.is_transparent(neighbor)
                        && !(registry.is_transparent(block) && neighbor == block);
                    if visible {
                        add_face(&mut mesh, x, y, z, face, block, registry);
                    }
                }
            }
        }
    }

    mesh
}

fn add_face(
    mesh: &mut MeshBuffers,
    x: i32,
    y: i32,
    z: i32,
    face: Face,
    block: Block,
    registry: &BlockRegistry,
) {
    let base = (mesh.positions.len() / 3) as u32;
    let normal = face.normal();

    // Unit cube centered on local + 0.5; the face plane sits half a
    // voxel along the normal, spanned by the two perpendicular axes.
    let center = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, z as f32 + 0.5) + normal * 0.5;
    let (u, v) = face_basis(normal);

    let corners = [
        center - u * 0.5 - v * 0.5,
        center + u * 0.5 - v * 0.5,
        center + u * 0.5 + v * 0.5,
        center - u * 0.5 + v * 0.5,
    ];

    for corner in corners {
        mesh.positions.extend_from_slice(&[corner.x, corner.y, corner.z]);
        mesh.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
    }

    let color = jittered_color(block, registry, x, y, z);
    for _ in 0..4 {
        mesh.colors.extend_from_slice(&color);
    }

    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Two unit vectors spanning the face plane, picked by dominant
/// normal axis.
fn face_basis(normal: Vec3) -> (Vec3, Vec3) {
    if normal.x.abs() > 0.9 {
        (Vec3::Y, Vec3::Z)
    } else if normal.y.abs() > 0.9 {
        (Vec3::X, Vec3::Z)
    } else {
        (Vec3::X, Vec3::Y)
    }
}

/// Registry color with deterministic per-voxel brightness jitter for
/// the asteroid materials, standing in for real textures.
fn jittered_color(block: Block, registry: &BlockRegistry, x: i32, y: i32, z: i32) -> [f32; 3] {
    let mut color = registry.color(block);
    if matches!(block, Block::AsteroidCore | Block::AsteroidSurface) {
        let unit = hash_to_unit(position_hash(x, y, z, 0));
        let variance = (unit - 0.5) * COLOR_JITTER;
        for channel in &mut color {
            *channel = (*channel + variance).clamp(0.0, 1.0);
        }
    }
    color
}
