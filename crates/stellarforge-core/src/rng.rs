//! Deterministic position hash.
//!
//! Pure function: `position_hash(x, y, z, salt) -> u32`. No state. The
//! mesher derives per-voxel color jitter from this so that remeshing a
//! chunk with unchanged data produces bit-identical buffers (no
//! flicker across remesh). Uses PCG-style mixing rounds.

/// Hash a voxel position and salt into a well-distributed u32.
pub fn position_hash(x: i32, y: i32, z: i32, salt: u32) -> u32 {
    let mut state = (x as u32)
        .wrapping_mul(0x9E3779B9)
        .wrapping_add((y as u32).wrapping_mul(0x517C_C1B7))
        .wrapping_add((z as u32).wrapping_mul(0x6C62_272E))
        .wrapping_add(salt.wrapping_mul(0x2545_F491));

    state = state ^ (state >> 16);
    state = state.wrapping_mul(0x45D9F3B);
    state = state ^ (state >> 16);
    state = state.wrapping_mul(0x45D9F3B);
    state = state ^ (state >> 16);

    state
}

/// Convert a hash value to a float in [0, 1).
pub fn hash_to_unit(hash: u32) -> f32 {
    (hash >> 8) as f32 / 16_777_216.0 // 2^24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(position_hash(5, 10, 3, 42), position_hash(5, 10, 3, 42));
    }

    #[test]
    fn test_different_inputs_differ() {
        let vals = [
            position_hash(0, 0, 0, 0),
            position_hash(1, 0, 0, 0),
            position_hash(0, 1, 0, 0),
            position_hash(0, 0, 1, 0),
            position_hash(0, 0, 0, 1),
        ];
        for i in 0..vals.len() {
            for j in (i + 1)..vals.len() {
                assert_ne!(vals[i], vals[j], "hash collision at indices {i}, {j}");
            }
        }
    }

    #[test]
    fn test_symmetry_broken() {
        assert_ne!(position_hash(1, 2, 3, 0), position_hash(3, 2, 1, 0));
    }

    #[test]
    fn test_hash_to_unit_range() {
        for i in 0..1000 {
            let f = hash_to_unit(position_hash(i, -i, i * 7, 0));
            assert!((0.0..1.0).contains(&f), "out of range: {f}");
        }
    }
}
