use glam::IVec3;

/// One of the 6 face-adjacent directions in the voxel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    East = 0,  // +X
    West = 1,  // -X
    Up = 2,    // +Y
    Down = 3,  // -Y
    South = 4, // +Z
    North = 5, // -Z
}

/// All 6 faces in fixed dispatch order. Query and mesher both iterate
/// this order so scan results stay deterministic.
pub const ALL_FACES: [Face; 6] = [
    Face::East,
    Face::West,
    Face::Up,
    Face::Down,
    Face::South,
    Face::North,
];

impl Face {
    /// Integer offset to the neighboring voxel across this face.
    pub fn offset(self) -> IVec3 {
        match self {
            Face::East => IVec3::new(1, 0, 0),
            Face::West => IVec3::new(-1, 0, 0),
            Face::Up => IVec3::new(0, 1, 0),
            Face::Down => IVec3::new(0, -1, 0),
            Face::South => IVec3::new(0, 0, 1),
            Face::North => IVec3::new(0, 0, -1),
        }
    }

    /// Unit outward normal of this face.
    pub fn normal(self) -> glam::Vec3 {
        self.offset().as_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_offsets_are_unit_axis_vectors() {
        for face in ALL_FACES {
            let o = face.offset();
            assert_eq!(o.x.abs() + o.y.abs() + o.z.abs(), 1);
        }
    }

    #[test]
    fn test_faces_cover_all_six_neighbors() {
        let mut offsets: Vec<IVec3> = ALL_FACES.iter().map(|f| f.offset()).collect();
        offsets.sort_by_key(|v| (v.x, v.y, v.z));
        offsets.dedup();
        assert_eq!(offsets.len(), 6);
    }
}
