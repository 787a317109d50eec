use std::collections::HashSet;

use stellarforge_core::types::WorldCoord;

use crate::drone::Drone;

/// Tick-scoped set of voxels already claimed by a drone task.
///
/// Rebuilt from the live drone list at the start of every brain pass
/// rather than maintained incrementally, so it can never leak a claim
/// from a drone that died or abandoned its job.
#[derive(Debug, Default)]
pub struct ReservationSet {
    claimed: HashSet<WorldCoord>,
}

impl ReservationSet {
    pub fn from_drones(drones: &[Drone]) -> Self {
        let claimed = drones
            .iter()
            .filter_map(|d| d.task.claimed_voxel())
            .collect();
        Self { claimed }
    }

    pub fn is_claimed(&self, pos: &WorldCoord) -> bool {
        self.claimed.contains(pos)
    }

    /// Record a claim made during this brain pass so later drones in
    /// the same tick cannot take the same voxel.
    pub fn claim(&mut self, pos: WorldCoord) -> bool {
        self.claimed.insert(pos)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drone::DroneTask;
    use glam::{IVec3, Vec3};
    use stellarforge_core::block::Block;

    #[test]
    fn test_rebuild_reflects_live_tasks_only() {
        let mut miner = Drone::new(0, Vec3::ZERO);
        miner.task = DroneTask::Mining {
            block: Block::AsteroidSurface,
            target: IVec3::new(1, 0, 0),
            progress: 10.0,
        };
        let mut hauler = Drone::new(1, Vec3::ZERO);
        hauler.task = DroneTask::Returning {
            carrying: Block::AsteroidCore,
            target: Vec3::ZERO,
        };
        let idle = Drone::new(2, Vec3::ZERO);

        let set = ReservationSet::from_drones(&[miner, hauler, idle]);
        assert_eq!(set.len(), 1);
        assert!(set.is_claimed(&IVec3::new(1, 0, 0)));
    }

    #[test]
    fn test_claim_blocks_repeat_claims() {
        let mut set = ReservationSet::from_drones(&[]);
        assert!(set.claim(IVec3::new(2, 2, 2)));
        assert!(!set.claim(IVec3::new(2, 2, 2)));
        assert!(set.is_claimed(&IVec3::new(2, 2, 2)));
    }
}
