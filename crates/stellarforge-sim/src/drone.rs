use glam::Vec3;
use stellarforge_core::block::Block;
use stellarforge_core::types::WorldCoord;

/// What a drone is doing this tick. Every drone is in exactly one
/// state, and the state carries its own data: there is no separate
/// target or progress field to fall out of sync.
#[derive(Debug, Clone, PartialEq)]
pub enum DroneTask {
    /// Nothing to do. `orbit` holds this tick's orbit waypoint around
    /// the hub, refreshed by the brain pass.
    Idle { orbit: Option<Vec3> },
    /// Flying to `target` to upgrade the block expected there.
    Building { expect: Block, target: WorldCoord },
    /// Flying to or chewing on the minable block at `target`.
    Mining {
        block: Block,
        target: WorldCoord,
        progress: f32,
    },
    /// Hauling an extracted block back to a point near the hub.
    Returning { carrying: Block, target: Vec3 },
}

impl DroneTask {
    /// Voxel this task has claimed, if any. Drives the reservation
    /// set: Idle and Returning hold no claim.
    pub fn claimed_voxel(&self) -> Option<WorldCoord> {
        match self {
            DroneTask::Building { target, .. } | DroneTask::Mining { target, .. } => Some(*target),
            DroneTask::Idle { .. } | DroneTask::Returning { .. } => None,
        }
    }

    /// Point in space the drone is steering toward, if any.
    pub fn destination(&self) -> Option<Vec3> {
        match self {
            DroneTask::Idle { orbit } => *orbit,
            DroneTask::Building { target, .. } | DroneTask::Mining { target, .. } => {
                Some(target.as_vec3() + Vec3::splat(0.5))
            }
            DroneTask::Returning { target, .. } => Some(*target),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DroneTask::Idle { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Drone {
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub task: DroneTask,
}

impl Drone {
    pub fn new(id: u32, position: Vec3) -> Self {
        Self {
            id,
            position,
            velocity: Vec3::ZERO,
            task: DroneTask::Idle { orbit: None },
        }
    }

    /// Drop the current task and bleed off half the velocity, so state
    /// changes read as a deliberate maneuver instead of a teleport.
    pub fn settle_into(&mut self, task: DroneTask) {
        self.task = task;
        self.velocity *= 0.5;
    }
}
