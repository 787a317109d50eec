use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the drone swarm. Serializable so benchmark
/// scenarios can be replayed from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Cruise speed cap in voxels per second.
    pub drone_speed: f32,
    /// Steering force cap in voxels per second squared.
    pub max_accel: f32,
    /// Distance at which a drone counts as having arrived at a target.
    pub arrival_radius: f32,
    /// Distance at which work-bound drones start braking.
    pub slow_radius: f32,
    /// Neighbor distance below which drones push apart.
    pub separation_radius: f32,
    /// Separation acceleration in voxels per second squared.
    pub separation_strength: f32,
    /// Mining progress per second at prestige zero.
    pub mining_rate: f32,
    /// Matter debited when a frame or panel is constructed.
    pub frame_cost: u32,
    /// Rare matter debited when a shell is constructed.
    pub shell_cost: u32,
    /// Matter price of the first drone. Escalates per purchase.
    pub drone_base_cost: f32,
    /// World position of the delivery hub.
    pub hub_position: Vec3,
    /// Half-extents of the random jitter applied to hub-bound targets
    /// and spawn positions, so drones never stack on one point.
    pub hub_jitter: Vec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            drone_speed: 20.0,
            max_accel: 35.0,
            arrival_radius: 1.5,
            slow_radius: 5.0,
            separation_radius: 2.5,
            separation_strength: 20.0,
            mining_rate: 50.0,
            frame_cost: 5,
            shell_cost: 2,
            drone_base_cost: 50.0,
            hub_position: Vec3::ZERO,
            hub_jitter: Vec3::new(4.0, 2.0, 4.0),
        }
    }
}
