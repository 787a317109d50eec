//! Steering and integration pass.
//!
//! Classic seek steering: build a desired velocity toward the task
//! destination, clamp the correction to the acceleration budget, add
//! pairwise separation, clamp to cruise speed, integrate. Orbiting
//! drones skip the arrival slowdown so the ring keeps flowing.

use glam::Vec3;

use crate::config::SimConfig;
use crate::drone::{Drone, DroneTask};

pub fn run(drones: &mut [Drone], config: &SimConfig, dt: f32) {
    // Separation reads everyone's pre-integration position, so the
    // impulses are computed first.
    let impulses = separation_impulses(drones, config, dt);

    for (drone, impulse) in drones.iter_mut().zip(impulses) {
        if let Some(destination) = drone.task.destination() {
            steer_toward(drone, destination, config, dt);
        }
        drone.velocity += impulse;
        drone.velocity = drone.velocity.clamp_length_max(config.drone_speed);
        drone.position += drone.velocity * dt;
    }
}

fn steer_toward(drone: &mut Drone, destination: Vec3, config: &SimConfig, dt: f32) {
    let to_target = destination - drone.position;
    let distance = to_target.length();
    if distance < f32::EPSILON {
        return;
    }

    let mut desired = to_target / distance * config.drone_speed;

    let braking = !matches!(drone.task, DroneTask::Idle { .. });
    if braking && distance < config.slow_radius {
        desired *= distance / config.slow_radius;
    }

    let steer = (desired - drone.velocity).clamp_length_max(config.max_accel * dt);
    drone.velocity += steer;
}

/// O(N^2) pairwise repulsion between close drones. Each neighbor's
/// push is weighted by inverse distance and the sum is averaged over
/// the neighbor count, so a near collision repels harder than a loose
/// cluster and a crowd does not stack pushes linearly. Fine at swarm
/// sizes in the hundreds; revisit with a spatial grid if populations
/// grow past that.
fn separation_impulses(drones: &[Drone], config: &SimConfig, dt: f32) -> Vec<Vec3> {
    let mut impulses = vec![Vec3::ZERO; drones.len()];
    for i in 0..drones.len() {
        let mut push = Vec3::ZERO;
        let mut neighbors = 0u32;
        for j in 0..drones.len() {
            if i == j {
                continue;
            }
            let away = drones[i].position - drones[j].position;
            let distance = away.length();
            if distance > f32::EPSILON && distance < config.separation_radius {
                push += away / (distance * distance);
                neighbors += 1;
            }
        }
        if neighbors > 0 {
            impulses[i] = push / neighbors as f32 * config.separation_strength * dt;
        }
    }
    impulses
}
