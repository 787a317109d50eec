//! Task assignment pass.
//!
//! Runs once per tick before movement. Idle drones pick work in a
//! fixed priority order: finish blueprints, upgrade frames to panels,
//! upgrade panels to shells, then mine. Each claim goes through the
//! reservation set, so no two drones ever hold the same voxel.

use glam::Vec3;
use stellarforge_core::block::Block;
use stellarforge_core::registry::BlockRegistry;
use stellarforge_core::types::WorldCoord;
use stellarforge_world::query::{find_blocks_by_type, find_mining_targets};
use stellarforge_world::World;

use crate::config::SimConfig;
use crate::drone::{Drone, DroneTask};
use crate::economy::Ledger;
use crate::reservation::ReservationSet;

/// Headroom added to the drone count when sizing query scans, so a
/// swarm with every voxel reserved still sees fresh candidates.
const QUERY_HEADROOM: usize = 20;

pub fn run(
    drones: &mut [Drone],
    world: &World,
    registry: &BlockRegistry,
    ledger: &Ledger,
    config: &SimConfig,
    elapsed: f64,
) {
    let mut reservations = ReservationSet::from_drones(drones);
    let limit = drones.len() + QUERY_HEADROOM;

    // Candidate lists are computed once per tick and shared across
    // idle drones; the reservation set keeps assignments disjoint.
    let blueprint_cells = world.blueprints.cells_sorted();
    let frames = find_blocks_by_type(&world.store, Block::Frame, limit);
    let panels = find_blocks_by_type(&world.store, Block::Panel, limit);
    let mine_targets = find_mining_targets(&world.store, registry, limit);

    let can_build = ledger.matter() >= config.frame_cost;
    let can_shell = ledger.rare_matter() >= config.shell_cost;

    for drone in drones.iter_mut() {
        if !drone.task.is_idle() {
            continue;
        }

        let assigned = assign(
            drone,
            world,
            &mut reservations,
            &blueprint_cells,
            &frames,
            &panels,
            &mine_targets,
            can_build,
            can_shell,
        );

        if !assigned {
            // No work: fall into the hub orbit. The waypoint is a pure
            // function of time and drone id, refreshed every tick.
            let orbit = orbit_waypoint(config.hub_position, drone.id, elapsed);
            drone.task = DroneTask::Idle { orbit: Some(orbit) };
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn assign(
    drone: &mut Drone,
    world: &World,
    reservations: &mut ReservationSet,
    blueprint_cells: &[WorldCoord],
    frames: &[WorldCoord],
    panels: &[WorldCoord],
    mine_targets: &[WorldCoord],
    can_build: bool,
    can_shell: bool,
) -> bool {
    if can_build {
        if let Some(target) = nearest_unclaimed(drone.position, blueprint_cells, reservations) {
            reservations.claim(target);
            drone.settle_into(DroneTask::Building {
                expect: Block::BlueprintFrame,
                target,
            });
            return true;
        }
        if let Some(target) = nearest_unclaimed(drone.position, frames, reservations) {
            reservations.claim(target);
            drone.settle_into(DroneTask::Building {
                expect: Block::Frame,
                target,
            });
            return true;
        }
    }

    if can_shell {
        if let Some(target) = nearest_unclaimed(drone.position, panels, reservations) {
            reservations.claim(target);
            drone.settle_into(DroneTask::Building {
                expect: Block::Panel,
                target,
            });
            return true;
        }
    }

    if let Some(target) = nearest_unclaimed(drone.position, mine_targets, reservations) {
        reservations.claim(target);
        drone.settle_into(DroneTask::Mining {
            block: world.get_block(target),
            target,
            progress: 0.0,
        });
        return true;
    }

    false
}

/// Nearest candidate by squared distance that nobody has claimed.
fn nearest_unclaimed(
    from: Vec3,
    candidates: &[WorldCoord],
    reservations: &ReservationSet,
) -> Option<WorldCoord> {
    candidates
        .iter()
        .filter(|pos| !reservations.is_claimed(pos))
        .min_by(|a, b| {
            let da = from.distance_squared(a.as_vec3() + Vec3::splat(0.5));
            let db = from.distance_squared(b.as_vec3() + Vec3::splat(0.5));
            da.total_cmp(&db)
        })
        .copied()
}

/// Waypoint on a slowly breathing orbit around the hub. The phase
/// offset per id spreads the swarm around the ring.
pub fn orbit_waypoint(hub: Vec3, id: u32, elapsed: f64) -> Vec3 {
    let time = (elapsed * 0.1) as f32 + id as f32 * 0.137;
    let radius = 30.0 + (time * 2.0).sin() * 5.0;
    let height = (time * 0.5).sin() * 15.0;
    hub + Vec3::new(time.cos() * radius, height, time.sin() * radius)
}
