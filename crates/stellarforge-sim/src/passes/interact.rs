//! Work resolution pass.
//!
//! Runs after movement. Drones within arrival range of their target
//! perform their task: construction swaps the target block and debits
//! the ledger, mining accrues progress and extracts, returning drones
//! bank their cargo. A target that changed under the drone since
//! assignment is abandoned without side effects.

use glam::Vec3;
use stellarforge_core::block::Block;
use stellarforge_core::constants::MINING_COMPLETE;
use stellarforge_core::registry::BlockRegistry;
use stellarforge_core::types::WorldCoord;
use stellarforge_world::World;

use crate::config::SimConfig;
use crate::drone::{Drone, DroneTask};
use crate::economy::Ledger;
use crate::events::{EventKind, EventQueue};

/// Per-tick chance of a cosmetic spark while a drone chews on a block.
const SPARK_CHANCE: f32 = 0.3;

pub fn run(
    drones: &mut [Drone],
    world: &mut World,
    registry: &BlockRegistry,
    ledger: &mut Ledger,
    events: &mut EventQueue,
    config: &SimConfig,
    rng: &mut fastrand::Rng,
    dt: f32,
) {
    for drone in drones.iter_mut() {
        let Some(destination) = drone.task.destination() else {
            continue;
        };
        if drone.position.distance(destination) > config.arrival_radius {
            continue;
        }

        match drone.task.clone() {
            DroneTask::Building { expect, target } => {
                build(drone, expect, target, world, registry, ledger, events, config);
            }
            DroneTask::Mining { block, target, .. } => {
                mine(
                    drone, block, target, world, registry, ledger, events, config, rng, dt,
                );
            }
            DroneTask::Returning { carrying, target } => {
                ledger.credit_delivery(carrying);
                events.push(EventKind::Delivered, target, registry.color(carrying));
                drone.settle_into(DroneTask::Idle { orbit: None });
            }
            DroneTask::Idle { .. } => {}
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build(
    drone: &mut Drone,
    expect: Block,
    target: WorldCoord,
    world: &mut World,
    registry: &BlockRegistry,
    ledger: &mut Ledger,
    events: &mut EventQueue,
    config: &SimConfig,
) {
    // The world may have changed since assignment. A mismatched or
    // underfunded build is abandoned with no side effects; the brain
    // will hand out fresh work next tick.
    if world.get_block(target) != expect {
        drone.settle_into(DroneTask::Idle { orbit: None });
        return;
    }

    let placed = match expect {
        Block::BlueprintFrame => {
            if ledger.consume_matter(config.frame_cost) {
                world.remove_blueprint(target);
                world.set_block(target, Block::Frame);
                Some(Block::Frame)
            } else {
                None
            }
        }
        Block::Frame => {
            if ledger.consume_matter(config.frame_cost) {
                world.set_block(target, Block::Panel);
                ledger.raise_energy_rate(1.0);
                Some(Block::Panel)
            } else {
                None
            }
        }
        Block::Panel => {
            if ledger.consume_rare_matter(config.shell_cost) {
                world.set_block(target, Block::Shell);
                ledger.raise_energy_rate(5.0);
                Some(Block::Shell)
            } else {
                None
            }
        }
        _ => None,
    };

    if let Some(block) = placed {
        let center = target.as_vec3() + Vec3::splat(0.5);
        events.push(EventKind::BlockPlaced, center, registry.color(block));
        log::trace!("drone {} built {:?} at {}", drone.id, block, target);
    }
    drone.settle_into(DroneTask::Idle { orbit: None });
}

#[allow(clippy::too_many_arguments)]
fn mine(
    drone: &mut Drone,
    block: Block,
    target: WorldCoord,
    world: &mut World,
    registry: &BlockRegistry,
    ledger: &Ledger,
    events: &mut EventQueue,
    config: &SimConfig,
    rng: &mut fastrand::Rng,
    dt: f32,
) {
    if world.get_block(target) != block || !registry.is_minable(block) {
        drone.settle_into(DroneTask::Idle { orbit: None });
        return;
    }

    let rate = config.mining_rate * (1.0 + 0.5 * ledger.prestige_level() as f32);
    let center = target.as_vec3() + Vec3::splat(0.5);

    if rng.f32() < SPARK_CHANCE {
        events.push(EventKind::MiningSpark, center, registry.color(block));
    }

    let DroneTask::Mining { progress, .. } = &mut drone.task else {
        return;
    };
    *progress += rate * dt;

    if *progress >= MINING_COMPLETE {
        world.set_block(target, Block::Air);
        events.push(EventKind::BlockMined, center, registry.color(block));
        log::trace!("drone {} extracted {:?} at {}", drone.id, block, target);

        let jitter = config.hub_jitter;
        let offset = Vec3::new(
            (rng.f32() * 2.0 - 1.0) * jitter.x,
            (rng.f32() * 2.0 - 1.0) * jitter.y,
            (rng.f32() * 2.0 - 1.0) * jitter.z,
        );
        drone.settle_into(DroneTask::Returning {
            carrying: block,
            target: config.hub_position + offset,
        });
    }
}
