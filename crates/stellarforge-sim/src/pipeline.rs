//! Single public struct owning the drone swarm and the tick driver.
//!
//! Pass order within a tick is fixed: brain, movement, interaction,
//! then energy accrual. The brain sees last tick's world, movement
//! flies the assignments, interaction mutates the world, and energy
//! integrates the rate those interactions just changed.

use glam::Vec3;
use stellarforge_core::registry::BlockRegistry;
use stellarforge_world::World;

use crate::config::SimConfig;
use crate::drone::Drone;
use crate::economy::Ledger;
use crate::events::EventQueue;
use crate::passes::{brain, interact, movement};

pub struct SimPipeline {
    drones: Vec<Drone>,
    config: SimConfig,
    rng: fastrand::Rng,
    elapsed: f64,
    tick: u64,
    next_drone_id: u32,
    energy_accumulator: f64,
    target_population: usize,
}

impl SimPipeline {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            drones: Vec::new(),
            config,
            rng: fastrand::Rng::with_seed(seed),
            elapsed: 0.0,
            tick: 0,
            next_drone_id: 0,
            energy_accumulator: 0.0,
            target_population: 0,
        }
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Desired swarm size. Missing drones spawn near the hub on the
    /// next tick; excess drones are retired newest-first. Retired
    /// drones hold no world state, so their claims simply vanish from
    /// the next reservation rebuild.
    pub fn set_target_population(&mut self, count: usize) {
        self.target_population = count;
    }

    /// Purchase one drone at the ledger's current price. On success
    /// the drone spawns immediately and the price escalates.
    pub fn try_buy_drone(&mut self, ledger: &mut Ledger) -> bool {
        if !ledger.buy_drone() {
            return false;
        }
        self.spawn_drone();
        self.target_population = self.target_population.max(self.drones.len());
        true
    }

    /// Advance the simulation by `dt` seconds.
    pub fn advance(
        &mut self,
        dt: f32,
        world: &mut World,
        registry: &BlockRegistry,
        ledger: &mut Ledger,
        events: &mut EventQueue,
    ) {
        self.sync_population();

        brain::run(
            &mut self.drones,
            world,
            registry,
            ledger,
            &self.config,
            self.elapsed,
        );
        movement::run(&mut self.drones, &self.config, dt);
        interact::run(
            &mut self.drones,
            world,
            registry,
            ledger,
            events,
            &self.config,
            &mut self.rng,
            dt,
        );

        // Passive income lands in whole-second chunks so the displayed
        // balance ticks instead of creeping.
        self.energy_accumulator += dt as f64;
        while self.energy_accumulator >= 1.0 {
            self.energy_accumulator -= 1.0;
            ledger.add_energy(ledger.energy_rate());
        }

        self.elapsed += dt as f64;
        self.tick += 1;
    }

    fn sync_population(&mut self) {
        while self.drones.len() < self.target_population {
            self.spawn_drone();
        }
        if self.drones.len() > self.target_population {
            self.drones.truncate(self.target_population);
        }
    }

    fn spawn_drone(&mut self) {
        let jitter = self.config.hub_jitter;
        let offset = Vec3::new(
            (self.rng.f32() * 2.0 - 1.0) * jitter.x,
            (self.rng.f32() * 2.0 - 1.0) * jitter.y,
            (self.rng.f32() * 2.0 - 1.0) * jitter.z,
        );
        let position = self.config.hub_position + offset;
        let drone = Drone::new(self.next_drone_id, position);
        log::debug!("spawned drone {} at {}", drone.id, drone.position);
        self.next_drone_id += 1;
        self.drones.push(drone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drone::DroneTask;
    use glam::IVec3;
    use stellarforge_core::block::Block;

    fn rig() -> (SimPipeline, World, BlockRegistry, Ledger, EventQueue) {
        let config = SimConfig::default();
        let ledger = Ledger::new(config.drone_base_cost);
        (
            SimPipeline::new(config, 42),
            World::new(),
            BlockRegistry::builtin(),
            ledger,
            EventQueue::new(),
        )
    }

    #[test]
    fn test_population_syncs_up_to_target() {
        let (mut sim, mut world, registry, mut ledger, mut events) = rig();
        sim.set_target_population(5);
        sim.advance(0.1, &mut world, &registry, &mut ledger, &mut events);
        assert_eq!(sim.drones().len(), 5);

        // Ids are unique and spawn positions sit inside the jitter box.
        let jitter = sim.config().hub_jitter;
        for (i, drone) in sim.drones().iter().enumerate() {
            assert_eq!(drone.id, i as u32);
            assert!(drone.position.x.abs() <= jitter.x);
            assert!(drone.position.y.abs() <= jitter.y);
            assert!(drone.position.z.abs() <= jitter.z);
        }
    }

    #[test]
    fn test_population_shrinks_to_lowered_target() {
        let (mut sim, mut world, registry, mut ledger, mut events) = rig();
        sim.set_target_population(6);
        sim.advance(0.1, &mut world, &registry, &mut ledger, &mut events);
        assert_eq!(sim.drones().len(), 6);

        sim.set_target_population(2);
        sim.advance(0.1, &mut world, &registry, &mut ledger, &mut events);
        assert_eq!(sim.drones().len(), 2);
        assert_eq!(sim.drones()[0].id, 0);
        assert_eq!(sim.drones()[1].id, 1);
    }

    #[test]
    fn test_buying_a_drone_spawns_and_charges() {
        let (mut sim, _world, _registry, mut ledger, _events) = rig();
        ledger.add_matter(120);

        assert!(sim.try_buy_drone(&mut ledger));
        assert_eq!(sim.drones().len(), 1);
        assert_eq!(ledger.matter(), 70);
        assert_eq!(ledger.drone_cost(), 60);

        assert!(sim.try_buy_drone(&mut ledger));
        assert_eq!(ledger.matter(), 10);
        assert!(!sim.try_buy_drone(&mut ledger));
        assert_eq!(sim.drones().len(), 2);
    }

    #[test]
    fn test_idle_swarm_orbits_without_touching_world() {
        let (mut sim, mut world, registry, mut ledger, mut events) = rig();
        sim.set_target_population(3);

        for _ in 0..50 {
            sim.advance(0.1, &mut world, &registry, &mut ledger, &mut events);
        }

        assert_eq!(world.store.chunk_count(), 0);
        assert!(events.is_empty());
        for drone in sim.drones() {
            assert!(matches!(drone.task, DroneTask::Idle { orbit: Some(_) }));
        }
    }

    #[test]
    fn test_energy_accrues_per_whole_second() {
        let (mut sim, mut world, registry, mut ledger, mut events) = rig();
        ledger.raise_energy_rate(3.0);

        for _ in 0..9 {
            sim.advance(0.1, &mut world, &registry, &mut ledger, &mut events);
        }
        assert_eq!(ledger.energy(), 0.0);

        sim.advance(0.1, &mut world, &registry, &mut ledger, &mut events);
        assert!((ledger.energy() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_mine_and_deliver_full_cycle() {
        let (mut sim, mut world, registry, mut ledger, mut events) = rig();
        world.set_block(IVec3::new(3, 0, 0), Block::AsteroidCore);
        sim.set_target_population(1);

        for _ in 0..600 {
            sim.advance(0.05, &mut world, &registry, &mut ledger, &mut events);
            if ledger.matter() > 0 {
                break;
            }
        }

        assert_eq!(world.get_block(IVec3::new(3, 0, 0)), Block::Air);
        assert_eq!(ledger.matter(), 2);
        let kinds: Vec<_> = events.drain().iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&crate::events::EventKind::BlockMined));
        assert!(kinds.contains(&crate::events::EventKind::Delivered));
    }

    #[test]
    fn test_blueprint_built_end_to_end() {
        let (mut sim, mut world, registry, mut ledger, mut events) = rig();
        let cell = IVec3::new(3, 0, 0);
        world.add_blueprint(cell);
        ledger.add_matter(10);
        sim.set_target_population(1);

        for _ in 0..400 {
            sim.advance(0.05, &mut world, &registry, &mut ledger, &mut events);
            if world.get_block(cell) == Block::Frame {
                break;
            }
        }

        assert_eq!(world.get_block(cell), Block::Frame);
        assert!(!world.blueprints.contains(&cell));
        assert_eq!(ledger.matter(), 5);
    }
}
