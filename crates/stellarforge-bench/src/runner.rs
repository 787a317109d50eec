use std::time::Instant;

use glam::IVec3;
use stellarforge_core::registry::BlockRegistry;
use stellarforge_mesh::MeshCache;
use stellarforge_sim::{EventQueue, Ledger, SimConfig, SimPipeline};
use stellarforge_world::World;

use crate::scenes::SceneConfig;

/// Fixed timestep for benchmark ticks.
const TICK_DT: f32 = 1.0 / 60.0;

/// Chunk the asteroid is centered on, far enough from the hub that
/// drones spend real time in transit.
const ASTEROID_CENTER: IVec3 = IVec3::new(3, 0, 0);

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub active_voxels: u32,
    pub chunk_count: u32,
    pub drone_count: u32,
    pub tick_count: u32,
    pub chunks_remeshed: u32,
    pub tick_timings: TimingSeries,
    pub mesh_timings: TimingSeries,
}

/// Runs headless simulation benchmarks: no renderer, just the tick
/// pipeline plus dirty-chunk remeshing every tick.
pub struct BenchmarkRunner {
    tick_count: u32,
}

impl BenchmarkRunner {
    pub fn new(tick_count: u32) -> Self {
        Self { tick_count }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, config: &SceneConfig) -> BenchmarkResult {
        log::info!(
            "Running scene '{}' (radius {}, {} drones)...",
            config.name,
            config.asteroid_radius,
            config.drone_count
        );

        let registry = BlockRegistry::builtin();
        let mut world = World::new();
        world.generate_asteroid(config.seed, ASTEROID_CENTER, config.asteroid_radius);

        let sim_config = SimConfig::default();
        let mut ledger = Ledger::new(sim_config.drone_base_cost);
        let mut events = EventQueue::new();
        let mut sim = SimPipeline::new(sim_config, config.seed as u64);
        sim.set_target_population(config.drone_count);

        // Initial mesh build is warmup, not part of the timed loop.
        let mut cache = MeshCache::new();
        cache.remesh_dirty(&mut world.store, &registry);

        let active_voxels = count_active_voxels(&world);
        log::info!(
            "  Populated {} voxels across {} chunks",
            active_voxels,
            world.store.chunk_count()
        );

        let mut tick_times = Vec::with_capacity(self.tick_count as usize);
        let mut mesh_times = Vec::with_capacity(self.tick_count as usize);
        let mut chunks_remeshed = 0u32;

        for _ in 0..self.tick_count {
            let tick_start = Instant::now();
            sim.advance(TICK_DT, &mut world, &registry, &mut ledger, &mut events);

            let mesh_start = Instant::now();
            chunks_remeshed += cache.remesh_dirty(&mut world.store, &registry) as u32;
            mesh_times.push(mesh_start.elapsed().as_secs_f64() * 1000.0);

            tick_times.push(tick_start.elapsed().as_secs_f64() * 1000.0);
            events.drain();
        }

        log::info!(
            "  {} ticks, {} chunks remeshed, {} matter banked",
            self.tick_count,
            chunks_remeshed,
            ledger.matter()
        );

        BenchmarkResult {
            scene_name: config.name.to_string(),
            active_voxels,
            chunk_count: world.store.chunk_count() as u32,
            drone_count: config.drone_count as u32,
            tick_count: self.tick_count,
            chunks_remeshed,
            tick_timings: compute_timings(&tick_times),
            mesh_timings: compute_timings(&mesh_times),
        }
    }
}

fn count_active_voxels(world: &World) -> u32 {
    let mut count = 0u32;
    for coord in world.store.chunk_coords_sorted() {
        if let Some(chunk) = world.store.get_chunk(&coord) {
            count += chunk.as_slice().iter().filter(|b| !b.is_air()).count() as u32;
        }
    }
    count
}

fn compute_timings(samples: &[f64]) -> TimingSeries {
    if samples.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let percentile = |p: f64| {
        let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
        sorted[idx]
    };

    TimingSeries {
        mean_ms: sorted.iter().sum::<f64>() / sorted.len() as f64,
        median_ms: percentile(0.5),
        p95_ms: percentile(0.95),
        p99_ms: percentile(0.99),
        min_ms: sorted[0],
        max_ms: sorted[sorted.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_percentiles() {
        let samples: Vec<f64> = (1..=100).map(|i| i as f64).collect();
        let t = compute_timings(&samples);
        assert!((t.mean_ms - 50.5).abs() < 1e-9);
        assert_eq!(t.min_ms, 1.0);
        assert_eq!(t.max_ms, 100.0);
        assert_eq!(t.p95_ms, 95.0);
    }

    #[test]
    fn test_scene_runs_headless() {
        let runner = BenchmarkRunner::new(5);
        let config = SceneConfig {
            name: "test",
            asteroid_radius: 4.0,
            drone_count: 2,
            seed: 9,
        };
        let result = runner.run_scene(&config);
        assert_eq!(result.tick_count, 5);
        assert!(result.active_voxels > 0);
        assert!(result.chunk_count > 0);
        assert_eq!(result.drone_count, 2);
    }
}
