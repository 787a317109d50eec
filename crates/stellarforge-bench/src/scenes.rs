/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub asteroid_radius: f32,
    pub drone_count: usize,
    pub seed: u32,
}

/// Standard suite: swarm and asteroid sizes from a handful of drones
/// on a small rock up to a large swarm stripping a large one.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "small-rock-8-drones",
            asteroid_radius: 8.0,
            drone_count: 8,
            seed: 1,
        },
        SceneConfig {
            name: "medium-rock-32-drones",
            asteroid_radius: 16.0,
            drone_count: 32,
            seed: 1,
        },
        SceneConfig {
            name: "large-rock-64-drones",
            asteroid_radius: 24.0,
            drone_count: 64,
            seed: 1,
        },
        SceneConfig {
            name: "large-rock-128-drones",
            asteroid_radius: 24.0,
            drone_count: 128,
            seed: 1,
        },
    ]
}
