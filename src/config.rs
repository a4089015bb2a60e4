use std::time::Duration;

use eframe::egui::{Vec2, vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas-space point nodes are seeded around and pulled toward.
    pub center: [f32; 2],
    pub seed: SeedConfig,
    pub physics: PhysicsConfig,
    pub schedule: ScheduleConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center: [160.0, 160.0],
            seed: SeedConfig::default(),
            physics: PhysicsConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl LayoutConfig {
    pub fn center(&self) -> Vec2 {
        vec2(self.center[0], self.center[1])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    pub rng_seed: u64,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: 0x00d2_ea3f,
            min_radius: 30.0,
            max_radius: 120.0,
        }
    }
}

impl SeedConfig {
    /// Annulus radii, ordered and non-negative.
    pub fn radius_range(&self) -> (f32, f32) {
        let min = self.min_radius.max(0.0);
        let max = self.max_radius.max(0.0);
        if min <= max { (min, max) } else { (max, min) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub repulsion_constant: f32,
    pub spring_constant: f32,
    pub rest_length: f32,
    pub centering_constant: f32,
    pub friction: f32,
    /// Optional cap on speed after damping. Unset leaves the integration
    /// uncapped.
    pub max_speed: Option<f32>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            repulsion_constant: 3000.0,
            spring_constant: 0.02,
            rest_length: 80.0,
            centering_constant: 0.005,
            friction: 0.85,
            max_speed: None,
        }
    }
}

impl PhysicsConfig {
    pub fn friction(&self) -> f32 {
        self.friction.clamp(0.0, 0.999)
    }

    pub fn max_speed(&self) -> Option<f32> {
        self.max_speed.map(|speed| speed.max(0.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub settle_tick_count: u32,
    pub settle_interval_secs: f64,
    pub idle_interval_secs: f64,
    pub max_catch_up_ticks: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            settle_tick_count: 120,
            settle_interval_secs: 1.0 / 60.0,
            idle_interval_secs: 1.0 / 10.0,
            max_catch_up_ticks: 8,
        }
    }
}

const MIN_INTERVAL: Duration = Duration::from_millis(1);
const MAX_INTERVAL_SECS: f64 = 3600.0;

fn interval_from_secs(secs: f64) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::from_secs_f64(secs.min(MAX_INTERVAL_SECS)).max(MIN_INTERVAL)
    } else {
        MIN_INTERVAL
    }
}

impl ScheduleConfig {
    pub fn settle_interval(&self) -> Duration {
        interval_from_secs(self.settle_interval_secs)
    }

    pub fn idle_interval(&self) -> Duration {
        interval_from_secs(self.idle_interval_secs)
    }

    pub fn max_catch_up_ticks(&self) -> u32 {
        self.max_catch_up_ticks.max(1)
    }
}
