use serde::{Deserialize, Serialize};

use crate::collision::CollisionSettings;
use crate::core::{SimError, SimResult};
use crate::rigid_body::{Rgba, Vec2};

use super::QuitPolicy;

/// Largest scene accepted. The contact pass is O(n²) per frame.
pub const MAX_BODIES: u32 = 4096;

/// How the initial bodies are laid out.
///
/// Body `i` starts at `position` with velocity `base_velocity + velocity_step * i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTemplate {
    pub count: u32,
    pub position: Vec2,
    pub base_velocity: Vec2,
    pub velocity_step: Vec2,
    pub acceleration: Vec2,
    pub width: f32,
    pub height: f32,
}

impl SpawnTemplate {
    pub(crate) fn check_count(&self) -> SimResult<()> {
        if self.count > MAX_BODIES {
            return Err(SimError::invalid_config(format!(
                "spawn.count {} exceeds the limit of {MAX_BODIES}",
                self.count
            )));
        }
        Ok(())
    }
}

impl Default for SpawnTemplate {
    fn default() -> Self {
        Self {
            count: 5,
            position: Vec2::new(0.0, 300.0),
            base_velocity: Vec2::new(100.0, -300.0),
            velocity_step: Vec2::new(50.0, 0.0),
            acceleration: Vec2::new(0.0, 200.0),
            width: 50.0,
            height: 75.0,
        }
    }
}

/// Everything needed to build and drive a scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Viewport size handed to the renderer; bodies are not confined to it
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Clear colour for the renderer
    pub background: Rgba,
    pub spawn: SpawnTemplate,
    pub collision: CollisionSettings,
    pub quit_policy: QuitPolicy,
    /// Time integrate/collide phases (adds timer overhead)
    pub perf_metrics: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: 720,
            viewport_height: 480,
            background: Rgba::new(0, 75, 0, 255),
            spawn: SpawnTemplate::default(),
            collision: CollisionSettings::default(),
            quit_policy: QuitPolicy::default(),
            perf_metrics: false,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(SimError::invalid_config(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }

        let spawn = &self.spawn;
        spawn.check_count()?;
        if !(spawn.width.is_finite() && spawn.height.is_finite() && spawn.width > 0.0 && spawn.height > 0.0) {
            return Err(SimError::DegenerateBody { width: spawn.width, height: spawn.height });
        }
        for (name, v) in [
            ("spawn.position", spawn.position),
            ("spawn.base_velocity", spawn.base_velocity),
            ("spawn.velocity_step", spawn.velocity_step),
            ("spawn.acceleration", spawn.acceleration),
        ] {
            if !v.is_finite() {
                return Err(SimError::invalid_config(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}
