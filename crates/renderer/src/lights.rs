//! Scene lighting constants. Each section declares its ambient level and up
//! to four point lights; spot lights from the source material are folded
//! into point lights since the shading is deliberately simple.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

pub const MAX_LIGHTS: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Fixed lighting rig of one scene.
#[derive(Debug, Clone)]
pub struct SceneLights {
    pub ambient: [f32; 3],
    pub ambient_intensity: f32,
    pub lights: Vec<PointLight>,
}

impl SceneLights {
    pub fn new(ambient_intensity: f32) -> Self {
        Self {
            ambient: [1.0, 1.0, 1.0],
            ambient_intensity,
            lights: Vec::new(),
        }
    }

    pub fn with_light(mut self, position: Vec3, color: [f32; 3], intensity: f32) -> Self {
        if self.lights.len() < MAX_LIGHTS {
            self.lights.push(PointLight {
                position,
                color,
                intensity,
            });
        } else {
            log::warn!("ignoring light beyond the {MAX_LIGHTS}-light rig");
        }
        self
    }

    pub fn to_uniform(&self) -> LightsUniform {
        let mut uniform = LightsUniform {
            ambient: [
                self.ambient[0] * self.ambient_intensity,
                self.ambient[1] * self.ambient_intensity,
                self.ambient[2] * self.ambient_intensity,
                self.lights.len() as f32,
            ],
            positions: [[0.0; 4]; MAX_LIGHTS],
            colors: [[0.0; 4]; MAX_LIGHTS],
        };
        for (i, light) in self.lights.iter().take(MAX_LIGHTS).enumerate() {
            uniform.positions[i] = [
                light.position.x,
                light.position.y,
                light.position.z,
                light.intensity,
            ];
            uniform.colors[i] = [light.color[0], light.color[1], light.color[2], 0.0];
        }
        uniform
    }
}

/// Must match scene.wgsl `Lights`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightsUniform {
    /// rgb = ambient * intensity, w = active light count.
    pub ambient: [f32; 4],
    /// xyz = position, w = intensity.
    pub positions: [[f32; 4]; MAX_LIGHTS],
    pub colors: [[f32; 4]; MAX_LIGHTS],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_records_light_count() {
        let lights = SceneLights::new(0.3)
            .with_light(Vec3::new(10.0, 10.0, 10.0), [1.0, 0.9, 0.5], 1.2)
            .with_light(Vec3::new(-10.0, -10.0, -10.0), [0.0, 0.8, 1.0], 0.8);
        let uniform = lights.to_uniform();
        assert_eq!(uniform.ambient[3], 2.0);
        assert_eq!(uniform.positions[0][3], 1.2);
    }

    #[test]
    fn extra_lights_are_dropped_not_panicked() {
        let mut lights = SceneLights::new(0.2);
        for i in 0..6 {
            lights = lights.with_light(Vec3::splat(i as f32), [1.0; 3], 1.0);
        }
        assert_eq!(lights.lights.len(), MAX_LIGHTS);
    }
}
