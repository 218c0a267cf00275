//! Orbit camera: drag to rotate around a target, scroll to zoom within
//! per-scene bounds, optional auto-rotate and panning.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Per-scene camera setup. Mirrors each section's viewport configuration:
/// pose, zoom bounds, pitch clamps, auto-rotate, pan.
#[derive(Debug, Clone, Copy)]
pub struct OrbitConfig {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov_degrees: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pitch clamp in radians (symmetric bounds derived from each scene's
    /// polar limits).
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub auto_rotate: bool,
    /// Auto-rotate rate in radians per second.
    pub auto_rotate_speed: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 12.0,
            yaw: 0.0,
            pitch: 0.0,
            fov_degrees: 75.0,
            min_distance: 2.0,
            max_distance: 50.0,
            min_pitch: -std::f32::consts::FRAC_PI_2 + 0.05,
            max_pitch: std::f32::consts::FRAC_PI_2 - 0.05,
            auto_rotate: false,
            auto_rotate_speed: 0.0,
            enable_zoom: true,
            enable_pan: false,
        }
    }
}

/// Camera orbiting a target point.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    config: OrbitConfig,
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl OrbitCamera {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            config,
            target: config.target,
            distance: config.distance,
            yaw: config.yaw,
            pitch: config.pitch,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 500.0,
        }
    }

    /// Restore the initial pose (the "Reset View" control).
    pub fn reset(&mut self) {
        self.target = self.config.target;
        self.distance = self.config.distance;
        self.yaw = self.config.yaw;
        self.pitch = self.config.pitch;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Apply a pointer drag in pixels.
    pub fn process_drag(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch + delta.y * sensitivity)
            .clamp(self.config.min_pitch, self.config.max_pitch);
    }

    /// Apply scroll-wheel zoom steps (positive = zoom in).
    pub fn process_scroll(&mut self, steps: f32) {
        if !self.config.enable_zoom {
            return;
        }
        let factor = 1.0 - steps * 0.1;
        self.distance = (self.distance * factor)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Pan the target in the view plane, when the scene allows it.
    pub fn process_pan(&mut self, delta: Vec2) {
        if !self.config.enable_pan {
            return;
        }
        let scale = self.distance * 0.002;
        let right = self.right();
        let up = Vec3::Y;
        self.target += right * -delta.x * scale + up * delta.y * scale;
    }

    /// Advance auto-rotation.
    pub fn update(&mut self, dt: f32) {
        if self.config.auto_rotate {
            self.yaw += self.config.auto_rotate_speed * dt;
        }
    }

    pub fn position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn right(&self) -> Vec3 {
        let forward = (self.target - self.position()).normalize_or_zero();
        forward.cross(Vec3::Y).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a cursor position, for picking. Returns
    /// (origin, normalized direction).
    pub fn cursor_ray(&self, cursor: Vec2, screen: Vec2) -> (Vec3, Vec3) {
        let ndc = Vec2::new(
            (cursor.x / screen.x.max(1.0)) * 2.0 - 1.0,
            1.0 - (cursor.y / screen.y.max(1.0)) * 2.0,
        );
        let inv = self.view_projection_matrix().inverse();
        let near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;
        (near, (far - near).normalize_or_zero())
    }
}

/// Camera uniform data for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 4],
        }
    }
}

impl CameraUniform {
    pub fn update(&mut self, camera: &OrbitCamera) {
        self.view_proj = camera.view_projection_matrix().to_cols_array_2d();
        let pos = camera.position();
        self.position = [pos.x, pos.y, pos.z, 1.0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(OrbitConfig {
            distance: 12.0,
            min_distance: 8.0,
            max_distance: 20.0,
            ..Default::default()
        })
    }

    #[test]
    fn zoom_respects_bounds() {
        let mut cam = camera();
        for _ in 0..100 {
            cam.process_scroll(1.0);
        }
        assert!((cam.distance() - 8.0).abs() < 1e-4);
        for _ in 0..100 {
            cam.process_scroll(-1.0);
        }
        assert!((cam.distance() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = camera();
        cam.process_drag(Vec2::new(0.0, 1e6), 0.005);
        assert!(cam.position().is_finite());
        let max = std::f32::consts::FRAC_PI_2;
        assert!(cam.position().y.abs() <= 20.0 * max.sin() + 1e-3);
    }

    #[test]
    fn reset_restores_initial_pose() {
        let mut cam = camera();
        cam.process_drag(Vec2::new(300.0, 100.0), 0.005);
        cam.process_scroll(3.0);
        cam.reset();
        assert!((cam.distance() - 12.0).abs() < 1e-6);
    }

    #[test]
    fn cursor_ray_points_from_camera_into_scene() {
        let mut cam = camera();
        cam.set_aspect(1280, 720);
        let (origin, dir) = cam.cursor_ray(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0));
        // Center-screen ray heads toward the orbit target.
        let to_target = (cam.target() - origin).normalize();
        assert!(dir.dot(to_target) > 0.99);
    }

    #[test]
    fn disabled_zoom_ignores_scroll() {
        let mut cam = OrbitCamera::new(OrbitConfig {
            enable_zoom: false,
            ..Default::default()
        });
        let before = cam.distance();
        cam.process_scroll(5.0);
        assert_eq!(cam.distance(), before);
    }
}
