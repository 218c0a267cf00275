//! Shared scene decoration: star fields, connection lines, grid floors,
//! helix strands. Geometry is generated once at mount; per-frame motion is a
//! rotation applied to the whole group.

use glam::{Quat, Vec3};
use rand::Rng;

/// Background points with positions randomized once at mount.
#[derive(Debug, Clone)]
pub struct Starfield {
    pub positions: Vec<Vec3>,
}

impl Starfield {
    /// Scatter `count` points uniformly in a cube of the given half-extent.
    pub fn generate(count: usize, half_extent: f32, rng: &mut impl Rng) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
                    (rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
                    (rng.gen::<f32>() - 0.5) * 2.0 * half_extent,
                )
            })
            .collect();
        Self { positions }
    }

    /// Slow constant drift (background stars).
    pub fn drift_rotation(t: f32) -> Quat {
        Quat::from_rotation_x(t * 0.02) * Quat::from_rotation_y(t * 0.01)
    }

    /// Gentle sway (hero particle field).
    pub fn sway_rotation(t: f32) -> Quat {
        Quat::from_rotation_x((t * 0.1).sin() * 0.1) * Quat::from_rotation_y(t * 0.05)
    }
}

/// A colored line segment in world space.
#[derive(Debug, Clone, Copy)]
pub struct LineSeg {
    pub a: Vec3,
    pub b: Vec3,
    pub color: [f32; 4],
}

/// Square grid floor as line segments around the origin in the XZ plane.
pub fn grid_lines(size: f32, divisions: u32, y: f32, color: [f32; 4]) -> Vec<LineSeg> {
    let mut lines = Vec::with_capacity(((divisions + 1) * 2) as usize);
    let half = size / 2.0;
    for i in 0..=divisions {
        let p = (i as f32 / divisions as f32) * size - half;
        lines.push(LineSeg {
            a: Vec3::new(-half, y, p),
            b: Vec3::new(half, y, p),
            color,
        });
        lines.push(LineSeg {
            a: Vec3::new(p, y, -half),
            b: Vec3::new(p, y, half),
            color,
        });
    }
    lines
}

/// Double-helix decoration: two phase-opposed strands plus cross bridges.
#[derive(Debug, Clone)]
pub struct Helix {
    pub strand_a: Vec<Vec3>,
    pub strand_b: Vec<Vec3>,
    pub bridges: Vec<(Vec3, Vec3)>,
}

impl Helix {
    pub fn generate(steps: usize, radius: f32, height: f32, turns: f32, bridges: usize) -> Self {
        let point = |frac: f32, phase: f32| {
            let angle = frac * std::f32::consts::PI * 2.0 * turns + phase;
            Vec3::new(
                angle.cos() * radius,
                frac * height - height / 2.0,
                angle.sin() * radius,
            )
        };
        let strand_a = (0..steps)
            .map(|i| point(i as f32 / steps as f32, 0.0))
            .collect();
        let strand_b = (0..steps)
            .map(|i| point(i as f32 / steps as f32, std::f32::consts::PI))
            .collect();
        let bridges = (0..bridges)
            .map(|i| {
                let frac = i as f32 / bridges as f32;
                (point(frac, 0.0), point(frac, std::f32::consts::PI))
            })
            .collect();
        Self {
            strand_a,
            strand_b,
            bridges,
        }
    }

    pub fn rotation(t: f32) -> Quat {
        Quat::from_rotation_y(t * 0.05)
    }
}

/// Evenly spaced points on a circle in the XY plane (the "data points" ring
/// around an active hologram).
pub fn ring_points(count: usize, radius_x: f32, radius_y: f32, z: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = (i as f32 / count as f32) * std::f32::consts::PI * 2.0;
            Vec3::new(angle.cos() * radius_x, angle.sin() * radius_y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starfield_stays_inside_extent() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = Starfield::generate(500, 50.0, &mut rng);
        assert_eq!(field.positions.len(), 500);
        for p in &field.positions {
            assert!(p.abs().max_element() <= 50.0);
        }
    }

    #[test]
    fn grid_has_one_line_pair_per_division_boundary() {
        let lines = grid_lines(40.0, 20, -4.0, [0.0, 0.8, 1.0, 0.1]);
        assert_eq!(lines.len(), 42);
        for line in &lines {
            assert_eq!(line.a.y, -4.0);
            assert_eq!(line.b.y, -4.0);
        }
    }

    #[test]
    fn helix_strands_are_phase_opposed() {
        let helix = Helix::generate(80, 1.5, 12.0, 1.5, 15);
        assert_eq!(helix.strand_a.len(), 80);
        assert_eq!(helix.strand_b.len(), 80);
        assert_eq!(helix.bridges.len(), 15);
        // Opposite phase: first points mirror through the axis.
        let a = helix.strand_a[0];
        let b = helix.strand_b[0];
        assert!((a.x + b.x).abs() < 1e-4);
        assert!((a.z + b.z).abs() < 1e-4);
    }

    #[test]
    fn ring_points_are_centered() {
        let points = ring_points(8, 2.5, 1.5, 0.5);
        let centroid: Vec3 = points.iter().copied().sum::<Vec3>() / 8.0;
        assert!(centroid.length() < 1.0);
    }
}
