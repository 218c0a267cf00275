//! Ray picking against node spheres.

use glam::Vec3;

/// A world-space ray, usually built from the camera through the cursor.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction.
    pub dir: Vec3,
}

impl Ray {
    /// Distance along the ray to the first intersection with a sphere, if
    /// any. Hits behind the origin are rejected.
    pub fn sphere_hit(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_center = center - self.origin;
        let proj = to_center.dot(self.dir);
        let perp_sq = to_center.length_squared() - proj * proj;
        let radius_sq = radius * radius;
        if perp_sq > radius_sq {
            return None;
        }
        let half_chord = (radius_sq - perp_sq).sqrt();
        let near = proj - half_chord;
        let far = proj + half_chord;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            // Origin inside the sphere.
            Some(0.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_on_hit_reports_near_surface() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let t = ray.sphere_hit(Vec3::new(0.0, 0.0, -10.0), 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-4);
    }

    #[test]
    fn grazing_miss_is_none() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        assert!(ray.sphere_hit(Vec3::new(3.0, 0.0, -10.0), 2.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_rejected() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        assert!(ray.sphere_hit(Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_hits_at_zero() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        assert_eq!(ray.sphere_hit(Vec3::ZERO, 1.0), Some(0.0));
    }
}
