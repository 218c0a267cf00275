//! GPU meshes and the primitive generators the scenes are assembled from.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::vertex::{LineVertex, Vertex};

/// Uploaded triangle mesh.
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, vertices: &[Vertex], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh vertices"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh indices"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    /// UV sphere.
    pub fn sphere(device: &wgpu::Device, radius: f32, segments: u32, rings: u32) -> Self {
        let (vertices, indices) = sphere_data(radius, segments, rings);
        Self::new(device, &vertices, &indices)
    }

    /// Axis-aligned box centered on the origin.
    pub fn cuboid(device: &wgpu::Device, w: f32, h: f32, d: f32) -> Self {
        let (hx, hy, hz) = (w / 2.0, h / 2.0, d / 2.0);
        let faces: [([f32; 3], [Vec3; 4]); 6] = [
            (
                [0.0, 0.0, 1.0],
                [
                    Vec3::new(-hx, -hy, hz),
                    Vec3::new(hx, -hy, hz),
                    Vec3::new(hx, hy, hz),
                    Vec3::new(-hx, hy, hz),
                ],
            ),
            (
                [0.0, 0.0, -1.0],
                [
                    Vec3::new(hx, -hy, -hz),
                    Vec3::new(-hx, -hy, -hz),
                    Vec3::new(-hx, hy, -hz),
                    Vec3::new(hx, hy, -hz),
                ],
            ),
            (
                [1.0, 0.0, 0.0],
                [
                    Vec3::new(hx, -hy, hz),
                    Vec3::new(hx, -hy, -hz),
                    Vec3::new(hx, hy, -hz),
                    Vec3::new(hx, hy, hz),
                ],
            ),
            (
                [-1.0, 0.0, 0.0],
                [
                    Vec3::new(-hx, -hy, -hz),
                    Vec3::new(-hx, -hy, hz),
                    Vec3::new(-hx, hy, hz),
                    Vec3::new(-hx, hy, -hz),
                ],
            ),
            (
                [0.0, 1.0, 0.0],
                [
                    Vec3::new(-hx, hy, hz),
                    Vec3::new(hx, hy, hz),
                    Vec3::new(hx, hy, -hz),
                    Vec3::new(-hx, hy, -hz),
                ],
            ),
            (
                [0.0, -1.0, 0.0],
                [
                    Vec3::new(-hx, -hy, -hz),
                    Vec3::new(hx, -hy, -hz),
                    Vec3::new(hx, -hy, hz),
                    Vec3::new(-hx, -hy, hz),
                ],
            ),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners) in faces {
            let base = vertices.len() as u32;
            for (i, corner) in corners.iter().enumerate() {
                let uv = [(i as u32 & 1) as f32, (i as u32 >> 1) as f32];
                vertices.push(Vertex::new(corner.to_array(), normal, uv));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        Self::new(device, &vertices, &indices)
    }

    /// Capped cylinder (or cone when `top_radius` is 0) along Y.
    pub fn cylinder(
        device: &wgpu::Device,
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
        segments: u32,
    ) -> Self {
        let half = height / 2.0;
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        // Side
        for i in 0..=segments {
            let theta = 2.0 * std::f32::consts::PI * i as f32 / segments as f32;
            let (sin, cos) = theta.sin_cos();
            let slope = (bottom_radius - top_radius) / height;
            let normal = Vec3::new(cos, slope, sin).normalize();
            let u = i as f32 / segments as f32;
            vertices.push(Vertex::new(
                [cos * top_radius, half, sin * top_radius],
                normal.to_array(),
                [u, 0.0],
            ));
            vertices.push(Vertex::new(
                [cos * bottom_radius, -half, sin * bottom_radius],
                normal.to_array(),
                [u, 1.0],
            ));
        }
        for i in 0..segments {
            let base = i * 2;
            indices.extend_from_slice(&[base, base + 2, base + 1, base + 1, base + 2, base + 3]);
        }

        // Caps
        for (y, radius, normal_y) in [(half, top_radius, 1.0f32), (-half, bottom_radius, -1.0)] {
            if radius <= 0.0 {
                continue;
            }
            let center = vertices.len() as u32;
            vertices.push(Vertex::new([0.0, y, 0.0], [0.0, normal_y, 0.0], [0.5, 0.5]));
            for i in 0..=segments {
                let theta = 2.0 * std::f32::consts::PI * i as f32 / segments as f32;
                let (sin, cos) = theta.sin_cos();
                vertices.push(Vertex::new(
                    [cos * radius, y, sin * radius],
                    [0.0, normal_y, 0.0],
                    [0.5 + cos * 0.5, 0.5 + sin * 0.5],
                ));
            }
            for i in 0..segments {
                if normal_y > 0.0 {
                    indices.extend_from_slice(&[center, center + 2 + i, center + 1 + i]);
                } else {
                    indices.extend_from_slice(&[center, center + 1 + i, center + 2 + i]);
                }
            }
        }

        Self::new(device, &vertices, &indices)
    }

    /// Cone along Y (a cylinder with zero top radius).
    pub fn cone(device: &wgpu::Device, radius: f32, height: f32, segments: u32) -> Self {
        Self::cylinder(device, 0.0, radius, height, segments)
    }

    /// Torus in the XZ plane.
    pub fn torus(
        device: &wgpu::Device,
        ring_radius: f32,
        tube_radius: f32,
        ring_segments: u32,
        tube_segments: u32,
    ) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for i in 0..=ring_segments {
            let u = 2.0 * std::f32::consts::PI * i as f32 / ring_segments as f32;
            let (su, cu) = u.sin_cos();
            for j in 0..=tube_segments {
                let v = 2.0 * std::f32::consts::PI * j as f32 / tube_segments as f32;
                let (sv, cv) = v.sin_cos();
                let position = [
                    (ring_radius + tube_radius * cv) * cu,
                    tube_radius * sv,
                    (ring_radius + tube_radius * cv) * su,
                ];
                let normal = [cv * cu, sv, cv * su];
                vertices.push(Vertex::new(
                    position,
                    normal,
                    [
                        i as f32 / ring_segments as f32,
                        j as f32 / tube_segments as f32,
                    ],
                ));
            }
        }
        for i in 0..ring_segments {
            for j in 0..tube_segments {
                let current = i * (tube_segments + 1) + j;
                let next = current + tube_segments + 1;
                indices.extend_from_slice(&[
                    current,
                    next,
                    current + 1,
                    current + 1,
                    next,
                    next + 1,
                ]);
            }
        }
        Self::new(device, &vertices, &indices)
    }

    /// Flat plane in XZ, facing +Y.
    pub fn plane(device: &wgpu::Device, size: f32) -> Self {
        let half = size / 2.0;
        let vertices = [
            Vertex::new([-half, 0.0, -half], [0.0, 1.0, 0.0], [0.0, 0.0]),
            Vertex::new([half, 0.0, -half], [0.0, 1.0, 0.0], [1.0, 0.0]),
            Vertex::new([half, 0.0, half], [0.0, 1.0, 0.0], [1.0, 1.0]),
            Vertex::new([-half, 0.0, half], [0.0, 1.0, 0.0], [0.0, 1.0]),
        ];
        Self::new(device, &vertices, &[0, 2, 1, 0, 3, 2])
    }
}

fn sphere_data(radius: f32, segments: u32, rings: u32) -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();
        for segment in 0..=segments {
            let theta = 2.0 * std::f32::consts::PI * segment as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();
            let normal = Vec3::new(x, y, z).normalize_or_zero();
            vertices.push(Vertex::new(
                [x, y, z],
                normal.to_array(),
                [
                    segment as f32 / segments as f32,
                    ring as f32 / rings as f32,
                ],
            ));
        }
    }
    for ring in 0..rings {
        for segment in 0..segments {
            let current = ring * (segments + 1) + segment;
            let next = current + segments + 1;
            indices.extend_from_slice(&[current, next, current + 1, current + 1, next, next + 1]);
        }
    }
    (vertices, indices)
}

/// Uploaded line-list mesh for wire decoration (grids, helix strands,
/// connection lines).
pub struct LineMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl LineMesh {
    /// `vertices` are consumed in pairs, one segment each.
    pub fn new(device: &wgpu::Device, vertices: &[LineVertex]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("line vertices"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    /// Connect consecutive points of a polyline into segment pairs.
    pub fn polyline_vertices(points: &[Vec3], color: [f32; 4]) -> Vec<LineVertex> {
        let mut vertices = Vec::with_capacity(points.len().saturating_sub(1) * 2);
        for pair in points.windows(2) {
            vertices.push(LineVertex::new(pair[0].to_array(), color));
            vertices.push(LineVertex::new(pair[1].to_array(), color));
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_triangulation_is_complete() {
        let (vertices, indices) = sphere_data(1.0, 16, 12);
        assert_eq!(vertices.len(), 17 * 13);
        assert_eq!(indices.len() as u32, 16 * 12 * 6);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn polyline_pairs_consecutive_points() {
        let points = [
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        let vertices = LineMesh::polyline_vertices(&points, [1.0; 4]);
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[1].position, vertices[2].position);
    }
}
