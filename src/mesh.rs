use std::f32::consts::{PI, TAU};

use glam::Vec3;
use serde::Serialize;

use crate::types::Vertex;

/// Mesh kinds every scene draws from. Each is unit-sized around the origin:
/// cube/plane span [-0.5, 0.5], sphere radius 0.5, cone and cylinder have
/// radius 0.5 and height 1 centred on the origin, torus major radius 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Primitive {
    Cube,
    Sphere,
    Cone,
    Cylinder,
    Torus,
    Plane,
}

impl Primitive {
    pub const ALL: [Primitive; 6] = [
        Primitive::Cube,
        Primitive::Sphere,
        Primitive::Cone,
        Primitive::Cylinder,
        Primitive::Torus,
        Primitive::Plane,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn mesh(self) -> MeshData {
        match self {
            Primitive::Cube => cube(),
            Primitive::Sphere => sphere(24, 16),
            Primitive::Cone => cone(24),
            Primitive::Cylinder => cylinder(24),
            Primitive::Torus => torus(0.5, 0.15, 32, 12),
            Primitive::Plane => plane(),
        }
    }
}

/// CPU-side indexed triangle list
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
        (self.vertices.len() - 1) as u32
    }

    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

fn cube() -> MeshData {
    let mut mesh = MeshData::default();
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::NEG_Z, Vec3::X),
        (Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    for (normal, up, side) in faces {
        let center = normal * 0.5;
        let corners = [
            center - side * 0.5 - up * 0.5,
            center + side * 0.5 - up * 0.5,
            center + side * 0.5 + up * 0.5,
            center - side * 0.5 + up * 0.5,
        ];
        let base = mesh.vertices.len() as u32;
        for corner in corners {
            mesh.push(corner, normal);
        }
        // side x up == normal keeps the winding counter-clockwise from outside
        if side.cross(up).dot(normal) > 0.0 {
            mesh.quad(base, base + 1, base + 2, base + 3);
        } else {
            mesh.quad(base, base + 3, base + 2, base + 1);
        }
    }
    mesh
}

fn plane() -> MeshData {
    let mut mesh = MeshData::default();
    let a = mesh.push(Vec3::new(-0.5, 0.0, 0.5), Vec3::Y);
    let b = mesh.push(Vec3::new(0.5, 0.0, 0.5), Vec3::Y);
    let c = mesh.push(Vec3::new(0.5, 0.0, -0.5), Vec3::Y);
    let d = mesh.push(Vec3::new(-0.5, 0.0, -0.5), Vec3::Y);
    mesh.quad(a, b, c, d);
    mesh
}

fn sphere(segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for ring in 0..=rings {
        let phi = ring as f32 / rings as f32 * PI;
        for segment in 0..=segments {
            let theta = segment as f32 / segments as f32 * TAU;
            let normal = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            mesh.push(normal * 0.5, normal);
        }
    }

    let stride = segments + 1;
    for ring in 0..rings {
        for segment in 0..segments {
            let a = ring * stride + segment;
            let b = a + stride;
            mesh.quad(a, a + 1, b + 1, b);
        }
    }
    mesh
}

/// Side wall shared by cone and cylinder
fn lathe_wall(mesh: &mut MeshData, segments: u32, top_radius: f32, bottom_radius: f32) {
    let slope = (bottom_radius - top_radius) / 1.0;
    let base = mesh.vertices.len() as u32;
    for segment in 0..=segments {
        let theta = segment as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        let normal = Vec3::new(cos, slope, sin);
        mesh.push(Vec3::new(cos * top_radius, 0.5, sin * top_radius), normal);
        mesh.push(Vec3::new(cos * bottom_radius, -0.5, sin * bottom_radius), normal);
    }
    for segment in 0..segments {
        let top = base + segment * 2;
        let bottom = top + 1;
        mesh.quad(top, top + 2, bottom + 2, bottom);
    }
}

fn cap(mesh: &mut MeshData, segments: u32, y: f32, radius: f32) {
    let normal = if y > 0.0 { Vec3::Y } else { Vec3::NEG_Y };
    let center = mesh.push(Vec3::new(0.0, y, 0.0), normal);
    let rim = mesh.vertices.len() as u32;
    for segment in 0..=segments {
        let theta = segment as f32 / segments as f32 * TAU;
        mesh.push(Vec3::new(theta.cos() * radius, y, theta.sin() * radius), normal);
    }
    for segment in 0..segments {
        let a = rim + segment;
        if y > 0.0 {
            mesh.indices.extend_from_slice(&[center, a + 1, a]);
        } else {
            mesh.indices.extend_from_slice(&[center, a, a + 1]);
        }
    }
}

fn cone(segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    lathe_wall(&mut mesh, segments, 0.0, 0.5);
    cap(&mut mesh, segments, -0.5, 0.5);
    mesh
}

fn cylinder(segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    lathe_wall(&mut mesh, segments, 0.5, 0.5);
    cap(&mut mesh, segments, 0.5, 0.5);
    cap(&mut mesh, segments, -0.5, 0.5);
    mesh
}

/// Torus lying in the XZ plane
fn torus(major: f32, minor: f32, segments: u32, sides: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for segment in 0..=segments {
        let u = segment as f32 / segments as f32 * TAU;
        let ring_center = Vec3::new(u.cos() * major, 0.0, u.sin() * major);
        let outward = Vec3::new(u.cos(), 0.0, u.sin());
        for side in 0..=sides {
            let v = side as f32 / sides as f32 * TAU;
            let normal = outward * v.cos() + Vec3::Y * v.sin();
            mesh.push(ring_center + normal * minor, normal);
        }
    }

    let stride = sides + 1;
    for segment in 0..segments {
        for side in 0..sides {
            let a = segment * stride + side;
            let b = a + stride;
            mesh.quad(a, a + 1, b + 1, b);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_triangles() {
        assert_eq!(Primitive::Cube.mesh().triangle_count(), 12);
    }

    #[test]
    fn plane_faces_up() {
        let mesh = Primitive::Plane.mesh();
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn primitive_index_is_dense() {
        for (i, primitive) in Primitive::ALL.iter().enumerate() {
            assert_eq!(primitive.index(), i);
        }
    }
}
