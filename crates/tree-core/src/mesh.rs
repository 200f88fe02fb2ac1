//! Procedural geometry for the decorations and the ambient scene pieces.
//!
//! All meshes are non-indexed triangle lists with per-vertex normals, ready
//! to be uploaded as a vertex buffer.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn push_tri(&mut self, a: Vec3, b: Vec3, c: Vec3, normal: Vec3) {
        for p in [a, b, c] {
            self.vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
    }

    fn push_smooth(&mut self, points: [(Vec3, Vec3); 3]) {
        for (p, n) in points {
            self.vertices.push(Vertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
    }
}

fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Counter-clockwise leaf silhouette: two mirrored cubic curves from stem to tip.
pub fn leaf_outline(segments: usize) -> Vec<Vec2> {
    let segments = segments.max(2);
    let stem = Vec2::ZERO;
    let tip = Vec2::new(0.0, 0.6);
    let mut points = Vec::with_capacity(segments * 2);
    for i in 0..segments {
        let t = i as f32 / segments as f32;
        points.push(cubic_bezier(stem, Vec2::new(0.15, 0.1), Vec2::new(0.15, 0.4), tip, t));
    }
    for i in 0..segments {
        let t = i as f32 / segments as f32;
        points.push(cubic_bezier(tip, Vec2::new(-0.15, 0.4), Vec2::new(-0.15, 0.1), stem, t));
    }
    points
}

/// Counter-clockwise star with alternating outer and inner vertices.
pub fn star_outline(points: usize, outer: f32, inner: f32) -> Vec<Vec2> {
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = i as f32 / (points * 2) as f32 * TAU;
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

/// Extrude a counter-clockwise outline from `z = 0` to `z = depth`.
///
/// Caps are fanned from the outline's centroid, so the outline must be
/// star-shaped with respect to it.
pub fn extrude(outline: &[Vec2], depth: f32) -> Mesh {
    let mut mesh = Mesh::default();
    let n = outline.len();
    if n < 3 {
        return mesh;
    }
    let centroid = outline.iter().copied().sum::<Vec2>() / n as f32;
    let at = |p: Vec2, z: f32| Vec3::new(p.x, p.y, z);

    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        mesh.push_tri(at(centroid, depth), at(a, depth), at(b, depth), Vec3::Z);
        mesh.push_tri(at(centroid, 0.0), at(b, 0.0), at(a, 0.0), Vec3::NEG_Z);

        let edge = b - a;
        let outward = Vec3::new(edge.y, -edge.x, 0.0).normalize_or_zero();
        mesh.push_tri(at(a, 0.0), at(b, 0.0), at(b, depth), outward);
        mesh.push_tri(at(a, 0.0), at(b, depth), at(a, depth), outward);
    }
    mesh
}

pub fn leaf() -> Mesh {
    extrude(&leaf_outline(8), 0.01)
}

pub fn star() -> Mesh {
    extrude(&star_outline(5, 1.2, 0.5), 0.4)
}

/// UV sphere centred on the origin.
pub fn sphere(radius: f32, segments: usize, rings: usize) -> Mesh {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let point = |ring: usize, seg: usize| {
        let phi = ring as f32 / rings as f32 * PI;
        let theta = seg as f32 / segments as f32 * TAU;
        let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
        (n * radius, n)
    };
    let mut mesh = Mesh::default();
    for ring in 0..rings {
        for seg in 0..segments {
            let p00 = point(ring, seg);
            let p01 = point(ring, seg + 1);
            let p10 = point(ring + 1, seg);
            let p11 = point(ring + 1, seg + 1);
            if ring != 0 {
                mesh.push_smooth([p00, p01, p10]);
            }
            if ring != rings - 1 {
                mesh.push_smooth([p01, p11, p10]);
            }
        }
    }
    mesh
}

/// Axis-aligned cube of edge `size` centred on the origin.
pub fn cube(size: f32) -> Mesh {
    let h = size / 2.0;
    let mut mesh = Mesh::default();
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        for sign in [1.0, -1.0] {
            let n = axis * sign;
            // Two tangents forming a right-handed basis with the face normal
            let u = n.any_orthonormal_vector();
            let v = n.cross(u);
            let c = n * h;
            let (a, b, cc, d) = (
                c + (-u - v) * h,
                c + (u - v) * h,
                c + (u + v) * h,
                c + (-u + v) * h,
            );
            mesh.push_tri(a, b, cc, n);
            mesh.push_tri(a, cc, d, n);
        }
    }
    mesh
}

/// Square in the XZ plane facing +Y.
pub fn plane(size: f32) -> Mesh {
    let h = size / 2.0;
    let mut mesh = Mesh::default();
    let (a, b, c, d) = (
        Vec3::new(-h, 0.0, h),
        Vec3::new(h, 0.0, h),
        Vec3::new(h, 0.0, -h),
        Vec3::new(-h, 0.0, -h),
    );
    mesh.push_tri(a, b, c, Vec3::Y);
    mesh.push_tri(a, c, d, Vec3::Y);
    mesh
}

/// Eight-faced mote used for stars and sparkles.
pub fn octahedron(radius: f32) -> Mesh {
    let mut mesh = Mesh::default();
    let tips = [Vec3::Y, Vec3::NEG_Y];
    let ring = [Vec3::X, Vec3::Z, Vec3::NEG_X, Vec3::NEG_Z];
    for tip in tips {
        for i in 0..4 {
            let (a, b) = (ring[i], ring[(i + 1) % 4]);
            let (a, b) = if tip.y > 0.0 { (b, a) } else { (a, b) };
            let n = (a + b + tip).normalize();
            mesh.push_tri(tip * radius, a * radius, b * radius, n);
        }
    }
    mesh
}
