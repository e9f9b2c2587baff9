//! CPU-side mesh generation for the scene primitives.
//!
//! The same `MeshData` feeds the GPU vertex/index buffers and the ray caster,
//! so a picked triangle is always the triangle that was drawn. Generators
//! follow the usual parametric layouts: indexed grids for spheres and torus
//! knots, per-face vertices for the flat-shaded box and icosahedron.

use fnv::FnvHashSet;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Shape parameters; the factory stores these next to the generated mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Cube {
        size: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
    Icosahedron {
        radius: f32,
        detail: u32,
    },
}

impl Geometry {
    pub fn build(&self) -> MeshData {
        match *self {
            Geometry::Cube { size } => cube(size),
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => uv_sphere(radius, width_segments, height_segments),
            Geometry::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
            Geometry::Icosahedron { radius, detail } => icosahedron(radius, detail),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as vertex positions.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                Vec3::from(self.vertices[tri[0] as usize].position),
                Vec3::from(self.vertices[tri[1] as usize].position),
                Vec3::from(self.vertices[tri[2] as usize].position),
            ]
        })
    }

    /// Largest distance of any vertex from the local origin.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| Vec3::from(v.position).length())
            .fold(0.0, f32::max)
    }

    /// Line-list indices for wireframe drawing, one entry per unique edge.
    ///
    /// Edges are keyed by position rather than index so the seams of
    /// per-face meshes do not produce doubled lines.
    pub fn edge_indices(&self) -> Vec<u32> {
        let key = |i: u32| {
            let p = self.vertices[i as usize].position;
            [
                (p[0] * 1e4).round() as i32,
                (p[1] * 1e4).round() as i32,
                (p[2] * 1e4).round() as i32,
            ]
        };
        let mut seen: FnvHashSet<([i32; 3], [i32; 3])> = FnvHashSet::default();
        let mut out = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let (ka, kb) = (key(a), key(b));
                if ka == kb {
                    continue;
                }
                let edge = if ka < kb { (ka, kb) } else { (kb, ka) };
                if seen.insert(edge) {
                    out.push(a);
                    out.push(b);
                }
            }
        }
        out
    }

    fn push_flat_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let n = (b - a).cross(c - a).normalize_or_zero();
        let base = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(a, n));
        self.vertices.push(Vertex::new(b, n));
        self.vertices.push(Vertex::new(c, n));
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}

pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    // (normal, u axis, v axis) per face; corners are n*h +/- u*h +/- v*h
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n + u * su + v * sv) * h;
            mesh.vertices.push(Vertex::new(p, n));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let dir = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.vertices.push(Vertex::new(dir * radius, dir));
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

fn torus_knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let ts = tubular_segments.max(3);
    let rs = radial_segments.max(3);
    let (pf, qf) = (p.max(1) as f32, q as f32);
    let mut mesh = MeshData::default();
    for i in 0..=ts {
        let u = i as f32 / ts as f32 * pf * TAU;
        let p1 = torus_knot_curve(u, pf, qf, radius);
        let p2 = torus_knot_curve(u + 0.01, pf, qf, radius);
        let t = p2 - p1;
        let n0 = p2 + p1;
        let b = t.cross(n0).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();
        for j in 0..=rs {
            let v = j as f32 / rs as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.vertices
                .push(Vertex::new(pos, (pos - p1).normalize_or_zero()));
        }
    }
    let row = rs + 1;
    for j in 1..=ts {
        for i in 1..=rs {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Flat-shaded icosphere; `detail` splits each face edge into `detail + 1`
/// segments before projecting back onto the sphere.
pub fn icosahedron(radius: f32, detail: u32) -> MeshData {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let n = detail + 1;
    let mut mesh = MeshData::default();
    for [ia, ib, ic] in ICO_FACES {
        let (a, b, c) = (corners[ia], corners[ib], corners[ic]);
        let at = |i: u32, j: u32| {
            let p = a + (b - a) * (i as f32 / n as f32) + (c - a) * (j as f32 / n as f32);
            p.normalize() * radius
        };
        for i in 0..n {
            for j in 0..(n - i) {
                mesh.push_flat_triangle(at(i, j), at(i + 1, j), at(i, j + 1));
                if i + j + 1 < n {
                    mesh.push_flat_triangle(at(i + 1, j), at(i + 1, j + 1), at(i, j + 1));
                }
            }
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_triangles_and_twelve_edges() {
        let m = cube(2.0);
        assert_eq!(m.vertices.len(), 24);
        assert_eq!(m.triangle_count(), 12);
        // 12 cube edges + 6 face diagonals
        assert_eq!(m.edge_indices().len() / 2, 18);
        assert!((m.bounding_radius() - 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn icosahedron_detail_zero_has_twenty_faces() {
        let m = icosahedron(0.8, 0);
        assert_eq!(m.triangle_count(), 20);
        assert_eq!(m.edge_indices().len() / 2, 30);
        for v in &m.vertices {
            assert!((Vec3::from(v.position).length() - 0.8).abs() < 1e-5);
        }
    }

    #[test]
    fn icosahedron_detail_one_quadruples_faces() {
        assert_eq!(icosahedron(1.0, 1).triangle_count(), 80);
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let m = uv_sphere(0.4, 32, 32);
        assert_eq!(m.vertices.len(), 33 * 33);
        // poles contribute one triangle per segment instead of two
        assert_eq!(m.triangle_count(), 32 * 32 * 2 - 2 * 32);
        for v in &m.vertices {
            assert!((Vec3::from(v.position).length() - 0.4).abs() < 1e-5);
        }
    }

    #[test]
    fn torus_knot_grid_size() {
        let m = torus_knot(1.0, 0.3, 100, 16, 2, 3);
        assert_eq!(m.vertices.len(), 101 * 17);
        assert_eq!(m.triangle_count(), 100 * 16 * 2);
        assert!(m.bounding_radius() < 1.5 + 0.3 + 1e-3);
    }
}
