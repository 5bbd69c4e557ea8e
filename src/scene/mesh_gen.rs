//! CPU-side triangle mesh generation for the section primitives.
//!
//! All generators emit an indexed triangle list with per-vertex outward
//! normals. Seams are duplicated (the first and last ring share positions)
//! so every ring wraps cleanly.

use std::f32::consts::TAU;

use glam::Vec3;

/// Interleaved vertex uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
}

impl MeshVertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

/// An indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex buffer contents.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices, three per face.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Push two triangles covering the quad `a b c d` (counter-clockwise).
    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
}

/// Torus in the XY plane around the Z axis.
///
/// `radius` is the distance from the center to the tube center, `tube` the
/// tube radius.
#[must_use]
pub fn torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> MeshData {
    let mut mesh = MeshData::default();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(MeshVertex::new(position, position - center));
        }
    }

    let row = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.quad(a, b, c, d);
        }
    }
    mesh
}

/// Cone along the Y axis with its apex at `+height/2` and a capped base.
#[must_use]
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;
    let slope = radius / height;

    // Side: apex ring (collapsed to a point) then base ring. Apex normals
    // follow the same slant as the base so shading stays continuous.
    for ring in 0..2u32 {
        let ring_radius = radius * ring as f32;
        let y = if ring == 0 { half } else { -half };
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices.push(MeshVertex::new(
                Vec3::new(ring_radius * sin, y, ring_radius * cos),
                Vec3::new(sin, slope, cos),
            ));
        }
    }
    let row = radial_segments + 1;
    for x in 0..radial_segments {
        let a = x;
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        mesh.quad(a, b, c, d);
    }

    // Base cap, facing -Y.
    let center = mesh.vertices.len() as u32;
    mesh.vertices
        .push(MeshVertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    let rim = center + 1;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices.push(MeshVertex::new(
            Vec3::new(radius * sin, -half, radius * cos),
            Vec3::NEG_Y,
        ));
    }
    for x in 0..radial_segments {
        mesh.indices.extend_from_slice(&[center, rim + x + 1, rim + x]);
    }
    mesh
}

/// Point on a (p, q) torus knot curve at parameter `u`.
fn knot_curve(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let q_over_p = q as f32 / p as f32 * u;
    let cs = q_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * q_over_p.sin() * 0.5,
    )
}

/// Tube swept along a (p, q) torus knot.
#[must_use]
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let mut mesh = MeshData::default();

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = knot_curve(u, p, q, radius);
        let p2 = knot_curve(u + 0.01, p, q, radius);

        // Frame around the curve: tangent, then two perpendiculars.
        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1).normalize_or_zero();
        let normal = binormal.cross(tangent).normalize_or_zero();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + normal * cx + binormal * cy;
            mesh.vertices.push(MeshVertex::new(position, position - p1));
        }
    }

    let row = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.quad(a, b, c, d);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.indices.len() % 3, 0);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }

    #[test]
    fn torus_counts_and_extent() {
        let mesh = torus(1.0, 0.4, 16, 60);
        assert_eq!(mesh.vertices.len(), 17 * 61);
        assert_eq!(mesh.triangle_count(), 16 * 60 * 2);
        assert_well_formed(&mesh);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let ring = p.truncate().length();
            assert!(ring >= 0.6 - 1e-4 && ring <= 1.4 + 1e-4);
            assert!(p.z.abs() <= 0.4 + 1e-5);
        }
    }

    #[test]
    fn cone_counts_and_extent() {
        let mesh = cone(1.0, 2.0, 32);
        // two side rings + cap center + cap rim
        assert_eq!(mesh.vertices.len(), 33 * 2 + 1 + 33);
        assert_eq!(mesh.triangle_count(), 32 * 2 + 32);
        assert_well_formed(&mesh);
        for v in &mesh.vertices {
            assert!(v.position[1].abs() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn cone_side_normals_point_outward() {
        let mesh = cone(1.0, 2.0, 32);
        for v in &mesh.vertices[33..66] {
            let p = Vec3::from_array(v.position);
            let n = Vec3::from_array(v.normal);
            assert!(n.x * p.x + n.z * p.z > 0.0);
            assert!(n.y > 0.0);
        }
    }

    #[test]
    fn torus_knot_counts_and_tube_radius() {
        let mesh = torus_knot(0.8, 0.35, 100, 16, 2, 3);
        assert_eq!(mesh.vertices.len(), 101 * 17);
        assert_eq!(mesh.triangle_count(), 100 * 16 * 2);
        assert_well_formed(&mesh);
    }

    #[test]
    fn knot_curve_closes_after_p_turns() {
        let start = knot_curve(0.0, 2, 3, 0.8);
        let end = knot_curve(2.0 * TAU, 2, 3, 0.8);
        assert!((start - end).length() < 1e-4);
    }
}
