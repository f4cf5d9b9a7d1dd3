use glam::Vec3;
use tracing::debug;

use crate::error::{MeshError, Result};
use crate::math::mesh::Mesh;

// Four overlapping tetrahedra sharing the equator corners, unnormalized.
const BASE_CORNERS: [[[f32; 3]; 4]; 4] = [
    [[1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, -1.0], [-1.0, 0.0, 1.0]],
    [[1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, -1.0], [1.0, 0.0, -1.0]],
    [[1.0, 0.0, 1.0], [0.0, -1.0, 0.0], [-1.0, 0.0, -1.0], [-1.0, 0.0, 1.0]],
    [[1.0, 0.0, 1.0], [0.0, -1.0, 0.0], [-1.0, 0.0, -1.0], [1.0, 0.0, -1.0]],
];

const BASE_FACES: [[[usize; 3]; 4]; 4] = [
    [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]],
    [[0, 2, 1], [0, 3, 1], [0, 3, 2], [1, 3, 2]],
    [[0, 2, 1], [0, 3, 1], [0, 3, 2], [1, 3, 2]],
    [[0, 1, 3], [0, 1, 2], [0, 2, 3], [1, 2, 3]],
];

pub const SEED_TRIANGLES: usize = 16;

pub fn base_tetrahedra() -> [[Vec3; 4]; 4] {
    BASE_CORNERS.map(|corners| corners.map(|c| Vec3::from_array(c).normalize()))
}

pub fn icosphere_vertex_count(depth: u32) -> Option<usize> {
    let leaves = 4usize.checked_pow(depth.checked_sub(1)?)?;
    leaves.checked_mul(SEED_TRIANGLES * 3)
}

pub fn position_color(p: [f32; 3]) -> [f32; 4] {
    [p[0] + 0.5, p[1] + 0.5, p[2] + 0.5, 1.0]
}

/// Approximates the unit sphere by recursive midpoint subdivision of the
/// 16 seed faces.
///
/// Output is non-indexed: each leaf triangle contributes its three corners
/// in order, nothing is shared. Depth 1 emits the seed faces unchanged. The
/// vertex count is `48 * 4^(depth - 1)`, so callers bound `depth`.
pub fn generate_icosphere(depth: u32) -> Result<Mesh> {
    if depth == 0 {
        return Err(MeshError::InvalidDepth(depth));
    }

    let mut tessellator = Tessellator {
        positions: Vec::with_capacity(icosphere_vertex_count(depth).unwrap_or(0)),
    };

    for (corners, faces) in base_tetrahedra().iter().zip(BASE_FACES.iter()) {
        for &[a, b, c] in faces {
            tessellator.tessellate(corners[a], corners[b], corners[c], depth);
        }
    }

    let positions = tessellator.positions;
    let colors = positions.iter().copied().map(position_color).collect();

    debug!(depth, vertices = positions.len(), "tessellated icosphere");

    Ok(Mesh {
        positions,
        lines: Vec::new(),
        triangles: Vec::new(),
        colors,
    })
}

struct Tessellator {
    positions: Vec<[f32; 3]>,
}

impl Tessellator {
    fn tessellate(&mut self, a: Vec3, b: Vec3, c: Vec3, depth: u32) {
        if depth == 1 {
            self.positions
                .extend_from_slice(&[a.to_array(), b.to_array(), c.to_array()]);
            return;
        }

        let ab = sphere_midpoint(a, b, c);
        let ac = sphere_midpoint(a, c, b);
        let bc = sphere_midpoint(b, c, a);

        self.tessellate(a, ab, ac, depth - 1);
        self.tessellate(ac, bc, c, depth - 1);
        self.tessellate(ab, b, bc, depth - 1);
        self.tessellate(ab, bc, ac, depth - 1);
    }
}

/// Midpoint of the edge `p`-`q` pushed back onto the unit sphere.
///
/// Antipodal endpoints have no defined midpoint direction; the seed faces
/// contain such edges, so the midpoint then leans towards the face's
/// `opposite` corner, projected off the edge axis.
fn sphere_midpoint(p: Vec3, q: Vec3, opposite: Vec3) -> Vec3 {
    let sum = p + q;
    if sum.length_squared() > 1e-12 {
        return sum.normalize();
    }

    let across = opposite - p * opposite.dot(p);
    across
        .try_normalize()
        .unwrap_or_else(|| p.any_orthonormal_vector())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_one_emits_the_seed_faces() {
        let mesh = generate_icosphere(1).unwrap();
        assert_eq!(mesh.vertex_count(), 48);

        let tetrahedra = base_tetrahedra();
        assert_eq!(mesh.positions[0], tetrahedra[0][0].to_array());
        assert_eq!(mesh.positions[1], tetrahedra[0][1].to_array());
        assert_eq!(mesh.positions[2], tetrahedra[0][2].to_array());
        // Second tetrahedron starts with face (e, g, f).
        assert_eq!(mesh.positions[13], tetrahedra[1][2].to_array());
    }

    #[test]
    fn vertex_count_grows_by_four_per_level() {
        for depth in 1..=5 {
            let mesh = generate_icosphere(depth).unwrap();
            assert_eq!(mesh.vertex_count(), 48 * 4usize.pow(depth - 1));
            assert_eq!(Some(mesh.vertex_count()), icosphere_vertex_count(depth));
        }
        assert_eq!(generate_icosphere(2).unwrap().vertex_count(), 192);
    }

    #[test]
    fn every_vertex_lies_on_the_unit_sphere() {
        for depth in 1..=4 {
            let mesh = generate_icosphere(depth).unwrap();
            for p in &mesh.positions {
                let len = Vec3::from_array(*p).length();
                assert!((len - 1.0).abs() < 1e-5, "depth {depth}: |{p:?}| = {len}");
            }
        }
    }

    #[test]
    fn colors_are_offset_positions() {
        let mesh = generate_icosphere(3).unwrap();
        assert_eq!(mesh.colors.len(), mesh.positions.len());
        for (p, c) in mesh.positions.iter().zip(&mesh.colors) {
            assert_eq!(*c, [p[0] + 0.5, p[1] + 0.5, p[2] + 0.5, 1.0]);
        }
    }

    #[test]
    fn subdivision_order_is_stable() {
        let mesh = generate_icosphere(2).unwrap();
        let [a, b, c] = {
            let t = base_tetrahedra()[0];
            [t[0], t[1], t[2]]
        };
        let ab = (a + b).normalize();

        // First leaf is (a, ab, ac), third leaf starts with ab, b.
        assert_eq!(mesh.positions[0], a.to_array());
        assert_eq!(mesh.positions[1], ab.to_array());
        assert_eq!(mesh.positions[6], ab.to_array());
        assert_eq!(mesh.positions[7], b.to_array());
        assert_eq!(mesh.positions[8], sphere_midpoint(b, c, a).to_array());
    }

    #[test]
    fn antipodal_edge_midpoint_leans_to_opposite_corner() {
        let [a, b, c, _] = base_tetrahedra()[0];
        let mid = sphere_midpoint(a, c, b);
        assert!((mid - b).length() < 1e-6);
    }

    #[test]
    fn output_is_unindexed_and_repeatable() {
        let first = generate_icosphere(3).unwrap();
        assert!(!first.is_indexed());
        assert_eq!(first, generate_icosphere(3).unwrap());
    }

    #[test]
    fn rejects_depth_zero() {
        assert!(matches!(generate_icosphere(0), Err(MeshError::InvalidDepth(0))));
        assert_eq!(icosphere_vertex_count(0), None);
    }
}
