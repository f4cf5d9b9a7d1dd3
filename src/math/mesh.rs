use glam::Vec3;

/// Output of both meshers.
///
/// Surface meshes are indexed: every grid point appears once in `positions`
/// and `lines`/`triangles` refer to it. Icosphere meshes are not: every
/// triangle corner is its own vertex, three consecutive vertices per
/// triangle, and `colors` carries one RGBA entry per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub lines: Vec<[u16; 2]>,
    pub triangles: Vec<[u16; 3]>,
    pub colors: Vec<[f32; 4]>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_indexed(&self) -> bool {
        !self.lines.is_empty() || !self.triangles.is_empty()
    }

    pub fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn line_indices(&self) -> &[u16] {
        bytemuck::cast_slice(&self.lines)
    }

    pub fn triangle_indices(&self) -> &[u16] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn color_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().map(|p| Vec3::from_array(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_views_follow_element_order() {
        let mesh = Mesh {
            positions: vec![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]],
            lines: vec![[0, 1]],
            triangles: vec![[1, 0, 1]],
            colors: vec![],
        };

        assert_eq!(mesh.vertex_data(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(mesh.line_indices(), &[0, 1]);
        assert_eq!(mesh.triangle_indices(), &[1, 0, 1]);
        assert!(mesh.color_data().is_empty());
        assert!(mesh.is_indexed());
    }

    #[test]
    fn bounds_cover_every_position() {
        let mesh = Mesh {
            positions: vec![[1.0, -2.0, 0.5], [-1.0, 3.0, 0.0], [0.0, 0.0, -4.0]],
            ..Default::default()
        };

        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -2.0, -4.0));
        assert_eq!(max, Vec3::new(1.0, 3.0, 0.5));
        assert_eq!(Mesh::default().bounds(), None);
    }
}
