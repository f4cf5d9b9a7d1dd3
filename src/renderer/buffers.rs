use wgpu::util::DeviceExt;

use crate::math::Mesh;
use crate::renderer::vertex::{VertexKind, vertex_bytes};

/// GPU-side copy of a [`Mesh`].
///
/// Index buffers use `Uint16`, the format every mesh index fits in. The
/// caller owns the device, pipelines and render pass.
pub struct MeshBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_kind: VertexKind,
    pub vertex_count: u32,

    pub line_index_buffer: Option<wgpu::Buffer>,
    pub line_index_count: u32,

    pub triangle_index_buffer: Option<wgpu::Buffer>,
    pub triangle_index_count: u32,
}

impl MeshBuffers {
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertex_kind = VertexKind::of(mesh);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: &vertex_bytes(mesh),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let line_index_buffer = index_contents(mesh.line_indices()).map(|contents| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Line Index Buffer")),
                contents,
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        let triangle_index_buffer = index_contents(mesh.triangle_indices()).map(|contents| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Triangle Index Buffer")),
                contents,
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Self {
            vertex_buffer,
            vertex_kind,
            vertex_count: mesh.vertex_count() as u32,
            line_index_buffer,
            line_index_count: mesh.line_indices().len() as u32,
            triangle_index_buffer,
            triangle_index_count: mesh.triangle_indices().len() as u32,
        }
    }

    pub fn draw_lines(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if let Some(index_buffer) = &self.line_index_buffer {
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..self.line_index_count, 0, 0..1);
        }
    }

    pub fn draw_triangles(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if let Some(index_buffer) = &self.triangle_index_buffer {
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..self.triangle_index_count, 0, 0..1);
        }
    }

    /// Non-indexed draw of every vertex, for meshes such as the icosphere.
    pub fn draw_vertices(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}

// `create_buffer_init` pads the odd trailing u16 to COPY_BUFFER_ALIGNMENT.
fn index_contents(indices: &[u16]) -> Option<&[u8]> {
    (!indices.is_empty()).then(|| bytemuck::cast_slice(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{SurfacePreset, generate_icosphere, generate_surface};

    #[test]
    fn index_buffers_hold_raw_u16_indices() {
        assert_eq!(index_contents(&[]), None);
        assert_eq!(index_contents(&[1, 2, 3]).map(<[u8]>::len), Some(6));
        assert_eq!(
            index_contents(&[0x0102]),
            Some(&0x0102u16.to_ne_bytes()[..])
        );
    }

    #[test]
    fn unindexed_meshes_get_no_index_buffers() {
        let ball = generate_icosphere(1).unwrap();
        assert!(index_contents(ball.line_indices()).is_none());
        assert!(index_contents(ball.triangle_indices()).is_none());

        let mut params = SurfacePreset::Plane.params(false);
        params.m = 1;
        params.n = 1;
        let quad = generate_surface(&params).unwrap();
        assert_eq!(index_contents(quad.line_indices()).map(<[u8]>::len), Some(8));
        assert!(index_contents(quad.triangle_indices()).is_none());
    }
}
