use bytemuck::{Pod, Zeroable};

use crate::math::Mesh;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Position {
    pub position: [f32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PositionColor {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexKind {
    Position,
    PositionColor,
}

impl VertexKind {
    pub fn of(mesh: &Mesh) -> Self {
        if !mesh.colors.is_empty() && mesh.colors.len() == mesh.positions.len() {
            VertexKind::PositionColor
        } else {
            VertexKind::Position
        }
    }

    pub fn stride(self) -> usize {
        match self {
            VertexKind::Position => std::mem::size_of::<Position>(),
            VertexKind::PositionColor => std::mem::size_of::<PositionColor>(),
        }
    }

    pub fn layout(self) -> wgpu::VertexBufferLayout<'static> {
        match self {
            VertexKind::Position => position_layout(),
            VertexKind::PositionColor => position_color_layout(),
        }
    }
}

pub fn vertex_bytes(mesh: &Mesh) -> Vec<u8> {
    match VertexKind::of(mesh) {
        VertexKind::Position => bytemuck::cast_slice(&mesh.positions).to_vec(),
        VertexKind::PositionColor => {
            let vertices: Vec<PositionColor> = mesh
                .positions
                .iter()
                .zip(&mesh.colors)
                .map(|(&position, &color)| PositionColor { position, color })
                .collect();
            bytemuck::cast_slice(&vertices).to_vec()
        }
    }
}

pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Position>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    }
}

pub fn position_color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PositionColor>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    }
}
