pub mod buffers;
pub mod vertex;

pub use buffers::MeshBuffers;
pub use vertex::{Position, PositionColor, VertexKind, position_color_layout, position_layout};
