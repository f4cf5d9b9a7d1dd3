pub mod engine;
pub mod examples;
pub mod icosphere;
pub mod mesh;
pub mod surface;

pub use engine::{MAX_ICOSPHERE_DEPTH, MeshEngine, MeshResult};
pub use examples::{FillStyle, SURFACE_EXAMPLES, SurfacePreset};
pub use icosphere::generate_icosphere;
pub use mesh::Mesh;
pub use surface::{SurfaceFunction, SurfaceSampleParams, generate_surface};
