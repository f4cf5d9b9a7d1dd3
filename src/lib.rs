//! Parametric surface and icosphere mesh generation.
//!
//! Both generators are pure: they take their whole configuration as
//! arguments and return a fresh [`Mesh`] ready for a 16-bit-index GPU
//! upload. [`MeshEngine`] moves the same work onto a background thread.

pub mod build;
pub mod config;
pub mod error;
pub mod export;
pub mod math;
pub mod renderer;

pub use build::{build_manifest, write_mesh};
pub use config::Manifest;
pub use error::{MeshError, Result};
pub use export::{save_obj, write_obj};
pub use math::{
    FillStyle, MAX_ICOSPHERE_DEPTH, Mesh, MeshEngine, MeshResult, SURFACE_EXAMPLES,
    SurfaceFunction, SurfacePreset, SurfaceSampleParams, generate_icosphere, generate_surface,
};
pub use renderer::MeshBuffers;
