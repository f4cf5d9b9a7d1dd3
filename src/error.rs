use std::path::PathBuf;

use thiserror::Error;

/// Largest vertex count a 16-bit index buffer can address.
pub const MAX_INDEXED_VERTICES: usize = u16::MAX as usize + 1;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("grid resolution must be positive, got m = {m}, n = {n}")]
    InvalidResolution { m: u32, n: u32 },

    #[error(
        "surface grid needs {vertices} vertices, more than 16-bit indices can address ({max})",
        max = MAX_INDEXED_VERTICES
    )]
    IndexOverflow { vertices: usize },

    #[error("icosphere depth must be at least 1, got {0}")]
    InvalidDepth(u32),

    #[error("icosphere depth {depth} exceeds the limit of {max}")]
    DepthLimit { depth: u32, max: u32 },

    #[error("unknown surface preset '{0}'")]
    UnknownPreset(String),

    #[error("job name '{0}' is used by both a surface and an icosphere")]
    DuplicateJob(String),

    #[error("job name '{0}' is not a plain file stem")]
    InvalidJobName(String),

    #[error("failed to generate '{label}': {source}")]
    Job {
        label: String,
        #[source]
        source: Box<MeshError>,
    },

    #[error("mesh engine stopped with {pending} jobs outstanding")]
    EngineStopped { pending: usize },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    Manifest(#[from] toml::de::Error),
}

pub type Result<T, E = MeshError> = std::result::Result<T, E>;
