use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Manifest;
use crate::error::{MeshError, Result};
use crate::export::save_obj;
use crate::math::{Mesh, MeshEngine, MeshResult};

/// Generates every job in `manifest` on a [`MeshEngine`] and writes each
/// mesh to `dir/<name>.obj`. Returns the written paths in completion order.
pub fn build_manifest(manifest: &Manifest, dir: &Path) -> Result<Vec<PathBuf>> {
    manifest.validate()?;

    std::fs::create_dir_all(dir).map_err(|source| MeshError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let engine = MeshEngine::new();
    for (name, job) in &manifest.surfaces {
        engine.generate_surface(name, job.params()?);
    }
    for (name, job) in &manifest.icospheres {
        engine.generate_icosphere(name, job.depth);
    }

    let total = manifest.job_count();
    let mut written = Vec::with_capacity(total);
    while written.len() < total {
        let Some(result) = engine.recv_result() else {
            return Err(MeshError::EngineStopped {
                pending: total - written.len(),
            });
        };

        match result {
            MeshResult::Surface { label, mesh } | MeshResult::Icosphere { label, mesh } => {
                let path = dir.join(format!("{label}.obj"));
                write_mesh(&path, &label, &mesh)?;
                written.push(path);
            }
            MeshResult::Error { label, error } => {
                return Err(MeshError::Job {
                    label,
                    source: Box::new(error),
                });
            }
        }
    }

    Ok(written)
}

pub fn write_mesh(path: &Path, name: &str, mesh: &Mesh) -> Result<()> {
    save_obj(path, name, mesh)?;
    info!(
        "Wrote {:?}: {} vertices, {} lines, {} triangles",
        path,
        mesh.vertex_count(),
        mesh.line_count(),
        mesh.triangle_count()
    );
    Ok(())
}
