use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MeshError, Result};
use crate::math::Mesh;

/// Writes `mesh` as a Wavefront OBJ object, 1-based, colors appended to `v`.
pub fn write_obj<W: Write>(f: &mut W, name: &str, mesh: &Mesh) -> std::io::Result<()> {
    writeln!(f, "o {}", name)?;

    if mesh.colors.len() == mesh.positions.len() {
        for (p, c) in mesh.positions.iter().zip(&mesh.colors) {
            writeln!(f, "v {} {} {} {} {} {}", p[0], p[1], p[2], c[0], c[1], c[2])?;
        }
    } else {
        for p in &mesh.positions {
            writeln!(f, "v {} {} {}", p[0], p[1], p[2])?;
        }
    }

    if !mesh.is_indexed() {
        for i in (0..mesh.positions.len() / 3).map(|t| 3 * t + 1) {
            writeln!(f, "f {} {} {}", i, i + 1, i + 2)?;
        }
        return Ok(());
    }

    for t in &mesh.triangles {
        writeln!(f, "f {} {} {}", t[0] as u32 + 1, t[1] as u32 + 1, t[2] as u32 + 1)?;
    }

    for l in &mesh.lines {
        writeln!(f, "l {} {}", l[0] as u32 + 1, l[1] as u32 + 1)?;
    }

    Ok(())
}

pub fn save_obj(path: &Path, name: &str, mesh: &Mesh) -> Result<()> {
    let io_err = |source| MeshError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, name, mesh).map_err(io_err)?;
    writer.flush().map_err(io_err)
}
