use tracing::debug;

use crate::error::{MAX_INDEXED_VERTICES, MeshError, Result};
use crate::math::mesh::Mesh;

pub type SurfaceComponent = fn(f64, f64, f64, f64, f64) -> f64;

#[derive(Debug, Clone, Copy)]
pub struct SurfaceFunction {
    pub x: SurfaceComponent,
    pub y: SurfaceComponent,
    pub z: SurfaceComponent,
}

impl SurfaceFunction {
    pub fn eval(&self, a: f64, b: f64, c: f64, u: f64, v: f64) -> [f64; 3] {
        [
            (self.x)(a, b, c, u, v),
            (self.y)(a, b, c, u, v),
            (self.z)(a, b, c, u, v),
        ]
    }
}

/// `n` steps along `u` (rows), `m` steps along `v` (columns).
#[derive(Debug, Clone, Copy)]
pub struct SurfaceSampleParams {
    pub m: u32,
    pub n: u32,
    pub u_min: f64,
    pub u_max: f64,
    pub v_min: f64,
    pub v_max: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub scale: f64,
    pub fill: bool,
    pub surface: SurfaceFunction,
}

impl SurfaceSampleParams {
    pub fn vertex_count(&self) -> usize {
        (self.n as usize + 1) * (self.m as usize + 1)
    }

    /// Step along `u`. Taken from `u_max` alone, not from `u_max - u_min`;
    /// the two only agree when sampling starts at zero.
    pub fn du(&self) -> f64 {
        self.u_max / self.n as f64
    }

    pub fn dv(&self) -> f64 {
        self.v_max / self.m as f64
    }

    pub fn grid_index(&self, i: u32, j: u32) -> usize {
        i as usize * (self.m as usize + 1) + j as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.m == 0 || self.n == 0 {
            return Err(MeshError::InvalidResolution {
                m: self.m,
                n: self.n,
            });
        }

        let vertices = self.vertex_count();
        if vertices > MAX_INDEXED_VERTICES {
            return Err(MeshError::IndexOverflow { vertices });
        }

        Ok(())
    }
}

/// Samples `params.surface` on the regular `(u, v)` grid.
///
/// Every interior grid point `(i > 0, j > 0)` closes one cell: it adds a
/// segment to its predecessor in the row and one to the same column of the
/// previous row, and with `fill` the two triangles
/// `(k, k-1, k-row)` and `(k-1, k-row-1, k-row)` where `row = m + 1`.
pub fn generate_surface(params: &SurfaceSampleParams) -> Result<Mesh> {
    params.validate()?;

    let m = params.m;
    let n = params.n;
    let row = m as usize + 1;
    let cells = m as usize * n as usize;

    let du = params.du();
    let dv = params.dv();

    let mut positions = Vec::with_capacity(params.vertex_count());
    let mut lines = Vec::with_capacity(2 * cells);
    let mut triangles = Vec::with_capacity(if params.fill { 2 * cells } else { 0 });

    for i in 0..=n {
        let u = params.u_min + i as f64 * du;

        for j in 0..=m {
            let v = params.v_min + j as f64 * dv;
            let index = params.grid_index(i, j);
            debug_assert_eq!(positions.len(), index);

            let [x, y, z] = params.surface.eval(params.a, params.b, params.c, u, v);
            positions.push([
                (params.scale * x) as f32,
                (params.scale * y) as f32,
                (params.scale * z) as f32,
            ]);

            if i == 0 || j == 0 {
                continue;
            }

            let k = index as u16;
            let left = k - 1;
            let up = (index - row) as u16;
            let up_left = up - 1;

            lines.push([left, k]);
            lines.push([up, k]);

            if params.fill {
                triangles.push([k, left, up]);
                triangles.push([left, up_left, up]);
            }
        }
    }

    debug!(
        m,
        n,
        fill = params.fill,
        vertices = positions.len(),
        lines = lines.len(),
        triangles = triangles.len(),
        "sampled parametric surface"
    );

    Ok(Mesh {
        positions,
        lines,
        triangles,
        colors: Vec::new(),
    })
}
