//! Mesh manifest parsing
//!
//! A manifest is a TOML file naming the meshes to generate:
//!
//! ```toml
//! [output]
//! dir = "meshes/"
//!
//! [surfaces.wavetorus]
//! preset = "wave-torus"
//! style = "fill-wireframe"
//! m = 40
//!
//! [icospheres.ball]
//! depth = 4
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{MeshError, Result};
use crate::math::{FillStyle, MAX_ICOSPHERE_DEPTH, SurfacePreset, SurfaceSampleParams};

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub surfaces: BTreeMap<String, SurfaceJob>,
    #[serde(default)]
    pub icospheres: BTreeMap<String, IcosphereJob>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("meshes/")
}

/// A preset surface with optional overrides of its sampling parameters.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceJob {
    pub preset: String,
    #[serde(default)]
    pub style: FillStyle,
    /// Overrides `style` when set.
    pub fill: Option<bool>,
    pub m: Option<u32>,
    pub n: Option<u32>,
    pub u_min: Option<f64>,
    pub u_max: Option<f64>,
    pub v_min: Option<f64>,
    pub v_max: Option<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub scale: Option<f64>,
}

impl SurfaceJob {
    pub fn fill(&self) -> bool {
        self.fill.unwrap_or_else(|| self.style.needs_triangles())
    }

    /// Preset parameters with every override applied.
    pub fn params(&self) -> Result<SurfaceSampleParams> {
        let mut params = SurfacePreset::from_name(&self.preset)?.params(self.fill());

        params.m = self.m.unwrap_or(params.m);
        params.n = self.n.unwrap_or(params.n);
        params.u_min = self.u_min.unwrap_or(params.u_min);
        params.u_max = self.u_max.unwrap_or(params.u_max);
        params.v_min = self.v_min.unwrap_or(params.v_min);
        params.v_max = self.v_max.unwrap_or(params.v_max);
        params.a = self.a.unwrap_or(params.a);
        params.b = self.b.unwrap_or(params.b);
        params.c = self.c.unwrap_or(params.c);
        params.scale = self.scale.unwrap_or(params.scale);

        Ok(params)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IcosphereJob {
    pub depth: u32,
}

impl IcosphereJob {
    pub fn validate(&self) -> Result<()> {
        match self.depth {
            0 => Err(MeshError::InvalidDepth(0)),
            depth if depth > MAX_ICOSPHERE_DEPTH => Err(MeshError::DepthLimit {
                depth,
                max: MAX_ICOSPHERE_DEPTH,
            }),
            _ => Ok(()),
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MeshError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Checks every job without generating anything. Job names become
    /// `<name>.obj` in one directory, so they must be unique across both
    /// tables and free of path separators.
    pub fn validate(&self) -> Result<()> {
        for name in self.job_names() {
            if !is_file_stem(name) {
                return Err(MeshError::InvalidJobName(name.to_string()));
            }
        }
        if let Some(name) = self.icospheres.keys().find(|name| self.surfaces.contains_key(*name)) {
            return Err(MeshError::DuplicateJob(name.clone()));
        }

        for job in self.surfaces.values() {
            job.params()?.validate()?;
        }
        for job in self.icospheres.values() {
            job.validate()?;
        }
        Ok(())
    }

    pub fn job_names(&self) -> impl Iterator<Item = &str> {
        self.surfaces
            .keys()
            .chain(self.icospheres.keys())
            .map(String::as_str)
    }

    pub fn job_count(&self) -> usize {
        self.surfaces.len() + self.icospheres.len()
    }
}

fn is_file_stem(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[output]
dir = "out/"

[surfaces.torus]
preset = "wave-torus"
style = "fill-wireframe"
m = 40
scale = 0.5

[surfaces.flat]
preset = "plane"

[icospheres.ball]
depth = 4
"#;

    #[test]
    fn parses_jobs_and_overrides() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        assert_eq!(manifest.output.dir, PathBuf::from("out/"));
        assert_eq!(manifest.job_count(), 3);

        let torus = manifest.surfaces["torus"].params().unwrap();
        assert_eq!(torus.m, 40);
        assert_eq!(torus.n, 100);
        assert_eq!(torus.scale, 0.5);
        assert!(torus.fill);

        let flat = &manifest.surfaces["flat"];
        assert!(!flat.fill());
        assert_eq!(manifest.icospheres["ball"].depth, 4);
        manifest.validate().unwrap();
    }

    #[test]
    fn defaults_apply_to_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output.dir, PathBuf::from("meshes/"));
        assert_eq!(manifest.job_count(), 0);
    }

    #[test]
    fn explicit_fill_wins_over_style() {
        let manifest = Manifest::parse(
            "[surfaces.s]\npreset = \"crescent\"\nstyle = \"fill\"\nfill = false\n",
        )
        .unwrap();
        assert!(!manifest.surfaces["s"].params().unwrap().fill);
    }

    #[test]
    fn validation_rejects_bad_jobs() {
        let unknown = Manifest::parse("[surfaces.s]\npreset = \"klein\"\n").unwrap();
        assert!(matches!(unknown.validate(), Err(MeshError::UnknownPreset(_))));

        let empty = Manifest::parse("[surfaces.s]\npreset = \"plane\"\nn = 0\n").unwrap();
        assert!(matches!(empty.validate(), Err(MeshError::InvalidResolution { .. })));

        let deep = Manifest::parse("[icospheres.b]\ndepth = 12\n").unwrap();
        assert!(matches!(deep.validate(), Err(MeshError::DepthLimit { depth: 12, .. })));

        let flat = Manifest::parse("[icospheres.b]\ndepth = 0\n").unwrap();
        assert!(matches!(flat.validate(), Err(MeshError::InvalidDepth(0))));
    }

    #[test]
    fn names_must_be_unique_across_tables() {
        let manifest =
            Manifest::parse("[surfaces.ball]\npreset = \"plane\"\n[icospheres.ball]\ndepth = 1\n")
                .unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(MeshError::DuplicateJob(name)) if name == "ball"
        ));
    }

    #[test]
    fn names_cannot_escape_the_output_dir() {
        for name in ["../x", "a/b", "a\\b", "..", ".hidden", ""] {
            let toml = format!("[icospheres.\"{}\"]\ndepth = 1\n", name.replace('\\', "\\\\"));
            let manifest = Manifest::parse(&toml).unwrap();
            assert!(
                matches!(manifest.validate(), Err(MeshError::InvalidJobName(_))),
                "{name:?} accepted"
            );
        }

        let ok = Manifest::parse("[icospheres.\"ball-2_v1.5\"]\ndepth = 1\n").unwrap();
        ok.validate().unwrap();
    }

    #[test]
    fn misspelled_tables_are_rejected() {
        assert!(matches!(
            Manifest::parse("[surface.x]\npreset = \"plane\"\n"),
            Err(MeshError::Manifest(_))
        ));
        assert!(matches!(
            Manifest::parse("[output]\ndirectory = \"out\"\n"),
            Err(MeshError::Manifest(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_manifest_error() {
        assert!(matches!(
            Manifest::parse("[icospheres.b]\ndepth = \"deep\"\n"),
            Err(MeshError::Manifest(_))
        ));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meshes.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(Manifest::load(&path).unwrap().job_count(), 3);

        assert!(matches!(
            Manifest::load(&dir.path().join("missing.toml")),
            Err(MeshError::Io { .. })
        ));
    }
}
