use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use surfmesh::{
    MAX_ICOSPHERE_DEPTH, Manifest, SURFACE_EXAMPLES, SurfacePreset, build_manifest,
    generate_icosphere, generate_surface, write_mesh,
};

#[derive(Parser)]
#[command(name = "surfmesh")]
#[command(about = "Generate parametric surface and icosphere meshes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every mesh listed in a manifest
    Build {
        /// Path to the mesh manifest
        #[arg(default_value = "meshes.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a manifest without generating meshes
    Check {
        #[arg(default_value = "meshes.toml")]
        manifest: PathBuf,
    },

    /// Sample one preset surface
    Surface {
        /// Preset name, see `surfmesh presets`
        preset: String,

        /// Also emit triangles
        #[arg(long)]
        fill: bool,

        /// Steps along v
        #[arg(short)]
        m: Option<u32>,

        /// Steps along u
        #[arg(short)]
        n: Option<u32>,

        /// Output .obj file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Tessellate the icosphere
    Icosphere {
        #[arg(short, long, default_value_t = 3)]
        depth: u32,

        /// Output .obj file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in surfaces
    Presets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { manifest, output } => {
            tracing::info!("Building meshes from {:?}", manifest);
            let config = Manifest::load(&manifest)?;
            let dir = output.unwrap_or_else(|| config.output.dir.clone());
            let written = build_manifest(&config, &dir)?;
            tracing::info!("Build complete! {} meshes in {:?}", written.len(), dir);
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = Manifest::load(&manifest)?;
            config.validate()?;
            tracing::info!("Manifest is valid ({} meshes)", config.job_count());
        }

        Commands::Surface {
            preset,
            fill,
            m,
            n,
            output,
        } => {
            let mut params = SurfacePreset::from_name(&preset)?.params(fill);
            params.m = m.unwrap_or(params.m);
            params.n = n.unwrap_or(params.n);

            let mesh = generate_surface(&params)?;
            let output = output.unwrap_or_else(|| PathBuf::from(format!("{preset}.obj")));
            write_mesh(&output, &preset, &mesh)?;
        }

        Commands::Icosphere { depth, output } => {
            if depth > MAX_ICOSPHERE_DEPTH {
                bail!("depth {depth} exceeds the limit of {MAX_ICOSPHERE_DEPTH}");
            }
            let mesh = generate_icosphere(depth)?;
            let output = output.unwrap_or_else(|| PathBuf::from("icosphere.obj"));
            write_mesh(&output, "icosphere", &mesh)?;
        }

        Commands::Presets => {
            for example in SURFACE_EXAMPLES {
                println!(
                    "{:<20} {:>3} x {:<3} {}",
                    example.name, example.m, example.n, example.description
                );
            }
        }
    }

    Ok(())
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(filter: EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn log_filter_honours_rust_log() {
        assert_eq!(shown(log_filter(Some("debug"))), "debug");
        assert_eq!(shown(log_filter(Some("surfmesh=trace"))), "surfmesh=trace");
    }

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(shown(log_filter(None)), "info");
    }
}
