//! Gridwire CLI: build, animate, size, and validate lattice wireframes.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gridwire")]
#[command(version, about = "Gridwire: wireframe lattices for parametric surfaces")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one wireframe and report its buffers.
    Generate {
        /// Surface to sample (elliptic_paraboloid, hyperbolic_paraboloid,
        /// monkey_saddle, plane, ripple).
        #[arg(short, long, default_value = "elliptic_paraboloid")]
        surface: String,

        /// Lattice topology (e.g. square_wireframe, klein_triangle_wireframe).
        #[arg(short, long, default_value = "square_wireframe")]
        mesh_type: String,

        /// Samples along x.
        #[arg(long, default_value_t = 64)]
        nx: u32,

        /// Samples along y.
        #[arg(long, default_value_t = 64)]
        ny: u32,

        /// Write the line list and vertices as JSON.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Spin a wireframe headlessly and report frame metrics.
    Animate {
        /// Path to an animation config (TOML or JSON). Without one, every
        /// catalog surface is run with its demo settings.
        #[arg(short, long)]
        config: Option<String>,

        /// Write every frame as JSON (requires --config).
        #[arg(short, long)]
        output: Option<String>,

        /// Output CSV file path.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print index-buffer sizes of every topology for a grid.
    Sizes {
        #[arg(long)]
        nx: u32,

        #[arg(long)]
        ny: u32,
    },

    /// Validate an animation config.
    Validate {
        /// Path to config file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let result = match cli.command {
        Commands::Generate {
            surface,
            mesh_type,
            nx,
            ny,
            output,
        } => commands::generate(&surface, &mesh_type, nx, ny, output.as_deref()),
        Commands::Animate { config, output, csv } => {
            commands::animate(config.as_deref(), output.as_deref(), csv.as_deref())
        }
        Commands::Sizes { nx, ny } => commands::sizes(nx, ny),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
