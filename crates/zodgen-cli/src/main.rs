//! zodgen CLI - zod validator generator for OpenAPI documents
//!
//! Commands:
//! - `zodgen generate` - Compile a document into a TypeScript zod module
//! - `zodgen check` - Validate a document and its references

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zodgen_cli::{ConfigFile, Overrides, Settings};
use zodgen_core::NullableMode;

#[derive(Parser)]
#[command(name = "zodgen")]
#[command(author, version, about = "Generate zod validators from OpenAPI documents", long_about = None)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a zod module from an OpenAPI document
    Generate {
        /// OpenAPI document (JSON or YAML)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output TypeScript file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generate component schemas
        #[arg(short = 'c', long)]
        components: bool,

        /// Generate path parameter schemas
        #[arg(short = 'p', long)]
        paths: bool,

        /// Generate query parameter schemas
        #[arg(short = 'q', long)]
        queries: bool,

        /// Modifier for non-required values (nullish, optional)
        #[arg(long)]
        nullable_mode: Option<NullableMode>,

        /// Omit the section banners
        #[arg(long)]
        no_banners: bool,

        /// Path to zodgen.toml (default: ./zodgen.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate an OpenAPI document and its references
    Check {
        /// OpenAPI document (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            output,
            components,
            paths,
            queries,
            nullable_mode,
            no_banners,
            config,
        } => {
            let cwd = std::env::current_dir()?;
            let file = ConfigFile::discover(config.as_deref(), &cwd)?;
            let overrides = Overrides {
                input,
                output,
                components,
                paths,
                queries,
                nullable_mode,
                no_banners,
            };
            let settings = Settings::resolve(&file, &overrides)?;

            let summary = zodgen_cli::run(&settings)?;
            println!(
                "✓ Wrote {} statements ({} bytes) to {}",
                summary.statements,
                summary.bytes,
                summary.output.display()
            );
        }
        Commands::Check { input } => {
            let report = zodgen_cli::check(&input)?;
            println!("✓ OpenAPI: {}", report.openapi);
            println!("✓ Schemas: {}", report.schemas);
            println!("✓ Paths: {} ({} operations)", report.paths, report.operations);
            println!("\nDocument is valid!");
        }
    }

    Ok(())
}
