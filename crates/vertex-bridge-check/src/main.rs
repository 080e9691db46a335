use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Parser, ValueEnum};
use vertex_bridge::logging::{init_logging, LoggingConfig};
use vertex_bridge::reflect::{check_wgsl_with, CheckOptions, ContractReport, ShaderKind};
use vertex_bridge::{shaders, ContractError};

/// Checks WGSL shaders against the vertex-bridge layout contract.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Vertex record the shaders consume.
    #[arg(long, value_enum, default_value_t = Kind::Simple)]
    kind: Kind,

    /// Name of the `@vertex` function to inspect.
    #[arg(long, default_value = shaders::VERTEX_ENTRY_POINT)]
    entry_point: String,

    /// env_logger filter; overrides RUST_LOG.
    #[arg(long)]
    log_filter: Option<String>,

    /// Also check the shaders shipped with the library.
    #[arg(long)]
    bundled: bool,

    /// WGSL files to check.
    files: Vec<PathBuf>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Kind {
    Simple,
    Textured,
}

impl From<Kind> for ShaderKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Simple => ShaderKind::Simple,
            Kind::Textured => ShaderKind::Textured,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        ..LoggingConfig::default()
    });

    if args.files.is_empty() && !args.bundled {
        bail!("nothing to check; pass WGSL files or --bundled");
    }

    let options = CheckOptions {
        vertex_entry_point: args.entry_point.clone(),
    };

    let mut failures = 0usize;
    if args.bundled {
        failures += check_bundled();
    }
    failures += check_files(&args.files, ShaderKind::from(args.kind), &options);

    if failures > 0 {
        bail!("{failures} shader(s) break the layout contract");
    }
    Ok(())
}

/// Checks the shaders shipped with the library. Returns the failure count.
fn check_bundled() -> usize {
    // Bundled shaders always use the default entry point.
    let options = CheckOptions::default();
    ShaderKind::ALL
        .into_iter()
        .filter(|&kind| !report(kind.label(), check_wgsl_with(shaders::source(kind), kind, &options)))
        .count()
}

/// Checks every file, including those after an unreadable one. Returns the failure count.
fn check_files<P: AsRef<Path>>(paths: &[P], kind: ShaderKind, options: &CheckOptions) -> usize {
    let mut failures = 0;
    for path in paths {
        let path = path.as_ref();
        let name = path.display().to_string();
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                log::error!("{name}: cannot read: {err}");
                failures += 1;
                continue;
            }
        };
        if !report(&name, check_wgsl_with(&source, kind, options)) {
            failures += 1;
        }
    }
    failures
}

fn report(name: &str, result: Result<ContractReport, ContractError>) -> bool {
    match result {
        Ok(report) => {
            log::info!("{name}: ok ({report})");
            true
        }
        Err(err) => {
            log::error!("{name}: {err}");
            false
        }
    }
}
