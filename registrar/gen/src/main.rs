//! Registrar Code Generator
//!
//! Generates Java module container classes from module definition files.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use registrar_define::ModuleMeta;
use registrar_gen::config::GeneratorConfig;
use registrar_gen::errors::GeneratorError;
use registrar_gen::input::load_modules;
use registrar_gen::output::{DirectoryEmitter, DryRunEmitter, FileEmitter, generate_and_write_all};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Registrar code generator - turns module definitions into Java containers
#[derive(Parser, Debug)]
#[command(name = "registrar-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Module definition files (.json, .yaml or .yml)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for generated sources
    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    /// Generator configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Indentation width in spaces (overrides the configuration)
    #[arg(long)]
    indent: Option<usize>,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE, -vvvv TRACE with file/line)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing subscriber based on verbosity level.
///
/// `RUST_LOG` takes precedence over `-v` when set.
fn init_tracing(verbose: u8) {
    if verbose == 0 && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,registrar_gen=info".to_string(),
            2 => "info,registrar_gen=debug".to_string(),
            _ => "debug,registrar_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig, GeneratorError> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    Ok(match cli.indent {
        Some(width) => config.with_indent_width(width),
        None => config,
    })
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    let mut modules: Vec<ModuleMeta> = Vec::new();
    for input in &cli.inputs {
        let loaded = load_modules(input)?;
        if cli.verbose > 0 {
            eprintln!(
                "{} {} ({} modules)",
                "Loaded".cyan(),
                input.display(),
                loaded.len()
            );
        }
        modules.extend(loaded);
    }

    let mut emitter: Box<dyn FileEmitter> = if cli.dry_run {
        Box::new(DryRunEmitter)
    } else {
        Box::new(DirectoryEmitter::new(cli.output.clone()))
    };

    let written = generate_and_write_all(&modules, &config, emitter.as_mut())?;

    if cli.dry_run {
        eprintln!(
            "{} {} files (dry run, nothing written)",
            "Generated".yellow().bold(),
            written.len()
        );
    } else {
        for path in &written {
            eprintln!("  {} {}", "wrote".green(), path.display());
        }
        eprintln!(
            "{} {} files to {}",
            "Generated".green().bold(),
            written.len(),
            cli.output.display()
        );
    }

    Ok(())
}
