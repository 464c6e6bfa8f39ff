use ariadne_paths::{AriadneResult, DuplicatePolicy, Mapper, MapperConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate accessors for the values marked in an annotated JSON document.
#[derive(Debug, Parser)]
#[command(
    name = "ariadne",
    version,
    after_help = "Examples:\n  ariadne control.json annotated.json\n  ariadne control.json annotated.json -o helpers.py"
)]
struct Args {
    /// The original, unmodified JSON document.
    control_file: PathBuf,

    /// A copy of the control document with placeholders such as "__want__:user_id".
    annotated_file: PathBuf,

    /// Write the output to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file (sentinel_prefix, accessor_prefix, duplicate_tags).
    #[arg(long, env = "ARIADNE_CONFIG")]
    config: Option<PathBuf>,

    /// Marker that identifies placeholder strings.
    #[arg(long, env = "ARIADNE_SENTINEL_PREFIX")]
    prefix: Option<String>,

    /// Prefix for generated function names.
    #[arg(long)]
    accessor_prefix: Option<String>,

    /// Fail when the same placeholder appears more than once.
    #[arg(long)]
    strict: bool,

    #[arg(long, value_enum, default_value_t = Emit::Python)]
    emit: Emit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// A Python module with one accessor function per placeholder.
    Python,
    /// The placeholder → path mapping as JSON.
    Mapping,
}

impl Args {
    fn mapper_config(&self) -> AriadneResult<MapperConfig> {
        let mut config = match self.config.as_ref() {
            Some(path) => MapperConfig::from_file(path)?,
            None => MapperConfig::default(),
        };
        if let Some(prefix) = &self.prefix {
            config = config.with_sentinel_prefix(prefix.as_str());
        }
        if let Some(prefix) = &self.accessor_prefix {
            config = config.with_accessor_prefix(prefix.as_str());
        }
        if self.strict {
            config = config.with_duplicate_tags(DuplicatePolicy::Reject);
        }
        Ok(config)
    }
}

fn run(args: &Args) -> AriadneResult<String> {
    let mapper = Mapper::new(args.mapper_config()?)?;
    let mapping = mapper.map_files(&args.control_file, &args.annotated_file)?;

    match args.emit {
        Emit::Python => mapper.generate(&mapping),
        Emit::Mapping => Ok(serde_json::to_string_pretty(&mapping)? + "\n"),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let generated = match run(&args) {
        Ok(generated) => generated,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &generated) {
                eprintln!("Error: failed to write {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
            tracing::debug!(path = %path.display(), bytes = generated.len(), "wrote output");
            println!("Successfully wrote helpers to {}", path.display());
        }
        None => print!("{generated}"),
    }

    ExitCode::SUCCESS
}
