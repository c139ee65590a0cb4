mod config;
mod output;

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Generator, Shell};
use color_eyre::eyre::{Context, Result};
use rest_scaffold_lib::{
    ArtifactKind, CollisionPolicy, FsProjectTree, GenerationContext, ScaffoldConfig,
    ScaffoldError, Scaffolder, SourceFile, SourceRoots,
};
use strum::IntoEnumIterator;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::FileConfig;
use crate::output::{
    Inspection, OutputConfig, OutputFormat, PlannedArtifact, print_inspection, print_message,
    print_report,
};

#[derive(Parser, Debug)]
#[command(
    name = "rest-scaffold",
    version,
    about = "Generate a Spring REST slice from a Java or Kotlin entity class"
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colors (plain text output)
    #[arg(long, global = true)]
    plain: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of the nearest rest-scaffold.toml
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.plain {
            OutputFormat::Plain
        } else {
            OutputFormat::Pretty
        }
    }
}

/// Arguments for the generate command
#[derive(clap::Args, Debug, Clone)]
struct GenerateArgs {
    /// The entity source file (.java, .kt)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Source root used to derive package names (repeatable)
    #[arg(long = "source-root", value_name = "DIR")]
    source_roots: Vec<PathBuf>,

    /// What to do when a generated file already exists
    #[arg(long, value_enum)]
    on_collision: Option<CollisionArg>,

    /// Fail on fields without a declared type instead of emitting `null`
    #[arg(long)]
    strict_types: bool,

    /// Show what would be written without touching the project
    #[arg(long)]
    dry_run: bool,
}

/// Arguments for the inspect command
#[derive(clap::Args, Debug, Clone)]
struct InspectArgs {
    /// The entity source file (.java, .kt)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Source root used to derive package names (repeatable)
    #[arg(long = "source-root", value_name = "DIR")]
    source_roots: Vec<PathBuf>,

    /// Fail on fields without a declared type instead of showing `null`
    #[arg(long)]
    strict_types: bool,
}

/// Arguments for the completions command
#[derive(clap::Args, Debug, Clone)]
struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Generate repository, DTO, requests, mapper, service and controller
    Generate(GenerateArgs),
    /// Show the resolved class and the packages artifacts would use
    Inspect(InspectArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum CollisionArg {
    Error,
    Skip,
    Overwrite,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(value: CollisionArg) -> Self {
        match value {
            CollisionArg::Error => Self::Error,
            CollisionArg::Skip => Self::Skip,
            CollisionArg::Overwrite => Self::Overwrite,
        }
    }
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            // Default: degraded-output warnings only
            0 => "warn".to_string(),
            1 => "warn,rest_scaffold_lib=info,rest_scaffold=info".to_string(),
            2 => "info,rest_scaffold_lib=debug,rest_scaffold=debug".to_string(),
            _ => "debug,rest_scaffold_lib=trace,rest_scaffold=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    let output = OutputConfig::new(cli.output_format());

    let result = match &cli.command {
        Command::Completions(args) => {
            print_completions(args.shell, &mut Cli::command());
            return Ok(());
        }
        Command::Generate(args) => generate(args, cli.config.as_deref(), &output),
        Command::Inspect(args) => inspect(args, cli.config.as_deref(), &output),
    };

    match result {
        Ok(()) => Ok(()),
        Err(report) => match report.downcast_ref::<ScaffoldError>() {
            Some(error) => {
                debug!(?error, "scaffolding failed");
                print_message(&error.user_message(), &output);
                std::process::exit(1);
            }
            None => Err(report),
        },
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    clap_complete::generate(generator, cmd, cmd.get_name().to_string(), &mut std::io::stdout());
}

/// Absolutizes the selected file, if any.
fn selected_file(file: Option<&Path>) -> Result<Option<PathBuf>> {
    file.map(|path| {
        std::path::absolute(path)
            .wrap_err_with(|| format!("Failed to resolve `{}`", path.display()))
    })
    .transpose()
}

/// Loads the config file relevant to `file` (or the working directory).
fn file_config(explicit: Option<&Path>, file: Option<&Path>) -> Result<FileConfig> {
    let start = match file.and_then(Path::parent) {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().wrap_err("Failed to read the working directory")?,
    };
    FileConfig::discover(explicit, &start)
}

/// Command-line roots win over the config file; neither means detection.
fn source_roots(flags: &[PathBuf], file_config: &FileConfig) -> Result<Option<SourceRoots>> {
    let roots = if flags.is_empty() {
        file_config.source_roots.clone()
    } else {
        flags
            .iter()
            .map(|root| {
                std::path::absolute(root)
                    .wrap_err_with(|| format!("Failed to resolve `{}`", root.display()))
            })
            .collect::<Result<Vec<_>>>()?
    };

    Ok((!roots.is_empty()).then(|| SourceRoots::new(roots)))
}

fn generate(
    args: &GenerateArgs,
    explicit_config: Option<&Path>,
    output: &OutputConfig,
) -> Result<()> {
    let file = selected_file(args.file.as_deref())?;
    let file_config = file_config(explicit_config, file.as_deref())?;

    let mut config = ScaffoldConfig::new()
        .collision_policy(
            args.on_collision
                .map(CollisionPolicy::from)
                .or(file_config.on_collision)
                .unwrap_or_default(),
        )
        .strict_types(args.strict_types || file_config.strict_types.unwrap_or(false))
        .dry_run(args.dry_run || file_config.dry_run.unwrap_or(false));
    if let Some(roots) = source_roots(&args.source_roots, &file_config)? {
        config = config.source_roots(roots);
    }

    let mut scaffolder = Scaffolder::new(FsProjectTree::new(), config);
    let report = scaffolder.run(file.as_deref())?;
    print_report(&report, output).wrap_err("Failed to serialize report")
}

fn inspect(
    args: &InspectArgs,
    explicit_config: Option<&Path>,
    output: &OutputConfig,
) -> Result<()> {
    let file = selected_file(args.file.as_deref())?;
    let file_config = file_config(explicit_config, file.as_deref())?;

    let file = file.ok_or(ScaffoldError::NoFileSelected)?;
    let source = SourceFile::open(&file)?;
    let strict_types = args.strict_types || file_config.strict_types.unwrap_or(false);
    let class = source.resolve_class(strict_types)?;

    let roots = source_roots(&args.source_roots, &file_config)?
        .unwrap_or_else(|| SourceRoots::detect(&file));
    let context = GenerationContext::for_source_file(&file, &roots);

    let inspection = Inspection {
        artifacts: ArtifactKind::iter()
            .map(|kind| PlannedArtifact {
                kind,
                package: context.package_for(kind),
                file_name: kind.file_name(&class.name),
            })
            .collect(),
        class,
        base_package: context.base_package,
        base_directory: context.base_directory,
    };

    print_inspection(&inspection, output).wrap_err("Failed to serialize inspection")
}
