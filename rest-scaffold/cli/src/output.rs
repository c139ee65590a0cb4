use std::io::IsTerminal;
use std::path::PathBuf;

use owo_colors::{OwoColorize, Style};
use rest_scaffold_lib::{
    ArtifactKind, ArtifactStatus, ClassDescriptor, GenerationReport, MessageLevel, UserMessage,
};
use serde::Serialize;

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored output (default when TTY)
    Pretty,
    /// Plain text without colors
    Plain,
    /// JSON output
    Json,
}

/// Resolved styling for one invocation.
pub struct OutputConfig {
    pub format: OutputFormat,
    use_colors: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        let use_colors = match format {
            OutputFormat::Pretty => {
                let no_color = std::env::var("NO_COLOR").is_ok();
                !no_color && std::io::stdout().is_terminal()
            }
            OutputFormat::Plain | OutputFormat::Json => false,
        };
        Self { format, use_colors }
    }

    fn style(&self, style: Style) -> Style {
        if self.use_colors { style } else { Style::new() }
    }
}

/// A user message as emitted with `--json`.
#[derive(Debug, Serialize)]
struct MessageOutput<'a> {
    level: MessageLevel,
    title: &'static str,
    message: String,
    #[serde(flatten)]
    detail: &'a UserMessage,
}

/// What `inspect` shows: the resolved class and where each artifact would go.
#[derive(Debug, Serialize)]
pub struct Inspection {
    pub class: ClassDescriptor,
    pub base_package: String,
    pub base_directory: Option<PathBuf>,
    pub artifacts: Vec<PlannedArtifact>,
}

#[derive(Debug, Serialize)]
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    pub package: String,
    pub file_name: String,
}

/// Prints a user message verbatim: info to stdout, errors to stderr.
pub fn print_message(message: &UserMessage, config: &OutputConfig) {
    let text = match config.format {
        OutputFormat::Json => {
            let output = MessageOutput {
                level: message.level(),
                title: message.title(),
                message: message.to_string(),
                detail: message,
            };
            serde_json::to_string(&output).unwrap_or_else(|_| message.to_string())
        }
        OutputFormat::Pretty | OutputFormat::Plain => {
            let style = match message.level() {
                MessageLevel::Info => config.style(Style::new().green().bold()),
                MessageLevel::Error => config.style(Style::new().red().bold()),
            };
            format!("{}", message.style(style))
        }
    };

    match message.level() {
        MessageLevel::Info => println!("{text}"),
        MessageLevel::Error => eprintln!("{text}"),
    }
}

pub fn print_report(report: &GenerationReport, config: &OutputConfig) -> serde_json::Result<()> {
    if config.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    print_message(&report.message(), config);
    for outcome in &report.artifacts {
        let style = match outcome.status {
            ArtifactStatus::Created | ArtifactStatus::Overwritten => {
                config.style(Style::new().green())
            }
            ArtifactStatus::Planned => config.style(Style::new().cyan()),
            ArtifactStatus::Skipped => config.style(Style::new().yellow()),
        };
        println!(
            "  {:<11} {}",
            outcome.status.to_string().style(style),
            outcome.path.display()
        );
    }
    Ok(())
}

pub fn print_inspection(inspection: &Inspection, config: &OutputConfig) -> serde_json::Result<()> {
    if config.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(inspection)?);
        return Ok(());
    }

    let heading = config.style(Style::new().bold());
    let dim = config.style(Style::new().dimmed());

    println!(
        "{} {}",
        inspection.class.qualified_name.style(heading),
        format!("({})", inspection.class.language).style(dim)
    );
    for field in &inspection.class.fields {
        println!("  {}: {}", field.name, field.type_text);
    }

    println!();
    let base_package = if inspection.base_package.is_empty() {
        "<none>"
    } else {
        inspection.base_package.as_str()
    };
    println!("{} {base_package}", "base package:".style(dim));
    for artifact in &inspection.artifacts {
        println!("  {}.{}", artifact.package, artifact.file_name.trim_end_matches(".java"));
    }
    Ok(())
}
