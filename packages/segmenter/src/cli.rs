//! Command-line interface for the segmenter.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{validate_wrap_width, PreamblePolicy, SegmenterConfig};
use crate::error::{Result, SegmenterError};
use crate::output::{save_output, OutputFormat};
use crate::record::{parse_params, AdvisoryRecord};
use crate::splitting::Segmenter;

/// Advisory Segmenter - Split generated pregnancy guidance into four sections.
#[derive(Parser)]
#[command(name = "advisory-segmenter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment a report and print its four sections.
    Segment {
        /// Report file (default: stdin, also with "-")
        file: Option<PathBuf>,

        /// Output format: text, json or yaml
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Wrap width for text output (default: SEGMENTER_WRAP_WIDTH or 80)
        #[arg(short, long)]
        wrap: Option<usize>,

        /// Text before the first header: discard or health
        #[arg(long)]
        preamble: Option<PreamblePolicy>,

        /// Do not treat whole-line bold text as a header
        #[arg(long)]
        no_bold_headings: bool,

        /// Print which tier produced the sections (to stderr)
        #[arg(long)]
        stage: bool,
    },

    /// Segment a report and emit a persistence record.
    Record {
        /// Report file (default: stdin, also with "-")
        file: Option<PathBuf>,

        /// Caller parameter as key=value, repeatable (e.g., age=29)
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Output format: json or yaml
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Segment {
            file,
            format,
            wrap,
            preamble,
            no_bold_headings,
            stage,
        } => {
            let config = build_config(wrap, preamble, no_bold_headings)?;
            segment_command(file.as_deref(), format, &config, stage)
        }
        Commands::Record {
            file,
            params,
            format,
            output,
        } => record_command(file.as_deref(), &params, format, output.as_deref()),
    }
}

/// Layer command-line flags over the environment configuration.
fn build_config(
    wrap: Option<usize>,
    preamble: Option<PreamblePolicy>,
    no_bold_headings: bool,
) -> Result<SegmenterConfig> {
    let mut config = SegmenterConfig::from_env()?;

    if let Some(width) = wrap {
        config.wrap_width = validate_wrap_width(width)?;
    }
    if let Some(policy) = preamble {
        config.preamble = policy;
    }
    if no_bold_headings {
        config.bold_headings = false;
    }

    Ok(config)
}

/// Read the report from a file, or from stdin when no file (or "-") is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Execute the segment command.
fn segment_command(
    file: Option<&Path>,
    format: OutputFormat,
    config: &SegmenterConfig,
    show_stage: bool,
) -> Result<()> {
    let raw = read_input(file)?;
    let segmenter = Segmenter::with_config(config.clone());
    let result = segmenter.segment_detailed(&raw);

    if show_stage {
        eprintln!(
            "{} {}",
            style("Stage:").bold(),
            style(result.stage.as_str()).cyan()
        );
    }

    let rendered = format.render_sections(&result.sections, config.wrap_width)?;
    print!("{rendered}");

    Ok(())
}

/// Execute the record command.
fn record_command(
    file: Option<&Path>,
    params: &[String],
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    if format == OutputFormat::Text {
        return Err(SegmenterError::InvalidFormat(format.to_string()));
    }

    // Validate parameters before reading a possibly large stdin
    let params = parse_params(params)?;
    let raw = read_input(file)?;

    let segmenter = Segmenter::with_config(SegmenterConfig::from_env()?);
    let record = AdvisoryRecord::from_report(&raw, params, &segmenter);
    let content = format.serialize(&record)?;

    match output {
        Some(path) => {
            let saved = save_output(&content, path)?;
            eprintln!(
                "{} {} ({})",
                style("Saved to:").green().bold(),
                saved.display(),
                style(record.stage.as_str()).cyan()
            );
        }
        None => print!("{content}"),
    }

    Ok(())
}
