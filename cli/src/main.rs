//! exconv CLI - content-to-experience converter

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;

use exconv::detect::supported_content_types;
use exconv::{
    detect_content_type_from_path, ContentType, JsonFormat, Summary, TransformationEngine,
    TransformationKind,
};

#[derive(Parser)]
#[command(name = "exconv")]
#[command(version)]
#[command(about = "Turn markdown, JSON, HTML and text into interactive experience descriptors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a file into an experience descriptor
    #[command(alias = "t")]
    Transform {
        /// Transformation (e.g. story, viz, demo, testimonial)
        #[arg(value_name = "KIND")]
        kind: TransformationKind,

        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Content type (detected from the extension if not specified)
        #[arg(short = 't', long = "type", value_name = "TYPE", env = "EXCONV_CONTENT_TYPE")]
        content_type: Option<ContentType>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Fixed transformedAt timestamp (RFC 3339)
        #[arg(long, value_name = "TIME")]
        timestamp: Option<DateTime<Utc>>,
    },

    /// Show an HTML preview of a file
    Preview {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Content type (detected from the extension if not specified)
        #[arg(short = 't', long = "type", value_name = "TYPE", env = "EXCONV_CONTENT_TYPE")]
        content_type: Option<ContentType>,
    },

    /// Show the detected content type of a file
    Detect {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the built-in sample content
    Sample {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List available transformations
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Transform {
            kind,
            input,
            content_type,
            output,
            compact,
            timestamp,
        }) => cmd_transform(
            kind,
            &input,
            content_type,
            output.as_deref(),
            compact,
            timestamp,
        ),
        Some(Commands::Preview {
            input,
            content_type,
        }) => cmd_preview(&input, content_type),
        Some(Commands::Detect { input }) => {
            cmd_detect(&input);
            Ok(())
        }
        Some(Commands::Sample { output }) => cmd_sample(output.as_deref()),
        Some(Commands::List { json }) => cmd_list(json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: exconv transform <KIND> <FILE>".yellow());
            println!("       exconv --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_transform(
    kind: TransformationKind,
    input: &Path,
    content_type: Option<ContentType>,
    output: Option<&Path>,
    compact: bool,
    timestamp: Option<DateTime<Utc>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content_type = content_type.unwrap_or_else(|| detect_content_type_from_path(input));
    log::info!("transforming {} as {} ({})", input.display(), content_type, kind);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let mut engine = TransformationEngine::new().with_json_format(format);
    if let Some(ts) = timestamp {
        engine = engine.with_timestamp(ts);
    }

    let descriptor = engine.transform_file_as(input, kind, content_type)?;
    let json = engine.to_json(&descriptor)?;

    if output.is_some() {
        let summary = match &descriptor.metadata.summary {
            Summary::InteractiveElements(n) => format!("{} interactive elements", n),
            Summary::DataPoints(n) => format!("{} data points", n),
            Summary::ProductName(name) => format!("product {}", name),
            Summary::CustomerName(name) => format!("customer {}", name),
        };
        println!("{} {}", kind.label().cyan().bold(), summary.dimmed());
    }

    write_or_print(output, &json)
}

fn cmd_preview(
    input: &Path,
    content_type: Option<ContentType>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content_type = content_type.unwrap_or_else(|| detect_content_type_from_path(input));
    let content = fs::read_to_string(input)?;
    println!("{}", exconv::render::preview(&content, content_type));
    Ok(())
}

fn cmd_detect(input: &Path) {
    let content_type = detect_content_type_from_path(input);

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Content type".bold(), content_type);
    println!();
    println!("{}", "Supported transformations".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for kind in TransformationKind::ALL {
        let supported = supported_content_types(kind).contains(&content_type);
        let mark = if supported {
            "yes".green()
        } else {
            "no".red()
        };
        println!("  {:<24} {}", kind.operation(), mark);
    }
}

fn cmd_sample(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (content, _) = exconv::render::sample_content();
    write_or_print(output, content)
}

fn cmd_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let entries: Vec<serde_json::Value> = TransformationKind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "name": kind.operation(),
                    "type": kind.as_str(),
                    "label": kind.label(),
                    "contentTypes": supported_content_types(*kind),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Transformations".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for kind in TransformationKind::ALL {
        let types: Vec<&str> = supported_content_types(kind)
            .iter()
            .map(ContentType::as_str)
            .collect();
        println!(
            "  {:<24} {} {}",
            kind.operation().bold(),
            kind.label(),
            format!("[{}]", types.join(", ")).dimmed()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "exconv".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Content-to-experience converter");
    println!();
    println!("License: MIT");
}
