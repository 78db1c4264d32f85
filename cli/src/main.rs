//! undocx CLI - DOCX content extraction tool

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undocx::detect::validate_upload;
use undocx::{
    analyze_structure, convert_many, extract_plain_text, extract_plain_text_with_tables,
    render_html, ConvertOptions, Document, JsonFormat, OutputFormat,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "undocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract DOCX content to plain text and structural HTML", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX to plain text
    Text {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Append tables after the paragraphs
        #[arg(short, long)]
        tables: bool,
    },

    /// Convert DOCX to structural HTML
    Html {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump the parsed document model as JSON
    Json {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document structure and font statistics
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert several DOCX files in parallel
    Batch {
        /// Input DOCX files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: BatchFormat,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BatchFormat {
    /// Plain text of the paragraphs
    Text,
    /// Plain text followed by the tables
    Tables,
    /// Structural HTML
    Html,
    /// Parsed model as JSON
    Json,
}

impl From<BatchFormat> for OutputFormat {
    fn from(format: BatchFormat) -> Self {
        match format {
            BatchFormat::Text => OutputFormat::Text,
            BatchFormat::Tables => OutputFormat::TextWithTables,
            BatchFormat::Html => OutputFormat::Html,
            BatchFormat::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(level: Option<LogLevel>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level.into());
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")),
    };
    builder.format_timestamp_secs().init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            tables,
        }) => cmd_text(&input, output.as_deref(), tables),
        Some(Commands::Html { input, output }) => cmd_html(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Batch {
            inputs,
            output,
            format,
        }) => cmd_batch(&inputs, &output, format),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: plain text if input is provided
            if let Some(input) = cli.input {
                cmd_text(&input, cli.output.as_deref(), false)
            } else {
                println!("{}", "Usage: undocx <FILE> [OUTPUT]".yellow());
                println!("       undocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read, validate and parse an input file.
fn load(input: &Path) -> CliResult<Document> {
    let data = fs::read(input)?;
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    validate_upload(&name, &data)?;

    log::info!("Processing {} ({} bytes)", input.display(), data.len());
    let doc = undocx::parse_bytes(&data).map_err(undocx::Error::into_conversion)?;
    Ok(doc)
}

fn emit(content: &str, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>, tables: bool) -> CliResult<()> {
    let doc = load(input)?;
    let text = if tables {
        extract_plain_text_with_tables(&doc)
    } else {
        extract_plain_text(&doc)
    };
    log::info!(
        "Converted {}: {} characters",
        input.display(),
        text.chars().count()
    );
    emit(&text, output)
}

fn cmd_html(input: &Path, output: Option<&Path>) -> CliResult<()> {
    let doc = load(input)?;
    let html = render_html(&doc);
    log::info!(
        "Rendered {}: {} characters",
        input.display(),
        html.chars().count()
    );
    emit(&html, output)
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool) -> CliResult<()> {
    let doc = load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = undocx::render::to_json(&doc, format)?;
    emit(&json, output)
}

fn cmd_info(input: &Path, json: bool) -> CliResult<()> {
    let doc = load(input)?;
    let summary = analyze_structure(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Paragraphs".bold(), summary.paragraph_count);
    println!("{}: {}", "Headings".bold(), summary.heading_count);
    println!("{}: {}", "Tables".bold(), summary.table_count);

    println!();
    println!("{}", "Font Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let fonts = &summary.font_stats;
    if fonts.is_empty() {
        println!(
            "{}: {}pt (default, no sized runs)",
            "Baseline".bold(),
            fonts.baseline
        );
    } else {
        println!("{}: {}pt", "Baseline".bold(), fonts.baseline);
        println!("{}: {}pt", "Smallest".bold(), fonts.min);
        println!("{}: {}pt", "Largest".bold(), fonts.max);
        println!("{}: {}", "Sized runs".bold(), fonts.sizes.len());
    }

    let text = extract_plain_text(&doc);
    println!();
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    Ok(())
}

fn cmd_batch(inputs: &[PathBuf], output_dir: &Path, format: BatchFormat) -> CliResult<()> {
    fs::create_dir_all(output_dir)?;

    let format: OutputFormat = format.into();
    let options = ConvertOptions::new().with_format(format);

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Converting...");
    let results = convert_many(inputs, &options);

    let mut failures = 0;
    let mut taken = HashSet::new();
    for (path, result) in results {
        match result {
            Ok(converted) => {
                let target = batch_target(output_dir, &path, format.extension(), &mut taken);
                fs::write(&target, &converted.content)?;
                pb.println(format!("{} {}", "Converted".green(), target.display()));
            }
            Err(e) => {
                failures += 1;
                pb.println(format!("{} {}: {}", "Failed".red(), path.display(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} converted, {} failed",
        "Done!".green().bold(),
        inputs.len() - failures,
        failures
    );

    if failures > 0 {
        return Err(format!("{} of {} files failed", failures, inputs.len()).into());
    }
    Ok(())
}

/// Output path for one batch input; repeated stems get a `-N` suffix.
fn batch_target(
    output_dir: &Path,
    input: &Path,
    extension: &str,
    taken: &mut HashSet<PathBuf>,
) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let mut target = output_dir.join(format!("{}.{}", stem, extension));
    let mut suffix = 2;
    while !taken.insert(target.clone()) {
        target = output_dir.join(format!("{}-{}.{}", stem, suffix, extension));
        suffix += 1;
    }
    if suffix > 2 {
        log::warn!(
            "Output name for {} already used, writing {}",
            input.display(),
            target.display()
        );
    }
    target
}

fn cmd_version() {
    println!("{} {}", "undocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX content extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/undocx".dimmed());
    println!("License: MIT");
}
