//! unlayout CLI - layout analysis reconstruction tool

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unlayout::{
    build_pages, detect, AnalyzeResult, BuildOptions, DocumentPage, ExtractionStats, JsonFormat,
    RenderOptions, Unlayout,
};

#[derive(Parser)]
#[command(name = "unlayout")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Rebuild layout analysis results into Markdown, text, and JSON",
    long_about = None
)]
struct Cli {
    /// Input analysis result (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    build: BuildArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags controlling document reconstruction.
#[derive(Args, Clone, Default)]
struct BuildArgs {
    /// Repair malformed tables instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    /// Reject tables without column headers
    #[arg(long, global = true)]
    strict_headers: bool,

    /// Normalize text (Unicode NFC, trimmed)
    #[arg(long, global = true)]
    normalize: bool,
}

impl BuildArgs {
    fn options(&self) -> BuildOptions {
        let mut options = BuildOptions::new().with_normalized_text(self.normalize);
        if self.lenient {
            options = options.lenient();
        }
        if self.strict_headers {
            options = options.strict_headers();
        }
        options
    }

    fn builder(&self) -> Unlayout {
        let mut builder = Unlayout::new();
        if self.lenient {
            builder = builder.lenient();
        }
        if self.strict_headers {
            builder = builder.strict_headers();
        }
        if self.normalize {
            builder = builder.normalize();
        }
        builder
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an analysis result to all formats (JSON, Markdown, text)
    Convert {
        /// Input analysis result (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input analysis result (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,

        /// Keep page headers and footers as HTML comments
        #[arg(long)]
        page_furniture: bool,

        /// Leave footnotes out
        #[arg(long)]
        no_footnotes: bool,
    },

    /// Convert to plain text
    Text {
        /// Input analysis result (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Leave footnotes out
        #[arg(long)]
        no_footnotes: bool,
    },

    /// Convert to the rebuilt document JSON
    Json {
        /// Input analysis result (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show analysis and document information
    Info {
        /// Input analysis result (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rebuild many analysis results into Markdown and JSON
    Batch {
        /// Input analysis results (JSON)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "unlayout_output")]
        output: PathBuf,

        /// Build one document at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let build = cli.build.clone();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref(), &build),
        Some(Commands::Markdown {
            input,
            output,
            max_heading,
            page_furniture,
            no_footnotes,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            &build,
            max_heading,
            page_furniture,
            no_footnotes,
        ),
        Some(Commands::Text {
            input,
            output,
            no_footnotes,
        }) => cmd_text(&input, output.as_deref(), &build, no_footnotes),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), &build, compact),
        Some(Commands::Info { input, json }) => cmd_info(&input, &build, json),
        Some(Commands::Batch {
            inputs,
            output,
            sequential,
        }) => cmd_batch(&inputs, &output, &build, sequential),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &build)
            } else {
                println!("{}", "Usage: unlayout <FILE> [OUTPUT]".yellow());
                println!("       unlayout --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("#>-")
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

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    build: &BuildArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(progress_style());

    pb.set_message("Rebuilding document...");
    let result = build.builder().parse(input)?;
    if result.is_empty() {
        println!("{}", "Analysis result has no paragraphs or tables".yellow());
    }
    pb.inc(1);

    pb.set_message("Generating JSON...");
    fs::write(
        output_dir.join("layout.json"),
        result.to_json(JsonFormat::Pretty)?,
    )?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    fs::write(output_dir.join("layout.md"), result.to_markdown()?)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    fs::write(output_dir.join("layout.txt"), result.to_text()?)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} layout.json", "├─".dimmed());
    println!("  {} layout.md", "├─".dimmed());
    println!("  {} layout.txt", "└─".dimmed());

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    build: &BuildArgs,
    max_heading: u8,
    page_furniture: bool,
    no_footnotes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = build.builder().with_max_heading(max_heading);
    if page_furniture {
        builder = builder.with_page_furniture();
    }
    if no_footnotes {
        builder = builder.without_footnotes();
    }

    let markdown = builder.parse(input)?.to_markdown()?;
    write_or_print(output, &markdown)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    build: &BuildArgs,
    no_footnotes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = build.builder();
    if no_footnotes {
        builder = builder.without_footnotes();
    }

    let text = builder.parse(input)?.to_text()?;
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    build: &BuildArgs,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = build.builder().parse(input)?.to_json(format)?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path, build: &BuildArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let payload = detect::decode_path(input)?;
    let page = unlayout::build_page(&payload.result, &build.options())?;
    let stats = page
        .as_ref()
        .map(ExtractionStats::from_page)
        .unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let result = &payload.result;

    println!("{}", "Analysis Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Payload".bold(), payload.kind);
    if let Some(status) = payload.status {
        println!("{}: {}", "Status".bold(), status);
    }
    if let Some(created) = payload.created {
        println!("{}: {}", "Created".bold(), created.to_rfc3339());
    }
    if let Some(updated) = payload.last_updated {
        println!("{}: {}", "Updated".bold(), updated.to_rfc3339());
    }
    if let Some(duration) = payload.duration {
        let ms = duration.num_milliseconds();
        println!("{}: {:.1}s", "Duration".bold(), ms as f64 / 1000.0);
    }
    if let Some(ref model) = result.model_id {
        println!("{}: {}", "Model".bold(), model);
    }
    if let Some(ref version) = result.api_version {
        println!("{}: {}", "API Version".bold(), version);
    }
    println!("{}: {}", "Pages".bold(), result.page_count());
    println!("{}: {}", "Paragraphs".bold(), result.paragraphs.len());
    println!("{}: {}", "Sections".bold(), result.sections.len());
    println!("{}: {}", "Tables".bold(), result.tables.len());

    println!();
    println!("{}", "Document Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = page.as_ref().map(DocumentPage::plain_text).unwrap_or_default();
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Footnotes".bold(), stats.footnote_count);
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.len());

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: &Path,
    build: &BuildArgs,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(progress_style());
    pb.set_message("Loading...");

    let mut loaded: Vec<&PathBuf> = Vec::with_capacity(inputs.len());
    let mut results: Vec<AnalyzeResult> = Vec::with_capacity(inputs.len());
    let mut failed = 0usize;
    for input in inputs {
        match unlayout::load_file(input) {
            Ok(result) => {
                loaded.push(input);
                results.push(result);
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "Skipped".yellow(), input.display(), e));
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.set_message("Rebuilding...");
    let options = build.options().with_parallel(!sequential);
    let pages = build_pages(&results, &options);

    let render_options = RenderOptions::default();
    let mut written = 0usize;
    let mut used = HashSet::new();
    for (input, page) in loaded.iter().zip(pages) {
        match page {
            Ok(Some(page)) => {
                let stem = unique_stem(input, &mut used);
                if Some(stem.as_str()) != input.file_stem().and_then(|s| s.to_str()) {
                    pb.println(format!(
                        "{} {}: written as {}.md",
                        "Renamed".yellow(),
                        input.display(),
                        stem
                    ));
                }
                let markdown = unlayout::render::to_markdown(&page, &render_options)?;
                let json = unlayout::render::to_json(&page, JsonFormat::Pretty)?;
                fs::write(output.join(format!("{}.md", stem)), markdown)?;
                fs::write(output.join(format!("{}.json", stem)), json)?;
                written += 1;
            }
            Ok(None) => {
                pb.println(format!("{} {}: empty result", "Skipped".yellow(), input.display()));
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
                failed += 1;
            }
        }
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} written, {} failed ({})",
        "Done!".green().bold(),
        written,
        failed,
        output.display()
    );

    Ok(())
}

/// Output file stem for a batch input, unique within one run.
fn unique_stem(input: &Path, used: &mut HashSet<String>) -> String {
    let stem = input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    if used.insert(stem.clone()) {
        return stem;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}", stem, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn cmd_version() {
    println!("{} {}", "unlayout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Layout analysis reconstruction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unlayout".dimmed());
    println!("License: MIT");
}
