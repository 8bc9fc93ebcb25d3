//! ungdoc CLI - document JSON conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ungdoc::{
    convert_from_store, parse_file, CleanupPreset, ConvertOptions, DirectoryStore, JsonFormat,
    OutputFormat, RenderOptions,
};

#[derive(Parser)]
#[command(name = "ungdoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Google Docs document JSON to Markdown, text, and JSON", long_about = None)]
struct Cli {
    /// Input document JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Text cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Text emitted for a table of contents
        #[arg(long, value_name = "TEXT")]
        toc: Option<String>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Convert a document to plain text
    Text {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Convert a document to Markdown wrapped in JSON
    Json {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Include extraction statistics
        #[arg(long)]
        stats: bool,
    },

    /// Show document information
    Info {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert every document in a directory
    Batch {
        /// Directory of `<id>.json` documents
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: FormatArg,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup
    Standard,
    /// Aggressive cleanup (for LLM training)
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Markdown (.md)
    Markdown,
    /// Plain text (.txt)
    Text,
    /// JSON (.json)
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Markdown {
            input,
            output,
            frontmatter,
            toc,
            cleanup,
        }) => cmd_markdown(&input, output.as_deref(), frontmatter, toc, cleanup),
        Some(Commands::Text {
            input,
            output,
            cleanup,
        }) => cmd_text(&input, output.as_deref(), cleanup),
        Some(Commands::Json {
            input,
            output,
            compact,
            stats,
        }) => cmd_json(&input, output.as_deref(), compact, stats),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Batch {
            input,
            output,
            format,
            cleanup,
        }) => cmd_batch(&input, output.as_deref(), format, cleanup),
        None => {
            // Default behavior: Markdown if input is provided
            if let Some(input) = cli.input {
                cmd_markdown(&input, cli.output.as_deref(), false, None, cli.cleanup)
            } else {
                println!("{}", "Usage: ungdoc <FILE> [-o OUTPUT]".yellow());
                println!("       ungdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn render_options(cleanup: Option<CleanupLevel>) -> RenderOptions {
    let options = RenderOptions::new();
    match cleanup {
        Some(level) => options.with_cleanup_preset(level.into()),
        None => options,
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
    toc: Option<String>,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let mut options = render_options(cleanup).with_frontmatter(frontmatter);
    if let Some(placeholder) = toc {
        options = options.with_toc_placeholder(placeholder);
    }

    let converted = ungdoc::render::to_markdown(&doc, &options);
    write_output(output, &converted.content)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let converted = ungdoc::render::to_text(&doc, &render_options(cleanup));
    write_output(output, &converted.content)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let options = ConvertOptions::new()
        .with_format(OutputFormat::Json)
        .with_json_format(format)
        .with_stats(stats);
    let result = ungdoc::convert_document(&doc, &options)?;

    write_output(output, &result.content)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let rendered = ungdoc::render::to_markdown_with_stats(&doc, &RenderOptions::default());
    let stats = &rendered.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), doc.title);
    if let Some(ref id) = doc.document_id {
        println!("{}: {}", "Document ID".bold(), id);
    }
    println!("{}: {}", "Elements".bold(), doc.content().len());
    println!("{}: {}", "Lists".bold(), doc.lists.len());
    println!("{}: {}", "Inline objects".bold(), doc.inline_objects.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Equations".bold(), stats.equation_count);
    println!("{}: {}", "Footnotes".bold(), stats.footnote_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    format: FormatArg,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = DirectoryStore::new(input);
    let ids = store.list_ids()?;

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let name = input.file_name().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", name))
    });
    fs::create_dir_all(&output_dir)?;

    let format: OutputFormat = format.into();
    let options = ConvertOptions::new()
        .with_format(format)
        .with_render_options(render_options(cleanup));

    let pb = ProgressBar::new(ids.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut failed = Vec::new();
    for id in &ids {
        pb.set_message(id.clone());
        match convert_from_store(&store, id, &options) {
            Ok(result) => {
                let path = output_dir.join(format!("{}.{}", id, format.extension()));
                fs::write(&path, &result.content)?;
            }
            Err(e) => {
                log::warn!("failed to convert {}: {}", id, e);
                failed.push((id.clone(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} documents converted to {}",
        "Done!".green().bold(),
        ids.len() - failed.len(),
        ids.len(),
        output_dir.display()
    );
    for (id, e) in &failed {
        println!("  {} {}: {}", "✗".red(), id, e);
    }

    Ok(())
}
