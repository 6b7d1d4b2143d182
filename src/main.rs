use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use insight_parser::parser::highlight::{tokenize, Span};
use insight_parser::parser::lines::{content_lines, Line, LineKind};
use insight_parser::{FlushPolicy, HeaderCatalog, InsightDocument, Settings};

#[derive(Parser)]
#[command(name = "insight_parser", about = "Structure AI performance reports into sections and insights")]
struct Cli {
    /// Settings file (default: ./insight.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON header catalog replacing the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Keep sections whose header has no content
    #[arg(long, global = true)]
    keep_empty: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse reports and print the structured documents as JSON
    Parse {
        /// Report files ("-" reads stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Pretty-print JSON
        #[arg(short, long)]
        pretty: bool,
    },
    /// Sections overview table
    Sections {
        file: PathBuf,
    },
    /// Print section lines with their classification and highlighted markers
    Show {
        file: PathBuf,
        /// Only this section (1-based)
        #[arg(short, long)]
        section: Option<usize>,
    },
    /// Print the active header catalog
    Catalog,
}

#[derive(Serialize)]
struct FileDocument {
    file: String,
    #[serde(flatten)]
    document: InsightDocument,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("loading settings")?;
    if let Some(path) = &cli.catalog {
        settings.catalog_path = Some(path.clone());
    }
    if cli.keep_empty {
        settings.flush_policy = FlushPolicy::Always;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let catalog = settings.catalog()?;
    let policy = settings.flush_policy;

    match cli.command {
        Commands::Parse { files, pretty } => {
            let docs = parse_files(&files, &catalog, policy)?;
            let json = if let [only] = docs.as_slice() {
                to_json(&only.document, pretty)?
            } else {
                to_json(&docs, pretty)?
            };
            println!("{}", json);
        }
        Commands::Sections { file } => {
            let text = read_input(&file)?;
            let doc = InsightDocument::parse(&text, &catalog, policy);
            if doc.is_empty() {
                println!("No sections found.");
                return Ok(());
            }

            println!(
                "{:>3} | {:<32} | {:<20} | {:<8} | {:>4} | {:<40}",
                "#", "Title", "Key", "Priority", "Tips", "Preview"
            );
            println!("{}", "-".repeat(122));
            for (i, v) in doc.sections.iter().enumerate() {
                let priority = v.priority.map_or("-", |p| p.as_str());
                println!(
                    "{:>3} | {:<32} | {:<20} | {:<8} | {:>4} | {:<40}",
                    i + 1,
                    truncate(&v.section.title, 32),
                    truncate(&v.section.key, 20),
                    priority,
                    v.tip_count,
                    truncate(v.preview.as_deref().unwrap_or(""), 40),
                );
            }
            println!("\n{} sections", doc.sections.len());
        }
        Commands::Show { file, section } => {
            let text = read_input(&file)?;
            let doc = InsightDocument::parse(&text, &catalog, policy);
            let total = doc.sections.len();
            if let Some(n) = section {
                if n == 0 || n > total {
                    bail!("section {} out of range (report has {} sections)", n, total);
                }
            }
            for (i, v) in doc.sections.iter().enumerate() {
                if section.is_some_and(|n| n != i + 1) {
                    continue;
                }
                println!("== {}/{} {} [{}]", i + 1, total, v.section.title, v.section.key);
                for line in content_lines(&v.section.content) {
                    println!("  {:<9} {}", line_label(&line), render_spans(&tokenize(line.text)));
                }
                if let Some(rating) = &v.rating {
                    println!("  grade     {}", rating);
                }
                println!();
            }
        }
        Commands::Catalog => {
            println!("{:<22} | {:<8} | {:<8} | {:<14}", "Key", "Color", "Priority", "Short name");
            println!("{}", "-".repeat(60));
            for h in catalog.iter() {
                println!(
                    "{:<22} | {:<8} | {:<8} | {:<14}",
                    h.key,
                    h.color,
                    h.priority.as_str(),
                    h.short_name
                );
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        info!("done in {}", format_duration(elapsed));
    }

    Ok(())
}

fn parse_files(
    files: &[PathBuf],
    catalog: &HeaderCatalog,
    policy: FlushPolicy,
) -> anyhow::Result<Vec<FileDocument>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let parsed = read_input(path).map(|text| FileDocument {
                file: path.display().to_string(),
                document: InsightDocument::parse(&text, catalog, policy),
            });
            pb.inc(1);
            parsed
        })
        .collect();
    pb.finish_and_clear();

    let mut docs = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(doc) => {
                if doc.document.is_empty() {
                    warn!(file = %doc.file, "no recognized section headers");
                }
                docs.push(doc);
            }
            Err(e) => warn!("skipping: {:#}", e),
        }
    }
    if docs.is_empty() {
        bail!("no readable reports");
    }
    info!(reports = docs.len(), "parsed");
    Ok(docs)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn line_label(line: &Line) -> &'static str {
    if line.is_recommendation() {
        return "advice";
    }
    match line.kind {
        LineKind::Bullet => "bullet",
        LineKind::Heading => "heading",
        LineKind::Paragraph => "paragraph",
    }
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|s| match s {
            Span::Text { text } => text.clone(),
            Span::Marker { text, tone } => format!("[{}:{}]", tone.as_str(), text),
        })
        .collect()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
