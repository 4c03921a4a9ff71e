mod config;
mod extract;
mod loader;
mod materialize;
mod render;
mod sequence;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use config::{ExtractPolicy, ImportConfig};
use sequence::ScheduledPost;

#[derive(Parser)]
#[command(name = "wp_importer", about = "WordPress export → Martes archive importer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import an export file: select, extract, sequence, write
    Run {
        /// Path to the WordPress XML export file
        file: PathBuf,
        /// Root of the markdown content tree
        #[arg(long, default_value = "./src/content/blog/Martes")]
        content_dir: PathBuf,
        /// Root of the public asset tree for hero images
        #[arg(long, default_value = "./public/Martes")]
        asset_dir: PathBuf,
    },
    /// Show what an import would produce, without writing anything
    Preview {
        /// Path to the WordPress XML export file
        file: PathBuf,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(1);
    });

    let result = match cli.command {
        Commands::Run {
            file,
            content_dir,
            asset_dir,
        } => {
            let config = ImportConfig {
                content_root: content_dir,
                asset_root: asset_dir,
                policy: ExtractPolicy::default(),
            };
            run_import(&file, config).await
        }
        Commands::Preview { file, limit } => preview(&file, limit),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

async fn run_import(file: &Path, config: ImportConfig) -> Result<()> {
    let scheduled = load_and_schedule(file, &config.policy)?;
    let years: BTreeSet<i32> = scheduled.iter().map(|p| p.year).collect();
    println!(
        "Importing {} posts across {} years...",
        scheduled.len(),
        years.len()
    );

    let stats = materialize::materialize_all(&config, &scheduled).await?;
    println!(
        "Import complete: {} documents written, {} images fetched, {} failures.",
        stats.written, stats.images, stats.failed
    );
    Ok(())
}

fn preview(file: &Path, limit: usize) -> Result<()> {
    let config = ImportConfig::default();
    let scheduled = load_and_schedule(file, &config.policy)?;

    println!(
        "{:>4} | {:<12} | {:<10} | {:>5} | {:<24} | {:<26}",
        "#", "File", "Date", "Asis", "Sede", "Hero"
    );
    println!("{}", "-".repeat(94));

    for post in scheduled.iter().take(limit) {
        let doc = render::render(post, &config);
        let hero = if doc.image_url.is_some() {
            truncate(&doc.hero_path, 26)
        } else {
            "-".to_string()
        };
        println!(
            "{:>4} | {:<12} | {:<10} | {:>5} | {:<24} | {:<26}",
            post.seq,
            doc.filename,
            extract::date::display_date(post.fields.published),
            post.fields.attendees.len(),
            truncate(&post.fields.venue, 24),
            hero,
        );
    }

    println!("\n{} posts would be imported.", scheduled.len());
    Ok(())
}

/// Loader → Selector → Extractor → Sequencer, shared by both commands.
/// Fatal when the file is unreadable, unparseable, or yields no usable post.
fn load_and_schedule(file: &Path, policy: &ExtractPolicy) -> Result<Vec<ScheduledPost>> {
    if !file.exists() {
        bail!("File not found: {}", file.display());
    }
    let xml = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records = loader::parse_export(&xml).context("Failed to parse export document")?;

    let posts = loader::select_published(records);
    if posts.is_empty() {
        bail!("No published posts found in {}", file.display());
    }

    let extracted: Vec<_> = posts
        .into_iter()
        .filter_map(|record| {
            let fields = extract::extract_all(&record, policy)?;
            Some((record, fields))
        })
        .collect();
    if extracted.is_empty() {
        bail!("No posts with a usable publication date");
    }

    Ok(sequence::schedule(extracted))
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

// ── Tests ──
