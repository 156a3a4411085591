mod catalog;
mod fetch;
mod library;
mod parser;
mod pipeline;
mod render;
mod settings;
mod verify;
mod writer;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};

use catalog::SkillJob;
use fetch::DocFetcher;
use library::Library;
use settings::Settings;

#[derive(Parser)]
#[command(name = "skillgen", about = "Generate SKILL.md files from Apple developer documentation")]
struct Cli {
    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Output root (overrides the settings file)
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// SwiftUI topic skills: overview, snippet, guidance and key APIs
    Swiftui {
        /// Max skills to generate (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Swift language, standard library and interop skills
    Swift {
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// UIKit, AppKit, WatchKit, visionOS and PencilKit skills
    Platform {
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Apple Intelligence skills
    Ai {
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Frontend design blueprints (no network)
    Frontend,
    /// Every catalog in one run
    All,
    /// Check generated skills for the required sections
    Verify,
    /// Parse a local DocC markdown file and print the result
    Parse {
        file: PathBuf,
        /// Max APIs per category in the printed table
        #[arg(long)]
        max: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = settings::load(cli.config.as_deref())?;
    if let Some(out) = cli.out {
        settings.output_dir = out;
    }
    let base = settings.base_url.clone();

    let result = match cli.command {
        Commands::Swiftui { limit } => {
            generate(limited(catalog::swiftui_jobs(&base), limit), &settings).await
        }
        Commands::Swift { limit } => {
            generate(limited(catalog::swift_jobs(&base), limit), &settings).await
        }
        Commands::Platform { limit } => {
            generate(limited(catalog::platform_jobs(&base), limit), &settings).await
        }
        Commands::Ai { limit } => {
            generate(limited(catalog::intelligence_jobs(&base), limit), &settings).await
        }
        Commands::Frontend => generate(catalog::frontend_jobs(), &settings).await,
        Commands::All => {
            let mut jobs = catalog::swiftui_jobs(&base);
            jobs.extend(catalog::swift_jobs(&base));
            jobs.extend(catalog::platform_jobs(&base));
            jobs.extend(catalog::intelligence_jobs(&base));
            jobs.extend(catalog::frontend_jobs());
            generate(jobs, &settings).await
        }
        Commands::Verify => {
            let report =
                verify::verify_tree(&settings.output_dir, &catalog::verification_roots())?;
            report.print(10);
            if report.passed() {
                Ok(())
            } else {
                Err(anyhow::anyhow!(
                    "{} skills failed verification",
                    report.failures.len()
                ))
            }
        }
        Commands::Parse { file, max } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {:?}", file))?;
            let doc = parser::parse(&raw);
            println!("{}", serde_json::to_string_pretty(&doc)?);

            let max = max.unwrap_or(settings.max_apis_per_category);
            let table = render::format_api_reference(&doc.topics, max);
            if !table.is_empty() {
                println!("\n{}", table);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

async fn generate(jobs: Vec<SkillJob>, settings: &Settings) -> anyhow::Result<()> {
    if jobs.is_empty() {
        println!("Nothing to generate.");
        return Ok(());
    }

    let library = Library::load(settings.library.as_deref())?;
    let fetcher = DocFetcher::new(
        &settings.user_agent,
        Duration::from_secs(settings.timeout_secs),
    )?;

    println!(
        "Generating {} skills into {}...",
        jobs.len(),
        settings.output_dir.display()
    );
    let stats = pipeline::generate(&fetcher, jobs, &library, settings).await?;
    stats.print();
    Ok(())
}

fn limited(jobs: Vec<SkillJob>, limit: Option<usize>) -> Vec<SkillJob> {
    match limit {
        Some(n) => jobs.into_iter().take(n).collect(),
        None => jobs,
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
