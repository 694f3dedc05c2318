//! One-shot job search
//!
//! Runs a single search against the provider and prints the results,
//! the same pipeline the server runs behind `GET /jobs`.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use common::{JobBoard, JobResult, SearchFilters, build_query};
use search::{JobSearchService, ProviderConfig, SerpApiProvider};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "search", about = "Search the web for job postings")]
struct Cli {
    /// Job title to look for
    #[arg(long)]
    job_title: Option<String>,

    /// Where the job is located
    #[arg(long, default_value = "")]
    location: String,

    /// Companies to narrow the search to
    #[arg(long)]
    companies: Option<String>,

    /// Work type, e.g. remote or hybrid
    #[arg(long)]
    work_type: Option<String>,

    #[command(flatten)]
    provider: ProviderConfig,
}

impl Cli {
    fn filters(&self) -> SearchFilters {
        SearchFilters {
            job_title: self.job_title.clone(),
            location: self.location.clone(),
            companies: self.companies.clone(),
            work_type: self.work_type.clone(),
        }
    }
}

/// Per-board counts such as `LinkedIn 2, Indeed 1`, skipping boards with no hits.
fn board_breakdown(jobs: &[JobResult]) -> String {
    JobBoard::ALL
        .into_iter()
        .filter_map(|board| {
            let hits = jobs
                .iter()
                .filter(|job| JobBoard::classify(&job.url) == Some(board))
                .count();
            (hits > 0).then(|| format!("{board} {hits}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let filters = cli.filters();

    println!("🔍 {}\n", build_query(&filters));

    let provider = SerpApiProvider::new(cli.provider.clone());
    let service = JobSearchService::new(Arc::new(provider));
    let report = service.search(&filters).await?;

    if report.jobs.is_empty() {
        println!("No jobs found. Try adjusting your search criteria.");
        return Ok(());
    }

    for job in &report.jobs {
        let marker = if job.is_job_board() { "📋" } else { "🏢" };
        println!("{marker} {}\n   {}", job.title, job.url);
    }

    println!(
        "\n📊 {} results, {} from job boards",
        report.jobs.len(),
        report.job_board_count
    );
    if report.job_board_count > 0 {
        println!("   {}", board_breakdown(&report.jobs));
    }

    Ok(())
}
