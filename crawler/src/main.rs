use anyhow::{Context, Result};
use clap::Parser;
use crawler::{crawl, HttpFetcher};
use index::InvertedIndex;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Crawl the web breadth-first from a seed URL into a searchable index")]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(long)]
    seed: String,
    /// Maximum number of distinct URLs to visit
    #[arg(long, default_value_t = 100)]
    limit: usize,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// Path the index is saved to
    #[arg(long, default_value = "./index.json")]
    output: String,
    /// Continue from the index already at --output instead of starting empty
    #[arg(long, default_value_t = false)]
    resume: bool,
    /// User-Agent string sent with every request
    #[arg(long, default_value = "webdex-bot/0.1 (+https://example.com/bot)")]
    user_agent: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();

    let seed = Url::parse(&args.seed)
        .or_else(|_| Url::parse(&format!("https://{}", args.seed)))
        .with_context(|| format!("invalid seed URL: {}", args.seed))?;

    let mut index = if args.resume && Path::new(&args.output).exists() {
        let loaded = InvertedIndex::load(&args.output)?;
        tracing::info!(docs = loaded.doc_count(), output = %args.output, "resuming from saved index");
        loaded
    } else {
        InvertedIndex::new()
    };

    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs), &args.user_agent)
        .context("failed to build HTTP client")?;

    tracing::info!(%seed, limit = args.limit, timeout_secs = args.timeout_secs, "starting crawl");
    let stats = crawl(&fetcher, &mut index, seed, args.limit).await;
    tracing::info!(
        visited = stats.visited,
        indexed = stats.indexed,
        failed = stats.failed,
        pending = stats.pending,
        "crawl finished"
    );

    index.save(&args.output)?;
    tracing::info!(
        docs = index.doc_count(),
        words = index.word_count(),
        output = %args.output,
        "index saved"
    );
    Ok(())
}
