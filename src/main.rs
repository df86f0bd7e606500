use anyhow::{Context, Result};
use clap::Parser;
use kessel::client::SwapiClient;
use kessel::db::{Db, DbConfig};
use kessel::pipeline;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "kessel")]
#[command(about = "Load SWAPI character records into Postgres with cross-references resolved")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Base URL of the SWAPI instance
    #[arg(long, default_value = kessel::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of people fetched concurrently per chunk
    #[arg(long, default_value_t = kessel::config::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Cap the reported record count (for testing against a large API)
    #[arg(long)]
    limit: Option<u64>,
}

async fn run(cli: Cli) -> Result<()> {
    let start = Instant::now();

    let client = SwapiClient::new(&cli.base_url);
    let mut total = client
        .people_count()
        .await
        .context("Failed to query people count")?;
    if let Some(limit) = cli.limit {
        total = total.min(limit);
    }
    info!(total, "People reported by API");

    let db_config = DbConfig::from_env();
    let db = Arc::new(Db::connect(&db_config).await?);

    let pb = pipeline::make_progress_bar(total);
    let summary = pipeline::run(&client, db.clone(), total, cli.chunk_size, &pb).await;

    // Release the pool even when the run failed partway.
    match Arc::try_unwrap(db) {
        Ok(db) => db.close().await,
        Err(_) => error!("Database handle still shared at shutdown"),
    }
    let summary = summary?;

    let elapsed = start.elapsed();
    println!();
    println!("=== Summary ===");
    println!("Total time:        {:.2}s", elapsed.as_secs_f64());
    println!("People fetched:    {}", summary.people_fetched);
    println!("Batches inserted:  {}", summary.batches_inserted);
    println!("Rows written:      {}", summary.rows_written);
    println!();
    println!("Database populated.");

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .thread_name("kessel-worker")
        .enable_io()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to build runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cli)) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
