use crate::client::SwapiClient;
use crate::db::PeopleSink;
use crate::resolve;
use crate::stats::RunStats;
use anyhow::{bail, Context, Result};
use futures::future::try_join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub people_fetched: u64,
    pub batches_inserted: u64,
    pub rows_written: u64,
}

/// Consecutive id chunks covering `1` up to but not including `total`,
/// `chunk_size` ids each. The listing `count` is treated as an exclusive
/// upper bound, mirroring the range the live loader has always walked.
pub fn id_chunks(total: u64, chunk_size: usize) -> Vec<Vec<u64>> {
    (1..total)
        .collect::<Vec<_>>()
        .chunks(chunk_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Drive the whole load: fetch each chunk's people concurrently, then hand
/// the chunk to a background flatten-and-insert task. Insert tasks are owned
/// by the pipeline through a task set and drained before returning, with
/// every failure counted and surfaced rather than dropped.
///
/// A failing fetch aborts the run; the chunk it belonged to is never
/// partially inserted.
pub async fn run(
    client: &SwapiClient,
    sink: Arc<dyn PeopleSink>,
    total: u64,
    chunk_size: usize,
    pb: &ProgressBar,
) -> Result<RunSummary> {
    let stats = Arc::new(RunStats::new());
    let mut inserts = FuturesUnordered::new();
    let mut fetch_error: Option<anyhow::Error> = None;

    for chunk in id_chunks(total, chunk_size) {
        let first_id = chunk[0];
        let fetches = chunk.iter().map(|id| client.fetch_person(*id));
        let batch = match try_join_all(fetches).await {
            Ok(batch) => batch,
            Err(e) => {
                // Stop dispatching, but fall through to the drain below so
                // the results of already-running insert tasks are still
                // observed before the run reports the fetch failure.
                fetch_error =
                    Some(e.context(format!("Fetch chunk starting at id {first_id} failed")));
                break;
            }
        };
        stats.add_people_fetched(batch.len() as u64);
        debug!(first_id, len = batch.len(), "Chunk fetched");

        let client = client.clone();
        let sink = sink.clone();
        let stats = stats.clone();
        stats.inc_batches_dispatched();
        inserts.push(tokio::spawn(async move {
            let rows = resolve::flatten_batch(&client, &batch).await?;
            let written = rows.len() as u64;
            sink.insert_people(rows).await?;
            stats.inc_batches_inserted();
            stats.add_rows_written(written);
            Ok::<u64, anyhow::Error>(first_id)
        }));

        // Progress advances at dispatch time, so it can run ahead of what
        // is actually committed until the drain below catches up.
        pb.inc(chunk.len() as u64);
    }

    while let Some(join_result) = inserts.next().await {
        match join_result.context("Insert task panicked")? {
            Ok(first_id) => debug!(first_id, "Insert batch committed"),
            Err(e) => {
                stats.inc_batches_failed();
                warn!(error = %e, "Insert batch failed");
            }
        }
    }

    if let Some(e) = fetch_error {
        return Err(e);
    }

    pb.set_position(total);
    pb.finish_with_message("done");

    if stats.batches_failed() > 0 {
        bail!(
            "{} of {} insert batches failed",
            stats.batches_failed(),
            stats.batches_dispatched()
        );
    }

    info!(
        people = stats.people_fetched(),
        batches = stats.batches_inserted(),
        "Run complete"
    );

    Ok(RunSummary {
        people_fetched: stats.people_fetched(),
        batches_inserted: stats.batches_inserted(),
        rows_written: stats.rows_written(),
    })
}

pub fn make_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} People [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
