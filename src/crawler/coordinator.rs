//! Crawl coordinator - main crawl orchestration logic
//!
//! Wires the worker pool, dispatcher, and collector together, seeds the
//! first unit of work, waits for the pending-work counter to reach zero,
//! and performs ordered shutdown.
//!
//! Shutdown rides on channel-closure-on-drop: when the counter hits zero
//! the dispatcher returns and drops the job-queue sender; the workers see
//! the queue closed and exit, dropping their stream senders; the discovered
//! and dead streams close; the collector drains and hands back the result
//! list. Nothing blocks on a channel whose producers are still alive, so
//! the order is deadlock-free.

use crate::config::Config;
use crate::crawler::collector::collect_dead_links;
use crate::crawler::dispatcher::dispatch_links;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::tracker::PendingWork;
use crate::crawler::worker::{run_worker, WorkerContext};
use crate::url::canonicalize;
use crate::{ConfigError, LinkrotError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Crawls a site starting at `seed` and returns every dead link found
///
/// The seed must be an absolute URL; it is canonicalized and used both as
/// the crawl root and as the domain-scope boundary. Per-page failures never
/// surface here — they become entries in the result list. The only error
/// paths are configuration-level: an unparseable or relative seed, a zero
/// worker count, or a client build failure, all raised before any task is
/// spawned.
///
/// # Example
///
/// ```no_run
/// use linkrot::config::Config;
///
/// # async fn example() -> linkrot::Result<()> {
/// let dead_links = linkrot::crawl(&Config::default(), "https://example.com").await?;
/// for link in &dead_links {
///     println!("{link}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, seed: &str) -> Result<Vec<String>, LinkrotError> {
    let base = canonicalize(seed, None).map_err(|source| ConfigError::InvalidSeed {
        url: seed.to_string(),
        source,
    })?;

    if config.crawler.workers == 0 {
        return Err(ConfigError::Validation("workers must be at least 1".to_string()).into());
    }

    let client = build_http_client(config.crawler.request_timeout_secs)?;
    let capacity = config.crawler.channel_capacity;

    // The job queue is unbounded so the dispatcher can always forward
    // without blocking, which keeps it draining the discovered stream no
    // matter how bursty per-page fan-out gets. Concurrency stays capped by
    // the worker count; only the backlog is unbounded.
    let (jobs_tx, jobs_rx) = mpsc::unbounded_channel();
    let (discovered_tx, discovered_rx) = mpsc::channel(capacity);
    let (dead_tx, dead_rx) = mpsc::channel(capacity);
    let pending = Arc::new(PendingWork::new());

    let collector = tokio::spawn(collect_dead_links(dead_rx));

    let jobs_rx = Arc::new(Mutex::new(jobs_rx));
    let mut workers = JoinSet::new();
    for _ in 0..config.crawler.workers {
        workers.spawn(run_worker(WorkerContext {
            base: base.clone(),
            client: client.clone(),
            jobs: jobs_rx.clone(),
            discovered: discovered_tx.clone(),
            dead: dead_tx.clone(),
            pending: pending.clone(),
        }));
    }
    drop(dead_tx);

    // Seed one unit of pending work before the dispatcher starts, so the
    // counter cannot be observed at zero until the seed is resolved.
    pending.add(1);
    let dispatcher = tokio::spawn(dispatch_links(discovered_rx, jobs_tx, pending.clone()));

    // The seed goes through the dispatcher like any other link, so the
    // visited-set check applies uniformly.
    if discovered_tx.send(base.clone()).await.is_err() {
        pending.done();
    }
    drop(discovered_tx);

    tracing::info!(
        "Crawl started at {} with {} workers",
        base,
        config.crawler.workers
    );

    pending.wait().await;
    tracing::info!("Done crawling, shutting down");

    dispatcher.await?;
    while let Some(result) = workers.join_next().await {
        result?;
    }
    let dead_links = collector.await?;

    tracing::info!("Crawl complete, {} dead links found", dead_links.len());
    Ok(dead_links)
}
