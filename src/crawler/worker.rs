//! Crawl workers
//!
//! A fixed pool of identical workers pulls URLs from the shared job queue,
//! fetches and classifies each page, reports dead links to the collector,
//! and feeds discovered links back to the dispatcher. Workers exit when the
//! job queue is closed and drained.

use crate::crawler::fetcher::{fetch_url, FetchOutcome};
use crate::crawler::parser::extract_links;
use crate::crawler::tracker::PendingWork;
use crate::url::same_host;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::Mutex;
use url::Url;

/// Shared handles each worker operates with
#[derive(Clone)]
pub struct WorkerContext {
    /// Canonical crawl root, also the domain-scope boundary
    pub base: Url,
    pub client: Client,
    /// Shared job queue; locked only for the duration of one `recv`
    pub jobs: Arc<Mutex<mpsc::UnboundedReceiver<Url>>>,
    pub discovered: mpsc::Sender<Url>,
    pub dead: mpsc::Sender<Url>,
    pub pending: Arc<PendingWork>,
}

/// Worker loop: pull a job, process it, settle its pending-work unit
///
/// The `done()` after processing pairs with the `add(1)` performed when this
/// URL was produced. It runs on every path out of `process_page`, including
/// timeouts, so abandoned fetches still settle their accounting.
pub async fn run_worker(ctx: WorkerContext) {
    loop {
        let job = ctx.jobs.lock().await.recv().await;
        let Some(url) = job else {
            break;
        };
        process_page(&ctx, &url).await;
        ctx.pending.done();
    }
    tracing::debug!("Worker exiting, job queue closed");
}

/// Fetches one page and acts on the classified outcome
///
/// Dead-link reports and discovered links are side effects; the function
/// itself never fails. Pages outside the crawl's host are checked for
/// liveness but never expanded.
async fn process_page(ctx: &WorkerContext, url: &Url) {
    tracing::info!("Sending request to {}", url);

    match fetch_url(&ctx.client, url).await {
        FetchOutcome::TimedOut => {
            tracing::info!("Request timed out, skipping: {}", url);
        }

        FetchOutcome::NetworkError { error } => {
            tracing::info!("Found dead link: {} ({})", url, error);
            report_dead(ctx, url).await;
        }

        FetchOutcome::HttpError { status } => {
            tracing::info!("Found dead link: {} (HTTP {})", url, status);
            report_dead(ctx, url).await;
        }

        FetchOutcome::UnreadableBody { error } => {
            tracing::warn!("Could not read body of {}: {}", url, error);
        }

        FetchOutcome::Success { status, body } => {
            tracing::debug!("Request success: {} (HTTP {})", url, status);

            if !same_host(url, &ctx.base) {
                tracing::info!("Not following offsite page: {}", url);
                return;
            }

            let links = extract_links(&body, &ctx.base);
            tracing::debug!("Extracted {} links from {}", links.len(), url);

            // Each produced link is counted before it is sent; the unit is
            // settled by the dispatcher (duplicate) or a worker (processed).
            ctx.pending.add(links.len());
            for link in links {
                if ctx.discovered.send(link).await.is_err() {
                    ctx.pending.done();
                }
            }
        }
    }
}

async fn report_dead(ctx: &WorkerContext, url: &Url) {
    if ctx.dead.send(url.clone()).await.is_err() {
        tracing::warn!("Dead-link stream closed, dropping report for {}", url);
    }
}
