//! Dead-link collector
//!
//! Single-task consumer of the dead-link stream. No deduplication: each URL
//! is visited at most once, so it can be classified dead at most once.

use tokio::sync::mpsc;
use url::Url;

/// Accumulates dead links until the stream closes, then returns the list
///
/// Order reflects fetch completion order across workers and is therefore
/// non-deterministic.
pub async fn collect_dead_links(mut dead: mpsc::Receiver<Url>) -> Vec<String> {
    let mut dead_links = Vec::new();
    while let Some(url) = dead.recv().await {
        dead_links.push(url.as_str().to_string());
    }
    dead_links
}
