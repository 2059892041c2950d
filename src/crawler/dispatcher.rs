//! Link dispatcher
//!
//! Single-task consumer of the discovered-link stream and sole owner of the
//! visited set. Every candidate URL passes through here, the seed included,
//! so the at-most-once visiting guarantee has exactly one enforcement point
//! and the set needs no lock.

use crate::crawler::tracker::PendingWork;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use url::Url;

/// Deduplicates discovered links and forwards novel ones to the job queue
///
/// A duplicate resolves its pending-work unit here; a novel link keeps its
/// unit, which the processing worker settles later. The loop ends either
/// when the discovered stream closes or when the pending-work counter hits
/// zero — at zero no in-flight message can exist, and returning drops the
/// job-queue sender, which is what lets the workers drain out and exit.
pub async fn dispatch_links(
    mut discovered: mpsc::Receiver<Url>,
    jobs: mpsc::UnboundedSender<Url>,
    pending: Arc<PendingWork>,
) {
    let mut visited: HashSet<String> = HashSet::new();

    loop {
        tokio::select! {
            candidate = discovered.recv() => {
                let Some(url) = candidate else { break };
                tracing::debug!("Processing {}", url);

                if !visited.insert(url.as_str().to_string()) {
                    pending.done();
                    continue;
                }

                if jobs.send(url).is_err() {
                    // Workers are gone; settle the unit so the crawl can end.
                    pending.done();
                }
            }
            _ = pending.wait() => break,
        }
    }

    tracing::debug!("Dispatcher exiting, {} URLs visited", visited.len());
}
