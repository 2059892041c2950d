//! Pending-work counter for crawl completion detection
//!
//! The crawl is finished exactly when every produced link has been resolved:
//! either processed by a worker, or dropped by the dispatcher as a duplicate.
//! There is no depth limit and no "no more links possible" heuristic — the
//! counter reaching zero is the only termination signal.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Counter of produced-but-unresolved link units
///
/// Every path that produces a unit (the seed, and each link a worker pushes
/// onto the discovered stream) calls [`add`](Self::add) strictly before
/// sending it. Every path that resolves a unit (a worker finishing a page,
/// the dispatcher dropping a duplicate) calls [`done`](Self::done) exactly
/// once. The counter never goes negative: a unit cannot be resolved before
/// it was produced.
#[derive(Debug, Default)]
pub struct PendingWork {
    count: AtomicUsize,
    zero: Notify,
}

impl PendingWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `n` newly produced units
    pub fn add(&self, n: usize) {
        self.count.fetch_add(n, Ordering::SeqCst);
    }

    /// Records one resolved unit, waking waiters on the zero transition
    pub fn done(&self) {
        let previous = self.count.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "done() without matching add()");
        if previous == 1 {
            self.zero.notify_waiters();
        }
    }

    /// Current number of unresolved units
    pub fn outstanding(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Waits until the counter reaches zero
    ///
    /// The notified future is created before the counter is checked, so a
    /// `done()` racing with this call cannot be missed. Safe for multiple
    /// concurrent waiters.
    pub async fn wait(&self) {
        loop {
            let notified = self.zero.notified();
            if self.count.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}
