//! Crawler module: the concurrent crawl orchestrator
//!
//! Components, leaf-first:
//! - [`fetcher`]: HTTP GET with a fixed timeout, outcome classification
//! - [`parser`]: link extraction from anchor elements
//! - [`tracker`]: the pending-work counter driving completion detection
//! - [`worker`]: the fetch-classify-extract worker pool
//! - [`dispatcher`]: single-task deduplication, owner of the visited set
//! - [`collector`]: accumulates the dead-link result list
//! - [`coordinator`]: wiring, seeding, completion wait, ordered shutdown

mod collector;
mod coordinator;
mod dispatcher;
mod fetcher;
mod parser;
mod tracker;
mod worker;

pub use coordinator::crawl;
pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use parser::extract_links;
pub use tracker::PendingWork;
