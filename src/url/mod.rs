//! URL handling module for linkrot
//!
//! This module provides URL canonicalization (the uniqueness key for
//! visitation) and host comparison for domain confinement.

mod canonical;
mod domain;

pub use canonical::canonicalize;
pub use domain::same_host;
