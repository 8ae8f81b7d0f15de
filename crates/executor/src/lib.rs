//! Executors for independent per-page work.
//!
//! Rendering one page never touches another, so a deck's pages can be mapped
//! over in parallel. Every executor here returns results in input order,
//! whatever order the work actually ran in.
//!
//! ## Available Executors
//!
//! - [`SyncExecutor`]: Sequential execution, no threading
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)

#[cfg(feature = "rayon")]
mod rayon_executor;
mod sync;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;
pub use sync::SyncExecutor;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Maps a function over a batch of work items, possibly in parallel.
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. The result at position `i` is `f(items[i])`.
    fn map_ordered<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Returns 1 for sequential executors, the worker count otherwise.
    fn parallelism(&self) -> usize;

    /// A human-readable name, for logging.
    fn name(&self) -> &'static str;
}

/// Executor selection as it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    Sync,
    Rayon,
}

impl Default for ExecutorKind {
    fn default() -> Self {
        if cfg!(feature = "rayon") {
            ExecutorKind::Rayon
        } else {
            ExecutorKind::Sync
        }
    }
}

/// A type-erased executor that wraps concrete executor implementations.
///
/// Since the `Executor` trait has generic methods, it cannot be used as a trait object
/// (`dyn Executor`). This enum holds the concrete types and delegates to them.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// Builds the requested executor. Without the `rayon` feature a rayon
    /// request degrades to sequential execution.
    pub fn from_kind(kind: ExecutorKind) -> Self {
        match kind {
            ExecutorKind::Sync => ExecutorImpl::Sync(SyncExecutor::new()),
            #[cfg(feature = "rayon")]
            ExecutorKind::Rayon => ExecutorImpl::Rayon(RayonExecutor::new()),
            #[cfg(not(feature = "rayon"))]
            ExecutorKind::Rayon => {
                log::warn!("Rayon executor requested but the `rayon` feature is disabled; running sequentially.");
                ExecutorImpl::Sync(SyncExecutor::new())
            }
        }
    }
}

impl Executor for ExecutorImpl {
    fn map_ordered<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.map_ordered(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.map_ordered(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        Self::from_kind(ExecutorKind::default())
    }
}
