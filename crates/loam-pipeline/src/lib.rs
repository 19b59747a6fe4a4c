//! The demand-driven fill pipeline: a compressed chunk cache and the
//! single-threaded scheduler that paces cache-or-synthesis work.

pub mod cache;
pub mod request;
pub mod scheduler;

#[cfg(test)]
mod pipeline_tests;

pub use cache::{CacheError, ChunkCache};
pub use request::{ChunkId, FillRequest};
pub use scheduler::{ChunkEvents, ChunkSink, FillScheduler, Resolution, TickOutcome};
