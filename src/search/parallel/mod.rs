//! Parallel batch synthesis over many independent string sets.
//!
//! A synthesizer keeps no state between sets, so a batch is embarrassingly
//! parallel:
//! - the **coordinator** queues one job per set and collects results,
//! - **workers** each own a `Synthesizer` and drain the shared job queue,
//! - the **channels** are crossbeam MPMC queues, so no locking is needed.
//!
//! # Example
//!
//! ```ignore
//! use shortre::search::parallel::{ParallelConfig, synthesize_batch};
//!
//! let batch = synthesize_batch(&sets, &SynthConfig::default(), &ParallelConfig::default().with_workers(4));
//! for result in &batch.results {
//!     println!("{}", result.pattern);
//! }
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::{synthesize_batch, BatchResult};
