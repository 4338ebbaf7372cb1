//! telemetry/mod.rs
//! Unified telemetry module: counters, timers, snapshots and log setup.
//!
//! - Counters are plain integers merged on the coordinator thread, no atomics.
//! - Stage timers accumulate per-stage durations across workers.
//! - Snapshots are immutable and serializable for reporting.

pub mod counters;
pub mod timers;
pub mod snapshot;
pub mod logging;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
pub use logging::init_tracing;
