//! Dispatch coordination for filecut.
//!
//! This module exposes the public entry points. Internally:
//! - `config`: validated, serde-loadable options
//! - `collect`: index-addressed result slots
//! - `registry`: outstanding worker handles
//! - `coordinator`: planning, dispatch, collection, failure handling
//! - `task`: the future handed back to the caller

pub mod config;
pub mod collect;
pub mod registry;
pub mod coordinator;
pub mod task;

pub use config::CutOptions;
pub use collect::{ResultSlots, SlotWrite};
pub use registry::WorkerRegistry;
pub use coordinator::{cut_file, cut_file_blocking, cut_file_with_telemetry};
pub use task::{CutOutcome, CutTask};
