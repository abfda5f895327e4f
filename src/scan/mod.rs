//! Concurrent scan: shard workers and the coordinator.

pub mod coordinator;
pub mod shard;

pub use coordinator::scan_titles;
pub use shard::{run_shard, scan_step};
