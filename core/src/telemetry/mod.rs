//! telemetry/mod.rs
//! Latency samples, byte counters, and immutable benchmark snapshots.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
