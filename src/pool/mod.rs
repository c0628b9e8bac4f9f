//! Manually managed memory block pooling.
//!
//! This module provides the pool [`Manager`], which hands out byte buffers
//! backed by reusable power-of-two-sized blocks, plus a lazily-initialized
//! process-wide default pool for callers that don't need isolated instances.

mod block;
mod global;
mod manager;
mod report;

pub use block::Block;
pub use global::{acquire, global_pool, release, report};
pub use manager::{Manager, PoolStats};
pub use report::{ClassReport, PoolReport};
