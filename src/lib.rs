pub mod config;
pub mod error;
pub mod pool;

pub use config::PoolConfig;
pub use error::{Error, Result};
pub use pool::{
    acquire, global_pool, release, report, Block, ClassReport, Manager, PoolReport, PoolStats,
};
