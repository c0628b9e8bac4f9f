use crate::error::{Error, Result};

/// Smallest block size the pool will create by default. Managing blocks below
/// this granularity individually costs more than it saves.
pub const DEFAULT_MIN_BLOCK_SIZE: usize = 1024;

/// Default number of power-of-two size classes. With a 1 KiB minimum this
/// covers requests up to 1 GiB.
pub const DEFAULT_CLASS_COUNT: usize = 21;

/// Sizing configuration for a pool [`Manager`](crate::pool::Manager).
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Smallest block size the pool will ever create, in bytes.
    /// Must be a nonzero power of two.
    pub min_block_size: usize,

    /// Number of size classes. Class `s` holds blocks of
    /// `min_block_size * 2^s` bytes.
    pub class_count: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            class_count: DEFAULT_CLASS_COUNT,
        }
    }
}

impl PoolConfig {
    /// Size in bytes of the largest configured class, which bounds what a
    /// single acquire may request.
    ///
    /// Fails if the configuration is invalid or the largest class size
    /// overflows `usize`.
    pub fn max_block_size(&self) -> Result<usize> {
        if !self.min_block_size.is_power_of_two() {
            return Err(Error::InvalidConfig(format!(
                "min_block_size must be a nonzero power of two, got {}",
                self.min_block_size
            )));
        }
        if self.class_count == 0 {
            return Err(Error::InvalidConfig(
                "class_count must be at least 1".to_string(),
            ));
        }

        let mut size = self.min_block_size;
        for _ in 1..self.class_count {
            size = size.checked_mul(2).ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "largest class size overflows usize ({} classes from {} bytes)",
                    self.class_count, self.min_block_size
                ))
            })?;
        }
        Ok(size)
    }
}
