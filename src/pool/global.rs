use std::sync::OnceLock;

use crate::error::Result;
use crate::pool::block::Block;
use crate::pool::manager::Manager;
use crate::pool::report::PoolReport;

/// Process-wide default pool, created on first use and never torn down.
static GLOBAL_POOL: OnceLock<Manager> = OnceLock::new();

/// Get the process-wide default pool.
///
/// Callers that need isolation (tests in particular) should construct their
/// own [`Manager`] instead.
pub fn global_pool() -> &'static Manager {
    GLOBAL_POOL.get_or_init(Manager::new)
}

/// Acquire a view of exactly `n` bytes from the default pool.
///
/// See [`Manager::acquire`].
pub fn acquire(n: usize) -> Result<Block> {
    global_pool().acquire(n)
}

/// Return a block to the default pool.
///
/// See [`Manager::release`]; releasing a block issued by another pool
/// panics.
pub fn release(block: Block) {
    global_pool().release(block)
}

/// Usage snapshot of the default pool.
pub fn report() -> PoolReport {
    global_pool().report()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The default pool is shared across the whole test binary, so these
    // assertions stay tolerant of blocks acquired by other tests.

    #[test]
    fn default_pool_round_trip() {
        let mut block = acquire(2000).unwrap();
        assert_eq!(block.len(), 2000);
        assert_eq!(block.capacity(), 2048);
        block[0] = 1;
        release(block);

        assert!(report().allocated_bytes >= 2048);
    }

    #[test]
    fn default_pool_is_a_singleton() {
        let a = global_pool() as *const Manager;
        let b = global_pool() as *const Manager;
        assert_eq!(a, b);
    }
}
