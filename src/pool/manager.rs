use bytes::BytesMut;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

use crate::config::PoolConfig;
use crate::error::{Error, Result};
use crate::pool::block::{Block, BlockId};
use crate::pool::report::{ClassReport, PoolReport};

/// Relaxed ordering for counters (eventual visibility is fine for stats).
const RELAXED: Ordering = Ordering::Relaxed;

/// Source of unique ids so blocks can't be released to the wrong pool.
static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

/// Manually managed pool of power-of-two-sized byte blocks.
///
/// Blocks are allocated on demand, handed out as [`Block`] views, and reused
/// after release. Once created a block lives for the pool's lifetime; memory
/// is never returned to the system allocator. Every operation serializes on
/// one mutex, so the pool is safe to share across threads.
///
/// Each acquire must be matched by a [`release`](Manager::release); the pool
/// performs no automatic reclamation.
pub struct Manager {
    pool_id: u64,
    min_block_size: usize,
    max_block_size: usize,
    inner: Mutex<PoolInner>,

    /// Statistics: acquires served by reusing a pooled block.
    hits: AtomicU64,
    /// Statistics: acquires that allocated a new block.
    misses: AtomicU64,
    /// Statistics: blocks returned to the pool.
    releases: AtomicU64,
}

struct PoolInner {
    /// `classes[s]` holds blocks of exactly `min_block_size << s` bytes, in
    /// insertion order. `None` marks storage currently moved out to a caller.
    classes: Vec<Vec<Option<BytesMut>>>,

    /// Identities of blocks currently checked out.
    used: FxHashSet<BlockId>,
}

impl Manager {
    /// Create a pool with the default configuration (1 KiB granularity,
    /// 21 classes, largest class 1 GiB).
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default()).expect("default pool configuration is valid")
    }

    /// Create a pool with a custom configuration.
    pub fn with_config(config: PoolConfig) -> Result<Self> {
        let max_block_size = config.max_block_size()?;
        Ok(Self {
            pool_id: NEXT_POOL_ID.fetch_add(1, RELAXED),
            min_block_size: config.min_block_size,
            max_block_size,
            inner: Mutex::new(PoolInner {
                classes: vec![Vec::new(); config.class_count],
                used: FxHashSet::default(),
            }),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            releases: AtomicU64::new(0),
        })
    }

    /// Smallest block size this pool will create.
    #[inline]
    pub fn min_block_size(&self) -> usize {
        self.min_block_size
    }

    /// Largest request a single acquire may make.
    #[inline]
    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    /// Acquire a view of exactly `n` bytes, backed by the smallest size
    /// class that can hold it.
    ///
    /// Reuses a free block of that class if one exists (its storage is
    /// zeroed before handout), otherwise allocates a new block of the full
    /// class size. Fails with [`Error::BlockTooLarge`] if `n` exceeds
    /// [`max_block_size`](Manager::max_block_size).
    pub fn acquire(&self, n: usize) -> Result<Block> {
        if n > self.max_block_size {
            return Err(Error::BlockTooLarge {
                requested: n,
                max: self.max_block_size,
            });
        }

        // Smallest class that can accommodate the request, found by doubling
        // from the minimum granularity.
        let mut size = self.min_block_size;
        let mut class = 0;
        while size < n {
            size *= 2;
            class += 1;
        }

        let mut guard = self.inner.lock();
        let PoolInner { classes, used } = &mut *guard;

        // First free block in insertion order wins.
        for (slot, entry) in classes[class].iter_mut().enumerate() {
            let Some(mut storage) = entry.take() else {
                continue;
            };
            let id = BlockId { class, slot };
            used.insert(id);
            // Lazy clear: stale contents from the previous holder must not
            // leak into the new view.
            storage.fill(0);
            self.hits.fetch_add(1, RELAXED);
            trace!(class_size = size, slot, "reusing pooled block");
            return Ok(Block {
                storage,
                id,
                pool_id: self.pool_id,
                len: n,
            });
        }

        // No free block: grow the class. The storage moves straight out to
        // the caller, so the new slot starts empty.
        let storage = BytesMut::zeroed(size);
        let slot = classes[class].len();
        classes[class].push(None);
        let id = BlockId { class, slot };
        used.insert(id);
        self.misses.fetch_add(1, RELAXED);
        debug!(class_size = size, blocks = slot + 1, "allocated new block");
        Ok(Block {
            storage,
            id,
            pool_id: self.pool_id,
            len: n,
        })
    }

    /// Return a block to the pool so it can be reused.
    ///
    /// Consumes the view, so the caller cannot touch the bytes afterward.
    /// Storage is not cleared here; clearing happens on the next acquire.
    ///
    /// # Panics
    ///
    /// Panics if the block was issued by a different pool, or if the pool's
    /// checked-out bookkeeping does not know the block. Both indicate a
    /// caller bug, not a recoverable condition.
    pub fn release(&self, block: Block) {
        assert_eq!(
            block.pool_id, self.pool_id,
            "released a block issued by a different pool"
        );

        let mut guard = self.inner.lock();
        let PoolInner { classes, used } = &mut *guard;
        if !used.remove(&block.id) {
            panic!("released a block that is not checked out");
        }
        let BlockId { class, slot } = block.id;
        classes[class][slot] = Some(block.storage);
        self.releases.fetch_add(1, RELAXED);
    }

    /// Snapshot of current usage per size class, plus grand totals of bytes
    /// in use and bytes ever allocated.
    pub fn report(&self) -> PoolReport {
        let guard = self.inner.lock();

        let mut classes = Vec::new();
        let mut used_bytes = 0;
        let mut allocated_bytes = 0;
        for (class, slots) in guard.classes.iter().enumerate() {
            let block_size = self.min_block_size << class;
            let total = slots.len();
            let in_use = slots.iter().filter(|slot| slot.is_none()).count();
            if in_use > 0 {
                classes.push(ClassReport {
                    block_size,
                    in_use,
                    total,
                });
            }
            used_bytes += in_use * block_size;
            allocated_bytes += total * block_size;
        }

        PoolReport {
            classes,
            used_bytes,
            allocated_bytes,
        }
    }

    /// Acquire/release counters for monitoring.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            hits: self.hits.load(RELAXED),
            misses: self.misses.load(RELAXED),
            releases: self.releases.load(RELAXED),
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool statistics for monitoring.
#[derive(Debug, Clone, Copy)]
pub struct PoolStats {
    /// Acquires served by reusing a pooled block.
    pub hits: u64,
    /// Acquires that allocated a new block.
    pub misses: u64,
    /// Blocks returned to the pool.
    pub releases: u64,
}

impl PoolStats {
    /// Fraction of acquires served without allocating (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
