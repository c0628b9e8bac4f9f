use bytes::BytesMut;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Opaque identity of a pooled block: its size class and slot within that
/// class. Slots are never removed, so an id stays valid for the pool's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BlockId {
    pub(crate) class: usize,
    pub(crate) slot: usize,
}

/// Exclusively owned view into a pooled block.
///
/// Dereferences to exactly the requested number of bytes; the backing block
/// may be larger (see [`capacity`](Block::capacity)). Returned by
/// [`Manager::acquire`](crate::pool::Manager::acquire) and consumed by
/// [`Manager::release`](crate::pool::Manager::release), so a released block
/// cannot be used or released again. Dropping a `Block` without releasing it
/// leaks that block: it stays checked out for the pool's lifetime.
pub struct Block {
    /// Backing storage, always at its full class size.
    pub(crate) storage: BytesMut,
    pub(crate) id: BlockId,
    /// Pool that issued this block; releases to any other pool are rejected.
    pub(crate) pool_id: u64,
    /// Requested length, the visible extent of the view.
    pub(crate) len: usize,
}

impl Block {
    /// Length of the view, exactly the size passed to acquire.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is zero-length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical capacity of the backing block: its size-class byte size.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }
}

impl Deref for Block {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.storage[..self.len]
    }
}

impl DerefMut for Block {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.storage[..self.len]
    }
}

impl AsRef<[u8]> for Block {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl AsMut<[u8]> for Block {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("len", &self.len)
            .field("capacity", &self.storage.len())
            .finish()
    }
}
