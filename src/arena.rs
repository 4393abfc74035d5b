//! Region allocator backing every token text and AST node of a parse.
//!
//! The arena is a thin wrapper over [`bumpalo::Bump`] with a fixed
//! allocation limit. Nothing is freed individually; everything goes away
//! when the arena is dropped.

use std::{alloc::Layout, ptr, slice, str};

use bumpalo::Bump;

use crate::errors::errors::ErrorImpl;

/// Default arena capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

pub struct Arena {
    bump: Bump,
    capacity: usize,
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        Arena::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let bump = Bump::new();
        bump.set_allocation_limit(Some(capacity));
        Arena { bump, capacity }
    }

    /// Moves `value` into the arena.
    pub fn alloc<T>(&self, value: T) -> Result<&T, ErrorImpl> {
        match self.bump.try_alloc(value) {
            Ok(value) => Ok(value),
            Err(_) => Err(self.exhausted(std::mem::size_of::<T>())),
        }
    }

    /// Copies a finished child list into the arena.
    pub fn alloc_slice<T: Copy>(&self, items: &[T]) -> Result<&[T], ErrorImpl> {
        let layout = Layout::for_value(items);
        let dst = self
            .bump
            .try_alloc_layout(layout)
            .map_err(|_| self.exhausted(layout.size()))?
            .cast::<T>();

        // SAFETY: `dst` is a fresh allocation sized and aligned for `items`,
        // and `T: Copy` means a bitwise copy is a valid value.
        unsafe {
            ptr::copy_nonoverlapping(items.as_ptr(), dst.as_ptr(), items.len());
            Ok(slice::from_raw_parts(dst.as_ptr(), items.len()))
        }
    }

    /// Copies `text` into the arena so it outlives the source buffer.
    pub fn copy_str(&self, text: &str) -> Result<&str, ErrorImpl> {
        let bytes = self.alloc_slice(text.as_bytes())?;

        // SAFETY: the bytes were copied verbatim from a `str`.
        Ok(unsafe { str::from_utf8_unchecked(bytes) })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes handed out by the underlying chunks so far.
    pub fn used(&self) -> usize {
        self.bump.allocated_bytes()
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.used())
    }

    fn exhausted(&self, requested: usize) -> ErrorImpl {
        log::error!(
            "arena exhausted: {} bytes requested, {} of {} in use",
            requested,
            self.used(),
            self.capacity
        );
        ErrorImpl::ArenaExhausted {
            requested,
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, DEFAULT_CAPACITY};
    use crate::errors::errors::ErrorImpl;

    #[test]
    fn test_copy_str_is_independent_of_source() {
        let arena = Arena::new();
        let copied = {
            let source = String::from("function main");
            arena.copy_str(&source[9..]).unwrap()
        };

        assert_eq!(copied, "main");
    }

    #[test]
    fn test_alloc_slice_preserves_order() {
        let arena = Arena::new();
        let items = arena.alloc_slice(&[3, 1, 2]).unwrap();

        assert_eq!(items, &[3, 1, 2]);
        assert!(arena.alloc_slice::<u64>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_default_capacity() {
        let arena = Arena::default();

        assert_eq!(arena.capacity(), DEFAULT_CAPACITY);
        assert!(arena.remaining() <= DEFAULT_CAPACITY);
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let arena = Arena::with_capacity(0);
        let result = arena.copy_str("this will never fit");

        assert!(matches!(
            result,
            Err(ErrorImpl::ArenaExhausted { capacity: 0, .. })
        ));
        assert!(arena.alloc([0u8; 64]).is_err());
    }
}
