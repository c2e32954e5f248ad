//! # Pagination
//!
//! Offset/limit windows over an ordered collection. `total` always reports the size of the
//! whole collection, never the size of the window.

use serde::Serialize;
use std::ops::Range;

/// One window of an ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self { items, total }
    }

    /// Convert every item, keeping `total`.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Index range `[offset, offset + limit)` clipped to `total`.
///
/// An offset past the end yields an empty range; the range length is
/// `max(0, min(limit, total - offset))`.
pub fn window(total: usize, offset: usize, limit: usize) -> Range<usize> {
    let start = offset.min(total);
    let end = start.saturating_add(limit).min(total);
    start..end
}
