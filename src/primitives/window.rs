//! Windowing primitives for local regression.
//!
//! This module provides the low-level bookkeeping for the contiguous windows
//! a LOESS pass slides over a sorted dataset: bounds construction for the
//! three phases (leading, sliding, trailing) and the span calculation that
//! converts a fraction of the data into a window size.

// External dependencies
use num_traits::Float;

/// Inclusive window bounds `[left, right]` over a sorted dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left boundary index (inclusive).
    pub left: usize,

    /// Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    /// Smallest window a local fit may use. Windows of 3 or fewer points
    /// produce degenerate or unstable local lines.
    pub const MIN_SPAN: usize = 4;

    /// Window anchored at the start of the dataset.
    #[inline]
    pub fn leading(span: usize) -> Self {
        debug_assert!(span >= 1, "leading: span must be at least 1");
        Self {
            left: 0,
            right: span - 1,
        }
    }

    /// Window of `span` points starting at `offset`.
    #[inline]
    pub fn at_offset(offset: usize, span: usize) -> Self {
        debug_assert!(span >= 1, "at_offset: span must be at least 1");
        Self {
            left: offset,
            right: offset + span - 1,
        }
    }

    /// Window frozen against the end of an `n`-point dataset.
    #[inline]
    pub fn trailing(n: usize, span: usize) -> Self {
        debug_assert!(span >= 1 && span <= n, "trailing: span must be in 1..=n");
        Self {
            left: n - span,
            right: n - 1,
        }
    }

    /// Borrow the window's portion of a sorted slice.
    #[inline]
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        &data[self.left..=self.right]
    }

    /// Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Check if the window is empty.
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert a fraction of the data into a window span: ceil(fraction * n),
    /// floored up to MIN_SPAN. With fraction in [0, 1] and n >= MIN_SPAN the
    /// result never exceeds n.
    #[inline]
    pub fn span<T: Float>(n: usize, fraction: T) -> usize {
        let n_t = T::from(n).unwrap_or_else(T::zero);
        let raw = (fraction * n_t).ceil().to_usize().unwrap_or(0);
        raw.max(Self::MIN_SPAN)
    }
}
