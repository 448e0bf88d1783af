//! Traversal descriptors: per-buffer offset and step patterns
//!
//! A descriptor says *where* a traversal touches a buffer; the iteration
//! count lives at the call site (one count is shared by all lock-step
//! buffers, while each buffer gets its own descriptor). Steps may be zero
//! (revisit the same position) or negative (walk backward); all index
//! arithmetic is done in `isize`.
//!
//! Staying within the buffer is the caller's guarantee. The kernels do not
//! validate it; a violated guarantee panics at the slice index instead of
//! corrupting memory. The `validate` methods are an optional construction
//! seam for callers that want a fallible check up front.

use crate::error::{Error, Result};

/// Strided-1D access pattern: position of iteration `i` is `offset + i * step`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stride1d {
    /// Element index of the first touched position
    pub offset: usize,
    /// Elements between consecutive touched positions (may be 0 or negative)
    pub step: isize,
}

impl Stride1d {
    /// Dense forward traversal from the start of the buffer
    pub const CONTIGUOUS: Self = Self { offset: 0, step: 1 };

    /// Create a descriptor
    pub const fn new(offset: usize, step: isize) -> Self {
        Self { offset, step }
    }

    /// Check that all `n` positions land inside a buffer of length `len`
    ///
    /// Positions are affine in the iteration index, so the extremes are at
    /// the first and last iteration.
    pub fn validate(&self, n: usize, len: usize) -> Result<()> {
        if n == 0 {
            return Ok(());
        }
        let first = self.offset as isize;
        let last = first + (n as isize - 1) * self.step;
        for index in [first, last] {
            if index < 0 || index >= len as isize {
                return Err(Error::out_of_bounds(index, len));
            }
        }
        Ok(())
    }
}

/// Strided-2D access pattern: two nested strided-1D loops
///
/// The outer loop advances a row cursor by `outer`; each outer step resets
/// the inner cursor from the row cursor and advances it by `inner`.
/// Position of iteration `(i, j)` is `offset + i * outer + j * inner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stride2d {
    /// Element index of the first touched position
    pub offset: usize,
    /// Row-to-row step
    pub outer: isize,
    /// Step within a row
    pub inner: isize,
}

impl Stride2d {
    /// Create a descriptor
    pub const fn new(offset: usize, outer: isize, inner: isize) -> Self {
        Self {
            offset,
            outer,
            inner,
        }
    }

    /// Dense row-major traversal of an `m × n` region starting at `offset`
    pub const fn row_major(offset: usize, n: usize) -> Self {
        Self {
            offset,
            outer: n as isize,
            inner: 1,
        }
    }

    /// Check that all `m * n` positions land inside a buffer of length `len`
    ///
    /// Positions are affine in both loop indices, so the extremes are at
    /// the four corners of the iteration rectangle.
    pub fn validate(&self, m: usize, n: usize, len: usize) -> Result<()> {
        if m == 0 || n == 0 {
            return Ok(());
        }
        let base = self.offset as isize;
        let di = (m as isize - 1) * self.outer;
        let dj = (n as isize - 1) * self.inner;
        for index in [base, base + di, base + dj, base + di + dj] {
            if index < 0 || index >= len as isize {
                return Err(Error::out_of_bounds(index, len));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_validates() {
        assert!(Stride1d::CONTIGUOUS.validate(10, 10).is_ok());
        assert!(Stride1d::CONTIGUOUS.validate(11, 10).is_err());
    }

    #[test]
    fn test_zero_count_always_valid() {
        // No position is touched, so even a wild descriptor passes.
        assert!(Stride1d::new(999, -7).validate(0, 4).is_ok());
        assert!(Stride2d::new(999, -7, 3).validate(0, 5, 4).is_ok());
        assert!(Stride2d::new(999, -7, 3).validate(5, 0, 4).is_ok());
    }

    #[test]
    fn test_negative_step() {
        // Reverse traversal over all five elements.
        assert!(Stride1d::new(4, -1).validate(5, 5).is_ok());
        // One iteration too many walks off the front.
        let err = Stride1d::new(4, -1).validate(6, 5).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { index: -1, len: 5 }));
    }

    #[test]
    fn test_zero_step() {
        assert!(Stride1d::new(2, 0).validate(1000, 3).is_ok());
        assert!(Stride1d::new(3, 0).validate(1, 3).is_err());
    }

    #[test]
    fn test_2d_corners() {
        // 2 rows of 3, row stride 4: touches 0..3 and 4..7 within len 8.
        assert!(Stride2d::new(0, 4, 1).validate(2, 3, 8).is_ok());
        // Same shape in a shorter buffer fails at the far corner.
        let err = Stride2d::new(0, 4, 1).validate(2, 3, 6).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { index: 6, len: 6 }));
        // Column view: 3 rows of 1, offset 2, row stride 4.
        assert!(Stride2d::new(2, 4, 1).validate(3, 1, 12).is_ok());
    }

    #[test]
    fn test_row_major_helper() {
        let d = Stride2d::row_major(0, 5);
        assert_eq!(d.outer, 5);
        assert_eq!(d.inner, 1);
        assert!(d.validate(3, 5, 15).is_ok());
        assert!(d.validate(4, 5, 15).is_err());
    }
}
