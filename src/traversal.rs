//! Traversal primitives: the access patterns the kernels are built from
//!
//! Four shapes (flat-contiguous, strided-1D, and nested strided-2D) at
//! arities one to three, each generic over independent element types and an
//! injected per-position closure. Strided-2D subsumes the others but the
//! cheaper shapes are kept separate: the majority of call sites are fully
//! contiguous and should not pay for nested cursor bookkeeping.
//!
//! Iteration order is always forward, low-to-high index; every described
//! position is visited exactly once and there is no early termination. A
//! count of zero executes the body zero times and performs no indexing at
//! all. These functions assume the descriptors stay in bounds (the caller's
//! guarantee); a violation panics at the slice index.

use crate::stride::{Stride1d, Stride2d};

/// Walk one buffer densely from the front.
#[inline]
pub fn flat1<T, F>(x: &mut [T], mut f: F)
where
    F: FnMut(&mut T),
{
    for v in x.iter_mut() {
        f(v);
    }
}

/// Walk two buffers densely in lock-step.
#[inline]
pub fn flat2<T, U, F>(x: &[T], y: &mut [U], mut f: F)
where
    F: FnMut(&T, &mut U),
{
    debug_assert_eq!(
        x.len(),
        y.len(),
        "Lock-step buffers must have equal lengths"
    );
    for (a, b) in x.iter().zip(y.iter_mut()) {
        f(a, b);
    }
}

/// Walk three buffers densely in lock-step.
#[inline]
pub fn flat3<T, U, V, F>(x: &[T], y: &[U], z: &mut [V], mut f: F)
where
    F: FnMut(&T, &U, &mut V),
{
    debug_assert_eq!(
        x.len(),
        y.len(),
        "Lock-step buffers must have equal lengths"
    );
    debug_assert_eq!(
        x.len(),
        z.len(),
        "Lock-step buffers must have equal lengths"
    );
    for ((a, b), c) in x.iter().zip(y.iter()).zip(z.iter_mut()) {
        f(a, b, c);
    }
}

/// Walk `n` strided positions of one buffer.
#[inline]
pub fn strided1_1<T, F>(x: &mut [T], d: Stride1d, n: usize, mut f: F)
where
    F: FnMut(&mut T),
{
    let mut ix = d.offset as isize;
    for _ in 0..n {
        f(&mut x[ix as usize]);
        ix += d.step;
    }
}

/// Walk `n` strided positions of two buffers in lock-step, each with its
/// own descriptor.
#[inline]
pub fn strided1_2<T, U, F>(x: &[T], dx: Stride1d, y: &mut [U], dy: Stride1d, n: usize, mut f: F)
where
    F: FnMut(&T, &mut U),
{
    let mut ix = dx.offset as isize;
    let mut iy = dy.offset as isize;
    for _ in 0..n {
        f(&x[ix as usize], &mut y[iy as usize]);
        ix += dx.step;
        iy += dy.step;
    }
}

/// Walk an `m × n` strided region of one buffer: an outer loop advancing a
/// row cursor, an inner loop restarted from it.
#[inline]
pub fn strided2_1<T, F>(x: &mut [T], d: Stride2d, m: usize, n: usize, mut f: F)
where
    F: FnMut(&mut T),
{
    let mut row = d.offset as isize;
    for _ in 0..m {
        let mut ix = row;
        for _ in 0..n {
            f(&mut x[ix as usize]);
            ix += d.inner;
        }
        row += d.outer;
    }
}

/// Walk an `m × n` strided region of two buffers in lock-step.
#[inline]
pub fn strided2_2<T, U, F>(
    x: &[T],
    dx: Stride2d,
    y: &mut [U],
    dy: Stride2d,
    m: usize,
    n: usize,
    mut f: F,
) where
    F: FnMut(&T, &mut U),
{
    let mut row_x = dx.offset as isize;
    let mut row_y = dy.offset as isize;
    for _ in 0..m {
        let mut ix = row_x;
        let mut iy = row_y;
        for _ in 0..n {
            f(&x[ix as usize], &mut y[iy as usize]);
            ix += dx.inner;
            iy += dy.inner;
        }
        row_x += dx.outer;
        row_y += dy.outer;
    }
}
