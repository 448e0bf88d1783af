//! Kernel variants: traversal shape × arity × operation-slot contract
//!
//! Each kernel is a thin, fixed combination of one traversal primitive, an
//! arity, and a slot contract, wrapped in the mandatory gate protocol:
//! scalars are captured first, the gate releases the runtime claim, the
//! full traversal runs against raw buffer memory, and the claim is
//! reacquired when the section guard drops, on every exit path.
//!
//! Slot contracts come in two forms. Single-word element kernels pass
//! values (`FnMut(T) -> T` and friends); kernels whose element type may be
//! multi-word (complex) pass positions (`FnMut(&T, &mut U)`) so the slot
//! reads and writes in place without a by-value round trip. The strided
//! kernels are positional for the same reason.
//!
//! Operation slots must be pure with respect to shared state: no
//! allocation of host-managed objects, no host callbacks, nothing outside
//! the buffers and captured scalars; the runtime claim is *not held*
//! while they run. Numeric domain errors (log of a negative, etc.) yield
//! NaN/infinity and never abort the loop.

mod log;

use crate::element::Element;
use crate::gate::{BlockingSection, NoGate, RuntimeGate};
use crate::stride::{Stride1d, Stride2d};
use crate::traversal;

/// Kernel entry points bound to one runtime gate
///
/// The engine holds the gate the way an execution engine holds its
/// primitives: construct once, reuse across calls. All kernels return `()`
/// and write results into caller-owned buffers.
#[derive(Clone, Debug)]
pub struct MapEngine<G: RuntimeGate = NoGate> {
    gate: G,
}

impl MapEngine<NoGate> {
    /// Engine without a runtime lock (standalone embeddings, tests)
    pub fn ungated() -> Self {
        Self::new(NoGate)
    }
}

impl<G: RuntimeGate> MapEngine<G> {
    /// Create an engine wrapping the given gate
    pub fn new(gate: G) -> Self {
        ::log::trace!("map engine created");
        Self { gate }
    }

    /// The gate this engine releases around every kernel loop
    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// Unary in-place map: `x[i] = f(x[i])`.
    pub fn map_inplace<T, F>(&self, x: &mut [T], mut f: F)
    where
        T: Element,
        F: FnMut(T) -> T,
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::flat1(x, |v| *v = f(*v));
    }

    /// Unary cross-type map: `y[i] = f(x[i])`, destination type independent
    /// of the source's.
    pub fn map_into<T, U, F>(&self, x: &[T], y: &mut [U], mut f: F)
    where
        T: Element,
        U: Element,
        F: FnMut(T) -> U,
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::flat2(x, y, |a, b| *b = f(*a));
    }

    /// Scalar-parameterized unary in-place map: `x[i] = f(a, x[i])`, the
    /// scalar captured once before the loop.
    pub fn map_inplace_with<A, T, F>(&self, a: A, x: &mut [T], mut f: F)
    where
        A: Copy,
        T: Element,
        F: FnMut(A, T) -> T,
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::flat1(x, |v| *v = f(a, *v));
    }

    /// Pairwise positional map: `f(&x[i], &mut y[i])`. The multi-word
    /// (complex) counterpart of [`map_into`](Self::map_into).
    pub fn map_at_into<T, U, F>(&self, x: &[T], y: &mut [U], f: F)
    where
        T: Element,
        U: Element,
        F: FnMut(&T, &mut U),
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::flat2(x, y, f);
    }

    /// Binary elementwise map with separate output: `z[i] = f(x[i], y[i])`,
    /// all three element types independent.
    pub fn zip_into<T, U, V, F>(&self, x: &[T], y: &[U], z: &mut [V], mut f: F)
    where
        T: Element,
        U: Element,
        V: Element,
        F: FnMut(T, U) -> V,
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::flat3(x, y, z, |a, b, c| *c = f(*a, *b));
    }

    /// Unary map with companion output driven by one scalar:
    /// `y[i] = f(a, x[i])`.
    pub fn map_with_into<A, T, U, F>(&self, a: A, x: &[T], y: &mut [U], mut f: F)
    where
        A: Copy,
        T: Element,
        U: Element,
        F: FnMut(A, T) -> U,
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::flat2(x, y, |v, w| *w = f(a, *v));
    }

    /// Two-scalar in-place map with positional write:
    /// `f(a, b, &mut x[i])`. The slot may ignore the current value, which
    /// covers fill-style operations.
    pub fn apply_inplace_with2<A, B, T, F>(&self, a: A, b: B, x: &mut [T], mut f: F)
    where
        A: Copy,
        B: Copy,
        T: Element,
        F: FnMut(A, B, &mut T),
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::flat1(x, |v| f(a, b, v));
    }

    /// Strided-1D unary in-place map over `n` positions described by `d`.
    pub fn strided_map_inplace<T, F>(&self, x: &mut [T], d: Stride1d, n: usize, mut f: F)
    where
        T: Element,
        F: FnMut(T) -> T,
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::strided1_1(x, d, n, |v| *v = f(*v));
    }

    /// Strided-1D binary positional map: `f(&x[..], &mut y[..])` over `n`
    /// positions, each buffer with its own offset and step.
    pub fn strided_map_into<T, U, F>(
        &self,
        x: &[T],
        dx: Stride1d,
        y: &mut [U],
        dy: Stride1d,
        n: usize,
        f: F,
    ) where
        T: Element,
        U: Element,
        F: FnMut(&T, &mut U),
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::strided1_2(x, dx, y, dy, n, f);
    }

    /// Strided-2D unary in-place map over an `m × n` region.
    pub fn strided2_map_inplace<T, F>(
        &self,
        x: &mut [T],
        d: Stride2d,
        m: usize,
        n: usize,
        mut f: F,
    ) where
        T: Element,
        F: FnMut(T) -> T,
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::strided2_1(x, d, m, n, |v| *v = f(*v));
    }

    /// Strided-2D binary positional map over an `m × n` region, each buffer
    /// with its own offset and outer/inner steps.
    #[allow(clippy::too_many_arguments)]
    pub fn strided2_map_into<T, U, F>(
        &self,
        x: &[T],
        dx: Stride2d,
        y: &mut [U],
        dy: Stride2d,
        m: usize,
        n: usize,
        f: F,
    ) where
        T: Element,
        U: Element,
        F: FnMut(&T, &mut U),
    {
        let _section = BlockingSection::enter(&self.gate);
        traversal::strided2_2(x, dx, y, dy, m, n, f);
    }
}

/// Convenience constructor for a gate-less engine
pub fn ungated() -> MapEngine<NoGate> {
    MapEngine::ungated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex64;
    use crate::gate::CountingGate;

    #[test]
    fn test_map_inplace() {
        let engine = ungated();
        let mut x = vec![1.0_f64, 4.0, 9.0];
        engine.map_inplace(&mut x, f64::sqrt);
        assert_eq!(x, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_map_into_cross_type() {
        let engine = ungated();
        let x = vec![1.5_f64, 2.5];
        let mut y = vec![0.0_f32; 2];
        engine.map_into(&x, &mut y, |v| v as f32);
        assert_eq!(y, vec![1.5_f32, 2.5]);
    }

    #[test]
    fn test_map_inplace_with_scalar() {
        let engine = ungated();
        let mut x = vec![1.0_f64, 2.0, 3.0];
        engine.map_inplace_with(10.0_f64, &mut x, |a, v| a * v + 1.0);
        assert_eq!(x, vec![11.0, 21.0, 31.0]);
    }

    #[test]
    fn test_map_at_into_complex() {
        let engine = ungated();
        let x = vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, -4.0)];
        let mut y = vec![Complex64::ZERO; 2];
        engine.map_at_into(&x, &mut y, |a, b| *b = a.conj());
        assert_eq!(y[0], Complex64::new(1.0, -2.0));
        assert_eq!(y[1], Complex64::new(3.0, 4.0));
    }

    #[test]
    fn test_zip_into_three_types() {
        let engine = ungated();
        let x = vec![1.0_f32, 2.0];
        let y = vec![10.0_f64, 20.0];
        let mut z = vec![Complex64::ZERO; 2];
        engine.zip_into(&x, &y, &mut z, |a, b| Complex64::new(f64::from(a), b));
        assert_eq!(z[0], Complex64::new(1.0, 10.0));
        assert_eq!(z[1], Complex64::new(2.0, 20.0));
    }

    #[test]
    fn test_map_with_into() {
        let engine = ungated();
        let x = vec![1.0_f64, 2.0, 3.0];
        let mut y = vec![0.0_f64; 3];
        engine.map_with_into(2.0_f64, &x, &mut y, |a, v| v.powf(a));
        assert_eq!(y, vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_apply_inplace_with2_fill() {
        // Fill-style slot: ignores the current value entirely.
        let engine = ungated();
        let mut x = vec![f64::NAN; 4];
        let mut i = 0.0;
        engine.apply_inplace_with2(1.0_f64, 0.5_f64, &mut x, |a, step, v| {
            *v = a + i * step;
            i += 1.0;
        });
        assert_eq!(x, vec![1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_strided_map_inplace_column() {
        // 2x3 row-major matrix; negate column 0.
        let engine = ungated();
        let mut x = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        engine.strided_map_inplace(&mut x, Stride1d::new(0, 3), 2, |v| -v);
        assert_eq!(x, vec![-1.0, 2.0, 3.0, -4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_strided_map_into_gather() {
        // Gather every other element into a dense destination.
        let engine = ungated();
        let x = vec![0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0];
        let mut y = vec![0.0_f64; 3];
        engine.strided_map_into(
            &x,
            Stride1d::new(0, 2),
            &mut y,
            Stride1d::CONTIGUOUS,
            3,
            |a, b| *b = *a,
        );
        assert_eq!(y, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_strided2_map_into_transpose() {
        // Transpose a 2x3 matrix into a 3x2 one by walking the source with
        // swapped outer/inner steps.
        let engine = ungated();
        let x = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = vec![0.0_f64; 6];
        engine.strided2_map_into(
            &x,
            Stride2d::new(0, 1, 3),
            &mut y,
            Stride2d::row_major(0, 2),
            3,
            2,
            |a, b| *b = *a,
        );
        assert_eq!(y, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_zero_count_is_noop() {
        let engine = ungated();
        let mut x: Vec<f64> = vec![];
        engine.map_inplace(&mut x, |_| panic!("visited"));
        let mut y = vec![7.0_f64; 3];
        engine.strided_map_inplace(&mut y, Stride1d::new(100, 5), 0, |_| panic!("visited"));
        assert_eq!(y, vec![7.0, 7.0, 7.0]);
        engine.strided2_map_inplace(&mut y, Stride2d::new(50, 5, 5), 0, 10, |_| {
            panic!("visited")
        });
        assert_eq!(y, vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn test_gate_protocol_one_section_per_call() {
        let engine = MapEngine::new(CountingGate::new());
        let mut x = vec![1.0_f64, 2.0];
        engine.map_inplace(&mut x, |v| v + 1.0);
        assert_eq!(engine.gate().released(), 1);
        assert_eq!(engine.gate().reacquired(), 1);

        let mut y = vec![0.0_f64; 2];
        engine.map_into(&x, &mut y, |v| v);
        let mut z = vec![0.0_f64; 2];
        engine.zip_into(&x, &y, &mut z, |a, b| a + b);
        assert_eq!(engine.gate().released(), 3);
        assert!(engine.gate().is_balanced());
    }
}
