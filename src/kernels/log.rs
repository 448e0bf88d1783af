//! Logarithm kernel with per-call base dispatch
//!
//! Bases 2, 10 and e have dedicated fast paths backed by the specialized
//! math-library functions; every other base falls through to the general
//! formula `ln(x) / ln(base)`. Selection happens once per call, so the
//! branch cost is amortized over the whole loop.

use crate::element::Real;
use crate::gate::{BlockingSection, RuntimeGate};
use crate::kernels::MapEngine;
use crate::traversal;

impl<G: RuntimeGate> MapEngine<G> {
    /// In-place logarithm to an arbitrary base: `x[i] = log_base(x[i])`.
    ///
    /// The fast-path comparison is exact equality against 2.0, 10.0 and
    /// `E`. This is intentional fast-path selection, not an epsilon test. A base
    /// that is not bit-identical to one of the three constants takes the
    /// general path, which computes `ln(x) * (1 / ln(base))` with the
    /// reciprocal hoisted out of the loop. Out-of-domain inputs yield the
    /// usual float special values (NaN, -inf) and never abort the loop.
    pub fn log_with_base<T: Real>(&self, base: T, x: &mut [T]) {
        if base == T::TWO {
            log::trace!("log kernel: base-2 fast path, n={}", x.len());
            let _section = BlockingSection::enter(self.gate());
            traversal::flat1(x, |v| *v = v.log2());
        } else if base == T::TEN {
            log::trace!("log kernel: base-10 fast path, n={}", x.len());
            let _section = BlockingSection::enter(self.gate());
            traversal::flat1(x, |v| *v = v.log10());
        } else if base == T::E() {
            log::trace!("log kernel: natural-log fast path, n={}", x.len());
            let _section = BlockingSection::enter(self.gate());
            traversal::flat1(x, |v| *v = v.ln());
        } else {
            log::trace!("log kernel: general base, n={}", x.len());
            let scale = base.ln().recip();
            let _section = BlockingSection::enter(self.gate());
            traversal::flat1(x, |v| *v = v.ln() * scale);
        }
    }
}
