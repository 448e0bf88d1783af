//! Element trait hierarchy for the mapping kernels
//!
//! This module provides the type foundation the kernels are generic over:
//! a fixed set of real and complex numeric element kinds, without imposing
//! any computational layer. All computation is injected through operation
//! slots; the trait only pins down layout (`Pod`), identity values, and a
//! kind tag used for logging and debugging.

use crate::complex::{Complex32, Complex64};
use bytemuck::Pod;
use num_traits::{Float, FloatConst};
use std::fmt::Debug;

/// Tag identifying one of the supported element kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Single-precision real
    F32,
    /// Double-precision real
    F64,
    /// Single-precision complex
    C32,
    /// Double-precision complex
    C64,
}

impl ElementKind {
    /// Short name for log messages
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::C32 => "c32",
            ElementKind::C64 => "c64",
        }
    }

    /// Size of one element in bytes
    pub fn size_of(self) -> usize {
        match self {
            ElementKind::F32 => 4,
            ElementKind::F64 => 8,
            ElementKind::C32 => 8,
            ElementKind::C64 => 16,
        }
    }

    /// Whether the kind is a multi-word (complex) representation
    pub fn is_complex(self) -> bool {
        matches!(self, ElementKind::C32 | ElementKind::C64)
    }
}

/// Base trait for element types the kernels traverse
///
/// `Pod` pins the layout (no padding, bit-copyable), which is what lets a
/// buffer view be handed across the host boundary as raw memory.
pub trait Element: Pod + Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Kind tag for this element type
    const KIND: ElementKind;

    /// Additive identity
    const ZERO: Self;
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;
    const ZERO: Self = 0.0;
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::F64;
    const ZERO: Self = 0.0;
}

impl Element for Complex32 {
    const KIND: ElementKind = ElementKind::C32;
    const ZERO: Self = Complex32::ZERO;
}

impl Element for Complex64 {
    const KIND: ElementKind = ElementKind::C64;
    const ZERO: Self = Complex64::ZERO;
}

/// Real element types with the full float operation set
///
/// The logarithm base-dispatch kernel needs `ln`/`log2`/`log10` and the
/// `E` constant, so it is constrained to `Real` rather than `Element`.
/// The `TWO`/`TEN` constants exist so base comparison never goes through
/// a fallible `NumCast`.
pub trait Real: Element + Float + FloatConst {
    /// Exactly 2.0 in this precision
    const TWO: Self;
    /// Exactly 10.0 in this precision
    const TEN: Self;
}

impl Real for f32 {
    const TWO: Self = 2.0;
    const TEN: Self = 10.0;
}

impl Real for f64 {
    const TWO: Self = 2.0;
    const TEN: Self = 10.0;
}
