//! Strided elementwise array-mapping kernels
//!
//! This crate provides a small family of traversal patterns that apply a
//! per-element transformation (unary, binary, or ternary) over one or more
//! numeric buffers, optionally cross-type, optionally with non-unit
//! strides and two-dimensional offset patterns, and optionally releasing a
//! coarse-grained host runtime lock for the duration of the loop so other
//! concurrent work can proceed.
//!
//! # Architecture Overview
//!
//! The library is organized in three layers:
//!
//! 1. **Elements**: the fixed set of real and complex element types
//!    (`f32`, `f64`, [`Complex32`], [`Complex64`]) behind the [`Element`]
//!    trait.
//! 2. **Traversal**: four access-pattern primitives (flat, strided-1D,
//!    strided-2D) at arities one to three, driven by injected operation
//!    slots.
//! 3. **Kernels**: [`MapEngine`], the fixed kernel variants composing a
//!    traversal, an arity, and a slot contract inside the gate protocol.
//!
//! # Design Philosophy
//!
//! - **Injected operations**: the crate never decides what math to apply;
//!   slots are closures supplied per call.
//! - **No hidden allocations**: kernels write into caller-owned buffers
//!   and return `()`.
//! - **Scoped lock release**: the [`RuntimeGate`] protocol is a drop guard,
//!   so the claim is reacquired on every exit path, panics included.
//!
//! # Example
//!
//! ```rust
//! use strided_map::{ungated, Stride1d};
//!
//! let engine = ungated();
//!
//! // Square a buffer in place.
//! let mut data = vec![1.0_f64, 2.0, 3.0, 4.0];
//! engine.map_inplace(&mut data, |x| x * x);
//! assert_eq!(data, vec![1.0, 4.0, 9.0, 16.0]);
//!
//! // Reverse-copy it through a strided view.
//! let mut out = vec![0.0_f64; 4];
//! engine.strided_map_into(
//!     &data,
//!     Stride1d::new(3, -1),
//!     &mut out,
//!     Stride1d::CONTIGUOUS,
//!     4,
//!     |x, y| *y = *x,
//! );
//! assert_eq!(out, vec![16.0, 9.0, 4.0, 1.0]);
//! ```

pub mod complex;
pub mod element;
pub mod error;
pub mod gate;
pub mod kernels;
pub mod stride;
pub mod traversal;

// Re-export core types
pub use error::{Error, Result};

pub use complex::{Complex32, Complex64};
pub use element::{Element, ElementKind, Real};
pub use gate::{BlockingSection, CountingGate, NoGate, RuntimeGate};
pub use kernels::{ungated, MapEngine};
pub use stride::{Stride1d, Stride2d};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ungated, Complex32, Complex64, Element, ElementKind, Error, MapEngine, NoGate, Real,
        Result, RuntimeGate, Stride1d, Stride2d,
    };
}
