//! Complex element types for cross-type and pairwise kernels
//!
//! Complex numbers are stored in interleaved format (re, im), matching the
//! layout BLAS, FFTW and numpy expect, so a `&[Complex64]` reinterprets
//! cleanly as a `&[f64]` of twice the length.
//!
//! These are the multi-word element types that motivate the positional
//! (by-reference) operation-slot contract of the pairwise kernels: the slot
//! reads and writes through references instead of round-tripping a two-word
//! value.

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Implement a complex number type over one float width.
macro_rules! impl_complex {
    ($name:ident, $float:ty, $doc_float_bits:literal) => {
        #[doc = concat!("Complex number with ", $doc_float_bits, "-bit real and imaginary parts")]
        ///
        /// Memory layout: `#[repr(C)]`, interleaved `(re, im)`.
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            /// Real part
            pub re: $float,
            /// Imaginary part
            pub im: $float,
        }

        impl $name {
            /// Zero complex number
            pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

            /// One (real unit)
            pub const ONE: Self = Self { re: 1.0, im: 0.0 };

            /// Imaginary unit i
            pub const I: Self = Self { re: 0.0, im: 1.0 };

            /// Create a new complex number
            #[inline]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }

            /// Promote a real value to complex with zero imaginary part
            #[inline]
            pub const fn from_real(re: $float) -> Self {
                Self { re, im: 0.0 }
            }

            /// Complex conjugate
            #[inline]
            pub fn conj(self) -> Self {
                Self {
                    re: self.re,
                    im: -self.im,
                }
            }

            /// Squared magnitude `re² + im²`
            #[inline]
            pub fn norm_sqr(self) -> $float {
                self.re * self.re + self.im * self.im
            }

            /// Multiply both parts by a real scalar
            #[inline]
            pub fn scale(self, s: $float) -> Self {
                Self {
                    re: self.re * s,
                    im: self.im * s,
                }
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self {
                    re: self.re + rhs.re,
                    im: self.im + rhs.im,
                }
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    re: self.re - rhs.re,
                    im: self.im - rhs.im,
                }
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    re: self.re * rhs.re - self.im * rhs.im,
                    im: self.re * rhs.im + self.im * rhs.re,
                }
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self {
                    re: -self.re,
                    im: -self.im,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.im < 0.0 {
                    write!(f, "{}{}i", self.re, self.im)
                } else {
                    write!(f, "{}+{}i", self.re, self.im)
                }
            }
        }
    };
}

impl_complex!(Complex32, f32, "32");
impl_complex!(Complex64, f64, "64");
