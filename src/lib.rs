//! # plaindft - Direct-summation Discrete Fourier Transform
//!
//! Computes the DFT and its inverse straight from the definition, with the
//! real and imaginary arithmetic written out term by term. No complex-number
//! type and no fast algorithm: `O(N²)` work that is easy to audit and useful
//! as a reference for checking optimized FFTs.
//!
//! ```
//! use plaindft::{forward_transform, inverse_transform, Signal};
//!
//! let x = Signal::<f64>::from_real(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! let spectrum = forward_transform(&x).unwrap();
//! assert!((spectrum[0].re - 10.0).abs() < 1e-12);
//! let back = inverse_transform(&spectrum).unwrap();
//! assert!((back[3].re - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`DftError`]
//! - `parallel`: split output bins across Rayon workers
//! - `verbose-logging`: emit `log::debug!` records from the transforms
//!
//! ## Environment
//!
//! With `parallel` enabled, `PLAINDFT_PAR_THRESHOLD` sets the minimum length
//! that is parallelised and `PLAINDFT_PAR_THREADS` the worker count.
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Forwards to `log::debug!` when `verbose-logging` is enabled.
macro_rules! dft_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::debug!($($arg)*);
        }
    };
}
pub(crate) use dft_debug;

/// Sample, signal and float types.
pub mod num;

/// Trigonometric basis: angles, lookup tables and kernel strategies.
pub mod trig;

/// Forward and inverse transforms.
pub mod dft;

/// Rayon-backed transforms.
#[cfg(feature = "parallel")]
pub mod parallel;

pub use dft::{
    forward_split, forward_transform, inverse_split, inverse_transform, DftError, DftImpl,
    ScalarDft,
};
pub use num::{Float, Sample, Sample32, Sample64, Signal, Spectrum};
pub use trig::KernelStrategy;

#[cfg(feature = "parallel")]
pub use parallel::{forward_parallel, inverse_parallel, ParallelDft};
