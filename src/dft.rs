//! Discrete Fourier Transform by direct summation.
//!
//! The forward transform uses the kernel `e^{-i·2πkn/N}` and the inverse
//! `e^{+i·2πkn/N}` normalised by `1/N`, each written out as explicit real and
//! imaginary multiply-adds. Work is `O(N²)`; every output element is built from
//! its completed sum, summed in ascending index order, so results are
//! reproducible bit for bit.
//!
//! [`ScalarDft`] implements [`DftImpl`]; [`forward_transform`] and
//! [`inverse_transform`] are shorthands for the default instance.

use alloc::vec::Vec;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::num::{validate_samples, Float, Sample, Signal, Spectrum};
use crate::trig::{length_as, Basis, KernelStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DftError {
    /// The sequence is empty, or its length has no exact representation in
    /// the sample's float type.
    InvalidLength,
    /// Real and imaginary components were supplied with different lengths.
    LengthMismatch,
    /// A sample holds NaN or an infinity. `index` is the first offender.
    NonFiniteInput { index: usize },
    /// The caller's cancellation flag was raised between bins.
    Cancelled,
    /// A dedicated worker pool could not be created.
    ThreadPool,
}

impl core::fmt::Display for DftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DftError::InvalidLength => {
                write!(f, "transform length must be non-zero and exactly representable")
            },
            DftError::LengthMismatch => {
                write!(f, "real and imaginary parts have different lengths")
            }
            DftError::NonFiniteInput { index } => {
                write!(f, "sample {index} is not finite")
            }
            DftError::Cancelled => write!(f, "transform cancelled"),
            DftError::ThreadPool => write!(f, "failed to build worker pool"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DftError {}

/// One forward bin: `Σ_n x[n]·e^{-iθ}`.
#[inline]
pub(crate) fn forward_bin<T: Float, B: Basis<T>>(
    input: &[Sample<T>],
    basis: &B,
    k: usize,
) -> Sample<T> {
    let mut re = T::zero();
    let mut im = T::zero();
    for (n, x) in input.iter().enumerate() {
        let (cos, sin) = basis.cos_sin(k, n);
        re = re + (x.re * cos + x.im * sin);
        im = im + (x.im * cos - x.re * sin);
    }
    Sample::new(re, im)
}

/// One inverse sample: `(1/N)·Σ_k X[k]·e^{+iθ}`.
#[inline]
pub(crate) fn inverse_bin<T: Float, B: Basis<T>>(
    input: &[Sample<T>],
    basis: &B,
    n: usize,
    len: T,
) -> Sample<T> {
    let mut re = T::zero();
    let mut im = T::zero();
    for (k, x) in input.iter().enumerate() {
        let (cos, sin) = basis.cos_sin(k, n);
        re = re + (x.re * cos - x.im * sin);
        im = im + (x.im * cos + x.re * sin);
    }
    Sample::new(re / len, im / len)
}

pub(crate) fn forward_kernel<T: Float, B: Basis<T>>(
    input: &[Sample<T>],
    basis: &B,
) -> Vec<Sample<T>> {
    (0..input.len())
        .map(|k| forward_bin(input, basis, k))
        .collect()
}

pub(crate) fn inverse_kernel<T: Float, B: Basis<T>>(
    input: &[Sample<T>],
    basis: &B,
    len: T,
) -> Vec<Sample<T>> {
    (0..input.len())
        .map(|n| inverse_bin(input, basis, n, len))
        .collect()
}

fn kernel_with_cancel<T: Float>(
    len: usize,
    cancel: &AtomicBool,
    mut bin: impl FnMut(usize) -> Sample<T>,
) -> Result<Vec<Sample<T>>, DftError> {
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        if cancel.load(Ordering::Relaxed) {
            crate::dft_debug!("dft cancelled after {} of {} bins", i, len);
            return Err(DftError::Cancelled);
        }
        out.push(bin(i));
    }
    Ok(out)
}

pub trait DftImpl<T: Float> {
    /// Time domain → frequency domain.
    fn forward(&self, input: &Signal<T>) -> Result<Spectrum<T>, DftError>;

    /// Frequency domain → time domain, normalised by `1/N`.
    fn inverse(&self, input: &Spectrum<T>) -> Result<Signal<T>, DftError>;

    fn forward_slice(&self, input: &[Sample<T>]) -> Result<Vec<Sample<T>>, DftError> {
        let signal = Signal::from_slice(input)?;
        Ok(self.forward(&signal)?.into_vec())
    }

    fn inverse_slice(&self, input: &[Sample<T>]) -> Result<Vec<Sample<T>>, DftError> {
        let spectrum = Spectrum::from_slice(input)?;
        Ok(self.inverse(&spectrum)?.into_vec())
    }

    /// Forward transform of separate real/imaginary sequences.
    fn forward_split(&self, re: &[T], im: &[T]) -> Result<(Vec<T>, Vec<T>), DftError> {
        let signal = Signal::from_parts(re, im)?;
        Ok(self.forward(&signal)?.into_parts())
    }

    /// Inverse transform of separate real/imaginary sequences.
    fn inverse_split(&self, re: &[T], im: &[T]) -> Result<(Vec<T>, Vec<T>), DftError> {
        let spectrum = Spectrum::from_parts(re, im)?;
        Ok(self.inverse(&spectrum)?.into_parts())
    }
}

/// Single-threaded direct-summation DFT.
#[derive(Debug, Clone, Copy)]
pub struct ScalarDft<T: Float> {
    strategy: KernelStrategy,
    _marker: PhantomData<T>,
}

impl<T: Float> Default for ScalarDft<T> {
    fn default() -> Self {
        Self::new(KernelStrategy::default())
    }
}

impl<T: Float> ScalarDft<T> {
    pub fn new(strategy: KernelStrategy) -> Self {
        Self {
            strategy,
            _marker: PhantomData,
        }
    }

    pub fn strategy(&self) -> KernelStrategy {
        self.strategy
    }

    /// Forward transform that checks `cancel` before each bin.
    ///
    /// Once the flag is observed the partial output is dropped and
    /// [`DftError::Cancelled`] is returned.
    pub fn forward_with_cancel(
        &self,
        input: &Signal<T>,
        cancel: &AtomicBool,
    ) -> Result<Spectrum<T>, DftError> {
        let samples = input.as_slice();
        let basis = self.strategy.basis::<T>(samples.len())?;
        let out = kernel_with_cancel(samples.len(), cancel, |k| {
            forward_bin(samples, &basis, k)
        })?;
        Ok(Signal::from_computed(out))
    }

    /// Inverse counterpart of [`ScalarDft::forward_with_cancel`].
    pub fn inverse_with_cancel(
        &self,
        input: &Spectrum<T>,
        cancel: &AtomicBool,
    ) -> Result<Signal<T>, DftError> {
        let samples = input.as_slice();
        let len = length_as::<T>(samples.len())?;
        let basis = self.strategy.basis::<T>(samples.len())?;
        let out = kernel_with_cancel(samples.len(), cancel, |n| {
            inverse_bin(samples, &basis, n, len)
        })?;
        Ok(Signal::from_computed(out))
    }
}

impl<T: Float> DftImpl<T> for ScalarDft<T> {
    fn forward(&self, input: &Signal<T>) -> Result<Spectrum<T>, DftError> {
        let samples = input.as_slice();
        crate::dft_debug!("forward dft: n={} strategy={:?}", samples.len(), self.strategy);
        let basis = self.strategy.basis::<T>(samples.len())?;
        Ok(Signal::from_computed(forward_kernel(samples, &basis)))
    }

    fn inverse(&self, input: &Spectrum<T>) -> Result<Signal<T>, DftError> {
        let samples = input.as_slice();
        crate::dft_debug!("inverse dft: n={} strategy={:?}", samples.len(), self.strategy);
        let len = length_as::<T>(samples.len())?;
        let basis = self.strategy.basis::<T>(samples.len())?;
        Ok(Signal::from_computed(inverse_kernel(samples, &basis, len)))
    }
}

/// Forward DFT with the default [`ScalarDft`].
pub fn forward_transform<T: Float>(samples: &Signal<T>) -> Result<Spectrum<T>, DftError> {
    ScalarDft::default().forward(samples)
}

/// Inverse DFT with the default [`ScalarDft`].
pub fn inverse_transform<T: Float>(coefficients: &Spectrum<T>) -> Result<Signal<T>, DftError> {
    ScalarDft::default().inverse(coefficients)
}

pub fn forward_split<T: Float>(re: &[T], im: &[T]) -> Result<(Vec<T>, Vec<T>), DftError> {
    ScalarDft::default().forward_split(re, im)
}

pub fn inverse_split<T: Float>(re: &[T], im: &[T]) -> Result<(Vec<T>, Vec<T>), DftError> {
    ScalarDft::default().inverse_split(re, im)
}

pub fn forward_cancellable<T: Float>(
    samples: &Signal<T>,
    cancel: &AtomicBool,
) -> Result<Spectrum<T>, DftError> {
    ScalarDft::default().forward_with_cancel(samples, cancel)
}

pub fn inverse_cancellable<T: Float>(
    coefficients: &Spectrum<T>,
    cancel: &AtomicBool,
) -> Result<Signal<T>, DftError> {
    ScalarDft::default().inverse_with_cancel(coefficients, cancel)
}

/// Forward-transform several signals. Fails on the first error.
pub fn batch<T: Float, F: DftImpl<T>>(
    signals: &[Signal<T>],
    dft: &F,
) -> Result<Vec<Spectrum<T>>, DftError> {
    signals.iter().map(|s| dft.forward(s)).collect()
}

pub fn batch_inverse<T: Float, F: DftImpl<T>>(
    spectra: &[Spectrum<T>],
    dft: &F,
) -> Result<Vec<Signal<T>>, DftError> {
    spectra.iter().map(|s| dft.inverse(s)).collect()
}

/// Forward-transform raw per-channel sample buffers, validating each.
pub fn multi_channel<T: Float, F: DftImpl<T>>(
    channels: &[Vec<Sample<T>>],
    dft: &F,
) -> Result<Vec<Vec<Sample<T>>>, DftError> {
    for channel in channels {
        validate_samples(channel)?;
    }
    channels.iter().map(|c| dft.forward_slice(c)).collect()
}

pub fn multi_channel_inverse<T: Float, F: DftImpl<T>>(
    channels: &[Vec<Sample<T>>],
    dft: &F,
) -> Result<Vec<Vec<Sample<T>>>, DftError> {
    for channel in channels {
        validate_samples(channel)?;
    }
    channels.iter().map(|c| dft.inverse_slice(c)).collect()
}
