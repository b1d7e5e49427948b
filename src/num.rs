//! Scalar and sample types shared by every transform.
//!
//! A [`Sample`] is an explicit `(re, im)` pair rather than a complex-number
//! type so that every multiply and add in the kernels is visible. A [`Signal`]
//! is a validated, non-empty sequence of samples; [`Spectrum`] is the same type
//! used for the frequency domain.

use alloc::vec::Vec;

use crate::dft::DftError;

// Minimal float trait so the kernels stay generic over f32/f64 without std.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Convert a `usize` exactly. Returns `None` when the value has no exact
    /// representation in `Self`.
    fn from_usize(x: usize) -> Option<Self>;
    /// Plain `as` conversion, used for indices already known to be below a
    /// length accepted by [`Float::from_usize`].
    fn from_usize_lossy(x: usize) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    /// Returns `(sin, cos)`.
    fn sin_cos(self) -> (Self, Self);
    fn atan2(self, other: Self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn pi() -> Self;
    fn two_pi() -> Self {
        Self::pi() + Self::pi()
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 24;
        if x < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    fn from_usize_lossy(x: usize) -> Self {
        x as f32
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
    fn two_pi() -> Self {
        core::f32::consts::TAU
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 53;
        if x < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    fn from_usize_lossy(x: usize) -> Self {
        x as f64
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn two_pi() -> Self {
        core::f64::consts::TAU
    }
}

/// One complex value stored as an explicit real/imaginary pair.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Sample<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }

    /// A purely real sample (`im = 0`).
    pub fn real(re: T) -> Self {
        Self { re, im: T::zero() }
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// `re² + im²`
    #[inline(always)]
    pub fn norm_sqr(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    pub fn magnitude(&self) -> T {
        self.norm_sqr().sqrt()
    }

    /// Phase angle in radians, `atan2(im, re)`.
    pub fn phase(&self) -> T {
        self.im.atan2(self.re)
    }

    #[inline(always)]
    pub fn scale(self, factor: T) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }
}

impl<T: Float> core::ops::Neg for Sample<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Sample<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> core::ops::Sub for Sample<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

pub type Sample32 = Sample<f32>;
pub type Sample64 = Sample<f64>;

/// Check the preconditions every transform shares: at least one sample and
/// no NaN or infinite component.
pub fn validate_samples<T: Float>(samples: &[Sample<T>]) -> Result<(), DftError> {
    if samples.is_empty() {
        return Err(DftError::InvalidLength);
    }
    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(DftError::NonFiniteInput { index }),
        None => Ok(()),
    }
}

/// An ordered, non-empty sequence of finite samples.
///
/// Order is meaningful: index `i` is the time step (for a signal) or the
/// frequency bin (for a spectrum). The fields are private so a `Signal` can
/// only be obtained through a validating constructor or a transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal<T: Float> {
    samples: Vec<Sample<T>>,
}

/// Frequency-domain view of the same data model.
pub type Spectrum<T> = Signal<T>;

impl<T: Float> Signal<T> {
    /// Take ownership of `samples` after validating them.
    pub fn new(samples: Vec<Sample<T>>) -> Result<Self, DftError> {
        validate_samples(&samples)?;
        Ok(Self { samples })
    }

    /// Copy and validate a borrowed slice.
    pub fn from_slice(samples: &[Sample<T>]) -> Result<Self, DftError> {
        validate_samples(samples)?;
        Ok(Self {
            samples: samples.to_vec(),
        })
    }

    /// Build a signal from real values with zero imaginary parts.
    pub fn from_real(values: &[T]) -> Result<Self, DftError> {
        Self::new(values.iter().map(|&re| Sample::real(re)).collect())
    }

    /// Build a signal from separate real and imaginary sequences.
    pub fn from_parts(re: &[T], im: &[T]) -> Result<Self, DftError> {
        if re.len() != im.len() {
            return Err(DftError::LengthMismatch);
        }
        Self::new(
            re.iter()
                .zip(im.iter())
                .map(|(&re, &im)| Sample::new(re, im))
                .collect(),
        )
    }

    /// Wrap transform output. Every element has already been computed in full.
    pub(crate) fn from_computed(samples: Vec<Sample<T>>) -> Self {
        debug_assert!(!samples.is_empty());
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Sample<T>] {
        &self.samples
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Sample<T>> {
        self.samples.iter()
    }

    pub fn into_vec(self) -> Vec<Sample<T>> {
        self.samples
    }

    /// Split into separate real and imaginary vectors.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        let mut re = Vec::with_capacity(self.samples.len());
        let mut im = Vec::with_capacity(self.samples.len());
        for s in self.samples {
            re.push(s.re);
            im.push(s.im);
        }
        (re, im)
    }

    /// Sum of `|x|²` over all samples.
    pub fn energy(&self) -> T {
        self.samples
            .iter()
            .fold(T::zero(), |acc, s| acc + s.norm_sqr())
    }
}

impl<T: Float> core::ops::Index<usize> for Signal<T> {
    type Output = Sample<T>;
    fn index(&self, index: usize) -> &Sample<T> {
        &self.samples[index]
    }
}

impl<T: Float> AsRef<[Sample<T>]> for Signal<T> {
    fn as_ref(&self) -> &[Sample<T>] {
        &self.samples
    }
}

impl<'a, T: Float> IntoIterator for &'a Signal<T> {
    type Item = &'a Sample<T>;
    type IntoIter = core::slice::Iter<'a, Sample<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<T: Float> TryFrom<Vec<Sample<T>>> for Signal<T> {
    type Error = DftError;
    fn try_from(samples: Vec<Sample<T>>) -> Result<Self, DftError> {
        Self::new(samples)
    }
}

impl<T: Float> From<Signal<T>> for Vec<Sample<T>> {
    fn from(signal: Signal<T>) -> Self {
        signal.samples
    }
}
