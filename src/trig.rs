//! Trigonometric basis shared by the forward and inverse kernels.
//!
//! Both transforms only ever need `cos`/`sin` of `θ = 2π·k·n/N`. Because the
//! basis is periodic in `k·n` with period `N`, the product is reduced to
//! `m = (k·n) mod N` first, so there are only `N` distinct angles.
//! [`TrigTable`] evaluates them once per call; [`DirectTrig`] evaluates them on
//! demand. Both evaluate the same expression for a given `m`, so they produce
//! bit-identical results.

use alloc::vec::Vec;

use crate::dft::DftError;
use crate::num::Float;

/// Convert a transform length into `T`, rejecting zero and lengths that are
/// not exactly representable.
pub fn length_as<T: Float>(n: usize) -> Result<T, DftError> {
    if n == 0 {
        return Err(DftError::InvalidLength);
    }
    T::from_usize(n).ok_or(DftError::InvalidLength)
}

/// `(k·idx) mod n` without overflow. `n` must be non-zero.
#[inline(always)]
pub fn reduced_index(n: usize, k: usize, idx: usize) -> usize {
    ((k as u128 * idx as u128) % n as u128) as usize
}

#[inline(always)]
fn angle_of_index<T: Float>(m: usize, len: T) -> T {
    T::two_pi() * T::from_usize_lossy(m) / len
}

/// `θ = 2π·k·idx/n`, evaluated on the reduced index.
pub fn angle<T: Float>(n: usize, k: usize, idx: usize) -> Result<T, DftError> {
    let len = length_as::<T>(n)?;
    Ok(angle_of_index(reduced_index(n, k, idx), len))
}

/// Source of `(cos θ, sin θ)` for a fixed length.
pub trait Basis<T: Float> {
    /// Transform length `N` this basis was built for.
    fn len(&self) -> usize;

    /// `(cos θ, sin θ)` for `θ = 2π·k·idx/N`.
    fn cos_sin(&self, k: usize, idx: usize) -> (T, T);
}

/// `cos(2πm/N)` and `sin(2πm/N)` for `m = 0..N`, stored as separate arrays.
#[derive(Clone, Debug)]
pub struct TrigTable<T: Float> {
    cos: Vec<T>,
    sin: Vec<T>,
}

impl<T: Float> TrigTable<T> {
    pub fn new(n: usize) -> Result<Self, DftError> {
        let len = length_as::<T>(n)?;
        let mut cos = Vec::with_capacity(n);
        let mut sin = Vec::with_capacity(n);
        for m in 0..n {
            let (s, c) = angle_of_index(m, len).sin_cos();
            cos.push(c);
            sin.push(s);
        }
        Ok(Self { cos, sin })
    }

    /// Entry for an already reduced index.
    pub fn get(&self, m: usize) -> (T, T) {
        (self.cos[m], self.sin[m])
    }
}

impl<T: Float> Basis<T> for TrigTable<T> {
    fn len(&self) -> usize {
        self.cos.len()
    }

    #[inline(always)]
    fn cos_sin(&self, k: usize, idx: usize) -> (T, T) {
        let m = reduced_index(self.cos.len(), k, idx);
        (self.cos[m], self.sin[m])
    }
}

/// Evaluates `sin`/`cos` for every `(k, idx)` pair.
#[derive(Clone, Copy, Debug)]
pub struct DirectTrig<T: Float> {
    n: usize,
    len: T,
}

impl<T: Float> DirectTrig<T> {
    pub fn new(n: usize) -> Result<Self, DftError> {
        Ok(Self {
            n,
            len: length_as::<T>(n)?,
        })
    }
}

impl<T: Float> Basis<T> for DirectTrig<T> {
    fn len(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn cos_sin(&self, k: usize, idx: usize) -> (T, T) {
        let (s, c) = angle_of_index(reduced_index(self.n, k, idx), self.len).sin_cos();
        (c, s)
    }
}

/// How the kernels obtain their trigonometric terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelStrategy {
    /// Precompute the `N` distinct values once per call.
    #[default]
    Table,
    /// Evaluate `sin`/`cos` inside the inner loop.
    Direct,
}

impl KernelStrategy {
    pub fn basis<T: Float>(self, n: usize) -> Result<KernelBasis<T>, DftError> {
        Ok(match self {
            KernelStrategy::Table => KernelBasis::Table(TrigTable::new(n)?),
            KernelStrategy::Direct => KernelBasis::Direct(DirectTrig::new(n)?),
        })
    }
}

/// Basis chosen at runtime from a [`KernelStrategy`].
#[derive(Clone, Debug)]
pub enum KernelBasis<T: Float> {
    Table(TrigTable<T>),
    Direct(DirectTrig<T>),
}

impl<T: Float> Basis<T> for KernelBasis<T> {
    fn len(&self) -> usize {
        match self {
            KernelBasis::Table(t) => t.len(),
            KernelBasis::Direct(d) => d.len(),
        }
    }

    #[inline(always)]
    fn cos_sin(&self, k: usize, idx: usize) -> (T, T) {
        match self {
            KernelBasis::Table(t) => t.cos_sin(k, idx),
            KernelBasis::Direct(d) => d.cos_sin(k, idx),
        }
    }
}
