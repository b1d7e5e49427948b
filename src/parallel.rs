//! Multi-threaded transforms built on Rayon.
//!
//! Every output index depends only on the complete, immutable input, so the
//! index range is split across workers that each write their own elements.
//! The per-element arithmetic is the same as the sequential kernels, which
//! makes the output bit-identical to [`crate::dft::ScalarDft`].
//!
//! Short inputs stay on the calling thread. The cut-over length and the
//! worker count can be set with `PLAINDFT_PAR_THRESHOLD` and
//! `PLAINDFT_PAR_THREADS`, or overridden at runtime with
//! [`set_parallel_threshold`] and [`set_parallel_threads`].

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use rayon::prelude::*;

use crate::dft::{forward_bin, forward_kernel, inverse_bin, inverse_kernel, DftError, DftImpl};
use crate::num::{Float, Sample, Signal, Spectrum};
use crate::trig::{length_as, KernelStrategy};

/// Length below which the sequential kernel is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// `0` means no override.
static PARALLEL_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_THREADS_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_ENV: OnceLock<ParallelEnv> = OnceLock::new();

struct ParallelEnv {
    threshold: usize,
    threads: usize,
}

fn parallel_env() -> &'static ParallelEnv {
    PARALLEL_ENV.get_or_init(|| {
        let threshold = std::env::var("PLAINDFT_PAR_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
        let threads = std::env::var("PLAINDFT_PAR_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or_else(|| num_cpus::get().max(1));
        ParallelEnv { threshold, threads }
    })
}

/// Set the minimum length that is split across workers.
///
/// Passing `0` reverts to the environment variable or the built-in default.
pub fn set_parallel_threshold(threshold: usize) {
    PARALLEL_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

/// Override the number of workers. `0` reverts to the environment variable or
/// the number of CPUs.
pub fn set_parallel_threads(threads: usize) {
    PARALLEL_THREADS_OVERRIDE.store(threads, Ordering::Relaxed);
}

pub fn parallel_threshold() -> usize {
    match PARALLEL_THRESHOLD_OVERRIDE.load(Ordering::Relaxed) {
        0 => parallel_env().threshold,
        t => t,
    }
}

pub fn parallel_threads() -> usize {
    match PARALLEL_THREADS_OVERRIDE.load(Ordering::Relaxed) {
        0 => parallel_env().threads,
        t => t,
    }
}

/// Run `op` on the global pool when it already has the requested width,
/// otherwise on a pool built for this call.
fn in_pool<R, F>(op: F) -> Result<R, DftError>
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    let threads = parallel_threads();
    if threads == rayon::current_num_threads() {
        return Ok(op());
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|_e| {
            crate::dft_debug!("worker pool with {} threads failed: {}", threads, _e);
            DftError::ThreadPool
        })?;
    Ok(pool.install(op))
}

/// Rayon-backed DFT.
#[derive(Debug, Clone, Copy)]
pub struct ParallelDft<T: Float> {
    strategy: KernelStrategy,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Float> Default for ParallelDft<T> {
    fn default() -> Self {
        Self::new(KernelStrategy::default())
    }
}

impl<T: Float> ParallelDft<T> {
    pub fn new(strategy: KernelStrategy) -> Self {
        Self {
            strategy,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T: Float> DftImpl<T> for ParallelDft<T> {
    fn forward(&self, input: &Signal<T>) -> Result<Spectrum<T>, DftError> {
        let samples = input.as_slice();
        let n = samples.len();
        let basis = self.strategy.basis::<T>(n)?;
        if n < parallel_threshold() {
            crate::dft_debug!("forward dft: n={} below parallel threshold", n);
            return Ok(Signal::from_computed(forward_kernel(samples, &basis)));
        }
        crate::dft_debug!("forward dft: n={} on {} workers", n, parallel_threads());
        let out: Vec<Sample<T>> = in_pool(|| {
            (0..n)
                .into_par_iter()
                .map(|k| forward_bin(samples, &basis, k))
                .collect()
        })?;
        Ok(Signal::from_computed(out))
    }

    fn inverse(&self, input: &Spectrum<T>) -> Result<Signal<T>, DftError> {
        let samples = input.as_slice();
        let n = samples.len();
        let len = length_as::<T>(n)?;
        let basis = self.strategy.basis::<T>(n)?;
        if n < parallel_threshold() {
            crate::dft_debug!("inverse dft: n={} below parallel threshold", n);
            return Ok(Signal::from_computed(inverse_kernel(samples, &basis, len)));
        }
        crate::dft_debug!("inverse dft: n={} on {} workers", n, parallel_threads());
        let out: Vec<Sample<T>> = in_pool(|| {
            (0..n)
                .into_par_iter()
                .map(|idx| inverse_bin(samples, &basis, idx, len))
                .collect()
        })?;
        Ok(Signal::from_computed(out))
    }
}

pub fn forward_parallel<T: Float>(samples: &Signal<T>) -> Result<Spectrum<T>, DftError> {
    ParallelDft::default().forward(samples)
}

pub fn inverse_parallel<T: Float>(coefficients: &Spectrum<T>) -> Result<Signal<T>, DftError> {
    ParallelDft::default().inverse(coefficients)
}

/// Transform independent signals concurrently, one per task.
pub fn batch_parallel<T: Float>(signals: &[Signal<T>]) -> Result<Vec<Spectrum<T>>, DftError> {
    let dft = crate::dft::ScalarDft::<T>::default();
    in_pool(|| {
        signals
            .par_iter()
            .map(|s| dft.forward(s))
            .collect::<Result<Vec<_>, DftError>>()
    })?
}
