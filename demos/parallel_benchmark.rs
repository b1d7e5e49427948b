//! Times sequential and parallel transforms for growing lengths.
use plaindft::parallel::{parallel_threads, ParallelDft};
use plaindft::{DftImpl, ScalarDft, Signal};
use std::time::Instant;

fn main() {
    let scalar = ScalarDft::<f64>::default();
    let parallel = ParallelDft::<f64>::default();
    println!("workers: {}", parallel_threads());
    for &n in &[256usize, 512, 1024, 2047, 2048, 2049] {
        let values: Vec<f64> = (1..=n).map(|v| v as f64).collect();
        let x = Signal::from_real(&values).expect("valid signal");

        let start = Instant::now();
        let a = scalar.forward(&x).expect("scalar dft");
        let t_scalar = start.elapsed();

        let start = Instant::now();
        let b = parallel.forward(&x).expect("parallel dft");
        let t_parallel = start.elapsed();

        assert_eq!(a, b);
        println!("n={n:5} scalar={t_scalar:?} parallel={t_parallel:?}");
    }
}
