//! Prints per-bin amplitude and phase next to rustfft's result for the same input.
use plaindft::{forward_transform, Signal};
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

fn main() {
    let samples = [
        150.0, 810.0, 1069.0, 959.0, 850.0, 959.0, 1069.0, 810.0, 150.0, -510.0, -769.0, -659.0,
        -550.0, -659.0, -769.0, -510.0,
    ];
    let x = Signal::from_real(&samples).expect("valid signal");
    let spectrum = forward_transform(&x).expect("forward dft");

    let mut reference: Vec<Complex64> = samples.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    FftPlanner::<f64>::new()
        .plan_fft_forward(reference.len())
        .process(&mut reference);

    let n = spectrum.len() as f64;
    for (k, (c, r)) in spectrum.iter().zip(reference.iter()).enumerate() {
        let status = if (c.re - r.re).abs() < 1e-10 && (c.im - r.im).abs() < 1e-10 {
            "OK"
        } else {
            "MISMATCH"
        };
        println!(
            "{k:4} {:18.8} {:18.8}j {status:>8} {:12.6} {:12.6}",
            c.re,
            c.im,
            c.magnitude() * 2.0 / n,
            c.phase()
        );
    }
}
