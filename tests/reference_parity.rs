// Test intent: compares the direct-summation DFT against rustfft on reference signals.
use plaindft::{forward_transform, inverse_transform, Sample64, Signal};
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

/// Absolute tolerance against the optimized reference.
const ABS_TOL: f64 = 1e-9;

fn reference_fft(samples: &[Sample64]) -> Vec<Complex64> {
    let mut buffer: Vec<Complex64> = samples
        .iter()
        .map(|s| Complex64::new(s.re, s.im))
        .collect();
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);
    buffer
}

fn check(signal: Signal<f64>) {
    let spectrum = forward_transform(&signal).unwrap();
    let expected = reference_fft(signal.as_slice());
    for (k, (got, want)) in spectrum.iter().zip(expected.iter()).enumerate() {
        assert!(
            (got.re - want.re).abs() < ABS_TOL && (got.im - want.im).abs() < ABS_TOL,
            "bin {} of {}: {:?} vs {:?}",
            k,
            signal.len(),
            got,
            want
        );
    }
    let back = inverse_transform(&spectrum).unwrap();
    for (got, want) in back.iter().zip(signal.iter()) {
        assert!((got.re - want.re).abs() < ABS_TOL);
        assert!((got.im - want.im).abs() < ABS_TOL);
    }
}

#[test]
fn complex_leading_sample() {
    check(
        Signal::new(vec![
            Sample64::new(1.0, 2.0),
            Sample64::real(2.0),
            Sample64::real(3.0),
            Sample64::real(4.0),
        ])
        .unwrap(),
    );
}

#[test]
fn odd_length_ramp() {
    let values: Vec<f64> = (1..=11).map(f64::from).collect();
    check(Signal::from_real(&values).unwrap());
}

#[test]
fn square_wave() {
    check(
        Signal::from_real(&[
            0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0,
        ])
        .unwrap(),
    );
}

#[test]
fn integer_waveform() {
    check(
        Signal::from_real(&[
            150.0, 810.0, 1069.0, 959.0, 850.0, 959.0, 1069.0, 810.0, 150.0, -510.0, -769.0,
            -659.0, -550.0, -659.0, -769.0, -510.0,
        ])
        .unwrap(),
    );
}

#[test]
fn lengths_around_powers_of_two() {
    for n in [7usize, 8, 9, 31, 32, 33, 127, 128, 129] {
        let samples: Vec<Sample64> = (0..n)
            .map(|i| Sample64::new((i as f64 * 0.3).cos(), (i as f64 * 0.7).sin()))
            .collect();
        check(Signal::new(samples).unwrap());
    }
}
