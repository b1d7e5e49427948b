// Test intent: checks algebraic DFT laws (round-trip, linearity, Parseval) on random signals.
use plaindft::{forward_transform, inverse_transform, Sample64, Signal};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Relative tolerance for round-trip and linearity checks.
const REL_TOL: f64 = 1e-9;
/// Relative tolerance for energy conservation.
const PARSEVAL_TOL: f64 = 1e-6;

fn signal_strategy(max_len: usize) -> impl Strategy<Value = Vec<Sample64>> {
    proptest::collection::vec(
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(re, im)| Sample64::new(re, im)),
        1..max_len,
    )
}

fn peak(samples: &[Sample64]) -> f64 {
    samples
        .iter()
        .map(|s| s.re.abs().max(s.im.abs()))
        .fold(1.0, f64::max)
}

proptest! {
    #[test]
    fn prop_roundtrip(samples in signal_strategy(48)) {
        let x = Signal::new(samples).unwrap();
        let back = inverse_transform(&forward_transform(&x).unwrap()).unwrap();
        prop_assert_eq!(back.len(), x.len());
        let scale = peak(x.as_slice());
        for (a, b) in back.iter().zip(x.iter()) {
            prop_assert!((a.re - b.re).abs() <= REL_TOL * scale, "re {} vs {}", a.re, b.re);
            prop_assert!((a.im - b.im).abs() <= REL_TOL * scale, "im {} vs {}", a.im, b.im);
        }
    }

    #[test]
    fn prop_linearity(
        pair in (1usize..40).prop_flat_map(|n| (
            proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), n),
            proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), n),
        )),
        a in -10.0f64..10.0,
        b in -10.0f64..10.0,
    ) {
        let (xs, ys) = pair;
        let x: Vec<Sample64> = xs.iter().map(|&(re, im)| Sample64::new(re, im)).collect();
        let y: Vec<Sample64> = ys.iter().map(|&(re, im)| Sample64::new(re, im)).collect();
        let combined: Vec<Sample64> = x
            .iter()
            .zip(y.iter())
            .map(|(&p, &q)| p.scale(a) + q.scale(b))
            .collect();

        let fx = forward_transform(&Signal::new(x.clone()).unwrap()).unwrap();
        let fy = forward_transform(&Signal::new(y).unwrap()).unwrap();
        let fc = forward_transform(&Signal::new(combined).unwrap()).unwrap();

        let scale = 1000.0 * 20.0 * x.len() as f64;
        for k in 0..x.len() {
            let expected = fx[k].scale(a) + fy[k].scale(b);
            prop_assert!((fc[k].re - expected.re).abs() <= REL_TOL * scale);
            prop_assert!((fc[k].im - expected.im).abs() <= REL_TOL * scale);
        }
    }

    #[test]
    fn prop_parseval(samples in signal_strategy(64)) {
        let x = Signal::new(samples).unwrap();
        let spectrum = forward_transform(&x).unwrap();
        let time_energy = x.energy();
        let freq_energy = spectrum.energy() / x.len() as f64;
        prop_assert!(
            (time_energy - freq_energy).abs() <= PARSEVAL_TOL * time_energy.max(1.0),
            "{} vs {}", time_energy, freq_energy
        );
    }
}

#[test]
fn roundtrip_seeded_lengths() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [1usize, 2, 3, 5, 8, 17, 64, 100, 257] {
        let samples: Vec<Sample64> = (0..n)
            .map(|_| Sample64::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();
        let x = Signal::new(samples).unwrap();
        let back = inverse_transform(&forward_transform(&x).unwrap()).unwrap();
        for (a, b) in back.iter().zip(x.iter()) {
            assert!((a.re - b.re).abs() <= REL_TOL * 10.0, "n={} re: {} vs {}", n, a.re, b.re);
            assert!((a.im - b.im).abs() <= REL_TOL * 10.0, "n={} im: {} vs {}", n, a.im, b.im);
        }
    }
}

#[test]
fn real_input_has_hermitian_spectrum() {
    let x = Signal::<f64>::from_real(&[0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0])
        .unwrap();
    let spectrum = forward_transform(&x).unwrap();
    let n = spectrum.len();
    for k in 1..n {
        assert!((spectrum[k].re - spectrum[n - k].re).abs() < 1e-9);
        assert!((spectrum[k].im + spectrum[n - k].im).abs() < 1e-9);
    }
}
