//! Forward and inverse DFT of a short real signal.
use plaindft::{forward_transform, inverse_transform, Signal};

fn main() {
    let x = Signal::from_real(&[1.0, 2.0, 3.0, 4.0]).expect("valid signal");
    let spectrum = forward_transform(&x).expect("forward dft");
    println!("DFT:");
    for (k, c) in spectrum.iter().enumerate() {
        println!("{k:4} {:18.8} {:18.8}j", c.re, c.im);
    }

    let back = inverse_transform(&spectrum).expect("inverse dft");
    println!("IDFT:");
    for (n, s) in back.iter().enumerate() {
        println!("{n:4} {:18.8} {:18.8}j", s.re, s.im);
    }
}
