//! Demonstrates enabling verbose logging for plaindft.
use plaindft::{forward_transform, inverse_transform, Signal};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let x = Signal::from_real(&[1.0, 2.0, 3.0, 4.0]).expect("valid signal");
    let spectrum = forward_transform(&x).expect("forward dft");
    inverse_transform(&spectrum).expect("inverse dft");
}
