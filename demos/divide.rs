//! The sync half of the crate: a panicky operation behind the adapter,
//! consumed without any unwinding.

use calmly::{caught, success, Outcome, PanicPayload};

struct Calculator {
    numerator: u32,
}

impl Calculator {
    #[caught]
    fn divide_by(&self, denominator: u32) -> Outcome<u32, PanicPayload> {
        success(self.numerator / denominator)
    }
}

fn main() {
    let calc = Calculator { numerator: 100 };

    let fine = calc.divide_by(4);
    println!("100 / 4 is {}", fine.unwrap());

    // dividing by zero panics inside divide_by, but the adapter catches it
    // and the failure arrives in-band
    let broken = calc.divide_by(0);
    println!("100 / 0 is a failure: {}", broken.is_failure());

    let recovered = broken.on_error(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .copied()
            .unwrap_or("something unprintable");
        println!("recovering from: {msg}");
        0
    });
    println!("recovered value: {recovered}");
}
