//! `utm normalize <text>` – print the slug form of a value.

use utm_core::normalize;

pub fn run_normalize(text: &str) {
    println!("{}", normalize(text));
}
