//! Background image column shown behind the panel when no camera is used.

#[cfg(test)]
#[path = "backgrounds_test.rs"]
mod backgrounds_test;

use rand::seq::SliceRandom;
use rand::Rng;

/// Directory the images are served from.
pub const BACKGROUND_DIR: &str = "/backgrounds";

pub const BACKGROUND_FILES: [&str; 17] = [
    "20-1400x1300.jpg",
    "238-1100x1200.jpg",
    "353-2000x2000.jpg",
    "367-1200x1200.jpg",
    "452-1100x1200.jpg",
    "457-2000x2000.jpg",
    "537-1200x1200.jpg",
    "55-1100x1200.jpg",
    "576-1200x1200.jpg",
    "608-1200x1200.jpg",
    "62-2000x2000.jpg",
    "659-2000x2000.jpg",
    "737-1100x1200.jpg",
    "776-2000x2000.jpg",
    "831-1400x1300.jpg",
    "842-1200x1200.jpg",
    "918-1400x1300.jpg",
];

/// Every background as a site-absolute URL, in catalogue order.
#[must_use]
pub fn background_urls() -> Vec<String> {
    BACKGROUND_FILES.iter().map(|f| format!("{BACKGROUND_DIR}/{f}")).collect()
}

/// A shuffled copy of `items` (Fisher–Yates); `items` itself is untouched.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
