use std::fs;
use std::io;
use std::path::Path;

use log::trace;
use rand::Rng;

mod macros;

/// Draws a value uniformly from `min, min + step, ...` up to and including
/// the largest grid point that is not above `max`.
///
/// # Panics
///
/// If `step` is zero or `min > max`.
pub fn uniform_step<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32, step: u32) -> u32 {
    assert!(step > 0 && min <= max, "invalid grid: {}..={} in steps of {}", min, max, step);

    let steps = (max - min) / step;
    min + step * rng.gen_range(0..=steps)
}

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}
