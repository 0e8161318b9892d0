/*
 * Utility functions and consts used by the tests.
 *
 */

use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

/// Size of the corpora used to test.
pub const CORPUS_LENGTH: usize = 2_000;

/// How many distinct symbols the zipfian distribution can output.
const ALPHABET_SIZE: u64 = 26;

/// Creates a text of `length` lowercase letters, sampled from a Zipfian distribution so that
/// `a` is the most frequent letter and `z` the least.
#[allow(dead_code)]
pub fn get_zipfian_text(seed: u64, length: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Zipf::new(ALPHABET_SIZE, 1.0).unwrap();

    (0..length)
        .map(|_| {
            let rank = distribution.sample(&mut rng) as u32;
            char::from_u32('a' as u32 + rank - 1).unwrap()
        })
        .collect()
}

/// Creates a text of `length` symbols drawn, with a Zipfian distribution, from the symbols of
/// `alphabet`.
#[allow(dead_code)]
pub fn get_zipfian_text_over(seed: u64, length: usize, alphabet: &[char]) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Zipf::new(alphabet.len() as u64, 1.0).unwrap();

    (0..length)
        .map(|_| alphabet[distribution.sample(&mut rng) as usize - 1])
        .collect()
}
