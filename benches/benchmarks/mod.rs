use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

pub mod encoder;
pub mod model_builder;
pub mod rational;

/// Size of the corpus used to build the model.
const CORPUS_LENGTH: usize = 1_000_000;

/// Size of the messages used to bench the encoder. Rationals grow with every symbol, keep it small.
const MESSAGE_LENGTH: usize = 500;

/// How many distinct symbols the zipfian distribution can output.
const ALPHABET_SIZE: u64 = 64;

/// Creates a text of `length` symbols sampled from a Zipfian distribution over the
/// [`ALPHABET_SIZE`] code points following `'!'`.
fn zipfian_text(seed: u64, length: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Zipf::new(ALPHABET_SIZE, 1.0).unwrap();

    (0..length)
        .map(|_| char::from_u32('!' as u32 + distribution.sample(&mut rng) as u32 - 1).unwrap())
        .collect()
}
