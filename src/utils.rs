//! Information-theoretic bounds used to judge the bit counts given by the arithmetic coder.

use std::ops::Neg;

use crate::arith::ProbabilityTable;

/// Given the frequencies of a distribution P summing to `total_freq`, calculates its entropy,
/// in bits per symbol:
/// ```text
/// H(P) = - ∑ p(x) * log2(p(x))
/// ```
/// Symbols with frequency 0 don't contribute.
pub fn entropy(distr: &[u64], total_freq: f64) -> f64 {
    let mut entropy = 0.0;

    for freq in distr.iter().filter(|freq| **freq > 0) {
        let pr = *freq as f64 / total_freq;
        entropy += pr * f64::log2(pr);
    }
    entropy.neg()
}

/// The average number of bits per symbol paid to code a message with the symbol frequencies
/// `message_freqs` using a model trained on `model_freqs`:
/// ```text
/// H(P, Q) = - ∑ p(x) * log2(q(x))
/// ```
/// Both slices list the same symbols in table order. Symbols absent from the message don't
/// contribute.
pub fn cross_entropy(
    message_freqs: &[u64],
    message_len: f64,
    model_freqs: &[u64],
    model_total: f64,
) -> f64 {
    assert_eq!(
        message_freqs.len(),
        model_freqs.len(),
        "message and model must count the same symbols"
    );

    message_freqs
        .iter()
        .zip(model_freqs)
        .filter(|(message_freq, _)| **message_freq > 0)
        .map(|(message_freq, model_freq)| {
            let p = *message_freq as f64 / message_len;
            p * f64::log2(*model_freq as f64 / model_total)
        })
        .sum::<f64>()
        .neg()
}

/// The ideal number of bits needed to code the sequence the table was trained on, terminator
/// included, with its own order-0 model. Arithmetic coding gets within 2 bits of this value.
pub fn ideal_code_length(table: &ProbabilityTable) -> f64 {
    let total = table.total() as f64;
    entropy(&table.counts(), total) * total
}
