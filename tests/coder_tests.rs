mod common;

use rstest::*;

use exact_arith_coder::utils::ideal_code_length;
use exact_arith_coder::{encode, train, ArithmeticEncoder, Error, Rational, TERMINATOR};

use crate::common::*;

fn r(numer: i64, denom: i64) -> Rational {
    Rational::new(numer, denom).unwrap()
}

#[test]
fn training_assigns_first_seen_intervals() {
    let table = train("aab").unwrap();

    let intervals = table
        .iter()
        .map(|entry| (entry.symbol, entry.interval.lower.clone(), entry.interval.upper.clone()))
        .collect::<Vec<_>>();

    assert_eq!(
        intervals,
        vec![
            ('a', r(0, 1), r(1, 2)),
            ('b', r(1, 2), r(3, 4)),
            (TERMINATOR, r(3, 4), r(1, 1)),
        ]
    );
}

#[rstest]
#[case("a")]
#[case("abracadabra")]
#[case("the quick brown fox jumps over the lazy dog")]
#[case("ünïcödé ✓ text")]
fn training_partitions_the_unit_interval(#[case] text: &str) {
    let table = train(text).unwrap();

    let mut expected_lower = Rational::zero();
    let mut widths = Rational::zero();
    for entry in table.iter() {
        assert_eq!(entry.interval.lower, expected_lower);
        assert!(entry.interval.upper > entry.interval.lower);
        assert_eq!(entry.interval.width(), r(entry.count as i64, table.total() as i64));

        widths = widths + entry.interval.width();
        expected_lower = entry.interval.upper.clone();
    }

    assert_eq!(expected_lower, Rational::one());
    assert_eq!(widths, Rational::one());
    assert_eq!(table.total(), text.chars().count() as u64 + 1);
}

#[test]
fn training_partitions_zipfian_corpora() {
    for seed in 0..5 {
        let table = train(&get_zipfian_text(seed, CORPUS_LENGTH)).unwrap();
        let widths = table
            .iter()
            .fold(Rational::zero(), |sum, entry| sum + entry.interval.width());

        assert_eq!(widths, Rational::one());
        assert_eq!(table.iter().last().unwrap().symbol, TERMINATOR);
    }
}

#[test]
fn training_rejects_the_terminator() {
    assert!(matches!(train("abc\0"), Err(Error::InvalidInput(_))));
}

#[test]
fn encoding_an_unknown_symbol_fails() {
    let table = train("aab").unwrap();
    assert_eq!(encode("abc", &table), Err(Error::UnknownSymbol('c')));
}

#[test]
fn encoding_is_deterministic() {
    let table = train("aab").unwrap();
    let bits = encode("aab", &table).unwrap();

    assert!(bits > 0);
    assert_eq!(encode("aab", &table).unwrap(), bits);
}

#[test]
fn encoding_with_a_certain_model_needs_no_bits() {
    // the terminator is the only symbol, hence it has probability 1
    let table = train("").unwrap();
    assert_eq!(encode("", &table).unwrap(), 0);
}

#[test]
fn encoding_the_empty_text_costs_the_terminator() {
    // the terminator has probability 1/4: the final interval is [3/4, 1)
    let table = train("aaa").unwrap();
    assert_eq!(encode("", &table).unwrap(), 3);
}

#[test]
fn longer_messages_never_need_fewer_bits() {
    let alphabet = ['a', 'b', 'c', 'd', 'e'];
    let table = train(&get_zipfian_text_over(7, CORPUS_LENGTH, &alphabet)).unwrap();
    let message = get_zipfian_text_over(8, 200, &alphabet);

    let mut last_bits = 0;
    for (end, _) in message.char_indices().step_by(10) {
        let bits = encode(&message[..end], &table).unwrap();
        assert!(bits >= last_bits, "prefix of length {end} needs {bits} < {last_bits} bits");
        last_bits = bits;
    }
}

#[test]
fn encoding_is_close_to_the_entropy() {
    let corpus = get_zipfian_text(3, 300);
    let table = train(&corpus).unwrap();

    let bits = encode(&corpus, &table).unwrap() as f64;
    let ideal = ideal_code_length(&table);

    assert!(bits >= ideal);
    assert!(bits <= ideal + 2.0);
}

#[test]
fn incremental_encoding_matches_the_one_shot_function() {
    let corpus = get_zipfian_text(4, 300);
    let table = train(&corpus).unwrap();

    let mut encoder = ArithmeticEncoder::new(&table);
    for symbol in corpus.chars() {
        encoder.encode(symbol).unwrap();
    }
    assert_eq!(encoder.encoded(), 300);
    assert_eq!(encoder.finish().unwrap(), encode(&corpus, &table).unwrap());
}

#[test]
fn the_same_table_can_be_shared_across_threads() {
    let table = train(&get_zipfian_text(5, CORPUS_LENGTH)).unwrap();
    let messages = (0..4)
        .map(|seed| get_zipfian_text_over(seed, 100, &['a', 'b', 'c']))
        .collect::<Vec<_>>();

    let expected = messages
        .iter()
        .map(|message| encode(message, &table).unwrap())
        .collect::<Vec<_>>();

    let table = &table;
    let actual = std::thread::scope(|scope| {
        let handles = messages
            .iter()
            .map(|message| scope.spawn(move || encode(message, table).unwrap()))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert_eq!(actual, expected);
}
