use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dsi_progress_logger::*;
use exact_arith_coder::utils::{cross_entropy, entropy, ideal_code_length};
use exact_arith_coder::{encode, ProbabilityTableBuilder};
use itertools::Itertools;
use log::info;
use num_bigint::BigInt;

#[derive(Parser, Debug)]
#[command(about = "Estimates the size of a text coded with an order-0 arithmetic coder", long_about = None)]
struct Args {
    /// The text the probability model is trained on.
    corpus: PathBuf,

    /// The text to encode. Defaults to the corpus itself.
    #[clap(short, long)]
    message: Option<PathBuf>,

    /// Prints the model, with every interval bound trimmed to a denominator of at most this value.
    #[clap(long)]
    trim: Option<u64>,

    /// Increases the logging verbosity, which defaults to info.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silences all logging.
    #[clap(short, long)]
    quiet: bool,
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let corpus = fs::read_to_string(&args.corpus)
        .with_context(|| format!("Cannot read the corpus {}", args.corpus.display()))?;

    let mut builder = ProbabilityTableBuilder::new();
    let mut pl = ProgressLogger::default();

    pl.start("Counting the symbols of the corpus...");
    for line in corpus.split_inclusive('\n') {
        builder
            .push_text(line)
            .with_context(|| format!("Invalid corpus {}", args.corpus.display()))?;
        pl.update();
    }
    pl.done();

    let table = builder.build();

    let message = match &args.message {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read the message {}", path.display()))?,
        None => corpus.clone(),
    };

    info!("Encoding {} symbols...", message.chars().count());
    let bits = encode(&message, &table).context("The message can't be coded with the corpus model")?;
    let symbols = message.chars().count() + 1;

    println!("symbols (with terminator): {symbols}");
    println!("encoded size: {bits} bits ({} bytes)", bits.div_ceil(8));
    println!("bits per symbol: {:.4}", bits as f64 / symbols as f64);

    match &args.message {
        None => {
            println!(
                "order-0 entropy: {:.4} bits per symbol, {:.1} bits in total",
                entropy(&table.counts(), table.total() as f64),
                ideal_code_length(&table)
            );
        }
        Some(_) => {
            let frequencies = table.frequencies_of(&message)?;
            println!(
                "cross-entropy w.r.t. the corpus model: {:.4} bits per symbol",
                cross_entropy(
                    &frequencies,
                    symbols as f64,
                    &table.counts(),
                    table.total() as f64
                )
            );
        }
    }

    if let Some(max_d) = args.trim {
        let max_d = BigInt::from(max_d);
        println!("{:<10} | {:<10} | Interval", "Symbol", "Count");

        for entry in table.iter().sorted_by(|a, b| b.count.cmp(&a.count)) {
            println!(
                "{:<10} | {:<10} | [{}, {})",
                format!("{:?}", entry.symbol),
                entry.count,
                entry.interval.lower.trim(&max_d)?,
                entry.interval.upper.trim(&max_d)?,
            );
        }
    }

    Ok(())
}
