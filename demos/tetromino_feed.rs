//! Example feeding tetromino shapes from a history-aware sampler.
//!
//! The sampler returns indices in [0, 7); the game maps them onto its own
//! shape catalog. Compared with plain uniform sampling, the same shape shows
//! up twice in a row far less often.
//!
//! Run with: cargo run --example tetromino_feed

use samplekit::prelude::*;

const SHAPES: [char; 7] = ['I', 'O', 'T', 'S', 'Z', 'J', 'L'];

fn immediate_repeats<S: IndexSampler>(sampler: &mut S, n: usize) -> usize {
    let mut prev = sampler.next_index();
    let mut repeats = 0;
    for _ in 0..n {
        let next = sampler.next_index();
        if next == prev {
            repeats += 1;
        }
        prev = next;
    }
    repeats
}

fn main() -> Result<(), ConfigError> {
    println!("=== Tetromino Feed Example ===\n");

    // Pre-seed history so the opening pieces avoid S, Z and O
    let mut feed = SamplerBuilder::new(SHAPES.len())
        .history_capacity(4)
        .retry_limit(6)
        .initial_history([4, 3, 4, 1])
        .seed(2024)
        .try_build_history()?;

    println!(
        "bound={} history_capacity={} retry_limit={}",
        feed.bound(),
        feed.history_capacity(),
        feed.retry_limit()
    );

    let opening: String = feed.samples().take(28).map(|i| SHAPES[i]).collect();
    println!("First 28 pieces: {opening}");

    let recent: Vec<char> = feed.history().iter().map(|i| SHAPES[i]).collect();
    println!("Recent history (oldest first): {recent:?}\n");

    let trials = 100_000;
    let mut uniform = SamplerBuilder::new(SHAPES.len())
        .seed(2024)
        .try_build(SamplerPolicy::Uniform)?;
    let mut history = SamplerBuilder::new(SHAPES.len())
        .seed(2024)
        .try_build(SamplerPolicy::History)?;

    println!("Immediate repeats over {trials} pieces:");
    println!("  uniform: {}", immediate_repeats(&mut uniform, trials));
    println!("  history: {}", immediate_repeats(&mut history, trials));

    Ok(())
}
