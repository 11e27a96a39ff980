//! Multiply the matrices written by the `write_matrix` example

use spmat::{load_pair, LogProgress, MatrixSummary, MultiplyConfig, MultiplyStrategy, Operation};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    let (first, second) = ("example_a.txt", "example_b.txt");

    if !std::path::Path::new(first).exists() || !std::path::Path::new(second).exists() {
        println!("Input files not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    let start = Instant::now();
    let (a, b) = load_pair(first, second)?;
    println!("Loaded both matrices in {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);

    for strategy in [MultiplyStrategy::RowIndexed, MultiplyStrategy::Naive] {
        let config = MultiplyConfig::default()
            .with_chunk_size(50_000_000)
            .with_strategy(strategy);
        let mut progress = LogProgress::new();

        let start = Instant::now();
        let product = Operation::Multiply.apply(&a, &b, &config, Some(&mut progress))?;
        let elapsed = start.elapsed();

        println!("\n{strategy:?} multiply in {elapsed:.2?}");
        println!("{}", MatrixSummary::of(&product));
    }
    Ok(())
}
