//! Write a pair of random sparse matrices for the other examples

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::{write_matrix, Matrix, WriteOptions};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    let (rows, inner, cols) = (2_000, 1_500, 2_500);
    let nnz = 20_000;

    println!("Writing random matrices: {rows} x {inner} and {inner} x {cols}, ~{nnz} non-zeros each");

    let mut rng = StdRng::seed_from_u64(17);
    let start = Instant::now();
    let a = random_matrix(&mut rng, rows, inner, nnz);
    let b = random_matrix(&mut rng, inner, cols, nnz);
    println!("Built matrices in {:?}", start.elapsed());

    let start = Instant::now();
    write_matrix("example_a.txt", &a, WriteOptions::default())?;
    write_matrix("example_b.txt", &b, WriteOptions::default())?;
    println!("Written in {:?}", start.elapsed());
    println!("\nRun 'cargo run --example multiply_files' to multiply them!");
    Ok(())
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> Matrix {
    let mut m = Matrix::with_capacity(rows, cols, nnz);
    for _ in 0..nnz {
        let r = rng.gen_range(0..rows as i64);
        let c = rng.gen_range(0..cols as i64);
        m.set(r, c, rng.gen_range(-9..=9));
    }
    m
}
