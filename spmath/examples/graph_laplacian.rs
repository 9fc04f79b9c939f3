//! Build the graph Laplacian of a small pixel grid and take one propagation step
//!
//! Run with `RUST_LOG=debug cargo run --example graph_laplacian` to see the
//! kernel's tracing output.

use spmath::{HashSparseMatrix, Kernel, KernelConfig, Result, SparseMatrix, SparseMatrixMut};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let (width, height) = (4, 3);
    let n = width * height;
    let intensities: Vec<f32> = (0..n).map(|i| ((i * 7) % 5) as f32 / 4.0).collect();

    let weights = build_affinity(width, height, &intensities)?;
    println!("Affinity graph: {n} pixels, {} edges", weights.nnz());

    let kernel = Kernel::new(KernelConfig::strict());

    // Degree vector d = W * 1
    let mut degrees = HashSparseMatrix::column_vector(n);
    kernel.sum_rows(&weights, &mut degrees)?;

    // L = D - W
    let mut negated = HashSparseMatrix::new(n, n);
    kernel.negate(&weights, &mut negated)?;
    let laplacian = kernel.add_diagonal(&negated, &degrees)?;
    println!("Laplacian: {} stored entries", laplacian.nnz());

    // Seed a label at the top-left pixel and push it through the graph once
    let mut seed = HashSparseMatrix::column_vector(n);
    seed.insert(0, 0, 1.0)?;
    let mut spread = HashSparseMatrix::column_vector(n);
    kernel.vector_matrix_multiply(&seed, &weights, &mut spread)?;
    println!("One step from pixel 0 reaches {} pixels", spread.nnz());

    // Every row of a Laplacian sums to zero, so L * 1 vanishes
    let mut residual = HashSparseMatrix::column_vector(n);
    kernel.sum_rows(&laplacian, &mut residual)?;
    let energy = kernel.dot_product(&residual, &residual)?;
    println!("Squared row-sum residual of L: {energy:e}");

    Ok(())
}

/// 4-neighbour affinities `exp(-(I_i - I_j)^2 / sigma)`
fn build_affinity(
    width: usize,
    height: usize,
    intensities: &[f32],
) -> Result<HashSparseMatrix<f32>> {
    const SIGMA: f32 = 0.1;

    let n = width * height;
    let mut weights = HashSparseMatrix::with_capacity(n, n, 4 * n);
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let mut link = |j: usize| -> Result<()> {
                let diff = intensities[i] - intensities[j];
                weights.insert(i, j, (-diff * diff / SIGMA).exp())
            };
            if x + 1 < width {
                link(i + 1)?;
            }
            if x > 0 {
                link(i - 1)?;
            }
            if y + 1 < height {
                link(i + width)?;
            }
            if y > 0 {
                link(i - width)?;
            }
        }
    }
    Ok(weights)
}
