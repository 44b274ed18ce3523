//! Generates pseudo-random `f32` matrices and stores them as raw row-major binary files.

pub mod builder;
pub mod config;
pub mod error;
pub mod generation;
pub mod storage;

use std::path::Path;

use log::debug;
use rand::{Rng, rngs::StdRng};

pub use builder::GeneratorBuilder;
pub use config::{DistributionConfig, MatrixConfig};
pub use error::{GenErr, Result};
pub use generation::{ConstMatrixGen, MatrixGen, RandMatrixGen};
pub use storage::{read_matrix, write_matrix};

/// Generates a `rows x cols` standard uniform matrix using `rng` and writes it to
/// `filename`.
///
/// # Arguments
/// * `filename` - The destination file, its parent directory must already exist.
/// * `rows` - The amount of rows of the matrix.
/// * `cols` - The amount of columns of the matrix.
/// * `rng` - The random source.
///
/// # Returns
/// An `InvalidConfig` if the shape overflows or an `Io` error if the file can't be
/// created or written.
pub fn generate_and_write<P, R>(filename: P, rows: usize, cols: usize, rng: &mut R) -> Result<()>
where
    P: AsRef<Path>,
    R: Rng,
{
    let mut matrix_gen = RandMatrixGen::standard();
    generate_and_write_using(filename, rows, cols, &mut matrix_gen, rng)
}

/// Generates and writes a matrix with an explicit generator and random source.
///
/// # Arguments
/// * `filename` - The destination file.
/// * `rows` - The amount of rows of the matrix.
/// * `cols` - The amount of columns of the matrix.
/// * `matrix_gen` - The generator that fills the matrix.
/// * `rng` - The random source.
///
/// # Returns
/// An `InvalidConfig` if the shape overflows or an `Io` error if the file can't be
/// created or written.
pub fn generate_and_write_using<P, R, G>(
    filename: P,
    rows: usize,
    cols: usize,
    matrix_gen: &mut G,
    rng: &mut R,
) -> Result<()>
where
    P: AsRef<Path>,
    R: Rng,
    G: MatrixGen<R> + ?Sized,
{
    if storage::byte_len(rows, cols).is_none() {
        return Err(GenErr::InvalidConfig(format!("shape {rows}x{cols} overflows")));
    }

    let matrix = matrix_gen.generate(rng, rows, cols);
    debug!(rows = rows, cols = cols; "generated matrix");
    write_matrix(filename, &matrix)
}

/// Resolves everything from `config` (rng seed and distribution included), then generates
/// and writes the matrix.
///
/// # Arguments
/// * `config` - The full generation config.
///
/// # Returns
/// An `InvalidDistribution` if the distribution can't be built or an `Io` error if the
/// file can't be created or written.
pub fn generate_and_write_with(config: &MatrixConfig) -> Result<()> {
    let builder = GeneratorBuilder::new();
    let mut rng = builder.build_rng(config.seed);
    let mut matrix_gen = builder.build::<StdRng>(config.distribution)?;
    generate_and_write_using(
        &config.filename,
        config.rows,
        config.cols,
        matrix_gen.as_mut(),
        &mut rng,
    )
}
