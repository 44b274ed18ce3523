use ndarray::Array2;
use rand::Rng;

pub trait MatrixGen<R: Rng> {
    /// Should fill a fresh `rows x cols` matrix.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `rows` - The amount of rows of the matrix.
    /// * `cols` - The amount of columns of the matrix.
    ///
    /// # Returns
    /// The generated matrix, in standard (row-major) layout.
    fn generate(&mut self, rng: &mut R, rows: usize, cols: usize) -> Array2<f32>;
}
