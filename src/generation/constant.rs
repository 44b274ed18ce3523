use ndarray::Array2;
use rand::Rng;

use super::MatrixGen;

/// A matrix generator that fills every cell with the same value.
pub struct ConstMatrixGen {
    value: f32,
}

impl ConstMatrixGen {
    /// Creates a new `ConstMatrixGen` matrix generator.
    ///
    /// # Arguments
    /// * `value` - The value to fill the matrix with.
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl<R: Rng> MatrixGen<R> for ConstMatrixGen {
    fn generate(&mut self, _rng: &mut R, rows: usize, cols: usize) -> Array2<f32> {
        Array2::from_elem((rows, cols), self.value)
    }
}
