use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::{
    Distribution, Normal, NormalError, StandardUniform, Uniform, uniform::Error as UniformError,
};

use super::MatrixGen;

/// A matrix generator whose cells follow a certain probabilistic distribution.
///
/// Values are sampled directly as `f32`, so a distribution bounded by `[low, high)` stays
/// bounded after being stored.
pub struct RandMatrixGen<D: Distribution<f32>> {
    distribution: D,
}

impl<D: Distribution<f32>> RandMatrixGen<D> {
    /// Creates a new `RandMatrixGen` matrix generator.
    ///
    /// # Arguments
    /// * `distribution` - The distribution to sample every cell from.
    pub fn new(distribution: D) -> Self {
        Self { distribution }
    }
}

impl RandMatrixGen<StandardUniform> {
    /// Creates a new `RandMatrixGen` sampling uniformly from `[0, 1)`.
    pub fn standard() -> Self {
        Self::new(StandardUniform)
    }
}

impl RandMatrixGen<Uniform<f32>> {
    /// Creates a new `RandMatrixGen` matrix generator with a uniform distribution.
    ///
    /// # Arguments
    /// * `low` - The inclusive lower limit.
    /// * `high` - The exclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low >= high or non finite).
    pub fn uniform(low: f32, high: f32) -> Result<Self, UniformError> {
        Ok(Self::new(Uniform::new(low, high)?))
    }
}

impl RandMatrixGen<Normal<f32>> {
    /// Creates a new `RandMatrixGen` matrix generator with a normal distribution.
    ///
    /// # Arguments
    /// * `mean` - The mean of the distribution.
    /// * `std_dev` - The standard deviation of the distribution.
    ///
    /// # Returns
    /// An error if `std_dev` is negative or not finite.
    pub fn normal(mean: f32, std_dev: f32) -> Result<Self, NormalError> {
        // `Normal::new` only rejects a non-finite `std_dev`.
        if std_dev.is_nan() || std_dev < 0. {
            return Err(NormalError::BadVariance);
        }

        Ok(Self::new(Normal::new(mean, std_dev)?))
    }
}

impl<R: Rng, D: Distribution<f32>> MatrixGen<R> for RandMatrixGen<D> {
    fn generate(&mut self, rng: &mut R, rows: usize, cols: usize) -> Array2<f32> {
        Array2::random_using((rows, cols), &self.distribution, rng)
    }
}
