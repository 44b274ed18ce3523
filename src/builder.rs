use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::DistributionConfig,
    error::{GenErr, Result},
    generation::{ConstMatrixGen, MatrixGen, RandMatrixGen},
};

/// Builds matrix generators and their random number generators given a config.
pub struct GeneratorBuilder;

impl GeneratorBuilder {
    /// Creates a new `GeneratorBuilder`.
    ///
    /// # Returns
    /// A new `GeneratorBuilder` instance.
    pub fn new() -> Self {
        Self
    }

    /// Generates a random number generator given (or not) a seed.
    ///
    /// # Arguments
    /// * `seed` - An optional seed for the rng.
    ///
    /// # Returns
    /// A seeded rng, or one seeded from the OS when `seed` is `None`.
    pub fn build_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Resolves the `MatrixGen` for a distribution config.
    ///
    /// # Arguments
    /// * `distribution` - The distribution the cells should follow.
    ///
    /// # Returns
    /// A boxed generator or an `InvalidDistribution` if its parameters are invalid.
    pub fn build<R: Rng + 'static>(
        &self,
        distribution: DistributionConfig,
    ) -> Result<Box<dyn MatrixGen<R>>> {
        let matrix_gen: Box<dyn MatrixGen<R>> = match distribution {
            DistributionConfig::Standard => Box::new(RandMatrixGen::standard()),
            DistributionConfig::Uniform { low, high } => Box::new(
                RandMatrixGen::uniform(low, high)
                    .map_err(|e| GenErr::InvalidDistribution(e.to_string()))?,
            ),
            DistributionConfig::Normal { mean, std_dev } => Box::new(
                RandMatrixGen::normal(mean, std_dev)
                    .map_err(|e| GenErr::InvalidDistribution(e.to_string()))?,
            ),
            DistributionConfig::Const { value } => Box::new(ConstMatrixGen::new(value)),
        };

        Ok(matrix_gen)
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
