mod constant;
mod matrix_gen;
mod random;

pub use constant::ConstMatrixGen;
pub use matrix_gen::MatrixGen;
pub use random::RandMatrixGen;
