//! Raw on-disk representation of a matrix.
//!
//! A matrix file is `rows * cols` consecutive `f32` values in row-major order and native
//! byte order, with no header. Readers must know the shape out of band.

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use log::info;
use ndarray::Array2;

use crate::error::{GenErr, Result};

const ELEM_SIZE: usize = size_of::<f32>();

/// The byte length of a `rows x cols` matrix, or `None` if it doesn't fit in a `usize`.
pub fn byte_len(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)?.checked_mul(ELEM_SIZE)
}

/// Flattens `matrix` into its row-major byte representation.
///
/// # Arguments
/// * `matrix` - The matrix to flatten.
///
/// # Returns
/// A buffer of exactly `rows * cols * 4` bytes.
pub fn to_bytes(matrix: &Array2<f32>) -> Vec<u8> {
    let standard = matrix.as_standard_layout();
    match standard.as_slice() {
        Some(nums) => bytemuck::cast_slice(nums).to_vec(),
        None => standard.iter().flat_map(|x| x.to_ne_bytes()).collect(),
    }
}

/// Rebuilds a `rows x cols` matrix from its row-major byte representation.
///
/// # Arguments
/// * `bytes` - The raw bytes, with no alignment requirement.
/// * `rows` - The amount of rows of the matrix.
/// * `cols` - The amount of columns of the matrix.
///
/// # Returns
/// The matrix, an `InvalidConfig` if the shape overflows or a `SizeMismatch` if the buffer
/// doesn't hold exactly `rows * cols` floats.
pub fn from_bytes(bytes: &[u8], rows: usize, cols: usize) -> Result<Array2<f32>> {
    let expected = byte_len(rows, cols)
        .ok_or_else(|| GenErr::InvalidConfig(format!("shape {rows}x{cols} overflows")))?;
    if bytes.len() != expected {
        return Err(GenErr::SizeMismatch {
            got: bytes.len(),
            expected,
        });
    }

    let nums: Vec<f32> = bytemuck::pod_collect_to_vec(bytes);
    Array2::from_shape_vec((rows, cols), nums).map_err(|_| GenErr::SizeMismatch {
        got: bytes.len(),
        expected,
    })
}

/// Writes `matrix` to `path`, creating the file or truncating it if it already exists.
///
/// The parent directory is never created; the whole buffer is written in one call and the
/// handle is closed on every exit path.
///
/// # Arguments
/// * `path` - The destination file.
/// * `matrix` - The matrix to store.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Array2<f32>) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(matrix);

    let mut file = File::create(path)?;
    file.write_all(&bytes)?;

    let (rows, cols) = matrix.dim();
    info!(rows = rows, cols = cols, bytes = bytes.len(); "wrote matrix to {}", path.display());
    Ok(())
}

/// Reads back a matrix written by `write_matrix`.
///
/// # Arguments
/// * `path` - The file to read.
/// * `rows` - The amount of rows the file holds.
/// * `cols` - The amount of columns the file holds.
pub fn read_matrix<P: AsRef<Path>>(path: P, rows: usize, cols: usize) -> Result<Array2<f32>> {
    let bytes = fs::read(path)?;
    from_bytes(&bytes, rows, cols)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn bytes_are_row_major() {
        let matrix = array![[1.0_f32, 2.0], [3.0, 4.0]];
        let bytes = to_bytes(&matrix);

        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &2.0_f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &3.0_f32.to_ne_bytes());
    }

    #[test]
    fn transposed_view_is_flattened_in_logical_order() {
        let matrix = array![[1.0_f32, 2.0], [3.0, 4.0]];
        let transposed = matrix.t().to_owned();
        let reversed = matrix.clone().reversed_axes();

        assert_eq!(to_bytes(&transposed), to_bytes(&reversed));
        assert_eq!(&to_bytes(&reversed)[4..8], &3.0_f32.to_ne_bytes());
    }

    #[test]
    fn from_bytes_restores_matrix() {
        let matrix = array![[0.25_f32, 0.5, 0.75], [0.0, 0.125, 0.875]];
        let restored = from_bytes(&to_bytes(&matrix), 2, 3).unwrap();
        assert_eq!(restored, matrix);
    }

    #[test]
    fn from_bytes_unaligned_input() {
        let matrix = array![[0.5_f32, 1.5]];
        let mut buf = vec![0u8];
        buf.extend(to_bytes(&matrix));

        let restored = from_bytes(&buf[1..], 1, 2).unwrap();
        assert_eq!(restored, matrix);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = from_bytes(&[0u8; 12], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            GenErr::SizeMismatch {
                got: 12,
                expected: 16
            }
        ));
    }

    #[test]
    fn from_bytes_rejects_overflowing_shape() {
        assert_eq!(byte_len(usize::MAX / 2, 3), None);
        assert_eq!(byte_len(usize::MAX / 4, 2), None);
        assert_eq!(byte_len(3, 5), Some(60));

        let err = from_bytes(&[], usize::MAX / 2, 3).unwrap_err();
        assert!(matches!(err, GenErr::InvalidConfig(_)));
    }

    #[test]
    fn empty_matrix_is_empty_buffer() {
        let matrix = Array2::<f32>::zeros((0, 0));
        assert!(to_bytes(&matrix).is_empty());
        assert_eq!(from_bytes(&[], 0, 0).unwrap().dim(), (0, 0));
    }
}
