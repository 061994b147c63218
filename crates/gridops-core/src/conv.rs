//! Valid-mode 2D convolution (cross-correlation) over `ndarray` grids.
//!
//! Only output positions where the kernel fully overlaps the image are
//! produced, so the output is smaller than the image: `(H-kh+1, W-kw+1)`.
//! No padding, stride, or dilation. The accumulation walks the kernel
//! row-major (`m` outer, `n` inner) so repeated runs round identically.

use ndarray::{Array2, ArrayBase, Data, Ix2};
use rayon::prelude::*;

use crate::error::GridError;

/// Validate shapes and compute the valid-mode output dimensions.
///
/// A kernel axis longer than the matching image axis would make the output
/// dimension non-positive; a zero axis on either side makes the formula
/// meaningless. Both are rejected up front.
fn output_dims(
    image: (usize, usize),
    kernel: (usize, usize),
) -> Result<(usize, usize), GridError> {
    let (img_h, img_w) = image;
    let (k_h, k_w) = kernel;
    if img_h == 0 || img_w == 0 || k_h == 0 || k_w == 0 || k_h > img_h || k_w > img_w {
        return Err(GridError::InvalidDimensions { image, kernel });
    }
    Ok((img_h - k_h + 1, img_w - k_w + 1))
}

/// Convolve `image` with `kernel` in valid mode.
///
/// Each output cell `(i, j)` is the sum over all `(m, n)` in the kernel of
/// `image[i+m, j+n] * kernel[m, n]`. Inputs are untouched; the output is a
/// freshly allocated `Array2<f32>`.
///
/// # Arguments
///
/// * `image` - A 2D array of shape (H, W).
/// * `kernel` - A 2D array of shape (kh, kw) with `kh <= H` and `kw <= W`.
///
/// # Returns
///
/// The (H-kh+1, W-kw+1) grid of sliding sums of products, or
/// `GridError::InvalidDimensions` if the kernel does not fit the image.
pub fn convolve2d<S1, S2>(
    image: &ArrayBase<S1, Ix2>,
    kernel: &ArrayBase<S2, Ix2>,
) -> Result<Array2<f32>, GridError>
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
{
    let (out_h, out_w) = output_dims(image.dim(), kernel.dim())?;
    let (k_h, k_w) = kernel.dim();
    log::debug!(
        "convolve2d: image {:?} kernel {:?} -> output ({}, {})",
        image.dim(),
        kernel.dim(),
        out_h,
        out_w
    );

    let mut out = Array2::<f32>::zeros((out_h, out_w));
    for i in 0..out_h {
        for j in 0..out_w {
            let mut acc = 0.0f32;
            for m in 0..k_h {
                for n in 0..k_w {
                    acc += image[[i + m, j + n]] * kernel[[m, n]];
                }
            }
            out[[i, j]] = acc;
        }
    }
    Ok(out)
}

/// Same contract as [`convolve2d`], with output rows computed in parallel.
///
/// Every output cell only reads the inputs, so rows are independent. The
/// per-cell accumulation order matches the serial path, making the result
/// bitwise equal to `convolve2d` on the same inputs.
pub fn convolve2d_par<S1, S2>(
    image: &ArrayBase<S1, Ix2>,
    kernel: &ArrayBase<S2, Ix2>,
) -> Result<Array2<f32>, GridError>
where
    S1: Data<Elem = f32> + Sync,
    S2: Data<Elem = f32> + Sync,
{
    let (out_h, out_w) = output_dims(image.dim(), kernel.dim())?;
    let (k_h, k_w) = kernel.dim();

    let mut data = vec![0.0f32; out_h * out_w];
    data.par_chunks_mut(out_w)
        .enumerate()
        .for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for m in 0..k_h {
                    for n in 0..k_w {
                        acc += image[[i + m, j + n]] * kernel[[m, n]];
                    }
                }
                *cell = acc;
            }
        });

    Ok(Array2::from_shape_vec((out_h, out_w), data)
        .expect("convolve2d_par: output buffer length mismatch"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dims_valid_shapes() {
        assert_eq!(output_dims((5, 5), (3, 3)).unwrap(), (3, 3));
        assert_eq!(output_dims((4, 7), (4, 1)).unwrap(), (1, 7));
        assert_eq!(output_dims((2, 2), (2, 2)).unwrap(), (1, 1));
    }

    #[test]
    fn output_dims_rejects_oversized_kernel() {
        assert!(output_dims((3, 3), (4, 1)).is_err());
        assert!(output_dims((3, 3), (1, 4)).is_err());
    }

    #[test]
    fn output_dims_rejects_zero_axes() {
        assert!(output_dims((0, 3), (1, 1)).is_err());
        assert!(output_dims((3, 3), (0, 2)).is_err());
        assert!(output_dims((3, 3), (2, 0)).is_err());
    }
}
