//! The demonstration data and the array operations run on it.
//!
//! The indexing demonstrations are direct `ndarray` usage (slicing with
//! `s!`, arithmetic broadcasting, `select` fancy indexing); the convolution
//! and sliding-window sections exercise `gridops-core`.

use ndarray::{array, s, Array1, Array2, Axis};

/// The 4x5 base grid: row-major 0..20.
pub fn base_grid() -> Array2<i32> {
    Array2::from_shape_vec((4, 5), (0..20).collect())
        .expect("base_grid: 4x5 of 20 elements")
}

/// Row vector added to every row of the base grid in the broadcasting demo.
pub fn row_vector() -> Array1<i32> {
    array![10, 20, 30, 40, 50]
}

/// First 3 rows, last 2 columns.
pub fn slice_demo(a: &Array2<i32>) -> Array2<i32> {
    a.slice(s![..3, -2..]).to_owned()
}

/// Add a row vector to every row, letting the array library broadcast the
/// 1D shape against the 2D one.
pub fn broadcast_demo(a: &Array2<i32>, row: &Array1<i32>) -> Array2<i32> {
    a + row
}

/// Pick rows 0 and 2, then columns 1 and 3 of the result.
pub fn fancy_demo(a: &Array2<i32>) -> Array2<i32> {
    a.select(Axis(0), &[0, 2]).select(Axis(1), &[1, 3])
}

/// 5x5 input image for the convolution demo.
pub fn sample_image() -> Array2<f32> {
    array![
        [1.0f32, 2.0, 3.0, 0.0, 1.0],
        [4.0, 5.0, 6.0, 1.0, 0.0],
        [7.0, 8.0, 9.0, 0.0, 1.0],
        [1.0, 3.0, 5.0, 7.0, 9.0],
        [0.0, 2.0, 4.0, 6.0, 8.0],
    ]
}

/// 3x3 vertical-edge kernel (+1 left column, -1 right column).
pub fn edge_kernel() -> Array2<f32> {
    array![
        [1.0f32, 0.0, -1.0],
        [1.0, 0.0, -1.0],
        [1.0, 0.0, -1.0],
    ]
}

/// 1D sequence for the sliding-window demo.
pub fn sample_sequence() -> Vec<i32> {
    vec![1, 2, 3, 4, 5, 6]
}
