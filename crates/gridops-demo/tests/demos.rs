//! Value checks for the demonstration grids.

use gridops_demo::demos;
use ndarray::array;

// ---------------------------------------------------------------------------
// Base data
// ---------------------------------------------------------------------------

#[test]
fn base_grid_is_row_major_arange() {
    let a = demos::base_grid();
    assert_eq!(a.dim(), (4, 5));
    assert_eq!(a[[0, 0]], 0);
    assert_eq!(a[[1, 0]], 5);
    assert_eq!(a[[3, 4]], 19);
}

// ---------------------------------------------------------------------------
// Indexing demonstrations
// ---------------------------------------------------------------------------

#[test]
fn slicing_takes_first_rows_last_columns() {
    let a = demos::base_grid();
    let sliced = demos::slice_demo(&a);
    assert_eq!(sliced, array![[3, 4], [8, 9], [13, 14]]);
}

#[test]
fn broadcasting_adds_row_vector_to_every_row() {
    let a = demos::base_grid();
    let out = demos::broadcast_demo(&a, &demos::row_vector());
    assert_eq!(out.dim(), (4, 5));
    assert_eq!(out.row(0).to_vec(), vec![10, 21, 32, 43, 54]);
    assert_eq!(out.row(3).to_vec(), vec![25, 36, 47, 58, 69]);
}

#[test]
fn fancy_indexing_composes_row_and_column_selection() {
    let a = demos::base_grid();
    let out = demos::fancy_demo(&a);
    assert_eq!(out, array![[1, 3], [11, 13]]);
}

// ---------------------------------------------------------------------------
// Convolution fixtures
// ---------------------------------------------------------------------------

#[test]
fn fixtures_have_demo_shapes() {
    assert_eq!(demos::sample_image().dim(), (5, 5));
    assert_eq!(demos::edge_kernel().dim(), (3, 3));
    assert_eq!(demos::sample_sequence().len(), 6);
}

#[test]
fn convolved_fixture_corner_is_minus_six() {
    let out = gridops_core::convolve2d(&demos::sample_image(), &demos::edge_kernel()).unwrap();
    assert_eq!(out[[0, 0]], -6.0);
}
