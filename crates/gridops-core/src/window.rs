//! Zero-copy sliding-window views over 1D slices.
//!
//! A `SlidingWindows` reinterprets a slice of length `n` as a read-only 2D
//! arrangement of shape `(n - window + 1, window)` where row `i` reborrows
//! `source[i .. i + window]`. Nothing is copied and construction is O(1);
//! cell `(i, j)` is the source element `i + j`, so neighboring rows overlap
//! and alias the same backing storage.

use std::ops::Index;
use std::slice::Windows;

use ndarray::Array2;

use crate::error::GridError;

/// Read-only overlapping-window view over a borrowed slice.
#[derive(Debug, Clone, Copy)]
pub struct SlidingWindows<'a, T> {
    source: &'a [T],
    window: usize,
}

impl<'a, T> SlidingWindows<'a, T> {
    /// Create a view with the given window length.
    ///
    /// A window longer than the source is allowed and yields a view with
    /// zero rows (no complete windows). A window length of zero is never
    /// meaningful and returns `GridError::InvalidWindowSize`.
    pub fn new(source: &'a [T], window: usize) -> Result<Self, GridError> {
        if window == 0 {
            return Err(GridError::InvalidWindowSize { len: source.len() });
        }
        Ok(Self { source, window })
    }

    /// Number of complete windows (rows of the view).
    pub fn num_windows(&self) -> usize {
        (self.source.len() + 1).saturating_sub(self.window)
    }

    /// Window length (columns of the view).
    pub fn window_len(&self) -> usize {
        self.window
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.num_windows(), self.window)
    }

    pub fn is_empty(&self) -> bool {
        self.num_windows() == 0
    }

    /// Row `i` of the view, reborrowed from the source.
    ///
    /// Panics if `i` is not a valid row, matching slice indexing.
    pub fn row(&self, i: usize) -> &'a [T] {
        assert!(i < self.num_windows(), "window index out of bounds");
        &self.source[i..i + self.window]
    }

    /// Cell `(i, j)`, which is source element `i + j`, or `None` when the
    /// position falls outside the view.
    pub fn get(&self, i: usize, j: usize) -> Option<&'a T> {
        if i < self.num_windows() && j < self.window {
            Some(&self.source[i + j])
        } else {
            None
        }
    }

    /// Iterate over rows. Delegates to `slice::windows`, which walks the
    /// same overlapping sub-slices this view addresses.
    pub fn iter(&self) -> Windows<'a, T> {
        self.source.windows(self.window)
    }

    /// Materialize the view into an owned 2D array, e.g. for printing.
    pub fn to_array(&self) -> Array2<T>
    where
        T: Clone,
    {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for row in self.iter() {
            data.extend_from_slice(row);
        }
        Array2::from_shape_vec((rows, cols), data)
            .expect("to_array: window count mismatch")
    }
}

impl<T> Index<(usize, usize)> for SlidingWindows<'_, T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        self.get(i, j).expect("window position out of bounds")
    }
}

impl<'s, 'a, T> IntoIterator for &'s SlidingWindows<'a, T> {
    type Item = &'a [T];
    type IntoIter = Windows<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
