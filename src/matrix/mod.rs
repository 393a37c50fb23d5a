mod eq;
mod ops;
mod util;

pub use eq::EPSILON;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use log::{debug, trace};

/// Shape error returned by the checked arithmetic methods.
///
/// `expected` is the shape the right-hand operand needed, `got` is the shape
/// it had.
///
/// ```
/// use densemat::{DimensionMismatch, Matrix};
///
/// let a = Matrix::new(2, 3);
/// let b = Matrix::new(2, 2);
/// assert_eq!(
///     a.checked_plus(&b).unwrap_err(),
///     DimensionMismatch { expected: (2, 3), got: (2, 2) },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    /// Expected `(rows, columns)`.
    pub expected: (usize, usize),
    /// Got `(rows, columns)`.
    pub got: (usize, usize),
}

impl core::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "dimension mismatch: expected {}x{}, got {}x{}",
            self.expected.0, self.expected.1, self.got.0, self.got.1
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DimensionMismatch {}

/// Dense `f64` matrix with runtime dimensions.
///
/// Row-major `Vec<f64>` storage, exclusively owned by each instance. A matrix
/// with zero rows or zero columns holds no storage at all; this is the
/// "empty" state and is what [`Default`] produces.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let mut m = Matrix::new(2, 3);
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 2)], 0.0);
///
/// *m.at(0, 1) = 5.0;
/// assert_eq!(m[(0, 1)], 5.0);
///
/// let copy = m.clone();
/// assert_eq!(copy, m);
/// ```
#[derive(Debug, Default)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Create a `rows x columns` matrix with every element set to `0.0`.
    ///
    /// If either dimension is zero nothing is allocated and no element is
    /// addressable. The dimensions are still recorded, so a `0x5` matrix
    /// compares equal to any other `0x5` matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::new(0, 5);
    /// assert!(m.is_empty());
    /// assert_eq!(m.shape(), (0, 5));
    /// assert_eq!(m, Matrix::new(0, 5));
    /// ```
    pub fn new(rows: usize, columns: usize) -> Self {
        if rows == 0 || columns == 0 {
            debug!("sized construction {rows}x{columns} has a zero dimension, no storage allocated");
            return Self {
                data: Vec::new(),
                rows,
                cols: columns,
            };
        }
        Self {
            data: vec![0.0; element_count(rows, columns)],
            rows,
            cols: columns,
        }
    }

    /// The empty `0x0` matrix. Same as [`Matrix::default`].
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let id = Matrix::identity(3);
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(1, 2)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != rows * columns`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(rows: usize, columns: usize, row_major: &[f64]) -> Self {
        assert_eq!(
            row_major.len(),
            element_count(rows, columns),
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            rows,
            columns,
        );
        Self {
            data: row_major.to_vec(),
            rows,
            cols: columns,
        }
    }

    /// Create a matrix from an owned row-major `Vec<f64>`.
    ///
    /// Panics if `data.len() != rows * columns`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            element_count(rows, columns),
            "vec length {} does not match {}x{} matrix",
            data.len(),
            rows,
            columns,
        );
        Self {
            data,
            rows,
            cols: columns,
        }
    }

    /// Create a matrix by calling `f(row, column)` for each element.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
    /// assert_eq!(m[(1, 0)], 2.0);
    /// ```
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(element_count(rows, columns));
        for i in 0..rows {
            for j in 0..columns {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            rows,
            cols: columns,
        }
    }

    /// Move the contents out, leaving `self` as the empty `0x0` matrix.
    ///
    /// The storage is handed over without copying. A plain Rust move does
    /// the same but makes the source unusable; `take` keeps it around, empty
    /// and ready to be reassigned.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = a.take();
    /// assert_eq!(b, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
    /// assert_eq!(a.shape(), (0, 0));
    /// ```
    pub fn take(&mut self) -> Self {
        trace!("moving {}x{} storage out of matrix", self.rows, self.cols);
        core::mem::take(self)
    }

    /// Replace the contents of `self` with a deep copy of `other`.
    ///
    /// The existing buffer is reused when it is large enough. Assigning a
    /// matrix to itself cannot be written: `a.assign(&a)` is rejected by the
    /// borrow checker:
    ///
    /// ```compile_fail
    /// use densemat::Matrix;
    /// let mut a = Matrix::new(2, 2);
    /// a.assign(&a);
    /// ```
    pub fn assign(&mut self, other: &Matrix) {
        trace!(
            "copy-assign {}x{} <- {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        self.clone_from(other);
    }
}

impl Clone for Matrix {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.rows = source.rows;
        self.cols = source.cols;
    }
}

impl<const M: usize, const N: usize> From<[[f64; N]; M]> for Matrix {
    /// Build a matrix from nested row arrays.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 6.0);
    /// ```
    fn from(rows: [[f64; N]; M]) -> Self {
        Self {
            data: rows.iter().flatten().copied().collect(),
            rows: M,
            cols: N,
        }
    }
}

#[inline]
#[track_caller]
fn element_count(rows: usize, columns: usize) -> usize {
    match rows.checked_mul(columns) {
        Some(n) => n,
        None => panic!("matrix dimensions {rows}x{columns} overflow usize"),
    }
}

// ── Dimensions ──────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has no storage (zero rows or zero columns).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

// ── Element access ──────────────────────────────────────────────────

impl Matrix {
    #[inline]
    #[track_caller]
    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.cols,
            "index out of bounds: ({row}, {column}) in {}x{} matrix",
            self.rows,
            self.cols,
        );
        row * self.cols + column
    }

    /// Mutable reference to the element at `(row, column)`.
    ///
    /// Panics unless `row < rows()` and `column < columns()`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::new(2, 2);
    /// *m.at(1, 0) = 3.5;
    /// assert_eq!(m[(1, 0)], 3.5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn at(&mut self, row: usize, column: usize) -> &mut f64 {
        let i = self.offset(row, column);
        &mut self.data[i]
    }

    /// Element at `(row, column)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<&f64> {
        if row < self.rows && column < self.cols {
            self.data.get(row * self.cols + column)
        } else {
            None
        }
    }

    /// Mutable element at `(row, column)`, or `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut f64> {
        if row < self.rows && column < self.cols {
            self.data.get_mut(row * self.cols + column)
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// Panics if `i >= rows()`.
    #[track_caller]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        self.at(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn new_is_zero_filled() {
        let m = Matrix::new(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.columns(), 4);
        assert_eq!(m.len(), 12);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn default_is_empty() {
        let m = Matrix::default();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
        assert!(m.as_slice().is_empty());
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    fn zero_dimension_has_no_storage() {
        let m = Matrix::new(0, 5);
        assert_eq!(m.shape(), (0, 5));
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert_eq!(m.get(0, 0), None);

        let n = Matrix::new(4, 0);
        assert!(n.is_empty());
        assert_eq!(n.len(), 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn zero_dimension_at_panics() {
        let mut m = Matrix::new(0, 5);
        let _ = m.at(0, 0);
    }

    #[test]
    fn clone_is_deep() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let mut b = a.clone();
        assert_eq!(a, b);
        *b.at(0, 0) = 100.0;
        assert_eq!(a[(0, 0)], 1.0);
        assert_eq!(b[(0, 0)], 100.0);
    }

    #[test]
    fn clone_empty() {
        let a = Matrix::new(0, 3);
        let b = a.clone();
        assert_eq!(b.shape(), (0, 3));
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = Matrix::from([[1.0, 2.0, 3.0]]);
        let b = a.take();
        assert_eq!(b, Matrix::from([[1.0, 2.0, 3.0]]));
        assert_eq!(a.shape(), (0, 0));
        assert!(a.as_slice().is_empty());

        // The emptied source can be reused.
        a.assign(&b);
        assert_eq!(a, b);
    }

    #[test]
    fn assign_replaces_shape_and_contents() {
        let mut a = Matrix::new(3, 3);
        let b = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        a.assign(&b);
        assert_eq!(a.shape(), (2, 2));
        assert_eq!(a, b);

        *a.at(1, 1) = 0.0;
        assert_eq!(b[(1, 1)], 4.0);

        a.assign(&Matrix::empty());
        assert_eq!(a.shape(), (0, 0));
    }

    #[test]
    fn is_square() {
        assert!(Matrix::new(3, 3).is_square());
        assert!(Matrix::empty().is_square());
        assert!(!Matrix::new(2, 3).is_square());
        assert!(!Matrix::new(0, 5).is_square());
    }

    #[test]
    fn identity() {
        let m = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "vec length")]
    fn from_vec_wrong_length() {
        let _ = Matrix::from_vec(1, 2, vec![1.0]);
    }

    #[test]
    fn from_fn() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
    }

    #[test]
    fn at_and_index_mut() {
        let mut m = Matrix::new(2, 2);
        *m.at(0, 1) = 5.0;
        m[(1, 0)] = 6.0;
        assert_eq!(m.as_slice(), &[0.0, 5.0, 6.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn at_out_of_range() {
        let mut m = Matrix::new(2, 2);
        let _ = m.at(2, 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_column_out_of_range() {
        let m = Matrix::new(2, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn get_checked() {
        let mut m = Matrix::from([[1.0, 2.0]]);
        assert_eq!(m.get(0, 1), Some(&2.0));
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.get(0, 2), None);
        if let Some(x) = m.get_mut(0, 0) {
            *x = 9.0;
        }
        assert_eq!(m[(0, 0)], 9.0);
    }

    #[test]
    fn dimension_mismatch_display() {
        let e = DimensionMismatch {
            expected: (2, 3),
            got: (3, 2),
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 2x3, got 3x2");
    }
}
