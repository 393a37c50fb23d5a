use num_traits::Float;

use super::Matrix;

/// Absolute tolerance used by `==` on matrices.
pub const EPSILON: f64 = 1e-7;

impl Matrix {
    /// Tolerance equality: same shape and every element pair within [`EPSILON`].
    ///
    /// Shape mismatch short-circuits to `false`. Two empty matrices of the
    /// same shape are equal. This is what `==` does.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[1.0, 2.0]]);
    /// let b = Matrix::from([[1.0 + 1e-9, 2.0]]);
    /// assert!(a.equals(&b));
    /// assert!(!a.equals(&Matrix::from([[1.0], [2.0]])));
    /// ```
    pub fn equals(&self, other: &Matrix) -> bool {
        self.approx_eq(other, EPSILON)
    }

    /// Like [`equals`](Matrix::equals) with a caller-chosen absolute tolerance.
    ///
    /// Identical values (including equal infinities) always match; a NaN
    /// never matches anything.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| a == b || Float::abs(a - b) <= tol)
    }
}

impl PartialEq for Matrix {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
