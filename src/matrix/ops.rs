use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use super::{DimensionMismatch, Matrix};

// ── Shape checks ────────────────────────────────────────────────────

impl Matrix {
    fn check_same_shape(&self, rhs: &Matrix) -> Result<(), DimensionMismatch> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(DimensionMismatch {
                expected: self.shape(),
                got: rhs.shape(),
            })
        }
    }

    fn check_inner_dim(&self, rhs: &Matrix) -> Result<(), DimensionMismatch> {
        if self.cols == rhs.rows {
            Ok(())
        } else {
            Err(DimensionMismatch {
                expected: (self.cols, rhs.cols),
                got: rhs.shape(),
            })
        }
    }

    #[track_caller]
    fn assert_same_shape(&self, rhs: &Matrix, op: &str) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dimension mismatch: {}x{} {op} {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols,
        );
    }

    #[track_caller]
    fn assert_inner_dim(&self, rhs: &Matrix) {
        assert_eq!(
            self.cols, rhs.rows,
            "dimension mismatch: {}x{} * {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols,
        );
    }

    fn zip_apply(&mut self, rhs: &Matrix, f: impl Fn(f64, f64) -> f64) {
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = f(*a, b);
        }
    }

    // (M×N) * (N×P) → (M×P), shapes already checked.
    fn product(&self, rhs: &Matrix) -> Matrix {
        let m = self.rows;
        let n = self.cols;
        let p = rhs.cols;
        let mut out = Matrix::new(m, p);
        if out.data.is_empty() {
            return out;
        }
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    out.data[i * p + j] += a_ik * rhs.data[k * p + j];
                }
            }
        }
        out
    }
}

// ── Named arithmetic ────────────────────────────────────────────────

impl Matrix {
    /// Element-wise sum as a new matrix.
    ///
    /// Panics if the shapes differ.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::from([[5.0, 6.0], [7.0, 8.0]]);
    /// assert_eq!(a.plus(&b), Matrix::from([[6.0, 8.0], [10.0, 12.0]]));
    /// ```
    #[track_caller]
    pub fn plus(&self, rhs: &Matrix) -> Matrix {
        self.assert_same_shape(rhs, "+");
        let mut out = self.clone();
        out.zip_apply(rhs, |a, b| a + b);
        out
    }

    /// Element-wise difference as a new matrix.
    ///
    /// Panics if the shapes differ.
    #[track_caller]
    pub fn minus(&self, rhs: &Matrix) -> Matrix {
        self.assert_same_shape(rhs, "-");
        let mut out = self.clone();
        out.zip_apply(rhs, |a, b| a - b);
        out
    }

    /// Every element multiplied by `s`, as a new matrix.
    ///
    /// No special handling of NaN or infinities.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(a.scale(2.0), Matrix::from([[2.0, 4.0], [6.0, 8.0]]));
    /// ```
    pub fn scale(&self, s: f64) -> Matrix {
        let mut out = self.clone();
        out.scale_assign(s);
        out
    }

    /// Matrix product `self * rhs`.
    ///
    /// Panics unless `self.columns() == rhs.rows()`. The result is
    /// `self.rows() x rhs.columns()`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::from([[5.0, 6.0], [7.0, 8.0]]);
    /// assert_eq!(a.multiply(&b), Matrix::from([[19.0, 22.0], [43.0, 50.0]]));
    /// ```
    #[track_caller]
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        self.assert_inner_dim(rhs);
        self.product(rhs)
    }

    /// In-place element-wise sum. Panics if the shapes differ.
    #[track_caller]
    pub fn plus_assign(&mut self, rhs: &Matrix) {
        self.assert_same_shape(rhs, "+=");
        self.zip_apply(rhs, |a, b| a + b);
    }

    /// In-place element-wise difference. Panics if the shapes differ.
    #[track_caller]
    pub fn minus_assign(&mut self, rhs: &Matrix) {
        self.assert_same_shape(rhs, "-=");
        self.zip_apply(rhs, |a, b| a - b);
    }

    /// Multiply every element by `s` in place.
    pub fn scale_assign(&mut self, s: f64) {
        for x in self.data.iter_mut() {
            *x *= s;
        }
    }

    /// Replace `self` with `self * rhs`. Panics unless `self.columns() == rhs.rows()`.
    #[track_caller]
    pub fn multiply_assign(&mut self, rhs: &Matrix) {
        self.assert_inner_dim(rhs);
        let product = self.product(rhs);
        self.assign(&product);
    }
}

// ── Checked arithmetic ──────────────────────────────────────────────

impl Matrix {
    /// [`plus`](Matrix::plus) that reports a shape mismatch instead of panicking.
    pub fn checked_plus(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.check_same_shape(rhs)?;
        Ok(self.plus(rhs))
    }

    /// [`minus`](Matrix::minus) that reports a shape mismatch instead of panicking.
    pub fn checked_minus(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.check_same_shape(rhs)?;
        Ok(self.minus(rhs))
    }

    /// [`multiply`](Matrix::multiply) that reports a shape mismatch instead of panicking.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::new(2, 3);
    /// let err = a.checked_multiply(&Matrix::new(2, 2)).unwrap_err();
    /// assert_eq!(err.expected, (3, 2));
    /// assert_eq!(err.got, (2, 2));
    /// ```
    pub fn checked_multiply(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        self.check_inner_dim(rhs)?;
        Ok(self.product(rhs))
    }

    /// Fallible [`plus_assign`](Matrix::plus_assign). `self` is untouched on error.
    pub fn try_plus_assign(&mut self, rhs: &Matrix) -> Result<(), DimensionMismatch> {
        self.check_same_shape(rhs)?;
        self.zip_apply(rhs, |a, b| a + b);
        Ok(())
    }

    /// Fallible [`minus_assign`](Matrix::minus_assign). `self` is untouched on error.
    pub fn try_minus_assign(&mut self, rhs: &Matrix) -> Result<(), DimensionMismatch> {
        self.check_same_shape(rhs)?;
        self.zip_apply(rhs, |a, b| a - b);
        Ok(())
    }

    /// Fallible [`multiply_assign`](Matrix::multiply_assign). `self` is untouched on error.
    pub fn try_multiply_assign(&mut self, rhs: &Matrix) -> Result<(), DimensionMismatch> {
        self.check_inner_dim(rhs)?;
        let product = self.product(rhs);
        self.assign(&product);
        Ok(())
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn add(self, rhs: &Matrix) -> Matrix {
        self.plus(rhs)
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn add(mut self, rhs: &Matrix) -> Matrix {
        self.plus_assign(rhs);
        self
    }
}

impl Add<Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn add(self, rhs: Matrix) -> Matrix {
        self.plus(&rhs)
    }
}

impl Add for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn add(self, rhs: Matrix) -> Matrix {
        self + &rhs
    }
}

impl AddAssign<&Matrix> for Matrix {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Matrix) {
        self.plus_assign(rhs);
    }
}

impl AddAssign for Matrix {
    #[track_caller]
    fn add_assign(&mut self, rhs: Matrix) {
        self.plus_assign(&rhs);
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn sub(self, rhs: &Matrix) -> Matrix {
        self.minus(rhs)
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn sub(mut self, rhs: &Matrix) -> Matrix {
        self.minus_assign(rhs);
        self
    }
}

impl Sub<Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn sub(self, rhs: Matrix) -> Matrix {
        self.minus(&rhs)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn sub(self, rhs: Matrix) -> Matrix {
        self - &rhs
    }
}

impl SubAssign<&Matrix> for Matrix {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Matrix) {
        self.minus_assign(rhs);
    }
}

impl SubAssign for Matrix {
    #[track_caller]
    fn sub_assign(&mut self, rhs: Matrix) {
        self.minus_assign(&rhs);
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: &Matrix) -> Matrix {
        self.multiply(rhs)
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: &Matrix) -> Matrix {
        self.multiply(rhs)
    }
}

impl Mul<Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

impl MulAssign<&Matrix> for Matrix {
    #[track_caller]
    fn mul_assign(&mut self, rhs: &Matrix) {
        self.multiply_assign(rhs);
    }
}

impl MulAssign for Matrix {
    #[track_caller]
    fn mul_assign(&mut self, rhs: Matrix) {
        self.multiply_assign(&rhs);
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix {
        self.scale_assign(rhs);
        self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_assign(rhs);
    }
}
