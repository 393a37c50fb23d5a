use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use super::Matrix;

// ── Diagnostic dump ─────────────────────────────────────────────────

impl Matrix {
    /// Write the diagnostic dump: a `Output matrix(R, C)` header, one line
    /// per row with every element followed by a space, then a blank line.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut s = String::new();
    /// Matrix::from([[1.0, 2.5], [3.0, 4.0]]).write_report(&mut s).unwrap();
    /// assert_eq!(s, "Output matrix(2, 2)\n1 2.5 \n3 4 \n\n");
    /// ```
    pub fn write_report(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "Output matrix({}, {})", self.rows, self.cols)?;
        for i in 0..self.rows {
            for x in self.row(i) {
                write!(w, "{x} ")?;
            }
            writeln!(w)?;
        }
        writeln!(w)
    }

    /// Print the diagnostic dump to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let mut s = alloc::string::String::new();
        // Writing into a String cannot fail.
        let _ = self.write_report(&mut s);
        std::print!("{s}");
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[{}x{}]", self.rows, self.cols);
        }
        let m = self.rows;
        let n = self.cols;

        // Measure column widths
        let mut widths: Vec<usize> = alloc::vec![0; n];
        for j in 0..n {
            for i in 0..m {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for j in 0..n {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "│")?;
            if i < m - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
