use crate::fitting::FitError;

/// Dense row-major matrix with the row operations Gauss–Jordan needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Builds a matrix from a generator called once per cell.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// `row /= divisor`, element by element.
    pub fn divide_row(&mut self, row: usize, divisor: f64) {
        let start = row * self.cols;
        for v in &mut self.data[start..start + self.cols] {
            *v /= divisor;
        }
    }

    /// `target -= factor * source`.
    pub fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        let (t, s) = (target * self.cols, source * self.cols);
        for k in 0..self.cols {
            self.data[t + k] -= factor * self.data[s + k];
        }
    }

    /// `[self | other]`. Both sides must have the same row count.
    pub fn augment(&self, other: &Matrix) -> Matrix {
        debug_assert_eq!(self.rows, other.rows);
        Matrix::from_fn(self.rows, self.cols + other.cols, |i, j| {
            if j < self.cols {
                self.get(i, j)
            } else {
                other.get(i, j - self.cols)
            }
        })
    }

    /// Columns `first_col..` as a new matrix.
    pub fn columns_from(&self, first_col: usize) -> Matrix {
        Matrix::from_fn(self.rows, self.cols - first_col, |i, j| {
            self.get(i, first_col + j)
        })
    }

    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(self.cols, v.len());
        (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v)
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            })
            .collect()
    }

    /// Inverts a square matrix by Gauss–Jordan elimination on `[self | I]`.
    ///
    /// There is no pivot search: row `i` is always normalized by its own
    /// diagonal entry, and an exactly-zero diagonal fails the inversion.
    pub fn invert_unpivoted(&self) -> Result<Matrix, FitError> {
        debug_assert!(self.is_square());
        let n = self.rows;
        let mut redux = self.augment(&Matrix::identity(n));

        for i in 0..n {
            let pivot = redux.get(i, i);
            if pivot == 0.0 {
                return Err(FitError::SingularSystem { row: i });
            }
            redux.divide_row(i, pivot);

            for j in (0..n).filter(|&j| j != i) {
                let factor = redux.get(j, i);
                redux.subtract_scaled_row(j, i, factor);
            }
        }

        Ok(redux.columns_from(n))
    }
}
