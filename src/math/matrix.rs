use rand::prelude::*;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::math::numeric;
use crate::math::vector::Vector;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// He initialization: samples from N(0, sqrt(2 / cols)).
    ///
    /// Recommended before ReLU layers. The variance 2/fan_in accounts for
    /// the fact that ReLU zeroes half of its inputs on average.
    ///
    /// Shape: (rows, cols). `cols` is the fan-in (number of input connections).
    pub fn he(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let std_dev = (2.0 / cols as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let draw: f64 = rng.sample(StandardNormal);
                res.data[i][j] = draw * std_dev;
            }
        }
        res
    }

    /// Builds a matrix from row vectors. All rows must have equal length.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix, EngineError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        for row in &data {
            if row.len() != cols {
                return Err(EngineError::DimensionMismatch {
                    operation: "matrix from_rows",
                    left: vec![cols],
                    right: vec![row.len()],
                });
            }
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Matrix-vector product. `v` must have length `cols`.
    pub fn matvec(&self, v: &[f64]) -> Result<Vector, EngineError> {
        if self.cols != v.len() {
            return Err(EngineError::DimensionMismatch {
                operation: "matrix-vector multiply",
                left: vec![self.rows, self.cols],
                right: vec![v.len()],
            });
        }
        Ok(self
            .data
            .iter()
            .map(|row| row.iter().zip(v.iter()).map(|(w, x)| w * x).sum())
            .collect())
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }
        res
    }

    /// Outer product `u vᵀ` with shape (u.len(), v.len()).
    pub fn outer(u: &[f64], v: &[f64]) -> Matrix {
        let data = u
            .iter()
            .map(|&ui| v.iter().map(|&vj| ui * vj).collect())
            .collect();
        Matrix {
            rows: u.len(),
            cols: v.len(),
            data,
        }
    }

    fn check_same_shape(&self, operation: &'static str, rhs: &Matrix) -> Result<(), EngineError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(EngineError::DimensionMismatch {
                operation,
                left: vec![self.rows, self.cols],
                right: vec![rhs.rows, rhs.cols],
            });
        }
        Ok(())
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, EngineError> {
        self.check_same_shape("matrix add", rhs)?;
        let mut res = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }
        Ok(res)
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, EngineError> {
        self.check_same_shape("matrix sub", rhs)?;
        let mut res = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }
        Ok(res)
    }

    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// `numeric::sanitize` applied element-wise.
    pub fn sanitize(&self) -> Matrix {
        self.map(numeric::sanitize)
    }

    /// `numeric::clamp` applied element-wise.
    pub fn clamp(&self) -> Matrix {
        self.map(numeric::clamp)
    }
}
