//! Square matrices.

use crate::{tolerance::approximately_equal, tuple::Tuple};
use anyhow::{Result, bail};
use approx::{AbsDiffEq, RelativeEq};
use std::{fmt, ops::Index};

/// The largest supported side length.
pub const MAX_SIZE: usize = 4;

/// A square matrix with side length between 1 and [`MAX_SIZE`].
///
/// 4x4 is the working size for transforms. Smaller matrices arise as
/// submatrices during cofactor expansion. The elements are kept in a fixed
/// flat array in row-major order with the side length as stride, so
/// matrices of every supported size are `Copy` and never allocate. Unused
/// trailing elements are always zero.
///
/// Every operation returns a new matrix. Products use the column-vector
/// convention: in `a * b * t`, `b` is applied to the tuple `t` first.
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix {
    size: usize,
    elements: [f64; MAX_SIZE * MAX_SIZE],
}

impl Matrix {
    /// Creates a matrix from the given rows. The side length is checked at
    /// compile time.
    pub fn from_rows<const N: usize>(rows: [[f64; N]; N]) -> Self {
        const { assert!(N >= 1 && N <= MAX_SIZE, "Unsupported matrix size") };
        Self::from_fn(N, |row, col| rows[row][col])
    }

    /// Creates a `size`x`size` matrix from `size * size` values listed row
    /// by row.
    ///
    /// # Errors
    /// Returns an error if `size` is not between 1 and [`MAX_SIZE`], or if the
    /// number of values does not match the size.
    pub fn from_row_major(size: usize, values: &[f64]) -> Result<Self> {
        if !(1..=MAX_SIZE).contains(&size) {
            bail!("Unsupported matrix size {size} (must be between 1 and {MAX_SIZE})");
        }
        if values.len() != size * size {
            bail!(
                "Expected {} values for a {size}x{size} matrix, got {}",
                size * size,
                values.len()
            );
        }
        Ok(Self::from_fn(size, |row, col| values[row * size + col]))
    }

    /// Creates the 4x4 identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::identity_of_size(MAX_SIZE)
    }

    /// Creates the identity matrix with the given side length.
    ///
    /// # Panics
    /// If `size` is not between 1 and [`MAX_SIZE`].
    pub fn identity_of_size(size: usize) -> Self {
        Self::from_fn(size, |row, col| if row == col { 1.0 } else { 0.0 })
    }

    /// The side length of the matrix.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the element at the given row and column.
    ///
    /// # Panics
    /// If `row` or `col` is not smaller than the side length.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.size && col < self.size,
            "Index ({row}, {col}) out of bounds for {size}x{size} matrix",
            size = self.size
        );
        self.elements[self.flat_index(row, col)]
    }

    /// Returns the element at the given row and column, or [`None`] if the
    /// position lies outside the matrix.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.size && col < self.size).then(|| self.elements[self.flat_index(row, col)])
    }

    /// Iterates over the rows of the matrix as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.elements[..self.size * self.size].chunks_exact(self.size)
    }

    /// Computes the matrix product `self * other`.
    ///
    /// # Panics
    /// If the matrices have different sizes.
    pub fn multiply(&self, other: &Self) -> Self {
        assert_eq!(
            self.size, other.size,
            "Tried to multiply matrices of different sizes"
        );
        Self::from_fn(self.size, |row, col| {
            (0..self.size)
                .map(|k| self.at(row, k) * other.at(k, col))
                .sum()
        })
    }

    /// Applies the matrix to the given tuple, treating the tuple as a column
    /// vector. Component `i` of the result is the dot product of row `i` with
    /// the tuple.
    ///
    /// # Panics
    /// If the matrix is not 4x4.
    pub fn multiply_tuple(&self, tuple: &Tuple) -> Tuple {
        assert_eq!(self.size, 4, "Only 4x4 matrices can be applied to tuples");
        let components: [f64; 4] =
            std::array::from_fn(|row| Tuple::from(self.row_array(row)).dot(tuple));
        Tuple::from(components)
    }

    /// Computes the transpose of the matrix.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.size, |row, col| self.at(col, row))
    }

    /// Computes the determinant of the matrix by cofactor expansion along
    /// the first row.
    pub fn determinant(&self) -> f64 {
        match self.size {
            1 => self.at(0, 0),
            2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
            size => (0..size)
                .map(|col| self.at(0, col) * self.cofactor(0, col))
                .sum(),
        }
    }

    /// Creates the matrix obtained by removing the given row and column.
    ///
    /// # Panics
    /// If the matrix is 1x1 or the row or column is out of bounds.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        assert!(self.size > 1, "A 1x1 matrix has no submatrix");
        assert!(
            row < self.size && col < self.size,
            "Index ({row}, {col}) out of bounds for {size}x{size} matrix",
            size = self.size
        );
        Self::from_fn(self.size - 1, |r, c| {
            self.at(
                if r < row { r } else { r + 1 },
                if c < col { c } else { c + 1 },
            )
        })
    }

    /// Computes the determinant of the submatrix obtained by removing the
    /// given row and column.
    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    /// Computes the minor for the given row and column, negated when
    /// `row + col` is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 { -minor } else { minor }
    }

    /// Whether the determinant is nonzero. The comparison is exact, so
    /// nearly singular matrices count as invertible.
    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Computes the inverse of the matrix as its adjugate divided by its
    /// determinant.
    ///
    /// # Errors
    /// Returns an error if the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            bail!(
                "Tried to invert a singular {size}x{size} matrix",
                size = self.size
            );
        }
        if self.size == 1 {
            return Ok(Self::from_rows([[determinant.recip()]]));
        }
        // The adjugate is the transposed cofactor matrix
        Ok(Self::from_fn(self.size, |row, col| {
            self.cofactor(col, row) / determinant
        }))
    }

    /// Whether the matrices have the same size and every element is within
    /// [`EPSILON`](crate::EPSILON) of the corresponding element of `other`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .active_elements()
                .iter()
                .zip(other.active_elements())
                .all(|(&a, &b)| approximately_equal(a, b))
    }

    fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        assert!(
            (1..=MAX_SIZE).contains(&size),
            "Unsupported matrix size {size}"
        );
        let mut elements = [0.0; MAX_SIZE * MAX_SIZE];
        for row in 0..size {
            for col in 0..size {
                elements[row * size + col] = f(row, col);
            }
        }
        Self { size, elements }
    }

    #[inline]
    const fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn active_elements(&self) -> &[f64] {
        &self.elements[..self.size * self.size]
    }

    fn row_array(&self, row: usize) -> [f64; 4] {
        std::array::from_fn(|col| self.at(row, col))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "Index ({row}, {col}) out of bounds for {size}x{size} matrix",
            size = self.size
        );
        &self.elements[self.flat_index(row, col)]
    }
}

impl_binop!(Mul, mul, Matrix, Matrix, Matrix, |a, b| { a.multiply(b) });

impl_binop!(Mul, mul, Matrix, Tuple, Tuple, |a, b| { a.multiply_tuple(b) });

impl_abs_diff_eq!(Matrix, |a, b, epsilon| {
    a.size == b.size
        && a.active_elements()
            .iter()
            .zip(b.active_elements())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Matrix, |a, b, epsilon, max_relative| {
    a.size == b.size
        && a.active_elements()
            .iter()
            .zip(b.active_elements())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix{}x{} ", self.size, self.size)?;
        f.debug_list().entries(self.rows()).finish()
    }
}
