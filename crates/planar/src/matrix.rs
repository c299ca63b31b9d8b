//! Fixed-size generic grid (`Matrix<E>`) with checked cell access.
//!
//! - Row-major `Vec<E>` storage, `height × width`, both strictly positive.
//! - `get`/`set` return `MatrixError::OutOfBounds` instead of panicking; the
//!   `Index`/`IndexMut` impls panic with the same message.
//! - No arithmetic. Interop with `nalgebra::DMatrix` covers that need.

use std::fmt;
use std::ops::{Index, IndexMut};

use nalgebra::{DMatrix, Scalar};

/// Matrix cell address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Errors surfaced by matrix construction and access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Height or width is zero.
    EmptyDimensions { height: usize, width: usize },
    /// Cell outside `[0, height) × [0, width)`.
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },
    /// `height * width` does not fit in `usize`.
    TooLarge { height: usize, width: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::EmptyDimensions { height, width } => {
                write!(f, "matrix dimensions must be positive, got {height}x{width}")
            }
            MatrixError::OutOfBounds {
                cell,
                height,
                width,
            } => write!(f, "cell {cell} outside {height}x{width} matrix"),
            MatrixError::TooLarge { height, width } => {
                write!(f, "matrix dimensions {height}x{width} overflow usize")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// `height × width` grid of `E`.
///
/// Invariants:
/// - `height > 0`, `width > 0`, `cells.len() == height * width`.
/// - Equality is structural (dimensions, then every cell).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<E> {
    height: usize,
    width: usize,
    cells: Vec<E>,
}

/// Matrix filled with `fill`.
pub fn create_matrix<E: Clone>(
    height: usize,
    width: usize,
    fill: E,
) -> Result<Matrix<E>, MatrixError> {
    Matrix::new(height, width, fill)
}

impl<E: Clone> Matrix<E> {
    pub fn new(height: usize, width: usize, fill: E) -> Result<Self, MatrixError> {
        let len = check_dimensions(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![fill; len],
        })
    }
}

impl<E> Matrix<E> {
    /// Matrix whose cells are produced by `f`, in row-major order.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut f: impl FnMut(Cell) -> E,
    ) -> Result<Self, MatrixError> {
        check_dimensions(height, width)?;
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |column| Cell::new(row, column)))
            .map(&mut f)
            .collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.column < self.width
    }

    #[inline]
    fn offset(&self, cell: Cell) -> Result<usize, MatrixError> {
        if self.contains(cell) {
            Ok(cell.row * self.width + cell.column)
        } else {
            Err(MatrixError::OutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            })
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Result<&E, MatrixError> {
        self.get_cell(Cell::new(row, column))
    }

    pub fn get_cell(&self, cell: Cell) -> Result<&E, MatrixError> {
        let i = self.offset(cell)?;
        Ok(&self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut E, MatrixError> {
        let i = self.offset(Cell::new(row, column))?;
        Ok(&mut self.cells[i])
    }

    pub fn set(&mut self, row: usize, column: usize, value: E) -> Result<(), MatrixError> {
        self.set_cell(Cell::new(row, column), value)
    }

    pub fn set_cell(&mut self, cell: Cell, value: E) -> Result<(), MatrixError> {
        let i = self.offset(cell)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[E]> + '_ {
        self.cells.chunks(self.width)
    }

    /// `(cell, value)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, &E)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, e)| (Cell::new(i / width, i % width), e))
    }
}

/// Cell count of a `height × width` matrix.
fn check_dimensions(height: usize, width: usize) -> Result<usize, MatrixError> {
    if height == 0 || width == 0 {
        return Err(MatrixError::EmptyDimensions { height, width });
    }
    height
        .checked_mul(width)
        .ok_or(MatrixError::TooLarge { height, width })
}

impl<E> Index<Cell> for Matrix<E> {
    type Output = E;

    fn index(&self, cell: Cell) -> &E {
        match self.get_cell(cell) {
            Ok(e) => e,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<E> Index<(usize, usize)> for Matrix<E> {
    type Output = E;

    fn index(&self, (row, column): (usize, usize)) -> &E {
        &self[Cell::new(row, column)]
    }
}

impl<E> IndexMut<Cell> for Matrix<E> {
    fn index_mut(&mut self, cell: Cell) -> &mut E {
        match self.offset(cell) {
            Ok(i) => &mut self.cells[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<E> IndexMut<(usize, usize)> for Matrix<E> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut E {
        &mut self[Cell::new(row, column)]
    }
}

/// Debug rendering: one `|a b c|` line per row.
impl<E: fmt::Display> fmt::Display for Matrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "|")?;
            for (k, e) in row.iter().enumerate() {
                if k > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{e}")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

impl<E: Scalar> TryFrom<DMatrix<E>> for Matrix<E> {
    type Error = MatrixError;

    fn try_from(m: DMatrix<E>) -> Result<Self, Self::Error> {
        let (height, width) = m.shape();
        Matrix::from_fn(height, width, |c| m[(c.row, c.column)].clone())
    }
}

impl<E: Scalar> From<&Matrix<E>> for DMatrix<E> {
    fn from(m: &Matrix<E>) -> Self {
        DMatrix::from_row_slice(m.height, m.width, &m.cells)
    }
}
