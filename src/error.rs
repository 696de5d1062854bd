use std::error::Error;
use std::fmt;

/// Failures raised by vector arithmetic.
///
/// These indicate a caller bug (operands from different spaces, illegal
/// aliasing) and are meant to be propagated, not recovered from.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Operands (or an output buffer) disagree on dimension.
    DimensionMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    InvalidOperation {
        op: &'static str,
        reason: &'static str,
    },
    IndexOutOfBounds { index: usize, dimension: usize },
    /// The operation needs a direction but the vector has zero length.
    ZeroLength { op: &'static str },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::DimensionMismatch { op, left, right } => write!(
                f,
                "{} - dimension mismatch: left({}) right({})",
                op, left, right
            ),
            VectorError::InvalidOperation { op, reason } => write!(f, "{} - {}", op, reason),
            VectorError::IndexOutOfBounds { index, dimension } => write!(
                f,
                "index out of bounds: index {} for dimension {}",
                index, dimension
            ),
            VectorError::ZeroLength { op } => write!(f, "{} - vector has zero length", op),
        }
    }
}

impl Error for VectorError {}

/// Returned when a matrix buffer does not match the requested shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeError {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}

/// Returned by checked matrix element access outside the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixIndexError {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for MatrixIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index out of bounds: ({}, {}) for shape ({}, {})",
            self.row, self.col, self.rows, self.cols
        )
    }
}

impl Error for MatrixIndexError {}
