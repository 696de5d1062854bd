use std::fmt;
use std::iter::FromIterator;
use std::ops::{
    AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, SubAssign,
};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Serialize};

use crate::error::VectorError;
use crate::math::matrix::Matrix;

/// A fixed-dimension vector of `f64` components.
///
/// The dimension is set when the vector is built and never changes. Every
/// binary operation checks that its operands (and any caller-supplied
/// output buffer) agree on dimension before anything is written.
///
/// Each arithmetic operation comes in up to three flavours:
/// an allocating form (`add`), a form writing into a caller buffer
/// (`add_into`) and an in-place form (`add_in_place`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

#[inline]
fn check_dims(op: &'static str, left: usize, right: usize) -> Result<(), VectorError> {
    if left != right {
        return Err(VectorError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

// Operators cannot return a `Result`, so they panic with the error message.
#[inline]
fn or_panic<T>(result: Result<T, VectorError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

impl Vector {
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: vec![0.0; dimension],
        }
    }

    pub fn filled(dimension: usize, value: f64) -> Self {
        Self {
            data: vec![value; dimension],
        }
    }

    /// Copy `src[offset..]` into a new vector.
    ///
    /// With `dimension = Some(n)` the result has exactly `n` components,
    /// truncating the source or padding with zeros. With `None` it takes
    /// whatever is left of the source after `offset` (possibly nothing).
    pub fn from_slice(src: &[f64], offset: usize, dimension: Option<usize>) -> Self {
        let available = src.len().saturating_sub(offset);
        let dimension = dimension.unwrap_or(available);
        let copied = dimension.min(available);
        let mut data = vec![0.0; dimension];
        if copied > 0 {
            data[..copied].copy_from_slice(&src[offset..offset + copied]);
        }
        Self { data }
    }

    pub fn from_vector(other: &Vector, offset: usize, dimension: Option<usize>) -> Self {
        Self::from_slice(&other.data, offset, dimension)
    }

    /// The `index`-th standard basis vector of a `dimension`-space.
    pub fn standard_basis(dimension: usize, index: usize) -> Result<Self, VectorError> {
        if index >= dimension {
            return Err(VectorError::IndexOutOfBounds { index, dimension });
        }
        let mut v = Self::zeros(dimension);
        v.data[index] = 1.0;
        Ok(v)
    }

    /// Same components in a `dimension`-space: prefix kept, rest zeroed.
    pub fn make_dim(&self, dimension: usize) -> Vector {
        Self::from_slice(&self.data, 0, Some(dimension))
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn get(&self, index: usize) -> Result<f64, VectorError> {
        self.data
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfBounds {
                index,
                dimension: self.dimension(),
            })
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        let dimension = self.dimension();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VectorError::IndexOutOfBounds { index, dimension }),
        }
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, VectorError> {
        check_dims("Vector::dot", self.dimension(), other.dimension())?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    pub fn length2(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum()
    }

    pub fn length(&self) -> f64 {
        self.length2().sqrt()
    }

    /// Rescale in place so that `length() == target`.
    pub fn set_length(&mut self, target: f64) -> Result<(), VectorError> {
        let current = self.length();
        if current == 0.0 {
            return Err(VectorError::ZeroLength {
                op: "Vector::set_length",
            });
        }
        self.scale_in_place(target / current);
        Ok(())
    }

    /// Normalized copy, or `None` for the zero vector.
    pub fn unit(&self) -> Option<Vector> {
        let len = self.length();
        if len == 0.0 {
            None
        } else {
            Some(self.divide(len))
        }
    }

    pub fn as_column_matrix(&self) -> Matrix {
        let mut m = Matrix::zeros(self.dimension(), 1);
        for (i, &v) in self.data.iter().enumerate() {
            m[(i, 0)] = v;
        }
        m
    }

    pub fn as_row_matrix(&self) -> Matrix {
        let mut m = Matrix::zeros(1, self.dimension());
        for (i, &v) in self.data.iter().enumerate() {
            m[(0, i)] = v;
        }
        m
    }

    // ---------------------------------------------------------------------
    // Elementwise mapping; every other elementwise operation goes through
    // the named helpers below so errors report the caller's operation.
    // ---------------------------------------------------------------------

    fn map_named<F>(&self, op: &'static str, out: &mut Vector, mut f: F) -> Result<(), VectorError>
    where
        F: FnMut(f64) -> f64,
    {
        check_dims(op, self.dimension(), out.dimension())?;
        for (o, &v) in out.data.iter_mut().zip(self.data.iter()) {
            *o = f(v);
        }
        Ok(())
    }

    fn zip_named<F>(
        &self,
        op: &'static str,
        other: &Vector,
        out: &mut Vector,
        mut f: F,
    ) -> Result<(), VectorError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        check_dims(op, self.dimension(), other.dimension())?;
        check_dims(op, self.dimension(), out.dimension())?;
        for ((o, &a), &b) in out.data.iter_mut().zip(self.data.iter()).zip(other.data.iter()) {
            *o = f(a, b);
        }
        Ok(())
    }

    fn zip_named_in_place<F>(
        &mut self,
        op: &'static str,
        other: &Vector,
        mut f: F,
    ) -> Result<(), VectorError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        check_dims(op, self.dimension(), other.dimension())?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = f(*a, b);
        }
        Ok(())
    }

    fn zip_named_alloc<F>(
        &self,
        op: &'static str,
        other: &Vector,
        f: F,
    ) -> Result<Vector, VectorError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        let mut out = Vector::zeros(self.dimension());
        self.zip_named(op, other, &mut out, f)?;
        Ok(out)
    }

    pub fn map<F>(&self, f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        let mut out = self.clone();
        out.map_in_place(f);
        out
    }

    pub fn map_into<F>(&self, f: F, out: &mut Vector) -> Result<(), VectorError>
    where
        F: FnMut(f64) -> f64,
    {
        self.map_named("Vector::map", out, f)
    }

    pub fn map_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(f64) -> f64,
    {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }

    pub fn zip_map<F>(&self, f: F, other: &Vector) -> Result<Vector, VectorError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.zip_named_alloc("Vector::zip_map", other, f)
    }

    pub fn zip_map_into<F>(&self, f: F, other: &Vector, out: &mut Vector) -> Result<(), VectorError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.zip_named("Vector::zip_map", other, out, f)
    }

    pub fn zip_map_in_place<F>(&mut self, f: F, other: &Vector) -> Result<(), VectorError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.zip_named_in_place("Vector::zip_map", other, f)
    }

    // ---------------------------------------------------------------------
    // Arithmetic
    // ---------------------------------------------------------------------

    pub fn negate(&self) -> Vector {
        self.map(|v| -v)
    }

    pub fn negate_into(&self, out: &mut Vector) -> Result<(), VectorError> {
        self.map_named("Vector::negate", out, |v| -v)
    }

    pub fn negate_in_place(&mut self) {
        self.map_in_place(|v| -v)
    }

    pub fn scale(&self, s: f64) -> Vector {
        self.map(|v| s * v)
    }

    pub fn scale_into(&self, s: f64, out: &mut Vector) -> Result<(), VectorError> {
        self.map_named("Vector::scale", out, |v| s * v)
    }

    pub fn scale_in_place(&mut self, s: f64) {
        self.map_in_place(|v| s * v)
    }

    pub fn divide(&self, s: f64) -> Vector {
        self.map(|v| v / s)
    }

    pub fn divide_into(&self, s: f64, out: &mut Vector) -> Result<(), VectorError> {
        self.map_named("Vector::divide", out, |v| v / s)
    }

    pub fn divide_in_place(&mut self, s: f64) {
        self.map_in_place(|v| v / s)
    }

    pub fn add(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_named_alloc("Vector::add", other, |a, b| a + b)
    }

    pub fn add_into(&self, other: &Vector, out: &mut Vector) -> Result<(), VectorError> {
        self.zip_named("Vector::add", other, out, |a, b| a + b)
    }

    pub fn add_in_place(&mut self, other: &Vector) -> Result<(), VectorError> {
        self.zip_named_in_place("Vector::add", other, |a, b| a + b)
    }

    /// `self - other`
    pub fn subtract(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_named_alloc("Vector::subtract", other, |a, b| a - b)
    }

    pub fn subtract_into(&self, other: &Vector, out: &mut Vector) -> Result<(), VectorError> {
        self.zip_named("Vector::subtract", other, out, |a, b| a - b)
    }

    pub fn subtract_in_place(&mut self, other: &Vector) -> Result<(), VectorError> {
        self.zip_named_in_place("Vector::subtract", other, |a, b| a - b)
    }

    /// Linear combination `a * self + b * other`.
    pub fn lcomb(&self, a: f64, other: &Vector, b: f64) -> Result<Vector, VectorError> {
        self.zip_named_alloc("Vector::lcomb", other, |x, y| a * x + b * y)
    }

    pub fn lcomb_into(
        &self,
        a: f64,
        other: &Vector,
        b: f64,
        out: &mut Vector,
    ) -> Result<(), VectorError> {
        self.zip_named("Vector::lcomb", other, out, |x, y| a * x + b * y)
    }

    pub fn lcomb_in_place(&mut self, a: f64, other: &Vector, b: f64) -> Result<(), VectorError> {
        self.zip_named_in_place("Vector::lcomb", other, |x, y| a * x + b * y)
    }

    // ---------------------------------------------------------------------
    // Matrix products. These read the operand while writing the result, so
    // they never run in place.
    // ---------------------------------------------------------------------

    /// Row vector times matrix: `out[c] = sum_r self[r] * m[r, c]`.
    pub fn mul_matrix(&self, m: &Matrix) -> Result<Vector, VectorError> {
        let mut out = Vector::zeros(m.cols());
        self.mul_matrix_into(m, &mut out)?;
        Ok(out)
    }

    pub fn mul_matrix_into(&self, m: &Matrix, out: &mut Vector) -> Result<(), VectorError> {
        check_dims("Vector::mul_matrix(m.rows)", m.rows(), self.dimension())?;
        check_dims("Vector::mul_matrix(out)", m.cols(), out.dimension())?;
        for c in 0..m.cols() {
            out.data[c] = (0..m.rows()).map(|r| self.data[r] * m[(r, c)]).sum();
        }
        Ok(())
    }

    pub fn mul_matrix_in_place(&mut self, _m: &Matrix) -> Result<(), VectorError> {
        Err(VectorError::InvalidOperation {
            op: "Vector::mul_matrix",
            reason: "cannot multiply in place",
        })
    }

    /// Matrix times column vector: `out[r] = sum_c m[r, c] * self[c]`.
    pub fn mul_matrix_left(&self, m: &Matrix) -> Result<Vector, VectorError> {
        let mut out = Vector::zeros(m.rows());
        self.mul_matrix_left_into(m, &mut out)?;
        Ok(out)
    }

    pub fn mul_matrix_left_into(&self, m: &Matrix, out: &mut Vector) -> Result<(), VectorError> {
        check_dims("Vector::mul_matrix_left(m.cols)", m.cols(), self.dimension())?;
        check_dims("Vector::mul_matrix_left(out)", m.rows(), out.dimension())?;
        for r in 0..m.rows() {
            out.data[r] = (0..m.cols()).map(|c| self.data[c] * m[(r, c)]).sum();
        }
        Ok(())
    }

    pub fn mul_matrix_left_in_place(&mut self, _m: &Matrix) -> Result<(), VectorError> {
        Err(VectorError::InvalidOperation {
            op: "Vector::mul_matrix_left",
            reason: "cannot multiply in place",
        })
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(data: [f64; N]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match self.data.get(index) {
            Some(v) => v,
            None => panic!(
                "{}",
                VectorError::IndexOutOfBounds {
                    index,
                    dimension: self.dimension()
                }
            ),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let dimension = self.dimension();
        match self.data.get_mut(index) {
            Some(v) => v,
            None => panic!("{}", VectorError::IndexOutOfBounds { index, dimension }),
        }
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(mut self) -> Vector {
        self.negate_in_place();
        self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, s: f64) -> Vector {
        self.scale(s)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, s: f64) -> Vector {
        self.scale_in_place(s);
        self
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: &Vector) -> Vector {
        v.scale(self)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, s: f64) -> Vector {
        self.divide(s)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(mut self, s: f64) -> Vector {
        self.divide_in_place(s);
        self
    }
}

impl<'a, 'b> std::ops::Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, rhs: &'b Vector) -> Vector {
        or_panic(Vector::add(self, rhs))
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;

    fn add(mut self, rhs: Vector) -> Vector {
        or_panic(self.add_in_place(&rhs));
        self
    }
}

impl<'a, 'b> std::ops::Sub<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn sub(self, rhs: &'b Vector) -> Vector {
        or_panic(self.subtract(rhs))
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;

    fn sub(mut self, rhs: Vector) -> Vector {
        or_panic(self.subtract_in_place(&rhs));
        self
    }
}

/// `&a * &b` is the dot product.
impl<'a, 'b> Mul<&'b Vector> for &'a Vector {
    type Output = f64;

    fn mul(self, rhs: &'b Vector) -> f64 {
        or_panic(self.dot(rhs))
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Vector {
    type Output = Vector;

    fn mul(self, m: &'b Matrix) -> Vector {
        or_panic(self.mul_matrix(m))
    }
}

impl<'a, 'b> Mul<&'b Vector> for &'a Matrix {
    type Output = Vector;

    fn mul(self, v: &'b Vector) -> Vector {
        or_panic(v.mul_matrix_left(self))
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        or_panic(self.add_in_place(rhs))
    }
}

impl SubAssign<&Vector> for Vector {
    fn sub_assign(&mut self, rhs: &Vector) {
        or_panic(self.subtract_in_place(rhs))
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, s: f64) {
        self.scale_in_place(s)
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, s: f64) {
        self.divide_in_place(s)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_with_wrong_buffer_leaves_it_untouched() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([3.0, 4.0]);
        let mut out = Vector::from([9.0, 9.0, 9.0]);
        let err = a.add_into(&b, &mut out).unwrap_err();
        assert!(matches!(err, VectorError::DimensionMismatch { left: 2, right: 3, .. }));
        assert_eq!(out.as_slice(), &[9.0, 9.0, 9.0]);
    }

    #[test]
    fn into_with_mismatched_operand_leaves_buffer_untouched() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([3.0, 4.0, 5.0]);
        let mut out = Vector::from([7.0, 7.0]);
        assert!(a.lcomb_into(1.0, &b, 1.0, &mut out).is_err());
        assert_eq!(out.as_slice(), &[7.0, 7.0]);
    }

    #[test]
    fn in_place_mismatch_leaves_self_untouched() {
        let mut a = Vector::from([1.0, 2.0]);
        assert!(a.subtract_in_place(&Vector::zeros(3)).is_err());
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn lcomb_in_place_uses_old_self() {
        let mut a = Vector::from([1.0, 2.0]);
        let b = Vector::from([10.0, 20.0]);
        a.lcomb_in_place(2.0, &b, 0.5).unwrap();
        assert_eq!(a.as_slice(), &[7.0, 14.0]);
    }

    #[test]
    fn matrix_products_reject_in_place() {
        let mut v = Vector::from([1.0, 2.0]);
        let m = Matrix::identity(2);
        assert!(matches!(
            v.mul_matrix_in_place(&m),
            Err(VectorError::InvalidOperation { .. })
        ));
        assert!(matches!(
            v.mul_matrix_left_in_place(&m),
            Err(VectorError::InvalidOperation { .. })
        ));
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn display_uses_angle_brackets() {
        assert_eq!(Vector::from([1.0, 2.5, -3.0]).to_string(), "<1, 2.5, -3>");
        assert_eq!(Vector::zeros(0).to_string(), "<>");
    }

    #[test]
    fn serde_is_a_plain_sequence() {
        let v = Vector::from([1.0, 2.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.0]");
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_past_dimension_panics() {
        let v = Vector::zeros(2);
        let _ = v[2];
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn operator_add_panics_on_mismatch() {
        let _ = &Vector::zeros(2) + &Vector::zeros(3);
    }
}
