//! Arithmetic on vectors.
//!
//! Every operation here is pure: operands are never mutated and results are
//! new vectors typed by the receiver's registry. The only in-place operation
//! is [`Vector::splice`](crate::Vector::splice), which refuses to change the
//! length.

pub mod arith;
pub mod interp;
pub mod metric;
pub mod sequence;

use crate::error::{Result, VecError};
use crate::nd::types::Scalar;
use crate::nd::vecn::Vector;
use std::borrow::Cow;

/// Right-hand side of a componentwise operation: a scalar (applied to every
/// component) or a sequence of components matching the vector's dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// Broadcast to every component.
    Scalar(Scalar),
    /// One value per component.
    Components(&'a [Scalar]),
}

impl Operand<'_> {
    /// Expand to exactly `dimension` values.
    pub fn broadcast(&self, dimension: usize) -> Result<Cow<'_, [Scalar]>> {
        match *self {
            Operand::Scalar(x) => Ok(Cow::Owned(vec![x; dimension])),
            Operand::Components(xs) if xs.len() == dimension => Ok(Cow::Borrowed(xs)),
            Operand::Components(xs) => Err(VecError::DimensionMismatch {
                expected: dimension,
                got: xs.len(),
            }),
        }
    }
}

impl From<Scalar> for Operand<'_> {
    fn from(x: Scalar) -> Self {
        Operand::Scalar(x)
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(v: &'a Vector) -> Self {
        Operand::Components(v.as_slice())
    }
}

impl<'a> From<&'a [Scalar]> for Operand<'a> {
    fn from(xs: &'a [Scalar]) -> Self {
        Operand::Components(xs)
    }
}

impl<'a> From<&'a Vec<Scalar>> for Operand<'a> {
    fn from(xs: &'a Vec<Scalar>) -> Self {
        Operand::Components(xs.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [Scalar; N]> for Operand<'a> {
    fn from(xs: &'a [Scalar; N]) -> Self {
        Operand::Components(xs.as_slice())
    }
}

/// Check that `rhs` has exactly `dimension` components.
pub(crate) fn check_len(dimension: usize, rhs: &[Scalar]) -> Result<()> {
    if rhs.len() != dimension {
        return Err(VecError::DimensionMismatch {
            expected: dimension,
            got: rhs.len(),
        });
    }
    Ok(())
}
