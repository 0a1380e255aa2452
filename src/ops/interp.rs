//! Variadic helpers and interpolation between vectors.

use crate::error::{Result, VecError};
use crate::nd::types::Scalar;
use crate::nd::vecn::Vector;

fn same_dimension<'a>(vectors: &[&'a Vector]) -> Result<&'a Vector> {
    let first = *vectors.first().ok_or(VecError::EmptyInput)?;
    if let Some(v) = vectors.iter().find(|v| v.dimension() != first.dimension()) {
        return Err(VecError::DimensionMismatch {
            expected: first.dimension(),
            got: v.dimension(),
        });
    }
    Ok(first)
}

#[inline]
fn clamp01(t: Scalar) -> Scalar {
    t.clamp(0.0, 1.0)
}

/// Sum of any number of vectors of one dimension.
pub fn add<'a>(vectors: impl IntoIterator<Item = &'a Vector>) -> Result<Vector> {
    let vectors: Vec<&Vector> = vectors.into_iter().collect();
    let first = same_dimension(&vectors)?;
    vectors
        .iter()
        .try_fold(first.vec_type().zero(), |acc, v| acc.plus(*v))
}

/// Componentwise product of any number of vectors of one dimension.
pub fn multiply<'a>(vectors: impl IntoIterator<Item = &'a Vector>) -> Result<Vector> {
    let vectors: Vec<&Vector> = vectors.into_iter().collect();
    let first = same_dimension(&vectors)?;
    vectors
        .iter()
        .try_fold(first.vec_type().splat(1.0), |acc, v| acc.times(*v))
}

/// Linear interpolation `a + (b − a)·t`, with `t` clamped to `[0, 1]`.
pub fn lerp(a: &Vector, b: &Vector, t: Scalar) -> Result<Vector> {
    same_dimension(&[a, b])?;
    let t = clamp01(t);
    a.plus(&(b.minus(a)? * t))
}

/// Spherical interpolation with `t` clamped to `[0, 1]`.
///
/// Direction is rotated along the great arc from `a` towards `b`, and the
/// magnitude moves linearly between the two magnitudes.
pub fn slerp(a: &Vector, b: &Vector, t: Scalar) -> Result<Vector> {
    same_dimension(&[a, b])?;
    let t = clamp01(t);

    let dot = a.normalize().dot(&b.normalize())?.clamp(-1.0, 1.0);
    let theta = dot.acos() * t;
    let relative = b.minus(&(a * dot))?.normalize();
    let magnitude = a.magnitude() + (b.magnitude() - a.magnitude()) * t;

    let along = a * theta.cos();
    let across = &relative * theta.sin();
    Ok(along.plus(&across)?.normalize() * magnitude)
}
