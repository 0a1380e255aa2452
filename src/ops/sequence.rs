//! Sequence-style operations: reductions, selection, and derivations that
//! may or may not still be a vector.
//!
//! A derived sequence is a [`Vector`] only when every element is a number
//! and its length is a dimension the registry accepts; otherwise it degrades
//! to a plain list of [`Value`]s.

use super::check_len;
use crate::error::{Result, VecError};
use crate::nd::types::Scalar;
use crate::nd::vecn::Vector;
use crate::value::Value;
use std::ops::{Bound, RangeBounds};

/// Default tolerance for [`Vector::approximately_equals`].
pub const DEFAULT_EPSILON: Scalar = 1e-8;

/// Result of an operation that may break the vector invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    /// Still a vector.
    Vector(Vector),
    /// A plain ordered sequence.
    Plain(Vec<Value>),
}

impl Sequence {
    /// Whether this is still a vector.
    #[inline]
    pub fn is_vector(&self) -> bool {
        matches!(self, Sequence::Vector(_))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Sequence::Vector(v) => v.len(),
            Sequence::Plain(items) => items.len(),
        }
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The vector, if it is one.
    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Sequence::Vector(v) => Some(v),
            Sequence::Plain(_) => None,
        }
    }

    /// Every element as a [`Value`].
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Sequence::Vector(v) => v.iter().map(|&x| Value::Number(x)).collect(),
            Sequence::Plain(items) => items,
        }
    }
}

impl Vector {
    fn derive(&self, values: Vec<Value>) -> Sequence {
        let numbers: Option<Vec<Scalar>> = values.iter().map(Value::as_number).collect();
        match (numbers, self.vec_type().sibling(values.len())) {
            (Some(data), Ok(ty)) => Sequence::Vector(ty.wrap(data)),
            _ => Sequence::Plain(values),
        }
    }

    fn derive_numbers(&self, data: Vec<Scalar>) -> Sequence {
        match self.vec_type().sibling(data.len()) {
            Ok(ty) => Sequence::Vector(ty.wrap(data)),
            Err(_) => Sequence::Plain(data.into_iter().map(Value::Number).collect()),
        }
    }

    /// Sum of the components.
    pub fn sum(&self) -> Scalar {
        self.iter().sum()
    }

    /// Largest component (NaN if any component is NaN).
    pub fn max(&self) -> Scalar {
        self.iter().copied().fold(Scalar::NEG_INFINITY, |m, x| {
            if x.is_nan() || m.is_nan() {
                Scalar::NAN
            } else {
                m.max(x)
            }
        })
    }

    /// Smallest component (NaN if any component is NaN).
    pub fn min(&self) -> Scalar {
        self.iter().copied().fold(Scalar::INFINITY, |m, x| {
            if x.is_nan() || m.is_nan() {
                Scalar::NAN
            } else {
                m.min(x)
            }
        })
    }

    /// Every index holding the largest component.
    pub fn argmax(&self) -> Vec<usize> {
        let m = self.max();
        self.positions(|x| x == m)
    }

    /// Every index holding the smallest component.
    pub fn argmin(&self) -> Vec<usize> {
        let m = self.min();
        self.positions(|x| x == m)
    }

    fn positions(&self, pred: impl Fn(Scalar) -> bool) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|&(_, &x)| pred(x))
            .map(|(i, _)| i)
            .collect()
    }

    /// A new vector of the components at `indices`, in that order.
    pub fn choose(&self, indices: &[usize]) -> Result<Vector> {
        if let Some(&index) = indices.iter().find(|&&i| i >= self.dimension()) {
            return Err(VecError::Range {
                index,
                dimension: self.dimension(),
            });
        }
        let ty = self.vec_type().sibling(indices.len())?;
        Ok(ty.wrap(indices.iter().map(|&i| self[i]).collect()))
    }

    /// Exact equality with a vector or slice of any length.
    pub fn equals<R: AsRef<[Scalar]> + ?Sized>(&self, rhs: &R) -> bool {
        self.as_slice() == rhs.as_ref()
    }

    /// Same length, and every component within `epsilon`.
    pub fn approximately_equals<R: AsRef<[Scalar]> + ?Sized>(&self, rhs: &R, epsilon: Scalar) -> bool {
        let rhs = rhs.as_ref();
        check_len(self.dimension(), rhs).is_ok()
            && self.iter().zip(rhs).all(|(a, b)| (a - b).abs() < epsilon)
    }

    /// This vector followed by `tail`, as a longer vector.
    pub fn concat<R: AsRef<[Scalar]> + ?Sized>(&self, tail: &R) -> Result<Vector> {
        let mut data = self.to_vec();
        data.extend_from_slice(tail.as_ref());
        let ty = self.vec_type().sibling(data.len())?;
        Ok(ty.wrap(data))
    }

    /// Components satisfying `pred`.
    pub fn filter(&self, mut pred: impl FnMut(Scalar) -> bool) -> Sequence {
        let kept: Vec<Scalar> = self.iter().copied().filter(|&x| pred(x)).collect();
        self.derive_numbers(kept)
    }

    /// Components in `range` (clamped to the dimension).
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Sequence {
        let dim = self.dimension();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(dim);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => dim,
        }
        .min(dim);
        let data = if start < end {
            self.as_slice()[start..end].to_vec()
        } else {
            Vec::new()
        };
        self.derive_numbers(data)
    }

    /// A new vector of the same type with `f` applied to each component.
    pub fn map(&self, f: impl FnMut(Scalar) -> Scalar) -> Vector {
        self.map_components(f)
    }

    /// Apply `f` to each component; a vector only if every result is a number.
    pub fn map_values<T: Into<Value>>(&self, mut f: impl FnMut(Scalar) -> T) -> Sequence {
        self.derive(self.iter().map(|&x| f(x).into()).collect())
    }

    /// Remove `delete_count` components at `start` and insert `items` there,
    /// in place. The length must not change. Returns the removed components.
    pub fn splice(&mut self, start: usize, delete_count: usize, items: &[Scalar]) -> Result<Vec<Scalar>> {
        let dim = self.dimension();
        let start = start.min(dim);
        let end = start.saturating_add(delete_count).min(dim);
        let got = dim - (end - start) + items.len();
        if got != dim {
            return Err(VecError::Splice { dimension: dim, got });
        }
        let components = self.components_mut();
        let removed = components[start..end].to_vec();
        components[start..end].copy_from_slice(items);
        Ok(removed)
    }
}
