// src/nd/vecn.rs
//! Fixed-length numeric vector whose dimension is chosen at run time.
//!
//! A [`Vector`] owns exactly `dimension` components and never grows or
//! shrinks. Its dimension comes from the [`VecType`] that built it and cannot
//! be reassigned. Arithmetic lives in [`crate::ops`]; this module covers
//! construction and direct component access.

use crate::error::{Result, VecError};
use crate::nd::registry::VecType;
use crate::nd::types::Scalar;
use crate::value::Value;
use std::fmt;
use std::ops::Index;

/// An N-dimensional numeric vector.
#[derive(Clone)]
pub struct Vector {
    ty: VecType,
    data: Box<[Scalar]>,
}

impl Vector {
    #[inline]
    pub(crate) fn from_parts(ty: VecType, data: Box<[Scalar]>) -> Self {
        Vector { ty, data }
    }

    /// The type (constructor handle) this vector was built by.
    #[inline]
    pub fn vec_type(&self) -> &VecType {
        &self.ty
    }

    /// Number of components.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Same as [`Vector::dimension`].
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: every admissible dimension is positive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Iterate over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.data.iter()
    }

    /// Copy the components into a `Vec`.
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.data.to_vec()
    }

    /// Component `index`, if in range.
    #[inline]
    pub fn component(&self, index: usize) -> Option<Scalar> {
        self.data.get(index).copied()
    }

    /// Overwrite component `index`.
    pub fn set_component(&mut self, index: usize, value: Scalar) -> Result<()> {
        let dimension = self.dimension();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VecError::Range { index, dimension }),
        }
    }

    /// Overwrite component `index` with an arbitrary value, which must be a
    /// number. The index is checked first.
    pub fn set_index(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        if index >= self.dimension() {
            return Err(VecError::Range {
                index,
                dimension: self.dimension(),
            });
        }
        let value = value.into();
        let x = value.as_number().ok_or(VecError::NonNumeric {
            found: value.type_name(),
        })?;
        self.set_component(index, x)
    }

    /// Enumerable keys: the component indices `"0"..` and nothing else.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.dimension()).map(|i| i.to_string())
    }

    /// Whether `self` was built by exactly `ty`.
    #[inline]
    pub fn is_instance_of(&self, ty: &VecType) -> bool {
        &self.ty == ty
    }

    pub(crate) fn components_mut(&mut self) -> &mut [Scalar] {
        &mut self.data
    }
}

impl VecType {
    /// Construct a vector from dynamic arguments.
    ///
    /// Accepted forms:
    /// - no arguments: all zeros
    /// - one number: broadcast to every component
    /// - exactly `dimension` numbers
    /// - a single vector of dimension ≤ `dimension`: copied and zero-padded
    ///
    /// A sole sequence argument is unwrapped (repeatedly, while it is the only
    /// item) before the rules above apply.
    pub fn call<I, T>(&self, args: I) -> Result<Vector>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        if let [Value::Vector(source)] = args.as_slice() {
            return self.promote(source);
        }

        let args = flatten_outer(args);
        let mut components = Vec::with_capacity(args.len());
        for arg in &args {
            match arg.as_number() {
                Some(x) => components.push(x),
                None => {
                    return Err(VecError::NonNumeric {
                        found: arg.type_name(),
                    })
                }
            }
        }
        self.from_slice(&components)
    }

    /// Construct from plain numbers: 0, 1 or `dimension` of them.
    pub fn from_slice(&self, components: &[Scalar]) -> Result<Vector> {
        let dimension = self.dimension();
        match components.len() {
            0 => Ok(self.zero()),
            1 => Ok(self.splat(components[0])),
            n if n == dimension => Ok(self.wrap(components.to_vec())),
            got => Err(VecError::Arity { dimension, got }),
        }
    }

    /// All components zero.
    pub fn zero(&self) -> Vector {
        self.splat(0.0)
    }

    /// All components equal to `x`.
    pub fn splat(&self, x: Scalar) -> Vector {
        self.wrap(vec![x; self.dimension()])
    }

    /// Copy `source` into this type, zero-padding the extra components.
    pub fn promote(&self, source: &Vector) -> Result<Vector> {
        let dimension = self.dimension();
        if source.dimension() > dimension {
            return Err(VecError::Demotion {
                from: source.dimension(),
                to: dimension,
            });
        }
        let mut data = vec![0.0; dimension];
        data[..source.dimension()].copy_from_slice(source.as_slice());
        Ok(self.wrap(data))
    }

    /// Whether `v` was built by this type.
    #[inline]
    pub fn is_instance(&self, v: &Vector) -> bool {
        v.is_instance_of(self)
    }
}

/// Strip single-item sequence wrappers: `[[1, 2]]` becomes `[1, 2]`.
fn flatten_outer(mut args: Vec<Value>) -> Vec<Value> {
    while args.len() == 1 && args[0].is_sequence() {
        match args.pop().map(Value::into_items) {
            Some(Ok(items)) => args = items,
            Some(Err(other)) => return vec![other],
            None => break,
        }
    }
    args
}

impl Index<usize> for Vector {
    type Output = Scalar;
    #[inline]
    fn index(&self, index: usize) -> &Scalar {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl AsRef<[Scalar]> for Vector {
    fn as_ref(&self) -> &[Scalar] {
        &self.data
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(v: Vector) -> Vec<Scalar> {
        v.data.into_vec()
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty.name())?;
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (i, x) in self.data.iter().enumerate() {
            if i + 1 == self.data.len() {
                write!(f, "{x} ")?;
            } else {
                write!(f, "{x}, ")?;
            }
        }
        f.write_str("]")
    }
}
