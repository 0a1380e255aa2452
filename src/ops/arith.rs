//! Componentwise arithmetic.

use super::Operand;
use crate::error::Result;
use crate::nd::types::Scalar;
use crate::nd::vecn::Vector;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Vector {
    /// Apply `f` to every component, keeping the type.
    pub(crate) fn map_components(&self, mut f: impl FnMut(Scalar) -> Scalar) -> Vector {
        self.vec_type().wrap(self.iter().map(|&x| f(x)).collect())
    }

    fn zip_with<'a>(
        &self,
        rhs: impl Into<Operand<'a>>,
        f: impl Fn(Scalar, Scalar) -> Scalar,
    ) -> Result<Vector> {
        let rhs = rhs.into();
        let rhs = rhs.broadcast(self.dimension())?;
        let data = self.iter().zip(rhs.iter()).map(|(&a, &b)| f(a, b)).collect();
        Ok(self.vec_type().wrap(data))
    }

    /// `self + rhs`, componentwise; a scalar is added to every component.
    pub fn plus<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// `self - rhs`, componentwise.
    pub fn minus<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// `self * rhs`, componentwise; a scalar scales the vector.
    pub fn times<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// `self / rhs`, componentwise.
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.zip_with(rhs, |a, b| a / b)
    }

    /// Every component negated.
    #[inline]
    pub fn neg(&self) -> Vector {
        self.map_components(|x| -x)
    }

    /// Every component raised to `p`.
    #[inline]
    pub fn pow(&self, p: Scalar) -> Vector {
        self.map_components(|x| x.powf(p))
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::neg(&self)
    }
}

impl Neg for &Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::neg(self)
    }
}

macro_rules! scalar_op {
    ($tr:ident, $method:ident, $op:tt) => {
        impl $tr<Scalar> for &Vector {
            type Output = Vector;
            #[inline]
            fn $method(self, rhs: Scalar) -> Vector {
                self.map_components(|x| x $op rhs)
            }
        }

        impl $tr<Scalar> for Vector {
            type Output = Vector;
            #[inline]
            fn $method(self, rhs: Scalar) -> Vector {
                <&Vector as $tr<Scalar>>::$method(&self, rhs)
            }
        }
    };
}

scalar_op!(Add, add, +);
scalar_op!(Sub, sub, -);
scalar_op!(Mul, mul, *);
scalar_op!(Div, div, /);
