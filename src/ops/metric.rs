//! Norms, dot products and reflections.

use super::check_len;
use crate::error::Result;
use crate::nd::types::Scalar;
use crate::nd::vecn::Vector;

impl Vector {
    /// Dot product with a vector or slice of the same dimension.
    #[inline]
    pub fn dot<R: AsRef<[Scalar]> + ?Sized>(&self, rhs: &R) -> Result<Scalar> {
        let rhs = rhs.as_ref();
        check_len(self.dimension(), rhs)?;
        Ok(self.iter().zip(rhs).map(|(a, b)| a * b).sum())
    }

    /// Euclidean norm (length).
    #[inline]
    pub fn magnitude(&self) -> Scalar {
        self.iter().map(|x| x * x).sum::<Scalar>().sqrt()
    }

    /// The p-norm `(Σ|xᵢ|ᵖ)^(1/p)`.
    pub fn pnorm(&self, p: Scalar) -> Scalar {
        self.iter()
            .map(|x| x.abs().powf(p))
            .sum::<Scalar>()
            .powf(1.0 / p)
    }

    /// This vector scaled to unit length. A zero vector yields NaNs.
    pub fn normalize(&self) -> Vector {
        let m = self.magnitude();
        self.map_components(|x| x / m)
    }

    /// Reflect across the hyperplane with the given normal: `v − 2(v·n̂)n̂`.
    pub fn reflect(&self, normal: &Vector) -> Result<Vector> {
        let n = normal.normalize();
        let d = self.dot(&n)?;
        self.minus(&n.map_components(|x| 2.0 * d * x))
    }
}
