// src/nd/registry.rs
//! Memoizing factory of vector types, keyed by dimension.
//!
//! A [`Registry`] maps each dimension it has seen to a single [`VecType`]
//! handle. Repeated lookups return the same handle, so `==` on handles is an
//! identity test ("is this exactly a vec3 of this registry"). Entries are
//! created on first use and never evicted.
//!
//! Most callers use [`Registry::global`]; tests and embedders that need
//! isolation construct their own with [`Registry::new`] or
//! [`Registry::with_config`].

use crate::error::{Result, VecError};
use crate::nd::types::{Scalar, MAX_DIMENSION};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Smallest admissible dimension: 1 or 2.
    pub min_dimension: usize,

    /// Dimensions whose types are built when the registry is created.
    pub preregistered: Vec<usize>,
}

impl RegistryConfig {
    /// Default configuration: 1-dimensional vectors allowed, vec2/vec3/vec4 prebuilt.
    pub fn new() -> Self {
        Self {
            min_dimension: 1,
            preregistered: vec![2, 3, 4],
        }
    }

    /// Set the smallest admissible dimension.
    pub fn with_min_dimension(mut self, min_dimension: usize) -> Self {
        self.min_dimension = min_dimension;
        self
    }

    /// Set the dimensions built eagerly.
    pub fn with_preregistered(mut self, dimensions: impl IntoIterator<Item = usize>) -> Self {
        self.preregistered = dimensions.into_iter().collect();
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !(1..=2).contains(&self.min_dimension) {
            return Err(VecError::InvalidConfig(format!(
                "min_dimension must be 1 or 2, got {}",
                self.min_dimension
            )));
        }
        if let Some(&d) = self.preregistered.iter().find(|&&d| d < self.min_dimension) {
            return Err(VecError::InvalidConfig(format!(
                "preregistered dimension {} is below min_dimension {}",
                d, self.min_dimension
            )));
        }
        if let Some(&d) = self.preregistered.iter().find(|&&d| d > MAX_DIMENSION) {
            return Err(VecError::InvalidConfig(format!(
                "preregistered dimension {d} exceeds the maximum dimension {MAX_DIMENSION}"
            )));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can name a dimension.
///
/// Conversion only checks that the input denotes a positive integer; the
/// registry then applies its own bounds.
pub trait IntoDimension {
    /// Convert into a dimension, or explain why not.
    fn into_dimension(self) -> Result<usize>;
}

impl IntoDimension for usize {
    fn into_dimension(self) -> Result<usize> {
        if self == 0 {
            return Err(VecError::invalid_dimension(self, "must be positive"));
        }
        Ok(self)
    }
}

impl IntoDimension for u32 {
    fn into_dimension(self) -> Result<usize> {
        (self as usize).into_dimension()
    }
}

impl IntoDimension for u64 {
    fn into_dimension(self) -> Result<usize> {
        usize::try_from(self)
            .map_err(|_| VecError::invalid_dimension(self, "too large"))?
            .into_dimension()
    }
}

impl IntoDimension for i64 {
    fn into_dimension(self) -> Result<usize> {
        if self <= 0 {
            return Err(VecError::invalid_dimension(self, "must be positive"));
        }
        (self as u64).into_dimension()
    }
}

impl IntoDimension for i32 {
    fn into_dimension(self) -> Result<usize> {
        i64::from(self).into_dimension()
    }
}

impl IntoDimension for f64 {
    fn into_dimension(self) -> Result<usize> {
        if self.is_nan() {
            return Err(VecError::invalid_dimension(self, "not a number"));
        }
        if self <= 0.0 {
            return Err(VecError::invalid_dimension(self, "must be positive"));
        }
        if !self.is_finite() {
            return Err(VecError::invalid_dimension(self, "must be finite"));
        }
        if self.fract() != 0.0 {
            return Err(VecError::invalid_dimension(self, "must be an integer"));
        }
        if self >= usize::MAX as f64 {
            return Err(VecError::invalid_dimension(self, "too large"));
        }
        Ok(self as usize)
    }
}

impl IntoDimension for f32 {
    fn into_dimension(self) -> Result<usize> {
        f64::from(self).into_dimension()
    }
}

impl IntoDimension for &str {
    fn into_dimension(self) -> Result<usize> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Err(VecError::invalid_dimension(format!("{self:?}"), "not a number"));
        }
        match trimmed.parse::<f64>() {
            Ok(x) => x.into_dimension(),
            Err(_) => Err(VecError::invalid_dimension(format!("{self:?}"), "not a number")),
        }
    }
}

impl IntoDimension for String {
    fn into_dimension(self) -> Result<usize> {
        self.as_str().into_dimension()
    }
}

// Bounds shared by the registry and by types whose registry is gone.
fn check_bounds(dimension: usize, min_dimension: usize) -> Result<()> {
    if dimension < min_dimension {
        return Err(VecError::invalid_dimension(dimension, "below the minimum dimension"));
    }
    if dimension > MAX_DIMENSION {
        return Err(VecError::invalid_dimension(dimension, "exceeds the maximum dimension"));
    }
    Ok(())
}

struct RegistryInner {
    config: RegistryConfig,
    types: RwLock<HashMap<usize, VecType>>,
}

/// Shared handle to a vector-type cache. Cloning is cheap and clones share
/// the same cache.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Registry {
    /// A fresh registry with the default configuration.
    pub fn new() -> Self {
        Self::build(RegistryConfig::default())
    }

    /// A fresh registry with a custom configuration.
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RegistryConfig) -> Self {
        let preregistered = config.preregistered.clone();
        let registry = Registry {
            inner: Arc::new(RegistryInner {
                config,
                types: RwLock::new(HashMap::new()),
            }),
        };
        for d in preregistered {
            registry.get_or_insert(d);
        }
        registry
    }

    /// The process-wide registry, created on first use with the default
    /// configuration and never torn down.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.inner.config
    }

    /// Whether `dimension` is admissible here: at least the configured
    /// minimum and at most [`MAX_DIMENSION`].
    #[inline]
    pub fn accepts(&self, dimension: usize) -> bool {
        check_bounds(dimension, self.inner.config.min_dimension).is_ok()
    }

    /// Look up (or build) the vector type for `dimension`.
    ///
    /// Calling twice with the same dimension returns the same handle.
    pub fn vector_type<D: IntoDimension>(&self, dimension: D) -> Result<VecType> {
        let d = dimension.into_dimension()?;
        check_bounds(d, self.inner.config.min_dimension)?;
        Ok(self.get_or_insert(d))
    }

    pub(crate) fn get_or_insert(&self, dimension: usize) -> VecType {
        if let Some(ty) = self.inner.types.read().get(&dimension) {
            return ty.clone();
        }

        let mut types = self.inner.types.write();
        let (ty, built) = match types.entry(dimension) {
            Entry::Occupied(slot) => (slot.get().clone(), false),
            Entry::Vacant(slot) => {
                let ty = VecType::new(
                    dimension,
                    self.inner.config.min_dimension,
                    Arc::downgrade(&self.inner),
                );
                (slot.insert(ty).clone(), true)
            }
        };
        if built {
            tracing::debug!(dimension, registered = types.len(), "built vector type");
        }
        ty
    }

    /// Number of dimensions built so far.
    pub fn len(&self) -> usize {
        self.inner.types.read().len()
    }

    /// `true` if no type has been built yet.
    pub fn is_empty(&self) -> bool {
        self.inner.types.read().is_empty()
    }

    /// Whether a type for `dimension` has already been built.
    pub fn contains(&self, dimension: usize) -> bool {
        self.inner.types.read().contains_key(&dimension)
    }

    /// All built dimensions in ascending order.
    pub fn dimensions(&self) -> Vec<usize> {
        let mut dims: Vec<usize> = self.inner.types.read().keys().copied().collect();
        dims.sort_unstable();
        dims
    }

    /// Whether two handles share the same cache.
    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.inner.config)
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

struct VecTypeInner {
    dimension: usize,
    name: String,
    // outlives the registry, so derived lengths keep its bound
    min_dimension: usize,
    registry: Weak<RegistryInner>,
}

/// The constructor handle for vectors of one dimension.
///
/// Handles compare by identity: two handles are equal only if they came
/// from the same registry entry.
#[derive(Clone)]
pub struct VecType {
    inner: Arc<VecTypeInner>,
}

impl VecType {
    fn new(dimension: usize, min_dimension: usize, registry: Weak<RegistryInner>) -> Self {
        VecType {
            inner: Arc::new(VecTypeInner {
                dimension,
                name: format!("vec{dimension}"),
                min_dimension,
                registry,
            }),
        }
    }

    /// Number of components in every vector of this type.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.inner.dimension
    }

    /// Type name, e.g. `"vec3"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Registry that built this type, or the global registry if that one
    /// has been dropped.
    ///
    /// Sibling types derived from an orphaned type are built in the global
    /// registry, but still under the minimum dimension of the registry that
    /// built this one.
    pub fn registry(&self) -> Registry {
        match self.inner.registry.upgrade() {
            Some(inner) => Registry { inner },
            None => Registry::global().clone(),
        }
    }

    /// The sibling type of another dimension, from the same registry.
    pub(crate) fn sibling(&self, dimension: usize) -> Result<VecType> {
        if dimension == self.dimension() {
            return Ok(self.clone());
        }
        let d = dimension.into_dimension()?;
        check_bounds(d, self.inner.min_dimension)?;
        Ok(self.registry().get_or_insert(d))
    }

    /// Build a vector from storage of exactly the right length.
    pub(crate) fn wrap(&self, data: Vec<Scalar>) -> crate::nd::vecn::Vector {
        debug_assert_eq!(data.len(), self.dimension());
        crate::nd::vecn::Vector::from_parts(self.clone(), data.into_boxed_slice())
    }
}

impl PartialEq for VecType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for VecType {}

impl fmt::Debug for VecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VecType").field(&self.inner.name).finish()
    }
}

impl fmt::Display for VecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

/// Look up a vector type in the global registry.
pub fn get_vector_type<D: IntoDimension>(dimension: D) -> Result<VecType> {
    Registry::global().vector_type(dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_dimension_same_handle() {
        let reg = Registry::new();
        let a = reg.vector_type(42usize).unwrap();
        let b = reg.vector_type(42usize).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.name(), "vec42");
    }

    #[test]
    fn distinct_registries_distinct_handles() {
        let a = Registry::new().vector_type(3usize).unwrap();
        let b = Registry::new().vector_type(3usize).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.dimension(), b.dimension());
    }

    #[test]
    fn preregisters_small_dimensions() {
        let reg = Registry::new();
        assert_eq!(reg.dimensions(), vec![2, 3, 4]);
        reg.vector_type(7usize).unwrap();
        assert_eq!(reg.dimensions(), vec![2, 3, 4, 7]);
    }

    #[test]
    fn dimension_coercion() {
        assert_eq!(3.0f64.into_dimension().unwrap(), 3);
        assert_eq!("5".into_dimension().unwrap(), 5);
        assert!(matches!(
            1.2f64.into_dimension(),
            Err(VecError::InvalidDimension { reason: "must be an integer", .. })
        ));
        assert!(matches!(
            f64::NAN.into_dimension(),
            Err(VecError::InvalidDimension { reason: "not a number", .. })
        ));
        assert!(matches!(
            f64::INFINITY.into_dimension(),
            Err(VecError::InvalidDimension { reason: "must be finite", .. })
        ));
        assert!((-5i32).into_dimension().is_err());
        assert!(0usize.into_dimension().is_err());
        assert!("test".into_dimension().is_err());
        assert!("".into_dimension().is_err());
    }

    #[test]
    fn two_to_the_64_is_too_large() {
        assert!(matches!(
            18446744073709551616.0f64.into_dimension(),
            Err(VecError::InvalidDimension { reason: "too large", .. })
        ));
        assert!(matches!(
            f64::MAX.into_dimension(),
            Err(VecError::InvalidDimension { reason: "too large", .. })
        ));
    }

    #[test]
    fn dimensions_above_the_maximum_are_rejected() {
        let reg = Registry::new();
        assert!(reg.accepts(MAX_DIMENSION));
        assert!(!reg.accepts(MAX_DIMENSION + 1));
        assert!(matches!(
            reg.vector_type(1u64 << 61),
            Err(VecError::InvalidDimension { reason: "exceeds the maximum dimension", .. })
        ));
        assert!(!reg.contains(MAX_DIMENSION + 1));
        assert!(Registry::with_config(
            RegistryConfig::new().with_preregistered([MAX_DIMENSION + 1])
        )
        .is_err());
    }

    #[test]
    fn orphaned_type_keeps_its_minimum() {
        let ty = Registry::with_config(RegistryConfig::new().with_min_dimension(2))
            .unwrap()
            .vector_type(3usize)
            .unwrap();
        assert!(ty.sibling(1).is_err());
        assert_eq!(ty.sibling(2).unwrap().dimension(), 2);
    }

    #[test]
    fn min_dimension_is_enforced() {
        let reg = Registry::with_config(RegistryConfig::new().with_min_dimension(2)).unwrap();
        assert!(reg.vector_type(1usize).is_err());
        assert!(reg.vector_type(2usize).is_ok());
        assert!(Registry::with_config(RegistryConfig::new().with_min_dimension(3)).is_err());
        assert!(Registry::with_config(
            RegistryConfig::new().with_min_dimension(2).with_preregistered([1])
        )
        .is_err());
    }

    #[test]
    fn orphaned_type_falls_back_to_global() {
        let ty = Registry::new().vector_type(3usize).unwrap();
        assert!(ty.registry().ptr_eq(Registry::global()));
    }
}
