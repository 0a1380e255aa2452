// src/nd/swizzle.rs
//! Shader-style named component access (`v.x`, `v.zyx`, `v.rgba`, ...).
//!
//! A swizzle is a non-empty string whose characters all come from one of
//! three synonym sets, each naming components 0 to 3:
//!
//! | set    | 0 | 1 | 2 | 3 |
//! |--------|---|---|---|---|
//! | `xyzw` | x | y | z | w |
//! | `rgba` | r | g | b | a |
//! | `stpq` | s | t | p | q |
//!
//! Reads may repeat symbols and may be longer than four characters
//! (`"xxxxx"` is a vec5). Writes may not repeat symbols. A symbol that names
//! a component beyond the vector's dimension makes the whole access
//! unavailable: reads are absent and writes do nothing.

use crate::error::{Result, VecError};
use crate::nd::types::Scalar;
use crate::nd::vecn::Vector;
use crate::value::Value;

/// One of the three accessor alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolSet {
    /// Positional names `x y z w`.
    Xyzw,
    /// Colour names `r g b a`.
    Rgba,
    /// Texture-coordinate names `s t p q`.
    Stpq,
}

impl SymbolSet {
    /// Every set, in lookup order.
    pub const ALL: [SymbolSet; 3] = [SymbolSet::Xyzw, SymbolSet::Rgba, SymbolSet::Stpq];

    /// The four symbols of this set, by component index.
    pub const fn symbols(self) -> [char; 4] {
        match self {
            SymbolSet::Xyzw => ['x', 'y', 'z', 'w'],
            SymbolSet::Rgba => ['r', 'g', 'b', 'a'],
            SymbolSet::Stpq => ['s', 't', 'p', 'q'],
        }
    }

    /// Component index named by `c` in this set.
    #[inline]
    pub fn index_of(self, c: char) -> Option<usize> {
        match (self, c) {
            (SymbolSet::Xyzw, 'x') | (SymbolSet::Rgba, 'r') | (SymbolSet::Stpq, 's') => Some(0),
            (SymbolSet::Xyzw, 'y') | (SymbolSet::Rgba, 'g') | (SymbolSet::Stpq, 't') => Some(1),
            (SymbolSet::Xyzw, 'z') | (SymbolSet::Rgba, 'b') | (SymbolSet::Stpq, 'p') => Some(2),
            (SymbolSet::Xyzw, 'w') | (SymbolSet::Rgba, 'a') | (SymbolSet::Stpq, 'q') => Some(3),
            _ => None,
        }
    }

    /// The set that contains every character of `key`, if any.
    pub fn detect(key: &str) -> Option<SymbolSet> {
        let first = key.chars().next()?;
        let set = Self::ALL.into_iter().find(|s| s.index_of(first).is_some())?;
        key.chars().all(|c| set.index_of(c).is_some()).then_some(set)
    }
}

/// A parsed swizzle: the symbol set and the component index of each symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swizzle {
    key: String,
    set: SymbolSet,
    indices: Vec<usize>,
}

impl Swizzle {
    /// Parse `key`; `None` if it is not a swizzle.
    pub fn parse(key: &str) -> Option<Self> {
        let set = SymbolSet::detect(key)?;
        let indices = key.chars().filter_map(|c| set.index_of(c)).collect();
        Some(Swizzle {
            key: key.to_owned(),
            set,
            indices,
        })
    }

    /// The swizzle as written.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Which alphabet it uses.
    #[inline]
    pub fn symbol_set(&self) -> SymbolSet {
        self.set
    }

    /// Component indices, in symbol order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Never true for a parsed swizzle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Single-symbol swizzles address a scalar.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.indices.len() == 1
    }

    /// Whether every symbol names a component below `dimension`.
    #[inline]
    pub fn fits(&self, dimension: usize) -> bool {
        self.indices.iter().all(|&i| i < dimension)
    }

    /// Whether any component is named twice.
    pub fn has_repeats(&self) -> bool {
        let mut seen = [false; 4];
        for &i in &self.indices {
            if std::mem::replace(&mut seen[i], true) {
                return true;
            }
        }
        false
    }

    /// Read through the swizzle.
    ///
    /// Single symbols yield a number, longer swizzles a new vector of
    /// dimension [`Swizzle::len`]. `None` if any symbol is beyond `v`'s
    /// dimension.
    pub fn read(&self, v: &Vector) -> Option<Value> {
        if self.is_scalar() {
            return v.component(self.indices[0]).map(Value::Number);
        }
        if !self.fits(v.dimension()) {
            tracing::trace!(swizzle = %self.key, dimension = v.dimension(), "swizzle read out of range");
            return None;
        }
        let gathered: Vec<Scalar> = self.indices.iter().map(|&i| v[i]).collect();
        let ty = v.vec_type().sibling(gathered.len()).ok()?;
        Some(Value::Vector(ty.wrap(gathered)))
    }

    /// Write through the swizzle.
    ///
    /// Single symbols take a number; longer swizzles take a sequence of
    /// numbers of matching length. Returns `Ok(false)` without touching `v`
    /// when a symbol is beyond `v`'s dimension.
    pub fn write(&self, v: &mut Vector, value: Value) -> Result<bool> {
        if self.is_scalar() {
            let x = value.as_number().ok_or(VecError::NonNumeric {
                found: value.type_name(),
            })?;
            let index = self.indices[0];
            if index >= v.dimension() {
                tracing::trace!(swizzle = %self.key, dimension = v.dimension(), "swizzle write out of range");
                return Ok(false);
            }
            v.components_mut()[index] = x;
            return Ok(true);
        }

        let items = value.into_items().map_err(|other| VecError::NotASequence {
            found: other.type_name(),
        })?;
        if items.len() != self.len() {
            return Err(VecError::LengthMismatch {
                expected: self.len(),
                got: items.len(),
            });
        }
        let mut values = Vec::with_capacity(items.len());
        for item in &items {
            values.push(item.as_number().ok_or(VecError::NonNumeric {
                found: item.type_name(),
            })?);
        }

        if !self.fits(v.dimension()) {
            tracing::trace!(swizzle = %self.key, dimension = v.dimension(), "swizzle write out of range");
            return Ok(false);
        }
        if self.has_repeats() {
            return Err(VecError::DuplicateSwizzle {
                swizzle: self.key.clone(),
            });
        }

        let components = v.components_mut();
        for (&i, x) in self.indices.iter().zip(values) {
            components[i] = x;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_alphabet() {
        assert_eq!(SymbolSet::detect("xyzw"), Some(SymbolSet::Xyzw));
        assert_eq!(SymbolSet::detect("abgr"), Some(SymbolSet::Rgba));
        assert_eq!(SymbolSet::detect("qpts"), Some(SymbolSet::Stpq));
    }

    #[test]
    fn mixed_or_foreign_characters_are_not_swizzles() {
        assert_eq!(SymbolSet::detect("xr"), None);
        assert_eq!(SymbolSet::detect("xyz1"), None);
        assert_eq!(SymbolSet::detect("length"), None);
        assert_eq!(SymbolSet::detect(""), None);
        assert!(Swizzle::parse("X").is_none());
    }

    #[test]
    fn parse_resolves_indices_in_order() {
        let s = Swizzle::parse("wxz").unwrap();
        assert_eq!(s.indices(), &[3, 0, 2]);
        assert_eq!(s.symbol_set(), SymbolSet::Xyzw);
        assert!(!s.is_scalar());
        assert!(s.fits(4));
        assert!(!s.fits(3));
    }

    #[test]
    fn repeats() {
        assert!(Swizzle::parse("xx").unwrap().has_repeats());
        assert!(Swizzle::parse("rgbr").unwrap().has_repeats());
        assert!(!Swizzle::parse("spq").unwrap().has_repeats());
    }

    #[test]
    fn symbols_round_trip_through_index_of() {
        for set in SymbolSet::ALL {
            for (i, c) in set.symbols().into_iter().enumerate() {
                assert_eq!(set.index_of(c), Some(i));
            }
        }
    }
}
