use std::collections::{HashMap, TryReserveError};

use crate::error::SymbolKind;

/// A named variable holding a single number.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarSymbol {
    /// The symbol's case-sensitive name.
    pub name:  String,
    /// The current value; zero until loaded.
    pub value: f64,
}

impl ScalarSymbol {
    /// Creates a zero-valued scalar.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:  name.into(),
               value: 0.0, }
    }
}

impl std::fmt::Display for ScalarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// A named array of numbers indexed from zero.
///
/// The backing storage stays empty until a size is declared by the value
/// loader, so every subscript of an unloaded array is out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySymbol {
    /// The symbol's case-sensitive name.
    pub name: String,
    values:   Vec<f64>,
}

impl ArraySymbol {
    /// Creates an array with no storage.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:   name.into(),
               values: Vec::new(), }
    }

    /// The declared size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.values.len()
    }

    /// All elements in index order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the element at `index`, or `None` outside `[0, size)`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Replaces the storage with `size` zeros.
    ///
    /// # Errors
    /// Returns the allocator's error if `size` elements cannot be reserved.
    /// The previous storage is kept in that case.
    pub fn allocate(&mut self, size: usize) -> Result<(), TryReserveError> {
        let mut values = Vec::new();
        values.try_reserve_exact(size)?;
        values.resize(size, 0.0);
        self.values = values;
        Ok(())
    }

    /// Writes `value` at `index`. Returns `false` if `index` is out of range.
    pub fn set(&mut self, index: usize, value: f64) -> bool {
        self.values.get_mut(index).map(|slot| *slot = value).is_some()
    }
}

impl std::fmt::Display for ArraySymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=[", self.name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// The scalar and array symbols referenced by one expression.
///
/// A name belongs to at most one of the two sets and appears in it at most
/// once. Inserting a name that is already present in either set does
/// nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    scalars: HashMap<String, ScalarSymbol>,
    arrays:  HashMap<String, ArraySymbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a zero-valued scalar. Returns `true` if the name was new.
    pub fn insert_scalar(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.scalars.insert(name.to_string(), ScalarSymbol::new(name));
        true
    }

    /// Registers an unallocated array. Returns `true` if the name was new.
    pub fn insert_array(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.arrays.insert(name.to_string(), ArraySymbol::new(name));
        true
    }

    /// Returns `true` if `name` is a scalar or an array.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scalars.contains_key(name) || self.arrays.contains_key(name)
    }

    /// Which set `name` belongs to, if any.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<SymbolKind> {
        if self.scalars.contains_key(name) {
            Some(SymbolKind::Scalar)
        } else if self.arrays.contains_key(name) {
            Some(SymbolKind::Array)
        } else {
            None
        }
    }

    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&ScalarSymbol> {
        self.scalars.get(name)
    }

    #[must_use]
    pub fn array(&self, name: &str) -> Option<&ArraySymbol> {
        self.arrays.get(name)
    }

    /// Sets a scalar's value. Returns `false` if `name` is not a scalar.
    pub fn set_scalar(&mut self, name: &str, value: f64) -> bool {
        self.scalars
            .get_mut(name)
            .map(|symbol| symbol.value = value)
            .is_some()
    }

    /// Allocates an array to `size` and writes each `(index, value)` pair.
    ///
    /// Returns `Ok(false)` if `name` is not an array or an index is out of
    /// range; pairs before the bad index are still written.
    ///
    /// # Errors
    /// Returns the allocator's error if storage for `size` elements cannot be
    /// reserved. The array is left unchanged.
    pub fn set_array_values(&mut self,
                            name: &str,
                            size: usize,
                            values: impl IntoIterator<Item = (usize, f64)>)
                            -> Result<bool, TryReserveError> {
        let Some(array) = self.arrays.get_mut(name) else {
            return Ok(false);
        };
        array.allocate(size)?;
        Ok(values.into_iter().all(|(index, value)| array.set(index, value)))
    }

    /// Scalar names in sorted order.
    #[must_use]
    pub fn scalar_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scalars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Array names in sorted order.
    #[must_use]
    pub fn array_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.arrays.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Total number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scalars.len() + self.arrays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.arrays.is_empty()
    }
}
