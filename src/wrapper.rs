//! Generic value wrapper for dependency-injection disambiguation.
//!
//! Registering two bindings of the same concrete type in a container needs
//! distinguishable handles; [`Wrapped`] gives a value a registration-friendly
//! box whose identity is nothing but the value itself.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::ops::Deref;

/// Box around a single value, equal and hashable by that value alone.
///
/// Immutable after construction. Every operation is total: the associated
/// helpers taking `Option<Wrapped<T>>` normalize an absent handle to a
/// documented default instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wrapped<T> {
    value: T,
}

impl<T> Wrapped<T> {
    /// Wraps `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the wrapped value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps into the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Null-safe unwrap: the wrapped value, or `T`'s default when the handle
    /// is absent.
    #[must_use]
    pub fn unwrap_or_default(wrapper: Option<Self>) -> T
    where
        T: Default,
    {
        wrapper.map_or_else(T::default, |w| w.value)
    }

    /// Hash of the wrapped value, or the sentinel `0` when the handle is
    /// absent.
    #[must_use]
    pub fn hash_of(wrapper: Option<&Self>) -> u64
    where
        T: Hash,
    {
        match wrapper {
            Some(w) => {
                let mut hasher = DefaultHasher::new();
                w.value.hash(&mut hasher);
                hasher.finish()
            }
            None => 0,
        }
    }

    /// The wrapped value's own string form, or `"Null Wrapper"` when the
    /// handle is absent.
    #[must_use]
    pub fn display_string(wrapper: Option<&Self>) -> String
    where
        T: fmt::Display,
    {
        match wrapper {
            Some(w) => w.value.to_string(),
            None => "Null Wrapper".to_string(),
        }
    }
}

impl<T> From<T> for Wrapped<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Deref for Wrapped<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display> fmt::Display for Wrapped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
