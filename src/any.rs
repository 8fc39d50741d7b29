//! Set comparisons and set algebra against type-erased operands.
//!
//! Operands given as `&dyn Any` are checked explicitly and rejected with
//! [`Error::TypeMismatch`] unless they are an [`OrderedSetMap`] of the
//! same element type.

use crate::error::{Error, Result};
use crate::OrderedSetMap;
use core::any::{type_name, Any};
use tracing::debug;

impl<T> OrderedSetMap<T>
where
    T: Ord + Clone + 'static,
{
    /// Downcasts a type-erased operand to a set of the same element type.
    fn downcast_operand(other: &dyn Any) -> Result<&Self> {
        other.downcast_ref::<Self>().ok_or_else(|| {
            let expected = type_name::<Self>();
            debug!(expected, "rejected type-erased set operand");
            Error::TypeMismatch { expected }
        })
    }

    /// Returns `true` if `other` is a set with the same elements as `self`.
    ///
    /// # Errors
    ///
    /// If `other` is not an `OrderedSetMap<T>`.
    pub fn try_eq(&self, other: &dyn Any) -> Result<bool> {
        Self::downcast_operand(other).map(|other| self == other)
    }

    /// Checked form of [`is_subset`](Self::is_subset).
    pub fn try_is_subset(&self, other: &dyn Any) -> Result<bool> {
        Self::downcast_operand(other).map(|other| self.is_subset(other))
    }

    /// Checked form of [`is_superset`](Self::is_superset).
    pub fn try_is_superset(&self, other: &dyn Any) -> Result<bool> {
        Self::downcast_operand(other).map(|other| self.is_superset(other))
    }

    /// Checked form of [`is_proper_subset`](Self::is_proper_subset).
    pub fn try_is_proper_subset(&self, other: &dyn Any) -> Result<bool> {
        Self::downcast_operand(other).map(|other| self.is_proper_subset(other))
    }

    /// Checked form of [`is_proper_superset`](Self::is_proper_superset).
    pub fn try_is_proper_superset(&self, other: &dyn Any) -> Result<bool> {
        Self::downcast_operand(other).map(|other| self.is_proper_superset(other))
    }

    /// Checked form of [`union`](Self::union).
    pub fn try_union(&self, other: &dyn Any) -> Result<Self> {
        Self::downcast_operand(other).map(|other| self.union(other))
    }

    /// Checked form of [`intersection`](Self::intersection).
    pub fn try_intersection(&self, other: &dyn Any) -> Result<Self> {
        Self::downcast_operand(other).map(|other| self.intersection(other))
    }

    /// Checked form of [`difference`](Self::difference).
    pub fn try_difference(&self, other: &dyn Any) -> Result<Self> {
        Self::downcast_operand(other).map(|other| self.difference(other))
    }

    /// Checked form of [`symmetric_difference`](Self::symmetric_difference).
    pub fn try_symmetric_difference(&self, other: &dyn Any) -> Result<Self> {
        Self::downcast_operand(other).map(|other| self.symmetric_difference(other))
    }
}
