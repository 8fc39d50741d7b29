//! Set algebra and set comparisons for [`OrderedSetMap`].
//!
//! Derived sets always follow the relative order of `self`. Only the
//! elements contributed by `other` (in `union` and
//! `symmetric_difference`) are appended in `other`'s order.

use crate::OrderedSetMap;
use core::cmp::Ordering;
use core::ops::{BitAnd, BitOr, BitOrAssign, BitXor, Sub};
use tracing::trace;

impl<T> OrderedSetMap<T>
where
    T: Ord + Clone,
{
    /// Appends every element of `other` not yet in `self`, in the order of
    /// `other`.
    ///
    /// Elements already in `self` keep their position and instance.
    pub fn update(&mut self, other: &Self) {
        let before = self.len();
        for value in other {
            if !self.contains(value) {
                self.insert_full(value.clone());
            }
        }
        trace!(appended = self.len() - before, len = self.len(), "updated ordered set");
    }

    /// Returns the elements of `self` followed by the elements of `other`
    /// not in `self`.
    pub fn union(&self, other: &Self) -> Self {
        let mut set = self.clone();
        set.update(other);
        set
    }

    /// Returns the elements of `self` that are also in `other`, in the order
    /// of `self`.
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter(|value| other.contains(*value))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` that are not in `other`, in the order
    /// of `self`.
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|value| !other.contains(*value))
            .cloned()
            .collect()
    }

    /// Returns the elements that are in exactly one of the two sets.
    ///
    /// Elements exclusive to `self` come first, in the order of `self`,
    /// followed by the elements exclusive to `other`, in the order of
    /// `other`.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut set = self.difference(other);
        set.extend(
            other
                .iter()
                .filter(|value| !self.contains(*value))
                .cloned(),
        );
        set
    }

    /// Intersects `self` with every set of `others`, left to right.
    pub fn intersection_all<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        others
            .into_iter()
            .fold(self.clone(), |set, other| set.intersection(other))
    }

    /// Subtracts every set of `others` from `self`, left to right.
    pub fn difference_all<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        others
            .into_iter()
            .fold(self.clone(), |set, other| set.difference(other))
    }

    /// Folds [`symmetric_difference`](Self::symmetric_difference) over
    /// `others`, left to right.
    pub fn symmetric_difference_all<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        others
            .into_iter()
            .fold(self.clone(), |set, other| set.symmetric_difference(other))
    }
}

impl<T> OrderedSetMap<T>
where
    T: Ord,
{
    /// Returns `true` if `self` has no elements in common with `other`.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        if self.len() <= other.len() {
            self.iter().all(move |value| !other.contains(value))
        } else {
            other.iter().all(move |value| !self.contains(value))
        }
    }

    /// Returns `true` if all elements of `self` are contained in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(move |value| other.contains(value))
    }

    /// Returns `true` if all elements of `other` are contained in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` with fewer elements.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` with more elements.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }
}

/// Two sets are equal if they contain the same elements, in any order.
impl<T> PartialEq for OrderedSetMap<T>
where
    T: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T> Eq for OrderedSetMap<T> where T: Ord {}

/// Orders sets by inclusion.
///
/// `a < b` holds if `a` is a proper subset of `b`. Sets where neither
/// includes the other are incomparable.
impl<T> PartialOrd for OrderedSetMap<T>
where
    T: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Less => self.is_subset(other).then_some(Ordering::Less),
            Ordering::Equal => self.is_subset(other).then_some(Ordering::Equal),
            Ordering::Greater => self.is_superset(other).then_some(Ordering::Greater),
        }
    }
}

impl<T> BitOr<&OrderedSetMap<T>> for &OrderedSetMap<T>
where
    T: Ord + Clone,
{
    type Output = OrderedSetMap<T>;

    /// Returns the set union, cloned into a new set.
    fn bitor(self, other: &OrderedSetMap<T>) -> Self::Output {
        self.union(other)
    }
}

impl<T> BitOrAssign<&OrderedSetMap<T>> for OrderedSetMap<T>
where
    T: Ord + Clone,
{
    fn bitor_assign(&mut self, other: &OrderedSetMap<T>) {
        self.update(other)
    }
}

impl<T> BitAnd<&OrderedSetMap<T>> for &OrderedSetMap<T>
where
    T: Ord + Clone,
{
    type Output = OrderedSetMap<T>;

    /// Returns the set intersection, cloned into a new set.
    fn bitand(self, other: &OrderedSetMap<T>) -> Self::Output {
        self.intersection(other)
    }
}

impl<T> BitXor<&OrderedSetMap<T>> for &OrderedSetMap<T>
where
    T: Ord + Clone,
{
    type Output = OrderedSetMap<T>;

    /// Returns the set symmetric-difference, cloned into a new set.
    fn bitxor(self, other: &OrderedSetMap<T>) -> Self::Output {
        self.symmetric_difference(other)
    }
}

impl<T> Sub<&OrderedSetMap<T>> for &OrderedSetMap<T>
where
    T: Ord + Clone,
{
    type Output = OrderedSetMap<T>;

    /// Returns the set difference, cloned into a new set.
    fn sub(self, other: &OrderedSetMap<T>) -> Self::Output {
        self.difference(other)
    }
}
