//! An ordered set based on a B-Tree that keeps insertion order of elements
//! and the canonical instance of every equality class.

use super::SlotIndex;
use crate::error::{Error, Result};
use alloc::collections::{btree_map, BTreeMap};
use alloc::vec::IntoIter as VecIntoIter;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;
use core::slice::Iter as SliceIter;
use tracing::trace;

/// A set that iterates its elements in insertion order.
///
/// Besides membership tests and set algebra the set supports positional
/// access and returns the *canonical* stored element for a queried value:
/// once an element is stored, inserting an equal but distinct value keeps
/// the stored instance.
///
/// Equality classes are determined by `T: Ord`. Elements are indexed in a
/// `BTreeMap` so that no hashing is required and the set works in
/// `no_std` environments.
///
/// # Iteration and mutation
///
/// Iterators borrow the set, so the set cannot be mutated while one is
/// alive. Iterate over a [`clone`](Clone::clone) to mutate while walking.
#[derive(Clone)]
pub struct OrderedSetMap<T> {
    /// A mapping from elements to the slot of their canonical instance.
    key2slot: BTreeMap<T, SlotIndex>,
    /// A vector holding all canonical instances in insertion order.
    slots: Vec<T>,
}

impl<T> Default for OrderedSetMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedSetMap<T> {
    /// Makes a new, empty `OrderedSetMap`.
    ///
    /// Does not allocate anything on its own.
    pub fn new() -> Self {
        Self {
            key2slot: BTreeMap::new(),
            slots: Vec::new(),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the element at `index` in iteration order, if any.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Returns the element at `index` in iteration order.
    ///
    /// # Errors
    ///
    /// If `index` is not within `[0, len)`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get_index(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Returns the first inserted element still in the set.
    pub fn first(&self) -> Option<&T> {
        self.slots.first()
    }

    /// Returns the last inserted element still in the set.
    pub fn last(&self) -> Option<&T> {
        self.slots.last()
    }

    /// Returns all elements as a slice in iteration order.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Gets an iterator that visits the elements in the [`OrderedSetMap`]
    /// in the order in which they have been inserted into the set.
    ///
    /// Removals do not disturb the relative order of the remaining
    /// elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.slots.iter(),
        }
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        trace!(len = self.slots.len(), "clearing ordered set");
        self.key2slot.clear();
        self.slots.clear();
    }
}

impl<T> OrderedSetMap<T>
where
    T: Ord,
{
    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.key2slot.contains_key(value)
    }

    /// Returns a reference to the canonical element in the set, if any,
    /// that is equal to the value.
    pub fn get<Q: ?Sized>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.key2slot
            .get(value)
            .map(|slot| &self.slots[slot.index()])
    }

    /// Returns the position of the element equal to the value in
    /// iteration order, if any.
    pub fn index_of<Q: ?Sized>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.key2slot.get(value).copied().map(SlotIndex::index)
    }

    /// Adds a value to the set and returns its position.
    ///
    /// The returned flag is `true` if the value was newly inserted.
    /// Otherwise the set is left untouched: the stored element keeps its
    /// position and the given value is dropped.
    pub fn insert_full(&mut self, value: T) -> (usize, bool)
    where
        T: Clone,
    {
        match self.key2slot.entry(value.clone()) {
            btree_map::Entry::Vacant(entry) => {
                let new_slot = self.slots.len();
                entry.insert(SlotIndex(new_slot));
                self.slots.push(value);
                (new_slot, true)
            }
            btree_map::Entry::Occupied(entry) => (entry.get().index(), false),
        }
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   the stored element is not updated.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Clone,
    {
        self.insert_full(value).1
    }

    /// Adds a value to the set and returns the canonical stored element.
    ///
    /// If an equal element is already stored, that element is returned
    /// instead of `value`, so repeated calls with equal values always yield
    /// the same instance.
    pub fn add(&mut self, value: T) -> &T
    where
        T: Clone,
    {
        let (index, _) = self.insert_full(value);
        &self.slots[index]
    }

    /// Removes the element equal to the value and returns its former
    /// position together with the canonical element.
    ///
    /// Elements after the removed one shift down by one position.
    pub fn remove_full<Q: ?Sized>(&mut self, value: &Q) -> Option<(usize, T)>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        let index = self.key2slot.remove(value)?.index();
        let removed = self.slots.remove(index);
        for slot in self.key2slot.values_mut() {
            if slot.index() > index {
                *slot = SlotIndex(slot.index() - 1);
            }
        }
        trace!(index, len = self.slots.len(), "removed element from ordered set");
        Some((index, removed))
    }

    /// Removes the element equal to the value and returns the canonical
    /// element, or `None` if the set did not contain it.
    ///
    /// Takes O(n) time: every element after the removed one shifts down and
    /// its index entry is rewritten. Lookups such as
    /// [`index_of`](Self::index_of) stay O(log n).
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.remove_full(value).map(|(_, removed)| removed)
    }
}

impl<T> Index<usize> for OrderedSetMap<T> {
    type Output = T;

    /// Returns the element at `index` in iteration order.
    ///
    /// Panics if `index` is out of bounds; see [`OrderedSetMap::at`] for the
    /// fallible access.
    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<'a, T> Extend<&'a T> for OrderedSetMap<T>
where
    T: Ord + Copy,
{
    #[allow(clippy::map_clone)] // lifetime issue: seems to be a clippy bug
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().map(|value| *value))
    }
}

impl<T> Extend<T> for OrderedSetMap<T>
where
    T: Ord + Clone,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().for_each(move |value| {
            self.insert(value);
        });
    }
}

impl<T> FromIterator<T> for OrderedSetMap<T>
where
    T: Ord + Clone,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = OrderedSetMap::new();
        set.extend(iter);
        set
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedSetMap<T>
where
    T: Ord + Clone,
{
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> fmt::Debug for OrderedSetMap<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OrderedSetMap").field(&self.slots).finish()
    }
}

/// Renders one element per line as `{index}.| {element:?}`.
///
/// Indices are zero-padded to the number of digits of the set's length.
impl<T> fmt::Display for OrderedSetMap<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = decimal_digits(self.len());
        for (index, value) in self.slots.iter().enumerate() {
            if index != 0 {
                f.write_str("\n")?;
            }
            write!(f, "{index:0width$}.| {value:?}")?;
        }
        Ok(())
    }
}

/// Returns the number of decimal digits needed to print `n`.
fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

impl<'a, T> IntoIterator for &'a OrderedSetMap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedSetMap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.slots.into_iter(),
        }
    }
}

/// An iterator over the items of an [`OrderedSetMap`].
///
/// This `struct` is created by the [`iter`] method on [`OrderedSetMap`].
///
/// [`iter`]: OrderedSetMap::iter
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    iter: SliceIter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn count(self) -> usize {
        self.iter.count()
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the items of an [`OrderedSetMap`].
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedSetMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
#[derive(Debug)]
pub struct IntoIter<T> {
    iter: VecIntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn count(self) -> usize {
        self.iter.count()
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
