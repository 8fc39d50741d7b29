//! Deep copies of sets whose elements are shared handles.

use crate::OrderedSetMap;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
#[cfg(target_has_atomic = "ptr")]
use alloc::sync::Arc;
use alloc::vec::Vec;

/// Types that can produce a copy sharing no allocation with `self`.
///
/// For plain values this is the same as [`Clone`]. Shared handles such as
/// [`Rc`] and [`Arc`] allocate a fresh value instead of bumping the
/// reference count.
pub trait DeepClone {
    /// Returns a copy of `self` that shares nothing with it.
    fn deep_clone(&self) -> Self;
}

macro_rules! impl_deep_clone_by_clone {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl DeepClone for $ty {
                fn deep_clone(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

impl_deep_clone_by_clone!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    &'static str,
    String,
);

impl<T: DeepClone> DeepClone for Box<T> {
    fn deep_clone(&self) -> Self {
        Box::new((**self).deep_clone())
    }
}

impl<T: DeepClone> DeepClone for Rc<T> {
    fn deep_clone(&self) -> Self {
        Rc::new((**self).deep_clone())
    }
}

#[cfg(target_has_atomic = "ptr")]
impl<T: DeepClone> DeepClone for Arc<T> {
    fn deep_clone(&self) -> Self {
        Arc::new((**self).deep_clone())
    }
}

impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone(&self) -> Self {
        self.as_ref().map(DeepClone::deep_clone)
    }
}

impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone(&self) -> Self {
        self.iter().map(DeepClone::deep_clone).collect()
    }
}

impl<A: DeepClone, B: DeepClone> DeepClone for (A, B) {
    fn deep_clone(&self) -> Self {
        (self.0.deep_clone(), self.1.deep_clone())
    }
}

impl<T> DeepClone for OrderedSetMap<T>
where
    T: DeepClone + Ord + Clone,
{
    fn deep_clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T> OrderedSetMap<T>
where
    T: DeepClone + Ord + Clone,
{
    /// Returns a copy of the set in which every element is deep-copied.
    ///
    /// The order of the elements is preserved. Use [`Clone`] for a copy
    /// that shares the elements' handles.
    pub fn deep_copy(&self) -> Self {
        self.iter().map(DeepClone::deep_clone).collect()
    }
}
