#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std as alloc;

#[cfg(not(feature = "std"))]
extern crate alloc;

mod any;
mod deep_clone;
mod error;
mod ops;
#[cfg(feature = "serde")]
mod serde;
pub mod set;

pub use self::deep_clone::DeepClone;
pub use self::error::{Error, Result};
pub use self::set::OrderedSetMap;

/// A slot index referencing an element stored in an [`OrderedSetMap`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SlotIndex(usize);

impl SlotIndex {
    /// Returns the raw `usize` index of the [`SlotIndex`].
    pub fn index(self) -> usize {
        self.0
    }
}
