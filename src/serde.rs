//! (De)serialization of [`OrderedSetMap`] as a sequence in iteration order.

use crate::OrderedSetMap;
use ::serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use ::serde::ser::{Serialize, Serializer};
use core::fmt;
use core::marker::PhantomData;

impl<T> Serialize for OrderedSetMap<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

struct OrderedSetMapVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for OrderedSetMapVisitor<T>
where
    T: Deserialize<'de> + Ord + Clone,
{
    type Value = OrderedSetMap<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    /// Duplicates collapse onto their first occurrence.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = OrderedSetMap::new();
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for OrderedSetMap<T>
where
    T: Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetMapVisitor(PhantomData))
    }
}
