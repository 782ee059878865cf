use crate::{new::DEFAULT_INITIAL_CAPACITY, ConcurrentGrowableArray, ConcurrentOrderedSet};
use core::{
    fmt::Formatter,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};
use serde::{de::Visitor, ser::SerializeSeq, Deserialize, Serialize};

impl<T: Serialize> Serialize for ConcurrentGrowableArray<T> {
    /// Serializes the committed elements of the array as a sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use orx_concurrent_collections::*;
    ///
    /// let empty = ConcurrentGrowableArray::<String>::new();
    /// let json = serde_json::to_string(&empty).unwrap();
    /// assert_eq!(json, "[]");
    ///
    /// let array = ConcurrentGrowableArray::new();
    /// for i in 0..7 {
    ///     array.append(i.to_string());
    /// }
    /// let json = serde_json::to_string(&array).unwrap();
    /// assert_eq!(json, "[\"0\",\"1\",\"2\",\"3\",\"4\",\"5\",\"6\"]");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let cells = self.cells.read();
        let end = cells.len().min(self.len());
        let committed = cells[..end].iter().take_while(|x| x.is_committed());

        let mut seq = serializer.serialize_seq(None)?;
        for cell in committed {
            if let Some(result) = cell.map(|x| seq.serialize_element(x)) {
                result?;
            }
        }
        seq.end()
    }
}

struct ArrayVisitor<T> {
    phantom: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ArrayVisitor<T> {
    type Value = ConcurrentGrowableArray<T>;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        formatter.write_str("Expecting the sequence of elements.")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(x) = seq.next_element::<T>()? {
            values.push(x);
        }
        Ok(ConcurrentGrowableArray::from_values(
            values,
            DEFAULT_INITIAL_CAPACITY,
        ))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ConcurrentGrowableArray<T> {
    /// Deserializes a sequence as a concurrent array.
    ///
    /// # Examples
    ///
    /// ```
    /// use orx_concurrent_collections::*;
    ///
    /// let json = "[0, 1, 2, 3, 4, 5, 6]";
    /// let result: Result<ConcurrentGrowableArray<u64>, _> = serde_json::from_str(json);
    /// assert!(result.is_ok());
    /// let array = result.unwrap();
    /// assert_eq!(array, [0, 1, 2, 3, 4, 5, 6]);
    /// ```
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ArrayVisitor {
            phantom: PhantomData,
        })
    }
}

impl<E: Serialize, S> Serialize for ConcurrentOrderedSet<E, S> {
    /// Serializes the present elements of the set as a sequence in their insertion order.
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        let records = self.records();

        let mut seq = serializer.serialize_seq(None)?;
        for record in records.iter().filter(|x| x.is_live()) {
            seq.serialize_element(record.element())?;
        }
        seq.end()
    }
}

struct SetVisitor<E, S> {
    phantom: PhantomData<(E, S)>,
}

impl<'de, E, S> Visitor<'de> for SetVisitor<E, S>
where
    E: Deserialize<'de> + Hash + Eq + Send + Sync + 'static,
    S: BuildHasher + Default,
{
    type Value = ConcurrentOrderedSet<E, S>;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        formatter.write_str("Expecting the sequence of elements.")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let set = ConcurrentOrderedSet::with_capacity_and_hasher(
            seq.size_hint().unwrap_or(0),
            S::default(),
        );
        while let Some(x) = seq.next_element::<E>()? {
            set.add(x);
        }
        Ok(set)
    }
}

impl<'de, E, S> Deserialize<'de> for ConcurrentOrderedSet<E, S>
where
    E: Deserialize<'de> + Hash + Eq + Send + Sync + 'static,
    S: BuildHasher + Default,
{
    /// Deserializes a sequence as an ordered set; duplicates keep their first position.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            phantom: PhantomData,
        })
    }
}
