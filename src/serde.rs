
use crate::SeqList;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for SeqList<T> {
    /// Serializes the list as a plain sequence of its values, front to back.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SeqList<T> {
    /// Deserializes a sequence of values into a list, preserving order.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        let values: Vec<T> = Vec::deserialize(deserializer)?;

        Ok(values.into_iter().collect())
    }
}
