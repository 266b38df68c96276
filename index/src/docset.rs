use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use crate::index::DocId;

/// Set of document ids for one word.
///
/// Persists as a `{ "<id>": true, ... }` JSON object; ids are written in
/// sorted order so the same index always serializes to the same bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocSet(HashSet<DocId>);

impl DocSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id`, returning false if it was already present.
    pub fn insert(&mut self, id: DocId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DocId> for DocSet {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for DocSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut ids: Vec<DocId> = self.0.iter().copied().collect();
        ids.sort_unstable();
        let mut map = serializer.serialize_map(Some(ids.len()))?;
        for id in ids {
            map.serialize_entry(&id, &true)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DocSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocSetVisitor;

        impl<'de> Visitor<'de> for DocSetVisitor {
            type Value = DocSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from document id to boolean")
            }

            fn visit_map<A>(self, mut access: A) -> Result<DocSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = DocSet::new();
                while let Some((id, present)) = access.next_entry::<DocId, bool>()? {
                    if present {
                        set.insert(id);
                    }
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(DocSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = DocSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 1);
        assert!(set.contains(3));
        assert!(!set.contains(4));
    }

    #[test]
    fn serializes_as_id_to_true_map() {
        let set: DocSet = [2, 0].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"0":true,"2":true}"#);
    }

    #[test]
    fn deserializes_string_and_skips_false_entries() {
        let set: DocSet = serde_json::from_str(r#"{"0":true,"5":false,"7":true}"#).unwrap();
        let expected: DocSet = [0, 7].into_iter().collect();
        assert_eq!(set, expected);
    }
}
