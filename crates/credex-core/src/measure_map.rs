//! Case-insensitive, ordered maps keyed by measure, tenor or component name.
//!
//! Every name-keyed collection in Credex goes through [`CaseInsensitiveMap`]:
//! measure names (`"PV"`, `"DV01"`), tenor labels (`"5Y"`) and basket
//! component names. Keys compare on their lower-cased form, iteration follows
//! that normalized order, and the spelling of the first insertion is kept for
//! display and serialization.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

/// A flat map from measure name to value.
///
/// Produced fresh by each valuation call and never mutated once returned;
/// aggregation routines always build a new map.
pub type MeasureMap = CaseInsensitiveMap<f64>;

/// An ordered map with case-insensitive string keys.
#[derive(Clone, PartialEq)]
pub struct CaseInsensitiveMap<V> {
    // normalized key -> (key as first inserted, value)
    entries: BTreeMap<String, (String, V)>,
}

fn normalize(key: &str) -> String {
    key.to_lowercase()
}

impl<V> CaseInsensitiveMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a value, returning the previous value for the same key.
    ///
    /// Replacing an existing entry keeps its original key spelling.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.entry(normalize(&key)) {
            btree_map::Entry::Occupied(mut slot) => {
                Some(std::mem::replace(&mut slot.get_mut().1, value))
            }
            btree_map::Entry::Vacant(slot) => {
                slot.insert((key, value));
                None
            }
        }
    }

    /// Returns the value for `key`, ignoring case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&normalize(key)).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`, ignoring case.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(&normalize(key)).map(|(_, v)| v)
    }

    /// Returns true if `key` is present, ignoring case.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize(key))
    }

    /// Removes and returns the value for `key`, ignoring case.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(&normalize(key)).map(|(_, v)| v)
    }

    /// Returns the value for `key`, inserting `default()` first if absent.
    pub fn get_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        &mut self
            .entries
            .entry(normalize(key))
            .or_insert_with(|| (key.to_string(), default()))
            .1
    }

    /// Iterates over `(key, value)` pairs in normalized key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.values().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in normalized order, with their original spelling.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.values().map(|(k, _)| k.as_str())
    }

    /// Iterates over values in normalized key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.values().map(|(_, v)| v)
    }
}

impl CaseInsensitiveMap<f64> {
    /// Returns the value for `measure`, or 0.0 when it is absent.
    ///
    /// This is the bulk accessor used by all aggregation arithmetic; it never fails.
    #[must_use]
    pub fn value_or_zero(&self, measure: &str) -> f64 {
        self.get(measure).copied().unwrap_or(0.0)
    }

    /// Returns the value for a single named measure.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MeasureNotFound`] if the measure is absent.
    pub fn measure(&self, measure: &str) -> CoreResult<f64> {
        self.get(measure)
            .copied()
            .ok_or_else(|| CoreError::measure_not_found(measure))
    }

    /// Returns a new map with every value multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.iter().map(|(k, v)| (k, v * factor)).collect()
    }
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for CaseInsensitiveMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for CaseInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for CaseInsensitiveMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V> IntoIterator for CaseInsensitiveMap<V> {
    type Item = (String, V);
    type IntoIter = btree_map::IntoValues<String, (String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<V: Serialize> Serialize for CaseInsensitiveMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct CaseInsensitiveMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for CaseInsensitiveMapVisitor<V> {
    type Value = CaseInsensitiveMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = CaseInsensitiveMap::new();
        while let Some((k, v)) = access.next_entry::<String, V>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for CaseInsensitiveMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CaseInsensitiveMapVisitor(PhantomData))
    }
}
