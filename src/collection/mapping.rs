//! String-keyed collection of validated elements.

use crate::collection::base::{CollectionClass, CollectionKind};
use crate::convert::encode_json;
use crate::error::{CollectionError, Result};
use crate::loc;
use crate::specialize::specialize;
use crate::traits::{Input, Model};
use crate::types::kind;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

const DICT_TYPE_MSG: &str = "Input should be a valid dictionary";

/// Insertion-ordered entries with a key index.
///
/// Overwriting a key keeps its slot; removing one shifts later entries down.
#[derive(Debug, Clone)]
struct Entries<T> {
    slots: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Entries<T> {
    fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&slot| &self.slots[slot].1)
    }

    fn insert(&mut self, key: String, value: T) {
        match self.index.get(&key) {
            Some(&slot) => self.slots[slot].1 = value,
            None => {
                self.index.insert(key.clone(), self.slots.len());
                self.slots.push((key, value));
            }
        }
    }

    fn remove(&mut self, key: &str) -> Option<T> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.slots.remove(slot);
        for (moved, _) in &self.slots[slot..] {
            if let Some(position) = self.index.get_mut(moved) {
                *position -= 1;
            }
        }
        Some(value)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> FromIterator<(String, T)> for Entries<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut entries = Self::default();
        for (key, value) in iter {
            entries.insert(key, value);
        }
        entries
    }
}

/// A string-keyed map of elements that all passed validation for the map's class.
///
/// [`set`](Mapping::set) validates at the key's location; iteration follows
/// insertion order. Equality ignores order.
///
/// # Examples
///
/// ```
/// use model_collections::{CollectionError, Input, Mapping, Model};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// impl Model for User {}
///
/// let mut users = Mapping::<User>::new();
/// users.set("u1", User { name: "A".into(), age: 1 }).unwrap();
///
/// assert!(matches!(users.get("missing"), Err(CollectionError::KeyNotFound(_))));
///
/// let err = users.set("u1", Input::raw(json!({"name": "A", "age": 1}))).unwrap_err();
/// assert!(err.is_type_error());
/// ```
#[derive(Clone)]
pub struct Mapping<T> {
    class: Arc<CollectionClass<T>>,
    root: Entries<T>,
}

impl<T: Model> Mapping<T> {
    pub fn new() -> Self {
        Self::with_class(Self::default_class())
    }

    /// The cached `Mapping[T]` class.
    pub fn default_class() -> Arc<CollectionClass<T>> {
        specialize::<T>(CollectionKind::Mapping)
    }

    pub fn with_class(class: Arc<CollectionClass<T>>) -> Self {
        Self {
            class,
            root: Entries::default(),
        }
    }

    /// Builds a mapping from `existing` entries overridden by `named` ones.
    ///
    /// The merged entries are decoded like external input: lax validation
    /// per entry, located at the key, all failures reported together. A key
    /// present in both keeps its position from `existing`.
    pub fn construct<E, N>(class: Arc<CollectionClass<T>>, existing: E, named: N) -> Result<Self>
    where
        E: IntoIterator<Item = (String, Input<T>)>,
        N: IntoIterator<Item = (String, Input<T>)>,
    {
        let merged: Entries<Input<T>> = existing.into_iter().chain(named).collect();
        let outcomes = merged.slots.into_iter().map(|(key, value)| {
            class
                .validate_raw(value, &loc![&key])
                .map(|model| (key, model))
        });
        let root = class.finish_bulk(outcomes)?;
        Ok(Self { class, root })
    }

    /// Wraps already-validated entries without checking them.
    pub fn construct_unchecked<I>(class: Arc<CollectionClass<T>>, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, T)>,
    {
        Self {
            class,
            root: entries.into_iter().collect(),
        }
    }

    /// Decodes a JSON object into a mapping of `class`.
    pub fn validate_value(class: Arc<CollectionClass<T>>, value: Value) -> Result<Self> {
        let object = match value {
            Value::Object(object) => object,
            other => return Err(class.shape_error(kind::DICT_TYPE, DICT_TYPE_MSG, other)),
        };
        let outcomes = object.into_iter().map(|(key, item)| {
            class
                .validate_raw(Input::Raw(item), &loc![&key])
                .map(|model| (key, model))
        });
        let root = class.finish_bulk(outcomes)?;
        Ok(Self { class, root })
    }

    /// Parses JSON text, then behaves like [`validate_value`](Self::validate_value).
    pub fn validate_json(class: Arc<CollectionClass<T>>, json: &str) -> Result<Self> {
        let value = serde_json::from_str(json).map_err(CollectionError::Json)?;
        Self::validate_value(class, value)
    }

    #[inline]
    pub fn class(&self) -> &Arc<CollectionClass<T>> {
        &self.class
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.len() == 0
    }

    pub fn get(&self, key: &str) -> Result<&T> {
        self.root
            .get(key)
            .ok_or_else(|| CollectionError::KeyNotFound(key.to_owned()))
    }

    /// Validates `value` at `key` and stores it, adding the key if new.
    pub fn set<K, V>(&mut self, key: K, value: V) -> Result<()>
    where
        K: Into<String>,
        V: Into<Input<T>>,
    {
        let key = key.into();
        let model = self.class.validate_element(value.into(), &loc![&key])?;
        self.root.insert(key, model);
        Ok(())
    }

    /// Removes `key`, returning its element.
    pub fn delete(&mut self, key: &str) -> Result<T> {
        self.root
            .remove(key)
            .ok_or_else(|| CollectionError::KeyNotFound(key.to_owned()))
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.root.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.root.slots.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.root.slots.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.root
            .slots
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Sets every entry, or none of them if any is rejected.
    pub fn update<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Input<T>>,
    {
        let (keys, values): (Vec<String>, Vec<Input<T>>) = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .unzip();
        let located = keys.iter().map(|key| loc![key]).zip(values);
        let staged = self.class.validate_all(located)?;
        for (key, model) in keys.into_iter().zip(staged) {
            self.root.insert(key, model);
        }
        Ok(())
    }

    /// Encodes the entries as a JSON object.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(CollectionError::Encode)
    }

    /// Encodes the entries as JSON text, indented when `indent` is given.
    pub fn to_json(&self, indent: Option<usize>) -> Result<String> {
        encode_json(self, indent).map_err(CollectionError::Encode)
    }
}

impl<T: Model> Default for Mapping<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Model> PartialEq for Mapping<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.root.get(key) == Some(value))
    }
}

impl<T: Model + Eq> Eq for Mapping<T> {}

impl<T: Model> Index<&str> for Mapping<T> {
    type Output = T;

    fn index(&self, key: &str) -> &T {
        match self.root.get(key) {
            Some(value) => value,
            None => panic!("key not found: {key:?}"),
        }
    }
}

impl<T: Model> fmt::Debug for Mapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Body<'a, T>(&'a Mapping<T>);

        impl<T: Model> fmt::Debug for Body<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.0.iter()).finish()
            }
        }

        f.debug_tuple(self.class.name()).field(&Body(self)).finish()
    }
}

impl<T: Model> fmt::Display for Mapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}({body})", self.class.name())
    }
}

impl<T: Model> Serialize for Mapping<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, T: Model> Deserialize<'de> for Mapping<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::validate_value(Self::default_class(), value).map_err(D::Error::custom)
    }
}
