//! Ordered collection of validated elements.

use crate::collection::base::{CollectionClass, CollectionKind};
use crate::collection::slice::Slice;
use crate::convert::encode_json;
use crate::error::{CollectionError, Result};
use crate::loc;
use crate::specialize::specialize;
use crate::traits::{Input, Model};
use crate::types::{kind, ErrorDetails};
use crate::validation::Validation;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::Arc;

const LIST_TYPE_MSG: &str = "Input should be a valid list";

/// Arguments for [`Sequence::construct`].
///
/// Either positional data (optionally after an existing sequence) or named
/// data may be given, never both. The only recognised named entry is `root`,
/// holding the whole list.
///
/// # Examples
///
/// ```
/// # use model_collections::{Input, Model};
/// # use serde::{Deserialize, Serialize};
/// # #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// # struct User { name: String }
/// # impl Model for User {}
/// use model_collections::{Sequence, SequenceArgs};
///
/// let args = SequenceArgs::<User>::new()
///     .existing([User { name: "A".into() }])
///     .positional([User { name: "B".into() }]);
/// let users = Sequence::construct(Sequence::default_class(), args).unwrap();
///
/// assert_eq!(users[1].name, "B");
/// ```
#[derive(Debug, Clone)]
pub struct SequenceArgs<T> {
    positional: Vec<Input<T>>,
    existing: Option<Vec<Input<T>>>,
    named: Map<String, Value>,
}

impl<T> Default for SequenceArgs<T> {
    fn default() -> Self {
        Self {
            positional: Vec::new(),
            existing: None,
            named: Map::new(),
        }
    }
}

impl<T: Model> SequenceArgs<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends positional elements.
    #[must_use]
    pub fn positional<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Input<T>>,
    {
        self.positional.extend(values.into_iter().map(Into::into));
        self
    }

    /// Sets the existing sequence the positional elements follow.
    #[must_use]
    pub fn existing<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Input<T>>,
    {
        self.existing = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Adds one named entry.
    #[must_use]
    pub fn named<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.named.insert(key.into(), value);
        self
    }

    fn has_positional(&self) -> bool {
        !self.positional.is_empty() || self.existing.is_some()
    }
}

/// A list of elements that all passed validation for the sequence's class.
///
/// Every write goes through [`CollectionClass::validate_element`] with the
/// element's index as location. Reads, slicing and reordering never
/// revalidate. A failing write leaves the sequence unchanged.
///
/// # Examples
///
/// ```
/// use model_collections::{CollectionConfig, Input, Model, Sequence};
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
/// let mut users = Sequence::<User>::new();
/// users.append(User { name: "A".into(), age: 1 }).unwrap();
///
/// // Plain objects are not `User` instances under the default strict policy.
/// let err = users.append(Input::raw(json!({"name": "B", "age": 2}))).unwrap_err();
/// assert!(err.is_type_error());
///
/// // A lax class coerces them.
/// let weak = Sequence::<User>::default_class().subclass("WeakUsers", CollectionConfig::lax());
/// let mut weak_users = Sequence::with_class(weak);
/// weak_users.append(Input::raw(json!({"name": "B", "age": 2}))).unwrap();
/// assert_eq!(weak_users[0].age, 2);
/// ```
#[derive(Clone)]
pub struct Sequence<T> {
    class: Arc<CollectionClass<T>>,
    root: Vec<T>,
}

impl<T: Model> Sequence<T> {
    /// Empty sequence of the default class for `T`.
    pub fn new() -> Self {
        Self::with_class(Self::default_class())
    }

    /// The cached `Sequence[T]` class.
    pub fn default_class() -> Arc<CollectionClass<T>> {
        specialize::<T>(CollectionKind::Sequence)
    }

    /// Empty sequence of `class`.
    pub fn with_class(class: Arc<CollectionClass<T>>) -> Self {
        Self {
            class,
            root: Vec::new(),
        }
    }

    /// Builds a sequence of `class` from `args`.
    ///
    /// Positional data is the existing sequence followed by the positional
    /// elements, each validated under the class policy at its final index.
    /// Named data is decoded in bulk. All element failures are reported
    /// together.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::ConstructionConflict`] if both kinds of data are given
    /// - [`CollectionError::ElementType`] / [`CollectionError::ElementValidation`]
    ///   for rejected elements or unknown named entries
    pub fn construct(class: Arc<CollectionClass<T>>, args: SequenceArgs<T>) -> Result<Self> {
        if args.has_positional() && !args.named.is_empty() {
            return Err(CollectionError::ConstructionConflict);
        }
        if !args.named.is_empty() {
            let root = Self::decode_named(&class, args.named)?;
            return Ok(Self { class, root });
        }

        let values = args.existing.into_iter().flatten().chain(args.positional);
        let located = values
            .enumerate()
            .map(|(index, value)| (loc![index], value));
        let root = class.validate_all(located)?;
        Ok(Self { class, root })
    }

    fn decode_named(class: &CollectionClass<T>, named: Map<String, Value>) -> Result<Vec<T>> {
        let mut root = None;
        let mut outcomes = Vec::new();
        for (key, value) in named {
            if key == "root" {
                root = Some(value);
                continue;
            }
            let error = ErrorDetails::new(kind::EXTRA_FORBIDDEN, "Extra inputs are not permitted")
                .at(loc![key])
                .with_input(value);
            outcomes.push(Validation::invalid(error));
        }
        match root {
            Some(Value::Array(items)) => outcomes.extend(Self::decode_items(class, items)),
            Some(other) => {
                let error = ErrorDetails::new(kind::LIST_TYPE, LIST_TYPE_MSG)
                    .at(loc!["root"])
                    .with_input(other);
                outcomes.push(Validation::invalid(error));
            }
            None => {}
        }
        class.finish_bulk(outcomes)
    }

    fn decode_items(
        class: &CollectionClass<T>,
        items: Vec<Value>,
    ) -> impl Iterator<Item = Validation<T>> + '_ {
        items
            .into_iter()
            .enumerate()
            .map(move |(index, item)| {
                class.validate_raw(Input::Raw(item), &loc![index])
            })
    }

    /// Wraps already-validated elements without checking them.
    #[inline]
    pub fn construct_unchecked(class: Arc<CollectionClass<T>>, root: Vec<T>) -> Self {
        Self { class, root }
    }

    /// Decodes a JSON array into a sequence of `class`.
    ///
    /// Elements go through lax validation regardless of the class policy;
    /// every failing element is reported.
    pub fn validate_value(class: Arc<CollectionClass<T>>, value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(class.shape_error(kind::LIST_TYPE, LIST_TYPE_MSG, other)),
        };
        let root = class.finish_bulk(Self::decode_items(&class, items))?;
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
        self.root.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.root.len();
        self.root
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    /// A new sequence of the same class holding the selected elements.
    ///
    /// Out-of-range bounds are clamped.
    pub fn slice<S: Into<Slice>>(&self, slice: S) -> Self {
        let root = slice
            .into()
            .indices(self.root.len())
            .map(|index| self.root[index].clone())
            .collect();
        Self {
            class: Arc::clone(&self.class),
            root,
        }
    }

    /// Replaces the element at `index` after validating `value` there.
    pub fn set<V: Into<Input<T>>>(&mut self, index: usize, value: V) -> Result<()> {
        let len = self.root.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        self.root[index] = self.class.validate_element(value.into(), &loc![index])?;
        Ok(())
    }

    /// Replaces every element selected by `slice`, one value per index.
    ///
    /// Start defaults to 0, stop to the current length and step to 1;
    /// explicit bounds are not clamped. Each value is validated at the index
    /// it replaces, and nothing is written unless all of them pass.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Arity`] if the value count differs from the slice length
    /// - [`CollectionError::IndexOutOfRange`] if the slice reaches past the end
    /// - validation errors for rejected values
    pub fn set_slice<S, I, V>(&mut self, slice: S, values: I) -> Result<()>
    where
        S: Into<Slice>,
        I: IntoIterator<Item = V>,
        V: Into<Input<T>>,
    {
        let len = self.root.len();
        let slice = slice.into();
        let expected = slice.assignment_len(len);
        let values: Vec<Input<T>> = values.into_iter().map(Into::into).collect();
        if expected != values.len() {
            tracing::debug!(
                collection = %self.class.name(),
                expected,
                provided = values.len(),
                "slice assignment arity mismatch"
            );
            return Err(CollectionError::Arity {
                expected,
                provided: values.len(),
            });
        }
        if let Some(index) = slice.first_out_of_range(len) {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }

        let indices: Vec<usize> = slice.assignment_indices(len).collect();
        let located = indices.iter().map(|&index| loc![index]).zip(values);
        let staged = self.class.validate_all(located)?;
        for (index, model) in indices.into_iter().zip(staged) {
            self.root[index] = model;
        }
        Ok(())
    }

    /// Removes the element at `index`.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.pop(Some(index)).map(drop)
    }

    /// Removes every element selected by `slice`, returning how many were removed.
    pub fn delete_slice<S: Into<Slice>>(&mut self, slice: S) -> usize {
        let mut doomed = vec![false; self.root.len()];
        let mut removed = 0;
        for index in slice.into().indices(self.root.len()) {
            doomed[index] = true;
            removed += 1;
        }
        let mut position = 0;
        self.root.retain(|_| {
            let keep = !doomed[position];
            position += 1;
            keep
        });
        removed
    }

    /// Inserts `value` before `index`, shifting later elements.
    ///
    /// An index past the end appends. Shifted elements are not revalidated.
    pub fn insert<V: Into<Input<T>>>(&mut self, index: usize, value: V) -> Result<()> {
        let index = index.min(self.root.len());
        let model = self.class.validate_element(value.into(), &loc![index])?;
        self.root.insert(index, model);
        Ok(())
    }

    /// Validates `value` and appends it.
    ///
    /// Errors are located at the index the element would occupy, which is the
    /// length before the append.
    pub fn append<V: Into<Input<T>>>(&mut self, value: V) -> Result<()> {
        let index = self.root.len();
        let model = self.class.validate_element(value.into(), &loc![index])?;
        self.root.push(model);
        Ok(())
    }

    /// Appends every value, or none of them if any is rejected.
    pub fn extend<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Input<T>>,
    {
        let start = self.root.len();
        let located = values
            .into_iter()
            .enumerate()
            .map(|(offset, value)| (loc![start + offset], value.into()));
        let staged = self.class.validate_all(located)?;
        self.root.extend(staged);
        Ok(())
    }

    /// Removes and returns the element at `index`, or the last one.
    pub fn pop(&mut self, index: Option<usize>) -> Result<T> {
        let len = self.root.len();
        let index = match index {
            Some(index) => index,
            None => len
                .checked_sub(1)
                .ok_or(CollectionError::IndexOutOfRange { index: 0, len })?,
        };
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(self.root.remove(index))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.root.clear();
    }

    #[inline]
    pub fn reverse(&mut self) {
        self.root.reverse();
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    /// Index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.root.iter().position(|item| item == value)
    }

    /// Stable sort by `key`; with `reverse`, descending order that keeps
    /// equal elements in their original order.
    pub fn sort_by_key<K, F>(&mut self, mut key: F, reverse: bool)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        if reverse {
            self.root.sort_by(|a, b| key(b).cmp(&key(a)));
        } else {
            self.root.sort_by_key(key);
        }
    }

    /// Stable sort with a comparator.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.root.sort_by(compare);
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.root.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.root
    }

    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.root
    }

    /// Encodes the elements as a JSON array.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(&self.root).map_err(CollectionError::Encode)
    }

    /// Encodes the elements as JSON text, indented when `indent` is given.
    pub fn to_json(&self, indent: Option<usize>) -> Result<String> {
        encode_json(&self.root, indent).map_err(CollectionError::Encode)
    }
}

impl<T: Model> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Model> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T: Model + Eq> Eq for Sequence<T> {}

impl<T: Model + Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
    }
}

impl<T: Model> Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.root[index]
    }
}

impl<'a, T: Model> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.root.iter()
    }
}

impl<T: Model> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.root.into_iter()
    }
}

impl<T: Model> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(self.class.name()).field(&self.root).finish()
    }
}

impl<T: Model> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = serde_json::to_string(&self.root).map_err(|_| fmt::Error)?;
        write!(f, "{}({body})", self.class.name())
    }
}

impl<T: Model> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de, T: Model> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::validate_value(Self::default_class(), value).map_err(D::Error::custom)
    }
}
