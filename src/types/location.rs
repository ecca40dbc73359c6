//! Paths into nested collections.
//!
//! A [`Location`] is the sequence of indices and keys leading from the outermost
//! collection to the value a validation error is about. Element validators
//! report field-relative locations (`age`), and every collection write path
//! prefixes them with the element's own position (`3.age`).
//!
//! # Examples
//!
//! ```
//! use model_collections::{loc, Location};
//!
//! let field = loc!["age"];
//! let full = field.prefixed(&loc![3]);
//! assert_eq!(full.to_string(), "3.age");
//! ```
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::{self, Display};
use std::ops::Deref;

/// One step of a [`Location`]: a sequence index or a mapping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocItem {
    Index(usize),
    Key(String),
}

impl Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

impl From<usize> for LocItem {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for LocItem {
    #[inline]
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for LocItem {
    #[inline]
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<&String> for LocItem {
    #[inline]
    fn from(key: &String) -> Self {
        Self::Key(key.clone())
    }
}

/// Ordered path of [`LocItem`]s, outermost first.
///
/// Most locations are one or two items deep, so they live inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(SmallVec<[LocItem; 4]>);

impl Location {
    /// The empty location, pointing at the value itself.
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Appends a step to the end of the path.
    #[inline]
    pub fn push<I: Into<LocItem>>(&mut self, item: I) {
        self.0.push(item.into());
    }

    /// Returns `prefix` followed by this location.
    ///
    /// # Examples
    ///
    /// ```
    /// use model_collections::loc;
    ///
    /// let nested = loc!["name"].prefixed(&loc!["users", 2]);
    /// assert_eq!(nested, loc!["users", 2, "name"]);
    /// ```
    #[must_use]
    pub fn prefixed(&self, prefix: &Location) -> Self {
        let mut items = SmallVec::with_capacity(prefix.len() + self.len());
        items.extend(prefix.0.iter().cloned());
        items.extend(self.0.iter().cloned());
        Self(items)
    }

    /// The items of this location as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[LocItem] {
        &self.0
    }
}

impl Deref for Location {
    type Target = [LocItem];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            Display::fmt(item, f)?;
        }
        Ok(())
    }
}

impl From<LocItem> for Location {
    #[inline]
    fn from(item: LocItem) -> Self {
        let mut location = Self::new();
        location.0.push(item);
        location
    }
}

impl From<usize> for Location {
    #[inline]
    fn from(index: usize) -> Self {
        LocItem::Index(index).into()
    }
}

impl From<&str> for Location {
    #[inline]
    fn from(key: &str) -> Self {
        LocItem::from(key).into()
    }
}

impl<I: Into<LocItem>> FromIterator<I> for Location {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Location {
    type Item = &'a LocItem;
    type IntoIter = std::slice::Iter<'a, LocItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
