//! A sequence bound to a persistence backend.

use crate::collection::sequence::Sequence;
use crate::error::{CollectionError, PersistError};
use crate::traits::{Backend, Model};
use serde_json::Value;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// How a [`PersistentSequence`] derives the backend key of an element.
#[derive(Clone)]
pub enum KeySource<T> {
    /// A field of the element's encoded form.
    Field(String),
    /// A function of the element.
    Func(Arc<dyn Fn(&T) -> String + Send + Sync>),
}

impl<T: Model> KeySource<T> {
    pub fn field<N: Into<String>>(name: N) -> Self {
        Self::Field(name.into())
    }

    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// Derives the key of `element`.
    ///
    /// String fields are used as they are; other scalar fields use their JSON
    /// text. A missing or null field is a [`CollectionError::KeyNotFound`].
    pub fn key_of(&self, element: &T) -> Result<String, CollectionError> {
        let name = match self {
            Self::Func(f) => return Ok(f(element)),
            Self::Field(name) => name,
        };
        let encoded = serde_json::to_value(element).map_err(CollectionError::Encode)?;
        match encoded.get(name) {
            Some(Value::String(key)) => Ok(key.clone()),
            Some(Value::Null) | None => Err(CollectionError::KeyNotFound(name.clone())),
            Some(other) => Ok(other.to_string()),
        }
    }
}

impl<T> fmt::Debug for KeySource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// A [`Sequence`] holding a backend reference and a key derivation.
///
/// Every sequence operation is available through `Deref`/`DerefMut` and
/// never touches the backend. The backend only sees what the caller
/// explicitly forwards: [`stage_all`](Self::stage_all) and
/// [`commit`](Self::commit). Loading and overwrite semantics belong to the
/// backend; `overwrite` is only carried along.
///
/// # Examples
///
/// ```
/// use model_collections::backend::MemoryBackend;
/// use model_collections::{KeySource, Model, PersistentSequence, Sequence};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// impl Model for User {}
///
/// let mut users = PersistentSequence::new(
///     Sequence::<User>::new(),
///     MemoryBackend::new(),
///     KeySource::func(|user: &User| user.name.clone()),
/// );
/// users.append(User { name: "A".into(), age: 1 }).unwrap();
/// users.commit().unwrap();
///
/// assert_eq!(users.backend().commits(), 1);
/// assert_eq!(users.backend().adds(), 0);
/// ```
pub struct PersistentSequence<T, B> {
    sequence: Sequence<T>,
    backend: B,
    key: KeySource<T>,
    overwrite: bool,
}

impl<T, B> PersistentSequence<T, B>
where
    T: Model,
    B: Backend<String, T>,
{
    pub fn new(sequence: Sequence<T>, backend: B, key: KeySource<T>) -> Self {
        Self {
            sequence,
            backend,
            key,
            overwrite: false,
        }
    }

    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[inline]
    pub fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    #[inline]
    pub fn key_source(&self) -> &KeySource<T> {
        &self.key
    }

    /// Backend key of `element`.
    #[inline]
    pub fn key_of(&self, element: &T) -> Result<String, CollectionError> {
        self.key.key_of(element)
    }

    /// Adds every element to the backend under its key, returning how many were staged.
    ///
    /// Keys are all derived before the first `add`, so a key failure stages nothing.
    pub fn stage_all(&mut self) -> Result<usize, PersistError<B::Error>> {
        let keyed = self
            .sequence
            .iter()
            .map(|element| Ok((self.key.key_of(element)?, element.clone())))
            .collect::<Result<Vec<_>, CollectionError>>()?;
        let staged = keyed.len();
        for (key, element) in keyed {
            self.backend
                .add(key, element)
                .map_err(PersistError::Backend)?;
        }
        tracing::debug!(collection = %self.sequence.class().name(), staged, "staged elements");
        Ok(staged)
    }

    /// Forwards one commit to the backend.
    pub fn commit(&mut self) -> Result<(), PersistError<B::Error>> {
        tracing::info!(
            collection = %self.sequence.class().name(),
            elements = self.sequence.len(),
            overwrite = self.overwrite,
            "committing to backend"
        );
        self.backend.commit().map_err(PersistError::Backend)
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn sequence(&self) -> &Sequence<T> {
        &self.sequence
    }

    pub fn into_parts(self) -> (Sequence<T>, B) {
        (self.sequence, self.backend)
    }
}

impl<T, B> Deref for PersistentSequence<T, B> {
    type Target = Sequence<T>;

    #[inline]
    fn deref(&self) -> &Sequence<T> {
        &self.sequence
    }
}

impl<T, B> DerefMut for PersistentSequence<T, B> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Sequence<T> {
        &mut self.sequence
    }
}

impl<T: Model, B: fmt::Debug> fmt::Debug for PersistentSequence<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentSequence")
            .field("sequence", &self.sequence)
            .field("backend", &self.backend)
            .field("key", &self.key)
            .field("overwrite", &self.overwrite)
            .finish()
    }
}
