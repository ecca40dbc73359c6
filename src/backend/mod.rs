//! Ready-made [`Backend`] implementations.
//!
//! - [`NullBackend`] discards everything.
//! - [`MemoryBackend`] keeps a committed map in memory and counts calls,
//!   which makes it handy for checking what a [`PersistentSequence`] forwards.
//!
//! [`PersistentSequence`]: crate::PersistentSequence

use crate::traits::Backend;
use std::collections::HashMap;
use std::convert::Infallible;

/// A backend that stores nothing and always loads empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullBackend;

impl<K, V> Backend<K, V> for NullBackend {
    type Error = Infallible;

    fn add(&mut self, _key: K, _value: V) -> Result<(), Infallible> {
        Ok(())
    }

    fn load(&self) -> Result<HashMap<K, V>, Infallible> {
        Ok(HashMap::new())
    }

    fn delete(&mut self, _key: &K) -> Result<(), Infallible> {
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Change<V> {
    Put(String, V),
    Remove(String),
}

/// An in-memory backend with staged writes.
///
/// `add` and `delete` are staged in call order and only become visible to
/// `load` once `commit` applies them.
///
/// # Examples
///
/// ```
/// use model_collections::backend::MemoryBackend;
/// use model_collections::Backend;
///
/// let mut backend = MemoryBackend::new();
/// backend.add("a".to_owned(), 1).unwrap();
/// assert!(backend.load().unwrap().is_empty());
///
/// backend.commit().unwrap();
/// assert_eq!(backend.load().unwrap()["a"], 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryBackend<V> {
    committed: HashMap<String, V>,
    staged: Vec<Change<V>>,
    commits: usize,
    adds: usize,
}

impl<V> Default for MemoryBackend<V> {
    fn default() -> Self {
        Self {
            committed: HashMap::new(),
            staged: Vec::new(),
            commits: 0,
            adds: 0,
        }
    }
}

impl<V> MemoryBackend<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `commit` calls so far.
    #[inline]
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Number of `add` calls so far.
    #[inline]
    pub fn adds(&self) -> usize {
        self.adds
    }

    /// Number of changes waiting for the next commit.
    #[inline]
    pub fn pending(&self) -> usize {
        self.staged.len()
    }
}

impl<V: Clone> Backend<String, V> for MemoryBackend<V> {
    type Error = Infallible;

    fn add(&mut self, key: String, value: V) -> Result<(), Infallible> {
        self.adds += 1;
        self.staged.push(Change::Put(key, value));
        Ok(())
    }

    fn load(&self) -> Result<HashMap<String, V>, Infallible> {
        Ok(self.committed.clone())
    }

    fn delete(&mut self, key: &String) -> Result<(), Infallible> {
        self.staged.push(Change::Remove(key.clone()));
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Infallible> {
        self.commits += 1;
        for change in self.staged.drain(..) {
            match change {
                Change::Put(key, value) => {
                    self.committed.insert(key, value);
                }
                Change::Remove(key) => {
                    self.committed.remove(&key);
                }
            }
        }
        Ok(())
    }
}
