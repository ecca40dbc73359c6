use std::collections::HashMap;

/// A key-value persistence store with an explicit commit step.
///
/// Collections never call these methods on their own: a
/// [`PersistentSequence`](crate::PersistentSequence) only forwards what its
/// caller asks for. Whether `add`/`delete` are visible before `commit` is up to
/// the implementation.
pub trait Backend<K, V> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Stages `value` under `key`.
    fn add(&mut self, key: K, value: V) -> Result<(), Self::Error>;

    /// Returns everything currently persisted.
    fn load(&self) -> Result<HashMap<K, V>, Self::Error>;

    /// Stages removal of `key`.
    fn delete(&mut self, key: &K) -> Result<(), Self::Error>;

    /// Makes staged changes durable.
    fn commit(&mut self) -> Result<(), Self::Error>;
}

impl<K, V, B> Backend<K, V> for &mut B
where
    B: Backend<K, V> + ?Sized,
{
    type Error = B::Error;

    #[inline]
    fn add(&mut self, key: K, value: V) -> Result<(), Self::Error> {
        (**self).add(key, value)
    }

    #[inline]
    fn load(&self) -> Result<HashMap<K, V>, Self::Error> {
        (**self).load()
    }

    #[inline]
    fn delete(&mut self, key: &K) -> Result<(), Self::Error> {
        (**self).delete(key)
    }

    #[inline]
    fn commit(&mut self) -> Result<(), Self::Error> {
        (**self).commit()
    }
}
