//! Process-wide cache of specialized collection classes.
//!
//! Specializing a collection with an element type compiles a validator, so the
//! resulting [`CollectionClass`] is memoized per `(shape, element type,
//! annotation)` and shared by every caller. The cache only grows.
//!
//! Annotations that cannot act as a key (see [`Annotation::cache_key`]) skip
//! the cache: each call builds a fresh class.

use crate::annotation::Annotation;
use crate::collection::base::{CollectionClass, CollectionKind};
use crate::element::Element;
use crate::traits::Model;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::sync::Arc;

type CacheKey = (CollectionKind, TypeId, String);

static SPECIALIZATIONS: Lazy<DashMap<CacheKey, Arc<dyn Any + Send + Sync>>> =
    Lazy::new(DashMap::new);

/// Returns the class for `kind` specialized with `T`'s declared annotation.
///
/// # Examples
///
/// ```
/// # use model_collections::Model;
/// # use serde::{Deserialize, Serialize};
/// # #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// # struct User { name: String }
/// # impl Model for User {}
/// use model_collections::{specialize, CollectionKind};
/// use std::sync::Arc;
///
/// let a = specialize::<User>(CollectionKind::Sequence);
/// let b = specialize::<User>(CollectionKind::Sequence);
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(a.name(), "Sequence[User]");
/// ```
pub fn specialize<T: Model>(kind: CollectionKind) -> Arc<CollectionClass<T>> {
    specialize_with::<T>(kind, T::annotation())
}

/// Returns the class for `kind` specialized with an explicit `annotation`.
///
/// Concurrent callers asking for the same key get the same class: the entry is
/// built at most once while its shard is locked.
pub fn specialize_with<T: Model>(
    kind: CollectionKind,
    annotation: Annotation,
) -> Arc<CollectionClass<T>> {
    let Some(annotation_key) = annotation.cache_key() else {
        tracing::debug!(
            %kind,
            %annotation,
            "unhashable annotation, bypassing specialization cache"
        );
        return build(kind, annotation);
    };

    let key = (kind, TypeId::of::<T>(), annotation_key);
    let entry = SPECIALIZATIONS
        .entry(key)
        .or_insert_with(|| {
            tracing::debug!(%kind, %annotation, "specializing collection class");
            build::<T>(kind, annotation.clone()) as Arc<dyn Any + Send + Sync>
        })
        .clone();

    // The key embeds `TypeId::of::<T>()`, so the stored class is always a `CollectionClass<T>`.
    entry
        .downcast::<CollectionClass<T>>()
        .unwrap_or_else(|_| build(kind, annotation))
}

fn build<T: Model>(kind: CollectionKind, annotation: Annotation) -> Arc<CollectionClass<T>> {
    Arc::new(CollectionClass::new(
        kind,
        Arc::new(Element::new(annotation)),
    ))
}

/// Number of cached classes.
pub fn cached_classes() -> usize {
    SPECIALIZATIONS.len()
}
