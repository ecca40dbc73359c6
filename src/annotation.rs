//! Declared element types.
//!
//! An [`Annotation`] is the type expression a collection is specialized with.
//! Rather than reflecting over types at run time, each [`Model`](crate::Model)
//! describes itself: a plain model is an [`Annotation::Type`], an enum over
//! several models is an [`Annotation::Union`] of its members.
//!
//! [`get_types_from_annotation`] flattens an annotation into the runtime type
//! names the strict pre-check admits.

use crate::convert::json_kind;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::{self, Display};

/// A type expression describing what a collection element may be.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// A concrete class, by name.
    Type(Cow<'static, str>),
    /// Any one of the member annotations.
    Union(Vec<Annotation>),
    /// A parametrized type such as `list[User]`; only `origin` is a runtime type.
    Generic {
        origin: Cow<'static, str>,
        args: Vec<Annotation>,
    },
    /// A literal value.
    Literal(Value),
}

impl Annotation {
    /// The bare annotation for `T`, named after its last path segment.
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        Self::Type(Cow::Borrowed(short_type_name::<T>()))
    }

    /// A bare type annotation with an explicit name.
    #[inline]
    pub fn named<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self::Type(name.into())
    }

    /// A union over `members`.
    pub fn union<I: IntoIterator<Item = Annotation>>(members: I) -> Self {
        Self::Union(members.into_iter().collect())
    }

    /// Canonical key used by the specialization cache.
    ///
    /// Returns `None` when the annotation cannot serve as a map key: literals
    /// holding arrays, objects or floating-point numbers have no stable
    /// identity, so classes specialized with them are never cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use model_collections::Annotation;
    /// use serde_json::json;
    ///
    /// assert_eq!(Annotation::named("User").cache_key().as_deref(), Some("User"));
    /// assert!(Annotation::Literal(json!([1, 2])).cache_key().is_none());
    /// ```
    pub fn cache_key(&self) -> Option<String> {
        match self {
            Self::Type(name) => Some(name.to_string()),
            Self::Union(members) => Some(format!("Union[{}]", join_keys(members)?)),
            Self::Generic { origin, args } => Some(format!("{origin}[{}]", join_keys(args)?)),
            Self::Literal(value) => match value {
                Value::Null | Value::Bool(_) | Value::String(_) => {
                    Some(format!("Literal[{value}]"))
                }
                Value::Number(n) if !n.is_f64() => Some(format!("Literal[{value}]")),
                _ => None,
            },
        }
    }
}

fn join_keys(annotations: &[Annotation]) -> Option<String> {
    let keys = annotations
        .iter()
        .map(Annotation::cache_key)
        .collect::<Option<Vec<_>>>()?;
    Some(keys.join(", "))
}

impl Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => f.write_str(name),
            Self::Union(members) => {
                f.write_str("Union[")?;
                write_joined(f, members)?;
                f.write_str("]")
            }
            Self::Generic { origin, args } => {
                write!(f, "{origin}[")?;
                write_joined(f, args)?;
                f.write_str("]")
            }
            Self::Literal(value) => write!(f, "Literal[{value}]"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, annotations: &[Annotation]) -> fmt::Result {
    for (i, annotation) in annotations.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        Display::fmt(annotation, f)?;
    }
    Ok(())
}

/// Returns every runtime type name admitted by `annotation`.
///
/// Unions expand recursively to their members, bare types yield themselves,
/// generics yield their origin and literals yield the JSON kind of their
/// value. Names appear once, in first-seen order.
///
/// # Examples
///
/// ```
/// use model_collections::annotation::{get_types_from_annotation, Annotation};
///
/// let pets = Annotation::union([
///     Annotation::named("Cat"),
///     Annotation::union([Annotation::named("Dog"), Annotation::named("Cat")]),
/// ]);
/// assert_eq!(get_types_from_annotation(&pets), ["Cat", "Dog"]);
/// ```
pub fn get_types_from_annotation(annotation: &Annotation) -> Vec<Cow<'static, str>> {
    let mut types = Vec::new();
    collect_types(annotation, &mut types);
    types
}

fn collect_types(annotation: &Annotation, out: &mut Vec<Cow<'static, str>>) {
    let found = match annotation {
        Annotation::Union(members) => {
            for member in members {
                collect_types(member, out);
            }
            return;
        }
        Annotation::Type(name) => name.clone(),
        Annotation::Generic { origin, .. } => origin.clone(),
        Annotation::Literal(value) => Cow::Borrowed(json_kind(value)),
    };
    if !out.contains(&found) {
        out.push(found);
    }
}

/// Last path segment of `T`'s type name, without generic arguments.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
