//! Macros for building error locations.
//!
//! - [`macro@crate::loc`] - builds a [`Location`](crate::Location) from indices and keys.
//!
//! # Examples
//!
//! ```
//! use model_collections::{loc, LocItem};
//!
//! let location = loc!["users", 2, "name"];
//! assert_eq!(location[1], LocItem::Index(2));
//! assert_eq!(location.to_string(), "users.2.name");
//! ```

/// Builds a [`Location`](crate::Location) from a list of path steps.
///
/// Each step is anything convertible into a [`LocItem`](crate::LocItem):
/// `usize` indices and string keys.
///
/// # Syntax
///
/// - `loc![]` - the empty location
/// - `loc![step, ...]` - the given steps, outermost first
///
/// # Examples
///
/// ```
/// use model_collections::{loc, Location};
///
/// assert_eq!(loc![], Location::new());
///
/// let key = String::from("u1");
/// assert_eq!(loc![&key, "age"].to_string(), "u1.age");
/// ```
#[macro_export]
macro_rules! loc {
    () => {
        $crate::Location::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let mut location = $crate::Location::new();
        $(location.push($crate::LocItem::from($item));)+
        location
    }};
}
