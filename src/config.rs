//! Per-class validation policy.

use serde::{Deserialize, Serialize};

/// Validation toggles consulted on every mutating operation.
///
/// Resolved per collection class; a subclass overrides them with
/// [`CollectionClass::subclass`](crate::CollectionClass::subclass). Changing the
/// policy never revalidates elements already stored.
///
/// Missing fields take their defaults when deserializing:
///
/// ```
/// use model_collections::CollectionConfig;
///
/// let config: CollectionConfig = serde_json::from_str(r#"{"validate_assignment_strict": false}"#).unwrap();
/// assert_eq!(config, CollectionConfig::lax());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Validate values on every write. When off, values are stored without checks.
    pub validate_assignment: bool,
    /// Reject inputs whose runtime type is not admitted before running the validator.
    pub validate_assignment_strict: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            validate_assignment: true,
            validate_assignment_strict: true,
        }
    }
}

impl CollectionConfig {
    /// Full validation with the instance pre-check (the default).
    #[inline]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Full validation without the pre-check, so record-like inputs are coerced.
    #[inline]
    pub fn lax() -> Self {
        Self {
            validate_assignment_strict: false,
            ..Self::default()
        }
    }

    /// No validation on writes.
    #[inline]
    pub fn unchecked() -> Self {
        Self {
            validate_assignment: false,
            validate_assignment_strict: false,
        }
    }

    #[must_use]
    #[inline]
    pub fn with_validate_assignment(mut self, enabled: bool) -> Self {
        self.validate_assignment = enabled;
        self
    }

    #[must_use]
    #[inline]
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.validate_assignment_strict = enabled;
        self
    }
}
