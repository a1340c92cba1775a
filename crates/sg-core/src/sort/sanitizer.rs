//! Sanitizers for the client "sort" query parameter.
//!
//! Two request shapes are in use by list endpoints and both MUST be accepted:
//!
//! - positional: `["field", "DIR", ...]`, where anything past index 1 is ignored
//! - named: `{"sortBy": "field", "orderBy": "DIR"}`, where other keys are ignored
//!
//! Both shapes feed the same decision routine, [`sanitize_pair`]. The
//! sanitizers are total: missing, malformed, or hostile input degrades to the
//! allow-list's default field in ascending order. They never log and never
//! allocate anything beyond the returned value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::direction::SortDirection;
use super::fields::SortableFields;

/// Which default, if any, replaced part of the client request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortFallback {
    /// The requested field was absent or not allow-listed; the default field
    /// and `ASC` were used and the requested direction was ignored.
    DefaultField,
    /// The field was accepted but the direction was absent or not one of the
    /// two literal tokens; `ASC` was used.
    DefaultDirection,
}

/// A sort guaranteed safe to interpolate into an ORDER BY clause.
///
/// `field` is always a member of the allow-list it was sanitized against,
/// and `direction` is always `ASC` or `DESC`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedSort {
    field: String,
    direction: SortDirection,
    #[serde(skip)]
    fallback: Option<SortFallback>,
}

impl SanitizedSort {
    fn new(field: &str, direction: SortDirection, fallback: Option<SortFallback>) -> Self {
        Self {
            field: field.to_string(),
            direction,
            fallback,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// `None` when the request was used exactly as sent.
    pub fn fallback(&self) -> Option<SortFallback> {
        self.fallback
    }

    /// The canonical `(field, direction)` pair with the literal direction token.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.field, self.direction.as_str())
    }

    pub fn into_parts(self) -> (String, SortDirection) {
        (self.field, self.direction)
    }

    /// Render the ORDER BY term, backtick-quoting each dot-separated segment.
    /// Backticks inside a segment are doubled, so any field name renders as
    /// identifiers only.
    ///
    /// ```text
    /// job_posting.created_at, DESC  =>  `job_posting`.`created_at` DESC
    /// ```
    pub fn order_by_clause(&self) -> String {
        let quoted: Vec<String> = self
            .field
            .split('.')
            .map(|segment| format!("`{}`", segment.replace('`', "``")))
            .collect();
        format!("{} {}", quoted.join("."), self.direction)
    }
}

/// Decide the sanitized sort from already-extracted candidates.
///
/// 1. A missing or non-allow-listed field yields `(default_field, ASC)`.
/// 2. Otherwise a missing or unrecognized direction yields `(field, ASC)`.
/// 3. Otherwise the candidates are returned unchanged.
pub fn sanitize_pair(
    field: Option<&str>,
    direction: Option<&str>,
    fields: &SortableFields,
) -> SanitizedSort {
    let field = match field.filter(|f| fields.contains(f)) {
        Some(field) => field,
        None => {
            return SanitizedSort::new(
                fields.default_field(),
                SortDirection::Asc,
                Some(SortFallback::DefaultField),
            )
        }
    };

    match direction.and_then(SortDirection::parse_token) {
        Some(direction) => SanitizedSort::new(field, direction, None),
        None => SanitizedSort::new(
            field,
            SortDirection::Asc,
            Some(SortFallback::DefaultDirection),
        ),
    }
}

/// Sanitize the positional `[field, direction, ...]` form.
///
/// `None` stands for an absent parameter. Any value that is not an array
/// (a mapping, a bare string, a number, `null`) carries no usable field.
pub fn sanitize_positional(sort: Option<&Value>, fields: &SortableFields) -> SanitizedSort {
    let (field, direction) = match sort {
        Some(Value::Array(items)) => (candidate(items.first()), candidate(items.get(1))),
        _ => (None, None),
    };
    sanitize_pair(field, direction, fields)
}

/// Sanitize the named `{sortBy, orderBy}` form.
///
/// `None` stands for an absent parameter. Any value that is not a mapping
/// carries no usable field.
pub fn sanitize_named(sort: Option<&Value>, fields: &SortableFields) -> SanitizedSort {
    let (field, direction) = match sort {
        Some(Value::Object(map)) => (candidate(map.get("sortBy")), candidate(map.get("orderBy"))),
        _ => (None, None),
    };
    sanitize_pair(field, direction, fields)
}

/// Only non-empty strings count as candidates.
fn candidate(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// The named request shape, as deserialized from a query struct.
///
/// Deserializes from any JSON value. Values are kept as raw JSON so that a
/// non-string `sortBy` degrades to the default instead of failing, and
/// anything other than a mapping carries no candidates at all.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct NamedSort {
    pub sort_by: Option<Value>,
    pub order_by: Option<Value>,
}

impl NamedSort {
    pub fn sanitize(&self, fields: &SortableFields) -> SanitizedSort {
        sanitize_pair(
            candidate(self.sort_by.as_ref()),
            candidate(self.order_by.as_ref()),
            fields,
        )
    }
}

impl From<Value> for NamedSort {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                sort_by: map.remove("sortBy"),
                order_by: map.remove("orderBy"),
            },
            _ => Self::default(),
        }
    }
}

/// A sort request in either accepted shape.
///
/// Deserializes from any JSON value: arrays are positional, mappings are
/// named, and every other value is `Malformed`, which sanitizes to the
/// default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum SortRequest {
    Positional(Vec<Value>),
    Named(NamedSort),
    Malformed,
}

impl SortRequest {
    /// Classify a parsed query value by shape.
    pub fn from_value(value: &Value) -> Self {
        Self::from(value.clone())
    }

    pub fn sanitize(&self, fields: &SortableFields) -> SanitizedSort {
        match self {
            Self::Positional(items) => {
                sanitize_pair(candidate(items.first()), candidate(items.get(1)), fields)
            }
            Self::Named(named) => named.sanitize(fields),
            Self::Malformed => sanitize_pair(None, None, fields),
        }
    }
}

impl From<Value> for SortRequest {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Positional(items),
            value @ Value::Object(_) => Self::Named(NamedSort::from(value)),
            _ => Self::Malformed,
        }
    }
}
