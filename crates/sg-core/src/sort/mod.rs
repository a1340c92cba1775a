//! Sort request sanitization: direction tokens, sortable-field allow-lists,
//! and the sanitizer entry points that combine them.

pub mod direction;
pub mod fields;
pub mod sanitizer;

use thiserror::Error;

pub use direction::SortDirection;
pub use fields::SortableFields;
pub use sanitizer::{
    sanitize_named, sanitize_pair, sanitize_positional, NamedSort, SanitizedSort, SortFallback,
    SortRequest,
};

/// Errors raised while building a server-side allow-list.
///
/// Client input never produces one of these; the sanitizer falls back to
/// defaults instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("Allow-list of sortable fields must not be empty")]
    EmptyAllowList,
}
