//! Allow-list based sanitization of client-supplied sort parameters.
//!
//! List endpoints accept a client "sort" parameter and interpolate the result
//! into an ORDER BY clause. Column names cannot be bound as query parameters,
//! so every sort request MUST pass through [`sort`] before it reaches the
//! query layer. Invalid input never fails the request: it degrades to the
//! endpoint's default ordering.

pub mod sort;
