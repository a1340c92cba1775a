//! The server-defined allow-list of sortable fields.

use serde::Serialize;
use tracing::warn;

use super::SortError;

/// Ordered, non-empty allow-list of field names a client may sort by.
///
/// The first entry is the default field used whenever a request does not
/// name a permitted one. Entries are taken as given; quoting for the query
/// layer happens in [`super::SanitizedSort::order_by_clause`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortableFields {
    fields: Vec<String>,
}

impl SortableFields {
    /// Build an allow-list. The only precondition is that it is non-empty.
    pub fn new<I, S>(fields: I) -> Result<Self, SortError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(SortError::EmptyAllowList);
        }

        for (idx, field) in fields.iter().enumerate() {
            if fields[..idx].contains(field) {
                warn!("Sortable field {:?} is listed more than once", field);
            }
        }

        Ok(Self { fields })
    }

    /// The fallback field: the first entry of the allow-list.
    pub fn default_field(&self) -> &str {
        &self.fields[0]
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_is_default() {
        let fields = SortableFields::new(["foo", "bar"]).unwrap();
        assert_eq!(fields.default_field(), "foo");
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_allow_list_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(SortableFields::new(empty), Err(SortError::EmptyAllowList));
        assert_eq!(
            SortableFields::new(Vec::<String>::new()),
            Err(SortError::EmptyAllowList)
        );
    }

    #[test]
    fn test_membership_is_exact() {
        let fields = SortableFields::new(["created_at", "title"]).unwrap();
        assert!(fields.contains("created_at"));
        assert!(!fields.contains("Created_At"));
        assert!(!fields.contains("created_at "));
        assert!(!fields.contains(""));
    }

    #[test]
    fn test_any_non_empty_list_accepted() {
        let long = "a".repeat(200);
        for list in [
            vec!["foo", "foo"],
            vec!["db.jobs.created_at"],
            vec!["created-at"],
            vec![long.as_str()],
            vec!["weird`name", "title"],
        ] {
            let fields = SortableFields::new(list.clone()).unwrap();
            assert_eq!(fields.default_field(), list[0]);
            assert!(list.iter().all(|f| fields.contains(f)));
        }
    }

    #[test]
    fn test_serializes_as_list() {
        let fields = SortableFields::new(["foo", "bar"]).unwrap();
        assert_eq!(serde_json::to_string(&fields).unwrap(), r#"["foo","bar"]"#);
    }
}
