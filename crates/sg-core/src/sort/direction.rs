use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordering direction accepted in an ORDER BY clause.
///
/// Only the two literal tokens `"ASC"` and `"DESC"` are recognized. Matching
/// is exact and case-sensitive: `"asc"` or `" DESC"` are not directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    /// The literal SQL keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Match a raw token against the two literal directions.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_tokens() {
        assert_eq!(SortDirection::parse_token("ASC"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse_token("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::Asc.as_str(), "ASC");
        assert_eq!(SortDirection::Desc.to_string(), "DESC");
    }

    #[test]
    fn test_matching_is_case_sensitive_and_exact() {
        assert_eq!(SortDirection::parse_token("asc"), None);
        assert_eq!(SortDirection::parse_token("Desc"), None);
        assert_eq!(SortDirection::parse_token(" DESC"), None);
        assert_eq!(SortDirection::parse_token("DESC "), None);
        assert_eq!(SortDirection::parse_token("horizontal"), None);
        assert_eq!(SortDirection::parse_token(""), None);
    }

    #[test]
    fn test_default_is_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }

    #[test]
    fn test_serde_uses_literal_tokens() {
        assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"DESC\"");
        let parsed: SortDirection = serde_json::from_str("\"ASC\"").unwrap();
        assert_eq!(parsed, SortDirection::Asc);
        assert!(serde_json::from_str::<SortDirection>("\"asc\"").is_err());
    }
}
