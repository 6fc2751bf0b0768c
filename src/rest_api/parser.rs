//! # Query Parameter Parser
//!
//! Validates the `format` and `sort` query parameters. Decoding of the raw
//! query string is left to axum's `Query` extractor; only the allowed value
//! sets are checked here.

use std::str::FromStr;

use crate::store::SortKey;

use super::errors::{RestError, RestResult};
use super::response::Format;

/// Query key selecting the output encoding
pub const PARAM_FORMAT: &str = "format";

/// Query key selecting the list order
pub const PARAM_SORT: &str = "sort";

/// Parsed query parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub format: Format,
    pub sort: SortKey,
}

impl QueryParams {
    /// Parse query parameters from decoded key/value pairs
    ///
    /// Every occurrence of a repeated key is validated; the first non-empty
    /// one takes effect. Empty values count as absent. Unrecognized keys are
    /// ignored.
    pub fn parse(params: &[(String, String)]) -> RestResult<Self> {
        Ok(QueryParams {
            format: parse_param(params, PARAM_FORMAT)?.unwrap_or_default(),
            sort: parse_param(params, PARAM_SORT)?.unwrap_or_default(),
        })
    }
}

fn parse_param<T>(params: &[(String, String)], key: &str) -> RestResult<Option<T>>
where
    T: FromStr<Err = String>,
{
    let mut first = None;
    for (_, value) in params.iter().filter(|(k, v)| k == key && !v.is_empty()) {
        let parsed = value.parse::<T>().map_err(RestError::InvalidQueryParam)?;
        first.get_or_insert(parsed);
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_json_and_id() {
        let query = QueryParams::parse(&params(&[("format", "json"), ("sort", "id")])).unwrap();
        assert_eq!(query.format, Format::Json);
        assert_eq!(query.sort, SortKey::Id);
    }

    #[test]
    fn test_yaml_and_timestamp() {
        let query =
            QueryParams::parse(&params(&[("format", "yaml"), ("sort", "timestamp")])).unwrap();
        assert_eq!(query.format, Format::Yaml);
        assert_eq!(query.sort, SortKey::Timestamp);
    }

    #[test]
    fn test_defaults() {
        let query = QueryParams::parse(&[]).unwrap();
        assert_eq!(query, QueryParams { format: Format::Json, sort: SortKey::Id });

        let query = QueryParams::parse(&params(&[("format", ""), ("sort", "")])).unwrap();
        assert_eq!(query, QueryParams::default());
    }

    #[test]
    fn test_invalid_format() {
        let result = QueryParams::parse(&params(&[("format", "invalid"), ("sort", "id")]));
        assert!(matches!(result, Err(RestError::InvalidQueryParam(_))));
    }

    #[test]
    fn test_invalid_sort() {
        let result = QueryParams::parse(&params(&[("format", "json"), ("sort", "invalid")]));
        assert!(matches!(result, Err(RestError::InvalidQueryParam(_))));
    }

    #[test]
    fn test_both_invalid() {
        let result = QueryParams::parse(&params(&[("format", "invalid"), ("sort", "invalid")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let query = QueryParams::parse(&params(&[("page", "2"), ("sort", "timestamp")])).unwrap();
        assert_eq!(query.sort, SortKey::Timestamp);
        assert_eq!(query.format, Format::Json);
    }

    #[test]
    fn test_repeated_key_rejects_any_invalid_value() {
        let result = QueryParams::parse(&params(&[("sort", "bogus"), ("sort", "id")]));
        assert!(matches!(result, Err(RestError::InvalidQueryParam(_))));

        let result = QueryParams::parse(&params(&[("sort", "id"), ("sort", "bogus")]));
        assert!(matches!(result, Err(RestError::InvalidQueryParam(_))));
    }

    #[test]
    fn test_repeated_key_first_value_wins() {
        let query = QueryParams::parse(&params(&[
            ("format", ""),
            ("format", "yaml"),
            ("format", "json"),
            ("sort", "timestamp"),
            ("sort", "id"),
        ]))
        .unwrap();
        assert_eq!(query.format, Format::Yaml);
        assert_eq!(query.sort, SortKey::Timestamp);
    }
}
