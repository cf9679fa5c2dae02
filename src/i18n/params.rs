//! Initial-parameter sources.
//!
//! The selector reads its initial language once, at construction, from a
//! key → value lookup such as the page's URL query string.

use std::collections::HashMap;

/// Key → value lookup read once at initialization.
pub trait ParameterSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl ParameterSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Parsed URL query string (`?lang=fr&x=1`).
///
/// Lookups return the first value for a key, like `URLSearchParams.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Decoding follows `application/x-www-form-urlencoded`: `+` is a space,
    /// `%XX` escapes are decoded and malformed escapes are kept literally.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl ParameterSource for QueryParams {
    fn get(&self, key: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_query() {
        let params = QueryParams::parse("?lang=fr&spl=ase");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("lang").as_deref(), Some("fr"));
        assert_eq!(params.get("spl").as_deref(), Some("ase"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_parse_without_question_mark() {
        let params = QueryParams::parse("lang=de");
        assert_eq!(params.get("lang").as_deref(), Some("de"));
    }

    #[test]
    fn test_first_value_wins() {
        let params = QueryParams::parse("lang=fr&lang=de");
        assert_eq!(params.get("lang").as_deref(), Some("fr"));
    }

    #[test]
    fn test_key_without_value() {
        let params = QueryParams::parse("lang&x=1");
        assert_eq!(params.get("lang").as_deref(), Some(""));
    }

    #[test]
    fn test_empty_query() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    #[test]
    fn test_decoding() {
        let params = QueryParams::parse("text=hello+world&name=caf%C3%A9&bad=%zz&tail=%4");
        assert_eq!(params.get("text").as_deref(), Some("hello world"));
        assert_eq!(params.get("name").as_deref(), Some("café"));
        assert_eq!(params.get("bad").as_deref(), Some("%zz"));
        assert_eq!(params.get("tail").as_deref(), Some("%4"));
    }

    #[test]
    fn test_signed_escape_is_not_hex() {
        let params = QueryParams::parse("lang=%+1&x=%-1");
        assert_eq!(params.get("lang").as_deref(), Some("% 1"));
        assert_eq!(params.get("x").as_deref(), Some("%-1"));
    }

    #[test]
    fn test_hashmap_source() {
        let mut map = HashMap::new();
        map.insert("lang".to_string(), "es".to_string());
        assert_eq!(ParameterSource::get(&map, "lang").as_deref(), Some("es"));
    }
}
