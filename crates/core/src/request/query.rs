//! Multi-valued query parameters.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Query parameters where a key can carry several values.
///
/// Keys are kept sorted so the encoded form is stable. Values of a key stay in the
/// order they were appended; nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues(BTreeMap<String, Vec<String>>);

impl QueryValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to `key`, keeping the values already there.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Appends every value of `values` to `key`.
    pub fn append_all<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for value in values {
            self.append(key, value);
        }
        self
    }

    /// Appends `value` under `key` only when it is set.
    pub fn append_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.append(key, value.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Merges `other` into `self`, appending its values after the existing ones.
    pub fn extend(&mut self, other: QueryValues) {
        for (key, values) in other.0 {
            self.0.entry(key).or_default().extend(values);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
    }

    /// Encodes as `application/x-www-form-urlencoded`, without a leading `?`.
    ///
    /// ```
    /// use grafana_core::request::QueryValues;
    ///
    /// let mut query = QueryValues::new();
    /// query.append("tags", "tag1").append("limit", "100").append("tags", "tag2");
    /// assert_eq!(query.encode(), "limit=100&tags=tag1&tags=tag2");
    /// ```
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Parses an encoded query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut values = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            values.append(key, value);
        }
        values
    }
}

impl<K, V> FromIterator<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.append(key, value);
        }
        values
    }
}

/// A typed set of query parameters for one endpoint.
pub trait QueryParams {
    fn to_query(&self) -> QueryValues;
}

impl QueryParams for QueryValues {
    fn to_query(&self) -> QueryValues {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_encodes_to_empty_string() {
        assert_eq!(QueryValues::new().encode(), "");
        assert!(QueryValues::new().is_empty());
    }

    #[test]
    fn test_keys_sorted_values_in_append_order() {
        let mut query = QueryValues::new();
        query
            .append("version", "v1&v2")
            .append("tags", "tag2")
            .append("filter", "表")
            .append("tags", "tag1")
            .append("version", "v3")
            .append("limit", "100");

        assert_eq!(
            query.encode(),
            "filter=%E8%A1%A8&limit=100&tags=tag2&tags=tag1&version=v1%26v2&version=v3"
        );
    }

    #[test]
    fn test_duplicate_values_are_kept() {
        let query: QueryValues = [("tag", "a"), ("tag", "a")].into_iter().collect();
        assert_eq!(query.get("tag"), Some(&["a".to_string(), "a".to_string()][..]));
        assert_eq!(query.encode(), "tag=a&tag=a");
    }

    #[test]
    fn test_space_is_encoded_as_plus() {
        let query: QueryValues = [("query", "my team")].into_iter().collect();
        assert_eq!(query.encode(), "query=my+team");
    }

    #[test]
    fn test_parse_round_trip() {
        let mut query = QueryValues::new();
        query
            .append("filter", "表")
            .append("version", "v1&v2")
            .append("version", "v3")
            .append("query", "a b=c");

        assert_eq!(QueryValues::parse(&query.encode()), query);
        assert_eq!(QueryValues::parse(&format!("?{}", query.encode())), query);
    }

    #[test]
    fn test_extend_appends_after_existing() {
        let mut query: QueryValues = [("tag", "a")].into_iter().collect();
        query.extend([("tag", "b"), ("limit", "1")].into_iter().collect());

        assert_eq!(query.encode(), "limit=1&tag=a&tag=b");
    }

    #[test]
    fn test_append_opt_and_append_all() {
        let mut query = QueryValues::new();
        query
            .append_opt("limit", Some(10))
            .append_opt::<u32>("page", None)
            .append_all("tag", ["x", "y"]);

        assert_eq!(query.get("page"), None);
        assert_eq!(query.encode(), "limit=10&tag=x&tag=y");
    }
}
