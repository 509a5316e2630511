//! Sub-path templates with `/:name` placeholders.

use std::collections::HashMap;

use super::error::{BuildError, Result};

/// Token that opens a placeholder inside a sub-path template.
const PLACEHOLDER_START: &str = "/:";

/// Values for the placeholders of a sub-path template.
///
/// Setting the same name twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(HashMap<String, String>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a placeholder, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PathParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Substitutes every `/:name` placeholder of `template` with its value.
///
/// A placeholder name is the run of ASCII letters following `/:`; digits end the
/// name, so `/:id5` is the placeholder `id` followed by a literal `5`. A `/:` with
/// no letters after it is looked up under the empty name.
///
/// Each value is percent-encoded as a single path segment, so `%` and `/` inside
/// a value never change the path. Templates without any placeholder are returned
/// unchanged and `params` is not consulted. The first placeholder with no value aborts the whole resolution.
///
/// # Examples
///
/// ```
/// use grafana_core::request::{resolve_sub_path, PathParams};
///
/// let params: PathParams = [("id", "5"), ("otherId", "45")].into_iter().collect();
/// assert_eq!(resolve_sub_path("/:id/test/:otherId", &params).unwrap(), "/5/test/45");
/// ```
pub fn resolve_sub_path(template: &str, params: &PathParams) -> Result<String> {
    if !template.contains(PLACEHOLDER_START) {
        return Ok(template.to_string());
    }

    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(PLACEHOLDER_START) {
        // keep the leading slash, drop the colon
        resolved.push_str(&rest[..=start]);
        let after = &rest[start + PLACEHOLDER_START.len()..];
        let name_len = after.bytes().take_while(u8::is_ascii_alphabetic).count();
        let name = &after[..name_len];

        let value = params
            .get(name)
            .ok_or_else(|| BuildError::UnresolvedPathParam {
                name: name.to_string(),
            })?;
        resolved.push_str(&urlencoding::encode(value));
        rest = &after[name_len..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> PathParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_empty_template() {
        let result = resolve_sub_path("", &params(&[("test", "value")])).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_unique_placeholder() {
        let result = resolve_sub_path(
            "/dasboard/:dashboardID/snapshot",
            &params(&[("dashboardID", "15")]),
        )
        .unwrap();
        assert_eq!(result, "/dasboard/15/snapshot");
    }

    #[test]
    fn test_multiple_placeholders() {
        let result =
            resolve_sub_path("/:id/test/:otherId", &params(&[("id", "5"), ("otherId", "45")]))
                .unwrap();
        assert_eq!(result, "/5/test/45");
    }

    #[test]
    fn test_missing_value_fails_without_partial_result() {
        let result = resolve_sub_path("/:id/test/:otherId", &params(&[("id", "5")]));
        assert_eq!(
            result,
            Err(BuildError::UnresolvedPathParam {
                name: "otherId".to_string()
            })
        );
    }

    #[test]
    fn test_first_missing_name_is_reported() {
        let result = resolve_sub_path("/:orgId/users/:userId", &PathParams::new());
        assert_eq!(
            result,
            Err(BuildError::UnresolvedPathParam {
                name: "orgId".to_string()
            })
        );
    }

    #[test]
    fn test_template_without_placeholder_is_unchanged() {
        let result =
            resolve_sub_path("/test", &params(&[("id", "5"), ("otherId", "45")])).unwrap();
        assert_eq!(result, "/test");

        let result = resolve_sub_path("/users/lookup", &PathParams::new()).unwrap();
        assert_eq!(result, "/users/lookup");
    }

    #[test]
    fn test_colon_outside_placeholder_is_literal() {
        let result = resolve_sub_path("/time:range", &PathParams::new()).unwrap();
        assert_eq!(result, "/time:range");
    }

    #[test]
    fn test_digits_end_the_placeholder_name() {
        let result = resolve_sub_path("/:id5/x", &params(&[("id", "1")])).unwrap();
        assert_eq!(result, "/15/x");
    }

    #[test]
    fn test_placeholder_without_letters_uses_empty_name() {
        let result = resolve_sub_path("/:5", &params(&[("id", "1")]));
        assert_eq!(
            result,
            Err(BuildError::UnresolvedPathParam {
                name: String::new()
            })
        );
    }

    #[test]
    fn test_repeated_name_is_substituted_everywhere() {
        let result = resolve_sub_path("/:id/copy/:id", &params(&[("id", "7")])).unwrap();
        assert_eq!(result, "/7/copy/7");
    }

    #[test]
    fn test_prefix_names_do_not_collide() {
        let result =
            resolve_sub_path("/:id/:idx", &params(&[("id", "1"), ("idx", "2")])).unwrap();
        assert_eq!(result, "/1/2");
    }

    #[test]
    fn test_values_are_encoded_as_one_segment() {
        let result = resolve_sub_path("/name/:name", &params(&[("name", "100% cpu")])).unwrap();
        assert_eq!(result, "/name/100%25%20cpu");

        let result = resolve_sub_path("/uid/:uid", &params(&[("uid", "a%2Fb/c")])).unwrap();
        assert_eq!(result, "/uid/a%252Fb%2Fc");
    }

    #[test]
    fn test_set_keeps_last_value() {
        let mut params = PathParams::new();
        params.set("id", "1").set("dasboardID", "45");
        params.set("dasboardID", "46").set("dasboardID", "47");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("1"));
        assert_eq!(params.get("dasboardID"), Some("47"));
    }
}
