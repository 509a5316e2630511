use thiserror::Error;

/// Errors raised while turning a request description into a URL.
///
/// These never involve the network: a request that fails here is never sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("unable to find the value of the path parameter '{name}'")]
    UnresolvedPathParam { name: String },
    #[error("base URL '{0}' cannot carry a path")]
    InvalidBaseUrl(String),
}

/// Result type for request building.
pub type Result<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_path_param_display() {
        let error = BuildError::UnresolvedPathParam {
            name: "otherId".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unable to find the value of the path parameter 'otherId'"
        );
    }

    #[test]
    fn test_invalid_base_url_display() {
        let error = BuildError::InvalidBaseUrl("mailto:admin@example.com".to_string());
        assert_eq!(
            error.to_string(),
            "base URL 'mailto:admin@example.com' cannot carry a path"
        );
    }
}
