/// Error types for social-graphql
use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Lookups that miss are not errors (they resolve to `null`); what is left
/// is plumbing between the schema and its context data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Schema context is missing {0}")]
    MissingContext(&'static str),
}

impl ServiceError {
    /// Machine-readable code placed in the GraphQL error `extensions`
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::MissingContext(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for ServiceError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_carries_code() {
        let err = ServiceError::MissingContext("SocialStore").extend();

        assert_eq!(err.message, "Schema context is missing SocialStore");
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("INTERNAL_SERVER_ERROR"))
        );
    }
}
