//! Conversion of data-access failures into GraphQL errors.
//!
//! The error text becomes the GraphQL message and [`Error::code`] is
//! exposed as `extensions.code`.

use async_graphql::{ErrorExtensions, ID};
use holonet_common::Error;

/// Wrapper so we can implement `ErrorExtensions` for an external type.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.0.code();
        async_graphql::Error::new(self.0.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Convert and log a failure on its way to the caller.
pub(crate) fn api_error(err: Error) -> async_graphql::Error {
    if err.is_business() {
        tracing::debug!(code = err.code(), error = %err, "Request rejected");
    } else {
        tracing::error!(code = err.code(), error = %err, "Server error in resolver");
    }
    ApiError(err).extend()
}

/// Parse a GraphQL `ID` into a typed row id.
pub(crate) fn parse_id<T: std::str::FromStr>(id: &ID, entity: &str) -> async_graphql::Result<T> {
    id.parse::<T>().map_err(|_| {
        api_error(Error::invalid_input(format!(
            "invalid {entity} id '{}'",
            id.as_str()
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonet_common::PlanetId;

    #[test]
    fn code_extension_is_set() {
        let err = ApiError(Error::not_found("Planet", 3)).extend();
        assert_eq!(err.message, "Planet with id 3 not found");
        let code = err
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(code, Some(async_graphql::Value::from("NOT_FOUND")));
    }

    #[test]
    fn parse_valid_id() {
        let id: PlanetId = parse_id(&ID::from("12"), "Planet").unwrap();
        assert_eq!(id.get(), 12);
    }

    #[test]
    fn parse_invalid_id() {
        let err = parse_id::<PlanetId>(&ID::from("hoth"), "Planet").unwrap_err();
        assert!(err.message.contains("invalid Planet id 'hoth'"));
    }
}
