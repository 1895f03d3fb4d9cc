use crate::constants::{DEFAULT_MAX_AGE, header, method};
use crate::origin::AllowedOrigins;
use crate::token_list::TokenList;
use crate::util::{is_http_token, is_origin_value};
use thiserror::Error;

/// Settings that drive origin checks and the emitted `Access-Control-*` headers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CorsConfiguration {
    pub origins: AllowedOrigins,
    pub methods: TokenList,
    pub allow_headers: TokenList,
    pub expose_headers: TokenList,
    pub credentials: bool,
    /// Preflight cache lifetime in seconds.
    pub max_age: u32,
}

impl Default for CorsConfiguration {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::default(),
            methods: TokenList::list([
                method::GET,
                method::POST,
                method::PUT,
                method::DELETE,
                method::OPTIONS,
                method::PATCH,
            ]),
            allow_headers: TokenList::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
                header::ORIGIN,
            ]),
            expose_headers: TokenList::list([header::CONTENT_LENGTH, header::CONTENT_TYPE]),
            credentials: false,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl CorsConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = AllowedOrigins::list(origins);
        self
    }

    pub fn with_any_origin(mut self) -> Self {
        self.origins = AllowedOrigins::any();
        self
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = TokenList::list(methods);
        self
    }

    pub fn with_allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = TokenList::list(headers);
        self
    }

    pub fn with_expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = TokenList::list(headers);
        self
    }

    pub fn with_credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn with_max_age(mut self, seconds: u32) -> Self {
        self.max_age = seconds;
        self
    }

    /// Checks that every entry can be written as a header value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(origin) = self.origins.iter().find(|origin| !is_origin_value(origin)) {
            return Err(ValidationError::InvalidOrigin(origin.to_string()));
        }

        if let Some(method) = self.methods.iter().find(|method| !is_http_token(method)) {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let Some(name) = self.allow_headers.iter().find(|name| !is_http_token(name)) {
            return Err(ValidationError::InvalidAllowHeader(name.to_string()));
        }

        if let Some(name) = self.expose_headers.iter().find(|name| !is_http_token(name)) {
            return Err(ValidationError::InvalidExposeHeader(name.to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The origin '{0}' must be a non-empty value without whitespace or commas.")]
    InvalidOrigin(String),
    #[error("The method '{0}' is not a valid HTTP method token.")]
    InvalidMethod(String),
    #[error("The allowed header '{0}' is not a valid HTTP header name.")]
    InvalidAllowHeader(String),
    #[error("The exposed header '{0}' is not a valid HTTP header name.")]
    InvalidExposeHeader(String),
}

#[cfg(test)]
#[path = "configuration_test.rs"]
mod configuration_test;
