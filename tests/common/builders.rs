#![allow(dead_code)]

use super::mock::{MockRequest, Outcome, dispatch};
use cors_guard::constants::{header, method};
use cors_guard::{CorsConfiguration, CorsDecision, CorsMiddleware, CorsPolicy, RequestContext};

#[derive(Default)]
pub struct CorsBuilder {
    policy: Option<CorsPolicy>,
    origins: Option<Vec<String>>,
    any_origin: bool,
    methods: Option<Vec<String>>,
    allow_headers: Option<Vec<String>>,
    expose_headers: Option<Vec<String>>,
    credentials: Option<bool>,
    max_age: Option<u32>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: CorsPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(origins.into_iter().map(Into::into).collect());
        self
    }

    pub fn any_origin(mut self) -> Self {
        self.any_origin = true;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: u32) -> Self {
        self.max_age = Some(value);
        self
    }

    /// Builds from a configuration (`AllowSpecific`) and then applies the policy, if any.
    pub fn build(self) -> CorsMiddleware {
        let mut configuration = CorsConfiguration::default();
        if let Some(origins) = self.origins {
            configuration = configuration.with_origins(origins);
        }
        if self.any_origin {
            configuration = configuration.with_any_origin();
        }
        if let Some(methods) = self.methods {
            configuration = configuration.with_methods(methods);
        }
        if let Some(headers) = self.allow_headers {
            configuration = configuration.with_allow_headers(headers);
        }
        if let Some(headers) = self.expose_headers {
            configuration = configuration.with_expose_headers(headers);
        }
        if let Some(enabled) = self.credentials {
            configuration = configuration.with_credentials(enabled);
        }
        if let Some(seconds) = self.max_age {
            configuration = configuration.with_max_age(seconds);
        }

        let mut cors = CorsMiddleware::try_from_configuration(configuration)
            .expect("valid CORS configuration");
        if let Some(policy) = self.policy {
            cors.set_policy(policy);
        }
        cors
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &CorsMiddleware) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
        };
        cors.check(&ctx)
    }

    pub fn handle(self, cors: &CorsMiddleware) -> Outcome {
        let mut request = MockRequest::new(self.method);
        if let Some(origin) = self.origin {
            request = request.header(header::ORIGIN, origin);
        }
        dispatch(cors, &request)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
