use crate::configuration::{CorsConfiguration, ValidationError};
use crate::constants::{header, status};
use crate::context::RequestContext;
use crate::handler::{CorsRequest, CorsResponse, Handler};
use crate::header_builder::HeaderBuilder;
use crate::headers::Headers;
use crate::origin::AllowedOrigins;
use crate::policy::CorsPolicy;
use crate::result::{CorsDecision, CorsRejection, CorsResult};
use tracing::debug;

/// CORS middleware that evaluates requests against a [`CorsPolicy`] and a
/// [`CorsConfiguration`].
///
/// Configure it through the `&mut self` mutators, then share it (for
/// example behind an [`Arc`](std::sync::Arc)) to serve requests.
#[derive(Clone, Debug)]
pub struct CorsMiddleware {
    configuration: CorsConfiguration,
    policy: CorsPolicy,
}

impl Default for CorsMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl CorsMiddleware {
    /// Allows every origin.
    pub fn new() -> Self {
        Self::from_policy(CorsPolicy::AllowAll)
    }

    /// Uses `configuration` under [`CorsPolicy::AllowSpecific`].
    pub fn from_configuration(configuration: CorsConfiguration) -> Self {
        Self {
            configuration,
            policy: CorsPolicy::AllowSpecific,
        }
    }

    /// Same as [`CorsMiddleware::from_configuration`] after validating every entry.
    pub fn try_from_configuration(
        configuration: CorsConfiguration,
    ) -> Result<Self, ValidationError> {
        configuration.validate()?;
        Ok(Self::from_configuration(configuration))
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        let mut middleware = Self {
            configuration: CorsConfiguration::default(),
            policy,
        };
        if policy == CorsPolicy::AllowAll {
            middleware.allow_all_origins();
        }
        middleware
    }

    pub fn policy(&self) -> CorsPolicy {
        self.policy
    }

    pub fn configuration(&self) -> &CorsConfiguration {
        &self.configuration
    }

    pub fn set_configuration(&mut self, configuration: CorsConfiguration) {
        self.configuration = configuration;
    }

    /// Switching to [`CorsPolicy::AllowAll`] also resets the origins to any.
    pub fn set_policy(&mut self, policy: CorsPolicy) {
        self.policy = policy;
        if policy == CorsPolicy::AllowAll {
            self.allow_all_origins();
        }
    }

    pub fn allow_origin<S: Into<String>>(&mut self, origin: S) {
        self.configuration.origins.insert(origin);
    }

    pub fn allow_origins<I, S>(&mut self, origins: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configuration.origins.extend(origins);
    }

    pub fn allow_all_origins(&mut self) {
        self.configuration.origins = AllowedOrigins::any();
    }

    pub fn block_all_origins(&mut self) {
        self.configuration.origins.clear();
    }

    pub fn remove_origin(&mut self, origin: &str) {
        self.configuration.origins.remove(origin);
    }

    pub fn clear_origins(&mut self) {
        self.configuration.origins.clear();
    }

    pub fn allow_method<S: Into<String>>(&mut self, method: S) {
        self.configuration.methods.insert(method);
    }

    pub fn allow_methods<I, S>(&mut self, methods: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configuration.methods.extend(methods);
    }

    pub fn remove_method(&mut self, method: &str) {
        self.configuration.methods.remove(method);
    }

    pub fn remove_methods<I, S>(&mut self, methods: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for method in methods {
            self.configuration.methods.remove(method.as_ref());
        }
    }

    pub fn allow_header<S: Into<String>>(&mut self, header: S) {
        self.configuration.allow_headers.insert(header);
    }

    pub fn allow_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configuration.allow_headers.extend(headers);
    }

    pub fn remove_header(&mut self, header: &str) {
        self.configuration.allow_headers.remove(header);
    }

    pub fn remove_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for header in headers {
            self.configuration.allow_headers.remove(header.as_ref());
        }
    }

    pub fn expose_header<S: Into<String>>(&mut self, header: S) {
        self.configuration.expose_headers.insert(header);
    }

    pub fn expose_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configuration.expose_headers.extend(headers);
    }

    pub fn set_credentials(&mut self, enabled: bool) {
        self.configuration.credentials = enabled;
    }

    pub fn set_max_age(&mut self, seconds: u32) {
        self.configuration.max_age = seconds;
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.configuration.origins.allows(origin)
    }

    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.configuration.methods.contains(method)
    }

    pub fn is_header_allowed(&self, header: &str) -> bool {
        self.configuration.allow_headers.contains(header)
    }

    /// An empty `origin` means the request carried no `Origin` header.
    pub fn should_allow_request(&self, origin: &str) -> bool {
        self.policy.allows(origin, &self.configuration.origins)
    }

    /// `Access-Control-*` headers for a response to `origin`.
    pub fn cors_headers(&self, origin: &str) -> Headers {
        HeaderBuilder::new(&self.configuration)
            .build(origin)
            .into_headers()
    }

    pub fn set_cors_headers<R>(&self, response: &mut R, origin: &str)
    where
        R: CorsResponse + ?Sized,
    {
        response.apply_headers(&self.cors_headers(origin));
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let origin = request.origin();

        if !origin.is_empty() && !self.should_allow_request(origin) {
            debug!(
                origin,
                method = request.method,
                policy = ?self.policy,
                "cors origin rejected"
            );
            return CorsDecision::Rejected(CorsRejection::default());
        }

        let headers = self.cors_headers(origin);

        if request.is_options() {
            debug!(
                origin,
                policy = ?self.policy,
                "cors preflight answered"
            );
            CorsDecision::Preflight(CorsResult {
                headers,
                status: Some(status::NO_CONTENT),
                end_response: true,
            })
        } else {
            debug!(
                origin,
                method = request.method,
                policy = ?self.policy,
                "cors request allowed"
            );
            CorsDecision::Simple(CorsResult {
                headers,
                status: None,
                end_response: false,
            })
        }
    }
}

impl Handler for CorsMiddleware {
    fn handle(
        &self,
        request: &dyn CorsRequest,
        response: &mut dyn CorsResponse,
        next: &mut dyn FnMut(),
    ) {
        let context = RequestContext::new(request.method(), request.header(header::ORIGIN));

        match self.check(&context) {
            CorsDecision::Preflight(result) => {
                response.apply_headers(&result.headers);
                response.set_status(result.status.unwrap_or(status::NO_CONTENT));
            }
            CorsDecision::Simple(result) => {
                response.apply_headers(&result.headers);
                next();
            }
            CorsDecision::Rejected(rejection) => {
                response.end(rejection.status, rejection.message);
            }
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
