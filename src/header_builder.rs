use crate::configuration::CorsConfiguration;
use crate::constants::header;
use crate::headers::HeaderCollection;

pub(crate) struct HeaderBuilder<'a> {
    configuration: &'a CorsConfiguration,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(configuration: &'a CorsConfiguration) -> Self {
        Self { configuration }
    }

    /// Full header set, in the order the headers are written to a response.
    pub(crate) fn build(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.extend(self.build_origin_header(origin));
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers());
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_max_age_header());
        headers.extend(self.build_exposed_headers());
        headers
    }

    pub(crate) fn build_origin_header(&self, origin: &str) -> HeaderCollection {
        match self.configuration.origins.header_value(origin) {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                headers
            }
            None => HeaderCollection::with_estimate(0),
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.configuration.methods.header_value(),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.configuration.allow_headers.header_value(),
        );
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.configuration.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderCollection::with_estimate(0)
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.configuration.max_age.to_string(),
        );
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if self.configuration.expose_headers.is_empty() {
            return HeaderCollection::with_estimate(0);
        }
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.configuration.expose_headers.header_value(),
        );
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
