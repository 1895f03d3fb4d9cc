use crate::handler::{CorsRequest, CorsResponse};
use ::http::header::{HeaderName, HeaderValue};
use ::http::{Request, Response, StatusCode};
use tracing::warn;

impl<B> CorsRequest for Request<B> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn method(&self) -> &str {
        Request::method(self).as_str()
    }
}

impl<B> CorsResponse for Response<B>
where
    B: From<String>,
{
    fn set_header(&mut self, name: &str, value: &str) {
        match (
            HeaderName::try_from(name),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers_mut().insert(name, value);
            }
            _ => warn!(header = name, value, "skipping header that is not valid on the wire"),
        }
    }

    fn set_status(&mut self, status: u16) {
        match StatusCode::from_u16(status) {
            Ok(code) => *self.status_mut() = code,
            Err(_) => warn!(status, "ignoring invalid status code"),
        }
    }

    fn end(&mut self, status: u16, message: &str) {
        self.set_status(status);
        *self.body_mut() = B::from(message.to_string());
    }
}

#[cfg(test)]
#[path = "http_adapter_test.rs"]
mod http_adapter_test;
