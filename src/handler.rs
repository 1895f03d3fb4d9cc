use crate::headers::Headers;

/// Read access to the incoming request.
pub trait CorsRequest {
    /// Header value by case-insensitive name, `None` when absent or not valid text.
    fn header(&self, name: &str) -> Option<&str>;

    fn method(&self) -> &str;
}

/// Write access to the outgoing response.
pub trait CorsResponse {
    fn set_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, status: u16);

    /// Finishes the response with `status` and a plain-text `message` body.
    fn end(&mut self, status: u16, message: &str);

    fn apply_headers(&mut self, headers: &Headers) {
        for (name, value) in headers {
            self.set_header(name, value);
        }
    }
}

/// A pipeline stage that may hand control to the next stage through `next`.
///
/// Object safe, so stages of different types can share one
/// `Vec<Box<dyn Handler>>` pipeline.
pub trait Handler {
    fn handle(
        &self,
        request: &dyn CorsRequest,
        response: &mut dyn CorsResponse,
        next: &mut dyn FnMut(),
    );
}

impl<T: Handler + ?Sized> Handler for std::sync::Arc<T> {
    fn handle(
        &self,
        request: &dyn CorsRequest,
        response: &mut dyn CorsResponse,
        next: &mut dyn FnMut(),
    ) {
        (**self).handle(request, response, next)
    }
}

impl<T: Handler + ?Sized> Handler for Box<T> {
    fn handle(
        &self,
        request: &dyn CorsRequest,
        response: &mut dyn CorsResponse,
        next: &mut dyn FnMut(),
    ) {
        (**self).handle(request, response, next)
    }
}
