/// Borrowed view of the request fields the CORS decision depends on.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }

    /// The `Origin` header value, empty when the header is absent.
    pub fn origin(&self) -> &'a str {
        self.origin.unwrap_or_default()
    }

    pub fn is_options(&self) -> bool {
        self.method == crate::constants::method::OPTIONS
    }
}
