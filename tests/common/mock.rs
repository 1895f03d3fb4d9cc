#![allow(dead_code)]

use cors_guard::{CorsRequest, CorsResponse, Handler};
use std::cell::Cell;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MockRequest {
    pub method: String,
    pub headers: Vec<(String, String)>,
}

impl MockRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl CorsRequest for MockRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn method(&self) -> &str {
        &self.method
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    pub headers: HashMap<String, String>,
    pub status: Option<u16>,
    pub body: Option<String>,
    pub ended: bool,
}

impl CorsResponse for MockResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn end(&mut self, status: u16, message: &str) {
        self.status = Some(status);
        self.body = Some(message.to_string());
        self.ended = true;
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub response: MockResponse,
    pub next_called: bool,
}

pub fn dispatch<H: Handler + ?Sized>(handler: &H, request: &MockRequest) -> Outcome {
    let mut response = MockResponse::default();
    let next_called = Cell::new(false);
    handler.handle(request, &mut response, &mut || next_called.set(true));
    Outcome {
        response,
        next_called: next_called.get(),
    }
}
