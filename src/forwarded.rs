use crate::constants::header;
use crate::handler::CorsRequest;

/// Scheme the client used, as reported by a fronting proxy.
///
/// Checks `X-Forwarded-Proto`, then `X-Forwarded-Ssl: on`, then
/// `X-Forwarded-Port: 443`, and falls back to `http`.
pub fn detect_protocol<R: CorsRequest + ?Sized>(request: &R) -> String {
    if let Some(proto) = non_empty(request, header::X_FORWARDED_PROTO) {
        return proto.to_string();
    }
    if non_empty(request, header::X_FORWARDED_SSL) == Some("on") {
        return "https".to_string();
    }
    if non_empty(request, header::X_FORWARDED_PORT) == Some("443") {
        return "https".to_string();
    }
    "http".to_string()
}

/// The server's own origin (`scheme://host`) as seen by the client, or `None`
/// without a `Host` header.
pub fn server_origin<R: CorsRequest + ?Sized>(request: &R) -> Option<String> {
    let host = non_empty(request, header::HOST)?;
    Some(format!("{}://{}", detect_protocol(request), host))
}

fn non_empty<'a, R: CorsRequest + ?Sized>(request: &'a R, name: &str) -> Option<&'a str> {
    request.header(name).filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "forwarded_test.rs"]
mod forwarded_test;
