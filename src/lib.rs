pub mod constants;
mod configuration;
mod context;
mod cors;
mod forwarded;
mod handler;
mod header_builder;
mod headers;
#[cfg(feature = "http")]
mod http_adapter;
mod origin;
mod policy;
mod result;
mod token_list;
mod util;

pub use configuration::{CorsConfiguration, ValidationError};
pub use context::RequestContext;
pub use cors::CorsMiddleware;
pub use forwarded::{detect_protocol, server_origin};
pub use handler::{CorsRequest, CorsResponse, Handler};
pub use headers::Headers;
pub use origin::AllowedOrigins;
pub use policy::CorsPolicy;
pub use result::{CorsDecision, CorsRejection, CorsResult};
pub use token_list::TokenList;
