use std::future::Future;
use std::pin::Pin;

use cors_guard::constants::header;
use cors_guard::{CorsDecision, CorsRequest, CorsResponse, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper service that answers preflights and rejections itself and forwards
/// every other request to `inner`.
#[derive(Clone)]
pub struct CorsService<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> CorsService<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsService<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let decision = {
            let context = RequestContext::new(req.method().as_str(), req.header(header::ORIGIN));
            self.cors.check(&context)
        };

        match decision {
            CorsDecision::Preflight(result) => Box::pin(async move {
                let mut response = Response::new(CorsBody::default());
                response.apply_headers(&result.headers);
                if let Some(status) = result.status {
                    response.set_status(status);
                }
                Ok(response)
            }),
            CorsDecision::Simple(result) => {
                let inner = self.inner.clone();
                Box::pin(async move {
                    let mut response = inner.call(req).await?;
                    response.apply_headers(&result.headers);
                    Ok(response)
                })
            }
            CorsDecision::Rejected(rejection) => Box::pin(async move {
                let mut response = Response::new(CorsBody::default());
                response.end(rejection.status, rejection.message);
                Ok(response)
            }),
        }
    }
}
