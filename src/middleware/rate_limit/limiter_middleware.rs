use crate::helpers::JsonResponse;
use crate::middleware::rate_limit::*;
use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse},
    http::StatusCode,
    Error,
};
use futures::{
    future::{FutureExt, LocalBoxFuture},
    task::{Context, Poll},
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

pub struct RateLimitMiddleware<S> {
    pub service: S,
    pub limiter: Arc<RateLimiter>,
}

fn client_key(req: &ServiceRequest) -> String {
    // forwarding headers are client controlled, only the socket peer counts
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let key = client_key(&req);

        match self.limiter.check(&key, Instant::now()) {
            Ok(()) => {
                let fut = self.service.call(req);
                async move { Ok(fut.await?.map_into_left_body()) }.boxed_local()
            }
            Err(retry_after) => {
                tracing::warn!(client = %key, path = %req.path(), "Rate limit exceeded");
                // must be Ok: Cors skips error responses
                let response = JsonResponse::build()
                    .set_details(json!({ "retryAfterSecs": retry_after.as_secs() }))
                    .to_response(
                        StatusCode::TOO_MANY_REQUESTS,
                        "Too many requests, please try again later",
                    );
                let res = req.into_response(response).map_into_right_body();
                async move { Ok(res) }.boxed_local()
            }
        }
    }
}
