//! Authorization middleware.
//!
//! Registered on every route but enforces nothing: requests pass through
//! whether or not they carry credentials.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
};
use std::future::{Ready, ready};

pub struct Authorization;

impl<S, B> Transform<S, ServiceRequest> for Authorization
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthorizationService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizationService { service }))
    }
}

pub struct AuthorizationService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthorizationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        tracing::trace!(
            has_credentials = req.headers().contains_key(header::AUTHORIZATION),
            path = %req.path(),
            "No authorization policy configured"
        );
        self.service.call(req)
    }
}
