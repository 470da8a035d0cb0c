use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::header::HeaderValue;
use http::Request as HttpRequest;
use http::Response as HttpResponse;
use http_body_util::combinators::UnsyncBoxBody;
use tonic::Status;
use tower::{Layer, Service};

use crate::services::auth_service::{decode_token, Claims};

/// Authenticated user info injected by the auth middleware into request extensions.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Public paths that do not require JWT authentication
const PUBLIC_PATHS: &[&str] = &[
    "/pharmacy.auth.AuthService/Login",
    "/pharmacy.auth.AuthService/ValidateToken",
    "/grpc.health.v1.Health/Check",
    "/grpc.health.v1.Health/Watch",
    "/grpc.reflection.v1.ServerReflection/ServerReflectionInfo",
    "/grpc.reflection.v1alpha.ServerReflection/ServerReflectionInfo",
];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|p| path == *p)
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&HeaderValue>) -> Option<&str> {
    header
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[derive(Clone)]
pub struct AuthLayer {
    jwt_secret: String,
}

impl AuthLayer {
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            jwt_secret: self.jwt_secret.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    jwt_secret: String,
}

type BoxBody = UnsyncBoxBody<bytes::Bytes, Status>;

fn grpc_status_response(status: Status) -> HttpResponse<BoxBody> {
    let mut response = HttpResponse::new(UnsyncBoxBody::default());
    let headers = response.headers_mut();
    headers.insert("content-type", HeaderValue::from_static("application/grpc"));
    headers.insert("grpc-status", HeaderValue::from(status.code() as i32));
    if let Ok(val) = HeaderValue::from_str(status.message()) {
        headers.insert("grpc-message", val);
    }
    response
}

impl<S, ReqBody> Service<HttpRequest<ReqBody>> for AuthMiddleware<S>
where
    S: Service<HttpRequest<ReqBody>, Response = HttpResponse<BoxBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ReqBody: Send + 'static,
{
    type Response = HttpResponse<BoxBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: HttpRequest<ReqBody>) -> Self::Future {
        let mut inner = self.inner.clone();
        std::mem::swap(&mut self.inner, &mut inner);

        let jwt_secret = self.jwt_secret.clone();

        Box::pin(async move {
            if is_public_path(req.uri().path()) {
                return inner.call(req).await;
            }

            let claims = bearer_token(req.headers().get("authorization"))
                .and_then(|token| decode_token(token, &jwt_secret));

            match claims {
                Some(claims) => {
                    req.extensions_mut().insert(AuthenticatedUser::from(claims));
                    inner.call(req).await
                }
                None => {
                    tracing::debug!("Rejected unauthenticated call to {}", req.uri().path());
                    Ok(grpc_status_response(Status::unauthenticated(
                        "Missing or invalid bearer token",
                    )))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/pharmacy.auth.AuthService/Login"));
        assert!(is_public_path("/grpc.health.v1.Health/Check"));
        assert!(!is_public_path("/pharmacy.auth.AuthService/CreateUser"));
        assert!(!is_public_path("/pharmacy.items.ItemsService/ListItems"));
    }

    #[test]
    fn test_bearer_token() {
        let value = HeaderValue::from_static("Bearer abc.def.ghi");
        assert_eq!(bearer_token(Some(&value)), Some("abc.def.ghi"));

        let basic = HeaderValue::from_static("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(Some(&basic)), None);

        let empty = HeaderValue::from_static("Bearer ");
        assert_eq!(bearer_token(Some(&empty)), None);
        assert_eq!(bearer_token(None), None);
    }

    #[test]
    fn test_grpc_status_response_headers() {
        let response = grpc_status_response(Status::unauthenticated("nope"));
        assert_eq!(response.headers()["grpc-status"], "16");
        assert_eq!(response.headers()["grpc-message"], "nope");
    }

    #[test]
    fn test_admin_role() {
        let user = AuthenticatedUser {
            user_id: "u".into(),
            email: "a@b.c".into(),
            role: "admin".into(),
        };
        assert!(user.is_admin());
    }
}
