use crate::common::ApiError;
use crate::domains::auth::{JwtService, COULD_NOT_VALIDATE};
use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authenticated user information from JWT
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub username: String,
    pub id: i64,
}

/// JWT authentication middleware
///
/// Requests without an `Authorization` header pass through anonymously. A
/// header that is present must carry a valid `Bearer` token; anything else is
/// rejected with 401 before reaching the handler.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match extract_auth_user(&request, &jwt_service) {
        Ok(Some(user)) => {
            debug!(username = %user.username, user_id = user.id, "Authenticated request");
            request.extensions_mut().insert(user);
        }
        Ok(None) => debug!("Anonymous request"),
        Err(e) => return e.into_response(),
    }

    next.run(request).await
}

/// Verify the bearer token in the `Authorization` header, if any.
fn extract_auth_user(
    request: &Request<Body>,
    jwt_service: &JwtService,
) -> Result<Option<AuthUser>, ApiError> {
    let Some(header) = request.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            warn!("Malformed Authorization header");
            ApiError::unauthorized(COULD_NOT_VALIDATE)
        })?;

    let claims = jwt_service.verify_token(token).map_err(|e| {
        warn!(error = %e, "Rejected bearer token");
        ApiError::unauthorized(COULD_NOT_VALIDATE)
    })?;

    Ok(Some(AuthUser {
        username: claims.sub,
        id: claims.id,
    }))
}

/// Handlers that take `AuthUser` require a verified token; 401 otherwise.
/// Take `Option<AuthUser>` for endpoints where authentication is optional.
#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized(COULD_NOT_VALIDATE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_service() -> JwtService {
        JwtService::new(
            "test_secret",
            "test_issuer".to_string(),
            chrono::Duration::minutes(30),
        )
    }

    fn request_with_header(value: &str) -> Request<Body> {
        Request::builder()
            .header(AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = jwt_service();
        let token = jwt_service.create_token("codingwithroby", 12).unwrap();

        let request = request_with_header(&format!("Bearer {}", token));

        let auth_user = extract_auth_user(&request, &jwt_service).unwrap();
        assert_eq!(
            auth_user,
            Some(AuthUser {
                username: "codingwithroby".to_string(),
                id: 12,
            })
        );
    }

    #[test]
    fn test_raw_token_without_scheme_is_rejected() {
        let jwt_service = jwt_service();
        let token = jwt_service.create_token("codingwithroby", 12).unwrap();

        let result = extract_auth_user(&request_with_header(&token), &jwt_service);
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_no_auth_header() {
        let jwt_service = jwt_service();
        let request = Request::builder().body(Body::empty()).unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service).unwrap();
        assert!(auth_user.is_none());
    }

    #[test]
    fn test_invalid_token() {
        let jwt_service = jwt_service();
        let request = request_with_header("Bearer invalid_token");

        let result = extract_auth_user(&request, &jwt_service);
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_token() {
        let expired = JwtService::new(
            "test_secret",
            "test_issuer".to_string(),
            chrono::Duration::minutes(-10),
        );
        let token = expired.create_token("codingwithroby", 12).unwrap();

        let result = extract_auth_user(
            &request_with_header(&format!("Bearer {}", token)),
            &jwt_service(),
        );
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_extractor_rejects_missing_user() {
        let (mut parts, _) = axum::http::Request::builder()
            .body(())
            .unwrap()
            .into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
