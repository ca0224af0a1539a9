//! Bearer-token identity extractor.

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use vaxcamp_domain::user::UserRole;

use crate::token::validate_access_token;

/// JWT signing secret, exposed to the [`Identity`] extractor via `FromRef`.
///
/// Services store their secret in app state and implement
/// `FromRef<AppState> for JwtSecret` so the extractor can reach it.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Caller identity extracted from a validated `Authorization: Bearer` header.
///
/// Returns 401 if the header is absent or the token does not validate.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Rejection produced when bearer authentication fails.
#[derive(Debug, thiserror::Error)]
pub enum AuthRejection {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "INVALID_TOKEN",
            "message": self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = AuthRejection;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let token = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|Authorization(bearer)| bearer.token().to_owned());

        async move {
            let token = token.ok_or(AuthRejection::MissingToken)?;
            let info = validate_access_token(&token, &secret.0)
                .map_err(|_| AuthRejection::InvalidToken)?;
            let role = UserRole::from_u8(info.user_role).ok_or(AuthRejection::InvalidToken)?;
            Ok(Self {
                user_id: info.user_id,
                role,
            })
        }
    }
}
