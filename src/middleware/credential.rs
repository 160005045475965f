use axum::{extract::FromRequestParts, http::header};

use crate::{error::AppError, models::Credential};

/// The caller's session token, taken from `Authorization: Bearer <token>`.
/// A request without the header is anonymous rather than rejected.
#[derive(Debug, Clone)]
pub struct SessionCredential(pub Option<Credential>);

impl<S> FromRequestParts<S> for SessionCredential
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(SessionCredential(None));
        };

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Authorization header".into()))?;

        let Some(token) = auth_str.strip_prefix("Bearer ") else {
            return Err(AppError::BadRequest("Invalid Authorization scheme".into()));
        };

        Ok(SessionCredential(Credential::new(token)))
    }
}
