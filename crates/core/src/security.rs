use crate::app_state::AppState;
use crate::services::auth_service::AuthService;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::HeaderMap;
use std::sync::Arc;
use walletos_primitives::error::{ApiError, AuthError};
use walletos_primitives::models::entities::user::User;

pub const SESSION_HEADER: &str = "x-session-id";

/// The authenticated user, attached as a request Extension by the session
/// middleware.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

fn extract_session_id(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = headers
        .get(SESSION_HEADER)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MissingHeader)?
        .trim();

    if value.is_empty() {
        return Err(AuthError::MissingHeader);
    }

    Ok(value.to_string())
}

pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let session_id = extract_session_id(req.headers())
        .map_err(|e| ApiError::from(e).into_response())?;

    let user = AuthService::validate_session(&state, &session_id)
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn missing_header_is_rejected() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_session_id(&headers),
            Err(AuthError::MissingHeader)
        ));
    }

    #[test]
    fn blank_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_static("   "));
        assert!(matches!(
            extract_session_id(&headers),
            Err(AuthError::MissingHeader)
        ));
    }

    #[test]
    fn session_id_is_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_static(" abc123 "));
        assert_eq!(extract_session_id(&headers).unwrap(), "abc123");
    }
}
