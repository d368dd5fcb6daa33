use crate::app_state::AppState;
use crate::repositories::magic_link_repository::MagicLinkRepository;
use crate::repositories::session_repository::SessionRepository;
use crate::repositories::user_repository::UserRepository;
use chrono::{Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{info, warn};
use walletos_primitives::error::{ApiError, AuthError};
use walletos_primitives::models::dtos::auth_dto::{LoginRequest, VerifyCodeRequest};
use walletos_primitives::models::entities::session::MagicLink;
use walletos_primitives::models::entities::user::User;

const TOKEN_LEN: usize = 32;

pub struct AuthService;

impl AuthService {
    /// Find-or-create the user and issue a fresh magic link. Proves nothing
    /// yet; the session is only created on verification.
    pub async fn request_login(state: &AppState, payload: LoginRequest) -> Result<(), ApiError> {
        let payload = payload.normalize();

        let mut conn = state.db.get().map_err(ApiError::from)?;
        let user = UserRepository::find_or_create(
            &mut conn,
            &payload.email,
            payload.name.as_deref(),
        )?;

        let token = generate_token();
        let expires_at = Utc::now() + Duration::minutes(state.config.magic_link_ttl_minutes);
        MagicLinkRepository::create(&mut conn, &user.email, &token, expires_at)?;

        let code = derive_code(&token);
        let url = format!("{}/api/auth/verify?token={}", state.config.app_url, token);

        if state.email.is_configured() {
            let body = format!(
                "Sign in to Wallet OS:\n\n{url}\n\nOr enter this code: {code}\n\nThe link and code expire in {} minutes.",
                state.config.magic_link_ttl_minutes
            );
            if let Err(e) = state
                .email
                .send_email(&user.email, "Your Wallet OS sign-in link", &body)
                .await
            {
                warn!(email = %user.email, "Magic link email failed: {}", e);
                return Err(e);
            }
        } else {
            info!(email = %user.email, %url, %code, "Mail not configured; magic link logged");
        }

        Ok(())
    }

    /// Clickable-link path: the token itself is presented.
    pub async fn verify_by_link(state: &AppState, token: &str) -> Result<(String, User), ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        let link = MagicLinkRepository::find_usable_by_token(&mut conn, token.trim())?
            .ok_or(AuthError::InvalidOrExpiredToken)?;

        Self::consume_and_open_session(state, &mut conn, link)
    }

    /// Typed-code path. The OTP is never stored; every unused, unexpired link
    /// for the email re-derives its code for comparison. First match wins.
    pub async fn verify_by_code(
        state: &AppState,
        payload: VerifyCodeRequest,
    ) -> Result<(String, User), ApiError> {
        let payload = payload.normalize();
        let wanted = normalize_code(&payload.code);

        let mut conn = state.db.get().map_err(ApiError::from)?;
        let candidates = MagicLinkRepository::find_usable_by_email(&mut conn, &payload.email)?;

        let link = candidates
            .into_iter()
            .find(|l| normalize_code(&derive_code(&l.token)) == wanted)
            .ok_or(AuthError::InvalidOrExpiredToken)?;

        Self::consume_and_open_session(state, &mut conn, link)
    }

    fn consume_and_open_session(
        state: &AppState,
        conn: &mut diesel::PgConnection,
        link: MagicLink,
    ) -> Result<(String, User), ApiError> {
        // Single-use: a concurrent verification of the same link loses here.
        if !MagicLinkRepository::consume(conn, link.id)? {
            return Err(AuthError::InvalidOrExpiredToken.into());
        }

        let user = UserRepository::find_by_email(conn, &link.email)?
            .ok_or(AuthError::InvalidOrExpiredToken)?;

        let session_id = generate_token();
        let expires_at = Utc::now() + Duration::days(state.config.session_ttl_days);
        SessionRepository::create(conn, &session_id, user.id, expires_at)?;

        info!(user_id = %user.id, "Login verified, session opened");
        Ok((session_id, user))
    }

    /// Gate for every protected request. Expired sessions are deleted on
    /// detection.
    pub async fn validate_session(state: &AppState, session_id: &str) -> Result<User, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        let session = SessionRepository::find(&mut conn, session_id)
            .map_err(classify_session_lookup_error)?
            .ok_or(AuthError::UnknownSession)?;

        if session.expires_at <= Utc::now() {
            SessionRepository::delete(&mut conn, session_id)?;
            return Err(AuthError::ExpiredSession.into());
        }

        UserRepository::find_by_id(&mut conn, session.user_id)?
            .ok_or_else(|| AuthError::UnknownSession.into())
    }

    pub async fn logout(state: &AppState, session_id: &str) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        SessionRepository::delete(&mut conn, session_id)
    }
}

/// An absent sessions relation means migrations were never applied; surface
/// that as an operational hint instead of a generic 401.
fn classify_session_lookup_error(err: diesel::result::Error) -> ApiError {
    if let diesel::result::Error::DatabaseError(_, ref info) = err {
        let message = info.message();
        if message.contains("sessions") && message.contains("does not exist") {
            return AuthError::SessionsTableMissing.into();
        }
    }
    ApiError::from(err)
}

pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Human-typable code derived from a token: first six characters, uppercased,
/// split into two groups of three. One token serves both the clickable link
/// and the typed code.
pub fn derive_code(token: &str) -> String {
    let upper: String = token.chars().take(6).collect::<String>().to_uppercase();
    format!("{}-{}", &upper[..3], &upper[3..])
}

/// Strips whitespace and hyphens and uppercases, so "k7m 3qx" and "K7M-3QX"
/// compare equal.
pub fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_uppercase()
}
