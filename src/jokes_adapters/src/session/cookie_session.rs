use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use chrono::Utc;
use jokes_core::{UserError, UserId};
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secret: Secret<String>,
    pub ttl_in_seconds: i64,
    pub secure: bool,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing session cookie")]
    MissingToken,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),
    #[error("Invalid session subject: {0}")]
    InvalidSubject(#[from] UserError),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Stateless sessions: the user id lives in a signed JWT inside a cookie.
#[derive(Clone)]
pub struct SessionManager {
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Build the cookie that starts a session for `user_id`.
    pub fn issue_cookie(&self, user_id: UserId) -> Result<Cookie<'static>, SessionError> {
        let token = self.generate_token(user_id)?;
        Ok(self.session_cookie(token))
    }

    /// Read the user id from the session cookie.
    ///
    /// Missing, tampered, and expired cookies all read as anonymous.
    pub fn read_user_id(&self, jar: &CookieJar) -> Option<UserId> {
        let token = jar.get(&self.config.cookie_name)?.value();

        match self.decode_token(token) {
            Ok(user_id) => Some(user_id),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid session cookie");
                None
            }
        }
    }

    /// Cookie that makes the browser drop the session.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.session_cookie(String::new());
        cookie.make_removal();
        cookie
    }

    pub fn generate_token(&self, user_id: UserId) -> Result<String, SessionError> {
        let delta = chrono::Duration::try_seconds(self.config.ttl_in_seconds).ok_or(
            SessionError::UnexpectedError("Failed to create session duration".to_string()),
        )?;

        let exp = Utc::now()
            .checked_add_signed(delta)
            .ok_or(SessionError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let exp: usize = exp
            .try_into()
            .map_err(|_| SessionError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret()),
        )
        .map_err(SessionError::TokenError)
    }

    pub fn decode_token(&self, token: &str) -> Result<UserId, SessionError> {
        if token.is_empty() {
            return Err(SessionError::MissingToken);
        }

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret()),
            &Validation::default(),
        )?
        .claims;

        Ok(UserId::parse(&claims.sub)?)
    }

    fn secret(&self) -> &[u8] {
        self.config.secret.expose_secret().as_bytes()
    }

    fn session_cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build((self.config.cookie_name.clone(), value))
            .path("/")
            .http_only(true)
            .secure(self.config.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(self.config.ttl_in_seconds))
            .build()
    }
}
