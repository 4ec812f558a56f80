use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::{config::JwtConfig, state::AppState};

/// Why a token failed verification. Tampering and staleness are distinct
/// kinds; anything structurally wrong is `Malformed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

/// JWT payload: the subject's id and email plus the time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs((ttl_minutes as u64) * 60),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: Uuid, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            email: email.to_owned(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        // jsonwebtoken defaults to 60s of leeway; expiry here is exact.
        validation.leeway = 0;
        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id, "ann@x.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "ann@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn expired_token_fails_with_expired() {
        let keys = make_keys();
        let past = (OffsetDateTime::now_utc() - TimeDuration::hours(2)).unix_timestamp() as usize;
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "ann@x.com".into(),
            iat: past,
            exp: past + 60,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert_eq!(keys.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[tokio::test]
    async fn tampered_signature_fails_with_invalid_signature() {
        let keys = make_keys();
        let token = keys.sign(Uuid::new_v4(), "ann@x.com").expect("sign");
        // flip the first character of the signature segment; the token stays
        // structurally valid base64 but the signature no longer matches
        let dot = token.rfind('.').expect("three segments");
        let mut chars: Vec<char> = token.chars().collect();
        let target = &mut chars[dot + 1];
        *target = if *target == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();
        assert_eq!(
            keys.verify(&tampered).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[tokio::test]
    async fn wrong_secret_fails_with_invalid_signature() {
        let keys = make_keys();
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"another-secret"),
            decoding: DecodingKey::from_secret(b"another-secret"),
            ttl: Duration::from_secs(300),
        };
        let token = other.sign(Uuid::new_v4(), "ann@x.com").expect("sign");
        assert_eq!(
            keys.verify(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[tokio::test]
    async fn garbage_fails_with_malformed() {
        let keys = make_keys();
        assert_eq!(keys.verify("not-a-token").unwrap_err(), TokenError::Malformed);
        assert_eq!(
            keys.verify("still.not.a.token").unwrap_err(),
            TokenError::Malformed
        );
        assert_eq!(keys.verify("").unwrap_err(), TokenError::Malformed);
    }
}
