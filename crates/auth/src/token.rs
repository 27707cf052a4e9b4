//! JWT access tokens for authenticated calls.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use postboard_config::AuthConfig;
use postboard_domain::{TokenError, TokenIssuer, UserId};

/// JWT claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the user identifier.
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
    pub aud: String,
    /// Unique token identifier.
    pub jti: String,
}

/// Issues and validates HS256 access tokens.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    token_ttl: Duration,
}

impl JwtTokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            token_ttl: Duration::from_secs(config.token_ttl_seconds),
        }
    }

    /// Generate a new access token for the given user.
    pub fn issue_token(&self, user_id: &UserId) -> Result<String, TokenError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TokenError::Creation("system time error".to_string()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + self.token_ttl).as_secs() as usize,
            iat: now.as_secs() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Creation(e.to_string()))
    }

    /// Validate and decode a token, checking signature, expiry, issuer, and
    /// audience.
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        Ok(token_data.claims)
    }

    /// Validate a token and return the user id carried in its subject.
    pub fn subject(&self, token: &str) -> Result<UserId, TokenError> {
        let claims = self.validate_token(token)?;
        if claims.sub.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        claims
            .sub
            .parse()
            .map_err(|_| TokenError::Invalid("token subject is not a valid user id".to_string()))
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user_id: &UserId) -> Result<String, TokenError> {
        self.issue_token(user_id)
    }
}
