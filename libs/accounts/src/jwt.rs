//! Auth token issuance
//!
//! Mints the HS256-signed token a user record carries to other services.
//! The token has no expiry, audience, or issuer claim; verification lives
//! in a separate secret-holding process.

use anyhow::Result;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::models::{Address, Role, User};

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret for signing tokens
    pub secret: String,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_SECRET`: shared secret used to sign auth tokens
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable not set"))?;

        Ok(JwtConfig { secret })
    }
}

/// Claims carried by an auth token
///
/// Exactly the record fields a verifying service may see. The password
/// hash and timestamps never leave the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthClaims {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub cnic: String,
    pub address: Address,
    pub role: Role,
}

impl From<&User> for AuthClaims {
    fn from(user: &User) -> Self {
        AuthClaims {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            country_code: user.country_code.clone(),
            cnic: user.cnic.clone(),
            address: user.address.clone(),
            role: user.role,
        }
    }
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
}

impl JwtService {
    /// Initialize a new JWT service with an injected secret
    pub fn new(config: &JwtConfig) -> Self {
        JwtService {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Generate an auth token for a persisted user record
    pub fn generate_auth_token(&self, user: &User) -> Result<String> {
        let claims = AuthClaims::from(user);
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        info!(user_id = %user.id, "Issued auth token");

        Ok(token)
    }
}
