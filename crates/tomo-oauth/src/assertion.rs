//! `private_key_jwt` client assertions (RFC 7523 §2.2).

use std::fmt;

use chrono::Utc;
use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::Result;
use crate::jose::{ClientAssertionClaims, JwsHeader, create_signed_jwt};
use crate::jwk::ClientKey;

/// Path of the token endpoint, relative to the authorization server origin.
pub const TOKEN_ENDPOINT_PATH: &str = "/v1/oauth2/token";

/// Token endpoint URL for `base_url`. Used as the assertion audience.
///
/// `base_url` is taken verbatim: a trailing slash is not stripped.
pub fn token_endpoint(base_url: &str) -> String {
    format!("{base_url}{TOKEN_ENDPOINT_PATH}")
}

/// Inputs for [`create_client_assertion`].
#[derive(Clone, PartialEq, Eq, Deserialize, bon::Builder)]
pub struct ClientAssertionOptions {
    /// Client identifier, used as both `iss` and `sub`.
    #[builder(into)]
    pub client_id: SmolStr,
    /// base64url-encoded JSON private JWK (EC P-256).
    #[builder(into)]
    pub secret_key: SmolStr,
    /// Authorization server origin, e.g. `https://auth.example.com`.
    #[builder(into)]
    pub base_url: SmolStr,
}

impl fmt::Debug for ClientAssertionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientAssertionOptions")
            .field("client_id", &self.client_id)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Build and sign a client assertion issued now.
///
/// The key is decoded and the JWT signed on every call; nothing is cached.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(client_id = %options.client_id)))]
pub fn create_client_assertion(options: &ClientAssertionOptions) -> Result<String> {
    create_client_assertion_at(options, Utc::now().timestamp())
}

/// As [`create_client_assertion`], with `iat` fixed to `issued_at` (Unix seconds).
pub fn create_client_assertion_at(
    options: &ClientAssertionOptions,
    issued_at: i64,
) -> Result<String> {
    let key = ClientKey::from_encoded_jwk(&options.secret_key)?;
    let claims = ClientAssertionClaims::new(
        options.client_id.clone(),
        token_endpoint(&options.base_url),
        issued_at,
        generate_jti(),
    )?;
    let assertion = create_signed_jwt(&key, &JwsHeader::from(key.algorithm()), &claims)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(aud = %claims.aud, jti = %claims.jti, exp = claims.exp, "signed client assertion");
    Ok(assertion)
}

#[inline]
pub(crate) fn generate_jti() -> SmolStr {
    SmolStr::new(uuid::Uuid::new_v4().to_string())
}
