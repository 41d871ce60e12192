use miette::Diagnostic;
use smol_str::SmolStr;
use thiserror::Error;

use crate::codec::DecodeError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors emitted while building or checking client assertions.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Malformed base64url input
    #[error(transparent)]
    #[diagnostic(
        code(tomo_oauth::decode),
        help("base64url uses `-` and `_`; padding is optional")
    )]
    Decode(#[from] DecodeError),
    /// The `secret_key` blob is not a base64url-encoded private JWK
    #[error("failed to decode base64url JWK: {0}")]
    #[diagnostic(
        code(tomo_oauth::key_decode),
        help("secret_key must be a base64url-encoded JSON private JWK (kty, crv, x, y, d)")
    )]
    KeyDecode(#[source] BoxError),
    /// The JWK parsed but is not a usable P-256 private key
    #[error("invalid key material: {0}")]
    #[diagnostic(
        code(tomo_oauth::key_construction),
        help("Ensure EC P-256 JWK with base64url x,y,d values")
    )]
    KeyConstruction(SmolStr),
    /// Signing error
    #[error("signing error: {0}")]
    #[diagnostic(
        code(tomo_oauth::signing),
        help("Check ES256 key material and input payloads")
    )]
    Signing(SmolStr),
    /// `iat` is so large that `exp` cannot be represented
    #[error("issue time {issued_at} is out of range for an expiring assertion")]
    #[diagnostic(
        code(tomo_oauth::issued_at_out_of_range),
        help("pass a Unix timestamp in seconds")
    )]
    IssuedAtOutOfRange { issued_at: i64 },
    /// Serialization error
    #[error(transparent)]
    #[diagnostic(code(tomo_oauth::serde))]
    Serde(#[from] serde_json::Error),
    /// JWT is not three base64url segments separated by dots
    #[error("malformed JWT: {0}")]
    #[diagnostic(code(tomo_oauth::malformed_token))]
    MalformedToken(SmolStr),
    /// Header names an algorithm other than ES256
    #[error("unsupported algorithm: {alg}")]
    #[diagnostic(code(tomo_oauth::unsupported_algorithm))]
    UnsupportedAlgorithm { alg: SmolStr },
    /// Signature does not verify against the given key
    #[error("invalid signature")]
    #[diagnostic(code(tomo_oauth::invalid_signature))]
    InvalidSignature,
}

impl Error {
    pub(crate) fn key_decode(source: impl Into<BoxError>) -> Self {
        Self::KeyDecode(source.into())
    }

    pub(crate) fn key_construction(msg: impl Into<SmolStr>) -> Self {
        Self::KeyConstruction(msg.into())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
