//! Client signing keys supplied as base64url-encoded private JWKs.

use std::fmt;

use jose_jwa::{Algorithm, Signing};
use jose_jwk::{Ec, EcCurves, Jwk, Key, crypto};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use signature::Signer;
use smol_str::format_smolstr;

use crate::codec;
use crate::error::{Error, Result};

/// Decode `secret_key` into a JWK that carries private key material.
///
/// This only checks structure: the blob must be base64url, the payload must be
/// a JWK, and an EC key must include its private scalar `d`. Whether the key is
/// usable for ES256 is decided by [`ClientKey::from_jwk`].
pub fn decode_private_jwk(encoded: &str) -> Result<Jwk> {
    let bytes = codec::decode(encoded).map_err(Error::key_decode)?;
    let jwk: Jwk = serde_json::from_slice(&bytes).map_err(Error::key_decode)?;
    match &jwk.key {
        Key::Ec(Ec { d: None, .. }) => Err(Error::key_decode(
            "EC JWK is missing the private scalar `d`",
        )),
        _ => Ok(jwk),
    }
}

/// A private key a client signs its assertions with.
#[derive(Clone)]
pub enum ClientKey {
    /// ECDSA over P-256 with SHA-256
    Es256(SigningKey),
}

impl ClientKey {
    /// Build the signing key from a private JWK.
    ///
    /// The key must be EC P-256, `d` must be a valid scalar, and `x`/`y` must
    /// be the public point of `d`.
    pub fn from_jwk(jwk: &Jwk) -> Result<Self> {
        let Key::Ec(ec) = &jwk.key else {
            return Err(Error::key_construction("only EC P-256 keys are supported"));
        };
        if !matches!(ec.crv, EcCurves::P256) {
            return Err(Error::key_construction("only EC P-256 keys are supported"));
        }
        let secret = match crypto::Key::try_from(&jwk.key).map_err(|_| {
            Error::key_construction("`d` is not a valid P-256 private scalar")
        })? {
            crypto::Key::P256(crypto::Kind::Secret(secret)) => secret,
            #[allow(unreachable_patterns)]
            _ => {
                return Err(Error::key_construction(
                    "P-256 JWK holds only a public key",
                ));
            }
        };
        match Key::from(&crypto::Key::from(secret.public_key())) {
            Key::Ec(derived) if derived.x == ec.x && derived.y == ec.y => {
                Ok(Self::Es256(SigningKey::from(secret)))
            }
            _ => Err(Error::key_construction(
                "public point does not match private scalar",
            )),
        }
    }

    /// Decode and construct in one step from the base64url `secret_key` form.
    pub fn from_encoded_jwk(encoded: &str) -> Result<Self> {
        Self::from_jwk(&decode_private_jwk(encoded)?)
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Es256(_) => Algorithm::Signing(Signing::Es256),
        }
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        match self {
            Self::Es256(key) => *key.verifying_key(),
        }
    }

    /// Public half of the key as a JWK, e.g. for publishing in a client JWKS.
    pub fn public_jwk(&self) -> Jwk {
        let public = match self {
            Self::Es256(key) => p256::PublicKey::from(key.verifying_key()),
        };
        Jwk {
            key: Key::from(&crypto::Key::from(public)),
            prm: Default::default(),
        }
    }

    /// Sign `message`, returning the fixed-width `R || S` signature bytes.
    pub(crate) fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Es256(key) => {
                let signature: Signature = key
                    .try_sign(message)
                    .map_err(|e| Error::Signing(format_smolstr!("{e}")))?;
                Ok(signature.to_bytes().to_vec())
            }
        }
    }
}

impl fmt::Debug for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Es256(_) => f.write_str("ClientKey::Es256(..)"),
        }
    }
}
