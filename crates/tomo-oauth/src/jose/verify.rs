//! Parsing and ES256 verification of compact JWS strings.
//!
//! Intended for self-checking an assertion before it is sent, or for tests.
//! Only the signature is checked; expiry and audience are left to the caller.

use jose_jwa::{Algorithm, Signing};
use p256::ecdsa::{Signature, VerifyingKey};
use serde::de::DeserializeOwned;
use signature::Verifier;
use smol_str::{SmolStr, format_smolstr};

use super::JwsHeader;
use crate::codec;
use crate::error::{Error, Result};

/// Decoded segments of a compact JWS.
#[derive(Debug, Clone)]
pub struct DecodedJwt<C> {
    pub header: JwsHeader,
    pub claims: C,
    pub signature: Vec<u8>,
}

struct Segments<'t> {
    signing_input: &'t str,
    header: &'t str,
    payload: &'t str,
    signature: &'t str,
}

fn split(token: &str) -> Result<Segments<'_>> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::MalformedToken(SmolStr::new_static(
            "JWT must have exactly 3 parts separated by dots",
        )));
    };
    Ok(Segments {
        signing_input: &token[..header.len() + 1 + payload.len()],
        header,
        payload,
        signature,
    })
}

fn decode_segments<C: DeserializeOwned>(segments: &Segments<'_>) -> Result<DecodedJwt<C>> {
    let header: JwsHeader = serde_json::from_slice(&codec::decode(segments.header)?)?;
    let claims: C = serde_json::from_slice(&codec::decode(segments.payload)?)?;
    let signature = codec::decode(segments.signature)?;
    Ok(DecodedJwt {
        header,
        claims,
        signature,
    })
}

/// Decode header, claims and signature without checking the signature.
pub fn decode_unverified<C: DeserializeOwned>(token: &str) -> Result<DecodedJwt<C>> {
    decode_segments(&split(token)?)
}

/// Decode `token` and verify its ES256 signature against `key`.
pub fn verify_es256<C: DeserializeOwned>(
    token: &str,
    key: &VerifyingKey,
) -> Result<DecodedJwt<C>> {
    let segments = split(token)?;
    let parsed = decode_segments::<C>(&segments)?;
    if parsed.header.alg != Algorithm::Signing(Signing::Es256) {
        return Err(Error::UnsupportedAlgorithm {
            alg: format_smolstr!("{:?}", parsed.header.alg),
        });
    }
    let signature = Signature::from_slice(&parsed.signature)
        .map_err(|e| Error::MalformedToken(format_smolstr!("invalid ES256 signature: {e}")))?;
    key.verify(segments.signing_input.as_bytes(), &signature)
        .map_err(|_| Error::InvalidSignature)?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jose::{ClientAssertionClaims, create_signed_jwt};
    use crate::jwk::ClientKey;
    use crate::jwk::tests::{encoded_private_jwk, random_secret};

    fn signed() -> (ClientKey, String) {
        let key = ClientKey::from_encoded_jwk(&encoded_private_jwk(random_secret())).unwrap();
        let claims = ClientAssertionClaims::new("C", "aud", 100, "jti").unwrap();
        let jwt = create_signed_jwt(&key, &JwsHeader::es256(), &claims).unwrap();
        (key, jwt)
    }

    #[test]
    fn verifies_with_matching_key() {
        let (key, jwt) = signed();
        let verified: DecodedJwt<ClientAssertionClaims> =
            verify_es256(&jwt, &key.verifying_key()).unwrap();
        assert_eq!(verified.claims.iss, "C");
        assert_eq!(verified.header, JwsHeader::es256());
    }

    #[test]
    fn rejects_other_key() {
        let (_, jwt) = signed();
        let (other, _) = signed();
        let err = verify_es256::<ClientAssertionClaims>(&jwt, &other.verifying_key()).unwrap_err();
        assert!(matches!(err, Error::InvalidSignature));
    }

    #[test]
    fn rejects_tampered_payload() {
        let (key, jwt) = signed();
        let mut parts: Vec<String> = jwt.split('.').map(str::to_owned).collect();
        let forged = ClientAssertionClaims::new("Mallory", "aud", 100, "jti").unwrap();
        parts[1] = codec::encode(serde_json::to_vec(&forged).unwrap());
        let err = verify_es256::<ClientAssertionClaims>(&parts.join("."), &key.verifying_key())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSignature));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        let err = decode_unverified::<serde_json::Value>("not.a.valid.jwt").unwrap_err();
        assert!(matches!(err, Error::MalformedToken(_)));
        let err = decode_unverified::<serde_json::Value>("a.b").unwrap_err();
        assert!(matches!(err, Error::MalformedToken(_)));
    }
}
