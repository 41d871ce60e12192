use serde::Serialize;

use super::JwsHeader;
use crate::codec;
use crate::error::Result;
use crate::jwk::ClientKey;

/// Produce a compact JWS: `base64url(header).base64url(claims).base64url(sig)`.
///
/// The signature is the raw `R || S` pair each component zero padded to the
/// field width, not an ASN.1 DER structure.
pub fn create_signed_jwt<C: Serialize>(
    key: &ClientKey,
    header: &JwsHeader,
    claims: &C,
) -> Result<String> {
    let header = codec::encode(serde_json::to_vec(header)?);
    let payload = codec::encode(serde_json::to_vec(claims)?);
    let signing_input = format!("{header}.{payload}");
    let signature = key.sign(signing_input.as_bytes())?;
    Ok(format!("{signing_input}.{}", codec::encode(signature)))
}
