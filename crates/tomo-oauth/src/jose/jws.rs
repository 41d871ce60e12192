use jose_jwa::{Algorithm, Signing};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

pub const JWT_HEADER_TYP: &str = "JWT";

/// Protected header of a compact JWS.
///
/// Field order is significant for the wire form: an ES256 client assertion
/// header serializes to exactly `{"alg":"ES256","typ":"JWT"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsHeader {
    pub alg: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<SmolStr>,
}

impl JwsHeader {
    pub fn es256() -> Self {
        Self::from(Algorithm::Signing(Signing::Es256))
    }
}

impl From<Algorithm> for JwsHeader {
    fn from(alg: Algorithm) -> Self {
        Self {
            alg,
            typ: Some(SmolStr::new_static(JWT_HEADER_TYP)),
        }
    }
}
