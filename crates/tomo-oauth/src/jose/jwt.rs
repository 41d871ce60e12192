use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{Error, Result};

/// Lifetime of a client assertion, in seconds.
pub const ASSERTION_LIFETIME_SECS: i64 = 300;

/// Registered claims of a `private_key_jwt` client assertion.
///
/// <https://datatracker.ietf.org/doc/html/rfc7523#section-3>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAssertionClaims {
    pub iss: SmolStr,
    pub sub: SmolStr,
    pub aud: SmolStr,
    pub iat: i64,
    pub exp: i64,
    pub jti: SmolStr,
}

impl ClientAssertionClaims {
    /// Claims for `client_id` asserting itself to `audience`, valid for
    /// [`ASSERTION_LIFETIME_SECS`] from `issued_at`.
    ///
    /// Fails with [`Error::IssuedAtOutOfRange`] when `exp` would not fit in an
    /// `i64`.
    pub fn new(
        client_id: impl Into<SmolStr>,
        audience: impl Into<SmolStr>,
        issued_at: i64,
        jti: impl Into<SmolStr>,
    ) -> Result<Self> {
        let exp = issued_at
            .checked_add(ASSERTION_LIFETIME_SECS)
            .ok_or(Error::IssuedAtOutOfRange { issued_at })?;
        let client_id = client_id.into();
        Ok(Self {
            iss: client_id.clone(),
            sub: client_id,
            aud: audience.into(),
            iat: issued_at,
            exp,
            jti: jti.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuer_and_subject_are_client_id() {
        let claims = ClientAssertionClaims::new("C", "https://x.example/v1/oauth2/token", 1_000, "j")
            .unwrap();
        assert_eq!(claims.iss, "C");
        assert_eq!(claims.sub, "C");
        assert_eq!(claims.exp - claims.iat, ASSERTION_LIFETIME_SECS);
    }

    #[test]
    fn claim_order_on_the_wire() {
        let claims = ClientAssertionClaims::new("C", "aud", 10, "id").unwrap();
        assert_eq!(
            serde_json::to_string(&claims).unwrap(),
            r#"{"iss":"C","sub":"C","aud":"aud","iat":10,"exp":310,"jti":"id"}"#
        );
    }

    #[test]
    fn issue_time_near_i64_max_is_rejected() {
        let err = ClientAssertionClaims::new("C", "aud", i64::MAX, "id").unwrap_err();
        assert!(matches!(err, Error::IssuedAtOutOfRange { issued_at } if issued_at == i64::MAX));
        let err = ClientAssertionClaims::new("C", "aud", i64::MAX - 299, "id").unwrap_err();
        assert!(matches!(err, Error::IssuedAtOutOfRange { .. }));
        let claims = ClientAssertionClaims::new("C", "aud", i64::MAX - 300, "id").unwrap();
        assert_eq!(claims.exp, i64::MAX);
    }
}
