pub mod jws;
pub mod jwt;
pub mod signing;
pub mod verify;

pub use self::jws::JwsHeader;
pub use self::jwt::ClientAssertionClaims;
pub use self::signing::create_signed_jwt;
pub use self::verify::{DecodedJwt, decode_unverified, verify_es256};
