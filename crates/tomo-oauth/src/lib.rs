//! OAuth2 `private_key_jwt` client authentication for the Tomo token endpoint.
//!
//! Builds an ES256-signed client assertion from a base64url-encoded private JWK
//! and the `application/x-www-form-urlencoded` token request that carries it.
//! Sending the request is left to the caller's HTTP client.
//!
//! ```no_run
//! use tomo_oauth::{ClientAssertionOptions, TokenRequest, create_client_assertion};
//!
//! # fn main() -> tomo_oauth::error::Result<()> {
//! let options = ClientAssertionOptions::builder()
//!     .client_id("my-client")
//!     .secret_key("eyJrdHkiOiJFQyIs...")
//!     .base_url("https://auth.tomopayment.com")
//!     .build();
//! let assertion = create_client_assertion(&options)?;
//! let request = TokenRequest::new(&assertion);
//! # Ok(())
//! # }
//! ```

pub mod assertion;
pub mod codec;
pub mod error;
pub mod jose;
pub mod jwk;
pub mod request;

pub use assertion::{
    ClientAssertionOptions, create_client_assertion, create_client_assertion_at, token_endpoint,
};
pub use error::Error;
pub use jwk::ClientKey;
pub use request::{BodyOptions, TokenRequest, build_token_request};
