//! base64url (RFC 4648 §5) as used by every JOSE segment.
//!
//! Encoding never pads. Decoding is lenient about padding: the input is mapped
//! back onto the standard alphabet and padded out to a multiple of four before
//! decoding, so both `SGVsbG8` and `SGVsbG8=` decode to `Hello`.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use miette::Diagnostic;

// Only alphabet and length errors are fatal; stray low bits in the last
// symbol are ignored.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Error type for base64url decoding failures
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("invalid base64url encoding: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);

/// Encode bytes as base64url without padding.
#[must_use]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a base64url string, with or without trailing `=` padding.
///
/// # Errors
/// Returns `DecodeError` on characters outside the alphabet or when the
/// input length cannot correspond to any byte sequence.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let mut standard: String = encoded
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }
    Ok(STANDARD_LENIENT.decode(standard)?)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip_encode_decode(bytes: Vec<u8>) {
            let encoded = encode(&bytes);
            let decoded = decode(&encoded).unwrap();
            prop_assert_eq!(decoded, bytes);
        }

        #[test]
        fn encoded_output_is_url_safe(bytes: Vec<u8>) {
            let encoded = encode(&bytes);
            prop_assert!(!encoded.contains(['+', '/', '=']));
        }

        #[test]
        fn reencoding_is_stable(bytes: Vec<u8>) {
            let encoded = encode(&bytes);
            prop_assert_eq!(encode(decode(&encoded).unwrap()), encoded);
        }
    }
}
