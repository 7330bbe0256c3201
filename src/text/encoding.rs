//! Base64 encoding of text

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;

// Padding is stripped before decoding; leftover bits in the last symbol are tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Standard (padded) Base64 of the UTF-8 bytes of `text`
pub fn to_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Best-effort Base64 decode. There is no integrity check and no error.
///
/// - decoding stops at the first `=`
/// - whitespace and characters outside the alphabet are skipped
/// - the URL-safe symbols `-` and `_` are read as `+` and `/`
/// - a dangling final symbol that cannot form a byte is dropped
/// - bytes that are not valid UTF-8 become U+FFFD
pub fn from_base64(encoded: &str) -> String {
    let mut symbols: Vec<u8> = encoded
        .bytes()
        .take_while(|&b| b != b'=')
        .filter_map(standard_symbol)
        .collect();
    if symbols.len() % 4 == 1 {
        symbols.pop();
    }

    match LENIENT.decode(&symbols) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::debug!(%err, "from_base64: undecodable input");
            String::new()
        }
    }
}

fn standard_symbol(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' => Some(b),
        b'-' => Some(b'+'),
        b'_' => Some(b'/'),
        _ => None,
    }
}
