use crate::error::Result;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Standard alphabet, tolerant of non-zero trailing bits in the final quantum.
const PROMPT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Append `=` until the length is a multiple of 4.
pub fn normalize_padding(encoded: &str) -> String {
    let mut padded = encoded.to_string();
    let missing = padded.len() % 4;
    if missing != 0 {
        padded.push_str(&"=".repeat(4 - missing));
    }
    padded
}

/// Decode a base64 prompt argument into its UTF-8 text.
pub fn decode_prompt(encoded: &str) -> Result<String> {
    let padded = normalize_padding(encoded.trim());
    let bytes = PROMPT_ENGINE.decode(padded)?;
    Ok(String::from_utf8(bytes)?)
}
