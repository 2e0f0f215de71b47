//! Character encoding handling for the raw dataset files.
//!
//! The raw Red List CSVs ship in Shift_JIS; `detect` is the diagnostic
//! used to confirm that before a build, `decode` is the strict decode
//! the builder runs with the declared label.

use encoding_rs::Encoding;

use super::DatasetError;

/// Best-guess character encoding for a raw byte buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub encoding: String,
    /// Heuristic confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Detect the character encoding of a byte buffer using statistical
/// byte-frequency heuristics. Read-only; a low-confidence result is
/// reported to the operator rather than retried.
pub fn detect(bytes: &[u8]) -> Detection {
    let (encoding, confidence, _language) = chardet::detect(bytes);
    Detection {
        encoding,
        confidence: f64::from(confidence).clamp(0.0, 1.0),
    }
}

/// Decode a byte buffer with a declared encoding label.
///
/// Fails when the label is unknown or the bytes do not decode cleanly,
/// so a wrongly-declared file is skipped instead of silently mangled.
pub fn decode(bytes: &[u8], label: &str) -> Result<String, DatasetError> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| DatasetError::UnknownEncoding(label.to_string()))?;

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DatasetError::Decode(encoding.name().to_string()));
    }

    Ok(text.into_owned())
}
