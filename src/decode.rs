use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::errors::{OfxCleanupError, OfxCleanupResult};

/// Byte values Windows-1252 leaves unassigned.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
}

impl Decoded {
    pub fn used_fallback(&self) -> bool {
        self.encoding != UTF_8
    }
}

/// Decodes statement bytes as UTF-8, falling back to Windows-1252.
///
/// A UTF-8 BOM is kept as `U+FEFF` in the text; nothing is stripped.
pub fn decode_content(bytes: &[u8]) -> OfxCleanupResult<Decoded> {
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return Ok(Decoded {
            text: text.into_owned(),
            encoding: UTF_8,
        });
    }

    if bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
        return Err(OfxCleanupError::UndecodableContent);
    }

    let text = WINDOWS_1252
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(OfxCleanupError::UndecodableContent)?;

    tracing::warn!(
        encoding = WINDOWS_1252.name(),
        "content is not valid UTF-8, decoded with fallback encoding"
    );

    Ok(Decoded {
        text: text.into_owned(),
        encoding: WINDOWS_1252,
    })
}
