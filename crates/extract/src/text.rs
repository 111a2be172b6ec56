//! Plain-text documents: UTF-8, verbatim.

use docchat_core::error::ExtractionError;

pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
