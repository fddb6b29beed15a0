use sha2::{Digest, Sha256};

pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DigestParseError {
    #[error("invalid hex encoding")]
    InvalidEncoding(#[from] hex::FromHexError),

    #[error("digest is empty")]
    Empty,
}

/// Parses hex-encoded digest of arbitrary length
pub fn parse_hex_digest(value: &str) -> Result<Vec<u8>, DigestParseError> {
    let value = value.trim();
    let value = value.strip_prefix("0x").unwrap_or(value);
    if value.is_empty() {
        return Err(DigestParseError::Empty);
    };
    let digest = hex::decode(value)?;
    Ok(digest)
}

pub fn digest_to_hex(digest: &[u8]) -> String {
    hex::encode(digest)
}
