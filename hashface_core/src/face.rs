//! Face header format.
//!
//! ```text
//! Face: iVBORw0KGgoAAAANSUhEUgAAADAAAAAwAgMAAAAqbBEUAAAADFBMVEX///8AAAAAAAAA
//!  AAB+b5JFAAAAJklEQVR4...
//! ```
//!
//! The first line carries 70 characters of base64 text after the prefix,
//! continuation lines start with a single space and carry up to 75.

use hashface_utils::base64;

pub const FACE_PREFIX: &str = "Face:";
const FIRST_LINE_WIDTH: usize = 70;
const CONTINUATION_WIDTH: usize = 75;
// Streams up to this length stay on the first line
const SINGLE_LINE_LIMIT: usize = 72;

#[derive(thiserror::Error, Debug)]
pub enum FaceError {
    #[error("missing Face: prefix")]
    MissingPrefix,

    #[error("line {0} is not a continuation line")]
    InvalidLine(usize),

    #[error("invalid encoding")]
    InvalidEncoding(#[from] base64::DecodeError),
}

/// Wraps base64 text into Face header lines
pub fn wrap_face(text_b64: &str) -> String {
    let mut output = String::from(FACE_PREFIX);
    if text_b64.len() <= SINGLE_LINE_LIMIT {
        output.push(' ');
        output.push_str(text_b64);
    } else {
        let (first_line, rest) = text_b64.split_at(FIRST_LINE_WIDTH);
        output.push(' ');
        output.push_str(first_line);
        // base64 output is ASCII
        for chunk in rest.as_bytes().chunks(CONTINUATION_WIDTH) {
            output.push_str("\n ");
            output.extend(chunk.iter().map(|byte| char::from(*byte)));
        };
    };
    output.push('\n');
    output
}

pub fn encode_face(data: &[u8]) -> String {
    wrap_face(&base64::encode(data))
}

/// Extracts base64 text from Face header lines
pub fn unwrap_face(text: &str) -> Result<String, FaceError> {
    let mut lines = text.lines();
    let first_line = lines.next()
        .and_then(|line| line.strip_prefix(FACE_PREFIX))
        .ok_or(FaceError::MissingPrefix)?;
    let mut text_b64 = first_line.trim().to_string();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        };
        if !line.starts_with([' ', '\t']) {
            return Err(FaceError::InvalidLine(index + 2));
        };
        text_b64.push_str(line.trim());
    };
    Ok(text_b64)
}

pub fn decode_face(text: &str) -> Result<Vec<u8>, FaceError> {
    let text_b64 = unwrap_face(text)?;
    let data = base64::decode(text_b64)?;
    Ok(data)
}
