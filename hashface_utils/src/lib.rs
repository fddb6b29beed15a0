pub mod base64;
pub mod files;
pub mod hashes;
