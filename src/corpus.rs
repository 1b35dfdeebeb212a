//! Corpus file loading and character-set decoding
//!
//! Dialog corpora are UTF-8. The modifier lexicon shipped with the original
//! corpus is Windows-1250, so both code pages go through encoding_rs.

use crate::cli::SourceEncoding;
use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1250};
use std::fs;
use std::path::Path;

impl SourceEncoding {
    fn as_encoding(self) -> &'static Encoding {
        match self {
            SourceEncoding::Utf8 => UTF_8,
            SourceEncoding::Windows1250 => WINDOWS_1250,
        }
    }
}

/// Read a file, decode it, and strip at most one trailing newline.
pub fn read_to_string(path: &Path, encoding: SourceEncoding) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode(&bytes, encoding).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Decode raw bytes and strip at most one trailing newline.
fn decode(bytes: &[u8], encoding: SourceEncoding) -> Result<String> {
    let (text, _, had_errors) = encoding.as_encoding().decode(bytes);
    if had_errors {
        anyhow::bail!("input is not valid {}", encoding.as_encoding().name());
    }
    let mut text = text.into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
