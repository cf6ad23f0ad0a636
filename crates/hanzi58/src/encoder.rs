//! Encoder -- base58ext symbols to glyphs.
//!
//! Each input character is looked up in the forward table and replaced by its
//! glyph, preserving order. There is no tolerance on this side: the first
//! character outside the alphabet aborts the whole call.
//!
//! # Example
//! ```
//! use hanzi58::encode;
//! assert_eq!(encode("19").unwrap(), "壹玖");
//! assert!(encode("I").is_err());
//! ```

use crate::error::{CodecError, Result};
use crate::table::CodecTable;

/// Every glyph is a 3-byte UTF-8 sequence, every symbol a single byte.
const GLYPH_UTF8_LEN: usize = 3;

/// Bytes needed to encode `len` single-byte symbols.
fn output_capacity(len: usize) -> usize {
    len.saturating_mul(GLYPH_UTF8_LEN)
}

/// Encode `input` through `table`.
///
/// Returns [`CodecError::UnsupportedCharacter`] for the first character that
/// is not a symbol. The partially built output is dropped.
pub fn encode_with(table: &CodecTable, input: &str) -> Result<String> {
    let mut out = String::with_capacity(output_capacity(input.len()));
    for c in input.chars() {
        let glyph = table
            .glyph(c)
            .ok_or(CodecError::UnsupportedCharacter(c))?;
        out.push(glyph);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_encodes_to_empty() {
        assert_eq!(encode_with(&CodecTable::new(), "").unwrap(), "");
    }

    #[test]
    fn reports_first_offending_character() {
        let err = encode_with(&CodecTable::new(), "1IO").unwrap_err();
        assert_eq!(err, CodecError::UnsupportedCharacter('I'));
    }

    #[test]
    fn output_capacity_saturates() {
        assert_eq!(output_capacity(34), 102);
        assert_eq!(output_capacity(usize::MAX / 2), usize::MAX);
        assert_eq!(output_capacity(usize::MAX), usize::MAX);
    }

    #[test]
    fn encoded_length_matches_capacity() {
        let out = encode_with(&CodecTable::new(), "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();
        assert_eq!(out.len(), output_capacity(34));
    }

    #[test]
    fn multibyte_input_is_rejected_per_char() {
        let err = encode_with(&CodecTable::new(), "1é").unwrap_err();
        assert_eq!(err, CodecError::UnsupportedCharacter('é'));
    }
}
