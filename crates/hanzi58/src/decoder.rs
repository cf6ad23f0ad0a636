//! Decoder -- glyphs back to base58ext symbols.
//!
//! Decoding runs in two phases:
//!
//! 1. **Filter**: keep only CJK Unified Ideographs (see [`crate::filter`]).
//!    Everything else -- `<br>` markup, whitespace, punctuation, even stray
//!    Latin letters -- is discarded without error.
//! 2. **Translate**: map each kept glyph through the reverse table.
//!
//! Leniency stops at the CJK block. A CJK character that is not one of the
//! table's glyphs fails the call with [`CodecError::UnrecognizedGlyph`].
//!
//! # Example
//! ```
//! use hanzi58::decode;
//! assert_eq!(decode("壹玖").unwrap(), "19");
//! assert_eq!(decode("氩<br>").unwrap(), "A");
//! assert!(decode("你").is_err());
//! ```

use crate::error::{CodecError, Result};
use crate::filter::cjk_glyphs;
use crate::table::CodecTable;

/// Decode `input` through `table`.
///
/// An input without any CJK character decodes to the empty string; whether
/// that is acceptable is left to the caller (see
/// [`crate::validate::is_valid_hanzi_encoded`], which rejects it).
pub fn decode_with(table: &CodecTable, input: &str) -> Result<String> {
    // Upper bound: every byte a symbol. Real inputs are ~3 bytes per glyph.
    let mut out = String::with_capacity(input.len() / 3 + 1);
    for glyph in cjk_glyphs(input) {
        let symbol = table
            .symbol(glyph)
            .ok_or(CodecError::UnrecognizedGlyph(glyph))?;
        out.push(symbol);
    }
    Ok(out)
}
