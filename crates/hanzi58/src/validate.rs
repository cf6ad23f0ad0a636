//! Boolean pre-flight checks mirroring the strict encoder and decoder.
//!
//! These never fail: every condition that would make [`crate::encode`] or
//! [`crate::decode`] return an error, plus emptiness, maps to `false`.

use crate::filter::cjk_glyphs;
use crate::table::CodecTable;

/// True iff `input` is non-empty and every character is a base58ext symbol.
///
/// Whenever this returns `true`, encoding the same input succeeds.
pub fn is_valid_base58ext(table: &CodecTable, input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| table.is_symbol(c))
}

/// True iff the CJK-filtered `input` is non-empty and made only of glyphs.
///
/// Non-CJK noise is ignored exactly as the decoder ignores it, so `"零x"` is
/// valid while `""` and `"<br>"` are not.
pub fn is_valid_hanzi_encoded(table: &CodecTable, input: &str) -> bool {
    let mut glyphs = cjk_glyphs(input).peekable();
    glyphs.peek().is_some() && glyphs.all(|g| table.is_glyph(g))
}
