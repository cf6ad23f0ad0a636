//! CJK-range filtering -- the decode-time step that drops display noise.
//!
//! Encoded strings are often chunked for display (`<br>` markup, spaces,
//! newlines every N glyphs). Decoding keeps only characters in the CJK
//! Unified Ideographs block, U+4E00..=U+9FFF, and silently drops the rest.
//!
//! The filter is range based, not table based: a CJK character that is not a
//! table glyph survives filtering and is rejected later by the decoder. Stray
//! Latin letters, on the other hand, are dropped like any other markup.

use std::ops::RangeInclusive;

/// First code point of the CJK Unified Ideographs block.
pub const CJK_UNIFIED_START: u32 = 0x4E00;
/// Last code point of the CJK Unified Ideographs block.
pub const CJK_UNIFIED_END: u32 = 0x9FFF;

/// The code point range retained by [`cjk_glyphs`].
pub const CJK_UNIFIED: RangeInclusive<u32> = CJK_UNIFIED_START..=CJK_UNIFIED_END;

/// Whether `c` falls in the CJK Unified Ideographs block.
///
/// ```
/// use hanzi58::filter::is_cjk_unified;
///
/// assert!(is_cjk_unified('零'));
/// assert!(!is_cjk_unified('0'));
/// assert!(!is_cjk_unified('　')); // ideographic space, U+3000
/// ```
pub const fn is_cjk_unified(c: char) -> bool {
    let cp = c as u32;
    cp >= CJK_UNIFIED_START && cp <= CJK_UNIFIED_END
}

/// Iterate over the CJK-range characters of `input`, in order.
///
/// Scans by Unicode scalar value, so multi-byte glyphs are never split.
pub fn cjk_glyphs(input: &str) -> impl Iterator<Item = char> + '_ {
    input.chars().filter(|&c| is_cjk_unified(c))
}
