//! The canonical symbol ↔ glyph table.
//!
//! The pair list below is the wire format: two implementations interoperate
//! only if they reproduce it position for position. It is grouped the way the
//! glyphs were chosen:
//!
//! - digits `0`–`9` → formal financial numerals (零壹贰…)
//! - uppercase `A`–`Z` without `I`/`O` → chemical elements, mostly keyed by
//!   their symbol or English name (氩 Ar, 硼 B, 碳 C…)
//! - lowercase `a`–`z` → common surnames (安白程…)
//!
//! Both directions are materialized from [`CANONICAL`] at construction time;
//! nothing mutates a [`CodecTable`] after that.

use std::collections::BTreeMap;

use crate::filter::is_cjk_unified;

/// Number of symbols (and glyphs) in the alphabet.
pub const ALPHABET_LEN: usize = 60;

/// Symbol → glyph pairs in canonical order.
#[rustfmt::skip]
pub const CANONICAL: [(char, char); ALPHABET_LEN] = [
    // Digits
    ('0', '零'), ('1', '壹'), ('2', '贰'), ('3', '叁'), ('4', '肆'),
    ('5', '伍'), ('6', '陆'), ('7', '柒'), ('8', '捌'), ('9', '玖'),
    // Uppercase (no I, O)
    ('A', '氩'), ('B', '硼'), ('C', '碳'), ('D', '镝'), ('E', '铒'),
    ('F', '氟'), ('G', '镓'), ('H', '氢'), ('J', '金'), ('K', '钾'),
    ('L', '锂'), ('M', '镁'), ('N', '氮'), ('P', '磷'), ('Q', '铅'),
    ('R', '氡'), ('S', '硫'), ('T', '钛'), ('U', '铀'), ('V', '钒'),
    ('W', '钨'), ('X', '氙'), ('Y', '钇'), ('Z', '锌'),
    // Lowercase
    ('a', '安'), ('b', '白'), ('c', '程'), ('d', '戴'), ('e', '鄂'),
    ('f', '冯'), ('g', '高'), ('h', '韩'), ('i', '伊'), ('j', '蒋'),
    ('k', '孔'), ('l', '李'), ('m', '毛'), ('n', '牛'), ('o', '欧'),
    ('p', '潘'), ('q', '秦'), ('r', '任'), ('s', '孙'), ('t', '唐'),
    ('u', '乌'), ('v', '俞'), ('w', '王'), ('x', '谢'), ('y', '杨'),
    ('z', '赵'),
];

/// Checks that no symbol and no glyph repeats, and that every glyph survives
/// the decoder's CJK filter.
const fn is_bijective(pairs: &[(char, char)]) -> bool {
    let mut i = 0;
    while i < pairs.len() {
        if !is_cjk_unified(pairs[i].1) {
            return false;
        }
        let mut j = i + 1;
        while j < pairs.len() {
            if pairs[i].0 as u32 == pairs[j].0 as u32 || pairs[i].1 as u32 == pairs[j].1 as u32 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    is_bijective(&CANONICAL),
    "canonical table must be a bijection onto CJK glyphs"
);

/// Build the symbol → glyph mapping from [`CANONICAL`].
pub fn build_forward() -> BTreeMap<char, char> {
    CANONICAL.iter().copied().collect()
}

/// Invert a forward mapping.
///
/// # Panics
///
/// Panics if two symbols map to the same glyph. The canonical table is
/// checked at compile time, so this only fires on a hand-built mapping.
pub fn build_reverse(forward: &BTreeMap<char, char>) -> BTreeMap<char, char> {
    let mut reverse = BTreeMap::new();
    for (&symbol, &glyph) in forward {
        if let Some(previous) = reverse.insert(glyph, symbol) {
            panic!("glyph {glyph:?} assigned to both {previous:?} and {symbol:?}");
        }
    }
    reverse
}

/// The forward/reverse mapping pair every codec operation reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecTable {
    forward: BTreeMap<char, char>,
    reverse: BTreeMap<char, char>,
}

impl CodecTable {
    /// Materialize both directions of the canonical table.
    pub fn new() -> Self {
        let forward = build_forward();
        let reverse = build_reverse(&forward);
        Self { forward, reverse }
    }

    /// Glyph for a symbol, if the symbol is in the alphabet.
    pub fn glyph(&self, symbol: char) -> Option<char> {
        self.forward.get(&symbol).copied()
    }

    /// Symbol for a glyph, if the glyph is in the table.
    pub fn symbol(&self, glyph: char) -> Option<char> {
        self.reverse.get(&glyph).copied()
    }

    pub fn is_symbol(&self, c: char) -> bool {
        self.forward.contains_key(&c)
    }

    pub fn is_glyph(&self, c: char) -> bool {
        self.reverse.contains_key(&c)
    }

    /// `(symbol, glyph)` pairs in canonical order.
    ///
    /// The canonical order is ASCII order of the symbols, which is also the
    /// iteration order of the forward map.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.forward.iter().map(|(&s, &g)| (s, g))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Detached copy of the symbol → glyph direction.
    pub fn forward_copy(&self) -> BTreeMap<char, char> {
        self.forward.clone()
    }

    /// Detached copy of the glyph → symbol direction.
    pub fn reverse_copy(&self) -> BTreeMap<char, char> {
        self.reverse.clone()
    }
}

impl Default for CodecTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_has_every_group() {
        let digits = CANONICAL.iter().filter(|(s, _)| s.is_ascii_digit()).count();
        let upper = CANONICAL.iter().filter(|(s, _)| s.is_ascii_uppercase()).count();
        let lower = CANONICAL.iter().filter(|(s, _)| s.is_ascii_lowercase()).count();
        assert_eq!((digits, upper, lower), (10, 24, 26));
    }

    #[test]
    fn uppercase_skips_i_and_o() {
        let forward = build_forward();
        assert!(!forward.contains_key(&'I'));
        assert!(!forward.contains_key(&'O'));
    }

    #[test]
    fn reverse_inverts_forward() {
        let table = CodecTable::new();
        assert_eq!(table.len(), ALPHABET_LEN);
        for (symbol, glyph) in CANONICAL {
            assert_eq!(table.glyph(symbol), Some(glyph));
            assert_eq!(table.symbol(glyph), Some(symbol));
        }
    }

    #[test]
    fn iter_follows_canonical_order() {
        let pairs: Vec<(char, char)> = CodecTable::new().iter().collect();
        assert_eq!(pairs, CANONICAL.to_vec());
    }

    #[test]
    #[should_panic(expected = "assigned to both")]
    fn build_reverse_rejects_shared_glyph() {
        let forward: BTreeMap<char, char> = [('a', '安'), ('b', '安')].into_iter().collect();
        build_reverse(&forward);
    }

    #[test]
    fn tables_from_separate_constructions_are_identical() {
        assert_eq!(CodecTable::new(), CodecTable::default());
    }
}
