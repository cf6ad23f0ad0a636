//! Table introspection types: symbol classes and table rows.

use serde::{Deserialize, Serialize};

/// The three themed groups the alphabet is split into.
///
/// Each group draws its glyphs from one vocabulary, which makes transcribed
/// strings easier to read back aloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolClass {
    /// `0`–`9`, written as formal financial numerals.
    Digit,
    /// `A`–`Z` minus `I` and `O`, written as chemical elements.
    Uppercase,
    /// `a`–`z`, written as common surnames.
    Lowercase,
}

impl SymbolClass {
    pub const ALL: [SymbolClass; 3] = [
        SymbolClass::Digit,
        SymbolClass::Uppercase,
        SymbolClass::Lowercase,
    ];

    /// The class of a base58ext symbol, or `None` if `symbol` is not one.
    pub fn of(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => Some(SymbolClass::Digit),
            'I' | 'O' => None,
            'A'..='Z' => Some(SymbolClass::Uppercase),
            'a'..='z' => Some(SymbolClass::Lowercase),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolClass::Digit => "digit",
            SymbolClass::Uppercase => "uppercase",
            SymbolClass::Lowercase => "lowercase",
        }
    }
}

/// One row of the codec table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub symbol: char,
    pub glyph: char,
    pub class: SymbolClass,
}
