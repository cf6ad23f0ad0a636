//! The codec instance, batch operations, table accessors, and the shared
//! default instance behind the crate's free functions.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::decoder::decode_with;
use crate::encoder::encode_with;
use crate::error::Result;
use crate::table::CodecTable;
use crate::types::{SymbolClass, TableEntry};
use crate::validate;

/// A base58ext ↔ glyph codec owning its own [`CodecTable`].
///
/// Construction is deterministic, so any number of instances may coexist and
/// be used from different threads; each one only ever reads its table.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    table: CodecTable,
}

impl Codec {
    pub fn new() -> Self {
        Self {
            table: CodecTable::new(),
        }
    }

    /// Read-only view of the working table.
    pub fn table(&self) -> &CodecTable {
        &self.table
    }

    /// Encode a base58ext string into glyphs. See [`crate::encoder`].
    pub fn encode(&self, input: &str) -> Result<String> {
        tracing::trace!(len = input.len(), "encode");
        encode_with(&self.table, input)
    }

    /// Decode a glyph string, ignoring non-CJK noise. See [`crate::decoder`].
    pub fn decode(&self, input: &str) -> Result<String> {
        tracing::trace!(len = input.len(), "decode");
        decode_with(&self.table, input)
    }

    pub fn is_valid_base58ext(&self, input: &str) -> bool {
        validate::is_valid_base58ext(&self.table, input)
    }

    pub fn is_valid_hanzi_encoded(&self, input: &str) -> bool {
        validate::is_valid_hanzi_encoded(&self.table, input)
    }

    /// Encode every input, in order.
    ///
    /// Stops at the first failing element and returns its error; no partial
    /// output is returned.
    ///
    /// ```
    /// use hanzi58::{Codec, CodecError};
    ///
    /// let codec = Codec::new();
    /// assert_eq!(codec.encode_batch(["1A", "z"]).unwrap(), ["壹氩", "赵"]);
    /// assert_eq!(
    ///     codec.encode_batch(["1A", "I"]),
    ///     Err(CodecError::UnsupportedCharacter('I'))
    /// );
    /// ```
    pub fn encode_batch<I, S>(&self, inputs: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        run_batch("encode", inputs, |s| self.encode(s))
    }

    /// Decode every input, in order, failing fast like [`Codec::encode_batch`].
    pub fn decode_batch<I, S>(&self, inputs: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        run_batch("decode", inputs, |s| self.decode(s))
    }

    /// A detached copy of the symbol → glyph table.
    ///
    /// Mutating the returned map has no effect on this codec.
    pub fn encoding_table(&self) -> BTreeMap<char, char> {
        self.table.forward_copy()
    }

    /// A detached copy of the glyph → symbol table.
    pub fn decoding_table(&self) -> BTreeMap<char, char> {
        self.table.reverse_copy()
    }

    /// All table rows in canonical order.
    pub fn entries(&self) -> Vec<TableEntry> {
        self.table
            .iter()
            .filter_map(|(symbol, glyph)| {
                SymbolClass::of(symbol).map(|class| TableEntry {
                    symbol,
                    glyph,
                    class,
                })
            })
            .collect()
    }

    /// A detached copy of the symbol → glyph rows belonging to `class`.
    pub fn class_table(&self, class: SymbolClass) -> BTreeMap<char, char> {
        self.table
            .iter()
            .filter(|&(symbol, _)| SymbolClass::of(symbol) == Some(class))
            .collect()
    }
}

fn run_batch<I, S, F>(op: &'static str, inputs: I, mut f: F) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> Result<String>,
{
    let inputs = inputs.into_iter();
    let mut out = Vec::with_capacity(inputs.size_hint().0);
    for (index, input) in inputs.enumerate() {
        match f(input.as_ref()) {
            Ok(s) => out.push(s),
            Err(e) => {
                tracing::debug!(op, index, error = %e, "batch aborted");
                return Err(e);
            }
        }
    }
    Ok(out)
}

static DEFAULT_CODEC: OnceLock<Codec> = OnceLock::new();

/// The process-wide codec used by the free functions.
///
/// Built on first use and never mutated afterward.
pub fn default_codec() -> &'static Codec {
    DEFAULT_CODEC.get_or_init(|| {
        let codec = Codec::new();
        tracing::debug!(symbols = codec.table().len(), "default codec initialized");
        codec
    })
}

/// Encode with the default codec.
pub fn encode(input: &str) -> Result<String> {
    default_codec().encode(input)
}

/// Decode with the default codec.
pub fn decode(input: &str) -> Result<String> {
    default_codec().decode(input)
}

pub fn encode_batch<I, S>(inputs: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    default_codec().encode_batch(inputs)
}

pub fn decode_batch<I, S>(inputs: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    default_codec().decode_batch(inputs)
}

pub fn is_valid_base58ext(input: &str) -> bool {
    default_codec().is_valid_base58ext(input)
}

pub fn is_valid_hanzi_encoded(input: &str) -> bool {
    default_codec().is_valid_hanzi_encoded(input)
}

pub fn encoding_table() -> BTreeMap<char, char> {
    default_codec().encoding_table()
}

pub fn decoding_table() -> BTreeMap<char, char> {
    default_codec().decoding_table()
}
