//! # hanzi58
//!
//! Bijective codec between **base58ext** strings (base58 extended with the
//! bech32 characters) and a curated set of Chinese glyphs.
//!
//! Every symbol of the 60-character alphabet maps to exactly one glyph, so
//! Bitcoin addresses and WIF private keys can be written down, read aloud, or
//! transcribed in Chinese characters and recovered losslessly.
//!
//! ## Quick start
//!
//! ```rust
//! use hanzi58::{decode, encode};
//!
//! let hanzi = encode("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2").unwrap();
//! assert!(hanzi.starts_with("壹硼俞硼镁"));
//!
//! // Display chunking (spaces, `<br>`, newlines) does not disturb decoding.
//! let chunked = format!("{}<br>{}", &hanzi[..30], &hanzi[30..]);
//! assert_eq!(decode(&chunked).unwrap(), "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2");
//! ```
//!
//! ## Modules
//!
//! - [`table`] -- the canonical symbol ↔ glyph table
//! - [`filter`] -- CJK-range filtering applied before decoding
//! - [`encoder`] -- base58ext string → glyph string
//! - [`decoder`] -- glyph string → base58ext string
//! - [`validate`] -- boolean pre-flight checks
//! - [`codec`] -- [`Codec`] instances, batches, table copies, and the shared default
//! - [`types`] -- [`SymbolClass`] and [`TableEntry`] for table introspection
//! - [`error`] -- [`CodecError`]

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod filter;
pub mod table;
pub mod types;
pub mod validate;

pub use codec::{
    decode, decode_batch, decoding_table, default_codec, encode, encode_batch, encoding_table,
    is_valid_base58ext, is_valid_hanzi_encoded, Codec,
};
pub use error::{CodecError, Result};
pub use table::CodecTable;
pub use types::{SymbolClass, TableEntry};
