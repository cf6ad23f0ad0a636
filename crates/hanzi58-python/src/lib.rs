//! # hanzi58-python
//!
//! Python bindings for the hanzi58 encoder/decoder, built with PyO3.
//!
//! Exposes the following functions as the `hanzi58._native` module:
//!
//! - `encode(text)` -- base58ext string -> glyph string
//! - `decode(text)` -- glyph string -> base58ext string
//! - `is_valid_base58ext(text)`, `is_valid_hanzi_encoded(text)` -- predicates
//! - `encode_batch(list)`, `decode_batch(list)` -- fail-fast batches
//! - `encoding_table()`, `decoding_table()` -- fresh `dict` copies

use std::collections::BTreeMap;

use hanzi58::CodecError;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

fn to_py_err(e: CodecError) -> PyErr {
    match e {
        CodecError::TypeMismatch { .. } => PyTypeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Accept a list/tuple of `str`; reject a bare `str` (which Python would
/// otherwise happily iterate character by character) and anything else.
fn extract_batch(inputs: &Bound<'_, PyAny>) -> PyResult<Vec<String>> {
    let mismatch = || {
        to_py_err(CodecError::TypeMismatch {
            expected: "sequence of str",
        })
    };
    if inputs.is_instance_of::<PyString>() {
        return Err(mismatch());
    }
    inputs.extract::<Vec<String>>().map_err(|_| mismatch())
}

/// Encode a base58ext string into Chinese glyphs.
///
/// Args:
///     text: A string over the base58ext alphabet.
///
/// Returns:
///     The glyph string.
///
/// Raises:
///     ValueError: If a character is outside the alphabet.
#[pyfunction]
fn encode(text: &str) -> PyResult<String> {
    hanzi58::encode(text).map_err(to_py_err)
}

/// Decode a glyph string back to base58ext.
///
/// Characters outside the CJK Unified Ideographs block (spaces, `<br>`,
/// newlines) are ignored.
///
/// Raises:
///     ValueError: If a CJK character is not one of the table's glyphs.
#[pyfunction]
fn decode(text: &str) -> PyResult<String> {
    hanzi58::decode(text).map_err(to_py_err)
}

#[pyfunction]
fn is_valid_base58ext(text: &str) -> bool {
    hanzi58::is_valid_base58ext(text)
}

#[pyfunction]
fn is_valid_hanzi_encoded(text: &str) -> bool {
    hanzi58::is_valid_hanzi_encoded(text)
}

/// Encode a list of base58ext strings, stopping at the first failure.
///
/// Raises:
///     TypeError: If `inputs` is a `str` or not a sequence of `str`.
///     ValueError: On the first element that cannot be encoded.
#[pyfunction]
fn encode_batch(inputs: &Bound<'_, PyAny>) -> PyResult<Vec<String>> {
    let inputs = extract_batch(inputs)?;
    hanzi58::encode_batch(&inputs).map_err(to_py_err)
}

/// Decode a list of glyph strings, stopping at the first failure.
#[pyfunction]
fn decode_batch(inputs: &Bound<'_, PyAny>) -> PyResult<Vec<String>> {
    let inputs = extract_batch(inputs)?;
    hanzi58::decode_batch(&inputs).map_err(to_py_err)
}

/// A fresh `dict` mapping each symbol to its glyph.
#[pyfunction]
fn encoding_table() -> BTreeMap<char, char> {
    hanzi58::encoding_table()
}

/// A fresh `dict` mapping each glyph to its symbol.
#[pyfunction]
fn decoding_table() -> BTreeMap<char, char> {
    hanzi58::decoding_table()
}

/// The native extension module, exposed as `hanzi58._native`.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_base58ext, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_hanzi_encoded, m)?)?;
    m.add_function(wrap_pyfunction!(encode_batch, m)?)?;
    m.add_function(wrap_pyfunction!(decode_batch, m)?)?;
    m.add_function(wrap_pyfunction!(encoding_table, m)?)?;
    m.add_function(wrap_pyfunction!(decoding_table, m)?)?;
    Ok(())
}
