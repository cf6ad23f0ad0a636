//! WASM bindings for hanzi58.
//!
//! Exposes the codec to JavaScript/TypeScript via `#[wasm_bindgen]`. Strings
//! cross the boundary as-is; batches and tables cross it as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p hanzi58-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/hanzi58-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/hanzi58_wasm.wasm
//! ```

use hanzi58::CodecError;
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Encode a base58ext string into glyphs.
///
/// Throws a JS error naming the first unsupported character.
#[wasm_bindgen]
pub fn encode(input: &str) -> std::result::Result<String, JsValue> {
    hanzi58::encode(input).map_err(to_js)
}

/// Decode a glyph string back to base58ext. Non-CJK characters are ignored.
///
/// Throws a JS error naming the first unrecognized glyph.
#[wasm_bindgen]
pub fn decode(input: &str) -> std::result::Result<String, JsValue> {
    hanzi58::decode(input).map_err(to_js)
}

#[wasm_bindgen(js_name = isValidBase58Ext)]
pub fn is_valid_base58ext(input: &str) -> bool {
    hanzi58::is_valid_base58ext(input)
}

#[wasm_bindgen(js_name = isValidHanziEncoded)]
pub fn is_valid_hanzi_encoded(input: &str) -> bool {
    hanzi58::is_valid_hanzi_encoded(input)
}

/// Encode a JSON array of strings; returns a JSON array of glyph strings.
///
/// Anything but an array of strings throws a type mismatch before any
/// element is encoded.
#[wasm_bindgen(js_name = encodeBatch)]
pub fn encode_batch(inputs_json: &str) -> std::result::Result<String, JsValue> {
    run_batch(inputs_json, |inputs| hanzi58::encode_batch(inputs))
        .map_err(|e| JsValue::from_str(&e))
}

/// Decode a JSON array of glyph strings; returns a JSON array of base58ext strings.
#[wasm_bindgen(js_name = decodeBatch)]
pub fn decode_batch(inputs_json: &str) -> std::result::Result<String, JsValue> {
    run_batch(inputs_json, |inputs| hanzi58::decode_batch(inputs))
        .map_err(|e| JsValue::from_str(&e))
}

/// The symbol → glyph table as a fresh JSON object.
#[wasm_bindgen(js_name = encodingTable)]
pub fn encoding_table() -> std::result::Result<String, JsValue> {
    serde_json::to_string(&hanzi58::encoding_table())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The glyph → symbol table as a fresh JSON object.
#[wasm_bindgen(js_name = decodingTable)]
pub fn decoding_table() -> std::result::Result<String, JsValue> {
    serde_json::to_string(&hanzi58::decoding_table())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js(e: CodecError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// JSON plumbing, kept free of JsValue so it can be tested natively
// ---------------------------------------------------------------------------

/// Parse a batch argument, which must be a JSON array of strings.
fn parse_batch(inputs_json: &str) -> std::result::Result<Vec<String>, String> {
    let value: Value = serde_json::from_str(inputs_json)
        .map_err(|e| format!("Invalid batch JSON: {}", e))?;
    let mismatch = || {
        CodecError::TypeMismatch {
            expected: "array of strings",
        }
        .to_string()
    };
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(mismatch()),
            })
            .collect(),
        _ => Err(mismatch()),
    }
}

fn run_batch<F>(inputs_json: &str, op: F) -> std::result::Result<String, String>
where
    F: FnOnce(Vec<String>) -> hanzi58::Result<Vec<String>>,
{
    let inputs = parse_batch(inputs_json)?;
    let outputs = op(inputs).map_err(|e| e.to_string())?;
    serde_json::to_string(&outputs).map_err(|e| e.to_string())
}
