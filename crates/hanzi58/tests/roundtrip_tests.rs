use hanzi58::table::CANONICAL;
use hanzi58::{decode, encode, is_valid_base58ext, is_valid_hanzi_encoded};

/// Assert that encode → decode returns the input, and that both sides validate.
fn assert_roundtrip(input: &str) {
    let hanzi = encode(input).expect("encode failed");
    let back = decode(&hanzi).expect("decode failed");
    assert_eq!(back, input, "Roundtrip failed:\n  input: {input}\n  hanzi: {hanzi}");
    assert!(is_valid_base58ext(input));
    assert!(is_valid_hanzi_encoded(&hanzi));
}

// ============================================================================
// Bijectivity
// ============================================================================

#[test]
fn every_symbol_roundtrips() {
    for (symbol, _) in CANONICAL {
        assert_roundtrip(&symbol.to_string());
    }
}

#[test]
fn every_glyph_roundtrips() {
    for (_, glyph) in CANONICAL {
        let g = glyph.to_string();
        let symbol = decode(&g).unwrap();
        assert_eq!(encode(&symbol).unwrap(), g);
    }
}

// ============================================================================
// Real-world tokens
// ============================================================================

#[test]
fn roundtrip_genesis_address() {
    assert_roundtrip("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
}

#[test]
fn roundtrip_p2sh_address() {
    assert_roundtrip("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy");
}

#[test]
fn roundtrip_bech32_address() {
    assert_roundtrip("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq");
}

#[test]
fn roundtrip_uncompressed_wif() {
    assert_roundtrip("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ");
}

#[test]
fn roundtrip_compressed_wif() {
    assert_roundtrip("KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617");
}

#[test]
fn roundtrip_full_alphabet() {
    assert_roundtrip("0123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");
}

#[test]
fn roundtrip_chunked_with_spaces() {
    let address = "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy";
    let hanzi = encode(address).unwrap();
    let chunked: Vec<String> = hanzi
        .chars()
        .collect::<Vec<_>>()
        .chunks(17)
        .map(|c| c.iter().collect())
        .collect();
    assert_eq!(chunked.len(), 2);
    assert_eq!(decode(&chunked.join(" ")).unwrap(), address);
}
