/// Table accessor tests: detached copies, symbol classes, and table rows.
use hanzi58::table::{ALPHABET_LEN, CANONICAL};
use hanzi58::{decoding_table, encoding_table, Codec, SymbolClass, TableEntry};

// ============================================================================
// Accessor isolation
// ============================================================================

#[test]
fn encoding_table_copy_is_detached() {
    let codec = Codec::new();
    let mut table = codec.encoding_table();
    table.insert('1', '你');
    table.remove(&'9');
    table.insert('I', '一');

    assert_eq!(codec.encode("19").unwrap(), "壹玖");
    assert!(codec.encode("I").is_err());
    assert_eq!(codec.encoding_table().get(&'1'), Some(&'壹'));
}

#[test]
fn decoding_table_copy_is_detached() {
    let codec = Codec::new();
    let mut table = codec.decoding_table();
    table.clear();
    assert_eq!(codec.decode("壹玖").unwrap(), "19");
    assert_eq!(codec.decoding_table().len(), ALPHABET_LEN);
}

#[test]
fn free_function_copies_are_detached() {
    let mut table = encoding_table();
    table.clear();
    assert_eq!(encoding_table().len(), ALPHABET_LEN);
    assert_eq!(hanzi58::encode("A").unwrap(), "氩");
}

#[test]
fn tables_are_mutual_inverses() {
    let forward = encoding_table();
    let reverse = decoding_table();
    assert_eq!(forward.len(), reverse.len());
    for (symbol, glyph) in &forward {
        assert_eq!(reverse.get(glyph), Some(symbol));
    }
}

#[test]
fn tables_match_canonical_pairs() {
    let forward = encoding_table();
    for (symbol, glyph) in CANONICAL {
        assert_eq!(forward.get(&symbol), Some(&glyph));
    }
}

// ============================================================================
// Symbol classes
// ============================================================================

#[test]
fn class_tables_partition_the_alphabet() {
    let codec = Codec::new();
    let sizes: Vec<usize> = SymbolClass::ALL
        .iter()
        .map(|&class| codec.class_table(class).len())
        .collect();
    assert_eq!(sizes, [10, 24, 26]);
    assert_eq!(sizes.iter().sum::<usize>(), ALPHABET_LEN);
}

#[test]
fn digit_class_is_financial_numerals() {
    let digits = Codec::new().class_table(SymbolClass::Digit);
    let glyphs: String = digits.values().collect();
    assert_eq!(glyphs, "零壹贰叁肆伍陆柒捌玖");
}

#[test]
fn uppercase_class_has_no_i_or_o() {
    let upper = Codec::new().class_table(SymbolClass::Uppercase);
    assert!(!upper.contains_key(&'I'));
    assert!(!upper.contains_key(&'O'));
    assert_eq!(upper.get(&'H'), Some(&'氢'));
}

#[test]
fn lowercase_class_includes_l() {
    let lower = Codec::new().class_table(SymbolClass::Lowercase);
    assert_eq!(lower.get(&'l'), Some(&'李'));
}

// ============================================================================
// Entries
// ============================================================================

#[test]
fn entries_follow_canonical_order() {
    let entries = Codec::new().entries();
    assert_eq!(entries.len(), ALPHABET_LEN);
    let pairs: Vec<(char, char)> = entries.iter().map(|e| (e.symbol, e.glyph)).collect();
    assert_eq!(pairs, CANONICAL.to_vec());
}

#[test]
fn entries_carry_their_class() {
    let entries = Codec::new().entries();
    assert_eq!(
        entries[0],
        TableEntry {
            symbol: '0',
            glyph: '零',
            class: SymbolClass::Digit
        }
    );
    assert_eq!(entries[10].class, SymbolClass::Uppercase);
    assert_eq!(entries[ALPHABET_LEN - 1].class, SymbolClass::Lowercase);
}

#[test]
fn entry_serializes_to_json() {
    let entry = Codec::new().entries()[10];
    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(json, r#"{"symbol":"A","glyph":"氩","class":"uppercase"}"#);
    let back: TableEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
}
