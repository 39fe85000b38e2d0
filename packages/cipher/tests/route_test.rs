//! Route cipher: key validation, grid shape, known answers and round trips

use classic_cipher::{CipherError, RouteCipher};
use classic_common::LoggingTransformer;

fn cipher(key: i64) -> RouteCipher {
    LoggingTransformer::init_test();
    RouteCipher::new(key).expect("key should be accepted")
}

#[test]
fn test_non_positive_keys_are_rejected() {
    for key in [0, -1, -5, i64::MIN] {
        assert!(
            matches!(RouteCipher::new(key), Err(CipherError::InvalidKey(_))),
            "key {key} should be invalid"
        );
    }
    assert_eq!(cipher(7).columns(), 7);
}

#[test]
fn test_known_answers() {
    let cases = [
        (3, "ABCDEF", "CFBEAD"),
        (1, "TEST", "TEST"),
        (10, "TEST", "TSET"),
        (4, "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "DHLPTXCGKOSWBFJNRVZAEIMQUY"),
        (3, "helloworld", "LWLEORHLOD"),
        (3, "Hello World", "LWLEORHLOD"),
        (4, "Hello World", "LRLOEWDHOL"),
        (4, "Test string here", "TIESRHETGETSNR"),
        (2, "ABCDEF", "BDFACE"),
        (3, "ABCDEFGHIJ", "CFIBEHADGJ"),
        (3, "ABCDEFGHI", "CFIBEHADG"),
        (4, "ABCDEFGHIJKL", "DHLCGKBFJAEI"),
        (3, "T e s t t e x t", "SEETTTTX"),
        (5, "A", "A"),
        (100, "A", "A"),
    ];
    for (key, open, expected) in cases {
        assert_eq!(
            cipher(key).encrypt(open).expect("encrypt"),
            expected,
            "key {key}, open text {open:?}"
        );
        assert_eq!(
            cipher(key).decrypt(expected).expect("decrypt"),
            RouteCipher::normalize(open).expect("normalize"),
            "key {key}, cipher text {expected:?}"
        );
    }
}

#[test]
fn test_encrypt_validation_order() {
    let cipher = cipher(4);
    assert!(matches!(cipher.encrypt(""), Err(CipherError::EmptyInput(_))));
    assert!(matches!(cipher.encrypt("     "), Err(CipherError::NoLetters)));
    for text in [
        "Hello, world!",
        "123 456",
        "Test123string",
        "tab\tseparated",
        "ПРИВЕТ",
        "café",
    ] {
        assert!(
            matches!(cipher.encrypt(text), Err(CipherError::InvalidOpenText(_))),
            "open text {text:?} should be invalid"
        );
    }
}

#[test]
fn test_decrypt_validation() {
    let cipher = cipher(4);
    assert!(matches!(cipher.decrypt(""), Err(CipherError::EmptyInput(_))));
    for text in ["ABC DE", "ABC123", "ABC,DEF!", " "] {
        assert!(
            matches!(cipher.decrypt(text), Err(CipherError::InvalidCipherText(_))),
            "cipher text {text:?} should be invalid"
        );
    }
}

#[test]
fn test_decrypt_case_folds() {
    assert_eq!(cipher(3).decrypt("cfbead").expect("decrypt"), "ABCDEF");
}

#[test]
fn test_round_trips() {
    for (key, text) in [
        (4, "HELLO"),
        (4, "ABCDEFGHIJ"),
        (3, "ABCDEFGHI"),
        (1, "SIMPLE"),
        (5, "CRYPTOGRAPHY"),
        (12, "CRYPTOGRAPHY"),
        (13, "CRYPTOGRAPHY"),
    ] {
        let cipher = cipher(key);
        let encrypted = cipher.encrypt(text).expect("encrypt");
        assert_eq!(cipher.decrypt(&encrypted).expect("decrypt"), text, "key {key}");
    }
}

#[test]
fn test_huge_key_is_a_reversal() {
    let cipher = cipher(i64::MAX);
    assert_eq!(cipher.encrypt("abc").expect("encrypt"), "CBA");
    assert_eq!(cipher.decrypt("CBA").expect("decrypt"), "ABC");
}

#[test]
fn test_grid_shape() {
    let grid = cipher(3).grid("ABCD EFGHIJ").expect("grid");
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.columns(), 3);
    assert_eq!(grid.len(), 10);
    assert_eq!(grid.cell(0, 2), Some('C'));
    assert_eq!(grid.cell(3, 0), Some('J'));
    assert_eq!(grid.cell(3, 1), None);
    assert_eq!(grid.cell(9, 9), None);
    assert_eq!(grid.read_rows(), "ABCDEFGHIJ");
    assert_eq!(grid.read_columns(), "CFIBEHADGJ");
    assert_eq!(grid.to_string(), "A B C\nD E F\nG H I\nJ . .");
}

#[test]
fn test_grid_narrows_to_letter_count() {
    let grid = cipher(10).grid("TEST").expect("grid");
    assert_eq!(grid.rows(), 1);
    assert_eq!(grid.columns(), 4);
    assert_eq!(grid.to_string(), "T E S T");
}
