// Property-style checks over generated candidates

use quiz_platform::validation::{is_valid_username, validate_username};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_";

fn candidates(len: usize) -> Vec<String> {
    (0..ALPHABET.len())
        .map(|offset| {
            (0..len)
                .map(|i| ALPHABET[(offset + i * 7) % ALPHABET.len()] as char)
                .collect()
        })
        .collect()
}

#[test]
fn accepts_allowed_alphabet_within_bounds() {
    for len in 3..=10 {
        for name in candidates(len) {
            assert!(validate_username(&name).is_ok(), "{:?}", name);
        }
    }
}

#[test]
fn rejects_out_of_bounds_lengths() {
    for len in (0..3).chain(11..16) {
        for name in candidates(len) {
            assert!(!is_valid_username(&name), "{:?}", name);
        }
    }
}

#[test]
fn rejects_surrounding_spaces() {
    for name in candidates(5) {
        assert!(!is_valid_username(&format!(" {}", name)));
        assert!(!is_valid_username(&format!("{} ", name)));
        assert!(!is_valid_username(&format!(" {} ", name)));
    }
}

#[test]
fn rejects_any_foreign_character() {
    let foreign = ['A', 'Z', '-', '.', '@', ' ', '!', 'é', '\t'];
    for c in foreign {
        for position in 0..5 {
            let mut name: Vec<char> = "abcde".chars().collect();
            name[position] = c;
            let name: String = name.into_iter().collect();
            assert!(!is_valid_username(&name), "{:?}", name);
        }
    }
}

#[test]
fn uppercase_is_not_normalized() {
    assert!(validate_username("john").is_ok());
    assert!(validate_username("John").is_err());
    assert!(validate_username("JOHN").is_err());
}
