#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Boundary-level tests for the passphrase tool over a real directory
//! source, plus error payload translation.

use proptest::prelude::*;

use alea_core::{DirSource, RandomError, Wordlist, WordlistId, WordlistSource};
use alea_tools::{
    generate_passphrase, ErrorKind, ErrorPayload, GeneratePassphraseRequest,
    GeneratePassphraseResult,
};

/// Write full-coverage lists for every canonical identifier into a temp
/// directory and return a source over it.
fn seeded_dir() -> (tempfile::TempDir, DirSource) {
    let dir = tempfile::tempdir().unwrap();
    for id in WordlistId::all() {
        let mut keys: Vec<String> = vec![String::new()];
        for _ in 0..id.dice_count() {
            keys = keys
                .iter()
                .flat_map(|k| {
                    ('1'..='6').map(move |face| {
                        let mut grown = k.clone();
                        grown.push(face);
                        grown
                    })
                })
                .collect();
        }
        let mut raw = String::new();
        for key in &keys {
            raw.push_str(&format!("{key}\tw{key}\n"));
        }
        std::fs::write(dir.path().join(id.file_name()), raw).unwrap();
    }
    let source = DirSource::new(dir.path());
    (dir, source)
}

#[test]
fn end_to_end_over_directory_source() {
    let (_dir, source) = seeded_dir();
    let request: GeneratePassphraseRequest = serde_json::from_str(
        r#"{"wordCount": 5, "wordlist": "short_wordlist_unique_prefixes.txt", "capitalize": false}"#,
    )
    .unwrap();

    let result = generate_passphrase(&request, &source).unwrap();

    let raw = source
        .read(WordlistId::ShortUniquePrefixes.file_name())
        .unwrap();
    let list = Wordlist::parse(&raw);
    let tokens: Vec<&str> = result.passphrase.split(' ').collect();
    assert_eq!(tokens.len(), 5);
    assert_eq!(result.rolls.len(), 5);
    for (token, roll) in tokens.iter().zip(&result.rolls) {
        assert_eq!(list.get(roll), Some(*token));
    }
}

#[test]
fn every_canonical_wordlist_generates() {
    let (_dir, source) = seeded_dir();
    for id in WordlistId::all() {
        let request = GeneratePassphraseRequest {
            word_count: Some(3),
            wordlist: Some(id.file_name().to_string()),
            capitalize: None,
        };
        let result = generate_passphrase(&request, &source).unwrap();
        assert_eq!(result.rolls.len(), 3, "{}", id.file_name());
        for roll in &result.rolls {
            assert_eq!(roll.len(), id.dice_count(), "{}", id.file_name());
        }
    }
}

#[test]
fn failures_translate_to_payloads() {
    let (_dir, source) = seeded_dir();

    let request = GeneratePassphraseRequest {
        word_count: Some(-2),
        wordlist: None,
        capitalize: None,
    };
    let payload: ErrorPayload = generate_passphrase(&request, &source).unwrap_err().into();
    assert_eq!(payload.kind, ErrorKind::InvalidArgument);

    let empty_dir = tempfile::tempdir().unwrap();
    let empty_source = DirSource::new(empty_dir.path());
    let request = GeneratePassphraseRequest {
        word_count: None,
        wordlist: None,
        capitalize: None,
    };
    let err = generate_passphrase(&request, &empty_source).unwrap_err();
    assert!(matches!(err, RandomError::ResourceNotFound(_)));
    let payload = ErrorPayload::from(&err);
    assert_eq!(payload.kind, ErrorKind::ResourceNotFound);
    assert!(payload
        .message
        .contains(WordlistId::ShortUniquePrefixes.file_name()));
}

#[test]
fn result_serializes_passphrase_and_rolls() {
    let result = GeneratePassphraseResult {
        passphrase: "alpha beta".to_string(),
        rolls: vec!["1111".to_string(), "2222".to_string()],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"passphrase\""));
    assert!(json.contains("\"rolls\""));
    assert!(json.contains("1111"));
}

proptest! {
    // Filesystem setup per case is slow; a small case count is plenty for
    // a count-propagation property.
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Any in-range word count yields exactly that many rolls and tokens.
    #[test]
    fn word_count_propagates(count in 1usize..=16) {
        let (_dir, source) = seeded_dir();
        let request = GeneratePassphraseRequest {
            word_count: Some(i64::try_from(count).unwrap()),
            wordlist: None,
            capitalize: None,
        };
        let result = generate_passphrase(&request, &source).unwrap();
        prop_assert_eq!(result.rolls.len(), count);
        prop_assert_eq!(result.passphrase.split(' ').count(), count);
    }
}
