use crate::config::{InsertMode, VocabConfig};
use crate::vocab::{count_reader, normalize, tokens, Vocabulary};
use ahash::AHashSet as HashSet;
use proptest::prelude::*;

/// Tokens mixing case, digits and punctuation.
fn raw_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C0-9.,!'-]{1,4}", 0..150)
}

proptest! {
    /// Property 1: Total counts every token
    #[test]
    fn prop_total_is_token_count(input in raw_tokens()) {
        let text = input.join(" ");
        let vocab = count_reader(text.as_bytes(), VocabConfig::default()).unwrap();
        prop_assert_eq!(vocab.count().total, input.len());
    }

    /// Property 2: Unique counts distinct normalized words
    #[test]
    fn prop_unique_is_distinct_normalized(input in raw_tokens(), skip_empty in any::<bool>()) {
        let text = input.join("\n");
        let config = VocabConfig::default().with_skip_empty(skip_empty);
        let vocab = count_reader(text.as_bytes(), config).unwrap();

        let expected: HashSet<String> = input
            .iter()
            .map(|t| normalize(t))
            .filter(|w| !(skip_empty && w.is_empty()))
            .collect();
        prop_assert_eq!(vocab.count().unique, expected.len());
    }

    /// Property 3: Normalized words contain only lowercase letters
    #[test]
    fn prop_normalize_lowercase_letters(token in "\\PC{0,12}") {
        let word = normalize(&token);
        prop_assert!(word.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
        prop_assert_eq!(normalize(&word), word.clone());
    }

    /// Property 4: Insert mode does not change the counts
    #[test]
    fn prop_modes_agree(input in raw_tokens()) {
        let mut balanced = Vocabulary::new(VocabConfig::default());
        let mut unbalanced = Vocabulary::new(VocabConfig::default().with_mode(InsertMode::Unbalanced));
        balanced.extend(input.iter().map(String::as_str));
        unbalanced.extend(input.iter().map(String::as_str));

        prop_assert_eq!(balanced.count(), unbalanced.count());
        let left: Vec<&String> = balanced.tree().iter().collect();
        let right: Vec<&String> = unbalanced.tree().iter().collect();
        prop_assert_eq!(left, right);
    }
}

/// Bolero fuzz test: Arbitrary bytes never break the counter
#[cfg(test)]
#[test]
fn fuzz_vocab_no_panic() {
    bolero::check!().with_type::<String>().for_each(|text| {
        let vocab = count_reader(text.as_bytes(), VocabConfig::default()).unwrap();
        let count = vocab.count();
        assert!(count.unique <= count.total);
        assert_eq!(count.total, tokens(text).count());
    });
}
