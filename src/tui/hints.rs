// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashSet, VecDeque};

/// Prefix-free hint labels over `hint_chars`, shortest first.
///
/// Single characters are handed out while they last; once there are more
/// targets than characters, the earliest characters become prefixes of
/// two-character labels. No label is a prefix of another, so a typed
/// label is matched as soon as it is complete.
pub(crate) fn gen_labels(n: usize, hint_chars: &str) -> Vec<String> {
    let alphabet: Vec<char> = hint_chars.chars().collect();
    assert!(alphabet.len() >= 2, "hint_chars needs at least two characters");

    let mut seen = HashSet::with_capacity(alphabet.len());
    for &ch in &alphabet {
        assert!(seen.insert(ch), "hint_chars must not contain duplicate characters");
    }

    if n == 0 {
        return Vec::new();
    }

    let mut queue: VecDeque<String> = alphabet.iter().map(|ch| ch.to_string()).collect();
    while queue.len() < n {
        let prefix = queue.pop_front().expect("queue holds at least the alphabet");
        for &ch in &alphabet {
            let mut label = prefix.clone();
            label.push(ch);
            queue.push_back(label);
        }
    }

    queue.into_iter().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::gen_labels;
    use std::collections::HashSet;

    #[test]
    fn single_characters_while_they_last() {
        assert_eq!(gen_labels(3, "abc"), vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
    }

    #[test]
    fn overflow_retires_the_first_character_into_prefixes() {
        assert_eq!(
            gen_labels(4, "abc"),
            vec!["b".to_owned(), "c".to_owned(), "aa".to_owned(), "ab".to_owned()]
        );
    }

    #[test]
    fn labels_are_unique_and_prefix_free() {
        let labels = gen_labels(30, "asdfjklewcmpgh");
        assert_eq!(labels.len(), 30);

        let mut uniq = HashSet::with_capacity(labels.len());
        for label in &labels {
            assert!(uniq.insert(label.as_str()), "duplicate label: {label}");
        }

        for a in &labels {
            for b in &labels {
                if a != b {
                    assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn zero_targets_need_no_labels() {
        assert!(gen_labels(0, "abc").is_empty());
    }

    #[test]
    #[should_panic(expected = "at least two characters")]
    fn single_character_alphabet_panics() {
        let _ = gen_labels(1, "a");
    }

    #[test]
    #[should_panic(expected = "must not contain duplicate characters")]
    fn duplicate_characters_panic() {
        let _ = gen_labels(1, "abca");
    }
}
