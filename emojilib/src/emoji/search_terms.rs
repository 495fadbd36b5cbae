//
// emoji-list - emojilib crate.
//
// Copyright 2026 emoji-list contributors
//
// This file is part of emoji-list.
//
// emoji-list is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emoji-list is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emoji-list. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

//! Search terms derived from an emoji name.

/// Characters removed from a name before it is tokenized.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    ',', '.', '\'', '\u{2019}', '"', '\u{201C}', '\u{201D}', '!', '(', ')', ':',
];

/// Literal replacements, applied in order and case-sensitively.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("1st", "First"),
    ("2nd", "Second"),
    ("3rd", "Third"),
    ("#", "Hash"),
    ("*", "Asterisk"),
];

pub const STOP_WORDS: &[&str] = &[
    "of", "with", "without", "and", "or", "&", "-", "on", "the", "in",
];

/// Normalizes `name` into lowercase search terms.
///
/// ```
/// use emojilib::emoji::search_terms;
///
/// assert_eq!(search_terms("man and woman with bow"), ["man", "woman", "bow"]);
/// assert_eq!(search_terms("1st place medal"), ["first", "place", "medal"]);
/// assert_eq!(search_terms("keycap: #"), ["keycap", "hash"]);
/// ```
pub fn search_terms(name: &str) -> Vec<String> {
    let mut name: String = name
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();
    for &(from, to) in SUBSTITUTIONS {
        if name.contains(from) {
            name = name.replace(from, to);
        }
    }
    name.split_whitespace()
        .map(str::to_lowercase)
        .filter(|term| !STOP_WORDS.contains(&term.as_str()))
        .filter(|term| term.chars().any(char::is_alphanumeric))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_terms_stop_words() {
        assert_eq!(
            search_terms("man and woman with bow"),
            ["man", "woman", "bow"]
        );
        assert_eq!(
            search_terms("The Great Wave of Kanagawa on the sea"),
            ["great", "wave", "kanagawa", "sea"]
        );
        assert_eq!(search_terms("face without mouth"), ["face", "mouth"]);
        assert_eq!(search_terms("rock & roll"), ["rock", "roll"]);
        assert!(search_terms("of the and").is_empty());
        assert!(search_terms("").is_empty());
    }

    #[test]
    fn test_search_terms_punctuation() {
        assert_eq!(
            search_terms("man health worker: dark skin tone"),
            ["man", "health", "worker", "dark", "skin", "tone"]
        );
        assert_eq!(
            search_terms("Japanese \u{201C}here\u{201D} button"),
            ["japanese", "here", "button"]
        );
        assert_eq!(
            search_terms("A button (blood type)"),
            ["a", "button", "blood", "type"]
        );
        assert_eq!(search_terms("St. Pierre & Miquelon!"), ["st", "pierre", "miquelon"]);
        assert_eq!(
            search_terms("woman\u{2019}s hat"),
            ["womans", "hat"]
        );
        assert_eq!(
            search_terms("people holding hands: medium-dark skin tone, light skin tone"),
            [
                "people", "holding", "hands", "medium", "dark", "skin", "tone", "light", "skin",
                "tone"
            ]
        );
    }

    #[test]
    fn test_search_terms_substitutions() {
        assert_eq!(search_terms("1st place medal"), ["first", "place", "medal"]);
        assert_eq!(search_terms("2nd place medal"), ["second", "place", "medal"]);
        assert_eq!(search_terms("3rd place medal"), ["third", "place", "medal"]);
        assert_eq!(search_terms("keycap: #"), ["keycap", "hash"]);
        assert_eq!(search_terms("keycap: *"), ["keycap", "asterisk"]);
        assert_eq!(search_terms("keycap: 10"), ["keycap", "10"]);
    }

    #[test]
    fn test_search_terms_idempotent() {
        for name in [
            "man and woman with bow",
            "woman and man holding hands: medium-dark skin tone, medium skin tone",
            "1st place medal",
            "keycap: *",
            "flag: St. Kitts & Nevis",
        ] {
            let terms = search_terms(name);
            assert_eq!(search_terms(&terms.join(" ")), terms, "{}", name);
        }
    }
}
