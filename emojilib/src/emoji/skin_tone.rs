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

//! Skin tone modifiers (Fitzpatrick types) of an emoji sequence.

use smallvec::SmallVec;

/// The skin tones of a record, in the order their modifiers occur.
pub type SkinTones = SmallVec<[SkinTone; 2]>;

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SkinTone {
    /// No modifier, the default yellow rendering.
    #[default]
    None,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    /// Modifier code points, from light to dark.
    pub const MODIFIERS: [(&'static str, Self); 5] = [
        ("1F3FB", Self::Light),
        ("1F3FC", Self::MediumLight),
        ("1F3FD", Self::Medium),
        ("1F3FE", Self::MediumDark),
        ("1F3FF", Self::Dark),
    ];

    /// Recognizes one hex code point of a sequence as a modifier.
    pub fn from_modifier(code_point: &str) -> Option<Self> {
        Self::MODIFIERS
            .iter()
            .find(|(hex, _)| hex.eq_ignore_ascii_case(code_point))
            .map(|(_, tone)| *tone)
    }

    pub const fn modifier(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Light => Some('\u{1F3FB}'),
            Self::MediumLight => Some('\u{1F3FC}'),
            Self::Medium => Some('\u{1F3FD}'),
            Self::MediumDark => Some('\u{1F3FE}'),
            Self::Dark => Some('\u{1F3FF}'),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Light => "light",
            Self::MediumLight => "medium-light",
            Self::Medium => "medium",
            Self::MediumDark => "medium-dark",
            Self::Dark => "dark",
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for SkinTone {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

/// Scans the whitespace separated code points once, left to right, and
/// returns a tag for every modifier found. Sequences of two people with
/// different (or equal) tones yield two tags. Without any modifier the
/// result is `[SkinTone::None]`, so it is never empty.
pub fn decompose_skin_tones(code_points: &str) -> SkinTones {
    let mut tones: SkinTones = code_points
        .split_whitespace()
        .filter_map(SkinTone::from_modifier)
        .collect();
    if tones.is_empty() {
        tones.push(SkinTone::None);
    }
    tones
}
