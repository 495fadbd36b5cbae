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

//! Parsing of the Unicode `emoji-test.txt` registry.
//!
//! The registry is a line oriented text file. Every line is first
//! [classified](classify::LineKind::classify) as a group or subgroup marker,
//! a blank line, a comment or a data line. Data lines are turned into
//! [`EmojiRecord`]s by [`EmojiRecord::from_line`], and
//! [`parser::parse_str`] folds the whole stream into an [`EmojiList`] while
//! carrying the current group, subgroup and sequence index.
//!
//! ```text
//! # group: Smileys & Emotion
//! # subgroup: face-smiling
//! 1F600 ; fully-qualified # 😀 E1.0 grinning face
//! ```

pub mod classify;
pub mod group;
pub mod list;
pub mod parser;
pub mod record;
pub mod search_terms;
pub mod skin_tone;

pub use classify::LineKind;
pub use group::KnownGroup;
pub use list::{EmojiList, ListStats};
pub use parser::{parse_str, EmojiListParser, ParserState};
pub use record::{EmojiRecord, LineError, Qualification};
pub use search_terms::search_terms;
pub use skin_tone::{decompose_skin_tones, SkinTone, SkinTones};
