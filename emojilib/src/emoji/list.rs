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

//! The ordered result of a pipeline run.

use indexmap::IndexMap;

use super::record::{EmojiRecord, Qualification};

/// Records in registry order; `self[i].sequence_index() == i`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmojiList {
    records: Vec<EmojiRecord>,
}

/// Counts over an [`EmojiList`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ListStats {
    pub total: usize,
    pub component: usize,
    pub fully_qualified: usize,
    pub minimally_qualified: usize,
    pub unqualified: usize,
    /// Records with at least one skin tone modifier.
    pub with_skin_tone: usize,
    /// Records per group, in first-seen order.
    pub groups: IndexMap<String, usize>,
}

impl EmojiList {
    pub(super) fn from_records(records: Vec<EmojiRecord>) -> Self {
        Self { records }
    }

    pub fn as_slice(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn into_inner(self) -> Vec<EmojiRecord> {
        self.records
    }

    /// Component and fully-qualified records.
    pub fn displayable(&self) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.records.iter().filter(|r| r.is_displayable())
    }

    /// Displayable records without a skin tone variation.
    pub fn basic(&self) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.displayable().filter(|r| !r.has_skin_tone())
    }

    /// Displayable records of the group named `group`.
    pub fn in_group<'s>(&'s self, group: &'s str) -> impl Iterator<Item = &'s EmojiRecord> + 's {
        self.displayable().filter(move |r| r.group() == group)
    }

    /// Distinct group names in the order they first appear.
    pub fn groups(&self) -> Vec<&str> {
        let mut ret: Vec<&str> = Vec::new();
        for r in &self.records {
            if !ret.contains(&r.group()) {
                ret.push(r.group());
            }
        }
        ret
    }

    pub fn stats(&self) -> ListStats {
        let mut stats = ListStats {
            total: self.records.len(),
            ..ListStats::default()
        };
        for r in &self.records {
            match r.qualification() {
                Qualification::Component => stats.component += 1,
                Qualification::FullyQualified => stats.fully_qualified += 1,
                Qualification::MinimallyQualified => stats.minimally_qualified += 1,
                Qualification::Unqualified => stats.unqualified += 1,
            }
            if r.has_skin_tone() {
                stats.with_skin_tone += 1;
            }
            *stats.groups.entry(r.group().to_string()).or_default() += 1;
        }
        stats
    }
}

impl std::ops::Deref for EmojiList {
    type Target = [EmojiRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl IntoIterator for EmojiList {
    type Item = EmojiRecord;
    type IntoIter = std::vec::IntoIter<EmojiRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a EmojiList {
    type Item = &'a EmojiRecord;
    type IntoIter = std::slice::Iter<'a, EmojiRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::parse_str;

    const SAMPLE: &str = "# group: Smileys & Emotion
# subgroup: face-smiling
1F600 ; fully-qualified # 😀 E1.0 grinning face
263A ; unqualified # ☺ E0.6 smiling face
# group: People & Body
# subgroup: hand-fingers-open
1F44B ; fully-qualified # 👋 E0.6 waving hand
1F44B 1F3FB ; fully-qualified # 👋🏻 E1.0 waving hand: light skin tone
1F9D1 200D 2695 ; minimally-qualified # 🧑‍⚕ E12.1 health worker
# group: Component
# subgroup: skin-tone
1F3FB ; component # 🏻 E1.0 light skin tone
";

    #[test]
    fn test_list_selections() {
        let list = parse_str(SAMPLE);
        assert_eq!(list.len(), 6);
        assert_eq!(
            list.displayable().map(EmojiRecord::name).collect::<Vec<_>>(),
            [
                "E1.0 grinning face",
                "E0.6 waving hand",
                "E1.0 waving hand: light skin tone",
                "E1.0 light skin tone"
            ]
        );
        assert_eq!(
            list.basic().map(EmojiRecord::name).collect::<Vec<_>>(),
            ["E1.0 grinning face", "E0.6 waving hand"]
        );
        assert_eq!(list.in_group("People & Body").count(), 2);
        assert_eq!(list.in_group("Flags").count(), 0);
        assert_eq!(
            list.groups(),
            ["Smileys & Emotion", "People & Body", "Component"]
        );
    }

    #[test]
    fn test_list_stats() {
        let stats = parse_str(SAMPLE).stats();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.component, 1);
        assert_eq!(stats.fully_qualified, 3);
        assert_eq!(stats.minimally_qualified, 1);
        assert_eq!(stats.unqualified, 1);
        assert_eq!(stats.with_skin_tone, 2);
        assert_eq!(
            stats.groups.into_iter().collect::<Vec<_>>(),
            [
                ("Smileys & Emotion".to_string(), 2),
                ("People & Body".to_string(), 3),
                ("Component".to_string(), 1)
            ]
        );
        assert_eq!(EmojiList::default().stats(), ListStats::default());
    }

    #[test]
    fn test_list_serializes_as_sequence() {
        let list = parse_str(SAMPLE);
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with("[{"));
        let back: EmojiList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
        assert_eq!(
            list.into_iter().map(|r| r.sequence_index()).collect::<Vec<_>>(),
            [0, 1, 2, 3, 4, 5]
        );
    }
}
