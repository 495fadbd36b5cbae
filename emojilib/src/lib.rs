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

#![deny(
    rustdoc::redundant_explicit_links,
    unsafe_code,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
    clippy::unused_enumerate_index,
    clippy::manual_hash_one,
)]
#![allow(clippy::option_if_let_else, clippy::missing_const_for_fn)]
#![doc = include_str!("../README.md")]
//!
//! ## Description
//!
//! A crate that turns the Unicode emoji registry into typed records:
//! - Classify registry lines and extract an [`EmojiRecord`] from every data
//!   line (see module [`emoji`])
//! - Decompose skin tone modifiers and derive search terms (see
//!   [`emoji::skin_tone`] and [`emoji::search_terms`])
//! - Retrieve the registry text over HTTP, from a file or from standard
//!   input (see module [`source`])
//!
//! Other exports are
//! - Configuration for the registry location and logging (see module
//!   [`conf`])
//! - A `debug` macro that logs an expression when the `debug-tracing`
//!   feature is enabled. (see [`debug` macro](debug!))

#[macro_use]
pub mod dbg {

    #[allow(clippy::redundant_closure)]
    #[macro_export]
    macro_rules! debug {
        ($val:literal) => {
            {
                if cfg!(feature="debug-tracing") {
                    $crate::log::debug!($val);
                }
                $val
            }
        };
        ($val:expr) => {
            if cfg!(feature="debug-tracing") {
                let stringify = stringify!($val);
                match $val {
                    tmp => {
                        $crate::log::debug!("{} = {:?}", stringify, tmp);
                        tmp
                    }
                }
            } else {
                $val
            }
        };
        ($fmt:literal, $($arg:tt)*) => {
            if cfg!(feature="debug-tracing") {
                $crate::log::debug!($fmt, $($arg)*);
            }
        };
    }
}

pub mod conf;
pub use conf::Settings;
pub mod emoji;
pub use emoji::{
    EmojiList, EmojiListParser, EmojiRecord, KnownGroup, ListStats, Qualification, SkinTone,
};
pub mod error;
pub use error::*;
pub mod source;
pub use source::Source;

#[macro_use]
pub mod utils;

pub use utils::logging::{LogLevel, StderrLogger};

#[macro_use]
extern crate serde_derive;
pub extern crate log;
/* parser */
pub extern crate nom;

pub extern crate indexmap;
pub extern crate smallvec;
