//
// emoji-list - emoji-list binary crate.
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
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]

//! Command line front-end of `emojilib`.
//!
//! The binary entry point in `src/main.rs` parses the arguments and hands
//! them to [`args::Opt::execute`]. Fetching and parsing the registry is done
//! in the `emojilib` crate.

pub use emojilib::{conf, error::*, Settings};

pub mod args;
pub mod subcommands;
