// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_row_list
//!
//! Typed row lists for heterogeneous, ordered UI lists (team pages, team lists, chat
//! inbox previews). A list is a sequence of rows, where each row is one variant of a
//! closed sum type. The crate turns such a sequence into an ordered sequence of
//! [`RenderInstruction`]s, each carrying a stable [`RowKey`] derived from the row's
//! natural identity (never its position).
//!
//! ```text
//! ┌──────────────────┐   ┌─────────────────┐   ┌──────────────────┐   ┌─────────────┐
//! │ rows: &[R]       │──▶│ project()       │──▶│ RowDispatcher<R> │──▶│ HostBinding │
//! │ R: RowVariant    │   │ keys + dup check│   │ exhaustive match │   │ (fragment)  │
//! └──────────────────┘   └─────────────────┘   └──────────────────┘   └─────────────┘
//! ```
//!
//! 1. [`RowVariant`] is implemented by an `enum` whose variants are the row kinds. The
//!    compiler forces every `match` over it to handle every kind, so adding a kind
//!    without teaching the dispatcher about it is a build failure.
//! 2. [`project()`] derives every row's [`RowKey`] up front and fails fast with
//!    [`RowListError::DuplicateKey`] before any instruction is produced.
//! 3. The returned [`ProjectedRows`] is lazy and re-iterable. Each call to
//!    [`ProjectedRows::iter()`] dispatches every row again, in input order.
//! 4. A [`HostBinding`] (eg: [`PlainTextHost`]) consumes the instructions and is the
//!    only thing that interprets their params.
//!
//! Rows that arrive untyped (as JSON) go through [`try_decode_rows()`], which is where
//! [`RowListError::UnhandledVariant`] and [`RowListError::MalformedPayload`] can occur.
//!
//! # Example
//!
//! ```
//! use r3bl_row_list::{project, PlainTextHost, HostBinding, TeamPageDispatcher,
//!                     TeamRow, MemberRow, Teamname};
//!
//! let team = Teamname::from("acme");
//! let rows = vec![
//!     TeamRow::Header { teamname: team.clone() },
//!     TeamRow::Member(MemberRow::new("alice", team.clone())),
//!     TeamRow::Member(MemberRow::new("bob", team.clone())),
//! ];
//!
//! let dispatcher = TeamPageDispatcher::new();
//! let projected = project(&rows, &dispatcher).unwrap();
//! let fragment = PlainTextHost::new(40).render(projected.iter()).unwrap();
//!
//! let keys: Vec<&str> = fragment.lines.iter().map(|it| it.key.as_str()).collect();
//! assert_eq!(keys, vec!["header:acme", "member:alice", "member:bob"]);
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod inbox;
pub mod rows;
pub mod team_list;
pub mod team_page;
pub mod text_host;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use inbox::*;
pub use rows::*;
pub use team_list::*;
pub use team_page::*;
pub use text_host::*;
