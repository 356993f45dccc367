// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::{HashMap, HashSet};

use crate::{CommonResult, RenderInstruction, RowKey};

/// The adapter between the engine and the surrounding UI framework. A host consumes one
/// pass of instructions (eg: [`crate::ProjectedRows::iter()`]) and produces whatever its
/// framework renders (a fragment of widgets, lines of text, etc). It is the only consumer
/// allowed to interpret [`RenderInstruction::params`].
///
/// Hosts must not produce partial output: if any instruction in the pass is an error,
/// `render` returns that error and no fragment. See [`crate::PlainTextHost`] for an
/// implementation.
pub trait HostBinding<P> {
    type Fragment;

    /// # Errors
    ///
    /// Returns the first error in `instructions`, or an error from the host itself.
    fn render<I>(&mut self, instructions: I) -> CommonResult<Self::Fragment>
    where
        I: IntoIterator<Item = CommonResult<RenderInstruction<P>>>;
}

/// What changed between two consecutive passes, in terms of stable keys. This is the
/// summary a host uses for incremental reconciliation: state attached to `retained` keys
/// survives, `inserted` keys get new state, `removed` keys have their state dropped.
///
/// Since keys come from natural identities, reordering rows upstream shows up as `moved`
/// (a subset of `retained`), never as a remove + insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// In both passes, in the order of the next pass.
    pub retained: Vec<RowKey>,
    /// Only in the next pass, in the order of the next pass.
    pub inserted: Vec<RowKey>,
    /// Only in the previous pass, in the order of the previous pass.
    pub removed: Vec<RowKey>,
    /// The fewest retained keys that have to move so the retained keys of the previous
    /// pass end up in the order of the next pass. Everything else in `retained` keeps
    /// its relative order. In the order of the next pass.
    pub moved: Vec<RowKey>,
}

impl KeyDiff {
    /// Both slices are expected to hold pairwise distinct keys, which is guaranteed for
    /// keys coming out of [`crate::project()`].
    #[must_use]
    pub fn between(previous: &[RowKey], next: &[RowKey]) -> Self {
        let previous_set: HashSet<&RowKey> = previous.iter().collect();
        let next_set: HashSet<&RowKey> = next.iter().collect();

        let mut it = KeyDiff::default();

        for key in next {
            if previous_set.contains(key) {
                it.retained.push(key.clone());
            } else {
                it.inserted.push(key.clone());
            }
        }

        it.removed = previous
            .iter()
            .filter(|key| !next_set.contains(key))
            .cloned()
            .collect();

        // Retained keys in the order of the next pass, ranked by the previous pass.
        let previous_rank: HashMap<&RowKey, usize> = previous
            .iter()
            .filter(|key| next_set.contains(key))
            .enumerate()
            .map(|(rank, key)| (key, rank))
            .collect();
        let ranks: Vec<usize> = it
            .retained
            .iter()
            .filter_map(|key| previous_rank.get(key).copied())
            .collect();
        let stays_put = longest_increasing_run(&ranks);
        it.moved = it
            .retained
            .iter()
            .zip(stays_put)
            .filter(|(_, kept)| !kept)
            .map(|(key, _)| key.clone())
            .collect();

        it
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty() && self.moved.is_empty()
    }
}

/// Flags the members of one longest strictly increasing subsequence of `ranks`.
/// Patience sorting, `O(n log n)`.
fn longest_increasing_run(ranks: &[usize]) -> Vec<bool> {
    // `tails[len]` is the index of the smallest tail of an increasing run of `len + 1`.
    let mut tails: Vec<usize> = vec![];
    let mut predecessor: Vec<Option<usize>> = vec![None; ranks.len()];

    for (index, rank) in ranks.iter().enumerate() {
        let len = tails.partition_point(|&tail| ranks[tail] < *rank);
        predecessor[index] = len.checked_sub(1).map(|it| tails[it]);
        if len == tails.len() {
            tails.push(index);
        } else {
            tails[len] = index;
        }
    }

    let mut acc = vec![false; ranks.len()];
    let mut cursor = tails.last().copied();
    while let Some(index) = cursor {
        acc[index] = true;
        cursor = predecessor[index];
    }
    acc
}
