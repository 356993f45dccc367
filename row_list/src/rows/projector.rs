// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::{HashMap, hash_map::Entry},
          iter::FusedIterator};

use crate::{CommonResult, RenderInstruction, RowDispatcher, RowIndex, RowKey, RowListError,
            RowVariant, ok};

/// Project an ordered sequence of rows into an ordered, lazy sequence of
/// [`RenderInstruction`]s.
///
/// 1. Every row's [`RowKey`] is derived up front. If two rows produce the same key, this
///    fails w/ [`RowListError::DuplicateKey`] and nothing is produced at all.
/// 2. The returned [`ProjectedRows`] dispatches lazily, in input order. It performs no
///    reordering, filtering or deduplication.
/// 3. It is re-iterable: every call to [`ProjectedRows::iter()`] dispatches every row
///    again. Nothing is memoized across passes.
/// 4. A pass ends at the first row that fails to dispatch. That error is the last item,
///    and no row after it is dispatched.
///
/// # Errors
///
/// Returns [`RowListError::DuplicateKey`] if two rows share a key.
pub fn project<'a, R, D>(
    rows: &'a [R],
    dispatcher: &'a D,
) -> CommonResult<ProjectedRows<'a, R, D>>
where
    R: RowVariant,
    D: RowDispatcher<R>,
{
    let keys = try_derive_unique_keys(rows)?;

    tracing::debug!(message = "project", row_count = rows.len());

    ok!(ProjectedRows {
        rows,
        dispatcher,
        keys,
    })
}

/// Derive the stable key of every row, in order, failing on the first collision.
///
/// # Errors
///
/// Returns [`RowListError::DuplicateKey`] naming both positions of the first collision.
pub fn try_derive_unique_keys<R: RowVariant>(rows: &[R]) -> CommonResult<Vec<RowKey>> {
    let mut first_seen_at: HashMap<RowKey, RowIndex> = HashMap::with_capacity(rows.len());
    let mut keys = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let index = RowIndex::new(index);
        let key = row.row_key();

        match first_seen_at.entry(key.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
            Entry::Occupied(entry) => {
                let first_index = *entry.get();
                // % is Display, ? is Debug.
                tracing::error!(
                    message = "duplicate row key",
                    key = %key,
                    first_index = %first_index,
                    duplicate_index = %index
                );
                return RowListError::DuplicateKey {
                    key,
                    first_index,
                    duplicate_index: index,
                }
                .into_result();
            }
        }

        keys.push(key);
    }

    ok!(keys)
}

/// The output of [`project()`]: rows whose keys are known to be pairwise distinct, and
/// the dispatcher to turn them into instructions on demand.
#[derive(Debug)]
pub struct ProjectedRows<'a, R, D> {
    rows: &'a [R],
    dispatcher: &'a D,
    keys: Vec<RowKey>,
}

impl<'a, R, D> ProjectedRows<'a, R, D>
where
    R: RowVariant,
    D: RowDispatcher<R>,
{
    /// Start a new pass over the rows.
    #[must_use]
    pub fn iter(&self) -> ProjectedRowsIter<'a, R, D> {
        ProjectedRowsIter {
            rows: self.rows,
            dispatcher: self.dispatcher,
            position: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.rows.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// The keys of all the rows, in order. Available w/out dispatching anything.
    #[must_use]
    pub fn keys(&self) -> &[RowKey] { &self.keys }

    /// Run a full pass and collect it. Either every row is dispatched, or the first
    /// failure is returned and nothing else.
    ///
    /// # Errors
    ///
    /// Returns the first dispatch error.
    pub fn try_collect_all(&self) -> CommonResult<Vec<RenderInstruction<D::Params>>> {
        let result: CommonResult<Vec<_>> = self.iter().collect();
        match &result {
            Ok(instructions) => tracing::debug!(
                message = "render pass complete",
                instruction_count = instructions.len()
            ),
            Err(_) => tracing::debug!(
                message = "render pass aborted",
                row_count = self.rows.len()
            ),
        }
        result
    }
}

impl<'a, R, D> IntoIterator for &ProjectedRows<'a, R, D>
where
    R: RowVariant,
    D: RowDispatcher<R>,
{
    type Item = CommonResult<RenderInstruction<D::Params>>;
    type IntoIter = ProjectedRowsIter<'a, R, D>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// One lazy pass over [`ProjectedRows`].
#[derive(Debug)]
pub struct ProjectedRowsIter<'a, R, D> {
    rows: &'a [R],
    dispatcher: &'a D,
    position: usize,
}

impl<R, D> Iterator for ProjectedRowsIter<'_, R, D>
where
    R: RowVariant,
    D: RowDispatcher<R>,
{
    type Item = CommonResult<RenderInstruction<D::Params>>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.get(self.position)?;
        let index = RowIndex::new(self.position);
        self.position += 1;

        let result = self.dispatcher.dispatch(row, index);
        if let Err(report) = &result {
            // Nothing after a failed row is dispatched.
            self.position = self.rows.len();
            tracing::warn!(
                message = "dispatch failed, aborting render pass",
                index = %index,
                key = %row.row_key(),
                error = ?report
            );
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<R, D> ExactSizeIterator for ProjectedRowsIter<'_, R, D>
where
    R: RowVariant,
    D: RowDispatcher<R>,
{
}

impl<R, D> FusedIterator for ProjectedRowsIter<'_, R, D>
where
    R: RowVariant,
    D: RowDispatcher<R>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefaultSubteamRenderer, MemberRoster, MemberRow, RosterMemberRenderer,
                TeamPageDispatcher, TeamRole, TeamRow, Teamname, assert_eq2};

    fn rows() -> Vec<TeamRow> {
        let team = Teamname::from("acme");
        vec![
            TeamRow::Header { teamname: team.clone() },
            TeamRow::Invites { teamname: team.clone() },
            TeamRow::Settings { teamname: team },
        ]
    }

    #[test]
    fn test_iter_is_exact_size_and_restartable() {
        let rows = rows();
        let dispatcher = TeamPageDispatcher::new();
        let projected = project(&rows, &dispatcher).unwrap();

        let mut iter = projected.iter();
        assert_eq2!(iter.len(), 3);
        _ = iter.next();
        assert_eq2!(iter.len(), 2);

        // A fresh pass starts over from the first row.
        let first_pass = projected.try_collect_all().unwrap();
        let second_pass = projected.try_collect_all().unwrap();
        assert_eq2!(first_pass.len(), 3);
        assert_eq2!(first_pass, second_pass);
    }

    #[test]
    fn test_keys_are_available_without_dispatch() {
        let rows = rows();
        let dispatcher = TeamPageDispatcher::new();
        let projected = project(&rows, &dispatcher).unwrap();
        let keys: Vec<&str> = projected.keys().iter().map(RowKey::as_str).collect();
        assert_eq2!(keys, vec!["header:acme", "invites:acme", "settings:acme"]);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let rows = rows();
        let dispatcher = TeamPageDispatcher::new();
        let projected = project(&rows, &dispatcher).unwrap();
        let mut count = 0;
        for it in &projected {
            assert!(it.is_ok());
            count += 1;
        }
        assert_eq2!(count, projected.len());
    }

    #[test]
    fn test_duplicate_key_reports_both_positions() {
        let team = Teamname::from("acme");
        let rows = vec![
            TeamRow::Header { teamname: team.clone() },
            TeamRow::Settings { teamname: team.clone() },
            TeamRow::Header { teamname: team },
        ];
        let report = try_derive_unique_keys(&rows).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<RowListError>(),
            Some(&RowListError::DuplicateKey {
                key: RowKey::new("header", Some("acme")),
                first_index: RowIndex::new(0),
                duplicate_index: RowIndex::new(2),
            })
        );
    }

    #[test]
    fn test_pass_stops_at_first_failed_row() {
        let team = Teamname::from("acme");
        let mut roster = MemberRoster::default();
        roster.insert("alice", TeamRole::Owner, None);
        roster.insert("carol", TeamRole::Reader, None);
        let dispatcher = TeamPageDispatcher::with_renderers(
            RosterMemberRenderer::new(roster),
            DefaultSubteamRenderer,
        );
        let rows = vec![
            TeamRow::Member(MemberRow::new("alice", team.clone())),
            TeamRow::Member(MemberRow::new("mallory", team.clone())),
            TeamRow::Member(MemberRow::new("carol", team)),
        ];
        let projected = project(&rows, &dispatcher).unwrap();

        let mut iter = projected.iter();
        let items: Vec<_> = iter.by_ref().collect();
        assert_eq2!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());

        // Stays exhausted.
        assert_eq2!(iter.len(), 0);
        assert!(iter.next().is_none());

        assert!(projected.try_collect_all().is_err());
    }
}
