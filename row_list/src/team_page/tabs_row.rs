// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::{Arc, LazyLock}};

use serde::Deserialize;

use crate::Teamname;

/// The tabs of a team's detail page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TabKey {
    Members,
    Invites,
    Subteams,
    Settings,
}

/// What the current user is allowed to do in a team. Missing flags are `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct TeamOperations {
    pub manage_members: bool,
    pub manage_subteams: bool,
    pub create_channel: bool,
    pub change_open_team: bool,
    pub set_team_showcase: bool,
    pub leave_team: bool,
    pub delete_team: bool,
    pub list_first: bool,
}

type OnSelectTabFn = dyn Fn(Option<TabKey>) + Send + Sync;

static NO_OP_ON_SELECT_TAB: LazyLock<Arc<OnSelectTabFn>> =
    LazyLock::new(|| Arc::new(|_: Option<TabKey>| {}));

/// Callback that the host invokes when the user selects a tab (`None` deselects). It is
/// carried through to the host untouched, and is never serialized.
///
/// Two callbacks are equal only if they are the same callback (pointer equality), so
/// that rows and instructions holding them can still be compared. [`Default`] is a
/// shared no-op, so all defaulted callbacks are equal to each other.
#[derive(Clone)]
pub struct OnSelectTab(Arc<OnSelectTabFn>);

impl OnSelectTab {
    pub fn new(f: impl Fn(Option<TabKey>) + Send + Sync + 'static) -> Self { Self(Arc::new(f)) }

    pub fn call(&self, tab: Option<TabKey>) { (self.0)(tab); }
}

impl Default for OnSelectTab {
    fn default() -> Self { Self(NO_OP_ON_SELECT_TAB.clone()) }
}

impl PartialEq for OnSelectTab {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl Debug for OnSelectTab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str("OnSelectTab(..)") }
}

/// Payload of the `tabs` row. The dispatcher hands it to the host verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsRow {
    pub admin: bool,
    pub member_count: usize,
    pub teamname: Teamname,
    /// Teams w/ pending access requests. Only used for badging.
    #[serde(default)]
    pub new_team_requests: Vec<Teamname>,
    pub num_invites: usize,
    pub num_requests: usize,
    pub num_subteams: usize,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub selected_tab: Option<TabKey>,
    #[serde(skip)]
    pub on_select_tab: OnSelectTab,
    #[serde(default)]
    pub your_operations: TeamOperations,
}

impl TabsRow {
    /// A tabs row w/ no counts, nothing selected, and no permissions.
    #[must_use]
    pub fn new(teamname: Teamname) -> Self {
        Self {
            admin: false,
            member_count: 0,
            teamname,
            new_team_requests: vec![],
            num_invites: 0,
            num_requests: 0,
            num_subteams: 0,
            loading: false,
            selected_tab: None,
            on_select_tab: OnSelectTab::default(),
            your_operations: TeamOperations::default(),
        }
    }

    /// Requests badge for the members tab: open access requests plus requests to this
    /// team that arrived since it was last viewed.
    #[must_use]
    pub fn request_badge_count(&self) -> usize {
        let new_requests = self
            .new_team_requests
            .iter()
            .filter(|it| **it == self.teamname)
            .count();
        self.num_requests + new_requests
    }

    /// The subteams tab is only shown when there are subteams, or the user can create
    /// them.
    #[must_use]
    pub fn visible_tabs(&self) -> Vec<TabKey> {
        let mut acc = vec![TabKey::Members];
        if self.admin {
            acc.push(TabKey::Invites);
        }
        if self.num_subteams > 0 || self.your_operations.manage_subteams {
            acc.push(TabKey::Subteams);
        }
        acc.push(TabKey::Settings);
        acc
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_callback_equality_is_identity() {
        let a = OnSelectTab::new(|_| {});
        let b = OnSelectTab::new(|_| {});
        assert_eq2!(a.clone(), a);
        assert_ne!(a, b);
        assert_eq2!(OnSelectTab::default(), OnSelectTab::default());
    }

    #[test]
    fn test_callback_is_invoked() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let it = OnSelectTab::new(move |tab| {
            if tab == Some(TabKey::Settings) {
                count_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        it.call(Some(TabKey::Settings));
        it.call(None);
        assert_eq2!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deserialize_camel_case_w_defaults() {
        let it: TabsRow = serde_json::from_str(
            r#"{
                "admin": true, "memberCount": 3, "teamname": "T1",
                "numInvites": 1, "numRequests": 2, "numSubteams": 0,
                "selectedTab": "members",
                "yourOperations": {"manageMembers": true}
            }"#,
        )
        .unwrap();
        assert_eq2!(it.member_count, 3);
        assert_eq2!(it.selected_tab, Some(TabKey::Members));
        assert!(!it.loading);
        assert!(it.your_operations.manage_members);
        assert!(!it.your_operations.delete_team);
        assert_eq2!(it.on_select_tab, OnSelectTab::default());
    }

    #[test]
    fn test_request_badge_count() {
        let mut it = TabsRow::new(Teamname::from("T1"));
        it.num_requests = 2;
        it.new_team_requests = vec![Teamname::from("T1"), Teamname::from("T2"), Teamname::from("T1")];
        assert_eq2!(it.request_badge_count(), 4);
    }

    #[test]
    fn test_visible_tabs() {
        let mut it = TabsRow::new(Teamname::from("T1"));
        assert_eq2!(it.visible_tabs(), vec![TabKey::Members, TabKey::Settings]);

        it.admin = true;
        it.num_subteams = 2;
        assert_eq2!(it.visible_tabs(), vec![
            TabKey::Members,
            TabKey::Invites,
            TabKey::Subteams,
            TabKey::Settings
        ]);
    }
}
