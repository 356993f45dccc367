// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end scenarios of the engine: untyped rows in, keyed instructions out, for
//! every row family.

use serde_json::json;
use strum::IntoEnumIterator;

use crate::{InboxDispatcher, InboxRow, InboxRowKind, MemberRow, RowDispatcher, RowIndex,
            RowKey, RowKind, RowListError, RowVariant, TabsRow, TeamListDispatcher,
            TeamListRow, TeamListRowKind, TeamPageDispatcher, TeamRow, TeamRowKind,
            Teamname, assert_eq2, project, try_decode_row, try_decode_rows};

fn keys_of<P>(instructions: &[crate::RenderInstruction<P>]) -> Vec<&str> {
    instructions.iter().map(|it| it.key.as_str()).collect()
}

fn downcast(report: &miette::Report) -> &RowListError {
    report.downcast_ref::<RowListError>().unwrap()
}

/// Header, tabs and two members come out in order, keyed by natural identity.
#[test]
fn test_team_page_in_order_w_stable_keys() {
    let rows: Vec<TeamRow> = try_decode_rows(
        r#"[
            {"type": "header", "teamname": "T1"},
            {"type": "tabs", "teamname": "T1", "admin": false, "memberCount": 3,
             "numInvites": 0, "numRequests": 0, "numSubteams": 0},
            {"type": "member", "username": "alice", "teamname": "T1"},
            {"type": "member", "username": "bob", "teamname": "T1"}
        ]"#,
    )
    .unwrap();

    let dispatcher = TeamPageDispatcher::new();
    let instructions = project(&rows, &dispatcher).unwrap().try_collect_all().unwrap();

    assert_eq2!(keys_of(&instructions), vec![
        "header:T1",
        "tabs:T1",
        "member:alice",
        "member:bob"
    ]);
    for (position, it) in instructions.iter().enumerate() {
        assert_eq2!(it.index, RowIndex::new(position));
    }
}

/// An unrecognized tag stops the sequence before anything is dispatched.
#[test]
fn test_unrecognized_tag_produces_nothing() {
    let res = try_decode_rows::<TeamRow>(
        r#"[
            {"type": "header", "teamname": "T1"},
            {"type": "pinnedMessage", "teamname": "T1"}
        ]"#,
    );
    let report = res.unwrap_err();
    assert_eq2!(
        downcast(&report),
        &RowListError::UnhandledVariant {
            tag: crate::inline_string!("pinnedMessage")
        }
    );
}

/// The same member twice is a duplicate key, and nothing is produced.
#[test]
fn test_duplicate_member_fails_fast() {
    let team = Teamname::from("T1");
    let rows = vec![
        TeamRow::Member(MemberRow::new("alice", team.clone())),
        TeamRow::Member(MemberRow::new("alice", team)),
    ];
    let dispatcher = TeamPageDispatcher::new();
    let report = project(&rows, &dispatcher).unwrap_err();
    assert_eq2!(downcast(&report), &RowListError::DuplicateKey {
        key: RowKey::new("member", Some("alice")),
        first_index: RowIndex::new(0),
        duplicate_index: RowIndex::new(1),
    });
}

#[test]
fn test_empty_sequence() {
    let rows: Vec<TeamRow> = vec![];
    let dispatcher = TeamPageDispatcher::new();
    let projected = project(&rows, &dispatcher).unwrap();
    assert!(projected.is_empty());
    assert!(projected.try_collect_all().unwrap().is_empty());
}

#[test]
fn test_order_preserved_for_any_length() {
    let team = Teamname::from("T1");
    for n in 0..20 {
        let rows: Vec<TeamRow> = (0..n)
            .map(|i| TeamRow::Member(MemberRow::new(&format!("user{i}"), team.clone())))
            .collect();
        let dispatcher = TeamPageDispatcher::new();
        let instructions = project(&rows, &dispatcher).unwrap().try_collect_all().unwrap();
        assert_eq2!(instructions.len(), n);
        for (row, it) in rows.iter().zip(&instructions) {
            assert_eq2!(row.row_key(), it.key.clone());
        }
    }
}

#[test]
fn test_dispatch_is_deterministic() {
    let team = Teamname::from("T1");
    let mut tabs = TabsRow::new(team.clone());
    tabs.member_count = 2;
    let rows = vec![
        TeamRow::Header { teamname: team.clone() },
        TeamRow::Tabs(tabs),
        TeamRow::Member(MemberRow::new("alice", team)),
    ];
    let dispatcher = TeamPageDispatcher::new();
    for (position, row) in rows.iter().enumerate() {
        let index = RowIndex::new(position);
        assert_eq2!(
            dispatcher.dispatch(row, index).unwrap(),
            dispatcher.dispatch(row, index).unwrap()
        );
    }
}

#[test]
fn test_distinct_identities_make_distinct_keys() {
    let team = Teamname::from("T1");
    let alice = TeamRow::Member(MemberRow::new("alice", team.clone()));
    let bob = TeamRow::Member(MemberRow::new("bob", team));
    assert_ne!(alice.row_key(), bob.row_key());
}

/// One sample untyped row per declared kind. Each must decode and dispatch, so a kind
/// that is declared but can't be decoded fails here.
fn team_page_sample(kind: TeamRowKind) -> serde_json::Value {
    match kind {
        TeamRowKind::Header | TeamRowKind::Invites | TeamRowKind::Settings => {
            json!({"type": kind.tag(), "teamname": "T1"})
        }
        TeamRowKind::Tabs => json!({
            "type": kind.tag(), "teamname": "T1", "admin": true, "memberCount": 1,
            "numInvites": 0, "numRequests": 0, "numSubteams": 0
        }),
        TeamRowKind::Member => json!({"type": kind.tag(), "username": "alice", "teamname": "T1"}),
        TeamRowKind::Subteam => json!({"type": kind.tag(), "teamname": "T1.dev"}),
    }
}

fn inbox_sample(kind: InboxRowKind) -> serde_json::Value {
    match kind {
        InboxRowKind::Small => {
            json!({"type": kind.tag(), "conversationIDKey": "c1", "name": "alice,bob"})
        }
        InboxRowKind::BigTeamsLabel | InboxRowKind::Divider => json!({"type": kind.tag()}),
        InboxRowKind::BigHeader => json!({"type": kind.tag(), "teamname": "acme"}),
        InboxRowKind::Big => json!({
            "type": kind.tag(), "conversationIDKey": "c2", "teamname": "acme",
            "channelname": "general"
        }),
    }
}

fn team_list_sample(kind: TeamListRowKind) -> serde_json::Value {
    match kind {
        TeamListRowKind::Team => json!({"type": kind.tag(), "name": "acme", "memberCount": 2}),
    }
}

fn assert_kind_is_covered<R, D>(sample: serde_json::Value, kind: R::Kind, dispatcher: &D)
where
    R: RowVariant + serde::de::DeserializeOwned,
    D: RowDispatcher<R>,
{
    let row: R = try_decode_row(sample).unwrap();
    assert_eq2!(row.kind(), kind);
    let it = dispatcher.dispatch(&row, RowIndex::new(0)).unwrap();
    assert_eq2!(it.key.tag(), kind.tag());
}

#[test]
fn test_every_declared_kind_decodes_and_dispatches() {
    let dispatcher = TeamPageDispatcher::new();
    for kind in TeamRowKind::iter() {
        assert_kind_is_covered::<TeamRow, _>(team_page_sample(kind), kind, &dispatcher);
    }

    for kind in InboxRowKind::iter() {
        assert_kind_is_covered::<InboxRow, _>(inbox_sample(kind), kind, &InboxDispatcher);
    }

    let dispatcher = TeamListDispatcher::default();
    for kind in TeamListRowKind::iter() {
        assert_kind_is_covered::<TeamListRow, _>(team_list_sample(kind), kind, &dispatcher);
    }
}

#[test]
fn test_inbox_singletons_and_big_team_sections() {
    let rows: Vec<InboxRow> = try_decode_rows(
        r#"[
            {"type": "small", "conversationIDKey": "c1", "name": "alice,bob"},
            {"type": "divider", "hiddenCount": 4},
            {"type": "bigTeamsLabel"},
            {"type": "bigHeader", "teamname": "acme"},
            {"type": "big", "conversationIDKey": "c2", "teamname": "acme", "channelname": "general"},
            {"type": "big", "conversationIDKey": "c3", "teamname": "acme", "channelname": "random"}
        ]"#,
    )
    .unwrap();
    let instructions = project(&rows, &InboxDispatcher).unwrap().try_collect_all().unwrap();
    assert_eq2!(keys_of(&instructions), vec![
        "small:c1",
        "divider",
        "bigTeamsLabel",
        "bigHeader:acme",
        "big:c2",
        "big:c3"
    ]);
}
