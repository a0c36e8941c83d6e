use serde_json::json;

use crate::config::GameConfig;
use crate::domain::entry::{EntryField, ScoredCapPolicy};
use crate::domain::snapshot::{PhaseSnapshot, SessionSnapshot};
use crate::domain::state::GameSession;
use crate::domain::test_state_helpers::{
    play_round, playing_session, setup_with_players, with_calls,
};

#[test]
fn setup_snapshot_reports_deck_facts() {
    let snapshot = SessionSnapshot::of(&setup_with_players(5));
    assert_eq!(snapshot.session.players.len(), 5);
    assert_eq!(snapshot.session.total_leads, 10);
    assert_eq!(snapshot.session.rounds_played, 0);

    match snapshot.phase {
        PhaseSnapshot::Setup(setup) => {
            assert_eq!(setup.max_total_leads, 10);
            assert_eq!(setup.total_cards, 50);
            assert!(setup.can_start);
        }
        other => panic!("expected setup, got {other:?}"),
    }
}

#[test]
fn playing_snapshot_carries_caps_and_band() {
    let session = with_calls(playing_session(4, 13, 15), &[3, 3, 3, 4])
        .lock_calls()
        .and_then(|s| s.set_value(0, EntryField::Scored, 5))
        .unwrap();

    let PhaseSnapshot::Playing(playing) = SessionSnapshot::of(&session).phase else {
        panic!("expected playing");
    };
    assert_eq!(playing.round_no, 1);
    assert!(playing.calls_locked);
    assert_eq!(playing.total_calls, 13);
    assert_eq!(playing.total_scored, 5);
    assert_eq!((playing.call_min, playing.call_max), (11, 17));

    let caps: Vec<(Option<u8>, Option<u8>)> = playing
        .entries
        .iter()
        .map(|e| (e.call_max, e.scored_max))
        .collect();
    assert_eq!(
        caps,
        vec![(None, Some(13)), (None, Some(8)), (None, Some(8)), (None, Some(8))]
    );
}

#[test]
fn open_calls_report_only_call_caps() {
    let session = with_calls(playing_session(4, 13, 15), &[3, 3, 3, 4]);

    let PhaseSnapshot::Playing(playing) = SessionSnapshot::of(&session).phase else {
        panic!("expected playing");
    };
    assert!(!playing.calls_locked);
    assert!(playing
        .entries
        .iter()
        .all(|e| e.call_max == Some(13) && e.scored_max.is_none()));
}

#[test]
fn call_total_policy_caps_by_calls() {
    let config = GameConfig {
        scored_cap: ScoredCapPolicy::CallTotal,
        ..GameConfig::default()
    };
    let session = GameSession::with_config(config)
        .and_then(|s| s.start_game())
        .unwrap();
    let session = with_calls(session, &[3, 3, 3, 2]).lock_calls().unwrap();

    let PhaseSnapshot::Playing(playing) = SessionSnapshot::of(&session).phase else {
        panic!("expected playing");
    };
    assert!(playing.entries.iter().all(|e| e.scored_max == Some(11)));
}

#[test]
fn finished_snapshot_lists_standings() {
    let mut session = playing_session(3, 6, 10);
    for _ in 0..2 {
        session = play_round(session, &[0, 3, 3], &[0, 3, 3]);
    }

    let snapshot = SessionSnapshot::of(&session);
    assert_eq!(snapshot.session.rounds_played, 2);
    let PhaseSnapshot::Finished(finished) = snapshot.phase else {
        panic!("expected finished");
    };
    assert_eq!(finished.winner, Some(1));
    let order: Vec<(usize, u8, i32)> = finished
        .standings
        .iter()
        .map(|r| (r.rank, r.player_id, r.total_score))
        .collect();
    assert_eq!(order, vec![(1, 1, 10), (2, 2, 10), (3, 0, 0)]);
}

#[test]
fn serializes_with_phase_tag() {
    let value = serde_json::to_value(SessionSnapshot::of(&GameSession::new())).unwrap();
    assert_eq!(value["phase"]["phase"], json!("setup"));
    assert_eq!(value["phase"]["data"]["max_total_leads"], json!(13));
    assert_eq!(value["session"]["players"][0]["name"], json!("Ashraf"));

    let playing = serde_json::to_value(SessionSnapshot::of(&playing_session(4, 13, 15))).unwrap();
    assert_eq!(playing["phase"]["phase"], json!("playing"));
    assert_eq!(playing["phase"]["data"]["entries"][0]["call"], json!(null));
    assert_eq!(playing["phase"]["data"]["entries"][0]["scored_max"], json!(null));
}

#[test]
fn round_trips_through_json() {
    let session = with_calls(playing_session(4, 13, 15), &[3, 3, 3, 4]);
    let snapshot = SessionSnapshot::of(&session);
    let text = serde_json::to_string(&snapshot).unwrap();
    let back: SessionSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snapshot);
}
