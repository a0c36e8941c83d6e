//! Public snapshot API: what the UI shell renders after every action.

use serde::{Deserialize, Serialize};

use crate::domain::entry::scored_cap;
use crate::domain::rules::{call_band, max_total_leads, MIN_PLAYERS};
use crate::domain::state::{GameSession, Phase, Player, PlayerId};
use crate::domain::summary::{ranked_players, RankedPlayer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub total_score: i32,
}

impl From<&Player> for PlayerPublic {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            total_score: p.total_score,
        }
    }
}

/// Header present in every snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHeader {
    pub players: Vec<PlayerPublic>,
    pub total_leads: u8,
    pub winning_score: i32,
    pub rounds_played: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum PhaseSnapshot {
    Setup(SetupSnapshot),
    Playing(PlayingSnapshot),
    Finished(FinishedSnapshot),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSnapshot {
    pub max_total_leads: u8,
    pub total_cards: u16,
    /// Enough players are selected to start.
    pub can_start: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPublic {
    pub player_id: PlayerId,
    pub call: Option<u8>,
    pub scored: Option<u8>,
    /// Highest value the call field accepts right now; `None` once calls are locked.
    pub call_max: Option<u8>,
    /// Highest value the scored field accepts right now; `None` until calls are locked.
    pub scored_max: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingSnapshot {
    pub round_no: u16,
    pub calls_locked: bool,
    pub entries: Vec<EntryPublic>,
    pub total_calls: u16,
    pub total_scored: u16,
    pub call_min: u16,
    pub call_max: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedSnapshot {
    pub winner: Option<PlayerId>,
    pub standings: Vec<RankedPlayer>,
}

impl SessionSnapshot {
    pub fn of(session: &GameSession) -> Self {
        let header = SessionHeader {
            players: session.players().iter().map(PlayerPublic::from).collect(),
            total_leads: session.total_leads(),
            winning_score: session.winning_score(),
            rounds_played: session.rounds_played(),
        };

        let phase = match session.phase() {
            Phase::Setup => PhaseSnapshot::Setup(SetupSnapshot {
                max_total_leads: max_total_leads(session.players().len()),
                total_cards: session.total_cards(),
                can_start: session.players().len() >= MIN_PLAYERS,
            }),
            Phase::Playing => PhaseSnapshot::Playing(playing_snapshot(session)),
            Phase::Finished => PhaseSnapshot::Finished(FinishedSnapshot {
                winner: session.winner().map(|p| p.id),
                standings: ranked_players(session.players()),
            }),
        };

        Self {
            session: header,
            phase,
        }
    }
}

fn playing_snapshot(session: &GameSession) -> PlayingSnapshot {
    let round = session.round();
    let total_leads = session.total_leads();
    let band = call_band(total_leads);

    let entries = round
        .entries
        .iter()
        .map(|e| EntryPublic {
            player_id: e.player_id,
            call: e.call,
            scored: e.scored,
            call_max: (!round.calls_locked).then_some(total_leads),
            scored_max: round.calls_locked.then(|| {
                scored_cap(
                    &round.entries,
                    e.player_id,
                    total_leads,
                    session.config().scored_cap,
                )
            }),
        })
        .collect();

    PlayingSnapshot {
        round_no: session.round_no(),
        calls_locked: round.calls_locked,
        entries,
        total_calls: round.total_calls(),
        total_scored: round.total_scored(),
        call_min: *band.start(),
        call_max: *band.end(),
    }
}
