use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::scoring::compute_round_score;

/// Cards in the deck; every player is dealt `total_leads` cards.
pub const DECK_SIZE: u8 = 52;
pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 8;
pub const MAX_NAME_LEN: usize = 6;

pub const DEFAULT_TOTAL_LEADS: u8 = 13;
pub const DEFAULT_WINNING_SCORE: i32 = 15;
pub const WINNING_SCORE_RANGE: RangeInclusive<i32> = 10..=20;
/// Step used by the setup screen's winning score stepper.
pub const WINNING_SCORE_STEP: i32 = 5;

/// Aggregate calls may fall short of the lead count by this much.
pub const CALL_BAND_BELOW: u16 = 2;
/// Aggregate calls may exceed the lead count by this much.
pub const CALL_BAND_ABOVE: u16 = 4;

/// Largest lead count the deck supports for `player_count` players.
pub fn max_total_leads(player_count: usize) -> u8 {
    if player_count == 0 {
        return DECK_SIZE;
    }
    (DECK_SIZE as usize / player_count) as u8
}

/// Clamp a requested lead count into `[1, max_total_leads(player_count)]`.
pub fn clamp_total_leads(requested: i32, player_count: usize) -> u8 {
    requested.clamp(1, max_total_leads(player_count) as i32) as u8
}

pub fn clamp_winning_score(requested: i32) -> i32 {
    requested.clamp(*WINNING_SCORE_RANGE.start(), *WINNING_SCORE_RANGE.end())
}

/// Accepted range of the aggregate call total.
///
/// The lower bound saturates at zero for very short rounds.
pub fn call_band(total_leads: u8) -> RangeInclusive<u16> {
    let leads = total_leads as u16;
    leads.saturating_sub(CALL_BAND_BELOW)..=leads + CALL_BAND_ABOVE
}

/// One line of the quick-rules example table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringExample {
    pub call: u8,
    pub scored: u8,
    pub points: i32,
}

/// Worked examples covering every scoring branch for `total_leads` leads.
///
/// Uses the first call at or above half the leads for the bonus rows and a
/// call below half for the plain rows, so the table stays meaningful for
/// any lead count.
pub fn scoring_examples(total_leads: u8) -> Vec<ScoringExample> {
    let bonus_call = total_leads.div_ceil(2).max(1);
    let plain_call = bonus_call.saturating_sub(2);

    let mut pairs = vec![(bonus_call, bonus_call), (bonus_call, bonus_call - 1)];
    if plain_call > 0 {
        pairs.push((plain_call, plain_call));
        if plain_call < total_leads {
            pairs.push((plain_call, plain_call + 1));
        }
        pairs.push((plain_call, plain_call - 1));
    }
    pairs.push((0, 1));

    pairs
        .into_iter()
        .map(|(call, scored)| ScoringExample {
            call,
            scored,
            points: compute_round_score(call, scored, total_leads),
        })
        .collect()
}
