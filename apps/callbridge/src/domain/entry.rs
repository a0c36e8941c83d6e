//! Per-field caps applied while a round is being entered.
//!
//! These shape every edit; they are not gates. The gates live in
//! `domain::validation`.

use serde::{Deserialize, Serialize};

use crate::domain::state::{PlayerId, RoundEntry};

/// Which value of a round entry is being edited.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Call,
    Scored,
}

/// What the running cap on a scored value is measured against.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoredCapPolicy {
    /// Scored values may claim every lead; a round is always submittable.
    #[default]
    TotalLeads,
    /// Scored values may only claim what the locked calls add up to, and a
    /// submission above the call total is rejected.
    CallTotal,
}

/// Clamp a call into `[0, total_leads]`.
pub fn clamp_call(requested: i32, total_leads: u8) -> u8 {
    requested.clamp(0, total_leads as i32) as u8
}

/// Largest scored value `player_id` may hold given everyone else's entries.
pub fn scored_cap(
    entries: &[RoundEntry],
    player_id: PlayerId,
    total_leads: u8,
    policy: ScoredCapPolicy,
) -> u8 {
    let budget: u16 = match policy {
        ScoredCapPolicy::TotalLeads => total_leads as u16,
        ScoredCapPolicy::CallTotal => entries
            .iter()
            .map(|e| e.call.unwrap_or(0) as u16)
            .sum::<u16>()
            .min(total_leads as u16),
    };
    let others: u16 = entries
        .iter()
        .filter(|e| e.player_id != player_id)
        .map(|e| e.scored.unwrap_or(0) as u16)
        .sum();

    budget.saturating_sub(others).min(total_leads as u16) as u8
}

/// Clamp a scored value into `[0, scored_cap(..)]`.
pub fn clamp_scored(
    requested: i32,
    entries: &[RoundEntry],
    player_id: PlayerId,
    total_leads: u8,
    policy: ScoredCapPolicy,
) -> u8 {
    let cap = scored_cap(entries, player_id, total_leads, policy);
    requested.clamp(0, cap as i32) as u8
}

/// Read a number typed into an entry field.
///
/// Leading whitespace and a sign are accepted, then the leading digits are
/// used and anything after them ignored. Empty or digit-less input reads as 0.
pub fn parse_entry_input(raw: &str) -> i32 {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    let magnitude = rest[..digits_len].parse::<i32>().unwrap_or(i32::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
