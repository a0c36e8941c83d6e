//! The two gates every round passes through: call lock and submission.

use crate::domain::entry::ScoredCapPolicy;
use crate::domain::rules::call_band;
use crate::domain::scoring::compute_round_score;
use crate::domain::state::{RoundEntry, RoundResult};
use crate::errors::domain::{DomainError, ValidationKind};

fn missing_call(entry: &RoundEntry) -> DomainError {
    DomainError::validation(
        ValidationKind::MissingCall,
        format!("Player {} has no call", entry.player_id),
    )
}

/// Check that every call is entered and the call total sits inside the band.
///
/// Returns the call total. Does not touch lock state; the caller flips it.
pub fn validate_call_lock(entries: &[RoundEntry], total_leads: u8) -> Result<u16, DomainError> {
    let mut total: u16 = 0;
    for entry in entries {
        let call = entry.call.ok_or_else(|| missing_call(entry))?;
        total += call as u16;
    }

    let band = call_band(total_leads);
    if !band.contains(&total) {
        let (min, max) = (*band.start(), *band.end());
        return Err(DomainError::validation(
            ValidationKind::CallTotalOutOfRange { min, max, total },
            format!("Total calls must be between {min} and {max}"),
        ));
    }
    Ok(total)
}

/// Check the submission gate and score every entry.
///
/// Requires locked calls, a scored value for every player and a scored total
/// of exactly `total_leads`. Under [`ScoredCapPolicy::CallTotal`] the scored
/// total must also stay within the call total. Produces nothing on failure.
pub fn validate_and_commit_round(
    entries: &[RoundEntry],
    total_leads: u8,
    calls_locked: bool,
    policy: ScoredCapPolicy,
) -> Result<Vec<RoundResult>, DomainError> {
    if !calls_locked {
        return Err(DomainError::validation(
            ValidationKind::CallsNotLocked,
            "Please lock calls before submitting the round",
        ));
    }

    let mut finalized = Vec::with_capacity(entries.len());
    for entry in entries {
        let call = entry.call.ok_or_else(|| missing_call(entry))?;
        let scored = entry.scored.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MissingScored,
                format!("Player {} has no scored value", entry.player_id),
            )
        })?;
        finalized.push((entry.player_id, call, scored));
    }

    let total: u16 = finalized.iter().map(|&(_, _, s)| s as u16).sum();
    let expected = total_leads as u16;
    if total != expected {
        return Err(DomainError::validation(
            ValidationKind::ScoredTotalMismatch { expected, total },
            format!("Total scored must equal {expected} leads"),
        ));
    }

    if policy == ScoredCapPolicy::CallTotal {
        let call_total: u16 = finalized.iter().map(|&(_, c, _)| c as u16).sum();
        if total > call_total {
            return Err(DomainError::validation(
                ValidationKind::ScoredExceedsCallTotal { call_total, total },
                format!("Total scored cannot exceed the {call_total} leads called"),
            ));
        }
    }

    Ok(finalized
        .into_iter()
        .map(|(player_id, call, scored)| RoundResult {
            player_id,
            call,
            scored,
            round_score: compute_round_score(call, scored, total_leads),
        })
        .collect())
}
