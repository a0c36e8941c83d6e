//! Round scoring: the signed point delta for a single player's round.

/// True when `call` is at least half the leads, which widens both the reward
/// and the penalty by two.
#[inline]
pub fn is_bonus_call(call: u8, total_leads: u8) -> bool {
    2 * call as u16 >= total_leads as u16
}

/// Signed score for one player's round.
///
/// - Calling zero and taking any tricks costs one point per trick.
/// - Otherwise an exact match earns `call` and a miss in either direction
///   costs `call`, both widened to `call + 2` for bonus calls.
pub fn compute_round_score(call: u8, scored: u8, total_leads: u8) -> i32 {
    if call == 0 && scored > 0 {
        return -(scored as i32);
    }

    let magnitude = if is_bonus_call(call, total_leads) {
        call as i32 + 2
    } else {
        call as i32
    };

    if scored == call {
        magnitude
    } else {
        -magnitude
    }
}

