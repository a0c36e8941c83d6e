use crate::domain::entry::{
    clamp_call, clamp_scored, parse_entry_input, scored_cap, ScoredCapPolicy,
};
use crate::domain::state::RoundEntry;
use crate::domain::test_gens::entries_from;

#[test]
fn call_clamped_to_leads() {
    assert_eq!(clamp_call(-1, 13), 0);
    assert_eq!(clamp_call(0, 13), 0);
    assert_eq!(clamp_call(13, 13), 13);
    assert_eq!(clamp_call(14, 13), 13);
}

#[test]
fn scored_cap_leaves_room_for_others() {
    let entries = entries_from(&[3, 3, 3, 4], &[3, 3, 3, 0]);
    // others hold 9 of 13
    assert_eq!(scored_cap(&entries, 3, 13, ScoredCapPolicy::TotalLeads), 4);
    // player 0 competes with 6 held by 1 and 2
    assert_eq!(scored_cap(&entries, 0, 13, ScoredCapPolicy::TotalLeads), 7);
    assert_eq!(clamp_scored(9, &entries, 3, 13, ScoredCapPolicy::TotalLeads), 4);
    assert_eq!(clamp_scored(-2, &entries, 3, 13, ScoredCapPolicy::TotalLeads), 0);
}

#[test]
fn scored_cap_ignores_unset_values() {
    let entries = vec![
        RoundEntry {
            player_id: 0,
            call: Some(5),
            scored: Some(5),
        },
        RoundEntry::unset(1),
        RoundEntry::unset(2),
    ];
    assert_eq!(scored_cap(&entries, 1, 10, ScoredCapPolicy::TotalLeads), 5);
}

#[test]
fn call_total_policy_caps_against_calls() {
    // calls add to 11, below the 13 leads
    let entries = entries_from(&[3, 3, 3, 2], &[3, 3, 3, 0]);
    assert_eq!(scored_cap(&entries, 3, 13, ScoredCapPolicy::CallTotal), 2);
    assert_eq!(scored_cap(&entries, 3, 13, ScoredCapPolicy::TotalLeads), 4);

    // calls above the lead count never lift the cap past the leads
    let entries = entries_from(&[6, 6, 5, 0], &[0, 0, 0, 0]);
    assert_eq!(scored_cap(&entries, 0, 13, ScoredCapPolicy::CallTotal), 13);
}

#[test]
fn call_total_budget_never_exceeds_leads() {
    // calls add up to 2 with a single lead: the second scorer gets nothing
    let entries = entries_from(&[0, 1, 1], &[0, 1, 0]);
    assert_eq!(scored_cap(&entries, 2, 1, ScoredCapPolicy::CallTotal), 0);

    let mut entries = entries_from(&[0, 1, 1], &[0, 0, 0]);
    for (idx, requested) in [0, 1, 1].into_iter().enumerate() {
        let player_id = entries[idx].player_id;
        entries[idx].scored = Some(clamp_scored(
            requested,
            &entries,
            player_id,
            1,
            ScoredCapPolicy::CallTotal,
        ));
    }
    let scored: Vec<Option<u8>> = entries.iter().map(|e| e.scored).collect();
    assert_eq!(scored, vec![Some(0), Some(1), Some(0)]);
}

#[test]
fn cap_saturates_at_zero() {
    let entries = entries_from(&[3, 3, 3, 4], &[5, 5, 5, 0]);
    assert_eq!(scored_cap(&entries, 3, 13, ScoredCapPolicy::TotalLeads), 0);
}

#[test]
fn input_parsing_reads_leading_digits() {
    assert_eq!(parse_entry_input(""), 0);
    assert_eq!(parse_entry_input("   "), 0);
    assert_eq!(parse_entry_input("abc"), 0);
    assert_eq!(parse_entry_input("7"), 7);
    assert_eq!(parse_entry_input(" 12 "), 12);
    assert_eq!(parse_entry_input("5abc"), 5);
    assert_eq!(parse_entry_input("+3"), 3);
    assert_eq!(parse_entry_input("-4"), -4);
    assert_eq!(parse_entry_input("-"), 0);
    assert_eq!(parse_entry_input("99999999999"), i32::MAX);
}
