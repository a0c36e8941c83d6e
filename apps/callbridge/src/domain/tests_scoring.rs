use crate::domain::scoring::{compute_round_score, is_bonus_call};

#[test]
fn bonus_threshold_is_real_valued_half() {
    // 13 leads: 6.5 is the threshold
    assert!(!is_bonus_call(6, 13));
    assert!(is_bonus_call(7, 13));
    // 10 leads: exactly half qualifies
    assert!(!is_bonus_call(4, 10));
    assert!(is_bonus_call(5, 10));
    // a single lead: calling it is a bonus call
    assert!(is_bonus_call(1, 1));
}

#[test]
fn quick_rules_examples_for_ten_leads() {
    let cases = [
        (5, 5, 7),
        (5, 4, -7),
        (3, 3, 3),
        (3, 4, -3),
        (3, 2, -3),
        (0, 1, -1),
    ];
    for (call, scored, expected) in cases {
        assert_eq!(
            compute_round_score(call, scored, 10),
            expected,
            "call {call}, scored {scored}"
        );
    }
}

#[test]
fn overcall_with_bonus_call() {
    // call 7 of 10, scored 5
    assert_eq!(compute_round_score(7, 5, 10), -9);
}

#[test]
fn zero_call_penalized_per_trick() {
    assert_eq!(compute_round_score(0, 2, 10), -2);
    assert_eq!(compute_round_score(0, 13, 13), -13);
}

#[test]
fn zero_call_made_scores_nothing() {
    for leads in 1..=17 {
        assert_eq!(compute_round_score(0, 0, leads), 0);
    }
}

#[test]
fn plain_match_below_half() {
    // 4 of 13 is below 6.5
    assert_eq!(compute_round_score(4, 4, 13), 4);
    assert_eq!(compute_round_score(4, 5, 13), -4);
    assert_eq!(compute_round_score(4, 0, 13), -4);
}

#[test]
fn full_call_matched() {
    assert_eq!(compute_round_score(13, 13, 13), 15);
    assert_eq!(compute_round_score(13, 12, 13), -15);
}
