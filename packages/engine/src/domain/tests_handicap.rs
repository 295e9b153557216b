use crate::domain::handicap::{
    allocate_strokes, best_ball_net_score, course_handicap, scoring_breakdown, ScoringBreakdown,
};
use crate::domain::state::CourseDifficulty;
use crate::domain::test_helpers::sequential_table;

#[test]
fn course_handicap_neutral_slope_no_adjustment() {
    // Slope-113 courses have no slope adjustment; rating == par adds nothing.
    assert_eq!(course_handicap(10.0, 113, 72.0, 72), 10);
}

#[test]
fn course_handicap_rounds_half_away_from_zero() {
    assert_eq!(course_handicap(4.5, 113, 72.0, 72), 5);
    assert_eq!(course_handicap(-4.5, 113, 72.0, 72), -5);
}

#[test]
fn course_handicap_applies_slope_and_rating() {
    // 10.0 * 126/113 = 11.150..., + (74.8 - 72) = 13.95 -> 14
    assert_eq!(course_handicap(10.0, 126, 74.8, 72), 14);
}

#[test]
fn course_handicap_can_be_negative() {
    // Plus player on an easy course: -2.0 * 96/113 - 3.5 = -5.199... -> -5
    assert_eq!(course_handicap(-2.0, 96, 68.5, 72), -5);
}

#[test]
fn course_difficulty_method_matches_free_function() {
    let tee = CourseDifficulty {
        slope_rating: 126,
        course_rating: 74.8,
        par: 72,
    };
    assert_eq!(tee.course_handicap(10.0), course_handicap(10.0, 126, 74.8, 72));
}

#[test]
fn allocate_eighteen_gives_one_stroke_everywhere() {
    let table = sequential_table();
    assert_eq!(allocate_strokes(18, &table), [1; 18]);
}

#[test]
fn allocate_twenty_two_doubles_four_hardest() {
    let strokes = allocate_strokes(22, &sequential_table());
    // Holes ranked 1-4 get 2 strokes, the rest get 1.
    for (hole, &s) in strokes.iter().enumerate() {
        let expected = if hole < 4 { 2 } else { 1 };
        assert_eq!(s, expected, "hole {}", hole + 1);
    }
}

#[test]
fn allocate_negative_takes_strokes_off_hardest_holes() {
    let strokes = allocate_strokes(-3, &sequential_table());
    // Truncating modulo: exactly the 3 hardest holes lose a stroke, no wrap.
    for (hole, &s) in strokes.iter().enumerate() {
        let expected = if hole < 3 { -1 } else { 0 };
        assert_eq!(s, expected, "hole {}", hole + 1);
    }
}

#[test]
fn allocate_zero_handicap_is_all_zero() {
    assert_eq!(allocate_strokes(0, &sequential_table()), [0; 18]);
}

#[test]
fn allocate_respects_table_order_not_hole_order() {
    // Reversed table: hole 18 is the hardest.
    let reversed: Vec<u8> = (1..=18).rev().collect();
    let strokes = allocate_strokes(2, &reversed);
    assert_eq!(strokes[17], 1);
    assert_eq!(strokes[16], 1);
    assert_eq!(&strokes[..16], &[0; 16]);
}

#[test]
fn allocate_wrong_length_table_degrades_to_zeros() {
    let short: Vec<u8> = (1..=17).collect();
    assert_eq!(allocate_strokes(18, &short), [0; 18]);

    let long: Vec<u8> = (1..=18).chain(std::iter::once(1)).collect();
    assert_eq!(allocate_strokes(18, &long), [0; 18]);
}

#[test]
fn allocate_non_permutation_table_degrades_to_zeros() {
    // Duplicate rank.
    let mut dup = sequential_table();
    dup[1] = 1;
    assert_eq!(allocate_strokes(12, &dup), [0; 18]);

    // Out-of-range rank.
    let mut out_of_range = sequential_table();
    out_of_range[0] = 19;
    assert_eq!(allocate_strokes(12, &out_of_range), [0; 18]);

    let mut zero_rank = sequential_table();
    zero_rank[0] = 0;
    assert_eq!(allocate_strokes(12, &zero_rank), [0; 18]);
}

#[test]
fn best_ball_net_takes_group_minimum() {
    // Nets: 5-1=4, 4-0=4, 6-3=3.
    assert_eq!(best_ball_net_score(&[5, 4, 6], &[1, 0, 3]), 3);
}

#[test]
fn best_ball_net_degrades_on_bad_input() {
    assert_eq!(best_ball_net_score(&[], &[]), 0);
    assert_eq!(best_ball_net_score(&[4, 5], &[1]), 0);
}

#[test]
fn breakdown_sums_named_ranges() {
    // Gross 4 everywhere; one stroke on each of the 9 hardest holes, which
    // on the sequential table are holes 1-9.
    let scores = [4; 18];
    let strokes = allocate_strokes(9, &sequential_table());
    let b = scoring_breakdown(&scores, &strokes);

    assert_eq!(b.front9, 27); // 36 gross - 9 strokes
    assert_eq!(b.back9, 36);
    assert_eq!(b.last6, 24);
    assert_eq!(b.last3, 12);
    assert_eq!(b.last1, 4);
    assert_eq!(b.total, 63);
}

#[test]
fn breakdown_wrong_length_degrades_to_zeros() {
    let strokes = [0; 18];
    assert_eq!(
        scoring_breakdown(&[4; 17], &strokes),
        ScoringBreakdown::default()
    );
    assert_eq!(
        scoring_breakdown(&[4; 18], &[0; 17]),
        ScoringBreakdown::default()
    );
}
