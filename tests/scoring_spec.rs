use persona_share::persona::scoring::{Answers, DiffLevel, Direction};
use persona_share::{
    Axis, AxisScores, Level, ProfileError, Question, calculate_diff, calculate_scores, code_of,
    level_of, side_of, top_axes,
};

const QUESTIONS: &[Question] = &[
    Question { id: 1, axis: Axis::EI, reverse: false },
    Question { id: 2, axis: Axis::EI, reverse: true },
    Question { id: 3, axis: Axis::SN, reverse: false },
    Question { id: 4, axis: Axis::TF, reverse: false },
    Question { id: 5, axis: Axis::TF, reverse: false },
    Question { id: 6, axis: Axis::JP, reverse: true },
];

fn answers(pairs: &[(u32, u8)]) -> Answers {
    pairs.iter().copied().collect()
}

fn scores(values: [u8; 4]) -> AxisScores {
    AxisScores::from_array(values).unwrap()
}

#[test]
fn high_side_wins_at_midpoint() {
    const SIDES: &[(Axis, u8, char)] = &[
        (Axis::EI, 50, 'E'),
        (Axis::EI, 49, 'I'),
        (Axis::SN, 50, 'S'),
        (Axis::SN, 0, 'N'),
        (Axis::TF, 100, 'T'),
        (Axis::TF, 12, 'F'),
        (Axis::JP, 50, 'J'),
        (Axis::JP, 49, 'P'),
    ];
    for &(axis, score, expected) in SIDES {
        assert_eq!(side_of(axis, score), expected, "{} at {}", axis, score);
    }
}

#[test]
fn code_is_pure_function_of_scores() {
    let s = scores([50, 50, 50, 50]);
    assert_eq!(code_of(&s), "ESTJ");
    assert_eq!(code_of(&s), code_of(&s));
    assert_eq!(code_of(&scores([49, 49, 49, 49])), "INFP");
    assert_eq!(code_of(&scores([56, 53, 56, 42])), "ESTP");
}

#[test]
fn levels_measure_distance_from_midpoint() {
    assert_eq!(level_of(70), Level::High);
    assert_eq!(level_of(30), Level::High);
    assert_eq!(level_of(69), Level::Mid);
    assert_eq!(level_of(42), Level::Mid);
    assert_eq!(level_of(57), Level::Low);
    assert_eq!(level_of(50), Level::Low);
}

#[test]
fn rejects_out_of_range_scores() {
    assert!(matches!(
        AxisScores::new(50, 101, 0, 0),
        Err(ProfileError::ScoreOutOfRange { axis: Axis::SN, .. })
    ));
}

#[test]
fn normalizes_answers_per_axis() {
    let result = calculate_scores(
        QUESTIONS,
        &answers(&[(1, 7), (2, 1), (3, 4), (4, 2), (5, 3), (6, 6)]),
    )
    .unwrap();
    // EI: 7 + (8-1) = 14 of 2..=14 → 100
    // SN: 4 of 1..=7 → 50
    // TF: 5 of 2..=14 → 25
    // JP: 8-6 = 2 of 1..=7 → 16.67 → 17
    assert_eq!(result.to_array(), [100, 50, 25, 17]);
    assert_eq!(result.code(), "ESFP");
}

#[test]
fn unanswered_axis_defaults_to_midpoint() {
    let result = calculate_scores(QUESTIONS, &answers(&[(1, 1)])).unwrap();
    assert_eq!(result.to_array(), [0, 50, 50, 50]);
}

#[test]
fn rejects_answers_outside_likert_range() {
    let err = calculate_scores(QUESTIONS, &answers(&[(3, 8)])).unwrap_err();
    assert!(matches!(err, ProfileError::InvalidAnswer { question: 3, value: 8 }));
    assert!(calculate_scores(QUESTIONS, &answers(&[(4, 0)])).is_err());
}

#[test]
fn top_axes_ranks_by_distance() {
    let ranked = top_axes(&scores([55, 10, 80, 50]));
    let order: Vec<Axis> = ranked.iter().map(|a| a.axis).collect();
    assert_eq!(order, [Axis::SN, Axis::TF, Axis::EI]);
    assert_eq!(ranked[0].side, 'N');
    assert_eq!(ranked[0].level, Level::High);
    assert_eq!(ranked[2].level, Level::Low);
}

#[test]
fn top_axes_keeps_axis_order_on_ties() {
    let ranked = top_axes(&scores([60, 40, 60, 40]));
    let order: Vec<Axis> = ranked.iter().map(|a| a.axis).collect();
    assert_eq!(order, [Axis::EI, Axis::SN, Axis::TF]);
}

#[test]
fn diff_sorts_largest_first() {
    let diffs = calculate_diff(&scores([50, 58, 56, 47]), &scores([50, 58, 40, 77]));
    assert_eq!(diffs[0].axis, Axis::JP);
    assert_eq!(diffs[0].diff, -30);
    assert_eq!(diffs[0].direction, Direction::Negative);
    assert_eq!(diffs[1].axis, Axis::TF);
    assert_eq!(diffs[1].direction, Direction::Positive);
    assert_eq!(diffs[2].direction, Direction::Neutral);
    assert_eq!(DiffLevel::of(diffs[0].abs_diff), DiffLevel::Large);
    assert_eq!(DiffLevel::of(diffs[1].abs_diff), DiffLevel::Notable);
    assert_eq!(DiffLevel::of(9), DiffLevel::Similar);
}

#[test]
fn average_rounds_halves_up() {
    let avg = AxisScores::average(&scores([50, 58, 56, 47]), &scores([61, 40, 20, 77]));
    assert_eq!(avg.to_array(), [56, 49, 38, 62]);
}
