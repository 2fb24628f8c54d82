//! End-to-end use of the score core the way a search loop drives it.

use lexiscore_core::{
    feasibility_gradient, GradientWeights, HardSoftDoubleScore, ParseableScore, ScoreBounder,
    ScoreTrend, TimeGradientCalculator, TrendBounder,
};

#[test]
fn test_annealing_temperature_follows_score_progress() {
    let calculator = TimeGradientCalculator::<HardSoftDoubleScore>::new(
        GradientWeights::hard_soft(0.75).unwrap(),
    )
    .unwrap();
    let start = HardSoftDoubleScore::parse("-5hard/-100soft").unwrap();
    let end = HardSoftDoubleScore::parse("0hard/0soft").unwrap();
    let starting_temperature = 2.0;

    let trajectory = [
        "-5hard/-100soft",
        "-4hard/-120soft",
        "-2hard/-90soft",
        "-1hard/-60soft",
        "0hard/-40soft",
        "0hard/0soft",
    ];

    let mut previous_temperature = f64::INFINITY;
    for text in trajectory {
        let score = HardSoftDoubleScore::parse(text).unwrap();
        let gradient = calculator.time_gradient(&start, &end, &score);
        assert!((0.0..=1.0).contains(&gradient), "{} -> {}", text, gradient);

        let temperature = starting_temperature * (1.0 - gradient);
        assert!(temperature <= previous_temperature, "{}", text);
        previous_temperature = temperature;
    }
    assert_eq!(previous_temperature, 0.0);
}

#[test]
fn test_feasibility_phase_progress() {
    let start = HardSoftDoubleScore::of(-20.0, -300.0);
    let progress: Vec<f64> = [-20.0, -15.0, -5.0, 0.0]
        .iter()
        .map(|&hard| feasibility_gradient(&start, &HardSoftDoubleScore::of(hard, -300.0)))
        .collect();

    assert_eq!(progress, vec![0.0, 0.25, 0.75, 1.0]);
}

#[test]
fn test_branch_and_bound_pruning() {
    // Assigning more entities can only add hard penalties; soft is free to move.
    let bounder = TrendBounder::new(ScoreTrend::parse("ONLY_DOWN/ANY", 2).unwrap());
    let best_complete = HardSoftDoubleScore::of(-1.0, -50.0);

    let promising = HardSoftDoubleScore::of(0.0, -500.0);
    let hopeless = HardSoftDoubleScore::of(-2.0, 0.0);

    let optimistic = bounder.optimistic_bound(&promising).unwrap();
    assert!(optimistic > best_complete);

    let optimistic = bounder.optimistic_bound(&hopeless).unwrap();
    assert!(optimistic < best_complete);
}
