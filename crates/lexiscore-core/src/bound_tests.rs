//! Tests for score bounds

use super::bound::*;
use super::error::ScoreError;
use super::score::*;

fn trend(levels: &[TrendLevel]) -> ScoreTrend {
    ScoreTrend::new(levels.to_vec())
}

#[test]
fn test_optimistic_bound_keeps_only_down_levels() {
    let score = HardSoftDoubleScore::of(-2.0, -10.0);
    let trend = trend(&[TrendLevel::OnlyDown, TrendLevel::Unconstrained]);

    let bound = build_optimistic_bound(&trend, &score).unwrap();
    assert_eq!(bound, HardSoftDoubleScore::of(-2.0, f64::INFINITY));
}

#[test]
fn test_pessimistic_bound_keeps_only_up_levels() {
    let score = HardSoftDoubleScore::of(-2.0, -10.0);

    let bound = build_pessimistic_bound(
        &trend(&[TrendLevel::OnlyDown, TrendLevel::Unconstrained]),
        &score,
    )
    .unwrap();
    assert_eq!(
        bound,
        HardSoftDoubleScore::of(f64::NEG_INFINITY, f64::NEG_INFINITY)
    );

    let bound = build_pessimistic_bound(
        &trend(&[TrendLevel::OnlyUp, TrendLevel::OnlyDown]),
        &score,
    )
    .unwrap();
    assert_eq!(bound, HardSoftDoubleScore::of(-2.0, f64::NEG_INFINITY));
}

#[test]
fn test_bounds_enclose_current_score() {
    let scores = [
        HardSoftDoubleScore::of(-2.0, -10.0),
        HardSoftDoubleScore::of(0.0, 0.0),
        HardSoftDoubleScore::of(3.5, -1e12),
    ];
    let levels = [
        TrendLevel::Unconstrained,
        TrendLevel::OnlyUp,
        TrendLevel::OnlyDown,
    ];
    for score in scores {
        for &hard in &levels {
            for &soft in &levels {
                let trend = trend(&[hard, soft]);
                let optimistic = build_optimistic_bound(&trend, &score).unwrap();
                let pessimistic = build_pessimistic_bound(&trend, &score).unwrap();
                assert!(optimistic >= score, "{} < {} for {}", optimistic, score, trend);
                assert!(pessimistic <= score, "{} > {} for {}", pessimistic, score, trend);
            }
        }
    }
}

#[test]
fn test_only_down_trend_fixes_optimistic_bound() {
    let score = HardMediumSoftDoubleScore::of(-1.0, -2.0, -3.0);
    let trend = ScoreTrend::uniform(TrendLevel::OnlyDown, 3);

    assert_eq!(build_optimistic_bound(&trend, &score).unwrap(), score);
}

#[test]
fn test_trend_level_count_mismatch() {
    let score = HardSoftDoubleScore::of(-2.0, -10.0);
    let trend = ScoreTrend::uniform(TrendLevel::OnlyDown, 3);

    assert_eq!(
        build_optimistic_bound(&trend, &score).unwrap_err(),
        ScoreError::LevelCountMismatch {
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_trend_bounder() {
    let bounder = TrendBounder::new(ScoreTrend::parse("ONLY_UP/ONLY_DOWN", 2).unwrap());
    let score = HardSoftDoubleScore::of(-1.0, -5.0);

    assert_eq!(
        bounder.optimistic_bound(&score).unwrap(),
        HardSoftDoubleScore::of(f64::INFINITY, -5.0)
    );
    assert_eq!(
        bounder.pessimistic_bound(&score).unwrap(),
        HardSoftDoubleScore::of(-1.0, f64::NEG_INFINITY)
    );
    assert_eq!(bounder.trend().levels_count(), 2);
}

#[cfg(feature = "decimal")]
mod decimal {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_decimal_bounds_are_unsupported() {
        let score = HardSoftDecimalScore::of(Decimal::new(-2, 0), Decimal::new(-10, 0));
        let levels = [
            TrendLevel::Unconstrained,
            TrendLevel::OnlyUp,
            TrendLevel::OnlyDown,
        ];
        for &level in &levels {
            let trend = ScoreTrend::uniform(level, 2);
            let expected = ScoreError::UnsupportedBound {
                representation: "decimal",
            };
            assert_eq!(build_optimistic_bound(&trend, &score).unwrap_err(), expected);
            assert_eq!(build_pessimistic_bound(&trend, &score).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_decimal_bounder_error_message() {
        let bounder = TrendBounder::new(ScoreTrend::uniform(TrendLevel::OnlyDown, 2));
        let score = HardSoftDecimalScore::zero();

        let err = ScoreBounder::<HardSoftDecimalScore>::optimistic_bound(&bounder, &score)
            .unwrap_err();
        assert!(err.to_string().contains("cannot represent infinity"));
    }
}
