use crate::score::*;

#[test]
fn test_creation() {
    let score = HardSoftDoubleScore::of(-2.0, -100.5);
    assert_eq!(score.hard(), -2.0);
    assert_eq!(score.soft(), -100.5);

    assert_eq!(HardSoftDoubleScore::zero(), HardSoftDoubleScore::default());
}

#[test]
fn test_feasibility() {
    assert!(HardSoftDoubleScore::of(0.0, -1000.0).is_feasible());
    assert!(HardSoftDoubleScore::of(10.0, -50.0).is_feasible());
    assert!(HardSoftDoubleScore::of(-0.0, -50.0).is_feasible());
    assert!(!HardSoftDoubleScore::of(-0.5, 0.0).is_feasible());
    assert!(!HardSoftDoubleScore::of(f64::NAN, 0.0).is_feasible());
}

#[test]
fn test_comparison() {
    // Infeasible vs feasible
    let infeasible = HardSoftDoubleScore::of(-1.0, 0.0);
    let feasible = HardSoftDoubleScore::of(0.0, -1000.0);
    assert!(feasible > infeasible);
    assert!(infeasible < feasible);

    // Same hard, different soft
    let s1 = HardSoftDoubleScore::of(0.0, -100.0);
    let s2 = HardSoftDoubleScore::of(0.0, -50.0);
    assert!(s2 > s1);
    assert_eq!(s1, HardSoftDoubleScore::of(0.0, -100.0));

    // Infinite levels order like any other value
    let unbounded = HardSoftDoubleScore::of(-2.0, f64::INFINITY);
    assert!(unbounded > HardSoftDoubleScore::of(-2.0, 1e300));
    assert!(unbounded < HardSoftDoubleScore::of(-1.0, f64::NEG_INFINITY));
}

#[test]
fn test_signed_zero_compares_as_zero() {
    use std::cmp::Ordering;

    let negative_zero = HardSoftDoubleScore::of(-0.0, -0.0);
    assert_eq!(negative_zero, HardSoftDoubleScore::zero());
    assert_eq!(negative_zero.cmp(&HardSoftDoubleScore::zero()), Ordering::Equal);
    assert_eq!(-HardSoftDoubleScore::zero(), HardSoftDoubleScore::zero());

    // A feasible score with a better soft level must not sort below zero hard
    let feasible = HardSoftDoubleScore::of(-0.0, 100.0);
    assert!(feasible.is_feasible());
    assert!(feasible > HardSoftDoubleScore::of(0.0, -100.0));
}

#[test]
fn test_total_order_is_lawful_for_nan() {
    let nan = HardSoftDoubleScore::of(f64::NAN, 0.0);
    assert_eq!(nan, nan);
    assert_eq!(nan.cmp(&nan), std::cmp::Ordering::Equal);
}

#[test]
fn test_arithmetic() {
    let s1 = HardSoftDoubleScore::of(-1.0, -100.0);
    let s2 = HardSoftDoubleScore::of(-1.0, -50.0);

    assert_eq!(s1 + s2, HardSoftDoubleScore::of(-2.0, -150.0));
    assert_eq!(s1 - s2, HardSoftDoubleScore::of(0.0, -50.0));
    assert_eq!(-s1, HardSoftDoubleScore::of(1.0, 100.0));
    assert_eq!(s1.abs(), HardSoftDoubleScore::of(1.0, 100.0));
}

#[test]
fn test_parse() {
    assert_eq!(
        HardSoftDoubleScore::parse("-3hard/-7soft").unwrap(),
        HardSoftDoubleScore::of(-3.0, -7.0)
    );
    assert_eq!(
        HardSoftDoubleScore::parse(" 0hard/-2.25soft ").unwrap(),
        HardSoftDoubleScore::of(0.0, -2.25)
    );
    assert!(HardSoftDoubleScore::parse("-3hard").is_err());
    assert!(HardSoftDoubleScore::parse("-3medium/-7soft").is_err());
    assert!(HardSoftDoubleScore::parse("xhard/-7soft").is_err());
}

#[test]
fn test_display() {
    let score = HardSoftDoubleScore::of(-3.0, -7.5);
    assert_eq!(format!("{}", score), "-3hard/-7.5soft");
    assert_eq!(format!("{:?}", score), "HardSoftScore(-3, -7.5)");
}

#[test]
fn test_text_round_trip() {
    let scores = [
        HardSoftDoubleScore::of(-3.0, -7.0),
        HardSoftDoubleScore::of(0.1 + 0.2, -1.0 / 3.0),
        HardSoftDoubleScore::of(-2.0, f64::INFINITY),
        HardSoftDoubleScore::of(f64::NEG_INFINITY, f64::NEG_INFINITY),
    ];
    for score in scores {
        let text = score.to_string_repr();
        assert_eq!(HardSoftDoubleScore::parse(&text).unwrap(), score, "{}", text);
    }
}

#[test]
fn test_level_numbers() {
    let score = HardSoftDoubleScore::of(-2.0, -50.0);
    assert_eq!(score.to_level_numbers(), vec![-2.0, -50.0]);
    assert_eq!(score.level_number(1), -50.0);
    assert_eq!(HardSoftDoubleScore::from_level_numbers(&[-2.0, -50.0]), score);
}

#[test]
#[should_panic(expected = "requires exactly 2 levels")]
fn test_from_level_numbers_wrong_length() {
    HardSoftDoubleScore::from_level_numbers(&[-2.0]);
}

#[cfg(feature = "decimal")]
mod decimal {
    use rust_decimal::Decimal;

    use crate::score::*;

    #[test]
    fn test_feasibility() {
        assert!(HardSoftDecimalScore::of(Decimal::ZERO, Decimal::new(-1000, 0)).is_feasible());
        assert!(!HardSoftDecimalScore::of(Decimal::new(-1, 5), Decimal::ZERO).is_feasible());
    }

    #[test]
    fn test_comparison() {
        let s1 = HardSoftDecimalScore::of(Decimal::new(-305, 1), Decimal::ZERO);
        let s2 = HardSoftDecimalScore::of(Decimal::new(-30, 0), Decimal::new(-999, 0));
        assert!(s2 > s1);

        // Equal values with different scales compare equal
        let a = HardSoftDecimalScore::of(Decimal::new(-10, 1), Decimal::ZERO);
        let b = HardSoftDecimalScore::of(Decimal::new(-100, 2), Decimal::ZERO);
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_decimal() {
        let score = HardSoftDecimalScore::parse("-30.5hard/-208.25soft").unwrap();
        assert_eq!(score.hard(), Decimal::new(-305, 1));
        assert_eq!(score.soft(), Decimal::new(-20825, 2));
    }

    #[test]
    fn test_text_round_trip_preserves_scale() {
        let score = HardSoftDecimalScore::parse("-3.50hard/-0.00001soft").unwrap();
        assert_eq!(score.to_string_repr(), "-3.50hard/-0.00001soft");
        assert_eq!(HardSoftDecimalScore::parse(&score.to_string_repr()).unwrap(), score);
    }

    #[test]
    fn test_arithmetic() {
        let s1 = HardSoftDecimalScore::of(Decimal::new(-15, 1), Decimal::new(-1005, 1));
        let s2 = HardSoftDecimalScore::of(Decimal::new(-5, 1), Decimal::new(-5025, 2));

        let sum = s1 + s2;
        assert_eq!(sum.hard(), Decimal::new(-2, 0));
        assert_eq!(sum.soft(), Decimal::new(-15075, 2));
        assert_eq!(-s1, HardSoftDecimalScore::of(Decimal::new(15, 1), Decimal::new(1005, 1)));
    }
}
