use exactum_base::RoundingMode;
use exactum_decimal::BigDecimal;

fn bd(s: &str) -> BigDecimal {
    BigDecimal::parse(s).unwrap()
}

// 2.5 / 2 divides evenly to the half boundary for every rounding mode's
// exactly-half case, exercising the whole table against one example.
const HALF_BOUNDARY_CASES: &[(RoundingMode, &str, &str)] = &[
    (RoundingMode::Up, "2.5", "3"),
    (RoundingMode::Down, "2.5", "2"),
    (RoundingMode::Ceiling, "2.5", "3"),
    (RoundingMode::Floor, "2.5", "2"),
    (RoundingMode::HalfUp, "2.5", "3"),
    (RoundingMode::HalfDown, "2.5", "2"),
    (RoundingMode::HalfCeiling, "2.5", "3"),
    (RoundingMode::HalfFloor, "2.5", "2"),
    (RoundingMode::HalfEven, "2.5", "2"), // quotient 2 is already even
];

#[test]
fn every_named_mode_rounds_a_shared_half_boundary_example_as_expected() {
    for (mode, input, expected) in HALF_BOUNDARY_CASES {
        let result = bd(input).divided_by(&bd("1"), Some(0), *mode).unwrap();
        assert_eq!(result.to_string(), *expected, "mode {mode:?}");
    }
}

#[test]
fn half_even_bumps_when_the_kept_digit_would_be_odd() {
    // 3.5 / 1 -> quotient 3 is odd, HALF_EVEN rounds to 4.
    let result = bd("3.5").divided_by(&bd("1"), Some(0), RoundingMode::HalfEven).unwrap();
    assert_eq!(result.to_string(), "4");
}

#[test]
fn negative_values_respect_ceiling_and_floor_direction() {
    assert_eq!(bd("-2.5").divided_by(&bd("1"), Some(0), RoundingMode::Ceiling).unwrap().to_string(), "-2");
    assert_eq!(bd("-2.5").divided_by(&bd("1"), Some(0), RoundingMode::Floor).unwrap().to_string(), "-3");
}

#[test]
fn unnecessary_mode_accepts_exact_quotients_and_rejects_inexact_ones() {
    assert_eq!(bd("6").divided_by(&bd("2"), Some(0), RoundingMode::Unnecessary).unwrap().to_string(), "3");
    assert!(bd("7").divided_by(&bd("2"), Some(0), RoundingMode::Unnecessary).is_err());
}
