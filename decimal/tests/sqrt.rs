use exactum_decimal::BigDecimal;

fn bd(s: &str) -> BigDecimal {
    BigDecimal::parse(s).unwrap()
}

#[test]
fn sqrt_of_a_perfect_square_is_exact_at_scale_zero() {
    assert_eq!(bd("144").sqrt(0).unwrap().to_string(), "12");
}

#[test]
fn sqrt_floors_when_the_result_does_not_terminate() {
    // sqrt(2) ~= 1.41421356...
    assert_eq!(bd("2").sqrt(5).unwrap().to_string(), "1.41421");
}

#[test]
fn sqrt_handles_an_odd_source_scale_by_bumping_internally() {
    // 0.01 has scale 1 relative to the requested target scale 1: 2*1-1=1 is
    // odd, so the implementation must bump the source scale by one decimal.
    assert_eq!(bd("0.1").sqrt(1).unwrap().to_string(), "0.3");
}

#[test]
fn sqrt_accepts_a_requested_scale_smaller_than_half_the_source_scale() {
    // self.scale=2, requested scale=0: the naive 2*scale-self.scale
    // exponent would be negative; the root is computed at an internal
    // scale large enough and then truncated down.
    assert_eq!(bd("2.00").sqrt(0).unwrap().to_string(), "1");
    assert_eq!(bd("99.9999").sqrt(0).unwrap().to_string(), "9");
}

#[test]
fn sqrt_of_a_negative_value_is_rejected() {
    assert!(bd("-1").sqrt(2).is_err());
}

#[test]
fn sqrt_of_zero_is_zero_at_any_requested_scale() {
    assert_eq!(bd("0").sqrt(6).unwrap().to_string(), "0.000000");
}
