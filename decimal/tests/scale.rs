use exactum_base::RoundingMode;
use exactum_decimal::BigDecimal;

fn bd(s: &str) -> BigDecimal {
    BigDecimal::parse(s).unwrap()
}

#[test]
fn to_scale_upward_is_always_exact_regardless_of_mode() {
    let a = bd("1.5");
    let wider = a.to_scale(4, RoundingMode::Unnecessary).unwrap();
    assert_eq!(wider.scale(), 4);
    assert_eq!(wider.to_string(), "1.5000");
    assert_eq!(wider, a);
}

#[test]
fn to_scale_downward_applies_the_rounding_mode() {
    assert_eq!(bd("1.25").to_scale(1, RoundingMode::HalfUp).unwrap().to_string(), "1.3");
    assert_eq!(bd("1.25").to_scale(1, RoundingMode::Down).unwrap().to_string(), "1.2");
    assert!(bd("1.25").to_scale(1, RoundingMode::Unnecessary).is_err());
}

#[test]
fn strip_trailing_zeros_reduces_scale_to_the_minimum_needed() {
    assert_eq!(bd("100.000").strip_trailing_zeros().to_string(), "100");
    assert_eq!(bd("100.000").strip_trailing_zeros().scale(), 0);
    assert_eq!(bd("1.230").strip_trailing_zeros().to_string(), "1.23");
}

#[test]
fn strip_trailing_zeros_of_zero_is_the_canonical_zero() {
    let stripped = bd("0.000").strip_trailing_zeros();
    assert_eq!(stripped.to_string(), "0");
    assert_eq!(stripped.scale(), 0);
}

#[test]
fn with_point_moved_right_multiplies_out_when_it_exceeds_the_current_scale() {
    let a = bd("1.5");
    assert_eq!(a.with_point_moved_right(3).unwrap().to_string(), "1500");
}

#[test]
fn plus_and_minus_align_to_the_wider_operand_s_scale() {
    let sum = bd("1").plus(&bd("0.001"));
    assert_eq!(sum.scale(), 3);
    assert_eq!(sum.to_string(), "1.001");

    let diff = bd("1.001").minus(&bd("1"));
    assert_eq!(diff.scale(), 3);
    assert_eq!(diff.to_string(), "0.001");
}

#[test]
fn multiplied_by_sums_the_scales_without_stripping() {
    let product = bd("1.10").multiplied_by(&bd("2.0"));
    assert_eq!(product.scale(), 3);
    assert_eq!(product.to_string(), "2.200");
}
