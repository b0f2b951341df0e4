use exactum_base::RoundingMode;
use exactum_integer::BigInteger;

fn big(s: &str) -> BigInteger {
    BigInteger::parse(s).unwrap()
}

#[test]
fn truncated_division_rounds_toward_zero() {
    let (q, r) = big("7").divide_qr(&big("2")).unwrap();
    assert_eq!(q, big("3"));
    assert_eq!(r, big("1"));

    let (q, r) = big("-7").divide_qr(&big("2")).unwrap();
    assert_eq!(q, big("-3"));
    assert_eq!(r, big("-1"));

    let (q, r) = big("7").divide_qr(&big("-2")).unwrap();
    assert_eq!(q, big("-3"));
    assert_eq!(r, big("1"));
}

#[test]
fn division_by_zero_is_rejected() {
    assert!(big("1").divide_qr(&BigInteger::ZERO).is_err());
    assert!(big("1").quotient(&BigInteger::ZERO).is_err());
    assert!(big("1").modulo(&BigInteger::ZERO).is_err());
}

#[test]
fn modulo_is_always_nonnegative_for_positive_modulus() {
    assert_eq!(big("-7").modulo(&big("3")).unwrap(), big("2"));
    assert_eq!(big("7").modulo(&big("3")).unwrap(), big("1"));
    assert!(big("-7").modulo(&big("-3")).is_err());
}

#[test]
fn divided_by_with_unnecessary_mode_rejects_inexact_results() {
    assert!(big("7").divided_by(&big("2"), RoundingMode::Unnecessary).is_err());
    assert_eq!(big("6").divided_by(&big("2"), RoundingMode::Unnecessary).unwrap(), big("3"));
}

#[test]
fn divided_by_half_up_rounds_away_from_zero_on_exact_half() {
    assert_eq!(big("5").divided_by(&big("2"), RoundingMode::HalfUp).unwrap(), big("3"));
    assert_eq!(big("-5").divided_by(&big("2"), RoundingMode::HalfUp).unwrap(), big("-3"));
}

#[test]
fn divided_by_half_even_breaks_ties_to_the_even_quotient() {
    // 5/2 = 2.5 -> quotient 2 is even, so HALF_EVEN picks 2.
    assert_eq!(big("5").divided_by(&big("2"), RoundingMode::HalfEven).unwrap(), big("2"));
    // 7/2 = 3.5 -> quotient 3 is odd, so HALF_EVEN bumps to 4.
    assert_eq!(big("7").divided_by(&big("2"), RoundingMode::HalfEven).unwrap(), big("4"));
}

#[test]
fn divided_by_floor_and_ceiling_match_their_names() {
    assert_eq!(big("-7").divided_by(&big("2"), RoundingMode::Floor).unwrap(), big("-4"));
    assert_eq!(big("-7").divided_by(&big("2"), RoundingMode::Ceiling).unwrap(), big("-3"));
    assert_eq!(big("7").divided_by(&big("2"), RoundingMode::Floor).unwrap(), big("3"));
    assert_eq!(big("7").divided_by(&big("2"), RoundingMode::Ceiling).unwrap(), big("4"));
}
