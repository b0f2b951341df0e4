use exactum_decimal::BigDecimal;
use exactum_integer::BigInteger;

fn bd(s: &str) -> BigDecimal {
    BigDecimal::parse(s).unwrap()
}

#[test]
fn to_big_integer_succeeds_only_without_a_fractional_remainder() {
    assert_eq!(bd("42").to_big_integer().unwrap(), BigInteger::parse("42").unwrap());
    assert_eq!(bd("42.00").to_big_integer().unwrap(), BigInteger::parse("42").unwrap());
    assert!(bd("42.01").to_big_integer().is_err());
}

#[test]
fn from_big_integer_round_trips_through_display() {
    let n = BigInteger::parse("-98765432109876543210").unwrap();
    let d = BigDecimal::from_big_integer(n.clone());
    assert_eq!(d.scale(), 0);
    assert_eq!(d.to_string(), n.to_string());
}

#[test]
fn to_int_overflows_when_the_value_exceeds_i64() {
    assert_eq!(bd("9223372036854775807").to_int().unwrap(), i64::MAX);
    assert!(bd("99999999999999999999").to_int().is_err());
}

#[test]
fn to_float_matches_an_exactly_representable_value() {
    assert_eq!(bd("0.5").to_float(), 0.5);
    assert_eq!(bd("-2.25").to_float(), -2.25);
}

#[test]
fn quotient_and_remainder_truncate_like_integer_division() {
    let (q, r) = bd("7.5").quotient_and_remainder(&bd("2")).unwrap();
    assert_eq!(q.to_string(), "3");
    assert_eq!(q.scale(), 0);
    assert_eq!(r.to_string(), "1.5");
    assert_eq!(r.scale(), 1);
}
