use exactum_integer::BigInteger;
use exactum_rational::BigRational;

fn br(s: &str) -> BigRational {
    BigRational::parse(s).unwrap()
}

#[test]
fn simplified_reduces_by_the_gcd() {
    assert_eq!(br("8/12").simplified().unwrap().to_string(), "2/3");
    assert_eq!(br("-8/12").simplified().unwrap().to_string(), "-2/3");
}

#[test]
fn simplified_of_a_value_already_in_lowest_terms_is_unchanged() {
    assert_eq!(br("5/7").simplified().unwrap().to_string(), "5/7");
}

#[test]
fn simplified_zero_numerator_collapses_to_zero_over_one() {
    assert_eq!(br("0/99").simplified().unwrap().to_string(), "0");
}

#[test]
fn new_normalizes_a_negative_denominator_into_the_numerator() {
    let n = BigInteger::parse("1").unwrap();
    let d = BigInteger::parse("-2").unwrap();
    let r = BigRational::new(n, d).unwrap();
    assert_eq!(r.to_string(), "-1/2");
    assert!(r.denominator() > &BigInteger::ZERO);
}

#[test]
fn is_finite_decimal_is_checked_against_the_simplified_denominator() {
    // 4/6 simplifies to 2/3, whose denominator has a factor of 3.
    assert!(!br("4/6").is_finite_decimal().unwrap());
    // 5/10 simplifies to 1/2.
    assert!(br("5/10").is_finite_decimal().unwrap());
}
