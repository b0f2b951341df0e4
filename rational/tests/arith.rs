use exactum_rational::BigRational;

fn br(s: &str) -> BigRational {
    BigRational::parse(s).unwrap()
}

#[test]
fn addition_cross_multiplies_without_simplifying() {
    let sum = br("1/2").plus(&br("1/3"));
    assert_eq!(sum.to_string(), "5/6");
}

#[test]
fn subtraction_cross_multiplies_without_simplifying() {
    let diff = br("1/2").minus(&br("1/3"));
    assert_eq!(diff.to_string(), "1/6");
}

#[test]
fn multiplication_multiplies_numerators_and_denominators_independently() {
    let product = br("2/3").multiplied_by(&br("3/4"));
    assert_eq!(product.to_string(), "6/12");
    assert_eq!(product.simplified().unwrap().to_string(), "1/2");
}

#[test]
fn division_by_zero_numerator_is_rejected() {
    assert!(br("1/2").divided_by(&br("0/5")).is_err());
}

#[test]
fn division_flips_the_divisor_and_normalizes_sign() {
    let result = br("1/2").divided_by(&br("-2/3")).unwrap();
    assert_eq!(result.to_string(), "-3/4");
}

#[test]
fn negation_flips_only_the_numerator() {
    let a = br("3/7");
    assert_eq!(a.negated().to_string(), "-3/7");
    assert_eq!(a.negated().negated(), a);
}
