use exactum_integer::BigInteger;

#[test]
fn square_of_a_big_prime_like_number() {
    let a = BigInteger::parse("123456789098765432101234567890987654321").unwrap();
    let squared = a.pow(2).unwrap();
    assert_eq!(squared.to_string().len(), 78);
}

#[test]
fn zero_exponent_is_always_one() {
    assert_eq!(BigInteger::ZERO.pow(0).unwrap(), BigInteger::one());
    assert_eq!(BigInteger::parse("-5").unwrap().pow(0).unwrap(), BigInteger::one());
}

#[test]
fn exponent_out_of_range_is_rejected() {
    assert!(BigInteger::one().pow(1_000_001).is_err());
}
