use exactum_integer::BigInteger;

#[test]
fn hexadecimal_formatting_uses_lowercase_digits() {
    let n = BigInteger::parse("305419896").unwrap();
    assert_eq!(n.to_base(16).unwrap(), "12345678");
}

#[test]
fn parsing_is_case_insensitive() {
    let lower = BigInteger::from_base("1a2b3c", 16).unwrap();
    let upper = BigInteger::from_base("1A2B3C", 16).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn negative_values_carry_a_leading_minus_in_every_base() {
    let n = BigInteger::parse("-255").unwrap();
    assert_eq!(n.to_base(16).unwrap(), "-ff");
    assert_eq!(BigInteger::from_base("-ff", 16).unwrap(), n);
}

#[test]
fn invalid_digits_for_the_radix_are_rejected() {
    assert!(BigInteger::from_base("129", 2).is_err());
    assert!(BigInteger::from_base("xyz", 10).is_err());
}

#[test]
fn binary_and_base36_round_trip() {
    let n = BigInteger::parse("987654321098765432109876543210").unwrap();
    for base in [2u32, 8, 10, 16, 36] {
        let s = n.to_base(base).unwrap();
        assert_eq!(BigInteger::from_base(&s, base).unwrap(), n);
    }
}
