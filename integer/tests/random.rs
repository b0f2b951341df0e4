use exactum_integer::BigInteger;

#[test]
fn random_bits_masks_off_the_high_padding_bits() {
    // 5 bits needs 1 byte; the top 3 bits of that byte must be masked away.
    let mut source = std::iter::once(0xFFu8);
    let n = BigInteger::random_bits(5, &mut |nbytes| {
        assert_eq!(nbytes, 1);
        vec![source.next().unwrap()]
    });
    assert_eq!(n, BigInteger::parse("31").unwrap()); // 0b00011111
}

#[test]
fn random_bits_of_zero_length_is_always_zero() {
    let n = BigInteger::random_bits(0, &mut |_| vec![]);
    assert_eq!(n, BigInteger::ZERO);
}

#[test]
fn random_range_rejects_an_inverted_bound() {
    let min = BigInteger::parse("10").unwrap();
    let max = BigInteger::parse("5").unwrap();
    assert!(BigInteger::random_range(&min, &max, &mut |n| vec![0u8; n]).is_err());
}

#[test]
fn random_range_with_equal_bounds_returns_that_bound_without_drawing() {
    let v = BigInteger::parse("42").unwrap();
    let mut calls = 0;
    let result = BigInteger::random_range(&v, &v, &mut |n| {
        calls += 1;
        vec![0u8; n]
    })
    .unwrap();
    assert_eq!(result, v);
    assert_eq!(calls, 0);
}

#[test]
fn random_range_rejection_sampling_retries_out_of_range_draws() {
    // span = max-min = 3, bound = 4, needs 2 bits. First draw 0b11 (3) is
    // in range [0,4) so it is accepted immediately, landing on min+3.
    let min = BigInteger::parse("100").unwrap();
    let max = BigInteger::parse("103").unwrap();
    let mut draws = vec![0b00000011u8].into_iter();
    let result = BigInteger::random_range(&min, &max, &mut |nbytes| {
        assert_eq!(nbytes, 1);
        vec![draws.next().unwrap()]
    })
    .unwrap();
    assert_eq!(result, BigInteger::parse("103").unwrap());
}
