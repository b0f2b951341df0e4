use exactum_integer::BigInteger;

fn big(s: &str) -> BigInteger {
    BigInteger::parse(s).unwrap()
}

#[test]
fn bit_length_follows_the_asymmetric_convention() {
    assert_eq!(BigInteger::ZERO.bit_length(), 0);
    assert_eq!(big("1").bit_length(), 1);
    assert_eq!(big("-1").bit_length(), 0);
    assert_eq!(big("-2").bit_length(), 1);
    assert_eq!(big("4").bit_length(), 3);
    assert_eq!(big("-4").bit_length(), 2);
}

#[test]
fn and_or_xor_match_hand_computed_two_s_complement() {
    assert_eq!(big("12").and(&big("10")), big("8")); // 1100 & 1010 = 1000
    assert_eq!(big("12").or(&big("10")), big("14")); // 1100 | 1010 = 1110
    assert_eq!(big("12").xor(&big("10")), big("6")); // 1100 ^ 1010 = 0110
}

#[test]
fn not_is_negate_minus_one() {
    assert_eq!(big("0").not(), big("-1"));
    assert_eq!(big("5").not(), big("-6"));
    assert_eq!(big("-6").not(), big("5"));
}

#[test]
fn lowest_set_bit_of_zero_is_negative_one() {
    assert_eq!(BigInteger::ZERO.lowest_set_bit(), -1);
    assert_eq!(big("8").lowest_set_bit(), 3);
    assert_eq!(big("12").lowest_set_bit(), 2);
}

#[test]
fn test_bit_reads_two_s_complement_bits() {
    assert!(big("5").test_bit(0).unwrap());
    assert!(!big("5").test_bit(1).unwrap());
    assert!(big("-1").test_bit(100).unwrap());
    assert!(big("-1").test_bit(0).is_ok());
    assert!(big("1").test_bit(-1).is_err());
}

#[test]
fn shift_left_then_right_round_trips_for_positive_values() {
    let a = big("123456789");
    assert_eq!(a.shift_left(10).shift_right(10), a);
}

#[test]
fn shift_right_on_negative_values_floors() {
    // -7 >> 1 == -4 (floor of -3.5), matching arithmetic shift semantics.
    assert_eq!(big("-7").shift_right(1), big("-4"));
    assert_eq!(big("-8").shift_right(1), big("-4"));
}

#[test]
fn negative_shift_amounts_flip_direction() {
    assert_eq!(big("3").shift_left(-1), big("3").shift_right(1));
    assert_eq!(big("3").shift_right(-1), big("3").shift_left(1));
}
