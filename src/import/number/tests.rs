use super::*;

#[test]
fn integer_reads_leading_digits() {
    assert_eq!(parse_integer("42"), Some(42));
    assert_eq!(parse_integer(" 7 "), Some(7));
    assert_eq!(parse_integer("30 min"), Some(30));
    assert_eq!(parse_integer("2.9"), Some(2));
    assert_eq!(parse_integer("-3"), Some(-3));
}

#[test]
fn integer_rejects_non_numeric() {
    assert_eq!(parse_integer(""), None);
    assert_eq!(parse_integer("abc"), None);
    assert_eq!(parse_integer("x1"), None);
}

#[test]
fn float_reads_leading_number() {
    assert_eq!(parse_float("1.5"), Some(1.5));
    assert_eq!(parse_float(".25"), Some(0.25));
    assert_eq!(parse_float("2 marks"), Some(2.0));
    assert_eq!(parse_float("1e1"), Some(10.0));
    assert_eq!(parse_float("-0.5"), Some(-0.5));
}

#[test]
fn float_rejects_non_numeric() {
    assert_eq!(parse_float(""), None);
    assert_eq!(parse_float("NaN"), None);
    assert_eq!(parse_float("one"), None);
}

#[test]
fn bool_accepts_true_and_one() {
    assert!(parse_bool("true"));
    assert!(parse_bool("TRUE"));
    assert!(parse_bool(" 1 "));
    assert!(!parse_bool("yes"));
    assert!(!parse_bool("false"));
    assert!(!parse_bool(""));
}
