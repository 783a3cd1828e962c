//! End-to-end value-level exercise of the boundary cases enumerated by the
//! specification: integer overflow thresholds, float range, the
//! grammar-violation error paths, and chunk boundaries that split a
//! multi-byte lexeme right down the middle.

use jsonscalar::{JsonValue, ParseError, ParseStatus, ValueParser};
use rstest::rstest;

fn parse_to_ready(input: &[u8]) -> Result<JsonValue, ParseError> {
    let mut parser = ValueParser::new();
    let (status, _) = parser.feed(input)?;
    assert_eq!(status, ParseStatus::Ready, "expected Ready for {input:?}");
    parser.into_value()
}

/// Feeds `first` then `second`, asserting `first` alone left the parser
/// wanting more input (the whole point of a boundary-split case: the split
/// lands strictly inside the lexeme, not on a byte that already completes
/// it) before completing with `second`.
fn feed_two_chunks(first: &[u8], second: &[u8]) -> (ParseStatus, JsonValue) {
    let mut parser = ValueParser::new();
    let status = parser.feed(first).unwrap().0;
    assert_eq!(
        status,
        ParseStatus::NeedMore,
        "expected NeedMore after first chunk {first:?}"
    );
    let (status, _) = parser.feed(second).unwrap();
    (status, parser.into_value().unwrap())
}

#[rstest]
#[case::leading_minus(b"-7", 1, JsonValue::Integer(-7))]
#[case::minus_zero(b"-0", 1, JsonValue::Integer(0))]
#[case::decimal_point(b"1.5", 2, JsonValue::Float(1.5))]
#[case::exponent_marker(b"1e+23", 2, JsonValue::Float(1e23))]
#[case::exponent_sign(b"1e+23", 3, JsonValue::Float(1e23))]
fn chunk_boundary_splits_number_grammar(
    #[case] input: &[u8],
    #[case] split: usize,
    #[case] expected: JsonValue,
) {
    let (status, value) = feed_two_chunks(&input[..split], &input[split..]);
    assert_eq!(status, ParseStatus::Ready);
    assert_eq!(value, expected);
}

/// The JSON string `"\u0041"` (decodes to `"A"`), spelled with explicit
/// byte escapes so the intended bytes (`"`, `\`, `u`, `0`, `0`, `4`, `1`,
/// `"`) are unambiguous.
const UNICODE_ESCAPE_INPUT: &[u8] = b"\"\\u0041\"";

#[rstest]
#[case::after_backslash_before_short_escape(br#""a\nb""#, 3, "a\nb")]
#[case::unicode_escape_after_backslash(UNICODE_ESCAPE_INPUT, 2, "A")]
#[case::unicode_escape_after_u(UNICODE_ESCAPE_INPUT, 3, "A")]
#[case::unicode_escape_after_first_hex_digit(UNICODE_ESCAPE_INPUT, 4, "A")]
#[case::unicode_escape_after_second_hex_digit(UNICODE_ESCAPE_INPUT, 5, "A")]
#[case::unicode_escape_after_third_hex_digit(UNICODE_ESCAPE_INPUT, 6, "A")]
#[case::unicode_escape_after_fourth_hex_digit(UNICODE_ESCAPE_INPUT, 7, "A")]
fn chunk_boundary_splits_string_escape(
    #[case] input: &[u8],
    #[case] split: usize,
    #[case] expected: &str,
) {
    let (status, value) = feed_two_chunks(&input[..split], &input[split..]);
    assert_eq!(status, ParseStatus::Ready);
    assert_eq!(value, JsonValue::String(expected.to_string()));
}

#[test]
fn i64_boundaries() {
    assert_eq!(
        parse_to_ready(b"9223372036854775807").unwrap(),
        JsonValue::Integer(i64::MAX)
    );
    assert_eq!(
        parse_to_ready(b"-9223372036854775808").unwrap(),
        JsonValue::Integer(i64::MIN)
    );
    assert!(matches!(
        parse_to_ready(b"9223372036854775808"),
        Err(ParseError::IntegerOverflow)
    ));
    assert!(matches!(
        parse_to_ready(b"-9223372036854775809"),
        Err(ParseError::IntegerOverflow)
    ));
}

#[test]
fn float_out_of_range() {
    assert!(matches!(
        parse_to_ready(b"1.0e1000000"),
        Err(ParseError::FloatOutOfRange(_))
    ));
}

#[test]
fn negative_zero_is_integer_zero() {
    assert_eq!(parse_to_ready(b"-0").unwrap(), JsonValue::Integer(0));
}

#[test]
fn leading_zero_followed_by_digit_terminates_the_number() {
    // "01" is not a valid JSON number; the grammar stops after "0" and
    // leaves "1" for the (nonexistent, here) next value.
    let mut parser = ValueParser::new();
    let (status, remainder) = parser.feed(b"01").unwrap();
    assert_eq!(status, ParseStatus::Ready);
    assert_eq!(remainder, b"1");
    assert_eq!(parser.into_value().unwrap(), JsonValue::Integer(0));
}

#[test]
fn bare_decimal_point_without_fraction_digit_is_an_error() {
    let mut parser = ValueParser::new();
    let err = parser.feed(b"1.").unwrap().0;
    assert_eq!(err, ParseStatus::NeedMore);
    let err = parser.feed(b"e5").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedByte { byte: b'e', .. }));
}

#[test]
fn unterminated_string_needs_more_forever() {
    let mut parser = ValueParser::new();
    let (status, _) = parser.feed(br#""unterminated"#).unwrap();
    assert_eq!(status, ParseStatus::NeedMore);
}

#[test]
fn control_byte_is_not_special_cased_by_the_lexer() {
    // The original's json_string_parse only special-cases '"' and '\\';
    // everything else, including raw control bytes, passes through
    // unexamined. This crate preserves that permissiveness.
    let mut parser = ValueParser::new();
    let (status, _) = parser.feed(b"\"a\x01b\"").unwrap();
    assert_eq!(status, ParseStatus::Ready);
    assert_eq!(
        parser.into_value().unwrap(),
        JsonValue::String("a\u{1}b".to_string())
    );
}

#[test]
fn each_literal_rejects_a_wrong_byte_partway_through() {
    for (input, bad_byte) in [
        (&b"tru3"[..], b'3'),
        (&b"fal5e"[..], b'5'),
        (&b"nul!"[..], b'!'),
    ] {
        let mut parser = ValueParser::new();
        let err = parser.feed(input).unwrap_err();
        match err {
            ParseError::LiteralMismatch { found, .. } => assert_eq!(found, bad_byte),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
