//! Integration tests for infrastructure_bignum_text crate
//!
//! These tests verify that formatting and scanning agree with each other
//! and exercise the printf and scanner contracts end-to-end.

use infrastructure_bignum_text::*;
use malachite::Integer;
use proptest::option;
use proptest::prelude::*;
use tracing_test::traced_test;

fn big(value: i128) -> SignedMagnitude {
    SignedMagnitude::from_integer(&Integer::from(value))
}

fn render(value: &SignedMagnitude, directive: &str) -> String {
    let request = FormatRequest::from_directive(directive).unwrap();
    String::from_utf8(encode(value, &request)).unwrap()
}

#[test]
fn test_hex_prefixes() {
    let v = big(255);
    assert_eq!(render(&v, "%#x"), "0xff");
    assert_eq!(render(&v, "%#X"), "0XFF");
}

#[test]
fn test_zero_pad_and_precision_precedence() {
    let v = big(5);
    assert_eq!(render(&v, "%05d"), "00005");
    assert_eq!(render(&v, "%5.2d"), "   05");
    assert_eq!(render(&v, "%05.2d"), "   05");
    assert_eq!(render(&v, "%-05d"), "5    ");
}

#[test]
fn test_sign_flag_precedence() {
    assert_eq!(render(&big(5), "%+ d"), "+5");
    assert_eq!(render(&big(5), "% d"), " 5");
    assert_eq!(render(&big(-5), "% d"), "-5");
}

#[test]
fn test_zero_with_zero_precision_writes_nothing() {
    let zero = big(0);
    for directive in ["%.0d", "%.d", "%+#10.0x", "%-8.0b", "%.0O"] {
        assert_eq!(render(&zero, directive), "", "directive {}", directive);
    }
}

#[test]
fn test_largest_directive_counts_encode() {
    let out = render(&big(5), "%+1000000.1000000d");
    assert_eq!(out.len(), MAX_COUNT + 1);
    assert!(out.starts_with("+000"));
    assert!(out.ends_with("05"));

    assert_eq!(
        FormatRequest::from_directive("%+.18446744073709551615d"),
        Err(DirectiveError::Overflow)
    );
}

#[test]
#[traced_test]
fn test_unknown_verb_degrades() {
    let out = render(&big(5), "%08q");
    assert!(out.contains('5'));
    assert_eq!(out, "%!q(big.Int=5)");
    assert!(logs_contain("unknown format verb"));
}

#[test]
fn test_large_value_in_all_verbs() {
    // 2^128 + 1
    let v = SignedMagnitude::from_integer(&((Integer::from(1) << 128u64) + Integer::from(1)));
    assert_eq!(render(&v, "%d"), "340282366920938463463374607431768211457");
    assert_eq!(render(&v, "%x"), "100000000000000000000000000000001");
    assert_eq!(render(&v, "%O"), "0o4000000000000000000000000000000000000000001");
    assert_eq!(render(&-v, "%#X"), "-0X100000000000000000000000000000001");
}

#[test]
fn test_decode_negative_zero() {
    let (value, base) = set_string("-0", ScanBase::Fixed(Base::DECIMAL)).unwrap();
    assert!(!value.is_negative());
    assert!(value.is_zero());
    assert_eq!(base, Base::DECIMAL);
}

#[test]
fn test_decode_invalid_digit_for_base() {
    assert_eq!(
        set_string("12g", ScanBase::Fixed(Base::OCTAL)),
        Err(ParseError::InvalidDigitForBase { digit: b'g', base: 8 })
    );
}

#[test]
fn test_scan_sequence_from_one_reader() {
    let mut input = StrScanner::new("  -0x10 +7  0b11");
    let verb = Verb::Generic('v');
    assert_eq!(scan(&mut input, verb).unwrap(), big(-16));
    assert_eq!(scan(&mut input, verb).unwrap(), big(7));
    assert_eq!(scan(&mut input, verb).unwrap(), big(3));
    assert_eq!(
        scan(&mut input, verb),
        Err(ParseError::MalformedInput(Malformed::EmptyInput))
    );
}

#[test]
fn test_text_contract() {
    let v = big(-123456789);
    assert_eq!(text(Some(&v), Base::new(62).unwrap()), "-8m0Kx");
    assert_eq!(text(None, Base::DECIMAL), "<nil>");
}

#[test]
fn test_printf_inside_format() {
    let v = big(-42);
    let line = format!("[{:>8}] [{:<+6}]", v.printf(Verb::Decimal), big(42).printf(Verb::Decimal));
    assert_eq!(line, "[     -42] [+42   ]");
}

#[test]
fn test_io_sink_writes_through() {
    let mut out = IoSink(Vec::new());
    let request = FormatRequest::from_directive("%#o").unwrap();
    encode_into(&big(8), &request, &mut out).unwrap();
    assert_eq!(out.0, b"010");
}

fn round_trip_verb() -> impl Strategy<Value = Verb> {
    prop_oneof![
        Just(Verb::Binary),
        Just(Verb::Octal),
        Just(Verb::Decimal),
        Just(Verb::LowerHex),
        Just(Verb::UpperHex),
    ]
}

fn prefixed_verb() -> impl Strategy<Value = Verb> {
    prop_oneof![
        Just(Verb::Binary),
        Just(Verb::OctalO),
        Just(Verb::LowerHex),
        Just(Verb::UpperHex),
    ]
}

proptest! {
    #[test]
    fn prop_encode_then_scan_round_trips(
        value in any::<i128>(),
        verb in round_trip_verb(),
        width in option::of(0usize..48),
        precision in option::of(1usize..48),
        show_sign in any::<bool>(),
        zero_pad in any::<bool>(),
        left_justify in any::<bool>(),
    ) {
        let request = FormatRequest {
            verb,
            show_sign,
            show_space: false,
            alternate: false,
            width,
            precision,
            left_justify,
            zero_pad,
        };
        let v = big(value);
        let out = String::from_utf8(encode(&v, &request)).unwrap();
        let parsed = scan(&mut StrScanner::new(&out), verb).unwrap();
        prop_assert_eq!(parsed, v);
    }

    #[test]
    fn prop_prefixed_output_infers_base(value in any::<i128>(), verb in prefixed_verb()) {
        let request = FormatRequest::new(verb).with_alternate();
        let v = big(value);
        let out = String::from_utf8(encode(&v, &request)).unwrap();
        let (parsed, base) = set_string(&out, ScanBase::Infer).unwrap();
        prop_assert_eq!(parsed, v);
        prop_assert_eq!(Some(base), verb.base());
    }

    #[test]
    fn prop_width_is_a_minimum(
        value in any::<i64>(),
        width in 0usize..40,
        zero_pad in any::<bool>(),
        left_justify in any::<bool>(),
    ) {
        let v = SignedMagnitude::from_i64(value);
        let natural = encode(&v, &FormatRequest::default()).len();
        let mut request = FormatRequest::default().with_width(width);
        request.zero_pad = zero_pad;
        request.left_justify = left_justify;
        let out = encode(&v, &request);
        prop_assert_eq!(out.len(), natural.max(width));
        let digits = out.iter().filter(|b| b.is_ascii_digit()).count();
        prop_assert!(digits >= natural - usize::from(value < 0));
    }
}
