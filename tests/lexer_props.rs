use jsscan::{Context, Scanner, TokenKind, TokenValue};
use proptest::prelude::*;

fn utf16(src: &str) -> Vec<u16> {
    src.encode_utf16().collect()
}

fn any_context() -> impl Strategy<Value = Context> {
    any::<u32>().prop_map(Context::from_bits_truncate)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn never_panics_and_progresses(s in ".*", context in any_context()) {
        let source = utf16(&s);
        let mut scanner = Scanner::new(&source);
        let mut last_end = 0usize;
        let max_steps = source.len() + 2;

        for _ in 0..max_steps {
            let Ok(token) = scanner.next_token(context) else { break };
            prop_assert!(token.start <= token.end, "start>end: {token:?} input={s:?}");
            prop_assert!(token.end <= source.len(), "end out of bounds: {token:?} input={s:?}");
            prop_assert!(token.start >= last_end, "moved backwards: {token:?} input={s:?}");
            if token.kind == TokenKind::Eof {
                prop_assert_eq!(token.start, source.len());
                return Ok(());
            }
            prop_assert!(token.end > token.start, "empty token: {token:?} input={s:?}");
            last_end = token.end;
        }
        prop_assert!(scanner.offset() <= source.len());
    }

    #[test]
    fn ascii_identifier_value_is_its_source(name in "[A-Za-z_$][A-Za-z0-9_$]{0,20}") {
        let source = utf16(&name);
        let token = Scanner::new(&source).next_token(Context::RAW).unwrap();
        prop_assert!(token.kind.is_identifier_name());
        prop_assert_eq!(token.value.as_name(), Some(name.as_str()));
        prop_assert_eq!(token.raw.as_deref(), Some(name.as_str()));
    }

    #[test]
    fn unicode_escape_round_trips(
        cp in (0u32..=0x10FFFF).prop_filter("no surrogates", |c| !(0xD800..=0xDFFF).contains(c)),
    ) {
        let src = format!("'\\u{{{cp:X}}}'");
        let source = utf16(&src);
        let token = Scanner::new(&source).next_token(Context::empty()).unwrap();
        let decoded: Vec<u32> = token.value.as_string().unwrap().code_points().collect();
        prop_assert_eq!(decoded, vec![cp]);

        if cp <= 0xFFFF {
            let src = format!("'\\u{cp:04x}'");
            let source = utf16(&src);
            let token = Scanner::new(&source).next_token(Context::empty()).unwrap();
            prop_assert_eq!(&token.value.as_string().unwrap().code_units, &vec![cp as u16]);
        }
    }

    #[test]
    fn radix_literals_round_trip(
        value in prop_oneof![
            0u128..(1 << 53),
            any::<u64>().prop_map(u128::from),
            any::<u128>(),
        ],
    ) {
        for (src, radix) in [
            (format!("0x{value:x}"), 16),
            (format!("0o{value:o}"), 8),
            (format!("0b{value:b}"), 2),
            (format!("{value}"), 10),
        ] {
            let source = utf16(&src);
            let token = Scanner::new(&source).next_token(Context::empty()).unwrap();
            prop_assert_eq!(token.value.as_number(), Some(value as f64), "radix {}", radix);
        }
    }

    #[test]
    fn one_line_per_terminator_sequence(
        parts in proptest::collection::vec(
            prop_oneof![Just("\n"), Just("\r"), Just("\r\n"), Just("\u{2028}"), Just("\u{2029}")],
            0..20,
        ),
        indent in 0usize..8,
    ) {
        let breaks = parts.concat();
        // A lone CR followed by an LF part is a single CRLF terminator.
        let expected = breaks.replace("\r\n", "\n").chars().count() as u32;
        let src = format!("{breaks}{}x", " ".repeat(indent));
        let source = utf16(&src);
        let token = Scanner::new(&source).next_token(Context::empty()).unwrap();
        prop_assert_eq!(token.line, expected + 1);
        prop_assert_eq!(token.column, indent as u32);
        prop_assert_eq!(token.newline_before(), !parts.is_empty());
    }

    #[test]
    fn end_of_source_is_idempotent(s in "(([a-z]+|[1-9][0-9]*|[+*;])[ \n]){0,10}") {
        let source = utf16(&s);
        let mut scanner = Scanner::new(&source);
        let tokens = scanner.tokenize_all(Context::empty()).unwrap();
        let eof = tokens.last().unwrap().clone();
        let location = scanner.location();
        for _ in 0..3 {
            let again = scanner.next_token(Context::empty()).unwrap();
            prop_assert_eq!(again.kind, TokenKind::Eof);
            prop_assert_eq!(again.value, TokenValue::None);
            prop_assert_eq!((again.start, again.end), (eof.start, eof.end));
            prop_assert_eq!(scanner.location(), location);
        }
    }
}
