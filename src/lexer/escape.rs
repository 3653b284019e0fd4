use super::chars::{as_ascii, hex_value, is_decimal_digit, is_line_terminator, is_octal_digit};
use super::unicode::MAX_CODE_POINT;
use super::{Context, EscapeErrorKind, Scanner, TokenFlags};

/// Where an escape sequence appears. Templates forbid every octal form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EscapeMode {
    String,
    Template,
}

impl Scanner<'_> {
    /// Decodes the escape sequence after a consumed `\`. The cursor must not
    /// be at the end of input. Returns `None` for a line continuation.
    ///
    /// Nothing past the offending code unit is consumed on failure, so a
    /// template scan can resume after a bad escape.
    pub(super) fn scan_escape(
        &mut self,
        context: Context,
        mode: EscapeMode,
    ) -> Result<Option<u32>, EscapeErrorKind> {
        let ch = self.current;
        if is_line_terminator(ch) {
            self.consume_line_terminator();
            return Ok(None);
        }
        let cp = match as_ascii(ch) {
            b'b' => 0x08,
            b't' => 0x09,
            b'n' => 0x0A,
            b'v' => 0x0B,
            b'f' => 0x0C,
            b'r' => 0x0D,
            b'x' => {
                self.advance();
                let high = self.expect_hex_digit()?;
                let low = self.expect_hex_digit()?;
                return Ok(Some((high << 4) | low));
            }
            b'u' => {
                self.advance();
                return self.scan_unicode_escape_value().map(Some);
            }
            b'0' if !is_decimal_digit(self.peek()) => 0,
            b'0'..=b'7' => return self.scan_legacy_octal_escape(context, mode).map(Some),
            b'8' | b'9' => return Err(EscapeErrorKind::EightOrNine),
            _ => {
                let (cp, width) = self.current_code_point();
                self.advance_by(width);
                return Ok(Some(cp));
            }
        };
        self.advance();
        Ok(Some(cp))
    }

    /// The code point of `XXXX` or `{X...}` after a consumed `\u`.
    pub(super) fn scan_unicode_escape_value(&mut self) -> Result<u32, EscapeErrorKind> {
        if self.eat(b'{') {
            let mut value = 0u32;
            let mut digits = 0;
            while let Some(digit) = hex_value(self.current) {
                value = value * 16 + digit;
                if value > MAX_CODE_POINT {
                    return Err(EscapeErrorKind::OutOfRange);
                }
                digits += 1;
                self.advance();
            }
            if digits == 0 || !self.eat(b'}') {
                return Err(EscapeErrorKind::InvalidUnicode);
            }
            return Ok(value);
        }

        let mut value = 0;
        for _ in 0..4 {
            let digit = hex_value(self.current).ok_or(EscapeErrorKind::InvalidUnicode)?;
            value = value * 16 + digit;
            self.advance();
        }
        Ok(value)
    }

    fn expect_hex_digit(&mut self) -> Result<u32, EscapeErrorKind> {
        let digit = hex_value(self.current).ok_or(EscapeErrorKind::InvalidHex)?;
        self.advance();
        Ok(digit)
    }

    // Up to three digits when the first is 0-3 (max \377), otherwise two.
    fn scan_legacy_octal_escape(
        &mut self,
        context: Context,
        mode: EscapeMode,
    ) -> Result<u32, EscapeErrorKind> {
        if mode == EscapeMode::Template {
            return Err(EscapeErrorKind::TemplateOctal);
        }
        if context.is_strict() {
            return Err(EscapeErrorKind::StrictOctal);
        }
        let first = self.current - u32::from(b'0');
        let max_digits = if first <= 3 { 3 } else { 2 };
        let mut value = first;
        let mut digits = 1;
        self.advance();
        while digits < max_digits && is_octal_digit(self.current) {
            value = value * 8 + (self.current - u32::from(b'0'));
            digits += 1;
            self.advance();
        }
        self.flags |= TokenFlags::OCTAL_ESCAPE;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::lex_with;
    use super::*;
    use crate::lexer::{LexErrorKind, Token};
    use crate::types::JsString;

    fn string(src: &str, context: Context) -> Token {
        lex_with(src, context).unwrap().remove(0)
    }

    fn decoded(src: &str) -> Vec<u16> {
        string(src, Context::empty())
            .value
            .as_string()
            .map(|s| s.code_units.clone())
            .unwrap_or_default()
    }

    fn escape_error(src: &str, context: Context) -> EscapeErrorKind {
        let err = lex_with(src, context).unwrap_err();
        err.escape_kind()
            .unwrap_or_else(|| panic!("{src}: not an escape error: {err}"))
    }

    #[test]
    fn single_character_escapes() {
        assert_eq!(
            decoded(r#""\b\t\n\v\f\r\"\'\\\q""#),
            JsString::from("\u{8}\t\n\u{B}\u{C}\r\"'\\q").code_units
        );
    }

    #[test]
    fn hex_and_unicode_escapes() {
        assert_eq!(decoded(r"'\x41B\u{43}\u{1F600}'"), JsString::from("ABC😀").code_units);
        assert_eq!(decoded(r"'\u{000000041}'"), vec![0x41]);
        assert_eq!(decoded(r"'\uD800'"), vec![0xD800]);
        assert_eq!(decoded(r"'\u{10FFFF}'"), vec![0xDBFF, 0xDFFF]);
        assert_eq!(decoded(r"'\u{0010FFFF}'"), vec![0xDBFF, 0xDFFF]);
    }

    #[test]
    fn line_continuation_is_dropped() {
        let tokens = lex_with("'a\\\r\nb' c", Context::empty()).unwrap();
        assert_eq!(tokens[0].value.as_string().unwrap(), "ab");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    }

    #[test]
    fn nul_escape_is_not_octal() {
        let token = string(r"'\0'", Context::STRICT);
        assert_eq!(token.value.as_string().unwrap().code_units, vec![0]);
        assert!(!token.flags.contains_legacy_octal());
    }

    #[test]
    fn legacy_octal_escapes() {
        assert_eq!(decoded(r#""\73X""#), JsString::from(";X").code_units);
        assert_eq!(decoded(r"'\377'"), vec![0xFF]);
        assert_eq!(decoded(r"'\400'"), vec![0o40, u16::from(b'0')]);
        assert_eq!(decoded(r"'\08'"), vec![0, u16::from(b'8')]);
        let token = string(r"'\1'", Context::empty());
        assert_eq!(token.value.as_string().unwrap().code_units, vec![1]);
        assert!(token.flags.contains(TokenFlags::OCTAL_ESCAPE));
    }

    #[test]
    fn strict_mode_rejects_octal_escapes() {
        assert_eq!(escape_error(r"'\1'", Context::STRICT), EscapeErrorKind::StrictOctal);
        assert_eq!(escape_error(r"'\00'", Context::MODULE), EscapeErrorKind::StrictOctal);
        let err = lex_with(r"x = 'ab\1'", Context::STRICT).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidEscape(EscapeErrorKind::StrictOctal));
        assert_eq!(err.location.offset, 7);
    }

    #[test]
    fn eight_and_nine_are_rejected() {
        for context in [Context::empty(), Context::STRICT, Context::MODULE] {
            assert_eq!(escape_error(r"'\8'", context), EscapeErrorKind::EightOrNine);
            assert_eq!(escape_error(r#""a\9""#, context), EscapeErrorKind::EightOrNine);
        }
        let err = lex_with(r"'ab\8'", Context::empty()).unwrap_err();
        assert_eq!(err.location.offset, 3);
        assert_eq!(err.to_string(), "1:3: \\8 and \\9 are not allowed in escape sequences");
    }

    #[test]
    fn malformed_escapes() {
        let cases = [
            (r"'\x4'", EscapeErrorKind::InvalidHex),
            (r"'\xg0'", EscapeErrorKind::InvalidHex),
            (r"'\u12'", EscapeErrorKind::InvalidUnicode),
            (r"'\u{}'", EscapeErrorKind::InvalidUnicode),
            (r"'\u{41'", EscapeErrorKind::InvalidUnicode),
            (r"'\u{110000}'", EscapeErrorKind::OutOfRange),
            (r"'\u{00110000}'", EscapeErrorKind::OutOfRange),
        ];
        for (src, kind) in cases {
            assert_eq!(escape_error(src, Context::empty()), kind, "{src}");
        }
    }

    #[test]
    fn escape_errors_point_at_the_backslash() {
        let cases = [
            (r"a = 'xy\x4z'", EscapeErrorKind::InvalidHex, 7),
            (r"'\u00' + 1", EscapeErrorKind::InvalidUnicode, 1),
            (r"b; 'ok\u{FFFFFFF}'", EscapeErrorKind::OutOfRange, 6),
        ];
        for (src, kind, offset) in cases {
            let err = lex_with(src, Context::empty()).unwrap_err();
            assert_eq!(err.kind, LexErrorKind::InvalidEscape(kind), "{src}");
            let location = err.location;
            assert_eq!((location.offset, location.column), (offset, offset as u32), "{src}");
        }
        let err = lex_with("'a'\n  '\\xQ'", Context::empty()).unwrap_err();
        assert_eq!(err.escape_kind(), Some(EscapeErrorKind::InvalidHex));
        assert_eq!((err.location.line, err.location.column, err.location.offset), (2, 3, 7));
    }
}
