use super::chars::{BACKSLASH, CR, END_OF_SOURCE, LF, LINE_SEPARATOR, PARAGRAPH_SEPARATOR};
use super::escape::EscapeMode;
use super::unicode::push_code_point;
use super::{Context, LexErrorKind, LexResult, Scanned, Scanner, TokenKind, TokenValue};
use crate::types::JsString;

impl Scanner<'_> {
    /// Scans a single- or double-quoted string literal into its decoded
    /// code units. Runs without escapes are copied in one slice.
    pub(super) fn scan_string(&mut self, context: Context) -> LexResult<Scanned> {
        let quote = self.current;
        self.advance();
        let mut value = Vec::new();
        let mut run_start = self.index;
        loop {
            let ch = self.current;
            if ch == quote {
                value.extend_from_slice(&self.source[run_start..self.index]);
                self.advance();
                break;
            }
            match ch {
                END_OF_SOURCE | LF | CR => {
                    return Err(self.error(LexErrorKind::UnterminatedString));
                }
                BACKSLASH => {
                    value.extend_from_slice(&self.source[run_start..self.index]);
                    let escape_start = self.location();
                    self.advance();
                    if self.current == END_OF_SOURCE {
                        return Err(self.error(LexErrorKind::UnterminatedString));
                    }
                    match self.scan_escape(context, EscapeMode::String) {
                        Ok(Some(cp)) => push_code_point(&mut value, cp),
                        Ok(None) => {}
                        Err(kind) => {
                            return Err(
                                self.error_at(LexErrorKind::InvalidEscape(kind), escape_start)
                            );
                        }
                    }
                    run_start = self.index;
                }
                // Allowed inside strings since ES2019; still a new line for positions.
                LINE_SEPARATOR | PARAGRAPH_SEPARATOR => self.consume_line_terminator(),
                _ => self.advance(),
            }
        }
        Ok((
            TokenKind::StringLiteral,
            TokenValue::String(JsString::from_code_units(value)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::lex_with;
    use super::*;

    #[test]
    fn quoted_strings() {
        let tokens = lex_with(r#"'abc' "it's" '"'"#, Context::empty()).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].value.as_string().unwrap(), "abc");
        assert_eq!((tokens[0].start, tokens[0].end), (0, 5));
        assert_eq!(tokens[1].value.as_string().unwrap(), "it's");
        assert_eq!(tokens[2].value.as_string().unwrap(), "\"");
    }

    #[test]
    fn empty_and_non_ascii() {
        let tokens = lex_with("'' 'é😀'", Context::empty()).unwrap();
        assert!(tokens[0].value.as_string().unwrap().is_empty());
        assert_eq!(tokens[1].value.as_string().unwrap(), "é😀");
        assert_eq!(tokens[1].end, 8);
    }

    #[test]
    fn unterminated_strings() {
        for src in ["'abc", "'ab\ncd'", "'ab\rcd'", "\"x\\"] {
            let err = lex_with(src, Context::empty()).unwrap_err();
            assert_eq!(err.kind, LexErrorKind::UnterminatedString, "{src:?}");
        }
        let err = lex_with("a = 'xy", Context::empty()).unwrap_err();
        assert_eq!((err.location.offset, err.location.column), (7, 7));
    }

    #[test]
    fn line_separator_inside_string() {
        let tokens = lex_with("'a\u{2028}b' c", Context::empty()).unwrap();
        assert_eq!(tokens[0].value.as_string().unwrap(), "a\u{2028}b");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
        assert!(!tokens[1].newline_before());
    }
}
