use super::chars::{BACKSLASH, END_OF_SOURCE, as_ascii, is_line_terminator};
use super::unicode::is_identifier_part;
use super::{Context, LexErrorKind, LexResult, Scanned, Scanner, Token, TokenKind, TokenValue};

impl Scanner<'_> {
    /// Re-scans the last token (`/` or `/=`) as a regular expression
    /// literal. The parser calls this when it finds a slash where an
    /// expression may start.
    pub fn scan_regexp(&mut self, context: Context) -> LexResult<Token> {
        self.rewind_to_token_start();
        let (kind, value) = self.scan_regexp_body()?;
        Ok(self.finish(kind, value, context))
    }

    /// Body and flags; the cursor is on the opening `/`. The pattern itself
    /// is only delimited here, never validated.
    pub(super) fn scan_regexp_body(&mut self) -> LexResult<Scanned> {
        self.advance();
        let pattern_start = self.index;
        let mut in_class = false;
        loop {
            let ch = self.current;
            if ch == END_OF_SOURCE || is_line_terminator(ch) {
                return Err(self.error(LexErrorKind::UnterminatedRegExp));
            }
            if ch == BACKSLASH {
                self.advance();
                if self.current == END_OF_SOURCE || is_line_terminator(self.current) {
                    return Err(self.error(LexErrorKind::UnterminatedRegExp));
                }
            } else {
                match as_ascii(ch) {
                    b'/' if !in_class => break,
                    b'[' => in_class = true,
                    b']' => in_class = false,
                    _ => {}
                }
            }
            self.advance();
        }
        let pattern = String::from_utf16_lossy(&self.source[pattern_start..self.index]);
        self.advance();
        let flags = self.scan_regexp_flags()?;
        Ok((TokenKind::RegExpLiteral, TokenValue::RegExp { pattern, flags }))
    }

    fn scan_regexp_flags(&mut self) -> LexResult<String> {
        let mut flags = String::new();
        loop {
            let (cp, width) = self.current_code_point();
            if cp == BACKSLASH {
                return Err(self.error(LexErrorKind::InvalidRegExpFlag('\\')));
            }
            if !is_identifier_part(cp) {
                break;
            }
            let flag = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
            if !matches!(flag, 'd' | 'g' | 'i' | 'm' | 's' | 'u' | 'v' | 'y') {
                return Err(self.error(LexErrorKind::InvalidRegExpFlag(flag)));
            }
            if flags.contains(flag) {
                return Err(self.error(LexErrorKind::DuplicateRegExpFlag(flag)));
            }
            flags.push(flag);
            self.advance_by(width);
        }
        if flags.contains('u') && flags.contains('v') {
            return Err(self.error_at(LexErrorKind::ConflictingRegExpFlags, self.token_location()));
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{lex_with, utf16};
    use super::*;

    fn regexp(src: &str) -> (String, String) {
        let token = lex_with(src, Context::ALLOW_REGEXP).unwrap().remove(0);
        assert_eq!(token.kind, TokenKind::RegExpLiteral);
        match token.value {
            TokenValue::RegExp { pattern, flags } => (pattern, flags),
            other => panic!("not a regexp: {other:?}"),
        }
    }

    #[test]
    fn pattern_and_flags() {
        assert_eq!(regexp("/ab+c/gi"), ("ab+c".into(), "gi".into()));
        assert_eq!(regexp("/x/"), ("x".into(), String::new()));
        assert_eq!(regexp("/=/"), ("=".into(), String::new()));
        assert_eq!(regexp("/a/dgimsuy"), ("a".into(), "dgimsuy".into()));
    }

    #[test]
    fn slash_inside_class_or_escape() {
        assert_eq!(regexp(r"/[/]/"), ("[/]".into(), String::new()));
        assert_eq!(regexp(r"/a\/b/"), (r"a\/b".into(), String::new()));
        assert_eq!(regexp(r"/[\]/]/"), (r"[\]/]".into(), String::new()));
    }

    #[test]
    fn rescan_after_slash_token() {
        let source = utf16("x = /=a/g;");
        let mut scanner = Scanner::new(&source);
        let context = Context::empty();
        scanner.next_token(context).unwrap();
        scanner.next_token(context).unwrap();
        let slash = scanner.next_token(context).unwrap();
        assert_eq!(slash.kind, TokenKind::SlashAssign);

        let token = scanner.scan_regexp(context).unwrap();
        assert_eq!(token.kind, TokenKind::RegExpLiteral);
        assert_eq!((token.start, token.end), (4, 9));
        assert_eq!(
            token.value,
            TokenValue::RegExp {
                pattern: "=a".into(),
                flags: "g".into(),
            }
        );
        assert_eq!(scanner.next_token(context).unwrap().kind, TokenKind::Semicolon);
    }

    #[test]
    fn unterminated_regexps() {
        for src in ["/abc", "/a\nb/", "/[/", "/a\\"] {
            let err = lex_with(src, Context::ALLOW_REGEXP).unwrap_err();
            assert_eq!(err.kind, LexErrorKind::UnterminatedRegExp, "{src:?}");
        }
    }

    #[test]
    fn bad_flags() {
        let cases = [
            ("/a/x", LexErrorKind::InvalidRegExpFlag('x')),
            ("/a/gg", LexErrorKind::DuplicateRegExpFlag('g')),
            ("/a/uv", LexErrorKind::ConflictingRegExpFlags),
            (r"/a/\u0067", LexErrorKind::InvalidRegExpFlag('\\')),
        ];
        for (src, kind) in cases {
            let err = lex_with(src, Context::ALLOW_REGEXP).unwrap_err();
            assert_eq!(err.kind, kind, "{src}");
        }
    }
}
