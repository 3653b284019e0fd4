use super::chars::{END_OF_SOURCE, is_line_terminator};
use super::unicode::{is_identifier_part, is_identifier_start};
use super::{
    Context, LexErrorKind, LexResult, Scanned, Scanner, Token, TokenFlags, TokenKind, TokenValue,
};
use crate::types::JsString;

impl Scanner<'_> {
    /// Scans JSX children: text up to the next `<` or `{`, or one of the
    /// tokens that leave text (`<`, `</`, `{`). Whitespace is part of the
    /// text, not trivia.
    pub fn scan_jsx_child(&mut self, context: Context) -> LexResult<Token> {
        self.flags = TokenFlags::empty();
        self.mark_token_start();
        let (kind, value) = if self.current == END_OF_SOURCE {
            (TokenKind::Eof, TokenValue::None)
        } else if self.eat(b'<') {
            if self.eat(b'/') {
                (TokenKind::JsxClosingTagStart, TokenValue::None)
            } else {
                (TokenKind::LessThan, TokenValue::None)
            }
        } else if self.eat(b'{') {
            (TokenKind::LeftBrace, TokenValue::None)
        } else {
            self.scan_jsx_text()
        };
        Ok(self.finish(kind, value, context))
    }

    fn scan_jsx_text(&mut self) -> Scanned {
        let start = self.index;
        while self.current != END_OF_SOURCE && !self.is(b'<') && !self.is(b'{') {
            if is_line_terminator(self.current) {
                self.consume_line_terminator();
            } else {
                self.advance();
            }
        }
        let text = JsString::from_code_units(self.source[start..self.index].to_vec());
        (TokenKind::JsxText, TokenValue::String(text))
    }

    /// Re-scans the last identifier or keyword as a JSX name, which may
    /// contain `-` (`data-id`, `aria-label`). The result is always an
    /// [`TokenKind::Identifier`].
    pub fn rescan_jsx_identifier(&mut self, context: Context) -> LexResult<Token> {
        self.rewind_to_token_start();
        let (cp, _) = self.current_code_point();
        if !is_identifier_start(cp) {
            return Err(self.illegal_character(cp));
        }
        loop {
            let (cp, width) = self.current_code_point();
            if cp == u32::from(b'-') || is_identifier_part(cp) {
                self.advance_by(width);
            } else {
                break;
            }
        }
        let name = String::from_utf16_lossy(&self.source[self.token_start..self.index]);
        Ok(self.finish(TokenKind::Identifier, TokenValue::Name(name), context))
    }

    /// Next token after `=` in a JSX attribute. Quoted values run to the
    /// matching quote, may span lines and take no escapes.
    pub fn scan_jsx_attribute_value(&mut self, context: Context) -> LexResult<Token> {
        self.flags = TokenFlags::empty();
        self.skip_trivia(context)?;
        let (kind, value) = if self.is(b'"') || self.is(b'\'') {
            self.mark_token_start();
            self.scan_jsx_string()?
        } else {
            self.scan_token(context)?
        };
        Ok(self.finish(kind, value, context))
    }

    fn scan_jsx_string(&mut self) -> LexResult<Scanned> {
        let quote = self.current;
        self.advance();
        let start = self.index;
        while self.current != quote {
            if self.current == END_OF_SOURCE {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }
            if is_line_terminator(self.current) {
                self.consume_line_terminator();
            } else {
                self.advance();
            }
        }
        let text = JsString::from_code_units(self.source[start..self.index].to_vec());
        self.advance();
        Ok((TokenKind::StringLiteral, TokenValue::String(text)))
    }
}
