use super::chars::{as_ascii, is_decimal_digit};
use super::{Context, LexErrorKind, LexResult, Scanned, Scanner, TokenKind, TokenValue};

impl Scanner<'_> {
    /// Longest-match punctuator scan for an ASCII code unit that starts no
    /// other token.
    pub(super) fn scan_punctuator(&mut self, context: Context) -> LexResult<Scanned> {
        let ch = as_ascii(self.current);
        self.advance();
        let kind = match ch {
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'~' => TokenKind::Tilde,
            b':' => TokenKind::Colon,

            b'.' => {
                if self.is(b'.') && self.peek_is(1, b'.') {
                    self.advance_by(2);
                    TokenKind::Ellipsis
                } else {
                    TokenKind::Period
                }
            }

            b'?' => {
                if self.eat(b'?') {
                    if self.eat(b'=') {
                        TokenKind::NullishAssign
                    } else {
                        TokenKind::NullishCoalescing
                    }
                } else if self.is(b'.') && !is_decimal_digit(self.peek()) {
                    // `a?.5:b` is a conditional.
                    self.advance();
                    TokenKind::OptionalChain
                } else {
                    TokenKind::Question
                }
            }

            b'<' => {
                if self.eat(b'<') {
                    if self.eat(b'=') {
                        TokenKind::LeftShiftAssign
                    } else {
                        TokenKind::LeftShift
                    }
                } else if self.eat(b'=') {
                    TokenKind::LessThanEqual
                } else if context.contains(Context::JSX)
                    && self.is(b'/')
                    && !self.peek_is(1, b'/')
                    && !self.peek_is(1, b'*')
                {
                    self.advance();
                    TokenKind::JsxClosingTagStart
                } else {
                    TokenKind::LessThan
                }
            }

            b'>' => {
                if self.eat(b'>') {
                    if self.eat(b'>') {
                        if self.eat(b'=') {
                            TokenKind::UnsignedRightShiftAssign
                        } else {
                            TokenKind::UnsignedRightShift
                        }
                    } else if self.eat(b'=') {
                        TokenKind::RightShiftAssign
                    } else {
                        TokenKind::RightShift
                    }
                } else if self.eat(b'=') {
                    TokenKind::GreaterThanEqual
                } else {
                    TokenKind::GreaterThan
                }
            }

            b'=' => {
                if self.eat(b'=') {
                    if self.eat(b'=') {
                        TokenKind::StrictEqual
                    } else {
                        TokenKind::Equal
                    }
                } else if self.eat(b'>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Assign
                }
            }

            b'!' => {
                if self.eat(b'=') {
                    if self.eat(b'=') {
                        TokenKind::StrictNotEqual
                    } else {
                        TokenKind::NotEqual
                    }
                } else {
                    TokenKind::Bang
                }
            }

            b'+' => {
                if self.eat(b'+') {
                    TokenKind::Increment
                } else if self.eat(b'=') {
                    TokenKind::PlusAssign
                } else {
                    TokenKind::Plus
                }
            }

            b'-' => {
                if self.eat(b'-') {
                    TokenKind::Decrement
                } else if self.eat(b'=') {
                    TokenKind::MinusAssign
                } else {
                    TokenKind::Minus
                }
            }

            b'*' => {
                if self.eat(b'*') {
                    if self.eat(b'=') {
                        TokenKind::ExponentAssign
                    } else {
                        TokenKind::Exponent
                    }
                } else if self.eat(b'=') {
                    TokenKind::StarAssign
                } else {
                    TokenKind::Star
                }
            }

            b'%' => {
                if self.eat(b'=') {
                    TokenKind::PercentAssign
                } else {
                    TokenKind::Percent
                }
            }

            b'&' => {
                if self.eat(b'&') {
                    if self.eat(b'=') {
                        TokenKind::LogicalAndAssign
                    } else {
                        TokenKind::LogicalAnd
                    }
                } else if self.eat(b'=') {
                    TokenKind::AmpersandAssign
                } else {
                    TokenKind::Ampersand
                }
            }

            b'|' => {
                if self.eat(b'|') {
                    if self.eat(b'=') {
                        TokenKind::LogicalOrAssign
                    } else {
                        TokenKind::LogicalOr
                    }
                } else if self.eat(b'=') {
                    TokenKind::PipeAssign
                } else {
                    TokenKind::Pipe
                }
            }

            b'^' => {
                if self.eat(b'=') {
                    TokenKind::CaretAssign
                } else {
                    TokenKind::Caret
                }
            }

            _ => {
                return Err(self.error_at(
                    LexErrorKind::IllegalCharacter(char::from(ch)),
                    self.token_location(),
                ));
            }
        };
        Ok((kind, TokenValue::None))
    }

    /// `/` is division unless the parser expects an expression here.
    pub(super) fn scan_slash(&mut self, context: Context) -> LexResult<Scanned> {
        if context.contains(Context::ALLOW_REGEXP) {
            return self.scan_regexp_body();
        }
        self.advance();
        let kind = if self.eat(b'=') {
            TokenKind::SlashAssign
        } else if context.contains(Context::JSX) && self.eat(b'>') {
            TokenKind::JsxSelfClosing
        } else {
            TokenKind::Slash
        };
        Ok((kind, TokenValue::None))
    }
}
