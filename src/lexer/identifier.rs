use super::chars::{BACKSLASH, END_OF_SOURCE, is_ascii_identifier_part};
use super::unicode::{is_identifier_part, is_identifier_start};
use super::{Keyword, LexErrorKind, LexResult, Scanned, Scanner, TokenFlags, TokenKind, TokenValue};

impl Scanner<'_> {
    /// Scans an IdentifierName and classifies it once the whole name is known.
    pub(super) fn scan_identifier(&mut self) -> LexResult<Scanned> {
        let start = self.index;
        while is_ascii_identifier_part(self.current) {
            self.advance();
        }
        let mut name: String = self.source[start..self.index]
            .iter()
            .map(|&u| char::from(u as u8))
            .collect();
        let needs_slow_path =
            self.current == BACKSLASH || (self.current >= 0x80 && self.current != END_OF_SOURCE);
        let escaped = if needs_slow_path {
            self.scan_identifier_rest(&mut name)?
        } else {
            false
        };
        Ok(identifier_or_keyword(name, escaped))
    }

    /// Continues an identifier through non-ASCII code points and `\u`
    /// escapes. Returns whether any escape was seen.
    fn scan_identifier_rest(&mut self, name: &mut String) -> LexResult<bool> {
        let mut escaped = false;
        loop {
            let ch = self.current;
            if is_ascii_identifier_part(ch) {
                name.push(char::from(ch as u8));
                self.advance();
                continue;
            }

            if ch == BACKSLASH {
                let escape_start = self.location();
                if !self.peek_is(1, b'u') {
                    if name.is_empty() {
                        return Err(self.illegal_character(BACKSLASH));
                    }
                    return Err(self.error_at(LexErrorKind::InvalidIdentifierEscape, escape_start));
                }
                self.advance_by(2);
                let cp = self.scan_unicode_escape_value().map_err(|_| {
                    self.error_at(LexErrorKind::InvalidIdentifierEscape, escape_start)
                })?;
                let valid = if name.is_empty() {
                    is_identifier_start(cp)
                } else {
                    is_identifier_part(cp)
                };
                match char::from_u32(cp) {
                    Some(c) if valid => name.push(c),
                    _ => {
                        return Err(
                            self.error_at(LexErrorKind::InvalidIdentifierEscape, escape_start)
                        );
                    }
                }
                escaped = true;
                self.flags |= TokenFlags::UNICODE_ESCAPE;
                continue;
            }

            if ch >= 0x80 && ch != END_OF_SOURCE {
                let (cp, width) = self.current_code_point();
                let valid = if name.is_empty() {
                    is_identifier_start(cp)
                } else {
                    is_identifier_part(cp)
                };
                match char::from_u32(cp) {
                    Some(c) if valid => {
                        name.push(c);
                        self.advance_by(width);
                        continue;
                    }
                    _ => break,
                }
            }
            break;
        }
        Ok(escaped)
    }

    /// `#name`, with the name as the token value.
    pub(super) fn scan_private_name(&mut self) -> LexResult<Scanned> {
        let hash = self.location();
        self.advance();
        let (cp, _) = self.current_code_point();
        if !is_identifier_start(cp) && cp != BACKSLASH {
            return Err(self.error_at(LexErrorKind::IllegalCharacter('#'), hash));
        }
        let (_, value) = self.scan_identifier()?;
        Ok((TokenKind::PrivateName, value))
    }
}

fn identifier_or_keyword(name: String, escaped: bool) -> Scanned {
    let kind = match Keyword::from_str(&name) {
        Some(kw) if escaped => TokenKind::EscapedKeyword(kw),
        Some(kw) => TokenKind::Keyword(kw),
        None => TokenKind::Identifier,
    };
    (kind, TokenValue::Name(name))
}
