use super::chars::{BACKSLASH, CR, END_OF_SOURCE, LF, LINE_SEPARATOR, PARAGRAPH_SEPARATOR};
use super::escape::EscapeMode;
use super::unicode::push_code_point;
use super::{
    Context, LexErrorKind, LexResult, Scanned, Scanner, Token, TokenFlags, TokenKind, TokenValue,
};
use crate::types::JsString;

impl Scanner<'_> {
    /// Scans template characters up to the closing backtick or the next
    /// `${`. The cursor sits just past the opening backtick (`head`) or the
    /// `}` that closed a substitution.
    pub(super) fn scan_template_span(
        &mut self,
        context: Context,
        head: bool,
    ) -> LexResult<Scanned> {
        let mut cooked = Some(Vec::new());
        let mut raw = Vec::new();
        let mut run_start = self.index;
        let tail = loop {
            let ch = self.current;
            match ch {
                END_OF_SOURCE => return Err(self.error(LexErrorKind::UnterminatedTemplate)),
                _ if self.is(b'`') => {
                    flush(&mut cooked, &mut raw, &self.source[run_start..self.index]);
                    self.advance();
                    break true;
                }
                _ if self.is(b'$') && self.peek_is(1, b'{') => {
                    flush(&mut cooked, &mut raw, &self.source[run_start..self.index]);
                    self.advance_by(2);
                    break false;
                }
                BACKSLASH => {
                    flush(&mut cooked, &mut raw, &self.source[run_start..self.index]);
                    let escape_start = self.location();
                    self.advance();
                    if self.current == END_OF_SOURCE {
                        return Err(self.error(LexErrorKind::UnterminatedTemplate));
                    }
                    match self.scan_escape(context, EscapeMode::Template) {
                        Ok(Some(cp)) => {
                            if let Some(cooked) = cooked.as_mut() {
                                push_code_point(cooked, cp);
                            }
                        }
                        Ok(None) => {}
                        // Tagged templates keep going with an undefined cooked value.
                        Err(_) if context.contains(Context::TAGGED_TEMPLATE) => cooked = None,
                        Err(kind) => {
                            return Err(
                                self.error_at(LexErrorKind::InvalidEscape(kind), escape_start)
                            );
                        }
                    }
                    push_normalized(&mut raw, &self.source[escape_start.offset..self.index]);
                    run_start = self.index;
                }
                CR => {
                    flush(&mut cooked, &mut raw, &self.source[run_start..self.index]);
                    if let Some(cooked) = cooked.as_mut() {
                        cooked.push(LF as u16);
                    }
                    raw.push(LF as u16);
                    self.consume_line_terminator();
                    run_start = self.index;
                }
                LF | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => self.consume_line_terminator(),
                _ => self.advance(),
            }
        };

        let kind = match (head, tail) {
            (true, true) => TokenKind::NoSubstitutionTemplate,
            (true, false) => TokenKind::TemplateHead,
            (false, false) => TokenKind::TemplateMiddle,
            (false, true) => TokenKind::TemplateTail,
        };
        let value = TokenValue::Template {
            cooked: cooked.map(JsString::from_code_units),
            raw: JsString::from_code_units(raw),
        };
        Ok((kind, value))
    }

    /// Re-scans the `}` just returned as [`TokenKind::RightBrace`] as the
    /// start of a template middle or tail. The parser calls this once the
    /// expression inside `${ }` is complete.
    pub fn scan_template_continuation(&mut self, context: Context) -> LexResult<Token> {
        self.rewind_to_token_start();
        // The span starts where the `}` did, so only its newline flag applies.
        self.flags &= TokenFlags::NEW_LINE_BEFORE;
        if !self.is(b'}') {
            return Err(self.error(LexErrorKind::UnterminatedTemplate));
        }
        self.advance();
        let (kind, value) = self.scan_template_span(context, false)?;
        Ok(self.finish(kind, value, context))
    }
}

fn flush(cooked: &mut Option<Vec<u16>>, raw: &mut Vec<u16>, units: &[u16]) {
    if let Some(cooked) = cooked.as_mut() {
        cooked.extend_from_slice(units);
    }
    raw.extend_from_slice(units);
}

/// Appends `units` with CRLF and lone CR turned into LF.
fn push_normalized(raw: &mut Vec<u16>, units: &[u16]) {
    let mut iter = units.iter().copied().peekable();
    while let Some(unit) = iter.next() {
        if u32::from(unit) == CR {
            if iter.peek().is_some_and(|&next| u32::from(next) == LF) {
                iter.next();
            }
            raw.push(LF as u16);
        } else {
            raw.push(unit);
        }
    }
}
