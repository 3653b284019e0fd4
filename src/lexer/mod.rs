//! ECMAScript scanner over a UTF-16 source buffer.
//!
//! The parser drives a [`Scanner`] one token at a time with
//! [`Scanner::next_token`], passing the current [`Context`]. Modes that only
//! the parser can recognise (regular expressions, template continuations,
//! JSX children) are entered through dedicated rescan methods.

mod chars;
mod context;
mod error;
mod escape;
mod identifier;
mod jsx;
mod numeric;
mod punctuator;
mod regexp;
mod string;
mod template;
mod token;
mod trivia;
mod unicode;

pub use context::{Context, TokenFlags};
pub use error::{EscapeErrorKind, LexError, LexErrorKind, LexResult, SourceLocation};
pub use token::{Keyword, TokenKind};
pub use trivia::{Comment, CommentKind};
pub use unicode::{is_identifier_part, is_identifier_start, push_code_point};

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::types::JsString;
use chars::{CR, CharFlags, END_OF_SOURCE, LF, char_flags, is_decimal_digit};
use unicode::{combine_surrogates, is_lead_surrogate, is_trail_surrogate};

/// Decoded semantic value of a token, keyed off its kind.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    None,
    /// Identifiers, keywords, private names (without `#`), JSX names.
    Name(String),
    String(JsString),
    Number(f64),
    BigInt {
        value: BigInt,
        /// Source text of the literal, `n` suffix included.
        literal: String,
    },
    Template {
        /// Absent when a tagged template holds an invalid escape.
        cooked: Option<JsString>,
        raw: JsString,
    },
    RegExp {
        pattern: String,
        flags: String,
    },
}

impl TokenValue {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            TokenValue::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&JsString> {
        match self {
            TokenValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Verbatim source text, only under `Context::RAW`.
    pub raw: Option<String>,
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
    /// Position after the token, only under `Context::LOCATIONS`.
    pub end_location: Option<SourceLocation>,
    pub flags: TokenFlags,
}

impl Token {
    pub fn newline_before(&self) -> bool {
        self.flags.contains(TokenFlags::NEW_LINE_BEFORE)
    }

    pub fn start_location(&self) -> SourceLocation {
        SourceLocation {
            line: self.line,
            column: self.column,
            offset: self.start,
        }
    }
}

/// Saved scanner position for parser lookahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    index: usize,
    line: u32,
    column: u32,
    token_start: usize,
    token_line: u32,
    token_column: u32,
    flags: TokenFlags,
    line_start: bool,
    comments: usize,
}

type Scanned = (TokenKind, TokenValue);

pub struct Scanner<'a> {
    source: &'a [u16],
    index: usize,
    line: u32,
    column: u32,
    /// Code unit at `index`, or `END_OF_SOURCE`.
    current: u32,
    token_start: usize,
    token_line: u32,
    token_column: u32,
    flags: TokenFlags,
    /// Only trivia since the last line terminator (or the start of input).
    line_start: bool,
    comments: Vec<Comment>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u16]) -> Self {
        Self::with_location(
            source,
            SourceLocation {
                line: 1,
                column: 0,
                offset: 0,
            },
        )
    }

    /// Starts scanning at `start`, e.g. to lex a fragment embedded in a
    /// larger document.
    pub fn with_location(source: &'a [u16], start: SourceLocation) -> Self {
        let index = start.offset.min(source.len());
        Self {
            source,
            index,
            line: start.line,
            column: start.column,
            current: source.get(index).map_or(END_OF_SOURCE, |&u| u32::from(u)),
            token_start: index,
            token_line: start.line,
            token_column: start.column,
            flags: TokenFlags::empty(),
            line_start: true,
            comments: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a [u16] {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.index
    }

    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation {
            line: self.line,
            column: self.column,
            offset: self.index,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.current == END_OF_SOURCE
    }

    /// Comments collected under `Context::COLLECT_COMMENTS`, in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn take_comments(&mut self) -> Vec<Comment> {
        std::mem::take(&mut self.comments)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            index: self.index,
            line: self.line,
            column: self.column,
            token_start: self.token_start,
            token_line: self.token_line,
            token_column: self.token_column,
            flags: self.flags,
            line_start: self.line_start,
            comments: self.comments.len(),
        }
    }

    /// Returns to `checkpoint`, dropping comments collected since. This is
    /// also the way to recover the cursor after a lexical error.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.index = checkpoint.index;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
        self.current = self.char_at(self.index);
        self.token_start = checkpoint.token_start;
        self.token_line = checkpoint.token_line;
        self.token_column = checkpoint.token_column;
        self.flags = checkpoint.flags;
        self.line_start = checkpoint.line_start;
        self.comments.truncate(checkpoint.comments);
    }

    /// Scans the next significant token. At the end of input this keeps
    /// returning `Eof` without moving.
    pub fn next_token(&mut self, context: Context) -> LexResult<Token> {
        self.flags = TokenFlags::empty();
        self.skip_trivia(context)?;
        let (kind, value) = self.scan_token(context)?;
        Ok(self.finish(kind, value, context))
    }

    pub fn tokenize_all(&mut self, context: Context) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token(context)?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        Ok(tokens)
    }

    fn scan_token(&mut self, context: Context) -> LexResult<Scanned> {
        self.mark_token_start();
        let ch = self.current;
        if ch == END_OF_SOURCE {
            return Ok((TokenKind::Eof, TokenValue::None));
        }

        if ch < 0x80 {
            let flags = char_flags(ch);
            if flags.contains(CharFlags::IDENTIFIER_START) {
                return self.scan_identifier();
            }
            if flags.contains(CharFlags::DECIMAL) {
                return self.scan_number(context);
            }
            if flags.contains(CharFlags::QUOTE) {
                return self.scan_string(context);
            }
            return match ch as u8 {
                b'`' => {
                    self.advance();
                    self.scan_template_span(context, true)
                }
                b'.' if is_decimal_digit(self.peek()) => self.scan_number(context),
                b'\\' => self.scan_identifier(),
                b'#' => self.scan_private_name(),
                b'/' => self.scan_slash(context),
                _ => self.scan_punctuator(context),
            };
        }

        let (cp, _) = self.current_code_point();
        if is_identifier_start(cp) {
            return self.scan_identifier();
        }
        Err(self.illegal_character(cp))
    }

    fn finish(&mut self, kind: TokenKind, value: TokenValue, context: Context) -> Token {
        let end = self.index;
        let raw = context
            .contains(Context::RAW)
            .then(|| String::from_utf16_lossy(&self.source[self.token_start..end]));
        let end_location = context
            .contains(Context::LOCATIONS)
            .then(|| self.location());
        if kind != TokenKind::Eof {
            self.line_start = false;
        }
        trace!(
            ?kind,
            start = self.token_start,
            end,
            line = self.token_line,
            column = self.token_column,
            "token"
        );
        Token {
            kind,
            value,
            raw,
            start: self.token_start,
            end,
            line: self.token_line,
            column: self.token_column,
            end_location,
            flags: self.flags,
        }
    }

    // Cursor primitives

    #[inline]
    fn char_at(&self, index: usize) -> u32 {
        self.source
            .get(index)
            .map_or(END_OF_SOURCE, |&u| u32::from(u))
    }

    #[inline]
    fn peek(&self) -> u32 {
        self.char_at(self.index + 1)
    }

    #[inline]
    fn peek_is(&self, ahead: usize, unit: u8) -> bool {
        self.char_at(self.index + ahead) == u32::from(unit)
    }

    #[inline]
    fn is(&self, unit: u8) -> bool {
        self.current == u32::from(unit)
    }

    /// Moves one code unit forward on the current line.
    #[inline]
    fn advance(&mut self) {
        if self.index < self.source.len() {
            self.index += 1;
            self.column += 1;
            self.current = self.char_at(self.index);
        }
    }

    #[inline]
    fn advance_by(&mut self, units: usize) {
        let target = (self.index + units).min(self.source.len());
        self.column += (target - self.index) as u32;
        self.index = target;
        self.current = self.char_at(self.index);
    }

    #[inline]
    fn eat(&mut self, unit: u8) -> bool {
        if self.is(unit) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Code point at the cursor and its width in code units. Unpaired
    /// surrogates come back as themselves with width 1.
    fn current_code_point(&self) -> (u32, usize) {
        let ch = self.current;
        if ch == END_OF_SOURCE {
            return (ch, 0);
        }
        if is_lead_surrogate(ch) {
            let next = self.peek();
            if is_trail_surrogate(next) {
                return (combine_surrogates(ch, next), 2);
            }
        }
        (ch, 1)
    }

    /// Consumes the line terminator at the cursor. CRLF counts as one.
    fn consume_line_terminator(&mut self) {
        if self.current == CR && self.peek() == LF {
            self.index += 1;
        }
        self.index += 1;
        self.current = self.char_at(self.index);
        self.line += 1;
        self.column = 0;
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.index;
        self.token_line = self.line;
        self.token_column = self.column;
    }

    fn token_location(&self) -> SourceLocation {
        SourceLocation {
            line: self.token_line,
            column: self.token_column,
            offset: self.token_start,
        }
    }

    /// Puts the cursor back on the first unit of the last token.
    fn rewind_to_token_start(&mut self) {
        self.index = self.token_start;
        self.line = self.token_line;
        self.column = self.token_column;
        self.current = self.char_at(self.index);
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        self.error_at(kind, self.location())
    }

    fn error_at(&self, kind: LexErrorKind, location: SourceLocation) -> LexError {
        debug!(
            %kind,
            line = location.line,
            column = location.column,
            offset = location.offset,
            "lexical error"
        );
        LexError { kind, location }
    }

    fn illegal_character(&self, cp: u32) -> LexError {
        let ch = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.error(LexErrorKind::IllegalCharacter(ch))
    }
}
