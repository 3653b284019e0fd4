use serde::Serialize;
use tracing::trace;

use super::chars::{
    CharFlags, END_OF_SOURCE, LINE_SEPARATOR, PARAGRAPH_SEPARATOR, char_flags, is_line_terminator,
    is_whitespace,
};
use super::{Context, LexErrorKind, LexResult, Scanner, TokenFlags};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    SingleLine,
    MultiLine,
    /// Annex B `<!--`
    HtmlOpen,
    /// Annex B `-->`
    HtmlClose,
    Hashbang,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub kind: CommentKind,
    /// Interior text, delimiters excluded.
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Scanner<'_> {
    /// Skips whitespace, line terminators and comments up to the next
    /// significant code unit.
    pub(super) fn skip_trivia(&mut self, context: Context) -> LexResult<()> {
        loop {
            let ch = self.current;
            if ch < 0x80 {
                let flags = char_flags(ch);
                if flags.contains(CharFlags::WHITESPACE) {
                    self.advance();
                    continue;
                }
                if flags.contains(CharFlags::LINE_TERMINATOR) {
                    self.skip_line_terminator();
                    continue;
                }
                match ch as u8 {
                    b'/' if self.peek_is(1, b'/') => {
                        self.skip_single_line_comment(context, CommentKind::SingleLine, 2)
                    }
                    b'/' if self.peek_is(1, b'*') => self.skip_multi_line_comment(context)?,
                    b'<' if context.allows_html_comments()
                        && self.peek_is(1, b'!')
                        && self.peek_is(2, b'-')
                        && self.peek_is(3, b'-') =>
                    {
                        self.skip_single_line_comment(context, CommentKind::HtmlOpen, 4)
                    }
                    b'-' if context.allows_html_comments()
                        && self.line_start
                        && self.peek_is(1, b'-')
                        && self.peek_is(2, b'>') =>
                    {
                        self.skip_single_line_comment(context, CommentKind::HtmlClose, 3)
                    }
                    b'#' if self.index == 0 && self.peek_is(1, b'!') => {
                        self.skip_single_line_comment(context, CommentKind::Hashbang, 2)
                    }
                    _ => return Ok(()),
                }
            } else {
                match ch {
                    END_OF_SOURCE => return Ok(()),
                    LINE_SEPARATOR | PARAGRAPH_SEPARATOR => self.skip_line_terminator(),
                    _ if is_whitespace(ch) => self.advance(),
                    _ => return Ok(()),
                }
            }
        }
    }

    fn skip_line_terminator(&mut self) {
        self.consume_line_terminator();
        self.flags |= TokenFlags::NEW_LINE_BEFORE;
        self.line_start = true;
    }

    fn skip_single_line_comment(&mut self, context: Context, kind: CommentKind, opener: usize) {
        let (start, line, column) = (self.index, self.line, self.column);
        self.advance_by(opener);
        let text_start = self.index;
        while self.current != END_OF_SOURCE && !is_line_terminator(self.current) {
            self.advance();
        }
        self.record_comment(context, kind, start, text_start, self.index, line, column);
    }

    fn skip_multi_line_comment(&mut self, context: Context) -> LexResult<()> {
        let (start, line, column) = (self.index, self.line, self.column);
        self.advance_by(2);
        let text_start = self.index;
        loop {
            let ch = self.current;
            if ch == END_OF_SOURCE {
                return Err(self.error(LexErrorKind::UnterminatedComment));
            }
            if self.is(b'*') && self.peek_is(1, b'/') {
                let text_end = self.index;
                self.advance_by(2);
                self.record_comment(
                    context,
                    CommentKind::MultiLine,
                    start,
                    text_start,
                    text_end,
                    line,
                    column,
                );
                return Ok(());
            }
            if is_line_terminator(ch) {
                self.skip_line_terminator();
            } else {
                self.advance();
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn record_comment(
        &mut self,
        context: Context,
        kind: CommentKind,
        start: usize,
        text_start: usize,
        text_end: usize,
        start_line: u32,
        start_column: u32,
    ) {
        if !context.contains(Context::COLLECT_COMMENTS) {
            return;
        }
        let comment = Comment {
            kind,
            text: String::from_utf16_lossy(&self.source[text_start..text_end]),
            start,
            end: self.index,
            start_line,
            start_column,
            end_line: self.line,
            end_column: self.column,
        };
        trace!(?kind, start, end = comment.end, "comment");
        self.comments.push(comment);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{kinds_with, lex_with, utf16};
    use super::*;
    use crate::lexer::TokenKind;

    fn comments(src: &str, context: Context) -> Vec<Comment> {
        let source = utf16(src);
        let mut scanner = Scanner::new(&source);
        scanner
            .tokenize_all(context | Context::COLLECT_COMMENTS)
            .unwrap();
        scanner.take_comments()
    }

    #[test]
    fn single_line_comment_position() {
        let source = utf16("// foo\n   ");
        let mut scanner = Scanner::new(&source);
        let token = scanner.next_token(Context::empty()).unwrap();
        assert_eq!(token.kind, TokenKind::Eof);
        let loc = scanner.location();
        assert_eq!((loc.line, loc.column, loc.offset), (2, 3, 10));
    }

    #[test]
    fn multi_line_comment_counts_lines() {
        let tokens = lex_with("/* a\r\nb\rc\u{2029}d */x", Context::empty()).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!((tokens[0].line, tokens[0].column), (4, 4));
        assert!(tokens[0].newline_before());
    }

    #[test]
    fn comment_without_newline_keeps_flag_clear() {
        let tokens = lex_with("a /* b */ c", Context::empty()).unwrap();
        assert!(!tokens[1].newline_before());
    }

    #[test]
    fn unterminated_multi_line_comment() {
        let err = lex_with("a /* b\n c", Context::empty()).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!((err.location.line, err.location.column), (2, 2));
    }

    #[test]
    fn collects_comments_with_spans() {
        let found = comments("a // one\n/* two\n */ b", Context::empty());
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].kind, CommentKind::SingleLine);
        assert_eq!(found[0].text, " one");
        assert_eq!((found[0].start, found[0].end), (2, 8));
        assert_eq!(found[1].kind, CommentKind::MultiLine);
        assert_eq!(found[1].text, " two\n ");
        assert_eq!((found[1].start_line, found[1].start_column), (2, 0));
        assert_eq!((found[1].end_line, found[1].end_column), (3, 3));
    }

    #[test]
    fn collecting_does_not_change_tokens() {
        let src = "a /* x */ + // y\n b";
        let plain = lex_with(src, Context::empty()).unwrap();
        let collected = lex_with(src, Context::COLLECT_COMMENTS).unwrap();
        assert_eq!(plain, collected);
    }

    #[test]
    fn html_open_comment() {
        let context = Context::WEB_COMPAT;
        assert_eq!(kinds_with("a <!-- b\nc", context), vec![TokenKind::Identifier; 2]);
        let found = comments("x <!-- hidden", context);
        assert_eq!(found[0].kind, CommentKind::HtmlOpen);
        assert_eq!(found[0].text, " hidden");
    }

    #[test]
    fn html_open_comment_needs_web_compat_script() {
        assert_eq!(
            kinds_with("a <!-- b", Context::empty()),
            vec![
                TokenKind::Identifier,
                TokenKind::LessThan,
                TokenKind::Bang,
                TokenKind::Decrement,
                TokenKind::Identifier,
            ]
        );
        let module = Context::WEB_COMPAT | Context::MODULE;
        assert_eq!(kinds_with("a <!-- b", module).len(), 5);
    }

    #[test]
    fn html_close_comment_only_at_line_start() {
        let context = Context::WEB_COMPAT;
        assert_eq!(
            kinds_with("a\n--> comment\nb", context),
            vec![TokenKind::Identifier, TokenKind::Identifier]
        );
        assert_eq!(
            kinds_with("--> at start", context),
            Vec::<TokenKind>::new()
        );
        assert_eq!(
            kinds_with("/*\n*/ --> c", context),
            Vec::<TokenKind>::new()
        );
        assert_eq!(
            kinds_with("a-->b", context),
            vec![
                TokenKind::Identifier,
                TokenKind::Decrement,
                TokenKind::GreaterThan,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(
            kinds_with("a /* */ --> b", context),
            vec![
                TokenKind::Identifier,
                TokenKind::Decrement,
                TokenKind::GreaterThan,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn hashbang_only_at_offset_zero() {
        let found = comments("#!/usr/bin/env node\nx", Context::empty());
        assert_eq!(found[0].kind, CommentKind::Hashbang);
        assert_eq!(found[0].text, "/usr/bin/env node");
        assert!(lex_with(" #!x", Context::empty()).is_err());
    }

    #[test]
    fn unicode_whitespace_is_skipped() {
        let tokens = lex_with("\u{FEFF}\u{00A0}a\u{3000}b", Context::empty()).unwrap();
        assert_eq!((tokens[0].start, tokens[0].column), (2, 2));
        assert_eq!(tokens[1].start, 4);
    }

    #[test]
    fn ascii_whitespace_and_terminators() {
        let tokens = lex_with("\t\u{B}\u{C} a\r\n\rb", Context::empty()).unwrap();
        assert_eq!((tokens[0].start, tokens[0].column), (4, 4));
        assert!(!tokens[0].newline_before());
        assert_eq!((tokens[1].line, tokens[1].column, tokens[1].start), (3, 0, 8));
        assert!(tokens[1].newline_before());
    }
}
