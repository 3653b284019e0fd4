//! Parser-free token stream.
//!
//! A [`Scanner`] needs the parser to say when `/` starts a regular
//! expression and when a `}` resumes a template. [`Tokenizer`] makes those
//! calls from the previous token instead, which is enough for dumping and
//! highlighting but not for every corner of the grammar (`if (x) /re/`
//! lexes as division).

use crate::lexer::{Context, Keyword, LexResult, Scanner, Token, TokenKind};

/// An open `${` and the brace depth it was opened at.
#[derive(Clone, Copy, Debug)]
struct Substitution {
    depth: u32,
    tagged: bool,
}

pub struct Tokenizer<'a> {
    scanner: Scanner<'a>,
    context: Context,
    previous: Option<TokenKind>,
    braces: u32,
    substitutions: Vec<Substitution>,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a [u16], context: Context) -> Self {
        Self {
            scanner: Scanner::new(source),
            context,
            previous: None,
            braces: 0,
            substitutions: Vec::new(),
            done: false,
        }
    }

    pub fn scanner(&self) -> &Scanner<'a> {
        &self.scanner
    }

    pub fn into_scanner(self) -> Scanner<'a> {
        self.scanner
    }

    /// The next token and whether it was scanned as part of a tagged
    /// template.
    fn next_token(&mut self) -> LexResult<(Token, bool)> {
        let tagged = self.previous.is_some_and(ends_expression);
        let context = if tagged {
            self.context | Context::TAGGED_TEMPLATE
        } else {
            self.context | Context::ALLOW_REGEXP
        };

        let token = self.scanner.next_token(context)?;
        if token.kind == TokenKind::RightBrace
            && let Some(open) = self.substitutions.last().copied()
            && open.depth == self.braces
        {
            self.substitutions.pop();
            let mut context = self.context;
            if open.tagged {
                context |= Context::TAGGED_TEMPLATE;
            }
            let token = self.scanner.scan_template_continuation(context)?;
            return Ok((token, open.tagged));
        }
        Ok((token, tagged))
    }

    fn track(&mut self, token: &Token, tagged: bool) {
        match token.kind {
            TokenKind::LeftBrace => self.braces += 1,
            TokenKind::RightBrace => self.braces = self.braces.saturating_sub(1),
            TokenKind::TemplateHead | TokenKind::TemplateMiddle => {
                self.substitutions.push(Substitution {
                    depth: self.braces,
                    tagged,
                });
            }
            _ => {}
        }
        self.previous = Some(token.kind);
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok((token, tagged)) => {
                self.done = token.kind == TokenKind::Eof;
                self.track(&token, tagged);
                Some(Ok(token))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Whether a `/` after this token is division. Mirrors the
/// InputElementDiv goal: the token could end an expression.
fn ends_expression(kind: TokenKind) -> bool {
    match kind {
        TokenKind::Identifier
        | TokenKind::EscapedKeyword(_)
        | TokenKind::PrivateName
        | TokenKind::NumericLiteral
        | TokenKind::StringLiteral
        | TokenKind::RegExpLiteral
        | TokenKind::NoSubstitutionTemplate
        | TokenKind::TemplateTail
        | TokenKind::RightParen
        | TokenKind::RightBracket
        | TokenKind::RightBrace
        | TokenKind::Increment
        | TokenKind::Decrement => true,
        TokenKind::Keyword(kw) => {
            kw.is_contextual()
                || matches!(
                    kw,
                    Keyword::This | Keyword::Super | Keyword::Null | Keyword::True | Keyword::False
                )
        }
        _ => false,
    }
}
