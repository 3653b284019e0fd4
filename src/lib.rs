//! ECMAScript lexical analysis over UTF-16 source text.
//!
//! [`lexer::Scanner`] is the parser-facing cursor; [`Tokenizer`] drives it
//! without a parser.

pub mod dump;
pub mod lexer;
pub mod options;
pub mod tokenizer;
pub mod types;

pub use lexer::{
    Comment, CommentKind, Context, Keyword, LexError, LexErrorKind, LexResult, Scanner,
    SourceLocation, Token, TokenFlags, TokenKind, TokenValue,
};
pub use options::ScanOptions;
pub use tokenizer::Tokenizer;
pub use types::JsString;

/// Tokenizes a whole source, `Eof` included, stopping at the first error.
pub fn tokenize(source: &str, context: Context) -> LexResult<Vec<Token>> {
    let units: Vec<u16> = source.encode_utf16().collect();
    Tokenizer::new(&units, context).collect()
}
