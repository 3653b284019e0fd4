use thiserror::Error;

/// A point in the source. Offsets and columns count UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

/// Why an escape sequence could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EscapeErrorKind {
    #[error("Octal escape sequences are not allowed in strict mode")]
    StrictOctal,
    #[error("Octal escape sequences are not allowed in template strings")]
    TemplateOctal,
    #[error("\\8 and \\9 are not allowed in escape sequences")]
    EightOrNine,
    #[error("Invalid hexadecimal escape sequence")]
    InvalidHex,
    #[error("Invalid Unicode escape sequence")]
    InvalidUnicode,
    #[error("Undefined Unicode code-point")]
    OutOfRange,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated template literal")]
    UnterminatedTemplate,
    #[error("Unterminated comment")]
    UnterminatedComment,
    #[error("Unterminated regular expression")]
    UnterminatedRegExp,
    #[error("{0}")]
    InvalidEscape(EscapeErrorKind),
    #[error("Invalid Unicode escape sequence in identifier")]
    InvalidIdentifierEscape,
    #[error("Octal literals are not allowed in strict mode")]
    StrictOctalLiteral,
    #[error("Decimals with leading zeros are not allowed in strict mode")]
    StrictLeadingZero,
    #[error("Invalid or unexpected token '{0}'")]
    IllegalCharacter(char),
    #[error("Identifier starts immediately after numeric literal")]
    IdentifierAfterNumber,
    #[error("Expected digits after the radix-{0} prefix")]
    MissingDigits(u32),
    #[error("Missing digits in exponent")]
    MissingExponent,
    #[error("Numeric separators are not allowed here")]
    InvalidNumericSeparator,
    #[error("Only one underscore is allowed as numeric separator")]
    DoubleNumericSeparator,
    #[error("Numeric separators are not allowed at the end of numeric literals")]
    TrailingNumericSeparator,
    #[error("Invalid numeric literal")]
    InvalidNumericLiteral,
    #[error("Invalid BigInt syntax")]
    InvalidBigInt,
    #[error("Invalid regular expression flag '{0}'")]
    InvalidRegExpFlag(char),
    #[error("Duplicate regular expression flag '{0}'")]
    DuplicateRegExpFlag(char),
    #[error("Regular expression flags 'u' and 'v' cannot be combined")]
    ConflictingRegExpFlags,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}:{}: {}", .location.line, .location.column, .kind)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

impl LexError {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The escape sub-kind, when this error came from escape decoding.
    pub fn escape_kind(&self) -> Option<EscapeErrorKind> {
        match self.kind {
            LexErrorKind::InvalidEscape(kind) => Some(kind),
            _ => None,
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;
