use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Identifiers and keywords
    Identifier,
    Keyword(Keyword),
    /// A reserved word written with `\u` escapes; the parser decides whether
    /// it may stand in for an identifier.
    EscapedKeyword(Keyword),
    PrivateName, // #name

    // Literals
    NumericLiteral,
    StringLiteral,
    RegExpLiteral,

    // Template parts
    NoSubstitutionTemplate,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    // Punctuators
    LeftBrace,                // {
    RightBrace,               // }
    LeftParen,                // (
    RightParen,               // )
    LeftBracket,              // [
    RightBracket,             // ]
    Period,                   // .
    Ellipsis,                 // ...
    Semicolon,                // ;
    Comma,                    // ,
    LessThan,                 // <
    GreaterThan,              // >
    LessThanEqual,            // <=
    GreaterThanEqual,         // >=
    Equal,                    // ==
    NotEqual,                 // !=
    StrictEqual,              // ===
    StrictNotEqual,           // !==
    Plus,                     // +
    Minus,                    // -
    Star,                     // *
    Percent,                  // %
    Exponent,                 // **
    Increment,                // ++
    Decrement,                // --
    LeftShift,                // <<
    RightShift,               // >>
    UnsignedRightShift,       // >>>
    Ampersand,                // &
    Pipe,                     // |
    Caret,                    // ^
    Bang,                     // !
    Tilde,                    // ~
    LogicalAnd,               // &&
    LogicalOr,                // ||
    NullishCoalescing,        // ??
    Question,                 // ?
    OptionalChain,            // ?.
    Colon,                    // :
    Assign,                   // =
    PlusAssign,               // +=
    MinusAssign,              // -=
    StarAssign,               // *=
    PercentAssign,            // %=
    ExponentAssign,           // **=
    LeftShiftAssign,          // <<=
    RightShiftAssign,         // >>=
    UnsignedRightShiftAssign, // >>>=
    AmpersandAssign,          // &=
    PipeAssign,               // |=
    CaretAssign,              // ^=
    LogicalAndAssign,         // &&=
    LogicalOrAssign,          // ||=
    NullishAssign,            // ??=
    Arrow,                    // =>
    Slash,                    // /
    SlashAssign,              // /=

    // JSX
    JsxClosingTagStart, // </
    JsxSelfClosing,     // />
    JsxText,

    Eof,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    /// The keyword this token spells, escaped or not.
    pub fn keyword(self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(kw) | TokenKind::EscapedKeyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Identifier-like tokens: what an IdentifierName may be.
    pub fn is_identifier_name(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Keyword(_) | TokenKind::EscapedKeyword(_)
        )
    }

    pub fn is_template(self) -> bool {
        matches!(
            self,
            TokenKind::NoSubstitutionTemplate
                | TokenKind::TemplateHead
                | TokenKind::TemplateMiddle
                | TokenKind::TemplateTail
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    As,
    Async,
    Await,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    From,
    Function,
    Get,
    If,
    Implements,
    Import,
    In,
    Instanceof,
    Interface,
    Let,
    New,
    Null,
    Of,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Set,
    Static,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,
}

impl Keyword {
    pub fn from_str(s: &str) -> Option<Keyword> {
        match s {
            "as" => Some(Keyword::As),
            "async" => Some(Keyword::Async),
            "await" => Some(Keyword::Await),
            "break" => Some(Keyword::Break),
            "case" => Some(Keyword::Case),
            "catch" => Some(Keyword::Catch),
            "class" => Some(Keyword::Class),
            "const" => Some(Keyword::Const),
            "continue" => Some(Keyword::Continue),
            "debugger" => Some(Keyword::Debugger),
            "default" => Some(Keyword::Default),
            "delete" => Some(Keyword::Delete),
            "do" => Some(Keyword::Do),
            "else" => Some(Keyword::Else),
            "enum" => Some(Keyword::Enum),
            "export" => Some(Keyword::Export),
            "extends" => Some(Keyword::Extends),
            "false" => Some(Keyword::False),
            "finally" => Some(Keyword::Finally),
            "for" => Some(Keyword::For),
            "from" => Some(Keyword::From),
            "function" => Some(Keyword::Function),
            "get" => Some(Keyword::Get),
            "if" => Some(Keyword::If),
            "implements" => Some(Keyword::Implements),
            "import" => Some(Keyword::Import),
            "in" => Some(Keyword::In),
            "instanceof" => Some(Keyword::Instanceof),
            "interface" => Some(Keyword::Interface),
            "let" => Some(Keyword::Let),
            "new" => Some(Keyword::New),
            "null" => Some(Keyword::Null),
            "of" => Some(Keyword::Of),
            "package" => Some(Keyword::Package),
            "private" => Some(Keyword::Private),
            "protected" => Some(Keyword::Protected),
            "public" => Some(Keyword::Public),
            "return" => Some(Keyword::Return),
            "set" => Some(Keyword::Set),
            "static" => Some(Keyword::Static),
            "super" => Some(Keyword::Super),
            "switch" => Some(Keyword::Switch),
            "this" => Some(Keyword::This),
            "throw" => Some(Keyword::Throw),
            "true" => Some(Keyword::True),
            "try" => Some(Keyword::Try),
            "typeof" => Some(Keyword::Typeof),
            "var" => Some(Keyword::Var),
            "void" => Some(Keyword::Void),
            "while" => Some(Keyword::While),
            "with" => Some(Keyword::With),
            "yield" => Some(Keyword::Yield),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::As => "as",
            Keyword::Async => "async",
            Keyword::Await => "await",
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Class => "class",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Debugger => "debugger",
            Keyword::Default => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::Export => "export",
            Keyword::Extends => "extends",
            Keyword::False => "false",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::From => "from",
            Keyword::Function => "function",
            Keyword::Get => "get",
            Keyword::If => "if",
            Keyword::Implements => "implements",
            Keyword::Import => "import",
            Keyword::In => "in",
            Keyword::Instanceof => "instanceof",
            Keyword::Interface => "interface",
            Keyword::Let => "let",
            Keyword::New => "new",
            Keyword::Null => "null",
            Keyword::Of => "of",
            Keyword::Package => "package",
            Keyword::Private => "private",
            Keyword::Protected => "protected",
            Keyword::Public => "public",
            Keyword::Return => "return",
            Keyword::Set => "set",
            Keyword::Static => "static",
            Keyword::Super => "super",
            Keyword::Switch => "switch",
            Keyword::This => "this",
            Keyword::Throw => "throw",
            Keyword::True => "true",
            Keyword::Try => "try",
            Keyword::Typeof => "typeof",
            Keyword::Var => "var",
            Keyword::Void => "void",
            Keyword::While => "while",
            Keyword::With => "with",
            Keyword::Yield => "yield",
        }
    }

    /// Words that only carry meaning in particular positions and are plain
    /// identifiers everywhere else.
    pub fn is_contextual(self) -> bool {
        matches!(
            self,
            Keyword::As
                | Keyword::Async
                | Keyword::From
                | Keyword::Get
                | Keyword::Of
                | Keyword::Set
        )
    }

    /// Reserved only in strict mode code.
    pub fn is_strict_reserved(self) -> bool {
        matches!(
            self,
            Keyword::Implements
                | Keyword::Interface
                | Keyword::Let
                | Keyword::Package
                | Keyword::Private
                | Keyword::Protected
                | Keyword::Public
                | Keyword::Static
                | Keyword::Yield
        )
    }

    /// Whether the word can never be an identifier reference in the given
    /// mode. `await` is left to the parser since it depends on the goal and
    /// the enclosing function.
    pub fn is_reserved(self, strict: bool) -> bool {
        if self.is_contextual() || self == Keyword::Await {
            return false;
        }
        if self.is_strict_reserved() {
            return strict;
        }
        true
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_round_trips() {
        for word in ["class", "instanceof", "yield", "true", "null", "of", "implements"] {
            let kw = Keyword::from_str(word).unwrap();
            assert_eq!(kw.as_str(), word);
            assert_eq!(kw.to_string(), word);
        }
        assert_eq!(Keyword::from_str("Class"), None);
        assert_eq!(Keyword::from_str("classes"), None);
    }

    #[test]
    fn reservation_by_mode() {
        assert!(Keyword::Class.is_reserved(false));
        assert!(!Keyword::Let.is_reserved(false));
        assert!(Keyword::Let.is_reserved(true));
        assert!(!Keyword::Of.is_reserved(true));
        assert!(!Keyword::Await.is_reserved(true));
        assert!(Keyword::True.is_reserved(false));
    }

    #[test]
    fn kind_helpers() {
        assert_eq!(
            TokenKind::EscapedKeyword(Keyword::If).keyword(),
            Some(Keyword::If)
        );
        assert!(!TokenKind::EscapedKeyword(Keyword::If).is_keyword());
        assert!(TokenKind::Keyword(Keyword::If).is_identifier_name());
        assert!(TokenKind::TemplateTail.is_template());
        assert!(!TokenKind::StringLiteral.is_template());
    }
}
