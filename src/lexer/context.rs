use bitflags::bitflags;

bitflags! {
    /// Parse-mode toggles handed to every scan call by value.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Context: u32 {
        const STRICT = 1 << 0;
        /// Module goal. Implies strict mode and disables HTML-like comments.
        const MODULE = 1 << 1;
        const JSX = 1 << 2;
        /// The parser is at an expression start, so `/` begins a regexp.
        const ALLOW_REGEXP = 1 << 3;
        /// Scanning the template of a tagged template expression.
        const TAGGED_TEMPLATE = 1 << 4;
        /// Numeric separators and BigInt literals.
        const NEXT = 1 << 5;
        const RAW = 1 << 6;
        const RANGES = 1 << 7;
        const LOCATIONS = 1 << 8;
        const COLLECT_COMMENTS = 1 << 9;
        /// Annex B syntax (HTML-like comments).
        const WEB_COMPAT = 1 << 10;
    }
}

impl Context {
    #[inline]
    pub fn is_strict(self) -> bool {
        self.intersects(Context::STRICT | Context::MODULE)
    }

    #[inline]
    pub fn allows_html_comments(self) -> bool {
        self.contains(Context::WEB_COMPAT) && !self.contains(Context::MODULE)
    }
}

bitflags! {
    /// Facts about a single scanned token.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        /// A line terminator was crossed in the trivia before the token.
        const NEW_LINE_BEFORE = 1 << 0;
        /// Legacy octal (`017`) or NonOctalDecimal (`08`) integer literal.
        const LEGACY_OCTAL = 1 << 1;
        const OCTAL_ESCAPE = 1 << 2;
        /// Identifier or keyword spelled with `\u` escapes.
        const UNICODE_ESCAPE = 1 << 4;
        const NUMERIC_SEPARATOR = 1 << 5;
    }
}

impl TokenFlags {
    /// Whether a later `"use strict"` directive must reject this token.
    pub fn contains_legacy_octal(self) -> bool {
        self.intersects(TokenFlags::LEGACY_OCTAL | TokenFlags::OCTAL_ESCAPE)
    }
}
