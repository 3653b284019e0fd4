use serde::Deserialize;

use crate::lexer::Context;

/// User-facing scan configuration, as read from a JSON config file or built
/// from command-line flags.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ScanOptions {
    /// Module goal; implies strict mode.
    pub module: bool,
    pub implied_strict: bool,
    pub jsx: bool,
    /// Numeric separators and BigInt literals.
    pub next: bool,
    pub raw: bool,
    pub ranges: bool,
    pub loc: bool,
    pub comments: bool,
    /// Annex B HTML-like comments in scripts.
    pub webcompat: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            module: false,
            implied_strict: false,
            jsx: false,
            next: false,
            raw: false,
            ranges: false,
            loc: false,
            comments: false,
            webcompat: true,
        }
    }
}

impl ScanOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The initial context for a scan with these options.
    pub fn context(&self) -> Context {
        let mut context = Context::empty();
        context.set(Context::MODULE, self.module);
        context.set(Context::STRICT, self.implied_strict || self.module);
        context.set(Context::JSX, self.jsx);
        context.set(Context::NEXT, self.next);
        context.set(Context::RAW, self.raw);
        context.set(Context::RANGES, self.ranges);
        context.set(Context::LOCATIONS, self.loc);
        context.set(Context::COLLECT_COMMENTS, self.comments);
        context.set(Context::WEB_COMPAT, self.webcompat);
        context
    }
}
