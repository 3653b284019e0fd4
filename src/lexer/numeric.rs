use num_bigint::BigInt;

use super::chars::{BACKSLASH, as_ascii, digit_value, is_decimal_digit, is_octal_digit};
use super::unicode::is_identifier_start;
use super::{
    Context, LexErrorKind, LexResult, Scanned, Scanner, SourceLocation, TokenFlags, TokenKind,
    TokenValue,
};

/// Integers up to this many digits are exact in the accumulated f64.
const MAX_EXACT_DIGITS: usize = 15;

/// Digits consumed by [`Scanner::scan_digits`], separators excluded.
struct DigitRun {
    count: usize,
    value: f64,
}

impl Scanner<'_> {
    /// NumericLiteral starting at a decimal digit, or at a `.` followed by one.
    pub(super) fn scan_number(&mut self, context: Context) -> LexResult<Scanned> {
        if self.is(b'0') {
            let next = self.peek();
            match as_ascii(next) | 0x20 {
                b'x' => return self.scan_radix_number(context, 16),
                b'o' => return self.scan_radix_number(context, 8),
                b'b' => return self.scan_radix_number(context, 2),
                _ => {}
            }
            if is_decimal_digit(next) {
                return self.scan_legacy_number(context);
            }
            if next == u32::from(b'_') && context.contains(Context::NEXT) {
                self.advance();
                return Err(self.error(LexErrorKind::InvalidNumericSeparator));
            }
        }
        self.scan_decimal_number(context)
    }

    fn scan_decimal_number(&mut self, context: Context) -> LexResult<Scanned> {
        let start = self.index;
        let integer = self.scan_digits(context, 10)?;
        if self.is(b'n') && context.contains(Context::NEXT) {
            return self.finish_bigint(start, start, 10);
        }

        let mut is_integer = true;
        if self.eat(b'.') {
            is_integer = false;
            self.scan_digits(context, 10)?;
        }
        if self.scan_exponent(context)? {
            is_integer = false;
        }
        self.finish_decimal(context, start, is_integer, &integer)
    }

    /// `0x`, `0o` and `0b` literals.
    fn scan_radix_number(&mut self, context: Context, radix: u32) -> LexResult<Scanned> {
        let start = self.index;
        self.advance_by(2);
        let digits = self.scan_digits(context, radix)?;
        if digits.count == 0 {
            return Err(self.error(LexErrorKind::MissingDigits(radix)));
        }
        if self.is(b'n') && context.contains(Context::NEXT) {
            return self.finish_bigint(start, start + 2, radix);
        }
        self.check_numeric_end()?;
        let value = self.radix_value(start + 2, radix, &digits);
        Ok((TokenKind::NumericLiteral, TokenValue::Number(value)))
    }

    /// A `0` followed by more digits: LegacyOctalIntegerLiteral (`017`) when
    /// every digit is octal, NonOctalDecimalIntegerLiteral (`089`) otherwise.
    fn scan_legacy_number(&mut self, context: Context) -> LexResult<Scanned> {
        let start_location = self.location();
        let start = self.index;
        let mut octal = true;
        let mut run = DigitRun {
            count: 0,
            value: 0.0,
        };
        while is_decimal_digit(self.current) {
            octal &= is_octal_digit(self.current);
            run.value = run.value * 8.0 + f64::from(self.current - u32::from(b'0'));
            run.count += 1;
            self.advance();
        }

        if octal {
            if context.is_strict() {
                return Err(self.error_at(LexErrorKind::StrictOctalLiteral, start_location));
            }
            self.flags |= TokenFlags::LEGACY_OCTAL;
            if self.is(b'n') && context.contains(Context::NEXT) {
                return Err(self.error(LexErrorKind::InvalidBigInt));
            }
            self.check_numeric_end()?;
            let value = self.radix_value(start, 8, &run);
            return Ok((TokenKind::NumericLiteral, TokenValue::Number(value)));
        }

        if context.is_strict() {
            return Err(self.error_at(LexErrorKind::StrictLeadingZero, start_location));
        }
        self.flags |= TokenFlags::LEGACY_OCTAL;
        if self.eat(b'.') {
            self.scan_digits(context, 10)?;
        }
        self.scan_exponent(context)?;
        self.finish_decimal(context, start, false, &DigitRun { count: 0, value: 0.0 })
    }

    fn finish_decimal(
        &mut self,
        context: Context,
        start: usize,
        is_integer: bool,
        integer: &DigitRun,
    ) -> LexResult<Scanned> {
        if self.is(b'n') && context.contains(Context::NEXT) {
            return Err(self.error(LexErrorKind::InvalidBigInt));
        }
        self.check_numeric_end()?;
        let value = if is_integer && integer.count <= MAX_EXACT_DIGITS {
            integer.value
        } else {
            self.parse_decimal_slice(start)?
        };
        Ok((TokenKind::NumericLiteral, TokenValue::Number(value)))
    }

    /// Optional `e`/`E` part. Returns whether one was present.
    fn scan_exponent(&mut self, context: Context) -> LexResult<bool> {
        if as_ascii(self.current) | 0x20 != b'e' {
            return Ok(false);
        }
        self.advance();
        if self.is(b'+') || self.is(b'-') {
            self.advance();
        }
        if self.scan_digits(context, 10)?.count == 0 {
            return Err(self.error(LexErrorKind::MissingExponent));
        }
        Ok(true)
    }

    /// Digits of `radix`, with `_` separators between digits under
    /// `Context::NEXT`.
    fn scan_digits(&mut self, context: Context, radix: u32) -> LexResult<DigitRun> {
        let separators = context.contains(Context::NEXT);
        let mut run = DigitRun {
            count: 0,
            value: 0.0,
        };
        let mut after_separator = false;
        loop {
            if let Some(digit) = digit_value(self.current, radix) {
                run.value = run.value * f64::from(radix) + f64::from(digit);
                run.count += 1;
                after_separator = false;
            } else if separators && self.is(b'_') {
                if run.count == 0 {
                    return Err(self.error(LexErrorKind::InvalidNumericSeparator));
                }
                if after_separator {
                    return Err(self.error(LexErrorKind::DoubleNumericSeparator));
                }
                after_separator = true;
                self.flags |= TokenFlags::NUMERIC_SEPARATOR;
            } else {
                break;
            }
            self.advance();
        }

        if after_separator {
            let separator = SourceLocation {
                line: self.line,
                column: self.column - 1,
                offset: self.index - 1,
            };
            return Err(self.error_at(LexErrorKind::TrailingNumericSeparator, separator));
        }
        Ok(run)
    }

    /// Consumes the `n` suffix and builds the arbitrary-precision value from
    /// the digits in `digits_start..`.
    fn finish_bigint(
        &mut self,
        start: usize,
        digits_start: usize,
        radix: u32,
    ) -> LexResult<Scanned> {
        let digits: Vec<u8> = self.source[digits_start..self.index]
            .iter()
            .filter(|&&unit| unit != u16::from(b'_'))
            .map(|&unit| unit as u8)
            .collect();
        let value = BigInt::parse_bytes(&digits, radix)
            .ok_or_else(|| self.error(LexErrorKind::InvalidBigInt))?;
        self.advance();
        self.check_numeric_end()?;
        let literal = String::from_utf16_lossy(&self.source[start..self.index]);
        Ok((TokenKind::NumericLiteral, TokenValue::BigInt { value, literal }))
    }

    /// The source character after a numeric literal must not start an
    /// identifier or continue the digits.
    fn check_numeric_end(&self) -> LexResult<()> {
        let (cp, _) = self.current_code_point();
        if is_decimal_digit(cp) || cp == BACKSLASH || is_identifier_start(cp) {
            return Err(self.error(LexErrorKind::IdentifierAfterNumber));
        }
        Ok(())
    }

    /// The value of a radix literal's digits in `digits_start..index`. Runs
    /// wider than the f64 mantissa go through an exact BigInt so the result
    /// is rounded once.
    fn radix_value(&self, digits_start: usize, radix: u32, run: &DigitRun) -> f64 {
        if run.count as u32 * radix.trailing_zeros() <= f64::MANTISSA_DIGITS {
            return run.value;
        }
        let digits: Vec<u8> = self.source[digits_start..self.index]
            .iter()
            .filter(|&&unit| unit != u16::from(b'_'))
            .map(|&unit| unit as u8)
            .collect();
        BigInt::parse_bytes(&digits, radix)
            .and_then(|value| value.to_string().parse::<f64>().ok())
            .unwrap_or(run.value)
    }

    fn parse_decimal_slice(&self, start: usize) -> LexResult<f64> {
        let text: String = self.source[start..self.index]
            .iter()
            .filter(|&&unit| unit != u16::from(b'_'))
            .map(|&unit| char::from(unit as u8))
            .collect();
        text.parse::<f64>()
            .map_err(|_| self.error_at(LexErrorKind::InvalidNumericLiteral, self.token_location()))
    }
}
